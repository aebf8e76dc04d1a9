//! `get_hard_rules` - the absolute project rules.

use serde_json::{Value, json};

use crate::domains::tools::registry::{ToolDef, ToolHandler};
use crate::domains::tools::schema::ParamSchema;

pub fn definition() -> ToolDef {
    ToolDef {
        name: "get_hard_rules",
        description: "Get the absolute rules that must never be violated in this project",
        schema: ParamSchema::EMPTY,
        handler: ToolHandler::Fixed(payload),
    }
}

fn payload() -> Value {
    json!({
        "git": {
            "rule": "NEVER commit or push directly to main/master",
            "reason": "Violations break CI/CD and require manual cleanup",
            "process": [
                "1. Create feature branch from master",
                "2. Make changes and commit to feature branch",
                "3. Push feature branch to origin",
                "4. Create Pull Request",
                "5. Wait for approval - Scott merges after CI passes",
            ],
            "branchNaming": {
                "feature/": "New features or enhancements",
                "fix/": "Bug fixes",
                "chore/": "Maintenance, refactoring, docs",
            },
        },
        "architecture": {
            "rule": "ONLY the DataAccessLayer project may access the database",
            "reason": "Separation of concerns, testability, maintainability",
            "forbidden": [
                "GridironDbContext references outside DataAccessLayer",
                "Direct use of DbContext, DbSet<T>, or Entity Framework",
                "LINQ queries against the database outside repositories",
                "Include(), FirstOrDefaultAsync(), ToListAsync() outside DAL",
            ],
            "allowed": [
                "Repository interfaces (ITeamRepository, etc.)",
                "Calling repository methods like GetByIdAsync(), AddAsync()",
            ],
        },
        "testing": {
            "rule": "ALL tests must be deterministic",
            "forbidden": [
                "Random values without fixed seeds",
                "Conditional assertions based on random outcomes",
                "Time-dependent assertions without mocking",
                "Tests that depend on external state",
            ],
            "required": "Use fixed seeds: var game = new Game { RandomSeed = 12345 };",
        },
        "interaction": {
            "rule": "WAIT FOR EXPLICIT APPROVAL before implementing",
            "process": [
                "Plan first - analyze and propose before coding",
                "Document before coding - agree on HOW before WHAT",
                "One step at a time - don't chain assumptions",
                "Ask Scott when uncertain - do not assume or estimate",
            ],
        },
        "engine": {
            "rule": "Do NOT model formations, play names, or presentation concerns",
            "reason": "Engine outputs what happened; presentation adds flavor",
            "forbidden": [
                "Formation names in simulation logic",
                "Specific play names",
                "Audibles or pre-snap reads",
                "Motion and shifts",
                "Broadcast-style presentation",
            ],
        },
    })
}
