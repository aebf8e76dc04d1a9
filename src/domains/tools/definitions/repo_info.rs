//! `get_repo_info` - per-repository metadata lookup.

use serde_json::{Value, json};

use crate::domains::tools::registry::{ToolDef, ToolHandler};
use crate::domains::tools::schema::{ParamKind, ParamSchema, ParamSpec};

const PARAMS: ParamSchema = ParamSchema(&[ParamSpec {
    name: "repo",
    description: "The repository name",
    kind: ParamKind::String,
    required: true,
    allowed: Some(&["gridiron", "gridiron-web", "gridiron-engine", "gridiron-meta"]),
}]);

pub fn definition() -> ToolDef {
    ToolDef {
        name: "get_repo_info",
        description: "Get detailed information about a specific Gridiron repository",
        schema: PARAMS,
        handler: ToolHandler::Lookup {
            param: "repo",
            subject: "repository",
            table,
        },
    }
}

fn table() -> Value {
    json!({
        "gridiron": {
            "name": "gridiron",
            "description": "C# .NET 8 API backend",
            "language": "C#",
            "framework": ".NET 8",
            "database": "Azure SQL with Entity Framework Core 8",
            "testing": "MSTest (839 tests)",
            "purpose": "REST API, authentication, data persistence, game management services",
            "architecture": "Controllers → Services → Repositories",
            "keyProjects": [
                "Gridiron.WebApi - REST API",
                "DomainObjects - Domain models",
                "DataAccessLayer - EF Core persistence",
                "GameManagement - Player/team builder services",
            ],
            "githubProject": "Project 1 (Gridiron Roadmap)",
            "projectUrl": "https://github.com/orgs/merciless-creations/projects/1",
            "repoUrl": "https://github.com/merciless-creations/gridiron",
        },
        "gridiron-web": {
            "name": "gridiron-web",
            "description": "React/TypeScript frontend",
            "language": "TypeScript",
            "framework": "React 18",
            "buildTool": "Vite",
            "styling": "TailwindCSS",
            "stateManagement": "TanStack Query (React Query)",
            "auth": "Azure AD B2C / MSAL",
            "testing": "Vitest (unit), Playwright (E2E)",
            "hosting": "Azure Static Web Apps",
            "purpose": "User interface, client-side logic, API integration",
            "designSystem": "Dark mode, sports broadcast aesthetic",
            "githubProject": "Project 3 (Web Roadmap)",
            "projectUrl": "https://github.com/orgs/merciless-creations/projects/3",
            "repoUrl": "https://github.com/merciless-creations/gridiron-web",
        },
        "gridiron-engine": {
            "name": "gridiron-engine",
            "description": "State machine-based NFL football simulation engine",
            "language": "C#",
            "framework": ".NET",
            "testing": "800+ unit tests",
            "distribution": "NuGet package on GitHub Packages",
            "purpose": "Play-by-play simulation, outcome calculation, game state management",
            "keyFeatures": [
                "19 game states with Stateless library",
                "Probability-driven outcomes based on player skills",
                "Deterministic simulation with seed support",
                "Penalty system, injury tracking, clock management",
            ],
            "philosophy": "Outcome-first - determines what happened, not formations/play names",
            "keyFiles": [
                "Simulation/Configuration/GameProbabilities.cs - All probability constants",
                "Simulation/Decision/ - Decision engines",
                "Simulation/Mechanics/ - Game mechanics",
            ],
            "githubProject": "Project 2 (Engine Roadmap)",
            "projectUrl": "https://github.com/orgs/merciless-creations/projects/2",
            "repoUrl": "https://github.com/merciless-creations/gridiron-engine",
        },
        "gridiron-meta": {
            "name": "gridiron-meta",
            "description": "Shared configuration and tooling for the multi-repo project",
            "purpose": "Claude Code shared commands, MCP server, cross-repo documentation",
            "contains": [
                ".claude/commands/ - Shared slash commands (dev, plan, qa, requirements, review)",
                "CLAUDE.md - Shared project instructions",
                "mcp-server/ - This MCP server",
            ],
            "parentProject": "Goal To Go Football (Project 4)",
            "projectUrl": "https://github.com/orgs/merciless-creations/projects/4",
        },
    })
}
