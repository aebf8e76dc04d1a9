//! `get_tech_stack` - complete technology stack summary.

use serde_json::{Value, json};

use crate::domains::tools::registry::{ToolDef, ToolHandler};
use crate::domains::tools::schema::ParamSchema;

pub fn definition() -> ToolDef {
    ToolDef {
        name: "get_tech_stack",
        description: "Get the complete technology stack for the Gridiron project",
        schema: ParamSchema::EMPTY,
        handler: ToolHandler::Fixed(payload),
    }
}

fn payload() -> Value {
    json!({
        "backend": {
            "language": "C# 12",
            "framework": ".NET 8",
            "database": "Azure SQL",
            "orm": "Entity Framework Core 8",
            "stateMachine": "Stateless library",
            "testing": "MSTest (839+ tests)",
            "hosting": "Azure",
        },
        "frontend": {
            "language": "TypeScript",
            "framework": "React 18",
            "buildTool": "Vite",
            "styling": "TailwindCSS",
            "routing": "React Router v6",
            "stateManagement": "TanStack Query (React Query)",
            "httpClient": "Axios",
            "auth": "Azure AD B2C / MSAL",
            "unitTesting": "Vitest + React Testing Library + MSW",
            "e2eTesting": "Playwright",
            "hosting": "Azure Static Web Apps",
        },
        "engine": {
            "language": "C#",
            "framework": ".NET",
            "pattern": "State machine (19 states)",
            "distribution": "NuGet package on GitHub Packages",
            "testing": "800+ unit tests",
            "features": [
                "Probability-driven outcomes",
                "Deterministic simulation with seeds",
                "Complete NFL rules (downs, penalties, injuries)",
            ],
        },
        "devOps": {
            "versionControl": "Git / GitHub",
            "ci": "GitHub Actions",
            "projects": "GitHub Projects (4 boards)",
            "organization": "merciless-creations",
        },
    })
}
