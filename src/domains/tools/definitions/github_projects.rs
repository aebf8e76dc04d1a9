//! `get_github_project` - GitHub Project board lookup for issue assignment.

use serde_json::{Value, json};

use crate::domains::tools::registry::{ToolDef, ToolHandler};
use crate::domains::tools::schema::{ParamKind, ParamSchema, ParamSpec};

const PARAMS: ParamSchema = ParamSchema(&[ParamSpec {
    name: "type",
    description: "Issue type: 'parent' for epics, or repo name for repo-specific issues",
    kind: ParamKind::String,
    required: true,
    allowed: Some(&["parent", "gridiron", "gridiron-web", "gridiron-engine"]),
}]);

pub fn definition() -> ToolDef {
    ToolDef {
        name: "get_github_project",
        description: "Get the correct GitHub Project for a given issue type or repository",
        schema: PARAMS,
        handler: ToolHandler::Lookup {
            param: "type",
            subject: "type",
            table,
        },
    }
}

fn table() -> Value {
    json!({
        "parent": {
            "name": "Goal To Go Football",
            "projectNumber": 4,
            "url": "https://github.com/orgs/merciless-creations/projects/4",
            "usage": "Parent/epic issues that span multiple repos",
            "assignCommand": "gh issue create --project \"Goal To Go Football\"",
        },
        "gridiron": {
            "name": "Gridiron Roadmap",
            "projectNumber": 1,
            "url": "https://github.com/orgs/merciless-creations/projects/1",
            "usage": "API backend issues (C# .NET)",
            "assignCommand": "gh issue create --project \"Gridiron Roadmap\"",
        },
        "gridiron-web": {
            "name": "Web Roadmap",
            "projectNumber": 3,
            "url": "https://github.com/orgs/merciless-creations/projects/3",
            "usage": "Frontend issues (React/TypeScript)",
            "assignCommand": "gh issue create --project \"Web Roadmap\"",
        },
        "gridiron-engine": {
            "name": "Engine Roadmap",
            "projectNumber": 2,
            "url": "https://github.com/orgs/merciless-creations/projects/2",
            "usage": "Game simulation engine issues",
            "assignCommand": "gh issue create --project \"Engine Roadmap\"",
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_keys_match_schema_enum() {
        let table = table();
        let allowed = PARAMS.0[0].allowed.unwrap();
        assert_eq!(table.as_object().unwrap().len(), allowed.len());
        for key in allowed {
            assert!(table.get(*key).is_some(), "missing entry: {key}");
        }
    }

    #[test]
    fn test_project_numbers_are_distinct() {
        let table = table();
        let mut numbers: Vec<i64> = table
            .as_object()
            .unwrap()
            .values()
            .map(|entry| entry["projectNumber"].as_i64().unwrap())
            .collect();
        numbers.sort_unstable();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_parent_board() {
        let table = table();
        assert_eq!(table["parent"]["name"], json!("Goal To Go Football"));
        assert_eq!(table["parent"]["projectNumber"], json!(4));
    }
}
