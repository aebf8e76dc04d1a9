//! `list_resources` - grouped catalog of every documentation resource.
//!
//! The payload is derived from the resource catalog itself, so this tool can
//! never drift from what `resources/list` actually serves.

use serde_json::{Map, Value, json};

use crate::domains::resources::CATALOG;
use crate::domains::tools::registry::{ToolDef, ToolHandler};
use crate::domains::tools::schema::ParamSchema;

pub fn definition() -> ToolDef {
    ToolDef {
        name: "list_resources",
        description: "List all available documentation resources in the MCP server",
        schema: ParamSchema::EMPTY,
        handler: ToolHandler::Fixed(payload),
    }
}

/// Group the catalog by URI category.
fn payload() -> Value {
    let mut groups: Map<String, Value> = Map::new();

    for spec in CATALOG {
        let entry = json!({
            "uri": spec.uri,
            "title": spec.title,
            "description": spec.description,
        });

        let group = groups
            .entry(spec.category().to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(items) = group {
            items.push(entry);
        }
    }

    Value::Object(groups)
}
