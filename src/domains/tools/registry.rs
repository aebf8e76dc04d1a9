//! Tool registry - central registration, validation, and dispatch.
//!
//! Tools are plain descriptor records over static data tables; the registry
//! runs one generic call path for all of them: look up the descriptor,
//! validate arguments against its declared schema, then either return the
//! fixed payload or index the table by the validated key.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use serde_json::Value;
use tracing::debug;

use super::definitions;
use super::error::ToolError;
use super::schema::ParamSchema;

/// Static descriptor for one tool.
pub struct ToolDef {
    /// Unique tool name.
    pub name: &'static str,

    /// Human-readable description shown to clients.
    pub description: &'static str,

    /// Declared parameter shape, validated before dispatch.
    pub schema: ParamSchema,

    /// How calls are answered.
    pub handler: ToolHandler,
}

/// The two handler shapes every tool here reduces to.
pub enum ToolHandler {
    /// Look up one entry in a static table, keyed by the named parameter.
    ///
    /// `subject` names the keyed thing in the unknown-key message, e.g.
    /// `Unknown repository: <key>`.
    Lookup {
        param: &'static str,
        subject: &'static str,
        table: fn() -> Value,
    },

    /// Return a fixed structured payload.
    Fixed(fn() -> Value),
}

/// Registry of all callable tools.
///
/// Descriptors are held in a `Vec` so enumeration reproduces registration
/// order, with a name index for dispatch. Immutable once built.
pub struct ToolRegistry {
    defs: Vec<ToolDef>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Build the registry and register every tool definition.
    ///
    /// Fails on a duplicate name, which is a configuration defect and must
    /// stop the process before it starts serving.
    pub fn new() -> Result<Self, ToolError> {
        let mut registry = Self {
            defs: Vec::new(),
            index: HashMap::new(),
        };

        for def in definitions::all() {
            registry.register(def)?;
        }

        Ok(registry)
    }

    /// Register a single tool descriptor.
    fn register(&mut self, def: ToolDef) -> Result<(), ToolError> {
        if self.index.contains_key(def.name) {
            return Err(ToolError::duplicate_name(def.name));
        }

        debug!("Registering tool: {}", def.name);

        self.index.insert(def.name, self.defs.len());
        self.defs.push(def);

        Ok(())
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether the registry is empty (a misconfigured system only).
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// List all tools as protocol metadata, in registration order.
    pub fn list(&self) -> Vec<Tool> {
        self.defs
            .iter()
            .map(|def| Tool {
                name: def.name.into(),
                description: Some(def.description.into()),
                input_schema: Arc::new(def.schema.to_json_object()),
                annotations: None,
                output_schema: None,
                icons: None,
                meta: None,
                title: None,
            })
            .collect()
    }

    /// Call a tool by name with raw arguments.
    ///
    /// Unknown names and schema violations are errors. A schema-valid key
    /// that is absent from the backing table is not: it yields a flagged
    /// result naming the key, so the caller can retry with another key
    /// without the session tearing down.
    pub fn call(&self, name: &str, args: &JsonObject) -> Result<CallToolResult, ToolError> {
        let def = self
            .index
            .get(name)
            .map(|&i| &self.defs[i])
            .ok_or_else(|| ToolError::not_found(name))?;

        def.schema.validate(args)?;

        let payload = match &def.handler {
            ToolHandler::Fixed(payload) => payload(),
            ToolHandler::Lookup {
                param,
                subject,
                table,
            } => {
                let key = args.get(*param).and_then(Value::as_str).ok_or_else(|| {
                    ToolError::internal(format!(
                        "parameter '{param}' missing after validation for tool '{name}'"
                    ))
                })?;
                match table().get(key) {
                    Some(entry) => entry.clone(),
                    None => {
                        return Ok(CallToolResult::error(vec![Content::text(format!(
                            "Unknown {subject}: {key}"
                        ))]));
                    }
                }
            }
        };

        let text = serde_json::to_string_pretty(&payload)
            .map_err(|e| ToolError::internal(e.to_string()))?;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::schema::{ParamKind, ParamSpec};
    use rmcp::model::RawContent;
    use serde_json::json;

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_list_in_registration_order() {
        let registry = ToolRegistry::new().unwrap();
        let names: Vec<_> = registry.list().iter().map(|t| t.name.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "get_repo_info",
                "get_github_project",
                "list_resources",
                "get_tech_stack",
                "get_hard_rules",
                "get_constants_info",
            ]
        );
    }

    #[test]
    fn test_list_is_idempotent() {
        let registry = ToolRegistry::new().unwrap();
        assert_eq!(registry.list().len(), registry.list().len());
        assert_eq!(registry.list().len(), registry.len());
    }

    #[test]
    fn test_listed_schema_carries_enum() {
        let registry = ToolRegistry::new().unwrap();
        let tools = registry.list();
        let repo_info = tools.iter().find(|t| t.name == "get_repo_info").unwrap();
        let schema = Value::Object(repo_info.input_schema.as_ref().clone());
        assert_eq!(
            schema["properties"]["repo"]["enum"],
            json!(["gridiron", "gridiron-web", "gridiron-engine", "gridiron-meta"])
        );
    }

    #[test]
    fn test_call_unknown_tool() {
        let registry = ToolRegistry::new().unwrap();
        let err = registry.call("does_not_exist", &args(json!({}))).unwrap_err();
        assert!(matches!(err, ToolError::NotFound(name) if name == "does_not_exist"));
    }

    #[test]
    fn test_call_lookup_tool() {
        let registry = ToolRegistry::new().unwrap();
        let result = registry
            .call("get_repo_info", &args(json!({"repo": "gridiron"})))
            .unwrap();
        assert!(!result.is_error.unwrap_or(false));

        let text = result_text(&result);
        assert!(text.contains("\"language\": \"C#\""));

        // The payload round-trips back into the table entry shape.
        let payload: Value = serde_json::from_str(text).unwrap();
        assert_eq!(payload["name"], json!("gridiron"));
    }

    #[test]
    fn test_call_rejects_value_outside_enum() {
        let registry = ToolRegistry::new().unwrap();
        let err = registry
            .call("get_repo_info", &args(json!({"repo": "not-a-real-repo"})))
            .unwrap_err();
        match err {
            ToolError::InvalidArguments { field, .. } => assert_eq!(field, "repo"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_call_rejects_missing_required() {
        let registry = ToolRegistry::new().unwrap();
        let err = registry.call("get_repo_info", &args(json!({}))).unwrap_err();
        assert!(matches!(
            err,
            ToolError::InvalidArguments { ref field, ref constraint }
                if field == "repo" && constraint == "is required"
        ));
    }

    #[test]
    fn test_call_fixed_tools_with_no_args() {
        let registry = ToolRegistry::new().unwrap();
        for name in [
            "list_resources",
            "get_tech_stack",
            "get_hard_rules",
            "get_constants_info",
        ] {
            let result = registry.call(name, &JsonObject::new()).unwrap();
            assert!(!result.is_error.unwrap_or(false), "flagged: {name}");
            let payload: Value = serde_json::from_str(result_text(&result)).unwrap();
            assert!(payload.is_object(), "non-object payload: {name}");
        }
    }

    #[test]
    fn test_missing_table_key_is_flagged_not_error() {
        // A key the schema admits but the table lacks: the call still
        // succeeds at the registry level, with the error flag set.
        fn widgets() -> Value {
            json!({"anvil": {"weight": "heavy"}})
        }
        const SCHEMA: ParamSchema = ParamSchema(&[ParamSpec {
            name: "widget",
            description: "The widget name",
            kind: ParamKind::String,
            required: true,
            allowed: Some(&["anvil", "hammer"]),
        }]);

        let mut registry = ToolRegistry::new().unwrap();
        registry
            .register(ToolDef {
                name: "get_widget",
                description: "Widget lookup",
                schema: SCHEMA,
                handler: ToolHandler::Lookup {
                    param: "widget",
                    subject: "widget",
                    table: widgets,
                },
            })
            .unwrap();

        let result = registry
            .call("get_widget", &args(json!({"widget": "hammer"})))
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result_text(&result), "Unknown widget: hammer");
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = ToolRegistry::new().unwrap();
        let err = registry
            .register(ToolDef {
                name: "get_repo_info",
                description: "duplicate",
                schema: ParamSchema::EMPTY,
                handler: ToolHandler::Fixed(|| json!({})),
            })
            .unwrap_err();
        assert!(matches!(err, ToolError::DuplicateName(name) if name == "get_repo_info"));
    }
}
