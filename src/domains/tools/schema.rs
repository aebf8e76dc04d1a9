//! Declarative parameter schemas for tools.
//!
//! Each tool declares its parameters as data. The same declaration renders
//! the JSON Schema advertised in `tools/list` and validates raw arguments
//! before a handler runs.

use serde_json::{Map, Value};

use super::error::ToolError;

/// Primitive type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Boolean,
    Integer,
}

impl ParamKind {
    /// JSON Schema type name.
    fn json_name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
        }
    }
}

/// Declaration of a single named parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Parameter name as it appears in the arguments object.
    pub name: &'static str,

    /// Description shown to clients in the schema.
    pub description: &'static str,

    /// Primitive type the value must have.
    pub kind: ParamKind,

    /// Whether the parameter must be present.
    pub required: bool,

    /// Legal values, when the parameter is an enumeration. Only meaningful
    /// for string parameters.
    pub allowed: Option<&'static [&'static str]>,
}

/// The declared shape of a tool's arguments object.
#[derive(Debug, Clone, Copy)]
pub struct ParamSchema(pub &'static [ParamSpec]);

impl ParamSchema {
    /// Schema of a tool that takes no parameters.
    pub const EMPTY: ParamSchema = ParamSchema(&[]);

    /// Render the JSON Schema object advertised in `tools/list`.
    pub fn to_json_object(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        for param in self.0 {
            let mut prop = Map::new();
            prop.insert("type".into(), Value::String(param.kind.json_name().into()));
            prop.insert(
                "description".into(),
                Value::String(param.description.into()),
            );
            if let Some(allowed) = param.allowed {
                prop.insert(
                    "enum".into(),
                    Value::Array(
                        allowed
                            .iter()
                            .map(|v| Value::String((*v).to_string()))
                            .collect(),
                    ),
                );
            }
            properties.insert(param.name.into(), Value::Object(prop));
        }

        let mut schema = Map::new();
        schema.insert("type".into(), Value::String("object".into()));
        schema.insert("properties".into(), Value::Object(properties));

        let required: Vec<Value> = self
            .0
            .iter()
            .filter(|p| p.required)
            .map(|p| Value::String(p.name.into()))
            .collect();
        if !required.is_empty() {
            schema.insert("required".into(), Value::Array(required));
        }

        schema
    }

    /// Validate a raw arguments object against this schema.
    ///
    /// Checks presence of required parameters, primitive types, and enum
    /// membership. Unknown extra fields are ignored, matching the loose
    /// object semantics of the protocol.
    pub fn validate(&self, args: &Map<String, Value>) -> Result<(), ToolError> {
        for param in self.0 {
            let Some(value) = args.get(param.name) else {
                if param.required {
                    return Err(ToolError::invalid_arguments(param.name, "is required"));
                }
                continue;
            };

            match param.kind {
                ParamKind::String => {
                    let Some(s) = value.as_str() else {
                        return Err(ToolError::invalid_arguments(param.name, "must be a string"));
                    };
                    if let Some(allowed) = param.allowed {
                        if !allowed.contains(&s) {
                            return Err(ToolError::invalid_arguments(
                                param.name,
                                format!("must be one of: {}", allowed.join(", ")),
                            ));
                        }
                    }
                }
                ParamKind::Boolean => {
                    if !value.is_boolean() {
                        return Err(ToolError::invalid_arguments(
                            param.name,
                            "must be a boolean",
                        ));
                    }
                }
                ParamKind::Integer => {
                    if value.as_i64().is_none() {
                        return Err(ToolError::invalid_arguments(
                            param.name,
                            "must be an integer",
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const REPO: ParamSchema = ParamSchema(&[ParamSpec {
        name: "repo",
        description: "The repository name",
        kind: ParamKind::String,
        required: true,
        allowed: Some(&["gridiron", "gridiron-web"]),
    }]);

    const OPTIONS: ParamSchema = ParamSchema(&[
        ParamSpec {
            name: "limit",
            description: "Maximum entries",
            kind: ParamKind::Integer,
            required: false,
            allowed: None,
        },
        ParamSpec {
            name: "verbose",
            description: "Include details",
            kind: ParamKind::Boolean,
            required: false,
            allowed: None,
        },
    ]);

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_json_schema_shape() {
        let schema = Value::Object(REPO.to_json_object());
        assert_eq!(schema["type"], json!("object"));
        assert_eq!(schema["properties"]["repo"]["type"], json!("string"));
        assert_eq!(
            schema["properties"]["repo"]["enum"],
            json!(["gridiron", "gridiron-web"])
        );
        assert_eq!(schema["required"], json!(["repo"]));
    }

    #[test]
    fn test_empty_schema_has_no_required() {
        let schema = Value::Object(ParamSchema::EMPTY.to_json_object());
        assert_eq!(schema["type"], json!("object"));
        assert_eq!(schema["properties"], json!({}));
        assert!(schema.get("required").is_none());
    }

    #[test]
    fn test_validate_accepts_enum_member() {
        assert!(REPO.validate(&args(json!({"repo": "gridiron"}))).is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_required() {
        let err = REPO.validate(&args(json!({}))).unwrap_err();
        match err {
            ToolError::InvalidArguments { field, constraint } => {
                assert_eq!(field, "repo");
                assert_eq!(constraint, "is required");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_rejects_wrong_type() {
        let err = REPO.validate(&args(json!({"repo": 7}))).unwrap_err();
        match err {
            ToolError::InvalidArguments { field, constraint } => {
                assert_eq!(field, "repo");
                assert_eq!(constraint, "must be a string");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_rejects_value_outside_enum() {
        let err = REPO
            .validate(&args(json!({"repo": "not-a-real-repo"})))
            .unwrap_err();
        match err {
            ToolError::InvalidArguments { field, constraint } => {
                assert_eq!(field, "repo");
                assert_eq!(constraint, "must be one of: gridiron, gridiron-web");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_optional_params() {
        assert!(OPTIONS.validate(&args(json!({}))).is_ok());
        assert!(
            OPTIONS
                .validate(&args(json!({"limit": 5, "verbose": true})))
                .is_ok()
        );

        let err = OPTIONS.validate(&args(json!({"limit": "five"}))).unwrap_err();
        assert!(matches!(
            err,
            ToolError::InvalidArguments { ref field, .. } if field == "limit"
        ));

        let err = OPTIONS.validate(&args(json!({"verbose": 1}))).unwrap_err();
        assert!(matches!(
            err,
            ToolError::InvalidArguments { ref field, .. } if field == "verbose"
        ));
    }

    #[test]
    fn test_validate_ignores_unknown_fields() {
        assert!(
            REPO.validate(&args(json!({"repo": "gridiron", "extra": 1})))
                .is_ok()
        );
    }
}
