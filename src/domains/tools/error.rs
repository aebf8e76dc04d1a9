//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// An argument failed validation against the tool's parameter schema.
    ///
    /// Raised before dispatch, so handlers only ever see validated input.
    #[error("Invalid arguments: '{field}' {constraint}")]
    InvalidArguments { field: String, constraint: String },

    /// A tool with the same name was already registered.
    ///
    /// Registration happens once at startup, so this is a configuration
    /// defect and fatal.
    #[error("Duplicate tool name: {0}")]
    DuplicateName(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error for one field.
    pub fn invalid_arguments(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self::InvalidArguments {
            field: field.into(),
            constraint: constraint.into(),
        }
    }

    /// Create a new "duplicate name" error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
