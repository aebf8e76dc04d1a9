//! Resource-specific error types.

use thiserror::Error;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested resource was not found in the registry.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A resource with the same URI was already registered.
    ///
    /// Registration happens once at startup, so this is a configuration
    /// defect and fatal.
    #[error("Duplicate resource URI: {0}")]
    DuplicateUri(String),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    /// Create a new "duplicate URI" error.
    pub fn duplicate_uri(uri: impl Into<String>) -> Self {
        Self::DuplicateUri(uri.into())
    }
}
