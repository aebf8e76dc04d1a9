//! Resources domain module.
//!
//! This module handles all resource-related functionality for the MCP server.
//! Resources are the project documentation blobs exposed under the
//! `gridiron://` scheme.
//!
//! ## Architecture
//!
//! - `registry.rs` - the static resource catalog (one record per resource)
//! - `service.rs` - ordered registry with listing and resolving
//! - `store.rs` - document store collaborator (filename -> markdown text)
//! - `error.rs` - resource-specific error types
//!
//! Adding a resource means adding one record to the catalog in `registry.rs`.

mod error;
mod registry;
mod service;
mod store;

pub use error::ResourceError;
pub use registry::{CATALOG, MARKDOWN_MIME, ResourceSpec, URI_SCHEME};
pub use service::{ResourceEntry, ResourceService};
pub use store::DocStore;
