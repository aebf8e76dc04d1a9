//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Every tool here is a parameterized lookup over a static in-memory table;
//! one generic dispatch path serves them all.
//!
//! ## Architecture
//!
//! - `definitions/` - one file per tool: descriptor + its data table
//! - `registry.rs` - central registry, validation, and dispatch
//! - `schema.rs` - declarative parameter schemas
//! - `error.rs` - tool-specific error types
//!
//! Adding a tool means adding a definition file and listing it in
//! `definitions::all()`.

pub mod definitions;
mod error;
mod registry;
mod schema;

pub use error::ToolError;
pub use registry::{ToolDef, ToolHandler, ToolRegistry};
pub use schema::{ParamKind, ParamSchema, ParamSpec};
