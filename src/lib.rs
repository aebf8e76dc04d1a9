//! Gridiron Context MCP Server
//!
//! This crate implements the `gridiron-context` Model Context Protocol (MCP)
//! server: a fixed catalog of project documentation resources and a fixed set
//! of lookup tools served over stdio.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the request dispatcher, and the stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **resources**: documentation resources read by MCP clients
//!   - **tools**: parameterized lookups over static project metadata tables
//!
//! # Example
//!
//! ```rust,no_run
//! use gridiron_context_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
