//! Transport layer for the MCP server.
//!
//! The reference deployment speaks MCP over standard input/output; the
//! transport owns the channel lifecycle and delegates message processing to
//! the server handler.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
