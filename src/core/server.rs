//! MCP server implementation - the request dispatcher.
//!
//! This module contains the server handler that maps the four request kinds
//! (list-resources, read-resource, list-tools, call-tool) onto the resource
//! and tool registries and shapes their outcomes into protocol envelopes.
//!
//! The registries are built once from static catalogs and never mutated
//! afterwards, so the handler shares them freely without locking.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::resources::{ResourceError, ResourceService};
use crate::domains::tools::{ToolError, ToolRegistry};

/// The main MCP server handler.
///
/// Holds the immutable registries and the configuration they were built
/// from; cloning shares the same registries.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry of documentation resources.
    resources: Arc<ResourceService>,

    /// Registry of callable tools.
    tools: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Registers the full resource and tool catalogs; a duplicate URI or
    /// tool name aborts construction.
    pub fn new(config: Config) -> crate::core::Result<Self> {
        let config = Arc::new(config);
        let resources = Arc::new(ResourceService::new(&config.resources)?);
        let tools = Arc::new(ToolRegistry::new()?);

        Ok(Self {
            config,
            resources,
            tools,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Number of registered resources.
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Number of registered tools.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Provides Gridiron project documentation as resources and lookup tools \
                 for repository metadata, GitHub project boards, and engine conventions."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        Ok(ListResourcesResult {
            resources: self.resources.list(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resources.read(&request.uri).map_err(|e| match e {
            ResourceError::NotFound(uri) => {
                McpError::resource_not_found(format!("Unknown resource: {uri}"), None)
            }
            other => McpError::internal_error(other.to_string(), None),
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tools.list(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        let args = request.arguments.unwrap_or_default();
        self.tools.call(&request.name, &args).map_err(|e| match e {
            e @ (ToolError::NotFound(_) | ToolError::InvalidArguments { .. }) => {
                McpError::invalid_params(e.to_string(), None)
            }
            other => McpError::internal_error(other.to_string(), None),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_builds_from_defaults() {
        let server = McpServer::new(Config::default()).unwrap();
        assert_eq!(server.name(), "gridiron-context");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(server.resource_count(), 18);
        assert_eq!(server.tool_count(), 6);
    }

    #[test]
    fn test_get_info_advertises_capabilities() {
        let server = McpServer::new(Config::default()).unwrap();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert_eq!(info.server_info.name, "gridiron-context");
    }
}
