//! MCP Server Entry Point
//!
//! This is the main entry point for the gridiron-context MCP server. It
//! initializes logging, loads configuration, builds the registries, and
//! serves requests over stdio until the channel closes.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use gridiron_context_server::core::transport::StdioTransport;
use gridiron_context_server::core::{Config, LoggingConfig, McpServer};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // Duplicate registrations are configuration bugs and abort startup
    // before any request is served.
    let server = McpServer::new(config)?;

    info!(
        resources = server.resource_count(),
        tools = server.tool_count(),
        "Registries initialized"
    );

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr: stdout carries the protocol stream.
fn init_logging(config: &LoggingConfig) {
    let level = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if config.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
