//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, resolves the default project
//! root and serves JSON-RPC over stdin/stdout.

use anyhow::{Context, Result};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use spec_flow_mcp::core::{Config, McpServer, StdioTransport};
use spec_flow_mcp::domains::specs::prepare_default_root;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let mut config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let cwd = std::env::current_dir().context("Failed to read the working directory")?;
    if let Some(spec_dir) = prepare_default_root(&mut config.specs, &cwd)? {
        info!("Specs stored in {}", spec_dir.display());
    }

    // Create the MCP server
    let server = McpServer::new(config);

    info!("Server initialized");

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout carries the protocol.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
