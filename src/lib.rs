//! Spec Flow MCP Server Library
//!
//! A Model Context Protocol (MCP) server that manages development specs:
//! markdown documents stored per project under `<projectRoot>/.spec/` as
//! `<name>_<category>_spec.md`.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, JSON-RPC dispatch and the stdio transport
//! - **domains**: business logic organized by bounded contexts
//!   - **specs**: file store, validation and the create/edit/delete rules
//!   - **tools**: MCP tools that can be executed by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use spec_flow_mcp::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
