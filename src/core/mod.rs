//! Core module containing shared infrastructure components.
//!
//! Configuration, error handling, the JSON-RPC envelope, the protocol
//! dispatcher and the stdio transport.

pub mod config;
pub mod error;
pub mod protocol;
pub mod security;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use protocol::{JsonRpcRequest, JsonRpcResponse};
pub use security::{PathSecurityError, validate_project_root};
pub use server::McpServer;
pub use transport::StdioTransport;
