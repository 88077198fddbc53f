//! Transport layer for the MCP server.
//!
//! Messages arrive as newline-delimited JSON on stdin; each response is
//! written as a single line on stdout. Logs never go to stdout.

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
