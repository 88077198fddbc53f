//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are the operations MCP clients call to read and change specs.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Central tool registry and `tools/call` dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/spec/` (e.g., `rename.rs`)
//! 2. Define params, `execute()`, `handler()` and `to_tool()`
//! 3. Export in `definitions/spec/mod.rs` and `definitions/mod.rs`
//! 4. Register it in `registry.rs` (names, metadata and dispatch)

pub mod definitions;
mod error;
mod registry;

pub use error::ToolError;
pub use registry::ToolRegistry;
