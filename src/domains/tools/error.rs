//! Tool-specific error types.
//!
//! These are protocol-level failures. Everything a tool reports about the
//! specs themselves is returned as a tool result instead.

use thiserror::Error;

use crate::core::protocol::{INTERNAL_ERROR, METHOD_NOT_FOUND};

/// Errors that can occur while dispatching a tool call.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// JSON-RPC error code for this error.
    pub fn code(&self) -> i32 {
        match self {
            Self::NotFound(_) => METHOD_NOT_FOUND,
            Self::Internal(_) => INTERNAL_ERROR,
        }
    }
}
