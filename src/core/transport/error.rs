//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur in transport operations.
#[derive(Debug, Error)]
pub enum TransportError {
    /// IO error while reading or writing the stream.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A response could not be encoded.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
