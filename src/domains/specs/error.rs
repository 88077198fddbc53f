//! Spec-domain error types.

use std::path::PathBuf;
use thiserror::Error;

use super::Category;
use crate::core::security::PathSecurityError;

/// Result type for spec service operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors raised by the spec store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The spec file does not exist.
    #[error("Spec file not found: {name} ({category})")]
    NotFound { name: String, category: Category },

    /// The file system rejected an operation.
    #[error("I/O error for '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised by the spec service.
///
/// Everything except [`SpecError::Io`] is an expected outcome of bad input or
/// missing data. `Io` is a fault: the disk or the OS refused the operation.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A required argument was empty or malformed.
    #[error("{0}")]
    InvalidArgument(String),

    /// The requested spec does not exist.
    #[error("Spec '{name}' ({category}) does not exist")]
    NotFound { name: String, category: Category },

    /// The project root is outside the configured boundary.
    #[error("Project root rejected: {0}")]
    PathSecurity(#[from] PathSecurityError),

    /// Underlying file system failure.
    #[error("I/O error for '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SpecError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Whether this error is an unexpected fault rather than a domain outcome.
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Whether this error means the spec is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<StoreError> for SpecError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { name, category } => Self::NotFound { name, category },
            StoreError::Io { path, source } => Self::Io { path, source },
        }
    }
}
