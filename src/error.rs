//! Error types for femcare-core
//!
//! The prediction functions in [`crate::cycle`] never fail. Everything that
//! validates input or touches storage returns this error type.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// femcare-core error types
#[derive(Error, Debug)]
pub enum Error {
    /// Input rejected by a checked operation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Record lookup by id failed
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Record kind (e.g. "cycle", "reminder")
        kind: &'static str,
        /// Requested identifier
        id: String,
    },

    /// Storage backend error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Stored collection could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a [`Error::NotFound`] of the given record kind.
    #[must_use]
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}
