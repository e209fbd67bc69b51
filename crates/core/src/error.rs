//! Storage-level error types
//!
//! Backends report failures with [`Error`]. Codec failures live in the codec
//! crate; the root crate folds both into its public error type.

use thiserror::Error;

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to serialize or deserialize backend state
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Persisted data failed validation (bad magic, checksum, truncation)
    #[error("corruption: {0}")]
    Corruption(String),

    /// Backend-specific failure
    #[error("storage error: {0}")]
    StorageError(String),

    /// Invalid backend configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Check if this error reports corrupted persisted data.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Error::Corruption(_))
    }
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, Error>;
