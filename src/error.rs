//! Unified error types for kvault.
//!
//! Wraps backend and codec errors and presents one error type to callers.
//! Reads never surface errors (they fall back to the key's default); writes,
//! configuration and explicit flushes do.

use kvault_codec::CodecError;
use thiserror::Error;

/// All kvault errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A value could not be encoded for storage
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error outside the value codecs
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Persisted data failed validation
    #[error("corruption: {0}")]
    Corruption(String),

    /// Backend failure
    #[error("storage error: {0}")]
    Storage(String),

    /// Invalid vault configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for kvault operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error came from a value codec.
    pub fn is_codec(&self) -> bool {
        matches!(self, Error::Codec(_))
    }

    /// Check if this error reports corrupted persisted data.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Error::Corruption(_))
    }

    /// Check if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

// Convert from backend errors
impl From<kvault_core::Error> for Error {
    fn from(e: kvault_core::Error) -> Self {
        use kvault_core::Error as CoreError;
        match e {
            CoreError::IoError(io_err) => Error::Io(io_err),
            CoreError::SerializationError(msg) => Error::Serialization(msg),
            CoreError::Corruption(msg) => Error::Corruption(msg),
            CoreError::StorageError(msg) => Error::Storage(msg),
            CoreError::InvalidConfig(msg) => Error::Config(msg),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
