//! Codec error types

use kvault_core::CodecKind;
use thiserror::Error;

/// Errors raised while encoding or decoding a value.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The value could not be encoded
    #[error("{kind} encode failed: {message}")]
    Encode {
        /// Codec family that failed
        kind: CodecKind,
        /// Underlying serializer message
        message: String,
    },

    /// The bytes could not be decoded
    #[error("{kind} decode failed: {message}")]
    Decode {
        /// Codec family that failed
        kind: CodecKind,
        /// Underlying deserializer message
        message: String,
    },

    /// The archived root object is of a different class than requested
    #[error("archived class mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        /// Class the caller asked for
        expected: String,
        /// Class found in the archive
        actual: String,
    },

    /// The archived object's fields were rejected by its decoder
    #[error("archived object of class {class} could not be decoded")]
    Undecodable {
        /// Class of the rejected object
        class: String,
    },

    /// The archive envelope is not one this crate writes
    #[error("unsupported archive format {archiver} v{version}")]
    UnsupportedArchive {
        /// Archiver tag found in the envelope
        archiver: String,
        /// Format version found in the envelope
        version: u32,
    },
}

impl CodecError {
    /// Check if this error happened while encoding.
    pub fn is_encode(&self) -> bool {
        matches!(self, CodecError::Encode { .. })
    }
}

/// Result type for codec operations.
pub type CodecResult<T> = std::result::Result<T, CodecError>;
