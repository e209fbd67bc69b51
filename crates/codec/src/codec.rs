//! The codec contract

use crate::error::CodecResult;
use kvault_core::CodecFamily;

/// Encode/decode strategy for values of type `T`.
///
/// Implemented by the codec marker types. A store never inspects `T` at
/// runtime; the marker named by the key picks the implementation, so a type
/// that does not satisfy a family's bound cannot be stored under a key of
/// that family.
pub trait Codec<T>: CodecFamily {
    /// Encode `value` for storage under `identifier`.
    fn encode(identifier: &str, value: &T) -> CodecResult<Vec<u8>>;

    /// Decode bytes stored under `identifier`.
    ///
    /// Returns `Ok(None)` when the payload is well formed but carries no
    /// value for `identifier`.
    fn decode(identifier: &str, bytes: &[u8]) -> CodecResult<Option<T>>;
}
