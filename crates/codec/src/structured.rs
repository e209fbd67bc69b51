//! Structured-serialization codec
//!
//! Encodes a value as a single-entry JSON object keyed by the identifier:
//!
//! ```text
//! save(123, "intValue")  ->  {"intValue":123}
//! ```
//!
//! The wrapping keeps every payload self-describing by key. Decoding reads the
//! whole object back as `{String: T}` and takes the entry for the identifier.
//!
//! Values holding `NaN` or an infinite float fail to encode, since JSON would
//! silently turn them into `null`.

use crate::codec::Codec;
use crate::error::{CodecError, CodecResult};
use crate::finite::check_finite;
use kvault_core::{CodecKind, StructuredCodec};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Encode `{identifier: value}` as JSON bytes.
pub fn encode_entry<T: Serialize>(identifier: &str, value: &T) -> CodecResult<Vec<u8>> {
    check_finite(value).map_err(|e| CodecError::Encode {
        kind: CodecKind::StructuredMapping,
        message: e.to_string(),
    })?;
    let mut entry = BTreeMap::new();
    entry.insert(identifier, value);
    serde_json::to_vec(&entry).map_err(|e| CodecError::Encode {
        kind: CodecKind::StructuredMapping,
        message: e.to_string(),
    })
}

/// Decode a JSON object and extract the entry for `identifier`.
pub fn decode_entry<T: DeserializeOwned>(identifier: &str, bytes: &[u8]) -> CodecResult<Option<T>> {
    let mut entries: HashMap<String, T> =
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode {
            kind: CodecKind::StructuredMapping,
            message: e.to_string(),
        })?;
    Ok(entries.remove(identifier))
}

impl<T> Codec<T> for StructuredCodec
where
    T: Serialize + DeserializeOwned,
{
    fn encode(identifier: &str, value: &T) -> CodecResult<Vec<u8>> {
        encode_entry(identifier, value)
    }

    fn decode(identifier: &str, bytes: &[u8]) -> CodecResult<Option<T>> {
        decode_entry(identifier, bytes)
    }
}
