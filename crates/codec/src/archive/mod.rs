//! Object-archive codec
//!
//! For values that describe their own encoding field by field, the way
//! platform objects with custom archivers do. The payload is exactly one
//! archived object (no wrapping map), serialized as MessagePack:
//!
//! ```text
//! {
//!   archiver: "kvault.archive",
//!   version:  1,
//!   root:     { class: "Profile", fields: { "Profile.Name": Str("Foo"), ... } }
//! }
//! ```
//!
//! Decoding type-checks the root class against the requested type before
//! handing the fields to [`Archivable::decode_with`].

mod coder;
mod primitives;

pub use coder::{ArchiveDecoder, ArchiveEncoder, ArchiveValue, ArchivedObject};

use crate::codec::Codec;
use crate::error::{CodecError, CodecResult};
use kvault_core::{ArchiveCodec, CodecKind};
use serde::{Deserialize, Serialize};

/// Archiver tag written into every envelope.
pub const ARCHIVER_TAG: &str = "kvault.archive";

/// Current archive format version.
pub const ARCHIVE_FORMAT_VERSION: u32 = 1;

/// A value that encodes itself into a keyed archive.
///
/// ```
/// use kvault_codec::{Archivable, ArchiveDecoder, ArchiveEncoder};
///
/// struct Profile {
///     name: String,
///     age: i64,
/// }
///
/// impl Archivable for Profile {
///     const CLASS_NAME: &'static str = "Profile";
///
///     fn encode_with(&self, coder: &mut ArchiveEncoder) {
///         coder.encode_str("Profile.Name", &self.name);
///         coder.encode_i64("Profile.Age", self.age);
///     }
///
///     fn decode_with(coder: &ArchiveDecoder<'_>) -> Option<Self> {
///         let name = coder.decode_str("Profile.Name")?;
///         let age = coder.decode_i64("Profile.Age");
///         Some(Profile { name, age })
///     }
/// }
/// ```
pub trait Archivable: Sized {
    /// Class name recorded in the archive and checked on decode
    const CLASS_NAME: &'static str;

    /// Write this value's fields.
    fn encode_with(&self, coder: &mut ArchiveEncoder);

    /// Rebuild a value, or `None` if required fields are missing.
    fn decode_with(coder: &ArchiveDecoder<'_>) -> Option<Self>;
}

#[derive(Debug, Serialize, Deserialize)]
struct ArchiveEnvelope {
    archiver: String,
    version: u32,
    root: ArchivedObject,
}

/// Archive `value` into bytes.
pub fn archive<T: Archivable>(value: &T) -> CodecResult<Vec<u8>> {
    let envelope = ArchiveEnvelope {
        archiver: ARCHIVER_TAG.to_owned(),
        version: ARCHIVE_FORMAT_VERSION,
        root: ArchivedObject::from_value(value),
    };
    rmp_serde::to_vec_named(&envelope).map_err(|e| CodecError::Encode {
        kind: CodecKind::ObjectArchive,
        message: e.to_string(),
    })
}

/// Read the root object out of archive bytes without type-checking it.
pub fn read_root(bytes: &[u8]) -> CodecResult<ArchivedObject> {
    let envelope: ArchiveEnvelope =
        rmp_serde::from_slice(bytes).map_err(|e| CodecError::Decode {
            kind: CodecKind::ObjectArchive,
            message: e.to_string(),
        })?;
    if envelope.archiver != ARCHIVER_TAG || envelope.version != ARCHIVE_FORMAT_VERSION {
        return Err(CodecError::UnsupportedArchive {
            archiver: envelope.archiver,
            version: envelope.version,
        });
    }
    Ok(envelope.root)
}

/// Unarchive bytes into a `T`, checking the root class.
pub fn unarchive<T: Archivable>(bytes: &[u8]) -> CodecResult<T> {
    let root = read_root(bytes)?;
    if root.class != T::CLASS_NAME {
        return Err(CodecError::TypeMismatch {
            expected: T::CLASS_NAME.to_owned(),
            actual: root.class,
        });
    }
    let decoded = T::decode_with(&ArchiveDecoder::new(&root));
    match decoded {
        Some(value) => Ok(value),
        None => Err(CodecError::Undecodable { class: root.class }),
    }
}

impl<T: Archivable> Codec<T> for ArchiveCodec {
    fn encode(_identifier: &str, value: &T) -> CodecResult<Vec<u8>> {
        archive(value)
    }

    fn decode(_identifier: &str, bytes: &[u8]) -> CodecResult<Option<T>> {
        unarchive(bytes).map(Some)
    }
}
