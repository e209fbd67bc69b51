//! Codecs for kvault
//!
//! Values reach a backend as raw bytes produced by one of two codec families,
//! selected at compile time by the codec marker on a [`TypedKey`]:
//!
//! | Marker | Bound on `T` | Payload |
//! |--------|--------------|---------|
//! | [`StructuredCodec`] | `Serialize + DeserializeOwned` | JSON object `{identifier: value}` |
//! | [`ArchiveCodec`] | [`Archivable`] | MessagePack archive of exactly one object |
//!
//! [`TypedKey`]: kvault_core::TypedKey

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod archive;
mod codec;
mod error;
mod finite;
pub mod structured;

pub use archive::{Archivable, ArchiveDecoder, ArchiveEncoder, ArchiveValue, ArchivedObject};
pub use codec::Codec;
pub use error::{CodecError, CodecResult};
pub use kvault_core::{ArchiveCodec, CodecFamily, CodecKind, StructuredCodec};
