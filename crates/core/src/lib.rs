//! Core types for kvault
//!
//! This crate defines the fundamental types shared by every other crate:
//! - [`TypedKey`]: identifier + phantom value type + optional default
//! - [`CodecKind`] and the codec family markers selected by a key
//! - [`Error`]: storage-level error type used by backends

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod key;

pub use codec::{ArchiveCodec, CodecFamily, CodecKind, StructuredCodec};
pub use error::{Error, Result};
pub use key::{IntoTypedKey, TypedKey};
