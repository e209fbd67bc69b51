//! # kvault
//!
//! Typed key-value persistence over pluggable byte-level backends.
//!
//! Declare a [`TypedKey`] once, then read and write values of its type
//! through any [`KeyValueStore`]. The bytes live in a [`PersistentStorage`]
//! backend: in memory, in a settings file, or in anything else that
//! implements the trait.
//!
//! ## Quick Start
//!
//! ```
//! use kvault::prelude::*;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct Window {
//!     width: u32,
//!     height: u32,
//! }
//!
//! const WINDOW: TypedKey<Window> = TypedKey::from_static("window");
//! const LAUNCHES: TypedKey<u32> = TypedKey::from_static_with_default("launches", 0);
//!
//! let vault = Vault::ephemeral();
//! vault.save(Some(&Window { width: 800, height: 600 }), &WINDOW)?;
//!
//! assert_eq!(vault.get(&WINDOW).map(|w| w.width), Some(800));
//! assert_eq!(vault.get(&LAUNCHES), Some(0));
//! # Ok::<(), kvault::Error>(())
//! ```
//!
//! ## Codec families
//!
//! - Keys built with `TypedKey::new` / `with_default` store values through
//!   serde as a JSON object `{identifier: value}`.
//! - Keys built with `TypedKey::archived*` store [`Archivable`] values as a
//!   keyed object archive.
//!
//! The family is part of the key's type, so a value type that the family
//! cannot handle is rejected at compile time.
//!
//! ## Backends
//!
//! - [`MemoryStorage`] - nothing persisted
//! - [`FileStorage`] - one settings file, see [`DurabilityMode`]
//! - [`NamespacedStorage`] - prefixes another backend's keys

#![warn(missing_docs)]

mod adapters;
mod config;
mod error;
mod slot;
mod store;
mod vault;

pub mod prelude;

// Re-export main entry points
pub use config::VaultConfig;
pub use error::{Error, Result};
pub use slot::Slot;
pub use store::KeyValueStore;
pub use vault::{Vault, VaultBuilder};

// Re-export building blocks
pub use kvault_codec::{
    Archivable, ArchiveCodec, ArchiveDecoder, ArchiveEncoder, ArchiveValue, ArchivedObject, Codec,
    CodecError, CodecKind, StructuredCodec,
};
pub use kvault_core::{IntoTypedKey, TypedKey};
pub use kvault_storage::{
    BatchOperation, DurabilityMode, FileStorage, MemoryStorage, NamespacedStorage,
    PersistentStorage,
};
