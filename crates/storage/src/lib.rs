//! Storage layer for kvault
//!
//! This crate defines the byte-level backend contract and ships reference
//! backends:
//! - [`PersistentStorage`]: get/set/register/remove/reset/batch over raw bytes
//! - [`MemoryStorage`]: in-memory map, nothing persisted
//! - [`FileStorage`]: settings file with configurable [`DurabilityMode`]
//! - [`NamespacedStorage`]: scopes another backend under a namespace prefix

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod durability;
pub mod file;
pub mod format;
pub mod memory;
pub mod namespaced;
pub mod traits;

pub use durability::DurabilityMode;
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use namespaced::NamespacedStorage;
pub use traits::{BatchOperation, PersistentStorage};

pub use kvault_core::{Error, Result};
