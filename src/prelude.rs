//! Convenient imports for kvault.
//!
//! ```
//! use kvault::prelude::*;
//!
//! let vault = Vault::ephemeral();
//! vault.save(Some(&true), &TypedKey::new("onboarded"))?;
//! # Ok::<(), kvault::Error>(())
//! ```

// Main entry point
pub use crate::vault::{Vault, VaultBuilder};

// Typed access
pub use crate::slot::Slot;
pub use crate::store::KeyValueStore;
pub use kvault_core::{IntoTypedKey, TypedKey};

// Configuration
pub use crate::config::VaultConfig;

// Error handling
pub use crate::error::{Error, Result};

// Archive codec
pub use kvault_codec::{Archivable, ArchiveCodec, ArchiveDecoder, ArchiveEncoder, StructuredCodec};

// Backends
pub use kvault_storage::{DurabilityMode, PersistentStorage};
