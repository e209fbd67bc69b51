//! Main entry point for kvault.
//!
//! This module provides the `Vault` struct, a [`KeyValueStore`] over an
//! injected backend, and its builder.

use crate::config::VaultConfig;
use crate::error::{Error, Result};
use crate::store::KeyValueStore;
use kvault_storage::{DurabilityMode, FileStorage, MemoryStorage, NamespacedStorage, PersistentStorage};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// A typed key-value vault.
///
/// Create one with [`Vault::open`], [`Vault::ephemeral`], [`Vault::builder`]
/// or around any backend with [`Vault::with_storage`]. Cloning is cheap and
/// clones share the backend.
///
/// # Example
///
/// ```
/// use kvault::prelude::*;
///
/// let dir = tempfile::tempdir()?;
/// let vault = Vault::builder()
///     .path(dir.path().join("settings.kv"))
///     .strict()
///     .open()?;
///
/// let launches = TypedKey::with_default("launchCount", 0_u32);
/// vault.slot(&launches).update(|n| *n = n.map(|n| n + 1))?;
/// assert_eq!(vault.get(&launches), Some(1));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct Vault {
    storage: Arc<dyn PersistentStorage>,
    path: Option<PathBuf>,
    namespace: Option<String>,
}

impl Vault {
    /// Open a vault backed by the settings file at `path`.
    ///
    /// Uses default settings (batched durability mode).
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder().path(path).open()
    }

    /// Create an in-memory vault. Nothing touches the disk.
    pub fn ephemeral() -> Self {
        Self::with_storage(Arc::new(MemoryStorage::new()))
    }

    /// Wrap an existing backend.
    pub fn with_storage(storage: Arc<dyn PersistentStorage>) -> Self {
        Self {
            storage,
            path: None,
            namespace: None,
        }
    }

    /// Build a vault from a configuration.
    pub fn from_config(config: &VaultConfig) -> Result<Self> {
        VaultBuilder::from_config(config).open()
    }

    /// Create a builder for vault configuration.
    pub fn builder() -> VaultBuilder {
        VaultBuilder::new()
    }

    /// Force pending writes to disk.
    pub fn flush(&self) -> Result<()> {
        self.storage.flush().map_err(Into::into)
    }

    /// The backend this vault writes to.
    pub fn storage(&self) -> &Arc<dyn PersistentStorage> {
        &self.storage
    }

    /// Settings file location, if file-backed.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Key prefix, if namespaced.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Check if this vault keeps nothing on disk.
    pub fn is_ephemeral(&self) -> bool {
        self.path.is_none()
    }
}

impl KeyValueStore for Vault {
    fn persistent_store(&self) -> &dyn PersistentStorage {
        self.storage.as_ref()
    }
}

impl fmt::Debug for Vault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vault")
            .field("path", &self.path)
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

/// Builder for vault configuration.
///
/// # Example
///
/// ```
/// use kvault::prelude::*;
///
/// // Scratch vault for tests
/// let scratch = Vault::builder().ephemeral().namespace("test").open()?;
/// assert!(scratch.is_ephemeral());
///
/// // File-backed, flushed every 16 writes
/// let dir = tempfile::tempdir()?;
/// let vault = Vault::builder()
///     .path(dir.path().join("prefs.kv"))
///     .batched(16)
///     .open()?;
/// assert!(!vault.is_ephemeral());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct VaultBuilder {
    path: Option<PathBuf>,
    durability: DurabilityMode,
    namespace: Option<String>,
}

impl VaultBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a loaded configuration.
    pub fn from_config(config: &VaultConfig) -> Self {
        Self {
            path: config.path.clone(),
            durability: config.durability,
            namespace: config.namespace.clone(),
        }
    }

    /// Persist to the settings file at `path`.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keep everything in memory. Clears any configured path.
    pub fn ephemeral(mut self) -> Self {
        self.path = None;
        self
    }

    /// Set the durability mode explicitly.
    pub fn durability(mut self, mode: DurabilityMode) -> Self {
        self.durability = mode;
        self
    }

    /// Write the settings file on every mutation.
    pub fn strict(self) -> Self {
        self.durability(DurabilityMode::Strict)
    }

    /// Only write on explicit [`Vault::flush`].
    pub fn no_durability(self) -> Self {
        self.durability(DurabilityMode::None)
    }

    /// Write once `max_pending_writes` mutations have accumulated.
    pub fn batched(self, max_pending_writes: usize) -> Self {
        self.durability(DurabilityMode::Batched { max_pending_writes })
    }

    /// Prefix every key with `namespace`.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Open the vault.
    pub fn open(self) -> Result<Vault> {
        VaultConfig {
            path: self.path.clone(),
            namespace: self.namespace.clone(),
            durability: self.durability,
        }
        .validate()?;

        let base: Arc<dyn PersistentStorage> = match &self.path {
            Some(path) => Arc::new(FileStorage::open(path, self.durability).map_err(Error::from)?),
            None => {
                if self.durability != DurabilityMode::default() {
                    debug!(mode = self.durability.description(), "durability ignored for ephemeral vault");
                }
                Arc::new(MemoryStorage::new())
            }
        };
        let storage: Arc<dyn PersistentStorage> = match &self.namespace {
            Some(namespace) => Arc::new(NamespacedStorage::new(namespace.clone(), base)),
            None => base,
        };

        debug!(
            path = ?self.path,
            namespace = ?self.namespace,
            "vault opened"
        );
        Ok(Vault {
            storage,
            path: self.path,
            namespace: self.namespace,
        })
    }
}
