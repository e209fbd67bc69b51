//! File-based vault configuration.
//!
//! ```toml
//! path = "settings.kv"      # omit for an in-memory vault
//! namespace = "com.example" # optional key prefix
//!
//! [durability]
//! mode = "batched"          # none | strict | batched
//! max_pending_writes = 32
//! ```

use crate::error::{Error, Result};
use kvault_storage::DurabilityMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Declarative description of a [`Vault`](crate::Vault).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VaultConfig {
    /// Settings file; `None` keeps everything in memory
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Prefix applied to every key
    #[serde(default)]
    pub namespace: Option<String>,

    /// When the settings file is written
    #[serde(default)]
    pub durability: DurabilityMode,
}

impl VaultConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: VaultConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Reject values no backend can honor.
    pub fn validate(&self) -> Result<()> {
        if let Some(namespace) = &self.namespace {
            if namespace.trim().is_empty() {
                return Err(Error::Config("namespace must not be empty".into()));
            }
        }
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(Error::Config("path must not be empty".into()));
            }
        }
        Ok(())
    }

    /// Whether this configuration describes an in-memory vault.
    pub fn is_ephemeral(&self) -> bool {
        self.path.is_none()
    }
}
