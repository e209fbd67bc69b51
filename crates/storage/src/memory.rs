//! In-memory backend
//!
//! Nothing is persisted. Used for ephemeral vaults and as the test double for
//! everything above the storage layer.

use crate::traits::{BatchOperation, PersistentStorage};
use kvault_core::Result;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::trace;

/// Byte map held in memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Stored identifiers in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }
}

impl PersistentStorage for MemoryStorage {
    fn set_bytes(&self, key: &str, data: Option<&[u8]>) -> Result<()> {
        let mut entries = self.entries.write();
        match data {
            Some(bytes) => {
                entries.insert(key.to_owned(), bytes.to_vec());
            }
            None => {
                entries.remove(key);
            }
        }
        Ok(())
    }

    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn register_default(&self, key: &str, data: &[u8]) -> Result<()> {
        self.entries
            .write()
            .entry(key.to_owned())
            .or_insert_with(|| data.to_vec());
        Ok(())
    }

    fn remove_key(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }

    fn reset_all(&self) -> Result<()> {
        let mut entries = self.entries.write();
        trace!(cleared = entries.len(), "memory storage reset");
        entries.clear();
        Ok(())
    }

    fn perform_batch(&self, operation: &mut BatchOperation<'_>) -> Result<()> {
        operation(self)
    }
}
