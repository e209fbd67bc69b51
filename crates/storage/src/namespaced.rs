//! Namespace-scoped backend adapter
//!
//! Wraps another backend and stores every identifier as `"{namespace}.{key}"`,
//! the way a credential store scopes items by service name. The adapter keeps
//! an index of the keys written through it so [`reset_all`] can clear exactly
//! that namespace and leave everything else in the inner backend alone.
//!
//! The index lives in the inner backend under `"{namespace}.__kvault_keys"`
//! as a JSON array. Callers cannot address that key.
//!
//! [`reset_all`]: PersistentStorage::reset_all

use crate::traits::{BatchOperation, PersistentStorage};
use kvault_core::{Error, Result};
use parking_lot::Mutex;
use std::collections::BTreeSet;
use tracing::debug;

/// Key under which the namespace index is stored, relative to the namespace.
pub const INDEX_KEY: &str = "__kvault_keys";

/// Backend adapter that prefixes keys with a namespace.
#[derive(Debug)]
pub struct NamespacedStorage<S> {
    inner: S,
    namespace: String,
    index_lock: Mutex<()>,
}

impl<S: PersistentStorage> NamespacedStorage<S> {
    /// Scope `inner` under `namespace`.
    pub fn new(namespace: impl Into<String>, inner: S) -> Self {
        Self {
            inner,
            namespace: namespace.into(),
            index_lock: Mutex::new(()),
        }
    }

    /// The namespace prefix.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The wrapped backend.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap the adapter.
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Keys currently recorded in this namespace, unprefixed and sorted.
    pub fn keys(&self) -> Result<Vec<String>> {
        let _guard = self.index_lock.lock();
        Ok(self.load_index()?.into_iter().collect())
    }

    fn scoped(&self, key: &str) -> Result<String> {
        if key == INDEX_KEY {
            return Err(Error::StorageError(format!(
                "'{}' is reserved in namespace '{}'",
                INDEX_KEY, self.namespace
            )));
        }
        Ok(self.prefixed(key))
    }

    fn prefixed(&self, key: &str) -> String {
        format!("{}.{}", self.namespace, key)
    }

    fn index_key(&self) -> String {
        self.prefixed(INDEX_KEY)
    }

    fn load_index(&self) -> Result<BTreeSet<String>> {
        match self.inner.get_bytes(&self.index_key())? {
            Some(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                Error::Corruption(format!("namespace index for '{}': {}", self.namespace, e))
            }),
            None => Ok(BTreeSet::new()),
        }
    }

    fn store_index(&self, keys: &BTreeSet<String>) -> Result<()> {
        if keys.is_empty() {
            return self.inner.remove_key(&self.index_key());
        }
        let bytes =
            serde_json::to_vec(keys).map_err(|e| Error::SerializationError(e.to_string()))?;
        self.inner.set_bytes(&self.index_key(), Some(&bytes))
    }

    fn track(&self, key: &str) -> Result<()> {
        let _guard = self.index_lock.lock();
        let mut keys = self.load_index()?;
        if keys.insert(key.to_owned()) {
            self.store_index(&keys)?;
        }
        Ok(())
    }

    fn untrack(&self, key: &str) -> Result<()> {
        let _guard = self.index_lock.lock();
        let mut keys = self.load_index()?;
        if keys.remove(key) {
            self.store_index(&keys)?;
        }
        Ok(())
    }
}

impl<S: PersistentStorage> PersistentStorage for NamespacedStorage<S> {
    fn set_bytes(&self, key: &str, data: Option<&[u8]>) -> Result<()> {
        let scoped = self.scoped(key)?;
        self.inner.set_bytes(&scoped, data)?;
        match data {
            Some(_) => self.track(key),
            None => self.untrack(key),
        }
    }

    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.inner.get_bytes(&self.scoped(key)?)
    }

    fn register_default(&self, key: &str, data: &[u8]) -> Result<()> {
        let scoped = self.scoped(key)?;
        self.inner.register_default(&scoped, data)?;
        self.track(key)
    }

    fn remove_key(&self, key: &str) -> Result<()> {
        let scoped = self.scoped(key)?;
        self.inner.remove_key(&scoped)?;
        self.untrack(key)
    }

    fn reset_all(&self) -> Result<()> {
        let _guard = self.index_lock.lock();
        let keys = self.load_index()?;
        debug!(namespace = %self.namespace, keys = keys.len(), "resetting namespace");
        self.inner.perform_batch(&mut |inner| {
            for key in &keys {
                inner.remove_key(&self.prefixed(key))?;
            }
            inner.remove_key(&self.index_key())
        })
    }

    fn perform_batch(&self, operation: &mut BatchOperation<'_>) -> Result<()> {
        self.inner.perform_batch(&mut |_| operation(self))
    }

    fn flush(&self) -> Result<()> {
        self.inner.flush()
    }
}
