//! The persistent storage contract
//!
//! Every backend implements [`PersistentStorage`]: a byte-oriented map from
//! string identifiers to opaque payloads. The typed layer above it decides
//! what the bytes mean; a backend only stores them.
//!
//! | Operation | Contract |
//! |-----------|----------|
//! | `set_bytes(key, Some(d))` | store `d` under `key` |
//! | `set_bytes(key, None)` | clear `key` |
//! | `get_bytes(key)` | `None` when nothing is stored |
//! | `register_default(key, d)` | store `d` only if `key` is empty |
//! | `remove_key(key)` | afterwards `get_bytes(key)` is `None` |
//! | `reset_all()` | drop every value this backend manages |
//! | `perform_batch(op)` | run `op`, flushing once afterwards |

use kvault_core::Result;
use std::sync::Arc;

/// Callback run by [`PersistentStorage::perform_batch`].
pub type BatchOperation<'a> = dyn FnMut(&dyn PersistentStorage) -> Result<()> + 'a;

/// Byte-level backend contract.
///
/// All operations take `&self`; backends serialize access internally. Nothing
/// here is transactional: a failed batch may leave earlier writes applied.
pub trait PersistentStorage: Send + Sync {
    /// Write `data` under `key`, or clear `key` when `data` is `None`.
    fn set_bytes(&self, key: &str, data: Option<&[u8]>) -> Result<()>;

    /// Read the payload stored under `key`.
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write `data` under `key` only if no value exists.
    ///
    /// Must never overwrite, so callers can register defaults on every start.
    fn register_default(&self, key: &str, data: &[u8]) -> Result<()>;

    /// Delete any value stored under `key`.
    fn remove_key(&self, key: &str) -> Result<()>;

    /// Delete every value this backend manages. Scope is backend-defined.
    fn reset_all(&self) -> Result<()>;

    /// Run `operation` against this backend, deferring flush until it returns.
    ///
    /// The deferred flush runs even when `operation` fails; the operation's
    /// error takes precedence over a flush error.
    fn perform_batch(&self, operation: &mut BatchOperation<'_>) -> Result<()>;

    /// Force buffered writes out. Backends without buffering do nothing.
    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

impl<S: PersistentStorage + ?Sized> PersistentStorage for Arc<S> {
    fn set_bytes(&self, key: &str, data: Option<&[u8]>) -> Result<()> {
        (**self).set_bytes(key, data)
    }

    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get_bytes(key)
    }

    fn register_default(&self, key: &str, data: &[u8]) -> Result<()> {
        (**self).register_default(key, data)
    }

    fn remove_key(&self, key: &str) -> Result<()> {
        (**self).remove_key(key)
    }

    fn reset_all(&self) -> Result<()> {
        (**self).reset_all()
    }

    fn perform_batch(&self, operation: &mut BatchOperation<'_>) -> Result<()> {
        (**self).perform_batch(operation)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}
