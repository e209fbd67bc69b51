//! The typed key-value façade.
//!
//! [`KeyValueStore`] turns a byte-level [`PersistentStorage`] into a typed
//! store. Implementors provide one method, [`persistent_store`], and inherit
//! every typed operation. The codec marker on each [`TypedKey`] decides how a
//! value becomes bytes:
//!
//! | Family | Encode failure on write | Decode failure on read |
//! |--------|-------------------------|------------------------|
//! | [`StructuredCodec`](kvault_codec::StructuredCodec) | skipped, logged, `Ok(())` | key default |
//! | [`ArchiveCodec`](kvault_codec::ArchiveCodec) | `Err(Error::Codec)` | key default |
//!
//! Reads never fail. A backend read error is logged with `warn!` and the
//! key's default is returned, so call sites stay free of error handling for
//! the common case. Writes propagate backend errors.
//!
//! [`persistent_store`]: KeyValueStore::persistent_store

use crate::error::{Error, Result};
use crate::slot::Slot;
use kvault_codec::{Codec, CodecKind};
use kvault_core::TypedKey;
use kvault_storage::PersistentStorage;
use tracing::{debug, warn};

/// Typed operations over a [`PersistentStorage`] backend.
///
/// # Example
///
/// ```
/// use kvault::prelude::*;
///
/// const INT_VALUE: TypedKey<i64> = TypedKey::from_static("intValue");
/// const WITH_DEFAULT: TypedKey<i64> = TypedKey::from_static_with_default("IntWithDefault", 222);
///
/// let vault = Vault::ephemeral();
/// vault.save(Some(&123), &INT_VALUE)?;
///
/// assert_eq!(vault.get(&INT_VALUE), Some(123));
/// assert_eq!(vault.get(&WITH_DEFAULT), Some(222));
/// # Ok::<(), kvault::Error>(())
/// ```
pub trait KeyValueStore {
    /// The backend every typed operation reads and writes.
    fn persistent_store(&self) -> &dyn PersistentStorage;

    /// Store `default` under `key` unless a value is already present.
    ///
    /// Safe to call on every start; it never overwrites.
    fn register<T, C>(&self, default: &T, key: &TypedKey<T, C>) -> Result<()>
    where
        C: Codec<T>,
    {
        let id = key.identifier();
        if let Some(bytes) = encode_for_write::<T, C>(id, default)? {
            self.persistent_store().register_default(id, &bytes)?;
        }
        Ok(())
    }

    /// Store `value` under `key`, or clear the key when `value` is `None`.
    fn save<T, C>(&self, value: Option<&T>, key: &TypedKey<T, C>) -> Result<()>
    where
        C: Codec<T>,
    {
        let id = key.identifier();
        let Some(value) = value else {
            self.persistent_store().set_bytes(id, None)?;
            return Ok(());
        };
        if let Some(bytes) = encode_for_write::<T, C>(id, value)? {
            self.persistent_store().set_bytes(id, Some(&bytes))?;
        }
        Ok(())
    }

    /// Read the value for `key`, falling back to the key's default when
    /// nothing decodable is stored.
    fn get<T, C>(&self, key: &TypedKey<T, C>) -> Option<T>
    where
        T: Clone,
        C: Codec<T>,
    {
        let id = key.identifier();
        let bytes = match self.persistent_store().get_bytes(id) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return key.cloned_default(),
            Err(e) => {
                warn!(key = %id, error = %e, "backend read failed, using default");
                return key.cloned_default();
            }
        };
        match C::decode(id, &bytes) {
            Ok(Some(value)) => Some(value),
            Ok(None) => {
                debug!(key = %id, codec = %C::KIND, "payload holds no entry for key, using default");
                key.cloned_default()
            }
            Err(e) => {
                debug!(key = %id, error = %e, "stored value not decodable, using default");
                key.cloned_default()
            }
        }
    }

    /// Delete whatever is stored under `key`.
    fn remove<T, C>(&self, key: &TypedKey<T, C>) -> Result<()> {
        self.persistent_store().remove_key(key.identifier())?;
        Ok(())
    }

    /// Whether any bytes are stored under `key`.
    ///
    /// Defaults do not count, and neither do undecodable payloads' values:
    /// this only asks the backend.
    fn contains<T, C>(&self, key: &TypedKey<T, C>) -> bool {
        match self.persistent_store().get_bytes(key.identifier()) {
            Ok(bytes) => bytes.is_some(),
            Err(e) => {
                warn!(key = %key.identifier(), error = %e, "backend read failed");
                false
            }
        }
    }

    /// Run `operation` as one batch and flush once afterwards.
    ///
    /// The operation receives the backend; typed calls work on it directly.
    /// There is no atomicity: writes made before a failure stay applied.
    fn perform_and_wait<F>(&self, operation: F) -> Result<()>
    where
        F: FnOnce(&dyn PersistentStorage) -> Result<()>,
    {
        let mut operation = Some(operation);
        let mut failure: Option<Error> = None;
        let outcome = self.persistent_store().perform_batch(&mut |storage| {
            let Some(operation) = operation.take() else {
                return Ok(());
            };
            operation(storage).map_err(|e| {
                let marker = kvault_core::Error::StorageError(format!("batch aborted: {}", e));
                failure = Some(e);
                marker
            })
        });
        match failure {
            Some(e) => Err(e),
            None => outcome.map_err(Error::from),
        }
    }

    /// Delete every value the backend manages.
    fn reset(&self) -> Result<()> {
        self.persistent_store().reset_all()?;
        Ok(())
    }

    /// Indexed access to the value behind `key`.
    fn slot<'a, T, C>(&'a self, key: &'a TypedKey<T, C>) -> Slot<'a, Self, T, C> {
        Slot::new(self, key)
    }
}

/// Encode a value for a write, applying the family's failure policy.
///
/// `Ok(None)` means the write is skipped.
fn encode_for_write<T, C>(id: &str, value: &T) -> Result<Option<Vec<u8>>>
where
    C: Codec<T>,
{
    match C::encode(id, value) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) => match C::KIND {
            CodecKind::StructuredMapping => {
                debug!(key = %id, error = %e, "value not encodable, write skipped");
                Ok(None)
            }
            CodecKind::ObjectArchive => Err(Error::Codec(e)),
        },
    }
}

impl<'s> KeyValueStore for dyn PersistentStorage + 's {
    fn persistent_store(&self) -> &dyn PersistentStorage {
        self
    }
}
