//! Indexed access to a single key.
//!
//! A [`Slot`] binds a store to one key so the value can be read, replaced or
//! modified in place without repeating the key. Reads hand out owned copies;
//! changing a copy does nothing until it is written back, which is what
//! [`Slot::update`] does.

use crate::error::Result;
use crate::store::KeyValueStore;
use kvault_codec::Codec;
use kvault_core::{StructuredCodec, TypedKey};
use std::fmt;

/// A store paired with one key.
///
/// ```
/// use kvault::prelude::*;
///
/// let vault = Vault::ephemeral();
/// let key: TypedKey<Vec<String>> = TypedKey::new("StructsArray");
/// let names = vault.slot(&key);
///
/// names.set(Some(vec!["a".to_string()]))?;
/// names.update(|v| v.get_or_insert_with(Vec::new).push("b".to_string()))?;
///
/// assert_eq!(names.get().map(|v| v.len()), Some(2));
/// # Ok::<(), kvault::Error>(())
/// ```
pub struct Slot<'a, S: ?Sized, T, C = StructuredCodec> {
    store: &'a S,
    key: &'a TypedKey<T, C>,
}

impl<'a, S: ?Sized, T, C> Slot<'a, S, T, C> {
    pub(crate) fn new(store: &'a S, key: &'a TypedKey<T, C>) -> Self {
        Self { store, key }
    }

    /// The key this slot addresses.
    pub fn key(&self) -> &'a TypedKey<T, C> {
        self.key
    }
}

impl<'a, S, T, C> Slot<'a, S, T, C>
where
    S: KeyValueStore + ?Sized,
    T: Clone,
    C: Codec<T>,
{
    /// Current value, or the key's default.
    pub fn get(&self) -> Option<T> {
        self.store.get(self.key)
    }

    /// Replace the value; `None` clears it.
    pub fn set(&self, value: Option<T>) -> Result<()> {
        self.store.save(value.as_ref(), self.key)
    }

    /// Read, modify and write back in one call.
    ///
    /// The closure sees the same value [`get`](Self::get) would return and
    /// may set it to `None` to clear the key.
    pub fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Option<T>),
    {
        let mut value = self.get();
        f(&mut value);
        self.set(value)
    }

    /// Delete the stored value.
    pub fn remove(&self) -> Result<()> {
        self.store.remove(self.key)
    }
}

impl<'a, S: ?Sized, T, C> fmt::Debug for Slot<'a, S, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot").field("key", &self.key.identifier()).finish()
    }
}
