//! Typed access directly on the reference backends.
//!
//! Every backend in `kvault-storage` is usable as a [`KeyValueStore`] without
//! going through [`Vault`](crate::Vault).

use crate::store::KeyValueStore;
use kvault_storage::{FileStorage, MemoryStorage, NamespacedStorage, PersistentStorage};
use std::sync::Arc;

impl KeyValueStore for MemoryStorage {
    fn persistent_store(&self) -> &dyn PersistentStorage {
        self
    }
}

impl KeyValueStore for FileStorage {
    fn persistent_store(&self) -> &dyn PersistentStorage {
        self
    }
}

impl<S: PersistentStorage> KeyValueStore for NamespacedStorage<S> {
    fn persistent_store(&self) -> &dyn PersistentStorage {
        self
    }
}

impl<S: PersistentStorage + ?Sized> KeyValueStore for Arc<S> {
    fn persistent_store(&self) -> &dyn PersistentStorage {
        self
    }
}
