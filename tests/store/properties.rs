//! Property Tests
//!
//! Round-trip and fallback invariants over generated values.

use crate::*;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn arb_another() -> impl Strategy<Value = AnotherStruct> {
    (".*", ".*").prop_map(|(name, second_name)| AnotherStruct { name, second_name })
}

fn arb_my_struct() -> impl Strategy<Value = MyStruct> {
    (".*", ".*", arb_another()).prop_map(|(name, second_name, codable)| MyStruct {
        name,
        second_name,
        codable,
    })
}

fn arb_profile() -> impl Strategy<Value = Profile> {
    (".*", any::<i64>()).prop_map(|(name, age)| Profile { name, age })
}

proptest! {
    #[test]
    fn structured_roundtrip_integers(id in "[a-zA-Z]{1,16}", value in any::<i64>()) {
        let vault = Vault::ephemeral();
        let key: TypedKey<i64> = TypedKey::new(id);
        vault.save(Some(&value), &key).unwrap();
        prop_assert_eq!(vault.get(&key), Some(value));
    }

    #[test]
    fn structured_roundtrip_strings(values in proptest::collection::vec(".*", 0..16)) {
        let vault = Vault::ephemeral();
        let key: TypedKey<Vec<String>> = TypedKey::new("strings");
        vault.save(Some(&values), &key).unwrap();
        prop_assert_eq!(vault.get(&key), Some(values));
    }

    #[test]
    fn structured_roundtrip_sets(values in proptest::collection::btree_set(any::<i32>(), 0..32)) {
        let vault = Vault::ephemeral();
        let key: TypedKey<BTreeSet<i32>> = TypedKey::new("set");
        vault.save(Some(&values), &key).unwrap();
        prop_assert_eq!(vault.get(&key), Some(values));
    }

    #[test]
    fn structured_roundtrip_nested(value in arb_my_struct()) {
        let vault = Vault::ephemeral();
        let key: TypedKey<MyStruct> = TypedKey::new("nested");
        vault.save(Some(&value), &key).unwrap();
        prop_assert_eq!(vault.get(&key), Some(value));
    }

    #[test]
    fn archive_roundtrip(value in arb_profile()) {
        let vault = Vault::ephemeral();
        let key = TypedKey::archived("profile");
        vault.save(Some(&value), &key).unwrap();
        prop_assert_eq!(vault.get(&key), Some(value));
    }

    #[test]
    fn arbitrary_bytes_never_panic_and_fall_back(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let vault = Vault::ephemeral();
        vault.storage().set_bytes("k", Some(&bytes)).unwrap();

        let structured = TypedKey::with_default("k", -1_i64);
        let archived = TypedKey::archived_with_default("k", profile());

        let read = vault.get(&structured);
        prop_assert!(read.is_some());
        prop_assert!(vault.get(&archived).is_some());
    }

    #[test]
    fn remove_restores_default(value in any::<u32>(), default in any::<u32>()) {
        let vault = Vault::ephemeral();
        let key = TypedKey::with_default("k", default);
        vault.save(Some(&value), &key).unwrap();
        vault.remove(&key).unwrap();
        prop_assert_eq!(vault.get(&key), Some(default));
    }

    #[test]
    fn file_vault_roundtrip(entries in proptest::collection::btree_map("[a-z]{1,8}", any::<i32>(), 1..16)) {
        let dir = TempDir::new().unwrap();
        let path = settings_path(&dir);
        {
            let vault = Vault::builder().path(&path).no_durability().open().unwrap();
            for (id, value) in &entries {
                vault.save(Some(value), &TypedKey::<i32>::new(id.clone())).unwrap();
            }
            vault.flush().unwrap();
        }
        let vault = Vault::open(&path).unwrap();
        for (id, value) in &entries {
            prop_assert_eq!(vault.get(&TypedKey::<i32>::new(id.clone())), Some(*value));
        }
    }
}
