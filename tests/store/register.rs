//! Default Registration Tests

use crate::*;

#[test]
fn test_register_is_idempotent() {
    let vault = create_vault();
    let key: TypedKey<i32> = TypedKey::new("registered");

    vault.register(&1, &key).unwrap();
    vault.register(&2, &key).unwrap();

    assert_eq!(vault.get(&key), Some(1));
}

#[test]
fn test_register_after_save_keeps_saved_value() {
    let vault = create_vault();
    let key: TypedKey<String> = TypedKey::new("theme");

    vault.save(Some(&"dark".to_string()), &key).unwrap();
    vault.register(&"light".to_string(), &key).unwrap();

    assert_eq!(vault.get(&key).as_deref(), Some("dark"));
}

#[test]
fn test_registered_value_beats_key_default() {
    let vault = create_vault();
    let key = TypedKey::with_default("volume", 5_u8);

    vault.register(&7, &key).unwrap();

    assert_eq!(vault.get(&key), Some(7));
    assert!(vault.contains(&key));
}

#[test]
fn test_registered_payload_matches_save_payload() {
    let registered = create_vault();
    let saved = create_vault();
    let key: TypedKey<Vec<u8>> = TypedKey::new("bytes");

    registered.register(&vec![1, 2, 3], &key).unwrap();
    saved.save(Some(&vec![1, 2, 3]), &key).unwrap();

    assert_eq!(
        registered.storage().get_bytes("bytes").unwrap(),
        saved.storage().get_bytes("bytes").unwrap()
    );
}

#[test]
fn test_register_survives_reopen_without_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = settings_path(&dir);
    let key: TypedKey<u32> = TypedKey::new("launches");
    {
        let vault = Vault::builder().path(&path).strict().open().unwrap();
        vault.register(&0, &key).unwrap();
        vault.save(Some(&3), &key).unwrap();
    }

    let vault = Vault::builder().path(&path).strict().open().unwrap();
    vault.register(&0, &key).unwrap();

    assert_eq!(vault.get(&key), Some(3));
}
