//! Reset Tests

use crate::*;

#[test]
fn test_reset_restores_every_default() {
    let vault = create_vault();
    let a = TypedKey::with_default("a", 1_i32);
    let b: TypedKey<String> = TypedKey::new("b");
    let c = TypedKey::archived_with_default("c", profile());

    vault.save(Some(&10), &a).unwrap();
    vault.save(Some(&"x".to_string()), &b).unwrap();
    vault
        .save(
            Some(&Profile {
                name: "Other".into(),
                age: 1,
            }),
            &c,
        )
        .unwrap();

    vault.reset().unwrap();

    assert_eq!(vault.get(&a), Some(1));
    assert_eq!(vault.get(&b), None);
    assert_eq!(vault.get(&c), Some(profile()));
}

#[test]
fn test_reset_persists_for_file_vault() {
    let (vault, dir) = create_file_vault();
    let key: TypedKey<i32> = TypedKey::new("n");
    vault.save(Some(&1), &key).unwrap();

    vault.reset().unwrap();
    drop(vault);

    let reopened = Vault::open(settings_path(&dir)).unwrap();
    assert!(!reopened.contains(&key));
}

#[test]
fn test_namespaced_reset_leaves_other_keys() {
    let dir = TempDir::new().unwrap();
    let path = settings_path(&dir);
    let key: TypedKey<i32> = TypedKey::new("n");
    let outside: TypedKey<i32> = TypedKey::new("outside");
    {
        let plain = Vault::builder().path(&path).strict().open().unwrap();
        plain.save(Some(&1), &outside).unwrap();
    }
    {
        let scoped = Vault::builder()
            .path(&path)
            .strict()
            .namespace("auth")
            .open()
            .unwrap();
        scoped.save(Some(&2), &key).unwrap();
        scoped.reset().unwrap();
        assert_eq!(scoped.get(&key), None);
    }

    let plain = Vault::open(&path).unwrap();
    assert_eq!(plain.get(&outside), Some(1));
}
