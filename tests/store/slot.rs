//! Indexed Access Tests

use crate::*;

#[test]
fn test_slot_get_and_set() {
    let vault = create_vault();
    let key = TypedKey::with_default("IntWithDefault", 222_i64);
    let slot = vault.slot(&key);

    assert_eq!(slot.get(), Some(222));
    slot.set(Some(1)).unwrap();
    assert_eq!(vault.get(&key), Some(1));
}

#[test]
fn test_slot_append_requires_update() {
    let vault = create_vault();
    let key: TypedKey<Vec<MyStruct>> = TypedKey::new("StructsArray");
    let slot = vault.slot(&key);
    slot.set(Some(vec![my_struct()])).unwrap();

    // A copy changed in place is not written back.
    let mut copy = slot.get().unwrap();
    copy.push(my_struct());
    assert_eq!(slot.get().map(|v| v.len()), Some(1));

    slot.update(|v| v.get_or_insert_with(Vec::new).push(my_struct()))
        .unwrap();
    assert_eq!(slot.get().map(|v| v.len()), Some(2));
}

#[test]
fn test_slot_on_archived_key() {
    let vault = create_vault();
    let key = TypedKey::archived_with_default("Profile", profile());
    let slot = vault.slot(&key);

    slot.update(|p| {
        if let Some(p) = p {
            p.age += 1;
        }
    })
    .unwrap();

    assert_eq!(vault.get(&key).map(|p| p.age), Some(24));
}

#[test]
fn test_slot_set_none_clears() {
    let vault = create_vault();
    let key: TypedKey<bool> = TypedKey::new("flag");
    let slot = vault.slot(&key);

    slot.set(Some(true)).unwrap();
    slot.set(None).unwrap();

    assert!(!vault.contains(&key));
}
