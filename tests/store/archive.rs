//! Archive Codec Tests
//!
//! Values that archive themselves, stored without a wrapping map.

use crate::*;

// =============================================================================
// ROUND-TRIP TESTS
// =============================================================================

#[test]
fn test_profile_roundtrip() {
    let vault = create_vault();
    let key: TypedKey<Profile, ArchiveCodec> = TypedKey::archived("Profile");

    vault.save(Some(&profile()), &key).unwrap();

    assert_eq!(vault.get(&key), Some(profile()));
}

#[test]
fn test_object_graph_roundtrip() {
    let vault = create_vault();
    let key = TypedKey::archived("ProfileView");
    let view = ProfileView {
        view_id: "123".into(),
        profiles: vec![profile(), Profile { name: "Bar".into(), age: 40 }],
        base: View {
            width: 0.0,
            height: 0.0,
        },
    };

    vault.save(Some(&view), &key).unwrap();

    assert_eq!(vault.get(&key), Some(view));
}

#[test]
fn test_archived_default() {
    let vault = create_vault();
    let key = TypedKey::archived_with_default("Profile", profile());

    assert_eq!(vault.get(&key), Some(profile()));
}

#[test]
fn test_archived_primitive() {
    let vault = create_vault();
    let key: TypedKey<String, ArchiveCodec> = "greeting".to_archived_key();

    vault.save(Some(&"hello".to_string()), &key).unwrap();

    assert_eq!(vault.get(&key).as_deref(), Some("hello"));
}

// =============================================================================
// FAILURE POLICY TESTS
// =============================================================================

#[test]
fn test_class_mismatch_falls_back_to_default() {
    let vault = create_vault();
    let as_profile = TypedKey::archived("slot");
    let as_view = TypedKey::archived_with_default(
        "slot",
        View {
            width: 1.0,
            height: 1.0,
        },
    );

    vault.save(Some(&profile()), &as_profile).unwrap();

    assert_eq!(vault.get(&as_view).map(|v| v.width), Some(1.0));
}

#[test]
fn test_garbage_bytes_fall_back_to_default() {
    let vault = create_vault();
    let key = TypedKey::archived_with_default("Profile", profile());
    vault
        .storage()
        .set_bytes("Profile", Some(b"garbage"))
        .unwrap();

    assert_eq!(vault.get(&key), Some(profile()));
}

#[test]
fn test_structured_payload_not_read_as_archive() {
    let vault = create_vault();
    let structured: TypedKey<String> = TypedKey::new("name");
    let archived: TypedKey<String, ArchiveCodec> = TypedKey::archived("name");

    vault.save(Some(&"Foo".to_string()), &structured).unwrap();

    assert_eq!(vault.get(&archived), None);
}

#[test]
fn test_register_then_save_archived() {
    let vault = create_vault();
    let key = TypedKey::archived("Profile");
    let older = Profile {
        name: "Old".into(),
        age: 99,
    };

    vault.register(&older, &key).unwrap();
    assert_eq!(vault.get(&key), Some(older));

    vault.save(Some(&profile()), &key).unwrap();
    assert_eq!(vault.get(&key), Some(profile()));
}
