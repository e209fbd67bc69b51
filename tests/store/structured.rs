//! Structured Codec Tests
//!
//! Values stored through serde as `{identifier: value}`.

use crate::*;
use std::collections::{BTreeMap, HashMap, HashSet};

const INT_VALUE: TypedKey<i64> = TypedKey::from_static("intValue");
const INT_WITH_DEFAULT: TypedKey<i64> = TypedKey::from_static_with_default("IntWithDefault", 222);

// =============================================================================
// ROUND-TRIP TESTS
// =============================================================================

#[test]
fn test_int_roundtrip() {
    let vault = create_vault();

    vault.save(Some(&123), &INT_VALUE).unwrap();

    assert_eq!(vault.get(&INT_VALUE), Some(123));
}

#[test]
fn test_default_when_never_saved() {
    let vault = create_vault();

    assert_eq!(vault.get(&INT_WITH_DEFAULT), Some(222));
    assert_eq!(vault.get(&INT_VALUE), None);
}

#[test]
fn test_nested_struct_roundtrip() {
    let vault = create_vault();
    let key: TypedKey<MyStruct> = TypedKey::new("structValue");

    vault.save(Some(&my_struct()), &key).unwrap();

    assert_eq!(vault.get(&key), Some(my_struct()));
}

#[test]
fn test_default_struct() {
    let vault = create_vault();
    let key = TypedKey::with_default("defaultStruct", my_struct());

    assert_eq!(vault.get(&key), Some(my_struct()));
}

#[test]
fn test_set_roundtrip() {
    let vault = create_vault();
    let key: TypedKey<HashSet<i32>> = TypedKey::new("SetOfInt");
    let set: HashSet<i32> = [123, 234, 456].into_iter().collect();

    vault.save(Some(&set), &key).unwrap();

    assert_eq!(vault.get(&key), Some(set));
}

#[test]
fn test_map_and_optional_values() {
    let vault = create_vault();
    let map_key: TypedKey<BTreeMap<String, f64>> = TypedKey::new("weights");
    let maybe_key: TypedKey<Option<String>> = TypedKey::new("maybe");
    let mut weights = BTreeMap::new();
    weights.insert("a".to_string(), 0.25);

    vault.save(Some(&weights), &map_key).unwrap();
    vault.save(Some(&None), &maybe_key).unwrap();

    assert_eq!(vault.get(&map_key), Some(weights));
    assert_eq!(vault.get(&maybe_key), Some(None));
    assert!(vault.contains(&maybe_key));
}

#[test]
fn test_string_helpers_build_keys() {
    let vault = create_vault();
    let key: TypedKey<String> = "nickname".to_key();
    let volume = "volume".to_key_with_default(0.8_f64);

    vault.save(Some(&"bob".to_string()), &key).unwrap();

    assert_eq!(vault.get(&key).as_deref(), Some("bob"));
    assert_eq!(vault.get(&volume), Some(0.8));
}

// =============================================================================
// WIRE FORMAT TESTS
// =============================================================================

#[test]
fn test_payload_wraps_value_in_identifier_map() {
    let vault = create_vault();

    vault.save(Some(&123), &INT_VALUE).unwrap();

    let bytes = vault.storage().get_bytes("intValue").unwrap().unwrap();
    assert_eq!(bytes, br#"{"intValue":123}"#);
}

// =============================================================================
// FAILURE POLICY TESTS
// =============================================================================

#[test]
fn test_corrupt_bytes_fall_back_to_default() {
    let vault = create_vault();
    vault
        .storage()
        .set_bytes("IntWithDefault", Some(b"\xde\xad\xbe\xef"))
        .unwrap();

    assert_eq!(vault.get(&INT_WITH_DEFAULT), Some(222));
}

#[test]
fn test_map_without_identifier_falls_back_to_default() {
    let vault = create_vault();
    vault
        .storage()
        .set_bytes("IntWithDefault", Some(br#"{"somethingElse":1}"#))
        .unwrap();

    assert_eq!(vault.get(&INT_WITH_DEFAULT), Some(222));
}

#[test]
fn test_same_identifier_other_type_falls_back() {
    let vault = create_vault();
    let as_text: TypedKey<String> = TypedKey::new("IntWithDefault");

    vault.save(Some(&"not a number".to_string()), &as_text).unwrap();

    assert_eq!(vault.get(&INT_WITH_DEFAULT), Some(222));
    assert!(as_text == INT_WITH_DEFAULT);
}

#[test]
fn test_unencodable_value_preserves_previous() {
    let vault = create_vault();
    let key: TypedKey<HashMap<(i32, i32), String>> = TypedKey::new("grid");
    let mut good = HashMap::new();
    good.insert((0, 0), "origin".to_string());
    vault.storage().set_bytes("grid", Some(b"previous")).unwrap();

    let result = vault.save(Some(&good), &key);

    assert!(result.is_ok(), "structured encode failures are swallowed");
    assert_eq!(
        vault.storage().get_bytes("grid").unwrap(),
        Some(b"previous".to_vec())
    );
}

#[test]
fn test_nan_save_keeps_previous_value() {
    let vault = create_vault();
    let key = TypedKey::with_default("ratio", 0.5_f64);
    vault.save(Some(&1.25), &key).unwrap();

    vault.save(Some(&f64::NAN), &key).unwrap();

    assert_eq!(vault.get(&key), Some(1.25));
    assert_eq!(
        vault.storage().get_bytes("ratio").unwrap(),
        Some(br#"{"ratio":1.25}"#.to_vec())
    );
}

#[test]
fn test_infinite_default_not_registered() {
    let vault = create_vault();
    let key: TypedKey<f64> = TypedKey::new("limit");

    vault.register(&f64::INFINITY, &key).unwrap();
    assert!(!vault.contains(&key));
    assert_eq!(vault.get(&key), None);

    vault.register(&10.0, &key).unwrap();
    assert_eq!(vault.get(&key), Some(10.0));
}

#[test]
fn test_nested_non_finite_float_is_unencodable() {
    let vault = create_vault();
    let key: TypedKey<Vec<Option<f32>>> = TypedKey::new("samples");
    vault.save(Some(&vec![Some(1.0), None]), &key).unwrap();

    vault.save(Some(&vec![Some(f32::NEG_INFINITY)]), &key).unwrap();

    assert_eq!(vault.get(&key), Some(vec![Some(1.0), None]));
}

// =============================================================================
// REMOVE / CLEAR TESTS
// =============================================================================

#[test]
fn test_remove_restores_default() {
    let vault = create_vault();

    vault.save(Some(&1), &INT_WITH_DEFAULT).unwrap();
    vault.remove(&INT_WITH_DEFAULT).unwrap();

    assert_eq!(vault.get(&INT_WITH_DEFAULT), Some(222));
    assert!(!vault.contains(&INT_WITH_DEFAULT));
}

#[test]
fn test_save_none_clears() {
    let vault = create_vault();

    vault.save(Some(&5), &INT_VALUE).unwrap();
    vault.save(None, &INT_VALUE).unwrap();

    assert_eq!(vault.get(&INT_VALUE), None);
}

#[test]
fn test_remove_missing_key_is_ok() {
    let vault = create_vault();

    vault.remove(&INT_VALUE).unwrap();
}
