//! Keyed archive coders
//!
//! An archived object is a class name plus a map of named fields. Objects can
//! hold other objects, so an archive is a tree rooted at the stored value.

use super::Archivable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single archived field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArchiveValue {
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point
    Float(f64),
    /// UTF-8 string
    Str(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Ordered list of values
    Array(Vec<ArchiveValue>),
    /// Nested object
    Object(ArchivedObject),
}

/// An archived object: its class name and encoded fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchivedObject {
    /// Class name written by [`Archivable::CLASS_NAME`]
    pub class: String,
    /// Fields by key
    pub fields: BTreeMap<String, ArchiveValue>,
}

impl ArchivedObject {
    /// Archive `value` into an object tree.
    pub fn from_value<T: Archivable>(value: &T) -> Self {
        let mut encoder = ArchiveEncoder::new();
        value.encode_with(&mut encoder);
        encoder.finish(T::CLASS_NAME)
    }

    /// Rebuild a `T` if this object is of class `T::CLASS_NAME`.
    pub fn to_value<T: Archivable>(&self) -> Option<T> {
        if self.class != T::CLASS_NAME {
            return None;
        }
        T::decode_with(&ArchiveDecoder::new(self))
    }
}

/// Collects the fields of one object during archiving.
#[derive(Debug, Default)]
pub struct ArchiveEncoder {
    fields: BTreeMap<String, ArchiveValue>,
}

impl ArchiveEncoder {
    /// Create an empty encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode a boolean.
    pub fn encode_bool(&mut self, key: &str, value: bool) {
        self.encode_value(key, ArchiveValue::Bool(value));
    }

    /// Encode an integer.
    pub fn encode_i64(&mut self, key: &str, value: i64) {
        self.encode_value(key, ArchiveValue::Int(value));
    }

    /// Encode a float.
    pub fn encode_f64(&mut self, key: &str, value: f64) {
        self.encode_value(key, ArchiveValue::Float(value));
    }

    /// Encode a string.
    pub fn encode_str(&mut self, key: &str, value: &str) {
        self.encode_value(key, ArchiveValue::Str(value.to_owned()));
    }

    /// Encode raw bytes.
    pub fn encode_bytes(&mut self, key: &str, value: &[u8]) {
        self.encode_value(key, ArchiveValue::Bytes(value.to_vec()));
    }

    /// Encode a nested object.
    pub fn encode_object<T: Archivable>(&mut self, key: &str, value: &T) {
        self.encode_value(key, ArchiveValue::Object(ArchivedObject::from_value(value)));
    }

    /// Encode a list of nested objects.
    pub fn encode_objects<T: Archivable>(&mut self, key: &str, values: &[T]) {
        let items = values
            .iter()
            .map(|v| ArchiveValue::Object(ArchivedObject::from_value(v)))
            .collect();
        self.encode_value(key, ArchiveValue::Array(items));
    }

    /// Encode a prebuilt value. Later writes to the same key replace earlier ones.
    pub fn encode_value(&mut self, key: &str, value: ArchiveValue) {
        self.fields.insert(key.to_owned(), value);
    }

    pub(crate) fn finish(self, class: &str) -> ArchivedObject {
        ArchivedObject {
            class: class.to_owned(),
            fields: self.fields,
        }
    }
}

/// Read access to the fields of one archived object.
///
/// Scalar getters return zero values for missing or mistyped fields, the way a
/// keyed coder does; use [`contains_key`](Self::contains_key) when absence
/// matters.
#[derive(Debug, Clone, Copy)]
pub struct ArchiveDecoder<'a> {
    object: &'a ArchivedObject,
}

impl<'a> ArchiveDecoder<'a> {
    /// Wrap an archived object.
    pub fn new(object: &'a ArchivedObject) -> Self {
        Self { object }
    }

    /// Class name of the object being decoded.
    pub fn class_name(&self) -> &'a str {
        &self.object.class
    }

    /// Whether a field was encoded under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.object.fields.contains_key(key)
    }

    /// Raw access to a field.
    pub fn decode_value(&self, key: &str) -> Option<&'a ArchiveValue> {
        self.object.fields.get(key)
    }

    /// Decode a boolean, `false` when absent.
    pub fn decode_bool(&self, key: &str) -> bool {
        matches!(self.decode_value(key), Some(ArchiveValue::Bool(true)))
    }

    /// Decode an integer, `0` when absent.
    pub fn decode_i64(&self, key: &str) -> i64 {
        match self.decode_value(key) {
            Some(ArchiveValue::Int(v)) => *v,
            _ => 0,
        }
    }

    /// Decode a float, `0.0` when absent. Integers widen.
    pub fn decode_f64(&self, key: &str) -> f64 {
        match self.decode_value(key) {
            Some(ArchiveValue::Float(v)) => *v,
            Some(ArchiveValue::Int(v)) => *v as f64,
            _ => 0.0,
        }
    }

    /// Decode a string.
    pub fn decode_str(&self, key: &str) -> Option<String> {
        match self.decode_value(key) {
            Some(ArchiveValue::Str(v)) => Some(v.clone()),
            _ => None,
        }
    }

    /// Decode raw bytes.
    pub fn decode_bytes(&self, key: &str) -> Option<Vec<u8>> {
        match self.decode_value(key) {
            Some(ArchiveValue::Bytes(v)) => Some(v.clone()),
            _ => None,
        }
    }

    /// Decode a nested object of class `T::CLASS_NAME`.
    pub fn decode_object<T: Archivable>(&self, key: &str) -> Option<T> {
        match self.decode_value(key) {
            Some(ArchiveValue::Object(obj)) => obj.to_value(),
            _ => None,
        }
    }

    /// Decode a list of nested objects. Fails if any element fails.
    pub fn decode_objects<T: Archivable>(&self, key: &str) -> Option<Vec<T>> {
        match self.decode_value(key) {
            Some(ArchiveValue::Array(items)) => items
                .iter()
                .map(|item| match item {
                    ArchiveValue::Object(obj) => obj.to_value(),
                    _ => None,
                })
                .collect(),
            _ => None,
        }
    }
}
