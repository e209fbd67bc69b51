//! Typed keys
//!
//! A [`TypedKey`] names a storage slot. It pairs a string identifier with a
//! phantom value type `T`, a phantom codec family `C`, and an optional default
//! value returned when nothing (or nothing decodable) is stored.
//!
//! Identity is the identifier alone: two keys with the same identifier are
//! equal and hash identically even when their value types differ, because
//! they address the same bytes in a backend.
//!
//! # Examples
//!
//! ```
//! use kvault_core::TypedKey;
//!
//! const LAUNCH_COUNT: TypedKey<u32> = TypedKey::from_static_with_default("launchCount", 0);
//! let nickname: TypedKey<String> = TypedKey::new("nickname");
//!
//! assert_eq!(LAUNCH_COUNT.identifier(), "launchCount");
//! assert_eq!(LAUNCH_COUNT.default_value(), Some(&0));
//! assert!(nickname.default_value().is_none());
//! ```

use crate::codec::{ArchiveCodec, CodecFamily, CodecKind, StructuredCodec};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Immutable descriptor for a typed storage slot.
///
/// `C` defaults to [`StructuredCodec`]; use the `archived*` constructors for
/// values stored through the object-archive family.
pub struct TypedKey<T, C = StructuredCodec> {
    identifier: Cow<'static, str>,
    default_value: Option<T>,
    _codec: PhantomData<fn() -> C>,
}

impl<T> TypedKey<T, StructuredCodec> {
    /// Create a structured key without a default.
    pub fn new(identifier: impl Into<Cow<'static, str>>) -> Self {
        Self::with_parts(identifier.into(), None)
    }

    /// Create a structured key with a default value.
    pub fn with_default(identifier: impl Into<Cow<'static, str>>, default_value: T) -> Self {
        Self::with_parts(identifier.into(), Some(default_value))
    }

    /// Const constructor for `const`/`static` key declarations.
    pub const fn from_static(identifier: &'static str) -> Self {
        Self {
            identifier: Cow::Borrowed(identifier),
            default_value: None,
            _codec: PhantomData,
        }
    }

    /// Const constructor with a default value.
    pub const fn from_static_with_default(identifier: &'static str, default_value: T) -> Self {
        Self {
            identifier: Cow::Borrowed(identifier),
            default_value: Some(default_value),
            _codec: PhantomData,
        }
    }
}

impl<T> TypedKey<T, ArchiveCodec> {
    /// Create an object-archive key without a default.
    pub fn archived(identifier: impl Into<Cow<'static, str>>) -> Self {
        Self::with_parts(identifier.into(), None)
    }

    /// Create an object-archive key with a default value.
    pub fn archived_with_default(identifier: impl Into<Cow<'static, str>>, default_value: T) -> Self {
        Self::with_parts(identifier.into(), Some(default_value))
    }

    /// Const constructor for archived `const`/`static` keys.
    pub const fn archived_static(identifier: &'static str) -> Self {
        Self {
            identifier: Cow::Borrowed(identifier),
            default_value: None,
            _codec: PhantomData,
        }
    }
}

impl<T, C> TypedKey<T, C> {
    fn with_parts(identifier: Cow<'static, str>, default_value: Option<T>) -> Self {
        Self {
            identifier,
            default_value,
            _codec: PhantomData,
        }
    }

    /// The storage identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The declared default, if any.
    pub fn default_value(&self) -> Option<&T> {
        self.default_value.as_ref()
    }

    /// Codec family this key is stored with.
    pub fn codec_kind(&self) -> CodecKind
    where
        C: CodecFamily,
    {
        C::KIND
    }
}

impl<T: Clone, C> TypedKey<T, C> {
    /// Owned copy of the default, used as the fallback of every read.
    pub fn cloned_default(&self) -> Option<T> {
        self.default_value.clone()
    }
}

impl<T: Clone, C> Clone for TypedKey<T, C> {
    fn clone(&self) -> Self {
        Self::with_parts(self.identifier.clone(), self.default_value.clone())
    }
}

impl<T, C, U, D> PartialEq<TypedKey<U, D>> for TypedKey<T, C> {
    fn eq(&self, other: &TypedKey<U, D>) -> bool {
        self.identifier == other.identifier
    }
}

impl<T, C> Eq for TypedKey<T, C> {}

impl<T, C> Hash for TypedKey<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
    }
}

impl<T, C> fmt::Debug for TypedKey<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedKey")
            .field("identifier", &self.identifier)
            .field("value_type", &std::any::type_name::<T>())
            .field("has_default", &self.default_value.is_some())
            .finish()
    }
}

impl<T, C> fmt::Display for TypedKey<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}

/// Shorthand for turning strings into keys.
///
/// ```
/// use kvault_core::{IntoTypedKey, TypedKey};
///
/// let key: TypedKey<Vec<String>> = "recentSearches".to_key();
/// let with_default = "volume".to_key_with_default(0.8_f64);
/// assert_eq!(key.identifier(), "recentSearches");
/// assert_eq!(with_default.default_value(), Some(&0.8));
/// ```
pub trait IntoTypedKey {
    /// Structured key without a default.
    fn to_key<T>(&self) -> TypedKey<T>;

    /// Structured key with a default value.
    fn to_key_with_default<T>(&self, default_value: T) -> TypedKey<T>;

    /// Object-archive key without a default.
    fn to_archived_key<T>(&self) -> TypedKey<T, ArchiveCodec>;
}

impl IntoTypedKey for str {
    fn to_key<T>(&self) -> TypedKey<T> {
        TypedKey::new(self.to_owned())
    }

    fn to_key_with_default<T>(&self, default_value: T) -> TypedKey<T> {
        TypedKey::with_default(self.to_owned(), default_value)
    }

    fn to_archived_key<T>(&self) -> TypedKey<T, ArchiveCodec> {
        TypedKey::archived(self.to_owned())
    }
}
