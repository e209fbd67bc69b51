//! Codec family markers
//!
//! A [`TypedKey`](crate::TypedKey) names its codec family through a zero-sized
//! marker type parameter. The encode/decode behavior for each marker lives in
//! the codec crate; this module only defines the markers and [`CodecKind`] so
//! keys can be declared without depending on any serialization library.

/// The two codec families a value can be stored with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecKind {
    /// Generic structured serialization, payload is `{identifier: value}`
    StructuredMapping,
    /// Keyed object-graph archive of exactly one value
    ObjectArchive,
}

impl CodecKind {
    /// Human-readable name of the family.
    pub fn name(&self) -> &'static str {
        match self {
            CodecKind::StructuredMapping => "structured-mapping",
            CodecKind::ObjectArchive => "object-archive",
        }
    }
}

impl std::fmt::Display for CodecKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Implemented by every codec marker type.
pub trait CodecFamily {
    /// Family this marker selects
    const KIND: CodecKind;
}

/// Marker for the structured-serialization family (the default).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StructuredCodec;

/// Marker for the object-archive family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ArchiveCodec;

impl CodecFamily for StructuredCodec {
    const KIND: CodecKind = CodecKind::StructuredMapping;
}

impl CodecFamily for ArchiveCodec {
    const KIND: CodecKind = CodecKind::ObjectArchive;
}
