//! Archivable implementations for plain values
//!
//! Lets scalars and blobs go through the archive family directly, each stored
//! as a one-field object under the key `"value"`.

use super::{Archivable, ArchiveDecoder, ArchiveEncoder};

const VALUE_KEY: &str = "value";

impl Archivable for String {
    const CLASS_NAME: &'static str = "String";

    fn encode_with(&self, coder: &mut ArchiveEncoder) {
        coder.encode_str(VALUE_KEY, self);
    }

    fn decode_with(coder: &ArchiveDecoder<'_>) -> Option<Self> {
        coder.decode_str(VALUE_KEY)
    }
}

impl Archivable for i64 {
    const CLASS_NAME: &'static str = "Int";

    fn encode_with(&self, coder: &mut ArchiveEncoder) {
        coder.encode_i64(VALUE_KEY, *self);
    }

    fn decode_with(coder: &ArchiveDecoder<'_>) -> Option<Self> {
        coder
            .contains_key(VALUE_KEY)
            .then(|| coder.decode_i64(VALUE_KEY))
    }
}

impl Archivable for bool {
    const CLASS_NAME: &'static str = "Bool";

    fn encode_with(&self, coder: &mut ArchiveEncoder) {
        coder.encode_bool(VALUE_KEY, *self);
    }

    fn decode_with(coder: &ArchiveDecoder<'_>) -> Option<Self> {
        coder
            .contains_key(VALUE_KEY)
            .then(|| coder.decode_bool(VALUE_KEY))
    }
}

impl Archivable for f64 {
    const CLASS_NAME: &'static str = "Double";

    fn encode_with(&self, coder: &mut ArchiveEncoder) {
        coder.encode_f64(VALUE_KEY, *self);
    }

    fn decode_with(coder: &ArchiveDecoder<'_>) -> Option<Self> {
        coder
            .contains_key(VALUE_KEY)
            .then(|| coder.decode_f64(VALUE_KEY))
    }
}

impl Archivable for Vec<u8> {
    const CLASS_NAME: &'static str = "Data";

    fn encode_with(&self, coder: &mut ArchiveEncoder) {
        coder.encode_bytes(VALUE_KEY, self);
    }

    fn decode_with(coder: &ArchiveDecoder<'_>) -> Option<Self> {
        coder.decode_bytes(VALUE_KEY)
    }
}
