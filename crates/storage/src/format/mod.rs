//! On-disk byte format for settings files.
//!
//! A settings file is a fixed header followed by a bincode body:
//!
//! ```text
//! +--------+---------+---------+----------+----------------------+
//! | "KVLT" | version | crc32   | body len | body (bincode map)   |
//! | 4 B    | u16 LE  | u32 LE  | u32 LE   | body len bytes       |
//! +--------+---------+---------+----------+----------------------+
//! ```
//!
//! The CRC covers the body only. Anything that fails to parse is reported as
//! [`Error::Corruption`]; the caller decides whether to recover.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use kvault_core::{Error, Result};
use std::collections::BTreeMap;
use std::io::{Cursor, Read};

/// File magic.
pub const SETTINGS_MAGIC: [u8; 4] = *b"KVLT";

/// Current settings file format version.
pub const SETTINGS_FORMAT_VERSION: u16 = 1;

/// Size of the fixed header in bytes.
pub const SETTINGS_HEADER_SIZE: usize = 4 + 2 + 4 + 4;

/// Map persisted in a settings file.
pub type SettingsMap = BTreeMap<String, Vec<u8>>;

/// Serialize `entries` into a complete settings file image.
pub fn encode_settings(entries: &SettingsMap) -> Result<Vec<u8>> {
    let body =
        bincode::serialize(entries).map_err(|e| Error::SerializationError(e.to_string()))?;
    let body_len = u32::try_from(body.len())
        .map_err(|_| Error::StorageError(format!("settings body too large: {} bytes", body.len())))?;

    let mut out = Vec::with_capacity(SETTINGS_HEADER_SIZE + body.len());
    out.extend_from_slice(&SETTINGS_MAGIC);
    out.write_u16::<LittleEndian>(SETTINGS_FORMAT_VERSION)?;
    out.write_u32::<LittleEndian>(crc32fast::hash(&body))?;
    out.write_u32::<LittleEndian>(body_len)?;
    out.extend_from_slice(&body);
    Ok(out)
}

/// Parse a settings file image.
pub fn decode_settings(bytes: &[u8]) -> Result<SettingsMap> {
    if bytes.len() < SETTINGS_HEADER_SIZE {
        return Err(Error::Corruption(format!(
            "settings file truncated: {} bytes, header needs {}",
            bytes.len(),
            SETTINGS_HEADER_SIZE
        )));
    }

    let mut cursor = Cursor::new(bytes);
    let mut magic = [0u8; 4];
    cursor.read_exact(&mut magic)?;
    if magic != SETTINGS_MAGIC {
        return Err(Error::Corruption(format!("bad settings magic: {:02x?}", magic)));
    }

    let version = cursor.read_u16::<LittleEndian>()?;
    if version != SETTINGS_FORMAT_VERSION {
        return Err(Error::Corruption(format!(
            "unsupported settings format version {}",
            version
        )));
    }

    let expected_crc = cursor.read_u32::<LittleEndian>()?;
    let body_len = cursor.read_u32::<LittleEndian>()? as usize;
    let body = &bytes[SETTINGS_HEADER_SIZE..];
    if body.len() != body_len {
        return Err(Error::Corruption(format!(
            "settings body length mismatch: header says {}, found {}",
            body_len,
            body.len()
        )));
    }

    let actual_crc = crc32fast::hash(body);
    if actual_crc != expected_crc {
        return Err(Error::Corruption(format!(
            "settings checksum mismatch: expected {:08x}, got {:08x}",
            expected_crc, actual_crc
        )));
    }

    bincode::deserialize(body).map_err(|e| Error::Corruption(format!("settings body: {}", e)))
}
