//! Text encoding detection
//!
//! Shared by dialect inference (to decode the sample) and the integrity
//! validator (to report the artifact's observed encoding).
//!
//! Candidate set: UTF-8 (BOM optional), UTF-16 LE/BE (BOM required).
//! Pure ASCII is reported as UTF-8.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Byte-order mark prefixes.
const BOM_UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];
const BOM_UTF16_LE: &[u8] = &[0xFF, 0xFE];
const BOM_UTF16_BE: &[u8] = &[0xFE, 0xFF];

/// A detected text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    /// UTF-8, with or without BOM
    #[serde(rename = "utf-8")]
    Utf8,
    /// UTF-16 little-endian (BOM present)
    #[serde(rename = "utf-16-le")]
    Utf16Le,
    /// UTF-16 big-endian (BOM present)
    #[serde(rename = "utf-16-be")]
    Utf16Be,
}

impl Encoding {
    /// Canonical lowercase label, as used in descriptors.
    pub fn label(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf16Le => "utf-16-le",
            Encoding::Utf16Be => "utf-16-be",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Detects the encoding of a byte sequence.
///
/// BOMs win outright. Without a BOM, valid UTF-8 (which covers pure
/// ASCII) is reported as UTF-8. Returns `None` when no candidate
/// decodes the bytes.
///
/// `truncated` marks a sample cut from a longer source: an incomplete
/// multi-byte sequence at the very end is then tolerated rather than
/// treated as invalid.
pub fn detect_encoding(bytes: &[u8], truncated: bool) -> Option<Encoding> {
    if bytes.starts_with(BOM_UTF8) {
        return Some(Encoding::Utf8);
    }
    if bytes.starts_with(BOM_UTF16_LE) {
        return Some(Encoding::Utf16Le);
    }
    if bytes.starts_with(BOM_UTF16_BE) {
        return Some(Encoding::Utf16Be);
    }

    match std::str::from_utf8(bytes) {
        Ok(_) => Some(Encoding::Utf8),
        // error_len() == None means the input ended inside a multi-byte
        // sequence, which a truncated sample legitimately can.
        Err(e) if truncated && e.error_len().is_none() => Some(Encoding::Utf8),
        Err(_) => None,
    }
}

/// Decodes bytes to text under the given encoding.
///
/// Strips the BOM when present. Undecodable code units are replaced
/// rather than failing: the caller has already committed to an encoding
/// and inference over a replaced character is still well-defined.
pub fn decode(bytes: &[u8], encoding: Encoding) -> String {
    match encoding {
        Encoding::Utf8 => {
            let body = bytes.strip_prefix(BOM_UTF8).unwrap_or(bytes);
            String::from_utf8_lossy(body).into_owned()
        }
        Encoding::Utf16Le => decode_utf16(bytes.strip_prefix(BOM_UTF16_LE).unwrap_or(bytes), true),
        Encoding::Utf16Be => decode_utf16(bytes.strip_prefix(BOM_UTF16_BE).unwrap_or(bytes), false),
    }
}

fn decode_utf16(bytes: &[u8], little_endian: bool) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| {
            if little_endian {
                u16::from_le_bytes([pair[0], pair[1]])
            } else {
                u16::from_be_bytes([pair[0], pair[1]])
            }
        })
        .collect();
    String::from_utf16_lossy(&units)
}
