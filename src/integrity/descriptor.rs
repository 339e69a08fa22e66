//! Declared resource descriptors
//!
//! A descriptor is an opaque mapping of string keys to arbitrary JSON
//! values. This layer only ever inspects the three keys that
//! participate in integrity checking: `bytes`, `encoding`, `hash`.
//! Everything else passes through untouched, keeping the core decoupled
//! from the full descriptor document model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::IntegrityError;

/// Descriptor key holding the expected byte count.
const KEY_BYTES: &str = "bytes";
/// Descriptor key holding the expected encoding label.
const KEY_ENCODING: &str = "encoding";
/// Descriptor key holding the expected content hash.
const KEY_HASH: &str = "hash";

/// Declared metadata about a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Descriptor {
    fields: Map<String, Value>,
}

impl Descriptor {
    /// An empty descriptor: every integrity check is skipped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing key/value document.
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Raw access to any declared field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Declared byte count, when present and well-formed.
    ///
    /// A malformed value (negative, fractional, non-numeric) is treated
    /// as absent: the corresponding check is skipped, not failed.
    pub fn bytes(&self) -> Option<u64> {
        self.fields.get(KEY_BYTES).and_then(Value::as_u64)
    }

    /// Declared encoding label, when present.
    pub fn encoding(&self) -> Option<&str> {
        self.fields.get(KEY_ENCODING).and_then(Value::as_str)
    }

    /// Declared content hash, when present.
    pub fn hash(&self) -> Option<&str> {
        self.fields.get(KEY_HASH).and_then(Value::as_str)
    }

    /// Whether the descriptor declares any integrity field at all.
    pub fn declares_integrity(&self) -> bool {
        self.bytes().is_some() || self.encoding().is_some() || self.hash().is_some()
    }
}

/// Hash algorithms this validator can recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Sha512,
    Crc32,
}

impl HashAlgorithm {
    /// Algorithm tag as written in descriptors.
    pub fn tag(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Crc32 => "crc32",
        }
    }
}

/// A parsed declared hash: algorithm tag plus hex digest.
///
/// The wire form is `"<algorithm>:<hex>"`; a bare hex digest defaults
/// to sha256.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashSpec {
    /// Declared algorithm
    pub algorithm: HashAlgorithm,
    /// Declared hex digest, lowercased
    pub digest: String,
    /// Whether the declared form carried an explicit algorithm prefix
    pub prefixed: bool,
}

impl HashSpec {
    /// Parses a declared hash string.
    ///
    /// # Errors
    ///
    /// Returns `IntegrityError::UnsupportedHashAlgorithm` for an
    /// explicit algorithm tag outside the supported set.
    pub fn parse(declared: &str) -> Result<Self, IntegrityError> {
        match declared.split_once(':') {
            Some((tag, digest)) => {
                let algorithm = match tag.to_lowercase().as_str() {
                    "sha256" => HashAlgorithm::Sha256,
                    "sha512" => HashAlgorithm::Sha512,
                    "crc32" => HashAlgorithm::Crc32,
                    other => {
                        return Err(IntegrityError::UnsupportedHashAlgorithm {
                            algorithm: other.to_string(),
                        })
                    }
                };
                Ok(Self {
                    algorithm,
                    digest: digest.to_lowercase(),
                    prefixed: true,
                })
            }
            None => Ok(Self {
                algorithm: HashAlgorithm::Sha256,
                digest: declared.to_lowercase(),
                prefixed: false,
            }),
        }
    }

    /// Formats a recomputed digest in the same style as the declared
    /// hash, so both sides of a mismatch read alike.
    pub fn format_actual(&self, digest: &str) -> String {
        if self.prefixed {
            format!("{}:{}", self.algorithm.tag(), digest)
        } else {
            digest.to_string()
        }
    }
}
