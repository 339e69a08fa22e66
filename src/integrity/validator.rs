//! Declared-vs-observed integrity validation
//!
//! Three independent checks: byte length, text encoding, content hash.
//! Each runs only when the descriptor declares the corresponding field,
//! and all are attempted even when an earlier one fails. The full set of
//! violations comes back in one pass, in check order.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256, Sha512};

use crate::dialect::detect_encoding;

use super::descriptor::{Descriptor, HashAlgorithm, HashSpec};
use super::errors::{IntegrityError, IntegrityResult, ValidationError};

/// Encoding label reported when no supported encoding decodes the
/// artifact.
const UNKNOWN_ENCODING: &str = "unknown";

/// Validates artifact bytes against a descriptor's declared metadata.
///
/// Declared-field-absent means skipped. The returned list is empty when
/// every declared check passes; order is bytes, encoding, hash.
///
/// # Errors
///
/// Returns `IntegrityError::UnsupportedHashAlgorithm` when the declared
/// hash names an algorithm outside the supported set. Mismatches are
/// never errors; they are the returned values.
pub fn validate_artifact(
    artifact: &[u8],
    descriptor: &Descriptor,
) -> IntegrityResult<Vec<ValidationError>> {
    let mut violations = Vec::new();

    if let Some(bytes) = descriptor.bytes() {
        let actual_bytes = artifact.len() as u64;
        if bytes != actual_bytes {
            violations.push(ValidationError::Bytes {
                bytes,
                actual_bytes,
            });
        }
    }

    if let Some(encoding) = descriptor.encoding() {
        let actual_encoding = detect_encoding(artifact, false)
            .map(|e| e.label())
            .unwrap_or(UNKNOWN_ENCODING);
        if normalize_encoding_label(encoding) != actual_encoding {
            violations.push(ValidationError::Encoding {
                encoding: encoding.to_string(),
                actual_encoding: actual_encoding.to_string(),
            });
        }
    }

    if let Some(hash) = descriptor.hash() {
        let spec = HashSpec::parse(hash)?;
        let computed = compute_digest(spec.algorithm, artifact);
        if computed != spec.digest {
            violations.push(ValidationError::Hash {
                hash: hash.to_string(),
                actual_hash: spec.format_actual(&computed),
            });
        }
    }

    Ok(violations)
}

/// Validates a file on disk against a descriptor.
///
/// The artifact is read once and the bytes are shared across all three
/// checks.
///
/// # Errors
///
/// Returns `IntegrityError::Io` when the artifact cannot be read; no
/// verdict is produced in that case.
pub fn validate_file(
    path: impl AsRef<Path>,
    descriptor: &Descriptor,
) -> IntegrityResult<Vec<ValidationError>> {
    let path = path.as_ref();
    let artifact = fs::read(path).map_err(|source| IntegrityError::Io {
        path: path.display().to_string(),
        source,
    })?;
    validate_artifact(&artifact, descriptor)
}

/// Computes the lowercase hex digest of `data` under `algorithm`.
///
/// Deterministic: the same input always produces the same output.
pub fn compute_digest(algorithm: HashAlgorithm, data: &[u8]) -> String {
    match algorithm {
        HashAlgorithm::Sha256 => to_hex(&Sha256::digest(data)),
        HashAlgorithm::Sha512 => to_hex(&Sha512::digest(data)),
        HashAlgorithm::Crc32 => {
            let mut hasher = crc32fast::Hasher::new();
            hasher.update(data);
            format!("{:08x}", hasher.finalize())
        }
    }
}

/// Canonicalizes a declared encoding label for comparison: lowercase,
/// dashes for underscores, common compact spellings expanded.
fn normalize_encoding_label(label: &str) -> String {
    let lowered = label.to_lowercase().replace('_', "-");
    match lowered.as_str() {
        "utf8" => "utf-8".to_string(),
        "utf16-le" | "utf16le" | "utf-16le" => "utf-16-le".to_string(),
        "utf16-be" | "utf16be" | "utf-16be" => "utf-16-be".to_string(),
        _ => lowered,
    }
}

fn to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write;
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
        let _ = write!(out, "{:02x}", b);
        out
    })
}
