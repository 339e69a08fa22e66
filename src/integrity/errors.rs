//! Integrity error taxonomy
//!
//! Validation mismatches are values, not failures: a run returns every
//! violated check in one pass, each carrying the declared and observed
//! payloads. I/O problems while re-reading the artifact are a separate
//! fatal error outside the validation taxonomy.

use serde::Serialize;
use thiserror::Error;

/// A single integrity mismatch between declared and observed state.
///
/// The observed side is always derived from re-reading or re-hashing the
/// physical artifact, never from cached or declared data.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "check", rename_all = "lowercase")]
pub enum ValidationError {
    /// Declared byte count differs from the measured length
    #[error("declared {bytes} bytes, measured {actual_bytes}")]
    Bytes {
        /// Declared byte count
        bytes: u64,
        /// Measured byte count
        actual_bytes: u64,
    },

    /// Declared encoding differs from the detected encoding
    #[error("declared encoding '{encoding}', detected '{actual_encoding}'")]
    Encoding {
        /// Declared encoding label
        encoding: String,
        /// Detected encoding label
        actual_encoding: String,
    },

    /// Declared content hash differs from the recomputed digest
    #[error("declared hash '{hash}', computed '{actual_hash}'")]
    Hash {
        /// Declared hash
        hash: String,
        /// Recomputed hash
        actual_hash: String,
    },
}

impl ValidationError {
    /// Name of the check that produced this error.
    pub fn check(&self) -> &'static str {
        match self {
            ValidationError::Bytes { .. } => "bytes",
            ValidationError::Encoding { .. } => "encoding",
            ValidationError::Hash { .. } => "hash",
        }
    }
}

/// Fatal errors raised by a validation run, distinct from the
/// declared-vs-observed mismatches above.
#[derive(Debug, Error)]
pub enum IntegrityError {
    /// Reading the artifact failed; the run produced no verdict
    #[error("failed to read artifact '{path}': {source}")]
    Io {
        /// Artifact path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The descriptor declares a hash algorithm this validator cannot
    /// recompute
    #[error("unsupported hash algorithm '{algorithm}'")]
    UnsupportedHashAlgorithm {
        /// The declared algorithm tag
        algorithm: String,
    },
}

/// Result type for validation runs
pub type IntegrityResult<T> = Result<T, IntegrityError>;
