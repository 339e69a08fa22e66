//! Dialect options and inferred parameters

use serde::{Deserialize, Serialize};

use super::encoding::Encoding;
use super::errors::{ConfigurationError, DialectResult};

/// Default number of leading bytes sampled for inference.
pub const DEFAULT_SAMPLE_BYTES: usize = 16384;

/// Options controlling dialect inference.
///
/// `sample_bytes` bounds how many leading bytes are analyzed; absent
/// means [`DEFAULT_SAMPLE_BYTES`]. The value arrives from external
/// CLI/config parsing, so it is carried as a signed integer and
/// validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectOptions {
    /// Maximum number of leading bytes to sample
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_bytes: Option<i64>,
}

impl DialectOptions {
    /// Options using the default sample size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with an explicit sample size.
    pub fn with_sample_bytes(sample_bytes: i64) -> Self {
        Self {
            sample_bytes: Some(sample_bytes),
        }
    }

    /// Resolves the effective sample size.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::NegativeSampleBytes` when
    /// `sample_bytes` is present and negative.
    pub fn effective_sample_bytes(&self) -> DialectResult<usize> {
        match self.sample_bytes {
            None => Ok(DEFAULT_SAMPLE_BYTES),
            Some(value) if value < 0 => {
                Err(ConfigurationError::NegativeSampleBytes { value })
            }
            Some(value) => Ok(value as usize),
        }
    }
}

/// Parsing parameters inferred from a byte sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectParameters {
    /// Field delimiter
    pub delimiter: char,
    /// Quote character
    pub quote: char,
    /// Whether the first row is a header
    pub has_header: bool,
    /// Detected text encoding
    pub encoding: Encoding,
}

impl DialectParameters {
    /// The documented default dialect: comma-delimited, double-quoted,
    /// header present, UTF-8. Returned whenever the sample is too small
    /// or too ambiguous to score above the confidence threshold.
    pub fn default_dialect() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
            has_header: true,
            encoding: Encoding::Utf8,
        }
    }
}
