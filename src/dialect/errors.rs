//! Dialect inference errors
//!
//! Ambiguous input is never an error: low-confidence samples fall back
//! to the documented default dialect. Errors are reserved for invalid
//! options and samples no supported encoding can decode.

use thiserror::Error;

/// Result type for dialect inference
pub type DialectResult<T> = Result<T, ConfigurationError>;

/// Errors raised by dialect inference
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// `sample_bytes` was present and negative
    #[error("sample_bytes must be non-negative, got {value}")]
    NegativeSampleBytes {
        /// The rejected value
        value: i64,
    },

    /// No supported encoding can decode the sample
    #[error("sample is not decodable under any supported encoding")]
    Undecodable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_sample_bytes_display() {
        let err = ConfigurationError::NegativeSampleBytes { value: -5 };
        assert!(err.to_string().contains("-5"));
    }
}
