//! CLI-specific error types
//!
//! Every CLI error is fatal for the invoked command and maps to exit
//! code 2; integrity violations are reported output, not errors, and
//! map to exit code 1 in the command layer.

use thiserror::Error;

use crate::dialect::ConfigurationError;
use crate::integrity::IntegrityError;
use crate::mapping::MappingError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading an input file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An input document was not valid JSON for its expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid dialect options or undecodable sample
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Irreconcilable schema mapping
    #[error("mapping error: {0}")]
    Mapping(#[from] MappingError),

    /// Fatal validation-run failure (I/O, unsupported algorithm)
    #[error("integrity error: {0}")]
    Integrity(#[from] IntegrityError),
}

impl CliError {
    /// Exit code for this error.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_is_two() {
        let err = CliError::Configuration(ConfigurationError::Undecodable);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_display_wraps_source() {
        let err = CliError::Configuration(ConfigurationError::NegativeSampleBytes { value: -3 });
        assert!(err.to_string().contains("-3"));
    }
}
