//! Portable schema errors

use thiserror::Error;

/// Result type for schema construction
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while constructing a portable schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Two columns share the same name
    #[error("duplicate column name '{name}'")]
    DuplicateColumn {
        /// The offending column name
        name: String,
    },
}

impl SchemaError {
    /// Create a duplicate column error.
    pub fn duplicate_column(name: impl Into<String>) -> Self {
        Self::DuplicateColumn { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_column_display() {
        let err = SchemaError::duplicate_column("id");
        assert_eq!(err.to_string(), "duplicate column name 'id'");
    }
}
