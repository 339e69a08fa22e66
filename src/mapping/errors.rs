//! Schema mapping errors
//!
//! Mapping fails only on irreconcilable schemas: a duplicate name in the
//! input (defensive; `Schema` construction already forbids it) or a name
//! collision introduced by a target engine's case-insensitive naming.
//! Lossy type downgrades are expected behavior, not errors.

use thiserror::Error;

use crate::registry::Engine;

/// Result type for mapping operations
pub type MappingResult<T> = Result<T, MappingError>;

/// Errors raised by schema mapping
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// Input schema holds two columns with the same name
    #[error("duplicate column name '{name}' in input schema")]
    DuplicateColumn {
        /// The offending column name
        name: String,
    },

    /// Two portable names become identical under the target engine's
    /// case-insensitive naming
    #[error(
        "columns '{existing}' and '{incoming}' collide under case-insensitive \
         naming of engine '{engine}'"
    )]
    NameCollision {
        /// Target engine with case-insensitive names
        engine: Engine,
        /// Name already mapped
        existing: String,
        /// Name that collided with it
        incoming: String,
    },
}

impl MappingError {
    /// Create a duplicate column error.
    pub fn duplicate_column(name: impl Into<String>) -> Self {
        Self::DuplicateColumn { name: name.into() }
    }

    /// Create a name collision error.
    pub fn name_collision(
        engine: Engine,
        existing: impl Into<String>,
        incoming: impl Into<String>,
    ) -> Self {
        Self::NameCollision {
            engine,
            existing: existing.into(),
            incoming: incoming.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_display_names_both_columns() {
        let err = MappingError::name_collision(Engine::Spreadsheet, "ID", "id");
        let display = err.to_string();
        assert!(display.contains("'ID'"));
        assert!(display.contains("'id'"));
        assert!(display.contains("spreadsheet"));
    }

    #[test]
    fn test_duplicate_display() {
        let err = MappingError::duplicate_column("x");
        assert!(err.to_string().contains("'x'"));
    }
}
