//! Schema Mapping Invariant Tests
//!
//! Tests for invariants:
//! - Round trip: portable -> native -> portable is the identity for
//!   types in the target engine's native set
//! - Totality: mapping never drops a column; absent types downgrade
//! - Determinism: identical inputs always produce identical outputs
//! - Collisions: case-insensitive targets reject colliding names

use tablekit::mapping::{to_native, to_portable, NativeType, SheetType};
use tablekit::mapping::MappingError;
use tablekit::registry::{native_types, supports, Engine};
use tablekit::schema::{Column, ColumnType, Schema};

// =============================================================================
// Test Utilities
// =============================================================================

const ALL_ENGINES: [Engine; 3] = [Engine::Json, Engine::Spreadsheet, Engine::Frame];

const ALL_TYPES: [ColumnType; 5] = [
    ColumnType::Boolean,
    ColumnType::Integer,
    ColumnType::Number,
    ColumnType::String,
    ColumnType::List,
];

fn schema_of(columns: &[(&str, ColumnType)]) -> Schema {
    Schema::new(
        columns
            .iter()
            .map(|(name, t)| Column::new(*name, *t))
            .collect(),
    )
    .expect("test schema must be valid")
}

// =============================================================================
// INVARIANT: Round Trip Over Native Types
// =============================================================================

/// For every engine, a schema built only from its native types survives
/// portable -> native -> portable unchanged.
#[test]
fn test_round_trip_identity_for_native_types() {
    for engine in ALL_ENGINES {
        let columns: Vec<(String, ColumnType)> = native_types(engine)
            .iter()
            .enumerate()
            .map(|(i, t)| (format!("col_{}", i), *t))
            .collect();
        let schema = Schema::new(
            columns
                .iter()
                .map(|(name, t)| Column::new(name.clone(), *t))
                .collect(),
        )
        .unwrap();

        let native = to_native(&schema, engine).unwrap();
        let back = to_portable(&native).unwrap();

        assert_eq!(
            back.schema, schema,
            "round trip must be identity for engine {}",
            engine
        );
        assert!(
            back.is_lossless(),
            "no downgrade expected for native types of {}",
            engine
        );
    }
}

// =============================================================================
// INVARIANT: Totality (Downgrade, Never Drop)
// =============================================================================

/// to_native succeeds for every portable type on every engine, keeping
/// every column in order.
#[test]
fn test_to_native_is_total() {
    for engine in ALL_ENGINES {
        let schema = schema_of(&[
            ("b", ColumnType::Boolean),
            ("i", ColumnType::Integer),
            ("n", ColumnType::Number),
            ("s", ColumnType::String),
            ("l", ColumnType::List),
        ]);

        let native = to_native(&schema, engine)
            .unwrap_or_else(|e| panic!("to_native must not fail for {}: {}", engine, e));

        assert_eq!(native.len(), schema.len(), "no column may be dropped");
        for (portable, mapped) in schema.columns().iter().zip(&native.columns) {
            assert_eq!(portable.name, mapped.name, "order must be preserved");
        }
    }
}

/// A list column mapped into the spreadsheet engine lands in a text
/// cell, present and in position.
#[test]
fn test_list_downgrades_to_spreadsheet_text() {
    assert!(!supports(Engine::Spreadsheet, ColumnType::List));

    let schema = schema_of(&[("id", ColumnType::Integer), ("tags", ColumnType::List)]);
    let native = to_native(&schema, Engine::Spreadsheet).unwrap();

    assert_eq!(native.columns[1].name, "tags");
    assert_eq!(
        native.columns[1].native_type,
        NativeType::Sheet(SheetType::Text)
    );
}

// =============================================================================
// INVARIANT: Determinism
// =============================================================================

/// Mapping is a pure function of (schema, engine): repeated calls agree.
#[test]
fn test_mapping_deterministic_across_repeats() {
    for engine in ALL_ENGINES {
        for t in ALL_TYPES {
            let schema = schema_of(&[("a", t), ("b", ColumnType::String)]);
            let first = to_native(&schema, engine).unwrap();
            let second = to_native(&schema, engine).unwrap();
            assert_eq!(first, second);
        }
    }
}

// =============================================================================
// INVARIANT: Name Collisions Are Rejected, Not Overwritten
// =============================================================================

/// "ID" and "id" collide under the spreadsheet engine's naming.
#[test]
fn test_case_insensitive_collision_is_error() {
    let schema = schema_of(&[("ID", ColumnType::Integer), ("id", ColumnType::Integer)]);

    let result = to_native(&schema, Engine::Spreadsheet);
    assert!(
        matches!(result, Err(MappingError::NameCollision { .. })),
        "collision must surface as MappingError, got {:?}",
        result
    );
}

/// Case-sensitive engines accept the same pair of names.
#[test]
fn test_case_sensitive_engines_accept_mixed_case() {
    let schema = schema_of(&[("ID", ColumnType::Integer), ("id", ColumnType::Integer)]);

    assert!(to_native(&schema, Engine::Json).is_ok());
    assert!(to_native(&schema, Engine::Frame).is_ok());
}

/// A schema cannot be constructed with duplicate names in the first
/// place; the mapping-level check is defensive.
#[test]
fn test_duplicate_names_rejected_at_construction() {
    let result = Schema::new(vec![
        Column::new("x", ColumnType::String),
        Column::new("x", ColumnType::Integer),
    ]);
    assert!(result.is_err());
}
