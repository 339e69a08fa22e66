//! Native type capability registry
//!
//! Each storage engine represents a fixed subset of the portable column
//! types without coercion. The registry is a static lookup populated at
//! compile time; there is no dynamic plugin discovery and no mutable
//! state. An engine missing from the registry is a programming error,
//! which the closed `Engine` enum rules out entirely.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::ColumnType;

/// Storage engines known to the mapping layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Row-oriented JSON records
    Json,
    /// Spreadsheet sheets (xlsx-style)
    Spreadsheet,
    /// Columnar in-memory frames
    Frame,
}

impl Engine {
    /// Engine identifier used in logs and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Json => "json",
            Engine::Spreadsheet => "spreadsheet",
            Engine::Frame => "frame",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Portable types the JSON engine stores without coercion.
const JSON_TYPES: &[ColumnType] = &[
    ColumnType::Boolean,
    ColumnType::Integer,
    ColumnType::Number,
    ColumnType::String,
    ColumnType::List,
];

/// Portable types spreadsheet cells store without coercion.
///
/// Spreadsheets have no native list cells; list columns degrade to text.
const SPREADSHEET_TYPES: &[ColumnType] = &[
    ColumnType::Boolean,
    ColumnType::Integer,
    ColumnType::Number,
    ColumnType::String,
];

/// Portable types columnar frames store without coercion.
const FRAME_TYPES: &[ColumnType] = &[
    ColumnType::Boolean,
    ColumnType::Integer,
    ColumnType::Number,
    ColumnType::String,
    ColumnType::List,
];

/// Returns the portable column types the engine represents without
/// coercion. Pure lookup, no side effects.
pub fn native_types(engine: Engine) -> &'static [ColumnType] {
    match engine {
        Engine::Json => JSON_TYPES,
        Engine::Spreadsheet => SPREADSHEET_TYPES,
        Engine::Frame => FRAME_TYPES,
    }
}

/// Returns true when the engine can hold the portable type exactly.
pub fn supports(engine: Engine, column_type: ColumnType) -> bool {
    native_types(engine).contains(&column_type)
}

/// Returns true when the engine treats column names case-insensitively.
///
/// Mapping into such an engine must reject portable schemas whose names
/// collide after case folding.
pub fn case_insensitive_names(engine: Engine) -> bool {
    match engine {
        Engine::Spreadsheet => true,
        Engine::Json | Engine::Frame => false,
    }
}
