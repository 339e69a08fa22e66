//! Bidirectional schema mapping
//!
//! Mapping semantics:
//! - Native types with no portable counterpart fall back to portable
//!   `string` and the downgrade is reported, not raised.
//! - Portable types outside an engine's native set map to the narrowest
//!   native type that holds their value space.
//! - Column order and column count are preserved exactly; a column is
//!   never dropped.
//! - Mapping is a pure function of (schema, engine). No global state.

use serde_json::Value;

use crate::registry::{case_insensitive_names, supports, Engine};
use crate::schema::{Column, ColumnType, Schema};

use super::errors::{MappingError, MappingResult};
use super::native::{FrameType, JsonType, NativeColumn, NativeSchema, NativeType, SheetType};

/// Result of mapping a native schema into the portable model.
///
/// `downgraded` lists the names of columns whose native type had no
/// portable counterpart and was widened to `string`. Downgrading is
/// expected; callers that need lossless round-trips check this list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortableMapping {
    /// The mapped portable schema
    pub schema: Schema,
    /// Names of columns widened to `string`, in schema order
    pub downgraded: Vec<String>,
}

impl PortableMapping {
    /// Whether every column mapped without loss.
    pub fn is_lossless(&self) -> bool {
        self.downgraded.is_empty()
    }
}

/// Converts a native schema into a portable schema.
///
/// Every native column appears in the output, in order. Native types
/// with no portable counterpart widen to `string` and are recorded in
/// [`PortableMapping::downgraded`].
///
/// # Errors
///
/// Returns `MappingError::DuplicateColumn` if the native schema holds
/// two columns with the same name.
pub fn to_portable(native: &NativeSchema) -> MappingResult<PortableMapping> {
    let mut columns = Vec::with_capacity(native.columns.len());
    let mut downgraded = Vec::new();

    for col in &native.columns {
        let column_type = match portable_counterpart(col.native_type) {
            Some(t) => t,
            None => {
                downgraded.push(col.name.clone());
                ColumnType::String
            }
        };
        columns.push(Column::new(col.name.clone(), column_type));
    }

    let schema = Schema::new(columns).map_err(|e| match e {
        crate::schema::SchemaError::DuplicateColumn { name } => {
            MappingError::DuplicateColumn { name }
        }
    })?;

    Ok(PortableMapping { schema, downgraded })
}

/// Converts a portable schema into the closest native schema for the
/// target engine.
///
/// Types in the engine's native set map exactly; the rest map to the
/// narrowest capable native type (`list` degrades to the engine's string
/// representation, see [`serialize_list_cell`]). Column order and count
/// are preserved.
///
/// # Errors
///
/// - `MappingError::DuplicateColumn` if the input schema holds two
///   columns with the same name (defensive; `Schema` forbids this).
/// - `MappingError::NameCollision` if two names become identical under a
///   case-insensitive target engine.
pub fn to_native(schema: &Schema, engine: Engine) -> MappingResult<NativeSchema> {
    let fold = case_insensitive_names(engine);
    let mut seen: Vec<(String, &str)> = Vec::with_capacity(schema.len());
    let mut columns = Vec::with_capacity(schema.len());

    for col in schema.columns() {
        let key = if fold {
            col.name.to_lowercase()
        } else {
            col.name.clone()
        };

        if let Some((_, existing)) = seen.iter().find(|(k, _)| *k == key) {
            if *existing == col.name {
                return Err(MappingError::duplicate_column(&col.name));
            }
            return Err(MappingError::name_collision(engine, *existing, &col.name));
        }
        seen.push((key, col.name.as_str()));

        columns.push(NativeColumn::new(
            col.name.clone(),
            native_counterpart(col.column_type, engine),
        ));
    }

    Ok(NativeSchema::new(engine, columns))
}

/// Exact portable counterpart of a native type, if one exists.
fn portable_counterpart(native_type: NativeType) -> Option<ColumnType> {
    match native_type {
        NativeType::Json(t) => match t {
            JsonType::Boolean => Some(ColumnType::Boolean),
            JsonType::Integer => Some(ColumnType::Integer),
            JsonType::Number => Some(ColumnType::Number),
            JsonType::String => Some(ColumnType::String),
            JsonType::Array => Some(ColumnType::List),
            JsonType::Object => None,
        },
        NativeType::Sheet(t) => match t {
            SheetType::Boolean => Some(ColumnType::Boolean),
            SheetType::Integer => Some(ColumnType::Integer),
            SheetType::Number => Some(ColumnType::Number),
            SheetType::Text => Some(ColumnType::String),
            SheetType::Date => None,
        },
        NativeType::Frame(t) => match t {
            FrameType::Boolean => Some(ColumnType::Boolean),
            FrameType::Int64 => Some(ColumnType::Integer),
            FrameType::Float64 => Some(ColumnType::Number),
            FrameType::Utf8 => Some(ColumnType::String),
            FrameType::List => Some(ColumnType::List),
            FrameType::Datetime => None,
        },
    }
}

/// Native type for a portable type on the given engine.
///
/// The registry decides the path: types in the engine's native set map
/// exactly, the rest widen to the engine's string representation, the
/// narrowest native type that holds any portable value space.
fn native_counterpart(column_type: ColumnType, engine: Engine) -> NativeType {
    if !supports(engine, column_type) {
        // Values in such a column serialize per serialize_list_cell.
        return string_type(engine);
    }

    match engine {
        Engine::Json => NativeType::Json(match column_type {
            ColumnType::Boolean => JsonType::Boolean,
            ColumnType::Integer => JsonType::Integer,
            ColumnType::Number => JsonType::Number,
            ColumnType::String => JsonType::String,
            ColumnType::List => JsonType::Array,
        }),
        Engine::Spreadsheet => NativeType::Sheet(match column_type {
            ColumnType::Boolean => SheetType::Boolean,
            ColumnType::Integer => SheetType::Integer,
            ColumnType::Number => SheetType::Number,
            ColumnType::String | ColumnType::List => SheetType::Text,
        }),
        Engine::Frame => NativeType::Frame(match column_type {
            ColumnType::Boolean => FrameType::Boolean,
            ColumnType::Integer => FrameType::Int64,
            ColumnType::Number => FrameType::Float64,
            ColumnType::String => FrameType::Utf8,
            ColumnType::List => FrameType::List,
        }),
    }
}

/// The engine's string representation.
fn string_type(engine: Engine) -> NativeType {
    match engine {
        Engine::Json => NativeType::Json(JsonType::String),
        Engine::Spreadsheet => NativeType::Sheet(SheetType::Text),
        Engine::Frame => NativeType::Frame(FrameType::Utf8),
    }
}

/// The defined serialization for list values stored in a string-typed
/// native column: a JSON array string.
pub fn serialize_list_cell(values: &[Value]) -> String {
    // Vec<Value> serialization cannot fail.
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}
