//! Native schema representations
//!
//! Each storage engine has its own column type model. The portable layer
//! treats these as opaque; only the mapping engine reads them, through
//! the conversion tables in this module's sibling.

use serde::{Deserialize, Serialize};

use crate::registry::Engine;

/// Column types of the row-oriented JSON engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    Boolean,
    Integer,
    Number,
    String,
    /// JSON array
    Array,
    /// Nested JSON object; no portable counterpart
    Object,
}

/// Cell types of the spreadsheet engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetType {
    Boolean,
    Integer,
    Number,
    Text,
    /// Date/time cell; no portable counterpart
    Date,
}

/// Column types of the columnar frame engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameType {
    Boolean,
    Int64,
    Float64,
    Utf8,
    List,
    /// Timestamp column; no portable counterpart
    Datetime,
}

/// A native column type, tagged with its engine family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NativeType {
    Json(JsonType),
    Sheet(SheetType),
    Frame(FrameType),
}

impl NativeType {
    /// The engine family this type belongs to.
    pub fn engine(&self) -> Engine {
        match self {
            NativeType::Json(_) => Engine::Json,
            NativeType::Sheet(_) => Engine::Spreadsheet,
            NativeType::Frame(_) => Engine::Frame,
        }
    }
}

/// A single native column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeColumn {
    /// Column name as the engine stores it
    pub name: String,
    /// Engine-specific column type
    #[serde(rename = "type")]
    pub native_type: NativeType,
}

impl NativeColumn {
    /// Create a native column.
    pub fn new(name: impl Into<String>, native_type: NativeType) -> Self {
        Self {
            name: name.into(),
            native_type,
        }
    }
}

/// An engine-specific schema: ordered native columns plus the engine tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeSchema {
    /// Engine that produced or will consume this schema
    pub engine: Engine,
    /// Columns in physical order
    pub columns: Vec<NativeColumn>,
}

impl NativeSchema {
    /// Create a native schema.
    pub fn new(engine: Engine, columns: Vec<NativeColumn>) -> Self {
        Self { engine, columns }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
