//! Portable schema type definitions
//!
//! Supported column types:
//! - boolean: true/false
//! - integer: 64-bit signed integer
//! - number: 64-bit floating point
//! - string: UTF-8 string
//! - list: ordered sequence of values
//!
//! Column order in a schema is significant: it matches the physical
//! column order of the underlying table. Column names are unique.

use serde::{Deserialize, Serialize};

use super::errors::{SchemaError, SchemaResult};

/// Portable column types shared across storage engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// true/false
    Boolean,
    /// 64-bit signed integer
    Integer,
    /// 64-bit floating point
    Number,
    /// UTF-8 string
    String,
    /// Ordered sequence of values
    List,
}

impl ColumnType {
    /// Returns the type name for error messages and serialized output.
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnType::Boolean => "boolean",
            ColumnType::Integer => "integer",
            ColumnType::Number => "number",
            ColumnType::String => "string",
            ColumnType::List => "list",
        }
    }
}

/// A single named, typed column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name, unique within its schema
    pub name: String,
    /// Portable column type
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl Column {
    /// Create a new column.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// An ordered sequence of uniquely-named columns.
///
/// Uniqueness is validated once at construction; a `Schema` is immutable
/// afterwards. Mapping operations produce new schemas, they never mutate
/// an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Column>", into = "Vec<Column>")]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Create a schema from an ordered column list.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::DuplicateColumn` if two columns share a name.
    pub fn new(columns: Vec<Column>) -> SchemaResult<Self> {
        if let Some(name) = first_duplicate(&columns) {
            return Err(SchemaError::duplicate_column(name));
        }
        Ok(Self { columns })
    }

    /// Columns in physical order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Look up a column by exact name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

impl TryFrom<Vec<Column>> for Schema {
    type Error = SchemaError;

    fn try_from(columns: Vec<Column>) -> SchemaResult<Self> {
        Schema::new(columns)
    }
}

impl From<Schema> for Vec<Column> {
    fn from(schema: Schema) -> Self {
        schema.columns
    }
}

/// Returns the first column name that appears more than once, if any.
fn first_duplicate(columns: &[Column]) -> Option<&str> {
    for (i, col) in columns.iter().enumerate() {
        if columns[..i].iter().any(|c| c.name == col.name) {
            return Some(&col.name);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_preserves_order() {
        let schema = Schema::new(vec![
            Column::new("id", ColumnType::Integer),
            Column::new("name", ColumnType::String),
            Column::new("active", ColumnType::Boolean),
        ])
        .unwrap();

        let names: Vec<_> = schema.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["id", "name", "active"]);
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let result = Schema::new(vec![
            Column::new("id", ColumnType::Integer),
            Column::new("id", ColumnType::String),
        ]);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("id"));
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        // "ID" and "id" are distinct at the portable layer; only a
        // case-insensitive target engine turns them into a collision.
        let result = Schema::new(vec![
            Column::new("ID", ColumnType::Integer),
            Column::new("id", ColumnType::Integer),
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_column_lookup() {
        let schema = Schema::new(vec![
            Column::new("id", ColumnType::Integer),
            Column::new("tags", ColumnType::List),
        ])
        .unwrap();

        assert_eq!(schema.column("tags").unwrap().column_type, ColumnType::List);
        assert!(schema.column("missing").is_none());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(ColumnType::Boolean.type_name(), "boolean");
        assert_eq!(ColumnType::Integer.type_name(), "integer");
        assert_eq!(ColumnType::Number.type_name(), "number");
        assert_eq!(ColumnType::String.type_name(), "string");
        assert_eq!(ColumnType::List.type_name(), "list");
    }

    #[test]
    fn test_schema_serde_round_trip() {
        let schema = Schema::new(vec![
            Column::new("id", ColumnType::Integer),
            Column::new("score", ColumnType::Number),
        ])
        .unwrap();

        let json = serde_json::to_string(&schema).unwrap();
        let parsed: Schema = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, schema);
    }

    #[test]
    fn test_schema_deserialize_rejects_duplicates() {
        let json = r#"[{"name":"a","type":"string"},{"name":"a","type":"integer"}]"#;
        let result: Result<Schema, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
