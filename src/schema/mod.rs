//! Portable schema subsystem
//!
//! The portable schema is the engine-agnostic column list shared across
//! storage formats. Design principles:
//!
//! - Closed column type enumeration
//! - Column order is significant
//! - Name uniqueness validated once, at construction
//! - Schemas are immutable values; mapping produces new schemas

mod errors;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use types::{Column, ColumnType, Schema};
