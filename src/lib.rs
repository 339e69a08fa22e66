//! tablekit - schema mapping and integrity validation for portable
//! tabular data
//!
//! The crate reconciles a portable, declarative table schema against the
//! native schemas of concrete storage engines, infers the parsing
//! dialect of raw tabular bytes, and validates physical files against
//! their declared metadata.

pub mod cli;
pub mod dialect;
pub mod integrity;
pub mod mapping;
pub mod observability;
pub mod registry;
pub mod schema;
