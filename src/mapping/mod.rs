//! Schema mapping subsystem
//!
//! Converts between the portable schema and each engine's native schema,
//! consulting the native type registry to decide where coercion or
//! fallback-to-string is required.
//!
//! # Design Principles
//!
//! - Total: every column maps, downgraded if necessary, never dropped
//! - Order-preserving
//! - Deterministic: pure function of (schema, engine)
//! - Lossy downgrades are reported, not raised

mod engine;
mod errors;
mod native;

pub use engine::{serialize_list_cell, to_native, to_portable, PortableMapping};
pub use errors::{MappingError, MappingResult};
pub use native::{FrameType, JsonType, NativeColumn, NativeSchema, NativeType, SheetType};
