//! Dialect inference subsystem
//!
//! Determines the parsing parameters (delimiter, quote, header presence,
//! text encoding) needed to read a tabular file, from a bounded sample
//! of its leading bytes.
//!
//! # Design Principles
//!
//! - Cost bounded by the sample size, never the source size
//! - Deterministic: same sample and options, same parameters
//! - Ambiguity falls back to a documented default, never an error
//! - Side-effect free

mod encoding;
mod errors;
mod infer;
mod options;

pub use encoding::{decode, detect_encoding, Encoding};
pub use errors::{ConfigurationError, DialectResult};
pub use infer::infer_dialect;
pub use options::{DialectOptions, DialectParameters, DEFAULT_SAMPLE_BYTES};
