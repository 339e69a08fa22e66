//! Observability subsystem
//!
//! Structured, synchronous, deterministic JSON logging.

mod logger;

pub use logger::{Logger, Severity};
