//! Integrity validation subsystem
//!
//! Compares declared descriptor metadata (byte count, encoding, content
//! hash) against values observed while re-reading the physical artifact.
//!
//! # Design Principles
//!
//! - Checks are independent; all run, all violations are returned
//! - Observed values always come from the artifact, never from caches
//! - Absent declared fields skip their check
//! - I/O failures are fatal and distinct from validation mismatches

mod descriptor;
mod errors;
mod report;
mod validator;

pub use descriptor::{Descriptor, HashAlgorithm, HashSpec};
pub use errors::{IntegrityError, IntegrityResult, ValidationError};
pub use report::{ResourceReport, ValidationReport};
pub use validator::{compute_digest, validate_artifact, validate_file};
