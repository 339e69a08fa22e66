//! CLI command implementations
//!
//! Each command is a thin shell over the library: read inputs, call the
//! pure core, print JSON to stdout, return an exit code. Exit codes:
//! 0 = success/valid, 1 = integrity violations found, 2 = fatal error.

use std::fs;
use std::path::Path;

use crate::dialect::{infer_dialect, DialectOptions};
use crate::integrity::{validate_file, Descriptor, ResourceReport, ValidationReport};
use crate::mapping::to_native;
use crate::observability::Logger;
use crate::registry::Engine;
use crate::schema::Schema;

use super::args::Command;
use super::errors::CliResult;

/// Exit code for a clean run.
pub const EXIT_OK: i32 = 0;
/// Exit code when integrity violations were found.
pub const EXIT_INVALID: i32 = 1;

/// Dispatches a parsed command.
pub fn dispatch(command: Command) -> CliResult<i32> {
    match command {
        Command::Dialect { file, sample_bytes } => cmd_dialect(&file, sample_bytes),
        Command::Map { schema, engine } => cmd_map(&schema, engine),
        Command::Validate { file, descriptor } => cmd_validate(&file, &descriptor),
    }
}

/// `tablekit dialect` - infer and print parsing parameters.
fn cmd_dialect(file: &Path, sample_bytes: Option<i64>) -> CliResult<i32> {
    let bytes = fs::read(file)?;
    let options = DialectOptions { sample_bytes };
    let dialect = infer_dialect(&bytes, &options)?;

    println!("{}", serde_json::to_string_pretty(&dialect)?);
    Ok(EXIT_OK)
}

/// `tablekit map` - map a portable schema to a native schema.
fn cmd_map(schema_path: &Path, engine: Engine) -> CliResult<i32> {
    let raw = fs::read_to_string(schema_path)?;
    let schema: Schema = serde_json::from_str(&raw)?;
    let native = to_native(&schema, engine)?;

    println!("{}", serde_json::to_string_pretty(&native)?);
    Ok(EXIT_OK)
}

/// `tablekit validate` - check a file against its declared descriptor.
fn cmd_validate(file: &Path, descriptor_path: &Path) -> CliResult<i32> {
    let raw = fs::read_to_string(descriptor_path)?;
    let descriptor: Descriptor = serde_json::from_str(&raw)?;

    let name = file.display().to_string();
    Logger::info("validation_started", &[("resource", name.as_str())]);

    let violations = validate_file(file, &descriptor)?;
    let valid = violations.is_empty();

    let mut report = ValidationReport::new();
    report.push(ResourceReport::new(&name, violations));
    println!("{}", serde_json::to_string_pretty(&report)?);

    if valid {
        Logger::info("validation_passed", &[("resource", name.as_str())]);
        Ok(EXIT_OK)
    } else {
        let error_count = report.error_count().to_string();
        Logger::warn(
            "validation_failed",
            &[
                ("resource", name.as_str()),
                ("errors", error_count.as_str()),
            ],
        );
        Ok(EXIT_INVALID)
    }
}
