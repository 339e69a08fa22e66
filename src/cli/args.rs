//! CLI argument definitions using clap
//!
//! Commands:
//! - tablekit dialect <file> [--sample-bytes N]
//! - tablekit map <schema.json> --engine <json|spreadsheet|frame>
//! - tablekit validate <file> --descriptor <descriptor.json>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::registry::Engine;

/// tablekit - schema mapping and integrity validation for tabular data
#[derive(Parser, Debug)]
#[command(name = "tablekit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Infer the parsing dialect of a tabular file
    Dialect {
        /// File to sample
        file: PathBuf,

        /// Maximum number of leading bytes to sample
        #[arg(long)]
        sample_bytes: Option<i64>,
    },

    /// Map a portable schema to an engine's native schema
    Map {
        /// Portable schema JSON file
        schema: PathBuf,

        /// Target storage engine
        #[arg(long, value_parser = parse_engine)]
        engine: Engine,
    },

    /// Validate a file against its declared descriptor
    Validate {
        /// File to validate
        file: PathBuf,

        /// Descriptor JSON file with declared metadata
        #[arg(long)]
        descriptor: PathBuf,
    },
}

/// Parses an engine identifier from the command line.
fn parse_engine(value: &str) -> Result<Engine, String> {
    match value.to_lowercase().as_str() {
        "json" => Ok(Engine::Json),
        "spreadsheet" => Ok(Engine::Spreadsheet),
        "frame" => Ok(Engine::Frame),
        other => Err(format!(
            "unknown engine '{}' (expected json, spreadsheet, or frame)",
            other
        )),
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
