//! CLI subsystem
//!
//! Thin collaborator over the library core: argument parsing, command
//! dispatch, exit-code mapping.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{EXIT_INVALID, EXIT_OK};
pub use errors::{CliError, CliResult};

use crate::observability::Logger;

/// Parses arguments, runs the command, and returns the process exit
/// code: 0 valid, 1 integrity violations, 2 fatal error.
pub fn run() -> i32 {
    let cli = Cli::parse_args();
    match commands::dispatch(cli.command) {
        Ok(code) => code,
        Err(e) => {
            let message = e.to_string();
            Logger::error("command_failed", &[("error", message.as_str())]);
            e.exit_code()
        }
    }
}
