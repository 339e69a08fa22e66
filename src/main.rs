//! tablekit CLI entry point
//!
//! Parses arguments, dispatches to the CLI module, and exits with the
//! command's code. All logic lives in the library.

use tablekit::cli;

fn main() {
    std::process::exit(cli::run());
}
