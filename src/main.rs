//! treecheck CLI entry point
//!
//! Parses arguments, dispatches to the CLI module and maps the outcome to
//! an exit code: 0 valid, 2 invalid, 1 on failure.

use std::process::ExitCode;

use treecheck::cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
