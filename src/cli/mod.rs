//! Command-line front end
//!
//! - check: validate one document against a schema file
//! - lint: compile every schema in a directory

mod args;
mod commands;
mod errors;
mod io;
mod logging;

pub use args::{Cli, Command};
pub use commands::{check, lint, run, run_command, EXIT_INVALID};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{parse_document, read_document, write_line};
