//! CLI command implementations
//!
//! Commands write their JSON output to the given writer and return the
//! process exit code. Operational failures surface as `CliError`.

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use serde_json::json;
use tracing::info;

use crate::config::ValidatorConfig;
use crate::rules::Context;
use crate::schema::{SchemaDocument, SchemaRegistry};
use crate::validator::Validator;

use super::args::{Cli, Command};
use super::errors::CliResult;
use super::io::{read_document, write_line};
use super::logging;

/// Exit code for a document with violations
pub const EXIT_INVALID: u8 = 2;

/// Parse arguments, install logging and run the selected command
pub fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<ExitCode> {
    let mut stdout = std::io::stdout().lock();
    match cmd {
        Command::Check {
            schema,
            input,
            config,
        } => {
            let valid = check(&schema, input.as_deref(), config.as_deref(), &mut stdout)?;
            Ok(if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_INVALID)
            })
        }
        Command::Lint { schema_dir } => {
            lint(&schema_dir, &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Validate one document and print its report.
///
/// Returns whether the document is valid.
pub fn check<W: Write>(
    schema_path: &Path,
    input: Option<&Path>,
    config_path: Option<&Path>,
    out: &mut W,
) -> CliResult<bool> {
    let config = match config_path {
        Some(path) => ValidatorConfig::load(path)?,
        None => ValidatorConfig::default(),
    };
    let validator = Validator::from_config(&config)?;

    let schema = SchemaDocument::from_path(schema_path)?.compile()?;
    info!(
        schema_id = schema.schema_id(),
        schema_version = schema.schema_version(),
        "schema compiled"
    );

    let document = read_document(input)?;
    let report = validator.validate(&Context::background(), &document, schema.definition())?;
    info!(
        valid = report.valid,
        errors = report.error_count(),
        "document checked"
    );

    write_line(out, &report)?;
    Ok(report.valid)
}

/// Compile every schema document in a directory and print their keys
pub fn lint<W: Write>(schema_dir: &Path, out: &mut W) -> CliResult<()> {
    let mut registry = SchemaRegistry::new(schema_dir);
    registry.load_all()?;

    let schemas: Vec<_> = registry
        .keys()
        .into_iter()
        .map(|(id, version)| json!({ "schema_id": id, "schema_version": version }))
        .collect();

    write_line(out, &json!({ "schemas": schemas }))
}
