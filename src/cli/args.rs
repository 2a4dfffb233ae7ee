//! CLI argument definitions using clap
//!
//! Commands:
//! - treecheck check --schema <path> [--input <path>] [--config <path>]
//! - treecheck lint --schema-dir <path>

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// treecheck - path-qualified validation of JSON documents
#[derive(Parser, Debug)]
#[command(name = "treecheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate one JSON document against a schema file
    Check {
        /// Path to the schema document
        #[arg(long)]
        schema: PathBuf,

        /// Document to validate (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Path to validator configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Compile every schema in a directory and list them
    Lint {
        /// Directory of schema documents
        #[arg(long, default_value = "./schemas")]
        schema_dir: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from([
            "treecheck", "-vv", "check", "--schema", "users.json", "--input", "doc.json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Check {
                schema,
                input,
                config,
            } => {
                assert_eq!(schema, PathBuf::from("users.json"));
                assert_eq!(input, Some(PathBuf::from("doc.json")));
                assert!(config.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_lint_default_dir() {
        let cli = Cli::try_parse_from(["treecheck", "lint"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(matches!(
            cli.command,
            Command::Lint { schema_dir } if schema_dir == PathBuf::from("./schemas")
        ));
    }

    #[test]
    fn test_check_requires_schema() {
        assert!(Cli::try_parse_from(["treecheck", "check"]).is_err());
    }
}
