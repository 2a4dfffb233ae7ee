//! Validator configuration
//!
//! Loaded from a JSON file. Every field is optional:
//!
//! ```json
//! {
//!   "separator": ".",
//!   "message_templates": { "not_an_integer": "kein Integer", "...": "..." }
//! }
//! ```
//!
//! Values are checked when a validator is built from them
//! (`Validator::from_config`): the separator must be usable by
//! `SeparatorPathPresenter` and a template table must cover every error kind.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rules::ErrorKind;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Token between path segments (default ".")
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Per-kind message templates; canonical messages when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_templates: Option<BTreeMap<ErrorKind, String>>,
}

fn default_separator() -> String {
    ".".to_string()
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            message_templates: None,
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse configuration text
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
