//! Schema error types
//!
//! Error codes:
//! - TC_SCHEMA_CONFLICTING_SHAPE: a node declares both fields and list_of
//! - TC_SCHEMA_MALFORMED: a schema file cannot be read or parsed
//! - TC_SCHEMA_IMMUTABLE: a schema id/version is registered twice
//! - TC_SCHEMA_UNKNOWN: a lookup names no registered schema

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema construction and registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("definition at {path} declares both fields and list_of")]
    ConflictingShape { path: String },

    #[error("malformed schema '{source_name}': {reason}")]
    Malformed { source_name: String, reason: String },

    #[error("schema '{schema_id}' version '{schema_version}' is immutable")]
    Immutable {
        schema_id: String,
        schema_version: String,
    },

    #[error("schema '{schema_id}' version '{schema_version}' not found")]
    Unknown {
        schema_id: String,
        schema_version: String,
    },
}

impl SchemaError {
    pub fn malformed(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::Malformed {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    pub fn immutable(schema_id: impl Into<String>, schema_version: impl Into<String>) -> Self {
        SchemaError::Immutable {
            schema_id: schema_id.into(),
            schema_version: schema_version.into(),
        }
    }

    pub fn unknown(schema_id: impl Into<String>, schema_version: impl Into<String>) -> Self {
        SchemaError::Unknown {
            schema_id: schema_id.into(),
            schema_version: schema_version.into(),
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::ConflictingShape { .. } => "TC_SCHEMA_CONFLICTING_SHAPE",
            SchemaError::Malformed { .. } => "TC_SCHEMA_MALFORMED",
            SchemaError::Immutable { .. } => "TC_SCHEMA_IMMUTABLE",
            SchemaError::Unknown { .. } => "TC_SCHEMA_UNKNOWN",
        }
    }
}
