//! Validator error types
//!
//! These are operational failures of a validation call or of building a
//! validator. Findings about the document are never reported here.

use thiserror::Error;

use crate::rules::ErrorKind;

/// Result type for validator operations
pub type ValidatorResult<T> = Result<T, ValidatorError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidatorError {
    #[error("validation cancelled")]
    Cancelled,

    #[error("no message template for error kind {0}")]
    MissingTemplate(ErrorKind),

    #[error("invalid path separator: {0}")]
    InvalidSeparator(String),
}

impl ValidatorError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ValidatorError::Cancelled => "TC_VALIDATION_CANCELLED",
            ValidatorError::MissingTemplate(_) => "TC_MISSING_TEMPLATE",
            ValidatorError::InvalidSeparator(_) => "TC_INVALID_SEPARATOR",
        }
    }
}
