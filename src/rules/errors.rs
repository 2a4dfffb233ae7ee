//! Validation error taxonomy
//!
//! Errors are data: leaf validators and the engine return them, they are
//! never raised. Each variant carries exactly what its message needs.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single validation failure at some path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("not an integer")]
    NotAnInteger,

    #[error("not a float")]
    NotAFloat,

    #[error("not a string")]
    NotAString,

    #[error("not a boolean")]
    NotABoolean,

    #[error("not a map")]
    NotAMap,

    #[error("not a list")]
    NotAList,

    #[error("not an object")]
    NotAnObject,

    #[error("not a value")]
    NotAValue,

    #[error("not a number")]
    NotANumber,

    #[error("field {field} not defined")]
    FieldNotDefined { field: String },

    #[error("unexpected field {field}")]
    UnexpectedField { field: String },

    #[error("required")]
    Required,

    #[error("expected at most {max} characters, got {actual}")]
    StringTooLong { max: usize, actual: usize },

    #[error("min size {min}, actual size {actual}")]
    MinSize { min: usize, actual: usize },

    #[error("max size {max}, actual size {actual}")]
    MaxSize { max: usize, actual: usize },

    #[error("expected precision {expected}, actual precision {actual}")]
    FloatPrecision { expected: usize, actual: usize },

    #[error("\"{input}\" is not lower cased")]
    NotLowerCased { input: String },

    #[error("\"{input}\" is not upper cased")]
    NotUpperCased { input: String },
}

impl ValidationError {
    pub fn field_not_defined(field: impl Into<String>) -> Self {
        ValidationError::FieldNotDefined { field: field.into() }
    }

    pub fn unexpected_field(field: impl Into<String>) -> Self {
        ValidationError::UnexpectedField { field: field.into() }
    }

    /// Returns the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::NotAnInteger => ErrorKind::NotAnInteger,
            ValidationError::NotAFloat => ErrorKind::NotAFloat,
            ValidationError::NotAString => ErrorKind::NotAString,
            ValidationError::NotABoolean => ErrorKind::NotABoolean,
            ValidationError::NotAMap => ErrorKind::NotAMap,
            ValidationError::NotAList => ErrorKind::NotAList,
            ValidationError::NotAnObject => ErrorKind::NotAnObject,
            ValidationError::NotAValue => ErrorKind::NotAValue,
            ValidationError::NotANumber => ErrorKind::NotANumber,
            ValidationError::FieldNotDefined { .. } => ErrorKind::FieldNotDefined,
            ValidationError::UnexpectedField { .. } => ErrorKind::UnexpectedField,
            ValidationError::Required => ErrorKind::Required,
            ValidationError::StringTooLong { .. } => ErrorKind::StringTooLong,
            ValidationError::MinSize { .. } => ErrorKind::MinSize,
            ValidationError::MaxSize { .. } => ErrorKind::MaxSize,
            ValidationError::FloatPrecision { .. } => ErrorKind::FloatPrecision,
            ValidationError::NotLowerCased { .. } => ErrorKind::NotLowerCased,
            ValidationError::NotUpperCased { .. } => ErrorKind::NotUpperCased,
        }
    }

    /// Named message arguments, used by template presenters.
    pub fn arguments(&self) -> Vec<(&'static str, String)> {
        match self {
            ValidationError::FieldNotDefined { field }
            | ValidationError::UnexpectedField { field } => vec![("field", field.clone())],
            ValidationError::StringTooLong { max, actual }
            | ValidationError::MaxSize { max, actual } => {
                vec![("max", max.to_string()), ("actual", actual.to_string())]
            }
            ValidationError::MinSize { min, actual } => {
                vec![("min", min.to_string()), ("actual", actual.to_string())]
            }
            ValidationError::FloatPrecision { expected, actual } => vec![
                ("expected", expected.to_string()),
                ("actual", actual.to_string()),
            ],
            ValidationError::NotLowerCased { input } | ValidationError::NotUpperCased { input } => {
                vec![("input", input.clone())]
            }
            _ => Vec::new(),
        }
    }
}

/// The closed set of error kinds, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotAnInteger,
    NotAFloat,
    NotAString,
    NotABoolean,
    NotAMap,
    NotAList,
    NotAnObject,
    NotAValue,
    NotANumber,
    FieldNotDefined,
    UnexpectedField,
    Required,
    StringTooLong,
    MinSize,
    MaxSize,
    FloatPrecision,
    NotLowerCased,
    NotUpperCased,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 18] = [
        ErrorKind::NotAnInteger,
        ErrorKind::NotAFloat,
        ErrorKind::NotAString,
        ErrorKind::NotABoolean,
        ErrorKind::NotAMap,
        ErrorKind::NotAList,
        ErrorKind::NotAnObject,
        ErrorKind::NotAValue,
        ErrorKind::NotANumber,
        ErrorKind::FieldNotDefined,
        ErrorKind::UnexpectedField,
        ErrorKind::Required,
        ErrorKind::StringTooLong,
        ErrorKind::MinSize,
        ErrorKind::MaxSize,
        ErrorKind::FloatPrecision,
        ErrorKind::NotLowerCased,
        ErrorKind::NotUpperCased,
    ];

    /// Returns the snake_case name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotAnInteger => "not_an_integer",
            ErrorKind::NotAFloat => "not_a_float",
            ErrorKind::NotAString => "not_a_string",
            ErrorKind::NotABoolean => "not_a_boolean",
            ErrorKind::NotAMap => "not_a_map",
            ErrorKind::NotAList => "not_a_list",
            ErrorKind::NotAnObject => "not_an_object",
            ErrorKind::NotAValue => "not_a_value",
            ErrorKind::NotANumber => "not_a_number",
            ErrorKind::FieldNotDefined => "field_not_defined",
            ErrorKind::UnexpectedField => "unexpected_field",
            ErrorKind::Required => "required",
            ErrorKind::StringTooLong => "string_too_long",
            ErrorKind::MinSize => "min_size",
            ErrorKind::MaxSize => "max_size",
            ErrorKind::FloatPrecision => "float_precision",
            ErrorKind::NotLowerCased => "not_lower_cased",
            ErrorKind::NotUpperCased => "not_upper_cased",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
