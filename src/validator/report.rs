//! Validation results

use std::collections::BTreeMap;

use serde::Serialize;

use super::path::Path;
use crate::rules::ValidationError;

/// One finding at one location, before presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: Path,
    pub error: ValidationError,
}

impl Violation {
    pub fn new(path: Path, error: ValidationError) -> Self {
        Self { path, error }
    }
}

/// Presented outcome of a validation call.
///
/// `errors` maps each presented path to its messages in the order they
/// were produced. A passing validation has an empty map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationReport {
    pub fn from_errors(errors: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Total number of messages across all paths.
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Messages at one presented path.
    pub fn at(&self, path: &str) -> &[String] {
        self.errors.get(path).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_valid() {
        let report = ValidationReport::from_errors(BTreeMap::new());
        assert!(report.valid);
        assert_eq!(report.error_count(), 0);
        assert!(report.at("$").is_empty());
    }

    #[test]
    fn test_report_counts() {
        let mut errors = BTreeMap::new();
        errors.insert("$".to_string(), vec!["a".to_string(), "b".to_string()]);
        errors.insert("$.x".to_string(), vec!["c".to_string()]);

        let report = ValidationReport::from_errors(errors);
        assert!(!report.valid);
        assert_eq!(report.error_count(), 3);
        assert_eq!(report.at("$"), ["a", "b"]);
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = ValidationReport::from_errors(BTreeMap::new());
        let encoded = serde_json::to_value(&report).unwrap();
        assert_eq!(encoded, serde_json::json!({ "valid": true, "errors": {} }));
    }
}
