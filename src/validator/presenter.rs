//! Error presentation
//!
//! Turns structured validation errors into display strings. Presenters are
//! total over [`ErrorKind`]: the template presenter refuses to be built
//! unless every kind has a template.

use std::collections::BTreeMap;

use super::errors::{ValidatorError, ValidatorResult};
use crate::rules::{ErrorKind, ValidationError};

/// Renders a validation error for display.
pub trait ErrorPresenter: Send + Sync {
    fn present(&self, error: &ValidationError) -> String;
}

/// Canonical English messages, e.g. `not an integer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleErrorPresenter;

impl ErrorPresenter for SimpleErrorPresenter {
    fn present(&self, error: &ValidationError) -> String {
        error.to_string()
    }
}

/// Messages rendered from a per-kind template table.
///
/// Templates reference error data by name: `{field}`, `{max}`, `{min}`,
/// `{actual}`, `{expected}`, `{input}`. Unknown placeholders are kept
/// verbatim.
#[derive(Debug, Clone)]
pub struct TemplateErrorPresenter {
    templates: BTreeMap<ErrorKind, String>,
}

impl TemplateErrorPresenter {
    /// Fails with `MissingTemplate` unless every error kind is covered.
    pub fn new(templates: BTreeMap<ErrorKind, String>) -> ValidatorResult<Self> {
        if let Some(kind) = ErrorKind::ALL.iter().find(|k| !templates.contains_key(*k)) {
            return Err(ValidatorError::MissingTemplate(*kind));
        }
        Ok(Self { templates })
    }

    pub fn template(&self, kind: ErrorKind) -> Option<&str> {
        self.templates.get(&kind).map(String::as_str)
    }
}

impl ErrorPresenter for TemplateErrorPresenter {
    fn present(&self, error: &ValidationError) -> String {
        match self.templates.get(&error.kind()) {
            Some(template) => render(template, &error.arguments()),
            // construction guarantees coverage of every kind
            None => unreachable!("no template for {}", error.kind()),
        }
    }
}

/// Single pass over the template, so substituted text is never rescanned.
fn render(template: &str, arguments: &[(&'static str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        match arguments.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_table() -> BTreeMap<ErrorKind, String> {
        ErrorKind::ALL
            .iter()
            .map(|kind| (*kind, format!("[{}]", kind)))
            .collect()
    }

    #[test]
    fn test_simple_presenter() {
        let presenter = SimpleErrorPresenter;
        assert_eq!(presenter.present(&ValidationError::NotAnInteger), "not an integer");
        assert_eq!(
            presenter.present(&ValidationError::field_not_defined("age")),
            "field age not defined"
        );
    }

    #[test]
    fn test_template_presenter_requires_every_kind() {
        let mut table = full_table();
        table.remove(&ErrorKind::MaxSize);

        let err = TemplateErrorPresenter::new(table).unwrap_err();
        assert_eq!(err, ValidatorError::MissingTemplate(ErrorKind::MaxSize));
    }

    #[test]
    fn test_template_substitution() {
        let mut table = full_table();
        table.insert(
            ErrorKind::StringTooLong,
            "maximal {max} Zeichen, erhalten {actual}".into(),
        );
        table.insert(ErrorKind::FieldNotDefined, "Feld {field} fehlt".into());
        let presenter = TemplateErrorPresenter::new(table).unwrap();

        assert_eq!(
            presenter.present(&ValidationError::StringTooLong { max: 5, actual: 6 }),
            "maximal 5 Zeichen, erhalten 6"
        );
        assert_eq!(
            presenter.present(&ValidationError::field_not_defined("age")),
            "Feld age fehlt"
        );
        assert_eq!(presenter.present(&ValidationError::NotAMap), "[not_a_map]");
    }

    #[test]
    fn test_render_keeps_unknown_placeholders() {
        let args = vec![("input", "{max}".to_string())];
        assert_eq!(render("{input} / {other} / {", &args), "{max} / {other} / {");
        assert_eq!(render("no placeholders", &args), "no placeholders");
    }
}
