//! Validation engine
//!
//! Validation semantics:
//! - The node's validators run in order until one blocks
//! - A blocked node gets no structural checks
//! - List elements are each validated; no short-circuit across elements
//! - Declared-but-absent fields are reported at the parent path unless
//!   tolerated, in which case the child's presence validators decide
//! - Undeclared keys are reported at the parent path unless tolerated
//!
//! Every finding is kept; a call reports all violations of the document.
//! The engine does not mutate the document or the definition.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::errors::{ValidatorError, ValidatorResult};
use super::path::{Path, PathPresenter, SeparatorPathPresenter};
use super::presenter::{ErrorPresenter, SimpleErrorPresenter, TemplateErrorPresenter};
use super::report::{ValidationReport, Violation};
use crate::config::ValidatorConfig;
use crate::rules::{Context, ValidationError};
use crate::schema::{Definition, Shape};
use crate::value::Slot;

/// Validates document trees against definitions.
///
/// Holds only the presenters, so one instance can serve any number of
/// definitions and threads.
pub struct Validator {
    paths: Box<dyn PathPresenter>,
    errors: Box<dyn ErrorPresenter>,
}

impl Validator {
    /// Creates a validator from a path presenter and an error presenter.
    pub fn new(
        paths: impl PathPresenter + 'static,
        errors: impl ErrorPresenter + 'static,
    ) -> Self {
        Self {
            paths: Box::new(paths),
            errors: Box::new(errors),
        }
    }

    /// Creates a validator from configuration.
    ///
    /// # Errors
    ///
    /// - `InvalidSeparator` for an empty or reserved-character separator
    /// - `MissingTemplate` when a template table does not cover every kind
    pub fn from_config(config: &ValidatorConfig) -> ValidatorResult<Self> {
        let paths = SeparatorPathPresenter::new(config.separator.as_str())?;

        Ok(match &config.message_templates {
            Some(templates) => Self::new(paths, TemplateErrorPresenter::new(templates.clone())?),
            None => Self::new(paths, SimpleErrorPresenter),
        })
    }

    /// Validates `value` against `definition` and presents the findings.
    ///
    /// # Errors
    ///
    /// Returns `Cancelled` if the context is cancelled mid-traversal.
    /// Document violations are never errors; they are in the report.
    pub fn validate(
        &self,
        ctx: &Context,
        value: &Value,
        definition: &Definition,
    ) -> ValidatorResult<ValidationReport> {
        let violations = self.violations(ctx, value, definition)?;
        let report = self.present(&violations);
        debug!(
            valid = report.valid,
            paths = report.errors.len(),
            errors = violations.len(),
            "validation finished"
        );
        Ok(report)
    }

    /// Validates and returns the structured findings in production order.
    pub fn violations(
        &self,
        ctx: &Context,
        value: &Value,
        definition: &Definition,
    ) -> ValidatorResult<Vec<Violation>> {
        debug!(value = crate::value::type_name(value), "validation started");

        let mut walk = Walk {
            ctx,
            violations: Vec::new(),
        };
        walk.node(&Path::root(), Slot::Present(value), definition)?;
        Ok(walk.violations)
    }

    /// Presents findings, grouping messages by presented path.
    pub fn present(&self, violations: &[Violation]) -> ValidationReport {
        let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for violation in violations {
            errors
                .entry(self.paths.present(&violation.path))
                .or_default()
                .push(self.errors.present(&violation.error));
        }
        ValidationReport::from_errors(errors)
    }
}

impl Default for Validator {
    /// `.`-separated paths and canonical English messages.
    fn default() -> Self {
        Self::new(SeparatorPathPresenter::default(), SimpleErrorPresenter)
    }
}

/// Runs a node's validators until one blocks.
///
/// Returns whether a validator blocked, and every error produced.
fn run_validators(
    ctx: &Context,
    definition: &Definition,
    slot: Slot<'_>,
) -> (bool, Vec<ValidationError>) {
    let mut errors = Vec::new();
    for rule in definition.validators() {
        let outcome = rule.validate(ctx, slot);
        errors.extend(outcome.errors);
        if outcome.block {
            trace!(validator = rule.name(), value = slot.type_name(), "validator blocked");
            return (true, errors);
        }
    }
    (false, errors)
}

/// State of one traversal.
struct Walk<'a> {
    ctx: &'a Context,
    violations: Vec<Violation>,
}

impl Walk<'_> {
    fn push(&mut self, path: &Path, error: ValidationError) {
        self.violations.push(Violation::new(path.clone(), error));
    }

    fn checkpoint(&self) -> ValidatorResult<()> {
        if self.ctx.is_cancelled() {
            debug!(found = self.violations.len(), "validation cancelled");
            return Err(ValidatorError::Cancelled);
        }
        Ok(())
    }

    fn node(&mut self, path: &Path, slot: Slot<'_>, definition: &Definition) -> ValidatorResult<()> {
        let (blocked, errors) = run_validators(self.ctx, definition, slot);
        for error in errors {
            self.push(path, error);
        }
        if blocked {
            return Ok(());
        }

        // absent optional structure is not an error by itself
        let Slot::Present(value) = slot else {
            return Ok(());
        };

        match definition.shape() {
            Shape::Scalar => Ok(()),
            Shape::List(item) => self.list(path, value, item),
            Shape::Object(fields) => self.object(path, value, definition, fields),
        }
    }

    fn list(&mut self, path: &Path, value: &Value, item: &Definition) -> ValidatorResult<()> {
        let Value::Array(elements) = value else {
            self.push(path, ValidationError::NotAList);
            return Ok(());
        };

        for (index, element) in elements.iter().enumerate() {
            self.checkpoint()?;
            self.node(&path.index(index), Slot::Present(element), item)?;
        }
        Ok(())
    }

    fn object(
        &mut self,
        path: &Path,
        value: &Value,
        definition: &Definition,
        fields: &BTreeMap<String, Definition>,
    ) -> ValidatorResult<()> {
        let Value::Object(entries) = value else {
            self.push(path, ValidationError::NotAMap);
            return Ok(());
        };

        for (name, child) in fields {
            self.checkpoint()?;
            match entries.get(name) {
                Some(field_value) => {
                    self.node(&path.field(name.as_str()), Slot::Present(field_value), child)?
                }
                None if definition.accepts_not_defined_property() => {
                    self.missing_field(path, name, child)
                }
                None => self.push(path, ValidationError::field_not_defined(name.as_str())),
            }
        }

        if !definition.accepts_extra_property() {
            self.unexpected_fields(path, entries, fields);
        }
        Ok(())
    }

    /// A tolerated absent field: its own presence validators still apply,
    /// and a missing required value reads as an undefined field of the parent.
    fn missing_field(&mut self, parent: &Path, name: &str, child: &Definition) {
        let (_, errors) = run_validators(self.ctx, child, Slot::Missing);
        if errors.is_empty() {
            return;
        }

        let path = parent.field(name);
        for error in errors {
            match error {
                ValidationError::Required => {
                    self.push(parent, ValidationError::field_not_defined(name))
                }
                other => self.push(&path, other),
            }
        }
    }

    fn unexpected_fields(
        &mut self,
        path: &Path,
        entries: &Map<String, Value>,
        fields: &BTreeMap<String, Definition>,
    ) {
        for key in entries.keys().filter(|key| !fields.contains_key(*key)) {
            self.push(path, ValidationError::unexpected_field(key.as_str()));
        }
    }
}
