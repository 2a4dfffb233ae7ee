//! Presence and basic type validators
//!
//! Type checks pass on a missing slot: absence is judged by the field
//! policy of the parent or by [`NonNullable`], never by a type check.

use serde_json::Value;

use super::{Context, ContextValidator, Outcome, ValidationError};
use crate::value::Slot;

/// Requires a value: missing is `Required`, `null` is `NotAValue`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonNullable;

impl ContextValidator for NonNullable {
    fn validate(&self, _ctx: &Context, slot: Slot<'_>) -> Outcome {
        match slot {
            Slot::Missing => Outcome::block(ValidationError::Required),
            Slot::Present(Value::Null) => Outcome::block(ValidationError::NotAValue),
            Slot::Present(_) => Outcome::pass(),
        }
    }

    fn name(&self) -> &str {
        "non_nullable"
    }
}

/// Shared shape of the single-type checks below.
fn require(slot: Slot<'_>, accepts: fn(&Value) -> bool, error: ValidationError) -> Outcome {
    match slot {
        Slot::Missing => Outcome::pass(),
        Slot::Present(value) if accepts(value) => Outcome::pass(),
        Slot::Present(_) => Outcome::block(error),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsString;

impl ContextValidator for IsString {
    fn validate(&self, _ctx: &Context, slot: Slot<'_>) -> Outcome {
        require(slot, Value::is_string, ValidationError::NotAString)
    }

    fn name(&self) -> &str {
        "string"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsBoolean;

impl ContextValidator for IsBoolean {
    fn validate(&self, _ctx: &Context, slot: Slot<'_>) -> Outcome {
        require(slot, Value::is_boolean, ValidationError::NotABoolean)
    }

    fn name(&self) -> &str {
        "boolean"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsMap;

impl ContextValidator for IsMap {
    fn validate(&self, _ctx: &Context, slot: Slot<'_>) -> Outcome {
        require(slot, Value::is_object, ValidationError::NotAMap)
    }

    fn name(&self) -> &str {
        "is_map"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsList;

impl ContextValidator for IsList {
    fn validate(&self, _ctx: &Context, slot: Slot<'_>) -> Outcome {
        require(slot, Value::is_array, ValidationError::NotAList)
    }

    fn name(&self) -> &str {
        "is_list"
    }
}
