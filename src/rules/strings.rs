//! String content validators
//!
//! All of these block with `NotAString` on anything but a string, `null`
//! included, and never block on their own content failure.

use serde_json::Value;

use super::{Context, ContextValidator, Outcome, ValidationError};
use crate::value::Slot;

/// Upper bound on the number of characters (Unicode scalar values).
#[derive(Debug, Clone, Copy)]
pub struct MaxLength {
    max: usize,
}

impl MaxLength {
    pub fn new(max: usize) -> Self {
        Self { max }
    }
}

impl ContextValidator for MaxLength {
    fn validate(&self, _ctx: &Context, slot: Slot<'_>) -> Outcome {
        match slot {
            Slot::Missing => Outcome::pass(),
            Slot::Present(Value::String(s)) => {
                let actual = s.chars().count();
                if actual > self.max {
                    Outcome::fail(ValidationError::StringTooLong {
                        max: self.max,
                        actual,
                    })
                } else {
                    Outcome::pass()
                }
            }
            Slot::Present(_) => Outcome::block(ValidationError::NotAString),
        }
    }

    fn name(&self) -> &str {
        "max_length"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LowerCase;

impl ContextValidator for LowerCase {
    fn validate(&self, _ctx: &Context, slot: Slot<'_>) -> Outcome {
        match slot {
            Slot::Missing => Outcome::pass(),
            Slot::Present(Value::String(s)) if s.to_lowercase() == *s => Outcome::pass(),
            Slot::Present(Value::String(s)) => {
                Outcome::fail(ValidationError::NotLowerCased { input: s.clone() })
            }
            Slot::Present(_) => Outcome::block(ValidationError::NotAString),
        }
    }

    fn name(&self) -> &str {
        "lower_case"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UpperCase;

impl ContextValidator for UpperCase {
    fn validate(&self, _ctx: &Context, slot: Slot<'_>) -> Outcome {
        match slot {
            Slot::Missing => Outcome::pass(),
            Slot::Present(Value::String(s)) if s.to_uppercase() == *s => Outcome::pass(),
            Slot::Present(Value::String(s)) => {
                Outcome::fail(ValidationError::NotUpperCased { input: s.clone() })
            }
            Slot::Present(_) => Outcome::block(ValidationError::NotAString),
        }
    }

    fn name(&self) -> &str {
        "upper_case"
    }
}
