//! Numeric validators

use serde_json::Value;

use super::{Context, ContextValidator, Outcome, ValidationError};
use crate::value::{fractional_digits, is_whole_number, Slot};

/// Accepts integers, including floats that hold a whole number.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsInteger;

impl ContextValidator for IsInteger {
    fn validate(&self, _ctx: &Context, slot: Slot<'_>) -> Outcome {
        match slot {
            Slot::Missing => Outcome::pass(),
            Slot::Present(Value::Number(n)) if is_whole_number(n) => Outcome::pass(),
            Slot::Present(_) => Outcome::block(ValidationError::NotAnInteger),
        }
    }

    fn name(&self) -> &str {
        "integer"
    }
}

/// Accepts any number; integers are valid floats.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsFloat;

impl ContextValidator for IsFloat {
    fn validate(&self, _ctx: &Context, slot: Slot<'_>) -> Outcome {
        match slot {
            Slot::Missing | Slot::Present(Value::Number(_)) => Outcome::pass(),
            Slot::Present(_) => Outcome::block(ValidationError::NotAFloat),
        }
    }

    fn name(&self) -> &str {
        "float"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsNumber;

impl ContextValidator for IsNumber {
    fn validate(&self, _ctx: &Context, slot: Slot<'_>) -> Outcome {
        match slot {
            Slot::Missing | Slot::Present(Value::Number(_)) => Outcome::pass(),
            Slot::Present(_) => Outcome::block(ValidationError::NotANumber),
        }
    }

    fn name(&self) -> &str {
        "number"
    }
}

/// Limits the number of fractional digits of a number.
#[derive(Debug, Clone, Copy)]
pub struct FloatPrecision {
    precision: usize,
}

impl FloatPrecision {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }
}

impl ContextValidator for FloatPrecision {
    fn validate(&self, _ctx: &Context, slot: Slot<'_>) -> Outcome {
        match slot {
            Slot::Missing => Outcome::pass(),
            Slot::Present(Value::Number(n)) => {
                let actual = fractional_digits(n);
                if actual > self.precision {
                    Outcome::fail(ValidationError::FloatPrecision {
                        expected: self.precision,
                        actual,
                    })
                } else {
                    Outcome::pass()
                }
            }
            Slot::Present(_) => Outcome::block(ValidationError::NotANumber),
        }
    }

    fn name(&self) -> &str {
        "float_precision"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(rule: &dyn ContextValidator, value: Value) -> Outcome {
        rule.validate(&Context::background(), Slot::Present(&value))
    }

    #[test]
    fn test_integer() {
        assert!(run(&IsInteger, json!(42)).is_pass());
        assert!(run(&IsInteger, json!(-3)).is_pass());
        assert!(run(&IsInteger, json!(42.0)).is_pass());
        assert_eq!(
            run(&IsInteger, json!(42.5)),
            Outcome::block(ValidationError::NotAnInteger)
        );
        assert_eq!(
            run(&IsInteger, json!("42")),
            Outcome::block(ValidationError::NotAnInteger)
        );
        assert_eq!(
            run(&IsInteger, Value::Null),
            Outcome::block(ValidationError::NotAnInteger)
        );
    }

    #[test]
    fn test_integer_passes_on_missing() {
        assert!(IsInteger
            .validate(&Context::background(), Slot::Missing)
            .is_pass());
    }

    #[test]
    fn test_float_accepts_integers() {
        assert!(run(&IsFloat, json!(100)).is_pass());
        assert!(run(&IsFloat, json!(99.5)).is_pass());
        assert_eq!(run(&IsFloat, json!("1.5")), Outcome::block(ValidationError::NotAFloat));
    }

    #[test]
    fn test_number() {
        assert!(run(&IsNumber, json!(1)).is_pass());
        assert!(run(&IsNumber, json!(1.25)).is_pass());
        assert_eq!(run(&IsNumber, json!(true)), Outcome::block(ValidationError::NotANumber));
    }

    #[test]
    fn test_float_precision() {
        let rule = FloatPrecision::new(2);
        assert!(run(&rule, json!(1)).is_pass());
        assert!(run(&rule, json!(1.25)).is_pass());
        assert_eq!(
            run(&rule, json!(1.255)),
            Outcome::fail(ValidationError::FloatPrecision {
                expected: 2,
                actual: 3
            })
        );
        assert_eq!(run(&rule, json!("1.2")), Outcome::block(ValidationError::NotANumber));
    }
}
