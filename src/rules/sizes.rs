//! Collection size validators
//!
//! Size is the element count of an array or the entry count of an object.

use serde_json::Value;

use super::{Context, ContextValidator, Outcome, ValidationError};
use crate::value::Slot;

fn size_of(value: &Value) -> Option<usize> {
    match value {
        Value::Array(items) => Some(items.len()),
        Value::Object(entries) => Some(entries.len()),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MinSize {
    min: usize,
}

impl MinSize {
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl ContextValidator for MinSize {
    fn validate(&self, _ctx: &Context, slot: Slot<'_>) -> Outcome {
        let Some(value) = slot.value() else {
            return Outcome::pass();
        };
        match size_of(value) {
            Some(actual) if actual < self.min => Outcome::fail(ValidationError::MinSize {
                min: self.min,
                actual,
            }),
            Some(_) => Outcome::pass(),
            None => Outcome::block(ValidationError::NotAList),
        }
    }

    fn name(&self) -> &str {
        "min_size"
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MaxSize {
    max: usize,
}

impl MaxSize {
    pub fn new(max: usize) -> Self {
        Self { max }
    }
}

impl ContextValidator for MaxSize {
    fn validate(&self, _ctx: &Context, slot: Slot<'_>) -> Outcome {
        let Some(value) = slot.value() else {
            return Outcome::pass();
        };
        match size_of(value) {
            Some(actual) if actual > self.max => Outcome::fail(ValidationError::MaxSize {
                max: self.max,
                actual,
            }),
            Some(_) => Outcome::pass(),
            None => Outcome::block(ValidationError::NotAList),
        }
    }

    fn name(&self) -> &str {
        "max_size"
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
    fn test_min_size() {
        let rule = MinSize::new(2);
        assert!(run(&rule, json!([1, 2])).is_pass());
        assert_eq!(
            run(&rule, json!([1])),
            Outcome::fail(ValidationError::MinSize { min: 2, actual: 1 })
        );
        assert_eq!(
            run(&rule, json!({"a": 1})),
            Outcome::fail(ValidationError::MinSize { min: 2, actual: 1 })
        );
    }

    #[test]
    fn test_max_size() {
        let rule = MaxSize::new(2);
        assert!(run(&rule, json!([])).is_pass());
        assert_eq!(
            run(&rule, json!([1, 2, 3])),
            Outcome::fail(ValidationError::MaxSize { max: 2, actual: 3 })
        );
    }

    #[test]
    fn test_sizes_block_on_scalars() {
        assert_eq!(
            run(&MinSize::new(1), json!("abc")),
            Outcome::block(ValidationError::NotAList)
        );
        assert_eq!(
            run(&MaxSize::new(1), Value::Null),
            Outcome::block(ValidationError::NotAList)
        );
    }
}
