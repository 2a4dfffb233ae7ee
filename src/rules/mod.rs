//! Leaf validators
//!
//! A leaf validator inspects one value and reports errors as data. It may
//! also *block*: ask the engine to skip the remaining validators and all
//! structural descent at the node, because the value's basic type is wrong
//! and further checks would only produce noise.
//!
//! # Usage
//!
//! ```
//! use treecheck::rules::{self, Context};
//! use treecheck::value::Slot;
//! use serde_json::json;
//!
//! let rule = rules::max_length(3);
//! let outcome = rule.validate(&Context::background(), Slot::Present(&json!("abcd")));
//! assert!(!outcome.block);
//! assert_eq!(outcome.errors.len(), 1);
//! ```

mod context;
mod errors;
mod numbers;
mod sizes;
mod strings;
mod types;

pub use context::{CancelToken, Context};
pub use errors::{ErrorKind, ValidationError};
pub use numbers::{FloatPrecision, IsFloat, IsInteger, IsNumber};
pub use sizes::{MaxSize, MinSize};
pub use strings::{LowerCase, MaxLength, UpperCase};
pub use types::{IsBoolean, IsList, IsMap, IsString, NonNullable};

use std::fmt;
use std::sync::Arc;

use crate::value::Slot;

/// Result of one leaf validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Stop remaining validators and structural descent at this node.
    pub block: bool,
    pub errors: Vec<ValidationError>,
}

impl Outcome {
    /// No errors, not blocking.
    pub fn pass() -> Self {
        Self::default()
    }

    /// A non-blocking failure.
    pub fn fail(error: ValidationError) -> Self {
        Self {
            block: false,
            errors: vec![error],
        }
    }

    /// A blocking failure.
    pub fn block(error: ValidationError) -> Self {
        Self {
            block: true,
            errors: vec![error],
        }
    }

    pub fn is_pass(&self) -> bool {
        !self.block && self.errors.is_empty()
    }
}

/// A validator applied to a single position of the document tree.
///
/// Implementations must be stateless with respect to the values they see;
/// one instance is shared by every validation using its definition.
pub trait ContextValidator: Send + Sync {
    fn validate(&self, ctx: &Context, slot: Slot<'_>) -> Outcome;

    /// Short name used in logs and debug output.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> ContextValidator for F
where
    F: Fn(&Context, Slot<'_>) -> Outcome + Send + Sync,
{
    fn validate(&self, ctx: &Context, slot: Slot<'_>) -> Outcome {
        self(ctx, slot)
    }
}

/// Shared handle to a validator, as stored in definitions.
pub type Rule = Arc<dyn ContextValidator>;

impl fmt::Debug for dyn ContextValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wraps any validator (including a closure) into a [`Rule`].
pub fn custom<V: ContextValidator + 'static>(validator: V) -> Rule {
    Arc::new(validator)
}

pub fn non_nullable() -> Rule {
    Arc::new(NonNullable)
}

pub fn string() -> Rule {
    Arc::new(IsString)
}

pub fn boolean() -> Rule {
    Arc::new(IsBoolean)
}

pub fn is_map() -> Rule {
    Arc::new(IsMap)
}

pub fn is_list() -> Rule {
    Arc::new(IsList)
}

pub fn integer() -> Rule {
    Arc::new(IsInteger)
}

pub fn float() -> Rule {
    Arc::new(IsFloat)
}

pub fn number() -> Rule {
    Arc::new(IsNumber)
}

pub fn max_length(max: usize) -> Rule {
    Arc::new(MaxLength::new(max))
}

pub fn lower_case() -> Rule {
    Arc::new(LowerCase)
}

pub fn upper_case() -> Rule {
    Arc::new(UpperCase)
}

pub fn min_size(min: usize) -> Rule {
    Arc::new(MinSize::new(min))
}

pub fn max_size(max: usize) -> Rule {
    Arc::new(MaxSize::new(max))
}

pub fn float_precision(precision: usize) -> Rule {
    Arc::new(FloatPrecision::new(precision))
}
