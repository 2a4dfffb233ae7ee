//! Validation engine and presentation
//!
//! [`Validator::validate`] walks a decoded document against a
//! [`Definition`](crate::schema::Definition) and returns every violation,
//! keyed by presented path.
//!
//! # Usage
//!
//! ```
//! use treecheck::rules::{self, Context};
//! use treecheck::schema::Definition;
//! use treecheck::validator::{SeparatorPathPresenter, SimpleErrorPresenter, Validator};
//! use serde_json::json;
//!
//! let user = Definition::object(
//!     [rules::is_map()],
//!     [("age", Definition::scalar([rules::non_nullable(), rules::integer()]))],
//! );
//! let validator = Validator::new(SeparatorPathPresenter::new(".").unwrap(), SimpleErrorPresenter);
//!
//! let report = validator
//!     .validate(&Context::background(), &json!({"age": "42"}), &user)
//!     .unwrap();
//! assert!(!report.valid);
//! assert_eq!(report.at("$.age"), ["not an integer"]);
//! ```

mod engine;
mod errors;
mod path;
mod presenter;
mod report;

pub use engine::Validator;
pub use errors::{ValidatorError, ValidatorResult};
pub use path::{Path, PathPresenter, Segment, SeparatorPathPresenter, ROOT};
pub use presenter::{ErrorPresenter, SimpleErrorPresenter, TemplateErrorPresenter};
pub use report::{ValidationReport, Violation};
