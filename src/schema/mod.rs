//! Schema definitions
//!
//! A [`Definition`] is the schema node the validation engine walks. It is
//! built in code, or compiled from a [`SchemaDocument`] loaded from disk.
//!
//! # Design Principles
//!
//! - Definitions are immutable once built
//! - A node is a scalar, an object or a list, never two of them
//! - One compiled definition serves any number of concurrent validations

mod document;
mod errors;
mod loader;
mod types;

pub use document::{DefinitionSpec, RuleSpec, Schema, SchemaDocument};
pub use errors::{SchemaError, SchemaResult};
pub use loader::SchemaRegistry;
pub use types::{Definition, Shape};
