//! treecheck - path-qualified validation of decoded document trees
//!
//! A [`schema::Definition`] describes what a document should look like: the
//! leaf validators applied at each node and, optionally, a fixed set of
//! fields or a homogeneous list. [`validator::Validator`] walks a
//! `serde_json::Value` against it and reports every violation keyed by its
//! presented path (`$.users.[0].name`).

pub mod cli;
pub mod config;
pub mod rules;
pub mod schema;
pub mod validator;
pub mod value;
