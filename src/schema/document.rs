//! Declarative schema documents
//!
//! A schema document is a JSON file naming a schema and describing its root
//! definition:
//!
//! ```json
//! {
//!   "schema_id": "users",
//!   "schema_version": "v1",
//!   "root": {
//!     "validators": ["is_map"],
//!     "fields": {
//!       "name": { "validators": ["non_nullable", { "max_length": { "max": 20 } }] }
//!     }
//!   }
//! }
//! ```
//!
//! Documents are compiled into [`Definition`]s once; a node that declares
//! both `fields` and `list_of` is rejected at that point.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path as FsPath;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::errors::{SchemaError, SchemaResult};
use super::types::Definition;
use crate::rules::{self, Rule};
use crate::validator::{Path, PathPresenter, SeparatorPathPresenter};

/// A named leaf validator in a schema document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSpec {
    NonNullable,
    String,
    Boolean,
    IsMap,
    IsList,
    Integer,
    Float,
    Number,
    LowerCase,
    UpperCase,
    MaxLength { max: usize },
    MinSize { min: usize },
    MaxSize { max: usize },
    FloatPrecision { precision: usize },
}

impl RuleSpec {
    fn build(&self) -> Rule {
        match self {
            RuleSpec::NonNullable => rules::non_nullable(),
            RuleSpec::String => rules::string(),
            RuleSpec::Boolean => rules::boolean(),
            RuleSpec::IsMap => rules::is_map(),
            RuleSpec::IsList => rules::is_list(),
            RuleSpec::Integer => rules::integer(),
            RuleSpec::Float => rules::float(),
            RuleSpec::Number => rules::number(),
            RuleSpec::LowerCase => rules::lower_case(),
            RuleSpec::UpperCase => rules::upper_case(),
            RuleSpec::MaxLength { max } => rules::max_length(*max),
            RuleSpec::MinSize { min } => rules::min_size(*min),
            RuleSpec::MaxSize { max } => rules::max_size(*max),
            RuleSpec::FloatPrecision { precision } => rules::float_precision(*precision),
        }
    }
}

/// Serialized form of a [`Definition`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionSpec {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<RuleSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, DefinitionSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_of: Option<Box<DefinitionSpec>>,
    #[serde(default)]
    pub accept_extra_property: bool,
    #[serde(default)]
    pub accept_not_defined_property: bool,
}

impl DefinitionSpec {
    /// Compiles this node and everything below it.
    pub fn compile(&self) -> SchemaResult<Definition> {
        self.compile_at(&Path::root())
    }

    fn compile_at(&self, path: &Path) -> SchemaResult<Definition> {
        let validators = self.validators.iter().map(RuleSpec::build);

        let definition = match (&self.fields, &self.list_of) {
            (Some(_), Some(_)) => {
                return Err(SchemaError::ConflictingShape {
                    path: SeparatorPathPresenter::default().present(path),
                })
            }
            (Some(fields), None) => {
                let mut compiled = Vec::with_capacity(fields.len());
                for (name, spec) in fields {
                    compiled.push((name.clone(), spec.compile_at(&path.field(name))?));
                }
                Definition::object(validators, compiled)
            }
            // item errors are labelled with the first element's position
            (None, Some(item)) => Definition::list(validators, item.compile_at(&path.index(0))?),
            (None, None) => Definition::scalar(validators),
        };

        Ok(definition
            .accept_extra_property(self.accept_extra_property)
            .accept_not_defined_property(self.accept_not_defined_property))
    }
}

/// A schema file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDocument {
    pub schema_id: String,
    pub schema_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub root: DefinitionSpec,
}

impl SchemaDocument {
    pub fn new(
        schema_id: impl Into<String>,
        schema_version: impl Into<String>,
        root: DefinitionSpec,
    ) -> Self {
        Self {
            schema_id: schema_id.into(),
            schema_version: schema_version.into(),
            description: None,
            root,
        }
    }

    /// Parses a document from JSON text. `source_name` only labels errors.
    pub fn from_json(source_name: &str, content: &str) -> SchemaResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| SchemaError::malformed(source_name, format!("Invalid JSON: {}", e)))
    }

    /// Reads and parses a document file.
    pub fn from_path(path: &FsPath) -> SchemaResult<Self> {
        let name = path.display().to_string();
        let content = fs::read_to_string(path)
            .map_err(|e| SchemaError::malformed(&name, format!("Failed to read file: {}", e)))?;
        Self::from_json(&name, &content)
    }

    /// Compiles the document into a ready-to-use schema.
    pub fn compile(self) -> SchemaResult<Schema> {
        if self.schema_id.is_empty() || self.schema_version.is_empty() {
            return Err(SchemaError::malformed(
                format!("{}@{}", self.schema_id, self.schema_version),
                "schema_id and schema_version must be non-empty",
            ));
        }
        let definition = self.root.compile()?;
        Ok(Schema {
            definition: Arc::new(definition),
            document: self,
        })
    }
}

/// A compiled schema: its document plus the shared root definition.
#[derive(Debug, Clone)]
pub struct Schema {
    document: SchemaDocument,
    definition: Arc<Definition>,
}

impl Schema {
    pub fn schema_id(&self) -> &str {
        &self.document.schema_id
    }

    pub fn schema_version(&self) -> &str {
        &self.document.schema_version
    }

    pub fn description(&self) -> Option<&str> {
        self.document.description.as_deref()
    }

    /// Returns the unique key for this schema (id, version)
    pub fn key(&self) -> (&str, &str) {
        (self.schema_id(), self.schema_version())
    }

    pub fn definition(&self) -> &Arc<Definition> {
        &self.definition
    }

    pub fn document(&self) -> &SchemaDocument {
        &self.document
    }
}
