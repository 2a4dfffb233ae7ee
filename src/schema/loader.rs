//! Schema registry loading schema documents from disk at startup
//!
//! - Schemas stored at `<dir>/schema_<id>_<version>.json`
//! - One file per schema version
//! - Malformed files and conflicting definitions abort loading
//! - A registered (id, version) is never replaced

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::document::{Schema, SchemaDocument};
use super::errors::{SchemaError, SchemaResult};

/// Registry of compiled schemas indexed by (schema_id, schema_version).
pub struct SchemaRegistry {
    /// Directory containing schema files
    schema_dir: PathBuf,
    schemas: HashMap<(String, String), Schema>,
}

impl SchemaRegistry {
    /// Creates an empty registry backed by the given directory.
    pub fn new(schema_dir: &Path) -> Self {
        Self {
            schema_dir: schema_dir.to_path_buf(),
            schemas: HashMap::new(),
        }
    }

    /// Returns the schema directory path.
    pub fn schema_dir(&self) -> &Path {
        &self.schema_dir
    }

    /// Loads every `*.json` file in the schema directory.
    ///
    /// A missing directory is an empty registry, not an error.
    pub fn load_all(&mut self) -> SchemaResult<()> {
        if !self.schema_dir.exists() {
            debug!(dir = %self.schema_dir.display(), "schema directory absent");
            return Ok(());
        }

        let dir_name = self.schema_dir.display().to_string();
        let entries = fs::read_dir(&self.schema_dir).map_err(|e| {
            SchemaError::malformed(&dir_name, format!("Failed to read schema directory: {}", e))
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                SchemaError::malformed(&dir_name, format!("Failed to read directory entry: {}", e))
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        // directory order is platform-defined
        paths.sort();

        for path in paths {
            self.load_file(&path)?;
        }

        Ok(())
    }

    /// Loads, compiles and registers a single schema file.
    pub fn load_file(&mut self, path: &Path) -> SchemaResult<()> {
        let schema = SchemaDocument::from_path(path)?.compile()?;
        info!(
            schema_id = schema.schema_id(),
            schema_version = schema.schema_version(),
            file = %path.display(),
            "schema loaded"
        );
        self.register(schema)
    }

    /// Registers a compiled schema.
    pub fn register(&mut self, schema: Schema) -> SchemaResult<()> {
        let key = (
            schema.schema_id().to_string(),
            schema.schema_version().to_string(),
        );

        if self.schemas.contains_key(&key) {
            return Err(SchemaError::immutable(key.0, key.1));
        }

        self.schemas.insert(key, schema);
        Ok(())
    }

    /// Gets a schema by ID and version.
    pub fn get(&self, schema_id: &str, schema_version: &str) -> Option<&Schema> {
        self.schemas
            .get(&(schema_id.to_string(), schema_version.to_string()))
    }

    /// Gets a schema, failing with `TC_SCHEMA_UNKNOWN` when absent.
    pub fn require(&self, schema_id: &str, schema_version: &str) -> SchemaResult<&Schema> {
        self.get(schema_id, schema_version)
            .ok_or_else(|| SchemaError::unknown(schema_id, schema_version))
    }

    pub fn exists(&self, schema_id: &str, schema_version: &str) -> bool {
        self.get(schema_id, schema_version).is_some()
    }

    /// Checks if any version of a schema ID exists.
    pub fn schema_id_exists(&self, schema_id: &str) -> bool {
        self.schemas.keys().any(|(id, _)| id == schema_id)
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<(&str, &str)> {
        let mut keys: Vec<_> = self.schemas.values().map(Schema::key).collect();
        keys.sort_unstable();
        keys
    }

    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    /// Writes a schema document to its standard file name.
    ///
    /// Existing files are never overwritten.
    pub fn save_schema(&self, document: &SchemaDocument) -> SchemaResult<PathBuf> {
        let filename = format!(
            "schema_{}_{}.json",
            document.schema_id, document.schema_version
        );
        let path = self.schema_dir.join(&filename);
        let name = path.display().to_string();

        if path.exists() {
            return Err(SchemaError::immutable(
                &document.schema_id,
                &document.schema_version,
            ));
        }

        fs::create_dir_all(&self.schema_dir).map_err(|e| {
            SchemaError::malformed(
                self.schema_dir.display().to_string(),
                format!("Failed to create schema directory: {}", e),
            )
        })?;

        let content = serde_json::to_string_pretty(document)
            .map_err(|e| SchemaError::malformed(&name, format!("Failed to serialize schema: {}", e)))?;

        fs::write(&path, content)
            .map_err(|e| SchemaError::malformed(&name, format!("Failed to write file: {}", e)))?;

        Ok(path)
    }
}
