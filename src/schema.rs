//! Schema metadata consulted during rewriting.
//!
//! The engine never introspects entity types at runtime. Callers register
//! each table's fields once, and the engine resolves column names through
//! plain lookup.
//!
//! # Example
//! ```
//! use querylike::schema::{FieldType, LikeTag, SchemaRegistry, TableSchema};
//!
//! let mut registry = SchemaRegistry::new();
//! registry
//!     .register(
//!         TableSchema::new("users")
//!             .field("id", FieldType::Uuid)
//!             .field("name", FieldType::Text)
//!             .field_tagged("email", FieldType::Text, LikeTag::Disabled),
//!     )
//!     .unwrap();
//! ```

use crate::error::RewriteError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Declared type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Integer,
    Float,
    Boolean,
    /// UUID-typed identifier. Has no LIKE support of its own and must be
    /// cast to text before pattern matching.
    Uuid,
    Timestamp,
}

impl FieldType {
    /// Whether a LIKE can be applied to the column directly, without a
    /// cast to text.
    pub fn likeable(self) -> bool {
        !matches!(self, FieldType::Uuid)
    }
}

/// Per-field rewrite annotation, declared alongside the field definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LikeTag {
    /// No annotation present
    #[default]
    Unset,
    /// Field explicitly opted in
    Enabled,
    /// Field explicitly opted out; overrides every other policy
    Disabled,
}

/// Column definition with type and rewrite annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type", alias = "typ")]
    pub typ: FieldType,
    #[serde(default)]
    pub tag: LikeTag,
}

/// Table definition with its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

impl TableSchema {
    /// Create a new table schema.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Builder: add an unannotated field.
    pub fn field(self, name: &str, typ: FieldType) -> Self {
        self.field_tagged(name, typ, LikeTag::Unset)
    }

    /// Builder: add a field with an explicit rewrite annotation.
    pub fn field_tagged(mut self, name: &str, typ: FieldType, tag: LikeTag) -> Self {
        self.fields.push(FieldDef {
            name: name.to_string(),
            typ,
            tag,
        });
        self
    }

    /// Look up a field by column name.
    pub fn lookup(&self, column: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == column)
    }
}

/// Registry of table schemas, consulted once per column reference.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    tables: HashMap<String, TableSchema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table schema. Registering the same table twice is a
    /// caller bug and is rejected.
    pub fn register(&mut self, table: TableSchema) -> Result<(), RewriteError> {
        if self.tables.contains_key(&table.name) {
            return Err(RewriteError::DuplicateTable(table.name));
        }
        self.tables.insert(table.name.clone(), table);
        Ok(())
    }

    /// Look up a table schema by name.
    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.get(name)
    }

    /// Load a registry from a JSON array of table schemas.
    pub fn from_json(json: &str) -> Result<Self, RewriteError> {
        let tables: Vec<TableSchema> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for table in tables {
            registry.register(table)?;
        }
        Ok(registry)
    }
}
