//! The per-query request object handed to the engine.

use crate::ast::{Condition, Operator, Predicate, Value, WhereClause};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A SELECT query under construction: table, projection, WHERE clause and
/// per-query settings.
///
/// Settings are an arbitrary key/value bag scoped to this one query; the
/// engine reads its opt-in flag from here (see [`crate::SETTING_KEY`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectQuery {
    /// Target table name
    pub table: String,
    /// Columns to select; empty means `*`
    pub columns: Vec<String>,
    /// Parsed WHERE clause
    pub where_clause: WhereClause,
    /// Per-query settings
    #[serde(default)]
    settings: HashMap<String, Value>,
}

impl SelectQuery {
    /// Create a new SELECT over the given table.
    pub fn from_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: vec![],
            where_clause: WhereClause::new(),
            settings: HashMap::new(),
        }
    }

    /// Select specific columns instead of `*`.
    pub fn columns(mut self, cols: &[&str]) -> Self {
        self.columns = cols.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Add an equality filter (`column = value`).
    pub fn filter(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.where_clause.push(Condition::eq(column, value));
        self
    }

    /// Add a membership filter (`column IN (values...)`).
    pub fn filter_in(mut self, column: &str, values: Vec<Value>) -> Self {
        self.where_clause.push(Condition::is_in(column, values));
        self
    }

    /// Add a filter with an explicit operator.
    pub fn filter_op(mut self, column: &str, op: Operator, value: impl Into<Value>) -> Self {
        self.where_clause.push(Condition {
            left: column.into(),
            op,
            value: value.into(),
        });
        self
    }

    /// Add an opaque SQL fragment as a filter.
    pub fn filter_raw(mut self, fragment: &str) -> Self {
        self.where_clause.push(Predicate::Raw(fragment.to_string()));
        self
    }

    /// Attach a per-query setting.
    pub fn setting(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.settings.insert(key.to_string(), value.into());
        self
    }

    /// Read a per-query setting.
    pub fn get_setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }
}
