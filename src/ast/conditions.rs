use crate::ast::{Expr, Operator, Value};
use serde::{Deserialize, Serialize};

/// A single condition within a WHERE clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Left hand side expression (usually a column)
    pub left: Expr,
    /// Comparison operator
    pub op: Operator,
    /// Value to compare against
    pub value: Value,
}

impl Condition {
    /// Build an equality condition on a named column.
    pub fn eq(column: impl Into<Expr>, value: impl Into<Value>) -> Self {
        Self {
            left: column.into(),
            op: Operator::Eq,
            value: value.into(),
        }
    }

    /// Build a LIKE condition on a column expression.
    pub fn like(column: impl Into<Expr>, pattern: impl Into<String>) -> Self {
        Self {
            left: column.into(),
            op: Operator::Like,
            value: Value::String(pattern.into()),
        }
    }

    /// Build an IN condition over a list of values.
    pub fn is_in(column: impl Into<Expr>, values: Vec<Value>) -> Self {
        Self {
            left: column.into(),
            op: Operator::In,
            value: Value::Array(values),
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.value)
    }
}
