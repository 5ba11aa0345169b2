use crate::ast::{Condition, LogicalOp};
use serde::{Deserialize, Serialize};

/// One top-level node of a WHERE clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    /// A single condition
    Single(Condition),
    /// A parenthesized group of conditions joined by one logical operator
    Group {
        conditions: Vec<Condition>,
        logical_op: LogicalOp,
    },
    /// An opaque SQL fragment the engine does not understand
    Raw(String),
}

impl Predicate {
    /// Build an OR group from conditions, collapsing a single-element
    /// group to a plain condition.
    pub fn or_group(mut conditions: Vec<Condition>) -> Self {
        if conditions.len() == 1 {
            Predicate::Single(conditions.remove(0))
        } else {
            Predicate::Group {
                conditions,
                logical_op: LogicalOp::Or,
            }
        }
    }
}

impl From<Condition> for Predicate {
    fn from(cond: Condition) -> Self {
        Predicate::Single(cond)
    }
}

/// A parsed WHERE clause: an ordered sequence of predicates joined by AND.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WhereClause {
    pub predicates: Vec<Predicate>,
}

impl WhereClause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Append a predicate, keeping insertion order.
    pub fn push(&mut self, predicate: impl Into<Predicate>) {
        self.predicates.push(predicate.into());
    }
}
