//! SQL rendering for the query model.
//!
//! Renders literals inline; the surrounding query layer is expected to
//! swap in bound parameters when it owns execution. The output exists so
//! rewrites are observable and assertable.

use crate::ast::{Condition, LogicalOp, Predicate, WhereClause};
use crate::query::SelectQuery;

/// Render a query model node to SQL text.
pub trait ToSql {
    fn to_sql(&self) -> String;
}

impl ToSql for Condition {
    fn to_sql(&self) -> String {
        format!("{} {} {}", self.left, self.op, self.value)
    }
}

impl ToSql for Predicate {
    fn to_sql(&self) -> String {
        match self {
            Predicate::Single(cond) => cond.to_sql(),
            Predicate::Group {
                conditions,
                logical_op,
            } => {
                let joined = conditions
                    .iter()
                    .map(ToSql::to_sql)
                    .collect::<Vec<_>>()
                    .join(&format!(" {} ", logical_op));
                format!("({})", joined)
            }
            Predicate::Raw(fragment) => fragment.clone(),
        }
    }
}

impl ToSql for WhereClause {
    fn to_sql(&self) -> String {
        self.predicates
            .iter()
            .map(ToSql::to_sql)
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}

impl ToSql for SelectQuery {
    fn to_sql(&self) -> String {
        let cols = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(", ")
        };
        let mut sql = format!("SELECT {} FROM {}", cols, self.table);
        if !self.where_clause.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.where_clause.to_sql());
        }
        sql
    }
}
