//! The clause rewriting engine.
//!
//! [`Rewriter::rewrite`] walks the top-level predicates of a query's WHERE
//! clause and replaces eligible equality and IN conditions with LIKE
//! conditions when the filter value carries wildcard markers. Everything
//! it does not understand is left exactly as it was: the pass is
//! fail-closed and cannot error.

pub mod options;
pub(crate) mod policy;
pub(crate) mod splice;

#[cfg(test)]
mod tests;

use crate::ast::{Condition, Expr, Operator, Predicate, Value};
use crate::error::RewriteError;
use crate::query::SelectQuery;
use crate::schema::{SchemaRegistry, TableSchema};
use tracing::{debug, trace};

pub use options::RewriteOptions;

use policy::FieldPolicy;

/// Per-query setting key holding the opt-in flag.
pub const SETTING_KEY: &str = "querylike";

/// What to do with one condition. Computed per predicate, never stored.
#[derive(Debug)]
enum RewriteDecision {
    /// Leave the predicate untouched
    Skip,
    /// Replace with a single LIKE condition
    Pattern { pattern: String, cast: bool },
    /// Replace an IN list with an OR chain of these terms, in order
    OrChain(Vec<Term>),
}

/// One term of a rebuilt OR chain.
#[derive(Debug)]
enum Term {
    /// LIKE on the (possibly cast) column
    Pattern { pattern: String, cast: bool },
    /// Plain equality on the original value
    Exact(Value),
}

/// The wildcard rewriting engine. Holds only the immutable policy; safe to
/// share across queries and threads.
#[derive(Debug, Clone)]
pub struct Rewriter {
    options: RewriteOptions,
}

impl Rewriter {
    /// Build an engine from the given options, rejecting invalid
    /// combinations.
    pub fn new(options: RewriteOptions) -> Result<Self, RewriteError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Build an engine with default options (no opt-ins, no placeholder).
    pub fn with_defaults() -> Self {
        Self {
            options: RewriteOptions::default(),
        }
    }

    /// The policy this engine was built with.
    pub fn options(&self) -> &RewriteOptions {
        &self.options
    }

    /// Rewrite the query's WHERE clause in place. Invoked by the query
    /// layer once per query, just before SQL generation.
    pub fn rewrite(&self, registry: &SchemaRegistry, query: &mut SelectQuery) {
        if !self.query_enabled(query) {
            return;
        }

        let Some(table) = registry.table(&query.table) else {
            debug!(table = %query.table, "table not registered, skipping rewrite");
            return;
        };

        let mut replacements = Vec::new();
        for (index, predicate) in query.where_clause.predicates.iter().enumerate() {
            let Predicate::Single(cond) = predicate else {
                continue;
            };
            let Expr::Named(column) = &cond.left else {
                continue;
            };

            let decision = match (cond.op, &cond.value) {
                (Operator::Eq, value) => self.decide_equality(table, column, value),
                (Operator::In, Value::Array(values)) => {
                    self.decide_membership(table, column, values)
                }
                _ => RewriteDecision::Skip,
            };
            trace!(column = %column, ?decision, "condition classified");

            match decision {
                RewriteDecision::Skip => {}
                RewriteDecision::Pattern { pattern, cast } => {
                    replacements.push((index, like_condition(column, pattern, cast).into()));
                }
                RewriteDecision::OrChain(terms) => {
                    let conditions = terms
                        .into_iter()
                        .map(|term| match term {
                            Term::Pattern { pattern, cast } => {
                                like_condition(column, pattern, cast)
                            }
                            Term::Exact(value) => Condition {
                                left: Expr::Named(column.clone()),
                                op: Operator::Eq,
                                value,
                            },
                        })
                        .collect();
                    replacements.push((index, Predicate::or_group(conditions)));
                }
            }
        }

        debug!(
            table = %query.table,
            rewritten = replacements.len(),
            "rewrite pass complete"
        );
        splice::splice(&mut query.where_clause, replacements);
    }

    /// Resolve the per-query flag. Only an explicit `Bool(true)` opens the
    /// gate when the setting is present; any other stored value means the
    /// caller asked us to stand down.
    fn query_enabled(&self, query: &SelectQuery) -> bool {
        match query.get_setting(SETTING_KEY) {
            Some(Value::Bool(true)) => true,
            Some(value) => {
                debug!(?value, "setting present but not true, skipping query");
                false
            }
            None => {
                if self.options.require_setting {
                    debug!("opt-in setting required but absent, skipping query");
                }
                !self.options.require_setting
            }
        }
    }

    fn decide_equality(
        &self,
        table: &TableSchema,
        column: &str,
        value: &Value,
    ) -> RewriteDecision {
        let Value::String(s) = value else {
            return RewriteDecision::Skip;
        };
        let FieldPolicy::Eligible { cast } = policy::resolve(&self.options, table, column) else {
            return RewriteDecision::Skip;
        };
        if !self.options.needs_rewriting(s) {
            return RewriteDecision::Skip;
        }
        RewriteDecision::Pattern {
            pattern: self.options.substitute(s),
            cast,
        }
    }

    fn decide_membership(
        &self,
        table: &TableSchema,
        column: &str,
        values: &[Value],
    ) -> RewriteDecision {
        // Eligibility is per column, checked once for the whole list.
        let FieldPolicy::Eligible { cast } = policy::resolve(&self.options, table, column) else {
            return RewriteDecision::Skip;
        };

        let mut patterns = 0;
        let terms = values
            .iter()
            .map(|value| match value {
                Value::String(s) if self.options.needs_rewriting(s) => {
                    patterns += 1;
                    Term::Pattern {
                        pattern: self.options.substitute(s),
                        cast,
                    }
                }
                other => Term::Exact(other.clone()),
            })
            .collect();

        // A list without a single wildcard stays an IN list; rebuilding it
        // as OR-of-equalities would churn the query shape for nothing.
        if patterns == 0 {
            return RewriteDecision::Skip;
        }
        RewriteDecision::OrChain(terms)
    }
}

fn like_condition(column: &str, pattern: String, cast: bool) -> Condition {
    let left = if cast {
        Expr::CastText(column.to_string())
    } else {
        Expr::Named(column.to_string())
    };
    Condition {
        left,
        op: Operator::Like,
        value: Value::String(pattern),
    }
}
