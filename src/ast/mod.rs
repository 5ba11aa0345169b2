//! Minimal query model the rewrite engine operates on.
//!
//! These types mirror what a query builder hands over right before SQL
//! generation: an ordered WHERE clause of conditions over dynamically
//! typed values.

pub mod conditions;
pub mod expr;
pub mod operators;
pub mod values;
pub mod where_clause;

pub use self::conditions::Condition;
pub use self::expr::Expr;
pub use self::operators::{LogicalOp, Operator};
pub use self::values::Value;
pub use self::where_clause::{Predicate, WhereClause};
