//! Transparent wildcard-to-LIKE rewriting for query builder WHERE clauses.
//!
//! `querylike` sits between a query builder and SQL generation. Given a
//! parsed WHERE clause, it converts equality and IN conditions into LIKE
//! conditions when the filter value contains wildcard markers, so callers
//! can accept filters like `{"name": "%a%"}` without giving up exact-match
//! semantics for ordinary values.
//!
//! # Example
//! ```
//! use querylike::prelude::*;
//!
//! let mut registry = SchemaRegistry::new();
//! registry
//!     .register(TableSchema::new("users").field("name", FieldType::Text))
//!     .unwrap();
//!
//! let engine = Rewriter::with_defaults();
//! let mut query = SelectQuery::from_table("users").filter("name", "%a%");
//! engine.rewrite(&registry, &mut query);
//!
//! assert_eq!(query.to_sql(), "SELECT * FROM users WHERE name LIKE '%a%'");
//! ```

pub mod ast;
pub mod error;
pub mod query;
pub mod rewrite;
pub mod schema;
pub mod transpiler;

pub use error::RewriteError;
pub use query::SelectQuery;
pub use rewrite::{RewriteOptions, Rewriter, SETTING_KEY};

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::error::RewriteError;
    pub use crate::query::SelectQuery;
    pub use crate::rewrite::{RewriteOptions, Rewriter, SETTING_KEY};
    pub use crate::schema::{FieldDef, FieldType, LikeTag, SchemaRegistry, TableSchema};
    pub use crate::transpiler::ToSql;
}
