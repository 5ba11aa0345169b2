//! Error types for querylike.
//!
//! Errors only occur at construction time (building options, registering
//! schemas). The rewrite pass itself never fails: a condition the engine
//! cannot or should not rewrite is left untouched.

use thiserror::Error;

/// The main error type for querylike operations.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// The configured placeholder collides with LIKE pattern syntax.
    #[error("placeholder character '{0}' is reserved LIKE pattern syntax")]
    ReservedPlaceholder(char),

    /// A table was registered twice in the same registry.
    #[error("table '{0}' is already registered")]
    DuplicateTable(String),

    /// Schema JSON could not be deserialized.
    #[error("invalid schema definition: {0}")]
    InvalidSchema(#[from] serde_json::Error),
}
