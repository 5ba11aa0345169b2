use serde::{Deserialize, Serialize};

/// The left-hand side of a condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    /// A named column
    Named(String),
    /// A column cast to text (CAST(col AS varchar)), used when the column's
    /// declared type has no LIKE support of its own
    CastText(String),
}

impl Expr {
    /// The underlying column name.
    pub fn column(&self) -> &str {
        match self {
            Expr::Named(name) | Expr::CastText(name) => name,
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Named(name) => write!(f, "{}", name),
            Expr::CastText(name) => write!(f, "CAST({} AS varchar)", name),
        }
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Expr::Named(name.to_string())
    }
}

impl From<String> for Expr {
    fn from(name: String) -> Self {
        Expr::Named(name)
    }
}
