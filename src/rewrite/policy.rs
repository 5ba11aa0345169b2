use crate::rewrite::options::RewriteOptions;
use crate::schema::{LikeTag, TableSchema};

/// Outcome of resolving the rewrite policy for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldPolicy {
    /// The column may be rewritten. `cast` is set when the declared type
    /// needs a cast to text before LIKE applies.
    Eligible { cast: bool },
    /// Leave every condition on this column untouched.
    Ineligible,
}

/// Resolve whether a column is eligible for rewriting.
///
/// Unknown columns (computed or raw expressions) are never rewritten. A
/// `Disabled` tag wins over everything, including per-query opt-in.
pub(crate) fn resolve(options: &RewriteOptions, table: &TableSchema, column: &str) -> FieldPolicy {
    let Some(field) = table.lookup(column) else {
        return FieldPolicy::Ineligible;
    };

    if field.tag == LikeTag::Disabled {
        return FieldPolicy::Ineligible;
    }

    if options.require_tag && field.tag != LikeTag::Enabled {
        return FieldPolicy::Ineligible;
    }

    FieldPolicy::Eligible {
        cast: !field.typ.likeable(),
    }
}
