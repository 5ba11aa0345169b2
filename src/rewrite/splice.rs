use crate::ast::{Predicate, WhereClause};

/// Rebuild a WHERE clause with replacements substituted at known indices.
///
/// Untouched predicates keep their position and relative order. Indices
/// must be strictly increasing, which holds by construction since the
/// rewriter walks predicates front to back.
pub(crate) fn splice(clause: &mut WhereClause, replacements: Vec<(usize, Predicate)>) {
    if replacements.is_empty() {
        return;
    }

    let original = std::mem::take(&mut clause.predicates);
    let mut replacements = replacements.into_iter().peekable();

    clause.predicates = original
        .into_iter()
        .enumerate()
        .map(
            |(index, predicate)| match replacements.next_if(|(at, _)| *at == index) {
                Some((_, replacement)) => replacement,
                None => predicate,
            },
        )
        .collect();
}
