//! Engine scenario tests.
//!
//! The matrix follows the behaviors the engine guarantees: exact-match
//! passthrough, wildcard rewrites, mixed IN lists, placeholder
//! substitution, per-query and per-field opt-ins, and UUID casting.

use crate::ast::{Operator, Predicate, Value};
use crate::query::SelectQuery;
use crate::rewrite::{RewriteOptions, Rewriter, SETTING_KEY};
use crate::schema::{FieldType, LikeTag, SchemaRegistry, TableSchema};
use crate::transpiler::ToSql;
use pretty_assertions::assert_eq;

fn registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    registry
        .register(
            TableSchema::new("objects")
                .field("id", FieldType::Uuid)
                .field("name", FieldType::Text)
                .field("age", FieldType::Integer)
                .field("other", FieldType::Text),
        )
        .unwrap();
    registry
}

fn tagged_registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    registry
        .register(
            TableSchema::new("objects")
                .field_tagged("name", FieldType::Text, LikeTag::Enabled)
                .field("other", FieldType::Text)
                .field_tagged("secret", FieldType::Text, LikeTag::Disabled),
        )
        .unwrap();
    registry
}

fn where_sql(engine: &Rewriter, registry: &SchemaRegistry, mut query: SelectQuery) -> String {
    engine.rewrite(registry, &mut query);
    query.where_clause.to_sql()
}

#[test]
fn test_exact_match_left_untouched() {
    let engine = Rewriter::with_defaults();
    let query = SelectQuery::from_table("objects").filter("name", "jessica");
    assert_eq!(where_sql(&engine, &registry(), query), "name = 'jessica'");
}

#[test]
fn test_mixed_filters_left_untouched() {
    let engine = Rewriter::with_defaults();
    let query = SelectQuery::from_table("objects")
        .filter("name", "jessica")
        .filter("age", 53);
    assert_eq!(
        where_sql(&engine, &registry(), query),
        "name = 'jessica' AND age = 53"
    );
}

#[test]
fn test_simple_like_query() {
    let engine = Rewriter::with_defaults();
    let query = SelectQuery::from_table("objects").filter("name", "%a%");
    assert_eq!(where_sql(&engine, &registry(), query), "name LIKE '%a%'");
}

#[test]
fn test_like_preserves_sibling_conditions() {
    let engine = Rewriter::with_defaults();
    let query = SelectQuery::from_table("objects")
        .filter("name", "%a%")
        .filter("age", 20);
    assert_eq!(
        where_sql(&engine, &registry(), query),
        "name LIKE '%a%' AND age = 20"
    );
}

#[test]
fn test_plain_in_list_structurally_unchanged() {
    let engine = Rewriter::with_defaults();
    let mut query = SelectQuery::from_table("objects")
        .filter_in("name", vec!["jessica".into(), "amy".into()]);
    let original = query.where_clause.clone();

    engine.rewrite(&registry(), &mut query);
    assert_eq!(query.where_clause, original);
}

#[test]
fn test_in_list_all_wildcards() {
    let engine = Rewriter::with_defaults();
    let query = SelectQuery::from_table("objects")
        .filter_in("name", vec!["%a%".into(), "%o%".into()]);
    assert_eq!(
        where_sql(&engine, &registry(), query),
        "(name LIKE '%a%' OR name LIKE '%o%')"
    );
}

#[test]
fn test_in_list_mixed_values() {
    let engine = Rewriter::with_defaults();
    let query = SelectQuery::from_table("objects")
        .filter_in("name", vec!["jessica".into(), "%o%".into()]);
    assert_eq!(
        where_sql(&engine, &registry(), query),
        "(name = 'jessica' OR name LIKE '%o%')"
    );
}

#[test]
fn test_in_list_single_wildcard_collapses() {
    let engine = Rewriter::with_defaults();
    let query = SelectQuery::from_table("objects").filter_in("name", vec!["%o%".into()]);
    assert_eq!(where_sql(&engine, &registry(), query), "name LIKE '%o%'");
}

#[test]
fn test_in_list_non_string_entries_keep_equality() {
    let engine = Rewriter::with_defaults();
    let query = SelectQuery::from_table("objects")
        .filter_in("name", vec![Value::Int(7), "%o%".into(), Value::Bool(true)]);
    assert_eq!(
        where_sql(&engine, &registry(), query),
        "(name = 7 OR name LIKE '%o%' OR name = true)"
    );
}

#[test]
fn test_two_in_lists_rewritten_independently() {
    let engine = Rewriter::with_defaults();
    let query = SelectQuery::from_table("objects")
        .filter_in("name", vec!["%a%".into(), "%o%".into()])
        .filter_in("other", vec!["%ooo".into(), "aaa%".into()]);
    assert_eq!(
        where_sql(&engine, &registry(), query),
        "(name LIKE '%a%' OR name LIKE '%o%') AND (other LIKE '%ooo' OR other LIKE 'aaa%')"
    );
}

#[test]
fn test_wildcard_only_value_is_valid_pattern() {
    let engine = Rewriter::with_defaults();
    let query = SelectQuery::from_table("objects").filter("name", "%");
    assert_eq!(where_sql(&engine, &registry(), query), "name LIKE '%'");
}

#[test]
fn test_non_string_equality_never_rewritten() {
    let engine = Rewriter::with_defaults();
    let query = SelectQuery::from_table("objects").filter("age", 20);
    assert_eq!(where_sql(&engine, &registry(), query), "age = 20");
}

#[test]
fn test_other_operators_pass_through() {
    let engine = Rewriter::with_defaults();
    let query = SelectQuery::from_table("objects").filter_op("name", Operator::Gt, "%a%");
    assert_eq!(where_sql(&engine, &registry(), query), "name > '%a%'");
}

#[test]
fn test_raw_predicates_pass_through() {
    let engine = Rewriter::with_defaults();
    let query = SelectQuery::from_table("objects")
        .filter_raw("deleted_at IS NULL")
        .filter("name", "%a%");
    assert_eq!(
        where_sql(&engine, &registry(), query),
        "deleted_at IS NULL AND name LIKE '%a%'"
    );
}

#[test]
fn test_unknown_column_never_rewritten() {
    let engine = Rewriter::with_defaults();
    let query = SelectQuery::from_table("objects").filter("computed", "%a%");
    assert_eq!(where_sql(&engine, &registry(), query), "computed = '%a%'");
}

#[test]
fn test_unregistered_table_skipped() {
    let engine = Rewriter::with_defaults();
    let query = SelectQuery::from_table("elsewhere").filter("name", "%a%");
    assert_eq!(where_sql(&engine, &registry(), query), "name = '%a%'");
}

// Per-query setting.

#[test]
fn test_setting_true_enables_rewrite() {
    let engine = Rewriter::new(RewriteOptions::new().require_setting(true)).unwrap();
    let query = SelectQuery::from_table("objects")
        .filter("name", "jes%")
        .setting(SETTING_KEY, true);
    assert_eq!(where_sql(&engine, &registry(), query), "name LIKE 'jes%'");
}

#[test]
fn test_setting_absent_skips_query_when_required() {
    let engine = Rewriter::new(RewriteOptions::new().require_setting(true)).unwrap();
    let query = SelectQuery::from_table("objects").filter("name", "jes%");
    assert_eq!(where_sql(&engine, &registry(), query), "name = 'jes%'");
}

#[test]
fn test_setting_false_skips_query() {
    let engine = Rewriter::with_defaults();
    let query = SelectQuery::from_table("objects")
        .filter("name", "%a%")
        .setting(SETTING_KEY, false);
    assert_eq!(where_sql(&engine, &registry(), query), "name = '%a%'");
}

#[test]
fn test_setting_non_bool_treated_as_false() {
    let engine = Rewriter::with_defaults();
    let query = SelectQuery::from_table("objects")
        .filter("name", "%a%")
        .setting(SETTING_KEY, "yes");
    assert_eq!(where_sql(&engine, &registry(), query), "name = '%a%'");
}

#[test]
fn test_unrelated_settings_ignored() {
    let engine = Rewriter::with_defaults();
    let query = SelectQuery::from_table("objects")
        .filter("name", "%a%")
        .setting("page_size", 25);
    assert_eq!(where_sql(&engine, &registry(), query), "name LIKE '%a%'");
}

// Per-field tag.

#[test]
fn test_require_tag_allows_enabled_fields_only() {
    let engine = Rewriter::new(RewriteOptions::new().require_tag(true)).unwrap();
    let query = SelectQuery::from_table("objects")
        .filter("name", "%a%")
        .filter("other", "%b%");
    assert_eq!(
        where_sql(&engine, &tagged_registry(), query),
        "name LIKE '%a%' AND other = '%b%'"
    );
}

#[test]
fn test_disabled_tag_wins_over_query_setting() {
    let engine = Rewriter::new(RewriteOptions::new().require_setting(true)).unwrap();
    let query = SelectQuery::from_table("objects")
        .filter("secret", "%a%")
        .setting(SETTING_KEY, true);
    assert_eq!(where_sql(&engine, &tagged_registry(), query), "secret = '%a%'");
}

#[test]
fn test_disabled_tag_applies_to_in_lists() {
    let engine = Rewriter::with_defaults();
    let query = SelectQuery::from_table("objects")
        .filter_in("secret", vec!["%a%".into(), "abc".into()]);
    assert_eq!(
        where_sql(&engine, &tagged_registry(), query),
        "secret IN ('%a%', 'abc')"
    );
}

#[test]
fn test_exact_match_on_disabled_field_still_works() {
    let engine = Rewriter::with_defaults();
    let query = SelectQuery::from_table("objects").filter("secret", "abc");
    assert_eq!(where_sql(&engine, &tagged_registry(), query), "secret = 'abc'");
}

// Placeholder substitution.

#[test]
fn test_placeholder_substitution() {
    let engine = Rewriter::new(RewriteOptions::new().placeholder('*')).unwrap();
    let query = SelectQuery::from_table("objects").filter("name", "1*");
    assert_eq!(where_sql(&engine, &registry(), query), "name LIKE '1%'");
}

#[test]
fn test_emoji_placeholder() {
    let engine = Rewriter::new(RewriteOptions::new().placeholder('🍌')).unwrap();
    let query = SelectQuery::from_table("objects").filter("name", "🍌a🍌");
    assert_eq!(where_sql(&engine, &registry(), query), "name LIKE '%a%'");
}

#[test]
fn test_raw_wildcard_still_triggers_with_placeholder() {
    let engine = Rewriter::new(RewriteOptions::new().placeholder('*')).unwrap();
    let query = SelectQuery::from_table("objects").filter("name", "%a%");
    assert_eq!(where_sql(&engine, &registry(), query), "name LIKE '%a%'");
}

#[test]
fn test_placeholder_in_in_list() {
    let engine = Rewriter::new(RewriteOptions::new().placeholder('*')).unwrap();
    let query = SelectQuery::from_table("objects")
        .filter_in("name", vec!["jessica".into(), "*o*".into()]);
    assert_eq!(
        where_sql(&engine, &registry(), query),
        "(name = 'jessica' OR name LIKE '%o%')"
    );
}

// UUID casting.

#[test]
fn test_uuid_column_cast_before_like() {
    let engine = Rewriter::new(RewriteOptions::new().placeholder('*')).unwrap();
    let query = SelectQuery::from_table("objects").filter("id", "*b1*");
    assert_eq!(
        where_sql(&engine, &registry(), query),
        "CAST(id AS varchar) LIKE '%b1%'"
    );
}

#[test]
fn test_uuid_cast_inside_or_chain() {
    let engine = Rewriter::with_defaults();
    let id = uuid::Uuid::new_v4();
    let query = SelectQuery::from_table("objects")
        .filter_in("id", vec![Value::Uuid(id), "%b1%".into()]);
    assert_eq!(
        where_sql(&engine, &registry(), query),
        format!("(id = '{}' OR CAST(id AS varchar) LIKE '%b1%')", id)
    );
}

#[test]
fn test_uuid_exact_value_untouched() {
    let engine = Rewriter::with_defaults();
    let id = uuid::Uuid::new_v4();
    let query = SelectQuery::from_table("objects").filter("id", id);
    assert_eq!(
        where_sql(&engine, &registry(), query),
        format!("id = '{}'", id)
    );
}

// Full query rendering through the engine.

#[test]
fn test_full_select_after_rewrite() {
    let engine = Rewriter::with_defaults();
    let mut query = SelectQuery::from_table("objects")
        .columns(&["name", "age"])
        .filter_in("name", vec!["jessica".into(), "%o%".into()])
        .filter("age", 25);
    engine.rewrite(&registry(), &mut query);
    assert_eq!(
        query.to_sql(),
        "SELECT name, age FROM objects WHERE (name = 'jessica' OR name LIKE '%o%') AND age = 25"
    );
}

#[test]
fn test_rewrite_is_idempotent_for_untouched_queries() {
    let engine = Rewriter::with_defaults();
    let mut query = SelectQuery::from_table("objects")
        .filter("name", "jessica")
        .filter_in("age", vec![Value::Int(53), Value::Int(20)]);
    let original = query.clone();

    engine.rewrite(&registry(), &mut query);
    assert_eq!(query, original);
}
