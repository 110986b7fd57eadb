//! Persisted product meta and its normalization.
//!
//! Dependency settings are stored as loosely-typed meta values on each
//! product. Values written by older admin screens come in several shapes
//! (comma-separated id strings, numeric strings for enum codes), and some
//! are simply garbage. Everything here degrades to a default rather than
//! failing.

use serde_json::Value;

use super::schema::{DependencyConfig, DependencyKind, Relationship, SelectionMode};
use crate::catalog::{CategoryId, ProductId};
use crate::error::Result;

/// Meta key holding the tied product ids.
pub const TIED_PRODUCTS_KEY: &str = "_tied_products";
/// Meta key holding the tied category ids.
pub const TIED_CATEGORIES_KEY: &str = "_tied_categories";
/// Meta key holding the dependency kind code (1, 2 or 3).
pub const DEPENDENCY_TYPE_KEY: &str = "_dependency_type";
/// Meta key holding the selection mode.
pub const SELECTION_TYPE_KEY: &str = "_dependency_selection_type";
/// Meta key holding the relationship operator.
pub const RELATIONSHIP_KEY: &str = "_dependency_relationship";
/// Meta key holding the custom notice.
pub const NOTICE_KEY: &str = "_dependency_notice";

/// Storage collaborator for per-product meta.
pub trait MetaStore {
    /// Read a raw meta value. `Ok(None)` when the key is not set.
    fn get_meta(&self, product: ProductId, key: &str) -> Result<Option<Value>>;
}

/// Read and normalize the dependency configuration of `product`.
pub fn load_dependency_config(
    store: &dyn MetaStore,
    product: ProductId,
) -> Result<DependencyConfig> {
    let tied_products = store.get_meta(product, TIED_PRODUCTS_KEY)?;
    let tied_categories = store.get_meta(product, TIED_CATEGORIES_KEY)?;
    let kind = store.get_meta(product, DEPENDENCY_TYPE_KEY)?;
    let selection = store.get_meta(product, SELECTION_TYPE_KEY)?;
    let relationship = store.get_meta(product, RELATIONSHIP_KEY)?;
    let notice = store.get_meta(product, NOTICE_KEY)?;

    Ok(DependencyConfig {
        selection_mode: parse_selection_mode(selection.as_ref()),
        tied_product_ids: parse_id_list(tied_products.as_ref())
            .into_iter()
            .map(ProductId)
            .collect(),
        tied_category_ids: parse_id_list(tied_categories.as_ref())
            .into_iter()
            .map(CategoryId)
            .collect(),
        kind: parse_kind(kind.as_ref()),
        relationship: parse_relationship(relationship.as_ref()),
        custom_notice: parse_notice(notice.as_ref()),
    })
}

/// Parse a list of positive ids.
///
/// Accepts a JSON array of numbers or numeric strings, a comma-separated
/// string, or a single number. Zero, negative and non-numeric entries are
/// dropped; duplicates keep their first position.
pub fn parse_id_list(value: Option<&Value>) -> Vec<u64> {
    let raw: Vec<Option<u64>> = match value {
        Some(Value::Array(items)) => items.iter().map(parse_id).collect(),
        Some(Value::String(s)) => s.split(',').map(parse_id_str).collect(),
        Some(Value::Number(_)) => vec![value.and_then(parse_id)],
        _ => Vec::new(),
    };

    let mut ids = Vec::new();
    for id in raw.into_iter().flatten() {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

fn parse_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().filter(|id| *id > 0),
        Value::String(s) => parse_id_str(s),
        _ => None,
    }
}

fn parse_id_str(s: &str) -> Option<u64> {
    s.trim().parse::<u64>().ok().filter(|id| *id > 0)
}

/// Parse the dependency kind code. Unknown values become [`DependencyKind::Either`].
pub fn parse_kind(value: Option<&Value>) -> DependencyKind {
    let code = match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    code.and_then(DependencyKind::from_code).unwrap_or_default()
}

/// Parse the selection mode. Unknown values become [`SelectionMode::ProductIds`].
pub fn parse_selection_mode(value: Option<&Value>) -> SelectionMode {
    match value.and_then(Value::as_str).map(|s| s.trim().to_lowercase()) {
        Some(s) if s == "category_ids" => SelectionMode::CategoryIds,
        _ => SelectionMode::ProductIds,
    }
}

/// Parse the relationship operator. Unknown values become [`Relationship::Any`].
///
/// Older data stored the operator as `or`/`and`.
pub fn parse_relationship(value: Option<&Value>) -> Relationship {
    match value.and_then(Value::as_str).map(|s| s.trim().to_lowercase()) {
        Some(s) if s == "all" || s == "and" => Relationship::All,
        _ => Relationship::Any,
    }
}

/// Parse the custom notice. Blank text counts as unset.
pub fn parse_notice(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
