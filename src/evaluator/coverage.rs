//! Coverage: which tied entities a set of facts satisfies.
//!
//! Pure functions, no I/O; the evaluator feeds them cart lines, owned ids
//! and a category lookup.

use std::collections::BTreeSet;

use super::outcome::EntityRef;
use super::tied::TiedSet;
use crate::cart::CartLine;
use crate::catalog::{CategoryId, ProductId};
use crate::config::Relationship;

/// Map product ids to their categories and keep the tied ones.
pub fn resolve_coverage<I, F>(
    ids: I,
    tied_categories: &BTreeSet<CategoryId>,
    categories_of: F,
) -> BTreeSet<CategoryId>
where
    I: IntoIterator<Item = ProductId>,
    F: Fn(ProductId) -> Vec<CategoryId>,
{
    ids.into_iter()
        .flat_map(categories_of)
        .filter(|c| tied_categories.contains(c))
        .collect()
}

/// Whether `coverage` meets the relationship over `required`.
pub fn relationship_met(
    required: &[EntityRef],
    coverage: &BTreeSet<EntityRef>,
    relationship: Relationship,
) -> bool {
    match relationship {
        Relationship::Any => required.iter().any(|e| coverage.contains(e)),
        Relationship::All => required.iter().all(|e| coverage.contains(e)),
    }
}

/// Tied entities a single cart line satisfies.
fn line_matches<F>(line: &CartLine, tied: &TiedSet, categories_of: &F) -> Vec<EntityRef>
where
    F: Fn(ProductId) -> Vec<CategoryId>,
{
    match tied {
        TiedSet::Products(products) => products
            .iter()
            .filter(|p| line.matches_product(p.id))
            .map(|p| EntityRef::Product(p.id))
            .collect(),
        TiedSet::Categories(categories) => {
            let resolved;
            let line_categories = if line.category_ids.is_empty() {
                resolved = categories_of(line.product_id);
                &resolved
            } else {
                &line.category_ids
            };
            categories
                .iter()
                .filter(|c| line_categories.contains(&c.id))
                .map(|c| EntityRef::Category(c.id))
                .collect()
        }
    }
}

/// Entities satisfied by the cart.
///
/// Under [`Relationship::Any`] scanning stops at the first satisfying line;
/// under [`Relationship::All`] every line is scanned and matches accumulate.
/// `categories_of` is only consulted for lines that carry no categories.
pub fn cart_coverage<F>(
    lines: &[CartLine],
    tied: &TiedSet,
    relationship: Relationship,
    categories_of: F,
) -> BTreeSet<EntityRef>
where
    F: Fn(ProductId) -> Vec<CategoryId>,
{
    let mut matched = BTreeSet::new();
    for line in lines {
        let hits = line_matches(line, tied, &categories_of);
        let hit = !hits.is_empty();
        matched.extend(hits);
        if hit && relationship == Relationship::Any {
            break;
        }
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Product};

    fn cats(raw: &[u64]) -> BTreeSet<CategoryId> {
        raw.iter().copied().map(CategoryId).collect()
    }

    fn no_categories(_: ProductId) -> Vec<CategoryId> {
        Vec::new()
    }

    fn product_set(ids: &[u64]) -> TiedSet {
        TiedSet::Products(ids.iter().map(|id| Product::new(*id, format!("P{id}"))).collect())
    }

    fn category_set(ids: &[u64]) -> TiedSet {
        TiedSet::Categories(ids.iter().map(|id| Category::new(*id, format!("C{id}"))).collect())
    }

    #[test]
    fn coverage_maps_products_to_tied_categories() {
        let lookup = |id: ProductId| match id.0 {
            1 => vec![CategoryId(10), CategoryId(99)],
            2 => vec![CategoryId(20)],
            _ => Vec::new(),
        };
        let covered = resolve_coverage(
            [ProductId(1), ProductId(2), ProductId(3)],
            &cats(&[10, 20, 30]),
            lookup,
        );
        assert_eq!(covered, cats(&[10, 20]));
    }

    #[test]
    fn coverage_of_nothing_is_empty() {
        let covered = resolve_coverage(Vec::<ProductId>::new(), &cats(&[10]), no_categories);
        assert!(covered.is_empty());
    }

    #[test]
    fn relationship_any_and_all() {
        let required = [EntityRef::Product(ProductId(1)), EntityRef::Product(ProductId(2))];
        let partial: BTreeSet<_> = [EntityRef::Product(ProductId(1))].into_iter().collect();
        let full: BTreeSet<_> = required.iter().copied().collect();

        assert!(relationship_met(&required, &partial, Relationship::Any));
        assert!(!relationship_met(&required, &partial, Relationship::All));
        assert!(relationship_met(&required, &full, Relationship::All));
        assert!(!relationship_met(&required, &BTreeSet::new(), Relationship::Any));
    }

    #[test]
    fn cart_matches_product_or_variation() {
        let lines = [CartLine::variation(50, 51)];
        let matched = cart_coverage(
            &lines,
            &product_set(&[51, 7]),
            Relationship::All,
            no_categories,
        );
        assert_eq!(
            matched.into_iter().collect::<Vec<_>>(),
            vec![EntityRef::Product(ProductId(51))]
        );
    }

    #[test]
    fn cart_any_stops_at_first_match() {
        let lines = [CartLine::product(1), CartLine::product(2)];
        let matched = cart_coverage(
            &lines,
            &product_set(&[1, 2]),
            Relationship::Any,
            no_categories,
        );
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn cart_all_accumulates_across_lines() {
        let lines = [
            CartLine::product(1),
            CartLine::product(9),
            CartLine::product(2),
        ];
        let matched = cart_coverage(
            &lines,
            &product_set(&[1, 2]),
            Relationship::All,
            no_categories,
        );
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn cart_category_match_uses_line_categories() {
        let lines = [CartLine::product(1).with_categories(&[10, 20])];
        let matched = cart_coverage(
            &lines,
            &category_set(&[20, 30]),
            Relationship::All,
            no_categories,
        );
        assert_eq!(
            matched.into_iter().collect::<Vec<_>>(),
            vec![EntityRef::Category(CategoryId(20))]
        );
    }

    #[test]
    fn cart_category_falls_back_to_lookup() {
        let lines = [CartLine::product(1)];
        let lookup = |_: ProductId| vec![CategoryId(30)];
        let matched = cart_coverage(&lines, &category_set(&[30]), Relationship::Any, lookup);
        assert_eq!(matched.len(), 1);
    }
}
