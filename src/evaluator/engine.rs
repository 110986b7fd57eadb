//! The dependency evaluator.

use std::collections::BTreeSet;
use tracing::{debug, warn};

use super::coverage::{cart_coverage, relationship_met, resolve_coverage};
use super::outcome::{CheckOutcome, Decision, EntityRef, EvaluationResult, RequiredEntity, Target};
use super::tied::TiedSet;
use crate::cart::CartReader;
use crate::catalog::{Catalog, CategoryId, Product, ProductId};
use crate::config::{
    load_dependency_config, DependencyConfig, DependencyKind, MetaStore, Relationship,
};
use crate::history::PurchaseHistory;
use crate::notice::{NoticeFormatter, NoticeRequest};
use crate::session::{EvaluationContext, Identity};

/// Decides whether a shopper may have a product, given its dependencies.
///
/// Read-only: evaluation never changes configuration, cart or orders. The
/// only side effect is populating the purchase history cache.
pub struct Evaluator<'a> {
    catalog: &'a dyn Catalog,
    meta: &'a dyn MetaStore,
    cart: &'a dyn CartReader,
    history: PurchaseHistory<'a>,
    formatter: NoticeFormatter,
}

/// Outcome of the ownership check.
struct OwnershipCheck {
    outcome: CheckOutcome,
    covered: BTreeSet<EntityRef>,
}

impl<'a> Evaluator<'a> {
    pub fn new(
        catalog: &'a dyn Catalog,
        meta: &'a dyn MetaStore,
        cart: &'a dyn CartReader,
        history: PurchaseHistory<'a>,
        formatter: NoticeFormatter,
    ) -> Self {
        Self {
            catalog,
            meta,
            cart,
            history,
            formatter,
        }
    }

    /// The cart this evaluator reads from.
    pub fn cart(&self) -> &'a dyn CartReader {
        self.cart
    }

    /// Evaluate `target` against the current cart.
    pub fn evaluate_current(&self, target: impl Into<Target>, identity: &Identity) -> Decision {
        let ctx = EvaluationContext::capture(identity.clone(), self.cart);
        self.evaluate(target, &ctx)
    }

    /// Evaluate `target` for the shopper and cart in `ctx`.
    pub fn evaluate(&self, target: impl Into<Target>, ctx: &EvaluationContext) -> Decision {
        let Some(product) = self.rules_owner(target.into()) else {
            return Decision::Undecided;
        };

        let config = match load_dependency_config(self.meta, product.id) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring dependencies of product {}: {}", product.id, e);
                DependencyConfig::default()
            }
        };

        let tied = TiedSet::resolve(self.catalog, &config);
        let mut result = EvaluationResult {
            product_id: product.id,
            product_title: product.title.clone(),
            admitted: true,
            kind: config.kind,
            relationship: config.relationship,
            selection_mode: config.selection_mode,
            cart_check: CheckOutcome::NotChecked,
            ownership_check: CheckOutcome::NotChecked,
            required: tied.entities(),
            satisfied: Vec::new(),
            unsatisfied: Vec::new(),
            notice: None,
        };

        if tied.is_empty() {
            if config.has_tied_ids() {
                debug!(
                    "No tied {} of product {} resolve, not restricting",
                    config.selection_mode, product.id
                );
            }
            return Decision::Evaluated(result);
        }

        let required = tied.refs();
        let categories_of = |id: ProductId| self.catalog.categories_of(id);

        let mut cart_covered = BTreeSet::new();
        if config.kind.checks_cart() {
            cart_covered =
                cart_coverage(&ctx.cart_lines, &tied, config.relationship, categories_of);
            result.cart_check = CheckOutcome::from_bool(relationship_met(
                &required,
                &cart_covered,
                config.relationship,
            ));
        }

        let cart_admits = config.kind == DependencyKind::Either && result.cart_check.is_satisfied();
        let mut owned_covered = BTreeSet::new();
        if config.kind.checks_ownership() && !cart_admits {
            let check = self.check_ownership(&tied, &required, &config, ctx, &cart_covered);
            result.ownership_check = check.outcome;
            owned_covered = check.covered;
        }

        result.admitted = match config.kind {
            DependencyKind::Purchase => result.cart_check.is_satisfied(),
            DependencyKind::Ownership => result.ownership_check.is_satisfied(),
            DependencyKind::Either => {
                result.cart_check.is_satisfied() || result.ownership_check.is_satisfied()
            }
        };

        let covered: BTreeSet<EntityRef> = cart_covered.union(&owned_covered).copied().collect();
        let (satisfied, unsatisfied): (Vec<RequiredEntity>, Vec<RequiredEntity>) = result
            .required
            .iter()
            .cloned()
            .partition(|e| covered.contains(&e.entity));
        result.satisfied = satisfied;
        result.unsatisfied = unsatisfied;

        debug!(
            "Product {} ({} / {} / {}): cart {:?}, ownership {:?}, admitted {}",
            product.id,
            config.kind,
            config.relationship,
            config.selection_mode,
            result.cart_check,
            result.ownership_check,
            result.admitted
        );

        if !result.admitted {
            result.notice = Some(self.build_notice(&result, &config, &ctx.identity));
        }

        Decision::Evaluated(result)
    }

    /// Resolve the product whose rules apply: variations defer to their parent.
    fn rules_owner(&self, target: Target) -> Option<Product> {
        let product = match target {
            Target::Product(product) => product,
            Target::Id(id) => match self.catalog.product(id) {
                Some(product) => product,
                None => {
                    debug!("Product {} does not resolve, no decision", id);
                    return None;
                }
            },
        };

        match product.parent_id {
            Some(parent) => {
                let owner = self.catalog.product(parent);
                if owner.is_none() {
                    debug!(
                        "Parent {} of variation {} does not resolve, no decision",
                        parent, product.id
                    );
                }
                owner
            }
            None => Some(product),
        }
    }

    /// Ownership check, with cart coverage counted toward it for `Either`.
    fn check_ownership(
        &self,
        tied: &TiedSet,
        required: &[EntityRef],
        config: &DependencyConfig,
        ctx: &EvaluationContext,
        cart_covered: &BTreeSet<EntityRef>,
    ) -> OwnershipCheck {
        if !ctx.identity.is_identified() {
            return OwnershipCheck {
                outcome: CheckOutcome::Unsatisfied,
                covered: BTreeSet::new(),
            };
        }

        let candidates: BTreeSet<ProductId> = match tied {
            TiedSet::Products(_) => tied.product_ids().into_iter().collect(),
            TiedSet::Categories(_) => self
                .catalog
                .products_in_categories(&tied.category_ids())
                .into_iter()
                .collect(),
        };

        let owned = match self.history.bought_any(&ctx.identity, &candidates) {
            Ok(owned) => owned,
            Err(e) => {
                warn!("Purchase history unavailable, treating as nothing owned: {}", e);
                BTreeSet::new()
            }
        };

        let covered: BTreeSet<EntityRef> = match tied {
            TiedSet::Products(_) => owned.iter().map(|id| EntityRef::Product(*id)).collect(),
            TiedSet::Categories(_) => {
                let tied_categories: BTreeSet<CategoryId> =
                    tied.category_ids().into_iter().collect();
                resolve_coverage(owned.iter().copied(), &tied_categories, |id| {
                    self.catalog.categories_of(id)
                })
                .into_iter()
                .map(EntityRef::Category)
                .collect()
            }
        };

        let met = match config.relationship {
            Relationship::Any => !owned.is_empty(),
            Relationship::All => {
                let mut coverage = covered.clone();
                if config.kind == DependencyKind::Either {
                    coverage.extend(cart_covered.iter().copied());
                }
                relationship_met(required, &coverage, Relationship::All)
            }
        };

        OwnershipCheck {
            outcome: CheckOutcome::from_bool(met),
            covered,
        }
    }

    fn build_notice(
        &self,
        result: &EvaluationResult,
        config: &DependencyConfig,
        identity: &Identity,
    ) -> String {
        let merged = self
            .formatter
            .merge_titles(&result.unsatisfied, config.relationship);
        let request = NoticeRequest {
            product_title: &result.product_title,
            kind: config.kind,
            relationship: config.relationship,
            selection_mode: config.selection_mode,
            identified: identity.is_identified(),
            has_multiple: result.unsatisfied.len() > 1,
            merged_titles: &merged,
        };
        self.formatter
            .notice(&request, config.custom_notice.as_deref())
    }
}
