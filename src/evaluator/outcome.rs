//! Evaluation result types.

use serde::Serialize;

use crate::catalog::{CategoryId, Product, ProductId};
use crate::config::{DependencyKind, Relationship, SelectionMode};

/// Result of one satisfaction check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckOutcome {
    /// The check ran and the requirement is met.
    Satisfied,
    /// The check ran and the requirement is not met.
    Unsatisfied,
    /// The dependency kind does not call for this check, or another check
    /// already admitted the product.
    NotChecked,
}

impl CheckOutcome {
    pub fn from_bool(met: bool) -> Self {
        if met {
            Self::Satisfied
        } else {
            Self::Unsatisfied
        }
    }

    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied)
    }
}

/// A tied entity: a product or a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityRef {
    Product(ProductId),
    Category(CategoryId),
}

/// A tied entity with what is needed to display it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequiredEntity {
    pub entity: EntityRef,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
}

/// Full outcome of evaluating a product that resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    /// Product whose rules were applied (the parent, for variations).
    pub product_id: ProductId,
    pub product_title: String,
    pub admitted: bool,
    pub kind: DependencyKind,
    pub relationship: Relationship,
    pub selection_mode: SelectionMode,
    pub cart_check: CheckOutcome,
    pub ownership_check: CheckOutcome,
    /// Tied entities that still resolve, in configured order.
    pub required: Vec<RequiredEntity>,
    pub satisfied: Vec<RequiredEntity>,
    pub unsatisfied: Vec<RequiredEntity>,
    /// Shopper-facing explanation; only set when denied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// What the evaluator concluded about a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    /// The target did not resolve; callers must not block on this.
    Undecided,
    Evaluated(EvaluationResult),
}

impl Decision {
    /// Whether the caller should refuse the product.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Evaluated(result) if !result.admitted)
    }

    pub fn result(&self) -> Option<&EvaluationResult> {
        match self {
            Self::Undecided => None,
            Self::Evaluated(result) => Some(result),
        }
    }

    /// Denial notice, if any.
    pub fn notice(&self) -> Option<&str> {
        self.result().and_then(|r| r.notice.as_deref())
    }
}

/// Product to evaluate: an id to resolve or an already-resolved product.
#[derive(Debug, Clone)]
pub enum Target {
    Id(ProductId),
    Product(Product),
}

impl From<ProductId> for Target {
    fn from(id: ProductId) -> Self {
        Self::Id(id)
    }
}

impl From<u64> for Target {
    fn from(id: u64) -> Self {
        Self::Id(ProductId(id))
    }
}

impl From<Product> for Target {
    fn from(product: Product) -> Self {
        Self::Product(product)
    }
}
