//! Dependency configuration schema.
//!
//! One [`DependencyConfig`] exists per product. It is written by the
//! storefront's admin screens and only ever read here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{CategoryId, ProductId};

/// Which identifier space the tied set lives in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    #[default]
    ProductIds,
    CategoryIds,
}

/// What the shopper must have done with a tied entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    /// Bought it in a past, paid order.
    Ownership,
    /// Has it in the current cart.
    Purchase,
    /// Either of the above.
    #[default]
    Either,
}

/// Whether one tied entity suffices or all of them are required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    #[default]
    Any,
    All,
}

impl SelectionMode {
    /// Stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProductIds => "product_ids",
            Self::CategoryIds => "category_ids",
        }
    }
}

impl DependencyKind {
    /// Integer code used in persisted meta.
    pub fn code(&self) -> u64 {
        match self {
            Self::Ownership => 1,
            Self::Purchase => 2,
            Self::Either => 3,
        }
    }

    /// Map a persisted code back to a kind.
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Self::Ownership),
            2 => Some(Self::Purchase),
            3 => Some(Self::Either),
            _ => None,
        }
    }

    /// Whether the cart contents are consulted.
    pub fn checks_cart(&self) -> bool {
        matches!(self, Self::Purchase | Self::Either)
    }

    /// Whether purchase history is consulted.
    pub fn checks_ownership(&self) -> bool {
        matches!(self, Self::Ownership | Self::Either)
    }
}

impl Relationship {
    /// Word placed before the last item of a merged title list.
    pub fn conjunction(&self) -> &'static str {
        match self {
            Self::Any => "or",
            Self::All => "and",
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ownership => "ownership",
            Self::Purchase => "purchase",
            Self::Either => "either",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Any => "any",
            Self::All => "all",
        };
        f.write_str(name)
    }
}

/// Normalized dependency configuration of a single product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyConfig {
    pub selection_mode: SelectionMode,

    /// Tied products, in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tied_product_ids: Vec<ProductId>,

    /// Tied categories, in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tied_category_ids: Vec<CategoryId>,

    pub kind: DependencyKind,

    pub relationship: Relationship,

    /// Replaces all generated messaging when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_notice: Option<String>,
}

impl DependencyConfig {
    /// Whether any tied identifiers are configured for the active mode,
    /// before checking that they still resolve.
    pub fn has_tied_ids(&self) -> bool {
        match self.selection_mode {
            SelectionMode::ProductIds => !self.tied_product_ids.is_empty(),
            SelectionMode::CategoryIds => !self.tied_category_ids.is_empty(),
        }
    }
}
