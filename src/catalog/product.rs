//! Product and category records as resolved from the catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a product or product variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

/// Identifier of a product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product as seen by the dependency engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    /// Set for variations; points at the variable product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ProductId>,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,

    /// Categories the product is filed under. Empty for variations, which
    /// inherit their parent's categories.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category_ids: Vec<CategoryId>,

    #[serde(default = "default_purchasable")]
    pub purchasable: bool,
}

fn default_purchasable() -> bool {
    true
}

impl Product {
    /// Create a purchasable simple product.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: ProductId(id),
            parent_id: None,
            title: title.into(),
            sku: None,
            permalink: None,
            category_ids: Vec::new(),
            purchasable: true,
        }
    }

    /// Turn this product into a variation of `parent`.
    pub fn variation_of(mut self, parent: u64) -> Self {
        self.parent_id = Some(ProductId(parent));
        self
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    pub fn with_permalink(mut self, url: impl Into<String>) -> Self {
        self.permalink = Some(url.into());
        self
    }

    pub fn with_categories(mut self, ids: &[u64]) -> Self {
        self.category_ids = ids.iter().copied().map(CategoryId).collect();
        self
    }

    pub fn unpurchasable(mut self) -> Self {
        self.purchasable = false;
        self
    }

    /// Whether this product is a variation of another product.
    pub fn is_variation(&self) -> bool {
        self.parent_id.is_some()
    }

    /// The id whose dependency rules apply to this product.
    ///
    /// Variations inherit the rules of their parent.
    pub fn rules_owner(&self) -> ProductId {
        self.parent_id.unwrap_or(self.id)
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
}

impl Category {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: CategoryId(id),
            name: name.into(),
            permalink: None,
        }
    }

    pub fn with_permalink(mut self, url: impl Into<String>) -> Self {
        self.permalink = Some(url.into());
        self
    }
}
