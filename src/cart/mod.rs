//! Cart snapshot collaborator.
//!
//! The engine reads the cart; it never adds, removes or changes lines.

use serde::{Deserialize, Serialize};

use crate::catalog::{CategoryId, ProductId};

/// One line item of the shopper's current cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation_id: Option<ProductId>,

    /// Resolved categories of the line's product.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category_ids: Vec<CategoryId>,
}

impl CartLine {
    /// A line for a simple product.
    pub fn product(id: u64) -> Self {
        Self {
            product_id: ProductId(id),
            variation_id: None,
            category_ids: Vec::new(),
        }
    }

    /// A line for a variation of a variable product.
    pub fn variation(product: u64, variation: u64) -> Self {
        Self {
            product_id: ProductId(product),
            variation_id: Some(ProductId(variation)),
            category_ids: Vec::new(),
        }
    }

    pub fn with_categories(mut self, ids: &[u64]) -> Self {
        self.category_ids = ids.iter().copied().map(CategoryId).collect();
        self
    }

    /// Whether this line is for `id`, either as product or as variation.
    pub fn matches_product(&self, id: ProductId) -> bool {
        self.product_id == id || self.variation_id == Some(id)
    }

    /// The product whose dependency rules govern this line.
    pub fn governing_product(&self) -> ProductId {
        self.variation_id.unwrap_or(self.product_id)
    }
}

/// Reads the current cart.
pub trait CartReader {
    /// Current line items in cart order.
    fn lines(&self) -> Vec<CartLine>;
}

impl CartReader for Vec<CartLine> {
    fn lines(&self) -> Vec<CartLine> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_line_matches_its_product() {
        let line = CartLine::product(5);
        assert!(line.matches_product(ProductId(5)));
        assert!(!line.matches_product(ProductId(6)));
        assert_eq!(line.governing_product(), ProductId(5));
    }

    #[test]
    fn variation_line_matches_parent_and_variation() {
        let line = CartLine::variation(10, 12);
        assert!(line.matches_product(ProductId(10)));
        assert!(line.matches_product(ProductId(12)));
        assert!(!line.matches_product(ProductId(11)));
        assert_eq!(line.governing_product(), ProductId(12));
    }

    #[test]
    fn vec_is_a_cart_reader() {
        let cart = vec![CartLine::product(1), CartLine::product(2).with_categories(&[7])];
        let lines = cart.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].category_ids, vec![CategoryId(7)]);
    }
}
