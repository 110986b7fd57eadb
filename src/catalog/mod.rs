//! Catalog collaborator.
//!
//! The engine never manages products or categories itself. It resolves them
//! through a [`Catalog`] supplied by the host storefront.

pub mod product;

pub use product::{Category, CategoryId, Product, ProductId};

/// Read-only view of the storefront catalog.
pub trait Catalog {
    /// Resolve a product or variation by id.
    fn product(&self, id: ProductId) -> Option<Product>;

    /// Resolve a category by id. `None` once the category is deleted.
    fn category(&self, id: CategoryId) -> Option<Category>;

    /// Ids of all products filed under any of `categories`.
    fn products_in_categories(&self, categories: &[CategoryId]) -> Vec<ProductId>;

    /// Categories a product belongs to, following variations to their parent.
    fn categories_of(&self, id: ProductId) -> Vec<CategoryId> {
        match self.product(id) {
            Some(product) => match product.parent_id {
                Some(parent) if product.category_ids.is_empty() => self
                    .product(parent)
                    .map(|p| p.category_ids)
                    .unwrap_or_default(),
                _ => product.category_ids,
            },
            None => Vec::new(),
        }
    }
}
