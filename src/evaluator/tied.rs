//! Resolution of configured tied ids into live catalog entities.

use tracing::debug;

use super::outcome::{EntityRef, RequiredEntity};
use crate::catalog::{Catalog, Category, CategoryId, Product, ProductId};
use crate::config::{DependencyConfig, SelectionMode};

/// Tied entities that still exist, in configured order.
#[derive(Debug, Clone)]
pub enum TiedSet {
    Products(Vec<Product>),
    Categories(Vec<Category>),
}

impl TiedSet {
    /// Resolve the ids named by the config's selection mode.
    ///
    /// Products must exist and be purchasable; categories must exist.
    /// Anything else is dropped silently.
    pub fn resolve(catalog: &dyn Catalog, config: &DependencyConfig) -> Self {
        match config.selection_mode {
            SelectionMode::ProductIds => Self::Products(
                config
                    .tied_product_ids
                    .iter()
                    .filter_map(|id| match catalog.product(*id) {
                        Some(p) if p.purchasable => Some(p),
                        Some(_) => {
                            debug!("Tied product {} is not purchasable, ignoring", id);
                            None
                        }
                        None => {
                            debug!("Tied product {} no longer exists, ignoring", id);
                            None
                        }
                    })
                    .collect(),
            ),
            SelectionMode::CategoryIds => Self::Categories(
                config
                    .tied_category_ids
                    .iter()
                    .filter_map(|id| {
                        let category = catalog.category(*id);
                        if category.is_none() {
                            debug!("Tied category {} no longer exists, ignoring", id);
                        }
                        category
                    })
                    .collect(),
            ),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Products(p) => p.len(),
            Self::Categories(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entity references in configured order.
    pub fn refs(&self) -> Vec<EntityRef> {
        match self {
            Self::Products(p) => p.iter().map(|p| EntityRef::Product(p.id)).collect(),
            Self::Categories(c) => c.iter().map(|c| EntityRef::Category(c.id)).collect(),
        }
    }

    /// Displayable entities in configured order.
    pub fn entities(&self) -> Vec<RequiredEntity> {
        match self {
            Self::Products(products) => products
                .iter()
                .map(|p| RequiredEntity {
                    entity: EntityRef::Product(p.id),
                    title: p.title.clone(),
                    permalink: p.permalink.clone(),
                })
                .collect(),
            Self::Categories(categories) => categories
                .iter()
                .map(|c| RequiredEntity {
                    entity: EntityRef::Category(c.id),
                    title: c.name.clone(),
                    permalink: c.permalink.clone(),
                })
                .collect(),
        }
    }

    pub fn product_ids(&self) -> Vec<ProductId> {
        match self {
            Self::Products(p) => p.iter().map(|p| p.id).collect(),
            Self::Categories(_) => Vec::new(),
        }
    }

    pub fn category_ids(&self) -> Vec<CategoryId> {
        match self {
            Self::Products(_) => Vec::new(),
            Self::Categories(c) => c.iter().map(|c| c.id).collect(),
        }
    }
}
