//! In-memory storefront snapshot.
//!
//! [`InMemoryStore`] implements every collaborator trait the engine needs
//! (catalog, meta, orders, cart) over data loaded from a YAML snapshot. The
//! CLI evaluates against it; tests build one fluently.
//!
//! # Example
//!
//! ```
//! use cartgate::catalog::{Catalog, Product, ProductId};
//! use cartgate::memory::InMemoryStore;
//! use serde_json::json;
//!
//! let store = InMemoryStore::new()
//!     .with_product(Product::new(1, "Base Game"))
//!     .with_product(Product::new(2, "Expansion"))
//!     .with_meta(2, "_tied_products", json!([1]));
//!
//! assert_eq!(store.product(ProductId(2)).unwrap().title, "Expansion");
//! ```

pub mod loader;

pub use loader::{load_store, parse_store};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

use crate::cart::{CartLine, CartReader};
use crate::catalog::{Catalog, Category, CategoryId, Product, ProductId};
use crate::config::{EngineSettings, MetaStore};
use crate::error::Result;
use crate::history::{CustomerTerms, Order, OrderStatus, OrderStore};

/// A registered customer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub user_id: u64,
    pub email: String,
}

/// Serializable storefront snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSnapshot {
    pub settings: EngineSettings,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    /// Raw product meta, keyed by product id then meta key.
    pub meta: BTreeMap<u64, BTreeMap<String, Value>>,
    pub accounts: Vec<Account>,
    pub orders: Vec<Order>,
    pub orders_version: u64,
    pub cart: Vec<CartLine>,
}

/// Indexed, queryable form of a [`StoreSnapshot`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    settings: EngineSettings,
    products: HashMap<ProductId, Product>,
    categories: HashMap<CategoryId, Category>,
    meta: HashMap<ProductId, HashMap<String, Value>>,
    accounts: HashMap<u64, String>,
    orders: Vec<Order>,
    orders_version: u64,
    cart: Vec<CartLine>,
}

impl InMemoryStore {
    /// An empty store with default settings.
    pub fn new() -> Self {
        Self {
            orders_version: 1,
            ..Default::default()
        }
    }

    /// Build the indexes for a snapshot.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        let mut store = Self {
            settings: snapshot.settings,
            orders: snapshot.orders,
            orders_version: snapshot.orders_version,
            cart: snapshot.cart,
            ..Default::default()
        };
        for product in snapshot.products {
            store.products.insert(product.id, product);
        }
        for category in snapshot.categories {
            store.categories.insert(category.id, category);
        }
        for (product, values) in snapshot.meta {
            store
                .meta
                .insert(ProductId(product), values.into_iter().collect());
        }
        for account in snapshot.accounts {
            store.accounts.insert(account.user_id, account.email);
        }
        store
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn with_settings(mut self, settings: EngineSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.products.insert(product.id, product);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.insert(category.id, category);
        self
    }

    pub fn with_meta(mut self, product: u64, key: &str, value: Value) -> Self {
        self.set_meta(ProductId(product), key, value);
        self
    }

    pub fn with_account(mut self, user_id: u64, email: impl Into<String>) -> Self {
        self.accounts.insert(user_id, email.into());
        self
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.record_order(order);
        self
    }

    pub fn with_cart_line(mut self, line: CartLine) -> Self {
        self.cart.push(line);
        self
    }

    pub fn set_meta(&mut self, product: ProductId, key: &str, value: Value) {
        self.meta
            .entry(product)
            .or_default()
            .insert(key.to_string(), value);
    }

    /// Store an order and bump the orders version.
    pub fn record_order(&mut self, order: Order) {
        self.orders.push(order);
        self.orders_version += 1;
    }

    pub fn remove_product(&mut self, id: ProductId) -> Option<Product> {
        self.meta.remove(&id);
        self.products.remove(&id)
    }

    pub fn remove_category(&mut self, id: CategoryId) -> Option<Category> {
        self.categories.remove(&id)
    }

    /// Products ordered by id, for listing.
    pub fn products(&self) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.products.values().collect();
        products.sort_by_key(|p| p.id);
        products
    }
}

impl Catalog for InMemoryStore {
    fn product(&self, id: ProductId) -> Option<Product> {
        self.products.get(&id).cloned()
    }

    fn category(&self, id: CategoryId) -> Option<Category> {
        self.categories.get(&id).cloned()
    }

    fn products_in_categories(&self, categories: &[CategoryId]) -> Vec<ProductId> {
        let mut ids: Vec<ProductId> = self
            .products
            .values()
            .filter(|p| p.category_ids.iter().any(|c| categories.contains(c)))
            .map(|p| p.id)
            .collect();
        ids.sort();
        ids
    }
}

impl MetaStore for InMemoryStore {
    fn get_meta(&self, product: ProductId, key: &str) -> Result<Option<Value>> {
        Ok(self
            .meta
            .get(&product)
            .and_then(|values| values.get(key))
            .cloned())
    }
}

impl OrderStore for InMemoryStore {
    fn orders_version(&self) -> u64 {
        self.orders_version
    }

    fn account_email(&self, user_id: u64) -> Result<Option<String>> {
        Ok(self.accounts.get(&user_id).cloned())
    }

    fn purchased_product_ids(
        &self,
        terms: &CustomerTerms,
        statuses: &[OrderStatus],
    ) -> Result<Vec<ProductId>> {
        Ok(self
            .orders
            .iter()
            .filter(|order| statuses.contains(&order.status) && order.placed_by(terms))
            .flat_map(|order| order.product_ids().collect::<Vec<_>>())
            .collect())
    }
}

impl CartReader for InMemoryStore {
    /// Cart lines with categories resolved from the catalog where missing.
    fn lines(&self) -> Vec<CartLine> {
        self.cart
            .iter()
            .map(|line| {
                let mut line = line.clone();
                if line.category_ids.is_empty() {
                    line.category_ids = self.categories_of(line.product_id);
                }
                line
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::OrderLine;
    use serde_json::json;

    fn store() -> InMemoryStore {
        InMemoryStore::new()
            .with_category(Category::new(1, "Books"))
            .with_product(Product::new(10, "Novel").with_categories(&[1]))
            .with_product(Product::new(11, "Poster"))
            .with_product(Product::new(12, "Novel - Hardcover").variation_of(10))
    }

    #[test]
    fn catalog_lookups() {
        let store = store();
        assert!(store.product(ProductId(10)).is_some());
        assert!(store.product(ProductId(99)).is_none());
        assert_eq!(store.category(CategoryId(1)).unwrap().name, "Books");
        assert_eq!(
            store.products_in_categories(&[CategoryId(1)]),
            vec![ProductId(10)]
        );
    }

    #[test]
    fn variation_inherits_categories() {
        assert_eq!(store().categories_of(ProductId(12)), vec![CategoryId(1)]);
        assert!(store().categories_of(ProductId(11)).is_empty());
    }

    #[test]
    fn meta_round_trip() {
        let store = store().with_meta(11, "_tied_products", json!([10]));
        assert_eq!(
            store.get_meta(ProductId(11), "_tied_products").unwrap(),
            Some(json!([10]))
        );
        assert_eq!(store.get_meta(ProductId(11), "_dependency_type").unwrap(), None);
    }

    #[test]
    fn recording_orders_bumps_version() {
        let mut store = store();
        let before = store.orders_version();
        store.record_order(Order {
            id: 1,
            status: OrderStatus::Completed,
            customer_id: Some(3),
            billing_email: None,
            lines: vec![OrderLine {
                product_id: ProductId(10),
                variation_id: Some(ProductId(12)),
            }],
        });
        assert_eq!(store.orders_version(), before + 1);

        let terms = CustomerTerms {
            user_id: Some(3),
            emails: Vec::new(),
        };
        let ids = store
            .purchased_product_ids(&terms, &[OrderStatus::Completed])
            .unwrap();
        assert_eq!(ids, vec![ProductId(10), ProductId(12)]);
    }

    #[test]
    fn cart_lines_get_categories() {
        let store = store().with_cart_line(CartLine::variation(10, 12));
        let lines = store.lines();
        assert_eq!(lines[0].category_ids, vec![CategoryId(1)]);
    }

    #[test]
    fn removing_product_drops_its_meta() {
        let mut store = store().with_meta(11, "_tied_products", json!([10]));
        store.remove_product(ProductId(11));
        assert!(store.product(ProductId(11)).is_none());
        assert_eq!(store.get_meta(ProductId(11), "_tied_products").unwrap(), None);
    }
}
