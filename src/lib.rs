//! Cartgate - Product dependency rules for storefront carts.
//!
//! Cartgate decides whether a shopper may add a product to the cart or
//! check out with it, based on whether they own, or are buying right now,
//! the products or categories the product is tied to.
//!
//! # Modules
//!
//! - [`catalog`] - Products, categories and the catalog collaborator
//! - [`config`] - Per-product dependency configuration and engine settings
//! - [`cart`] - Cart lines and the cart collaborator
//! - [`session`] - Shopper identity and evaluation context
//! - [`history`] - Cached purchase history lookups
//! - [`notice`] - Title merging and denial notices
//! - [`evaluator`] - The dependency evaluator
//! - [`gate`] - Add-to-cart and cart-integrity checkpoints
//! - [`memory`] - In-memory store loaded from YAML
//! - [`cli`] - Command-line interface and argument parsing
//! - [`ui`] - Terminal output
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use cartgate::cart::CartLine;
//! use cartgate::catalog::Product;
//! use cartgate::evaluator::Evaluator;
//! use cartgate::history::{MemoryCache, PurchaseHistory};
//! use cartgate::memory::InMemoryStore;
//! use cartgate::notice::NoticeFormatter;
//! use cartgate::session::{EvaluationContext, Identity};
//! use serde_json::json;
//!
//! let store = InMemoryStore::new()
//!     .with_product(Product::new(1, "Base Game"))
//!     .with_product(Product::new(2, "Expansion"))
//!     .with_meta(2, "_tied_products", json!([1]))
//!     .with_meta(2, "_dependency_type", json!(2));
//! let cache = MemoryCache::new();
//! let history = PurchaseHistory::new(&store, &cache, store.settings());
//! let evaluator = Evaluator::new(&store, &store, &store, history, NoticeFormatter::default());
//!
//! let empty = EvaluationContext::new(Identity::anonymous(), vec![]);
//! assert!(evaluator.evaluate(2u64, &empty).is_blocking());
//!
//! let with_base = EvaluationContext::new(Identity::anonymous(), vec![CartLine::product(1)]);
//! assert!(!evaluator.evaluate(2u64, &with_base).is_blocking());
//! ```

pub mod cart;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod gate;
pub mod history;
pub mod memory;
pub mod notice;
pub mod session;
pub mod ui;

pub use error::{CartgateError, Result};
