//! Purchase history lookup.
//!
//! Answers "which of these products has this customer bought in a paid
//! order?" from an [`OrderStore`], caching the full per-customer result
//! keyed by customer fingerprint and orders version.
//!
//! # Modules
//!
//! - [`orders`] - Order records and the order store collaborator
//! - [`entry`] - Cached history entries
//! - [`store`] - Cache backends (memory, disk)
//! - [`lookup`] - The lookup itself

pub mod entry;
pub mod lookup;
pub mod orders;
pub mod store;

pub use entry::HistoryEntry;
pub use lookup::PurchaseHistory;
pub use orders::{CustomerTerms, Order, OrderLine, OrderStatus, OrderStore};
pub use store::{DiskCache, HistoryCache, MemoryCache};
