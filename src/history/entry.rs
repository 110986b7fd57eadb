//! Cached purchase history entries.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::ProductId;

/// Everything one customer has bought, as of a given orders version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Customer fingerprint, see [`super::CustomerTerms::fingerprint`].
    pub fingerprint: String,
    /// Orders version the entry was computed against.
    pub orders_version: u64,
    /// Product and variation ids from paid orders.
    pub product_ids: BTreeSet<ProductId>,
    /// When this entry was cached.
    pub cached_at: DateTime<Utc>,
    /// When the cached entry expires.
    pub expires_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create a new entry that lives for `ttl`.
    ///
    /// A `ttl` reaching past the representable range never expires.
    pub fn new(
        fingerprint: impl Into<String>,
        orders_version: u64,
        product_ids: BTreeSet<ProductId>,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();
        Self {
            fingerprint: fingerprint.into(),
            orders_version,
            product_ids,
            cached_at: now,
            expires_at: now
                .checked_add_signed(ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    /// Check if the entry has expired based on TTL.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Whether the entry can answer a lookup made at `orders_version`.
    pub fn is_current(&self, orders_version: u64) -> bool {
        self.orders_version == orders_version && !self.is_expired()
    }

    /// Get the age of this entry.
    pub fn age(&self) -> Duration {
        Utc::now().signed_duration_since(self.cached_at)
    }

    /// Remaining TTL in seconds.
    pub fn remaining_ttl(&self) -> i64 {
        self.expires_at
            .signed_duration_since(Utc::now())
            .num_seconds()
            .max(0)
    }
}
