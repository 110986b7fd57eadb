//! "Has this customer bought any of these?" lookups.

use std::collections::BTreeSet;
use tracing::{debug, warn};

use super::entry::HistoryEntry;
use super::orders::{CustomerTerms, OrderStatus, OrderStore};
use super::store::HistoryCache;
use crate::catalog::ProductId;
use crate::config::EngineSettings;
use crate::error::Result;
use crate::session::Identity;

/// Purchase history lookup backed by an [`OrderStore`] and a [`HistoryCache`].
pub struct PurchaseHistory<'a> {
    orders: &'a dyn OrderStore,
    cache: &'a dyn HistoryCache,
    ttl: chrono::Duration,
    paid_statuses: Vec<OrderStatus>,
}

impl<'a> PurchaseHistory<'a> {
    pub fn new(
        orders: &'a dyn OrderStore,
        cache: &'a dyn HistoryCache,
        settings: &EngineSettings,
    ) -> Self {
        Self {
            orders,
            cache,
            ttl: settings.history_ttl(),
            paid_statuses: settings.paid_statuses.clone(),
        }
    }

    /// Ids among `candidates` that the customer has bought in a paid order.
    ///
    /// Returns an empty set without touching the order store or the cache
    /// when the shopper is unidentified or there is nothing to look for.
    pub fn bought_any(
        &self,
        identity: &Identity,
        candidates: &BTreeSet<ProductId>,
    ) -> Result<BTreeSet<ProductId>> {
        if candidates.is_empty() || !identity.is_identified() {
            return Ok(BTreeSet::new());
        }

        let terms = self.customer_terms(identity)?;
        let purchased = self.purchased(&terms)?;

        Ok(purchased.intersection(candidates).copied().collect())
    }

    /// Expand an identity into every field an order may have been stored under.
    pub fn customer_terms(&self, identity: &Identity) -> Result<CustomerTerms> {
        let mut emails = Vec::new();

        if let Some(user) = identity.user_id {
            if let Some(account) = self.orders.account_email(user)? {
                let account = account.trim().to_lowercase();
                if !account.is_empty() {
                    emails.push(account);
                }
            }
        }

        if let Some(email) = identity.normalized_email() {
            if !emails.contains(&email) {
                emails.push(email);
            }
        }

        Ok(CustomerTerms {
            user_id: identity.user_id,
            emails,
        })
    }

    /// All ids the customer has bought, served from cache when current.
    fn purchased(&self, terms: &CustomerTerms) -> Result<BTreeSet<ProductId>> {
        let fingerprint = terms.fingerprint();
        let version = self.orders.orders_version();

        match self.cache.get(&fingerprint) {
            Ok(Some(entry)) if entry.is_current(version) => {
                debug!(
                    "Purchase history cache hit for {} (version {})",
                    &fingerprint[..12],
                    version
                );
                return Ok(entry.product_ids);
            }
            Ok(_) => {}
            Err(e) => warn!("Purchase history cache read failed: {}", e),
        }

        let ids: BTreeSet<ProductId> = self
            .orders
            .purchased_product_ids(terms, &self.paid_statuses)?
            .into_iter()
            .collect();

        debug!(
            "Purchase history computed for {}: {} products (version {})",
            &fingerprint[..12],
            ids.len(),
            version
        );

        let entry = HistoryEntry::new(fingerprint, version, ids.clone(), self.ttl);
        if let Err(e) = self.cache.put(entry) {
            warn!("Purchase history cache write failed: {}", e);
        }

        Ok(ids)
    }
}
