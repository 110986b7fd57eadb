//! Order history collaborator.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::catalog::ProductId;
use crate::error::Result;

/// Lifecycle status of a storefront order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Processing,
    OnHold,
    Completed,
    Cancelled,
    Refunded,
    Failed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::OnHold => "on-hold",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Refunded => "refunded",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// One purchased line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation_id: Option<ProductId>,
}

/// A stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_email: Option<String>,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Whether the order was placed by any of `terms`.
    pub fn placed_by(&self, terms: &CustomerTerms) -> bool {
        if let (Some(customer), Some(user)) = (self.customer_id, terms.user_id) {
            if customer == user {
                return true;
            }
        }
        self.billing_email
            .as_deref()
            .map(|e| e.trim().to_lowercase())
            .is_some_and(|e| terms.emails.contains(&e))
    }

    /// Product and variation ids on this order.
    pub fn product_ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.lines
            .iter()
            .flat_map(|line| std::iter::once(line.product_id).chain(line.variation_id))
    }
}

/// Every identity field an order may have been recorded under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerTerms {
    pub user_id: Option<u64>,
    /// Lower-cased, trimmed, de-duplicated.
    pub emails: Vec<String>,
}

impl CustomerTerms {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.emails.is_empty()
    }

    /// Stable hex fingerprint used as the history cache key.
    pub fn fingerprint(&self) -> String {
        let mut parts: Vec<String> = self.emails.iter().map(|e| format!("email:{e}")).collect();
        if let Some(user) = self.user_id {
            parts.push(format!("user:{user}"));
        }
        parts.sort();
        let hash = Sha256::digest(parts.join("|").as_bytes());
        hex::encode(&hash[..])
    }
}

/// Storage collaborator for order history.
pub trait OrderStore {
    /// Counter bumped whenever order data changes.
    fn orders_version(&self) -> u64;

    /// Account email of a registered customer.
    fn account_email(&self, user_id: u64) -> Result<Option<String>>;

    /// Product and variation ids from orders placed by `terms` whose status
    /// is one of `statuses`.
    fn purchased_product_ids(
        &self,
        terms: &CustomerTerms,
        statuses: &[OrderStatus],
    ) -> Result<Vec<ProductId>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(customer: Option<u64>, email: Option<&str>) -> Order {
        Order {
            id: 1,
            status: OrderStatus::Completed,
            customer_id: customer,
            billing_email: email.map(str::to_string),
            lines: vec![
                OrderLine {
                    product_id: ProductId(10),
                    variation_id: Some(ProductId(11)),
                },
                OrderLine {
                    product_id: ProductId(20),
                    variation_id: None,
                },
            ],
        }
    }

    #[test]
    fn placed_by_user_id() {
        let terms = CustomerTerms {
            user_id: Some(4),
            emails: Vec::new(),
        };
        assert!(order(Some(4), None).placed_by(&terms));
        assert!(!order(Some(5), None).placed_by(&terms));
    }

    #[test]
    fn placed_by_billing_email_ignores_case() {
        let terms = CustomerTerms {
            user_id: None,
            emails: vec!["ann@shop.test".to_string()],
        };
        assert!(order(None, Some(" Ann@Shop.Test")).placed_by(&terms));
        assert!(!order(None, Some("bob@shop.test")).placed_by(&terms));
    }

    #[test]
    fn product_ids_include_variations() {
        let ids: Vec<_> = order(None, None).product_ids().collect();
        assert_eq!(ids, vec![ProductId(10), ProductId(11), ProductId(20)]);
    }

    #[test]
    fn fingerprint_ignores_email_order() {
        let a = CustomerTerms {
            user_id: Some(1),
            emails: vec!["a@x.test".into(), "b@x.test".into()],
        };
        let b = CustomerTerms {
            user_id: Some(1),
            emails: vec!["b@x.test".into(), "a@x.test".into()],
        };
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
    }

    #[test]
    fn fingerprint_differs_per_customer() {
        let a = CustomerTerms {
            user_id: Some(1),
            emails: Vec::new(),
        };
        let b = CustomerTerms {
            user_id: Some(2),
            emails: Vec::new(),
        };
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn status_serializes_kebab_case() {
        let yaml = serde_yaml::to_string(&OrderStatus::OnHold).unwrap();
        assert_eq!(yaml.trim(), "on-hold");
        assert_eq!(OrderStatus::OnHold.to_string(), "on-hold");
    }
}
