//! Shopper identity and the per-call evaluation context.

use serde::{Deserialize, Serialize};

use crate::cart::{CartLine, CartReader};

/// Who the shopper is, as established by the storefront.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Identity {
    /// A shopper who is not logged in and supplied no email.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A logged-in customer.
    pub fn user(user_id: u64) -> Self {
        Self {
            user_id: Some(user_id),
            email: None,
        }
    }

    /// A guest known only by email.
    pub fn guest(email: impl Into<String>) -> Self {
        Self {
            user_id: None,
            email: Some(email.into()),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Email with surrounding whitespace removed, if any is left.
    pub fn normalized_email(&self) -> Option<String> {
        self.email
            .as_deref()
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
    }

    /// Whether ownership can be checked for this shopper at all.
    pub fn is_identified(&self) -> bool {
        self.user_id.is_some() || self.normalized_email().is_some()
    }
}

/// Everything an evaluation looks at besides configuration.
///
/// Built fresh for every call; never cached.
#[derive(Debug, Clone, Default)]
pub struct EvaluationContext {
    pub identity: Identity,
    pub cart_lines: Vec<CartLine>,
}

impl EvaluationContext {
    pub fn new(identity: Identity, cart_lines: Vec<CartLine>) -> Self {
        Self {
            identity,
            cart_lines,
        }
    }

    /// Snapshot the cart for this call.
    pub fn capture(identity: Identity, cart: &dyn CartReader) -> Self {
        Self::new(identity, cart.lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_is_not_identified() {
        assert!(!Identity::anonymous().is_identified());
    }

    #[test]
    fn blank_email_does_not_identify() {
        assert!(!Identity::guest("   ").is_identified());
    }

    #[test]
    fn user_or_email_identifies() {
        assert!(Identity::user(3).is_identified());
        assert!(Identity::guest("a@b.test").is_identified());
    }

    #[test]
    fn email_is_normalized() {
        let identity = Identity::guest("  Jo@Shop.Test ");
        assert_eq!(identity.normalized_email().as_deref(), Some("jo@shop.test"));
    }

    #[test]
    fn capture_reads_cart() {
        let cart = vec![CartLine::product(4)];
        let ctx = EvaluationContext::capture(Identity::user(1), &cart);
        assert_eq!(ctx.cart_lines, cart);
        assert_eq!(ctx.identity.user_id, Some(1));
    }
}
