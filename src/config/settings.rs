//! Engine-wide settings.

use serde::{Deserialize, Serialize};

use crate::error::{CartgateError, Result};
use crate::history::OrderStatus;

/// How tied titles are rendered inside notices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleStyle {
    /// `"Title"`
    #[default]
    Quoted,
    /// `<a href="permalink">Title</a>`, falling back to quoted without a permalink.
    Linked,
}

/// Settings shared by the evaluator, history lookup and notice formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Lifetime of a cached purchase history entry.
    #[serde(
        default = "default_history_ttl_days",
        skip_serializing_if = "is_default_history_ttl_days"
    )]
    pub history_ttl_days: u32,

    /// Title rendering in notices.
    pub title_style: TitleStyle,

    /// Right-to-left display locale; merged title lists are reversed.
    #[serde(skip_serializing_if = "is_false")]
    pub rtl: bool,

    /// Target of the "logged in" link in notices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_url: Option<String>,

    /// Order statuses that count as a completed purchase.
    #[serde(default = "default_paid_statuses")]
    pub paid_statuses: Vec<OrderStatus>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            history_ttl_days: default_history_ttl_days(),
            title_style: TitleStyle::default(),
            rtl: false,
            login_url: None,
            paid_statuses: default_paid_statuses(),
        }
    }
}

/// Longest accepted history cache lifetime, about a century.
pub const MAX_HISTORY_TTL_DAYS: u32 = 36_500;

impl EngineSettings {
    /// Reject settings the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.history_ttl_days == 0 {
            return Err(CartgateError::InvalidSettings {
                message: "history_ttl_days must be at least 1".to_string(),
            });
        }
        if self.history_ttl_days > MAX_HISTORY_TTL_DAYS {
            return Err(CartgateError::InvalidSettings {
                message: format!(
                    "history_ttl_days must be at most {}",
                    MAX_HISTORY_TTL_DAYS
                ),
            });
        }
        if self.paid_statuses.is_empty() {
            return Err(CartgateError::InvalidSettings {
                message: "paid_statuses must name at least one order status".to_string(),
            });
        }
        Ok(())
    }

    /// History cache lifetime as a duration.
    pub fn history_ttl(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.history_ttl_days))
    }
}

fn default_history_ttl_days() -> u32 {
    30
}

fn is_default_history_ttl_days(v: &u32) -> bool {
    *v == default_history_ttl_days()
}

fn default_paid_statuses() -> Vec<OrderStatus> {
    vec![OrderStatus::Processing, OrderStatus::Completed]
}

fn is_false(v: &bool) -> bool {
    !v
}
