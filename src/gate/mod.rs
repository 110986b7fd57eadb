//! Cart gate: the two storefront checkpoints that consult the evaluator.
//!
//! - [`CartGate::validate_add_to_cart`] runs before a product is added.
//! - [`CartGate::check_cart_items`] re-checks every line before checkout.
//!
//! Denials are reported through a [`NoticeSink`] supplied by the host.

use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

use crate::catalog::ProductId;
use crate::evaluator::{Decision, EvaluationResult, Evaluator};
use crate::session::{EvaluationContext, Identity};

/// Severity of a shopper-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Error,
    Notice,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Notice => write!(f, "notice"),
        }
    }
}

/// A message for the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    /// Product the notice is about.
    pub product_id: ProductId,
}

/// Receives notices raised while gating.
pub trait NoticeSink {
    fn add_notice(&mut self, notice: Notice);
}

/// Sink that keeps every notice in order.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    notices: Vec<Notice>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn into_notices(self) -> Vec<Notice> {
        self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

impl NoticeSink for CollectingSink {
    fn add_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

/// Outcome of a cart-integrity pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CartReport {
    /// Number of cart lines evaluated.
    pub checked: usize,
    /// Results of the lines that were denied, in cart order.
    pub denied: Vec<EvaluationResult>,
}

impl CartReport {
    /// Whether checkout may proceed.
    pub fn is_clean(&self) -> bool {
        self.denied.is_empty()
    }
}

/// Gates cart operations on product dependencies.
pub struct CartGate<'e, 'a> {
    evaluator: &'e Evaluator<'a>,
}

impl<'e, 'a> CartGate<'e, 'a> {
    pub fn new(evaluator: &'e Evaluator<'a>) -> Self {
        Self { evaluator }
    }

    /// Validate an add-to-cart request.
    ///
    /// `add` is the verdict of earlier validators; a request already rejected
    /// stays rejected and is not evaluated. Products without a decision are
    /// never blocked.
    pub fn validate_add_to_cart(
        &self,
        add: bool,
        product_id: ProductId,
        identity: &Identity,
        sink: &mut dyn NoticeSink,
    ) -> bool {
        if !add {
            return false;
        }

        let decision = self.evaluator.evaluate_current(product_id, identity);
        match denial(&decision) {
            Some(result) => {
                info!("Blocked adding product {} to the cart", product_id);
                push_notice(sink, product_id, result);
                false
            }
            None => true,
        }
    }

    /// Re-check every cart line.
    ///
    /// Each line is evaluated on its own against the full cart, and every
    /// denied line raises its own notice.
    pub fn check_cart_items(&self, identity: &Identity, sink: &mut dyn NoticeSink) -> CartReport {
        let ctx = EvaluationContext::capture(identity.clone(), self.evaluator.cart());
        let mut report = CartReport::default();

        for line in &ctx.cart_lines {
            let product_id = line.governing_product();
            report.checked += 1;

            let decision = self.evaluator.evaluate(product_id, &ctx);
            if let Some(result) = denial(&decision) {
                debug!("Cart line for product {} fails its dependencies", product_id);
                push_notice(sink, product_id, result);
                report.denied.push(result.clone());
            }
        }

        if !report.is_clean() {
            info!(
                "{} of {} cart lines fail their dependencies",
                report.denied.len(),
                report.checked
            );
        }
        report
    }
}

fn denial(decision: &Decision) -> Option<&EvaluationResult> {
    decision.result().filter(|r| !r.admitted)
}

fn push_notice(sink: &mut dyn NoticeSink, product_id: ProductId, result: &EvaluationResult) {
    if let Some(text) = &result.notice {
        sink.add_notice(Notice {
            level: NoticeLevel::Error,
            text: text.clone(),
            product_id,
        });
    }
}
