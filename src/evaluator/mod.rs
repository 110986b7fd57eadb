//! Dependency evaluation.
//!
//! Combines a product's [`DependencyConfig`](crate::config::DependencyConfig)
//! with the shopper's cart and purchase history into a [`Decision`].
//!
//! # Modules
//!
//! - [`outcome`] - Result types (`Decision`, `EvaluationResult`, `CheckOutcome`)
//! - [`tied`] - Resolution of tied ids into live entities
//! - [`coverage`] - Pure coverage computations
//! - [`engine`] - The [`Evaluator`]

pub mod coverage;
pub mod engine;
pub mod outcome;
pub mod tied;

pub use coverage::{cart_coverage, relationship_met, resolve_coverage};
pub use engine::Evaluator;
pub use outcome::{CheckOutcome, Decision, EntityRef, EvaluationResult, RequiredEntity, Target};
pub use tied::TiedSet;
