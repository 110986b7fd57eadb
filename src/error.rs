//! Error types for cartgate operations.
//!
//! This module defines [`CartgateError`], the error type returned by the
//! collaborator traits and the CLI plumbing, and a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - Collaborators (meta store, order store, cache) report failures as `CartgateError`
//! - The evaluator never surfaces these to shoppers; it logs and degrades
//! - Use `anyhow::Error` (via `CartgateError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::ProductId;

/// Core error type for cartgate operations.
#[derive(Debug, Error)]
pub enum CartgateError {
    /// Store snapshot file not found at the given location.
    #[error("Store file not found: {path}")]
    StoreNotFound { path: PathBuf },

    /// Failed to parse a store snapshot file.
    #[error("Failed to parse store at {path}: {message}")]
    StoreParseError { path: PathBuf, message: String },

    /// Engine settings failed validation.
    #[error("Invalid settings: {message}")]
    InvalidSettings { message: String },

    /// Reading dependency meta for a product failed.
    #[error("Failed to read dependency meta for product {product}: {message}")]
    MetaReadFailed { product: ProductId, message: String },

    /// The order history query failed.
    #[error("Order history query failed: {message}")]
    OrderQueryFailed { message: String },

    /// A purchase history cache backend failed.
    #[error("History cache failed: {message}")]
    CacheFailed { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for cartgate operations.
pub type Result<T> = std::result::Result<T, CartgateError>;
