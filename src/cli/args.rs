//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::session::Identity;

use super::commands::cache::CacheArgs;

/// Cartgate - Product dependency rules for storefront carts.
#[derive(Debug, Parser)]
#[command(name = "cartgate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store file
    #[arg(short, long, global = true, default_value = "store.yml")]
    pub store: PathBuf,

    /// Directory for the purchase history cache (in-memory when unset)
    #[arg(long, global = true, env = "CARTGATE_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check whether a shopper may add a product to the cart
    Check(CheckArgs),

    /// Re-check every line of the stored cart
    Cart(CartArgs),

    /// Show a product's dependency configuration
    Inspect(InspectArgs),

    /// Manage the purchase history cache
    Cache(CacheArgs),
}

/// Who is shopping.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShopperArgs {
    /// Logged-in customer id
    #[arg(short, long)]
    pub user: Option<u64>,

    /// Billing email of the shopper
    #[arg(short, long)]
    pub email: Option<String>,
}

impl ShopperArgs {
    pub fn identity(&self) -> Identity {
        let mut identity = match self.user {
            Some(user) => Identity::user(user),
            None => Identity::anonymous(),
        };
        if let Some(email) = &self.email {
            identity = identity.with_email(email.clone());
        }
        identity
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Product or variation id
    #[arg(short, long)]
    pub product: u64,

    #[command(flatten)]
    pub shopper: ShopperArgs,

    /// Output the evaluation as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `cart` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CartArgs {
    #[command(flatten)]
    pub shopper: ShopperArgs,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `inspect` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InspectArgs {
    /// Product or variation id
    #[arg(short, long)]
    pub product: u64,
}
