//! Cache command implementation.
//!
//! Provides `cartgate cache list`, `cartgate cache clear` and
//! `cartgate cache stats` for the on-disk purchase history cache.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::history::{DiskCache, HistoryCache};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Arguments for the cache command.
#[derive(Debug, Clone, Args)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheSubcommand,
}

/// Cache subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum CacheSubcommand {
    /// List cached entries.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Clear the cache.
    Clear {
        /// Only clear expired entries.
        #[arg(long)]
        expired: bool,
    },
    /// Show cache statistics.
    Stats,
}

/// The cache command implementation.
pub struct CacheCommand {
    cache_dir: Option<PathBuf>,
    args: CacheArgs,
}

impl CacheCommand {
    pub fn new(cache_dir: Option<PathBuf>, args: CacheArgs) -> Self {
        Self { cache_dir, args }
    }
}

impl Command for CacheCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let Some(dir) = &self.cache_dir else {
            ui.error("No cache directory configured (use --cache-dir or CARTGATE_CACHE_DIR)");
            return Ok(CommandResult::failure(1));
        };
        let cache = DiskCache::new(dir.clone());

        match &self.args.command {
            CacheSubcommand::List { json } => list_cache(&cache, *json, ui)?,
            CacheSubcommand::Clear { expired } => clear_cache(&cache, *expired, ui)?,
            CacheSubcommand::Stats => show_stats(&cache, ui)?,
        }

        Ok(CommandResult::success())
    }
}

fn list_cache(cache: &DiskCache, json: bool, ui: &mut dyn UserInterface) -> Result<()> {
    let entries = cache.list()?;

    if json {
        ui.data(&serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        ui.message("Cache is empty");
        return Ok(());
    }

    ui.message(&format!("{} cached entries:\n", entries.len()));
    for entry in entries {
        let ttl = if entry.is_expired() {
            "expired".to_string()
        } else {
            format!("expires in {}", format_seconds(entry.remaining_ttl()))
        };
        ui.message(&format!(
            "  {} v{} {} products, {}",
            short_fingerprint(&entry.fingerprint),
            entry.orders_version,
            entry.product_ids.len(),
            ttl
        ));
    }

    Ok(())
}

fn clear_cache(cache: &DiskCache, expired_only: bool, ui: &mut dyn UserInterface) -> Result<()> {
    if expired_only {
        let removed = cache.purge_expired()?;
        ui.success(&format!("Cleared {} expired entries", removed));
        return Ok(());
    }

    let cleared = cache.clear()?;
    if cleared == 0 {
        ui.message("Cache is already empty");
    } else {
        ui.success(&format!("Cleared {} entries", cleared));
    }
    Ok(())
}

fn show_stats(cache: &DiskCache, ui: &mut dyn UserInterface) -> Result<()> {
    let entries = cache.list()?;
    let expired = entries.iter().filter(|e| e.is_expired()).count();

    ui.show_header("Purchase history cache");
    ui.show_detail("entries", &entries.len().to_string());
    ui.show_detail("fresh", &(entries.len() - expired).to_string());
    ui.show_detail("expired", &expired.to_string());
    ui.show_detail("location", &cache.root().display().to_string());

    Ok(())
}

fn short_fingerprint(fingerprint: &str) -> &str {
    fingerprint.get(..12).unwrap_or(fingerprint)
}

/// Compact duration: `3d 4h`, `5h 12m`, `7m 3s`, `42s`.
fn format_seconds(secs: i64) -> String {
    let (days, hours, mins, s) = (secs / 86_400, secs % 86_400 / 3600, secs % 3600 / 60, secs % 60);
    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else if mins > 0 {
        format!("{}m {}s", mins, s)
    } else {
        format!("{}s", s)
    }
}
