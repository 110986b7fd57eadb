//! Purchase history cache backends.
//!
//! Entries are keyed by customer fingerprint. The orders version lives in
//! the entry, so a version bump turns every existing entry into a miss and
//! the next lookup overwrites it.

use anyhow::Context;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::entry::HistoryEntry;
use crate::error::{CartgateError, Result};

/// Storage for cached purchase history.
///
/// Shared across requests; implementations must tolerate concurrent
/// writers racing on the same key (last write wins).
pub trait HistoryCache: Send + Sync {
    /// Load the entry for a customer fingerprint.
    fn get(&self, fingerprint: &str) -> Result<Option<HistoryEntry>>;

    /// Store an entry, replacing any previous one for the same fingerprint.
    fn put(&self, entry: HistoryEntry) -> Result<()>;

    /// Remove an entry. Returns whether anything was removed.
    fn remove(&self, fingerprint: &str) -> Result<bool>;

    /// All entries, newest first.
    fn list(&self) -> Result<Vec<HistoryEntry>>;

    /// Remove all entries.
    fn clear(&self) -> Result<usize> {
        let entries = self.list()?;
        let mut removed = 0;
        for entry in entries {
            if self.remove(&entry.fingerprint)? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Remove entries whose TTL has passed.
    fn purge_expired(&self) -> Result<usize> {
        let entries = self.list()?;
        let mut removed = 0;
        for entry in entries {
            if entry.is_expired() && self.remove(&entry.fingerprint)? {
                removed += 1;
            }
        }
        Ok(removed)
    }
}

/// Process-wide in-memory cache.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, HistoryEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> CartgateError {
    CartgateError::CacheFailed {
        message: "history cache lock poisoned".to_string(),
    }
}

impl HistoryCache for MemoryCache {
    fn get(&self, fingerprint: &str) -> Result<Option<HistoryEntry>> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.get(fingerprint).cloned())
    }

    fn put(&self, entry: HistoryEntry) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.insert(entry.fingerprint.clone(), entry);
        Ok(())
    }

    fn remove(&self, fingerprint: &str) -> Result<bool> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        Ok(entries.remove(fingerprint).is_some())
    }

    fn list(&self) -> Result<Vec<HistoryEntry>> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        let mut list: Vec<HistoryEntry> = entries.values().cloned().collect();
        list.sort_by(|a, b| b.cached_at.cmp(&a.cached_at));
        Ok(list)
    }
}

/// Disk-backed cache, one JSON file per customer.
pub struct DiskCache {
    /// Root directory for cache.
    root: PathBuf,
}

impl DiskCache {
    /// Create a new disk cache rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ensure the cache directory exists.
    fn ensure_dir(&self) -> anyhow::Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create cache directory {:?}", self.root))
    }

    /// Path of the file holding a fingerprint's entry.
    pub fn entry_path(&self, fingerprint: &str) -> PathBuf {
        self.root.join(format!("{}.json", fingerprint))
    }

    fn read_entry(path: &Path) -> anyhow::Result<HistoryEntry> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read cache entry {:?}", path))?;
        let entry = serde_json::from_str(&json)
            .with_context(|| format!("Corrupt cache entry {:?}", path))?;
        Ok(entry)
    }
}

impl HistoryCache for DiskCache {
    fn get(&self, fingerprint: &str) -> Result<Option<HistoryEntry>> {
        let path = self.entry_path(fingerprint);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(Self::read_entry(&path)?))
    }

    fn put(&self, entry: HistoryEntry) -> Result<()> {
        self.ensure_dir()?;
        let path = self.entry_path(&entry.fingerprint);
        let json = serde_json::to_string_pretty(&entry).context("Failed to encode cache entry")?;
        fs::write(&path, json)?;
        Ok(())
    }

    fn remove(&self, fingerprint: &str) -> Result<bool> {
        let path = self.entry_path(fingerprint);
        if path.exists() {
            fs::remove_file(&path)?;
            return Ok(true);
        }
        Ok(false)
    }

    fn list(&self) -> Result<Vec<HistoryEntry>> {
        self.ensure_dir()?;

        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "json") {
                // Unreadable files are skipped, not fatal.
                if let Ok(history) = Self::read_entry(&path) {
                    entries.push(history);
                }
            }
        }

        entries.sort_by(|a, b| b.cached_at.cmp(&a.cached_at));
        Ok(entries)
    }
}
