//! Store and cache wiring shared by the evaluating commands.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::history::{DiskCache, HistoryCache, MemoryCache, PurchaseHistory};
use crate::memory::{load_store, InMemoryStore};
use crate::notice::NoticeFormatter;

/// A loaded store plus the history cache evaluations should use.
pub struct StoreContext {
    pub store: InMemoryStore,
    cache: Box<dyn HistoryCache>,
}

impl StoreContext {
    /// Load the store file and pick the disk cache when a directory is set.
    pub fn open(store_path: &Path, cache_dir: Option<&Path>) -> Result<Self> {
        let store = load_store(store_path)?;
        Ok(Self {
            store,
            cache: open_cache(cache_dir),
        })
    }

    pub fn evaluator(&self) -> Evaluator<'_> {
        let settings = self.store.settings();
        let history = PurchaseHistory::new(&self.store, self.cache.as_ref(), settings);
        Evaluator::new(
            &self.store,
            &self.store,
            &self.store,
            history,
            NoticeFormatter::new(settings),
        )
    }
}

fn open_cache(cache_dir: Option<&Path>) -> Box<dyn HistoryCache> {
    match cache_dir {
        Some(dir) => Box::new(DiskCache::new(PathBuf::from(dir))),
        None => Box::new(MemoryCache::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CartgateError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_store_is_reported() {
        let temp = TempDir::new().unwrap();
        let result = StoreContext::open(&temp.path().join("store.yml"), None);
        assert!(matches!(result, Err(CartgateError::StoreNotFound { .. })));
    }

    #[test]
    fn evaluates_against_loaded_store() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("store.yml");
        fs::write(
            &path,
            "products:\n  - id: 1\n    title: Poster\n",
        )
        .unwrap();

        let ctx = StoreContext::open(&path, Some(&temp.path().join("cache"))).unwrap();
        let decision = ctx
            .evaluator()
            .evaluate_current(1u64, &crate::session::Identity::anonymous());
        assert!(!decision.is_blocking());
        assert!(decision.result().is_some());
    }
}
