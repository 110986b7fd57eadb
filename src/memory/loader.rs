//! Store snapshot loading.

use std::fs;
use std::path::Path;

use super::{InMemoryStore, StoreSnapshot};
use crate::error::{CartgateError, Result};

/// Parse a YAML snapshot and validate its settings.
pub fn parse_store(content: &str, path: &Path) -> Result<InMemoryStore> {
    let snapshot: StoreSnapshot =
        serde_yaml::from_str(content).map_err(|e| CartgateError::StoreParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    snapshot.settings.validate()?;
    Ok(InMemoryStore::from_snapshot(snapshot))
}

/// Load a store snapshot from a YAML file.
pub fn load_store(path: &Path) -> Result<InMemoryStore> {
    if !path.exists() {
        return Err(CartgateError::StoreNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    tracing::debug!("Loaded store snapshot from {}", path.display());
    parse_store(&content, path)
}
