//! Build state persisted between supply runs
//!
//! A small JSON document next to the `apt/` tree records which manifest
//! the cached environment was built from, so a later run can tell whether
//! the cache is still valid for the manifest it sees.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, cache as cache_error};
use crate::hash;

/// File name of the build state, stored next to the apt/ tree
pub const STATE_FILE: &str = "aptpack-state.json";

/// Records what the cached APT environment was built from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildState {
    /// BLAKE3 fingerprint of the manifest the cache was built from
    pub manifest_hash: String,
    /// aptpack version that wrote the state
    pub version: String,
}

impl BuildState {
    /// Create a state for the given manifest fingerprint
    pub fn new(manifest_hash: impl Into<String>) -> Self {
        Self {
            manifest_hash: manifest_hash.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Path of the state file under a cache directory
    pub fn path(cache_dir: &Path) -> PathBuf {
        cache_dir.join(STATE_FILE)
    }

    /// Load the recorded state; `None` when no state was written yet
    pub fn load(cache_dir: &Path) -> Result<Option<Self>> {
        let path = Self::path(cache_dir);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| cache_error::state_invalid(path.display().to_string(), e.to_string()))?;
        let state = serde_json::from_str(&content)
            .map_err(|e| cache_error::state_invalid(path.display().to_string(), e.to_string()))?;
        Ok(Some(state))
    }

    /// Persist the state under the cache directory
    pub fn save(&self, cache_dir: &Path) -> Result<()> {
        fs::create_dir_all(cache_dir).map_err(|e| {
            cache_error::operation_failed(format!(
                "Failed to create cache directory {}: {}",
                cache_dir.display(),
                e
            ))
        })?;

        let path = Self::path(cache_dir);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content).map_err(|e| {
            cache_error::operation_failed(format!(
                "Failed to write state file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(())
    }

    /// True when the cached environment no longer matches `manifest_hash`
    pub fn is_stale(&self, manifest_hash: &str) -> bool {
        !hash::verify_hash(&self.manifest_hash, manifest_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AptpackError;

    #[test]
    fn test_state_round_trip() {
        let temp = tempfile::tempdir().unwrap();

        let state = BuildState::new("blake3:abc123");
        state.save(temp.path()).unwrap();

        let loaded = BuildState::load(temp.path()).unwrap().unwrap();
        assert_eq!(loaded, state);
        assert_eq!(loaded.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_load_without_state_file() {
        let temp = tempfile::tempdir().unwrap();
        assert!(BuildState::load(temp.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_corrupted_state() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(BuildState::path(temp.path()), "not json at all").unwrap();

        let err = BuildState::load(temp.path()).unwrap_err();
        assert!(matches!(err, AptpackError::CacheStateInvalid { .. }));
    }

    #[test]
    fn test_is_stale() {
        let state = BuildState::new("blake3:abc123");
        assert!(!state.is_stale("blake3:abc123"));
        // Prefix normalization applies
        assert!(!state.is_stale("abc123"));
        assert!(state.is_stale("blake3:def456"));
    }
}
