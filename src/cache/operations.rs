//! Cache maintenance operations

use std::fs;
use std::path::Path;

use crate::apt::layout::AptDirs;
use crate::cache::state::BuildState;
use crate::error::{Result, cache as cache_error};

/// Remove the private APT environment and the build state
///
/// Safe to call on a cache directory that holds neither.
pub fn clear_cache(cache_dir: &Path) -> Result<()> {
    let dirs = AptDirs::new(cache_dir);
    if dirs.root.exists() {
        fs::remove_dir_all(&dirs.root)
            .map_err(|e| cache_error::operation_failed(format!("Failed to clear cache: {}", e)))?;
    }

    let state_path = BuildState::path(cache_dir);
    if state_path.exists() {
        fs::remove_file(&state_path).map_err(|e| {
            cache_error::operation_failed(format!("Failed to remove state file: {}", e))
        })?;
    }

    Ok(())
}
