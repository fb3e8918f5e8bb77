//! Build cache for the private APT environment
//!
//! ## Cache structure
//!
//! ```text
//! <cache-dir>/
//! ├── apt/
//! │   ├── sources/sources.list
//! │   ├── etc/trusted.gpg
//! │   ├── cache/archives/*.deb
//! │   └── state/
//! └── aptpack-state.json
//! ```
//!
//! A supply run receives its cache directory on the command line; the
//! `cache` maintenance command falls back to [`cache_dir`] when none is
//! given.

use std::path::PathBuf;

use crate::error::{Result, cache as cache_error};

pub mod operations;
pub mod state;
pub mod stats;

pub use operations::clear_cache;
pub use state::BuildState;
pub use stats::{CacheStats, CachedArchive, cache_stats, list_archives};

/// Default cache directory name under the user's cache directory
const CACHE_DIR: &str = "aptpack";

/// Environment variable overriding the default cache directory
pub const CACHE_DIR_ENV: &str = "APTPACK_CACHE_DIR";

/// Get the default cache directory path
///
/// Returns `~/.cache/aptpack` on Unix or equivalent on other platforms.
///
/// Can be overridden with the `APTPACK_CACHE_DIR` environment variable.
pub fn cache_dir() -> Result<PathBuf> {
    if let Ok(cache_dir) = std::env::var(CACHE_DIR_ENV) {
        return Ok(PathBuf::from(cache_dir));
    }

    let base = dirs::cache_dir()
        .ok_or_else(|| cache_error::operation_failed("Could not determine cache directory"))?;

    Ok(base.join(CACHE_DIR))
}
