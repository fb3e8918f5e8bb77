//! Private APT environment layout
//!
//! Single source of truth for every path under `<cache>/apt/`. The option
//! strings handed to apt-get derive from the same struct the file
//! operations use, so configuration writes and command invocations cannot
//! disagree about locations.

use std::path::{Path, PathBuf};

/// Root directory of the private environment, inside the cache dir
pub const APT_DIR: &str = "apt";

/// Sources list file, relative to the root
pub const SOURCES_LIST: &str = "sources/sources.list";

/// Trusted keyring file, relative to the root
pub const TRUSTED_GPG: &str = "etc/trusted.gpg";

/// Package cache directory, relative to the root
pub const CACHE_SUBDIR: &str = "cache";

/// State directory, relative to the root
pub const STATE_SUBDIR: &str = "state";

/// Downloaded archive directory, relative to the root
pub const ARCHIVES_SUBDIR: &str = "cache/archives";

/// Paths of the private APT environment under a cache directory
#[derive(Debug, Clone)]
pub struct AptDirs {
    /// `<cache>/apt`
    pub root: PathBuf,
    /// `<cache>/apt/cache`
    pub cache: PathBuf,
    /// `<cache>/apt/state`
    pub state: PathBuf,
    /// `<cache>/apt/sources/sources.list`
    pub sources_list: PathBuf,
    /// `<cache>/apt/etc/trusted.gpg`
    pub trusted_gpg: PathBuf,
    /// `<cache>/apt/cache/archives`
    pub archives: PathBuf,
}

impl AptDirs {
    /// Compute the layout rooted under `cache_dir`
    pub fn new(cache_dir: &Path) -> Self {
        let root = cache_dir.join(APT_DIR);
        Self {
            cache: root.join(CACHE_SUBDIR),
            state: root.join(STATE_SUBDIR),
            sources_list: root.join(SOURCES_LIST),
            trusted_gpg: root.join(TRUSTED_GPG),
            archives: root.join(ARCHIVES_SUBDIR),
            root,
        }
    }

    /// The five `-o` bindings that point apt-get at this layout instead of
    /// the system-wide one
    pub fn apt_options(&self) -> Vec<String> {
        vec![
            "-o".to_string(),
            "debug::nolocking=true".to_string(),
            "-o".to_string(),
            format!("dir::cache={}", self.cache.display()),
            "-o".to_string(),
            format!("dir::state={}", self.state.display()),
            "-o".to_string(),
            format!("dir::etc::sourcelist={}", self.sources_list.display()),
            "-o".to_string(),
            format!("dir::etc::trusted={}", self.trusted_gpg.display()),
        ]
    }

    /// Target path in the archive cache for a .deb fetched from `url`
    pub fn archive_path(&self, url: &str) -> PathBuf {
        self.archives.join(base_name(url))
    }
}

/// Final `/`-separated segment of a URL or path, ignoring trailing slashes
fn base_name(url: &str) -> &str {
    let trimmed = url.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
