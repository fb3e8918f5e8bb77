//! Archive cache statistics
//!
//! Functions for listing cached `.deb` archives and sizing the private
//! APT environment.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::apt::layout::AptDirs;
use crate::error::{Result, cache as cache_error};

/// A cached .deb archive
#[derive(Debug, Clone)]
pub struct CachedArchive {
    /// Archive file name (e.g. `jq_1.6-2.1_amd64.deb`)
    pub name: String,
    /// Size in bytes
    pub size: u64,
}

impl CachedArchive {
    /// Format size as a human-readable string
    pub fn formatted_size(&self) -> String {
        format_size(self.size)
    }
}

/// Cache statistics
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Number of cached .deb archives
    pub archives: usize,
    /// Size of the whole private environment in bytes
    pub total_size: u64,
}

impl CacheStats {
    /// Format total size as a human-readable string
    pub fn formatted_size(&self) -> String {
        format_size(self.total_size)
    }
}

/// List cached archives under `cache_dir`, sorted by name
pub fn list_archives(cache_dir: &Path) -> Result<Vec<CachedArchive>> {
    let dirs = AptDirs::new(cache_dir);

    if !dirs.archives.is_dir() {
        return Ok(Vec::new());
    }

    let mut archives = Vec::new();
    for entry in fs::read_dir(&dirs.archives).map_err(|e| {
        cache_error::operation_failed(format!("Failed to read archive directory: {}", e))
    })? {
        let entry = entry
            .map_err(|e| cache_error::operation_failed(format!("Failed to read entry: {}", e)))?;

        let path = entry.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "deb") {
            continue;
        }

        let size = entry
            .metadata()
            .map_err(|e| cache_error::operation_failed(format!("Failed to get metadata: {}", e)))?
            .len();

        archives.push(CachedArchive {
            name: entry.file_name().to_string_lossy().to_string(),
            size,
        });
    }

    archives.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(archives)
}

/// Get cache statistics for the environment under `cache_dir`
pub fn cache_stats(cache_dir: &Path) -> Result<CacheStats> {
    let dirs = AptDirs::new(cache_dir);

    let mut stats = CacheStats {
        archives: list_archives(cache_dir)?.len(),
        total_size: 0,
    };

    if dirs.root.is_dir() {
        stats.total_size = dir_size(&dirs.root)?;
    }

    Ok(stats)
}

/// Calculate directory size recursively
fn dir_size(path: &Path) -> Result<u64> {
    let mut size = 0u64;
    for entry in WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.file_type().is_file() {
            size += entry
                .metadata()
                .map_err(|e| {
                    cache_error::operation_failed(format!("Failed to get metadata: {}", e))
                })?
                .len();
        }
    }
    Ok(size)
}

fn format_size(bytes: u64) -> String {
    let size = bytes as f64;
    if size < 1024.0 {
        format!("{} B", bytes)
    } else if size < 1024.0 * 1024.0 {
        format!("{:.1} KB", size / 1024.0)
    } else if size < 1024.0 * 1024.0 * 1024.0 {
        format!("{:.1} MB", size / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", size / (1024.0 * 1024.0 * 1024.0))
    }
}
