//! Cache command implementation

use std::path::{Path, PathBuf};

use crate::cache;
use crate::cli::{CacheArgs, CacheSubcommand};
use crate::error::Result;

pub fn run(args: CacheArgs) -> Result<()> {
    let cache_dir = resolve_cache_dir(args.cache_dir)?;

    // Handle subcommands
    if let Some(command) = args.command {
        match command {
            CacheSubcommand::List => {
                list_cached_archives(&cache_dir)?;
                return Ok(());
            }
            CacheSubcommand::Clear(clear_args) => {
                clear_with_confirmation(&cache_dir, clear_args.yes)?;
                return Ok(());
            }
        }
    }

    // Default: show only cache statistics
    show_cache_stats(&cache_dir)?;

    Ok(())
}

fn resolve_cache_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(dir) => Ok(dir),
        None => cache::cache_dir(),
    }
}

fn show_cache_stats(cache_dir: &Path) -> Result<()> {
    let stats = cache::cache_stats(cache_dir)?;

    println!("Cache Statistics:");
    println!("  Location: {}", cache_dir.display());
    println!("  Archives: {}", stats.archives);
    println!("  Size: {}", stats.formatted_size());

    if stats.archives == 0 {
        println!("\nCache is empty.");
    } else {
        println!("\nRun 'aptpack cache list' to list cached archives.");
        println!("Run 'aptpack cache clear' to remove the private apt environment.");
    }

    Ok(())
}

fn list_cached_archives(cache_dir: &Path) -> Result<()> {
    let archives = cache::list_archives(cache_dir)?;

    if archives.is_empty() {
        println!("No cached archives.");
        return Ok(());
    }

    println!("Cached archives ({}):", archives.len());
    for archive in &archives {
        println!("  {} ({})", archive.name, archive.formatted_size());
    }

    Ok(())
}

fn clear_with_confirmation(cache_dir: &Path, yes: bool) -> Result<()> {
    if !yes {
        let prompt = format!(
            "Remove the private apt environment under {}?",
            cache_dir.display()
        );
        let confirmed = inquire::Confirm::new(&prompt).with_default(false).prompt()?;
        if !confirmed {
            println!("Cache left untouched.");
            return Ok(());
        }
    }

    cache::clear_cache(cache_dir)?;
    println!("Cache cleared successfully.");
    Ok(())
}
