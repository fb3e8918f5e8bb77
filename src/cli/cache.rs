use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Arguments for cache command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show cache statistics:\n    aptpack cache --cache-dir /build-cache\n\n\
                  List cached .deb archives:\n    aptpack cache list\n\n\
                  Clear the private apt environment:\n    aptpack cache clear --yes")]
pub struct CacheArgs {
    /// Cache directory (defaults to APTPACK_CACHE_DIR, then the user cache directory)
    #[arg(long, value_name = "DIR", global = true)]
    pub cache_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CacheSubcommand>,
}

/// Cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheSubcommand {
    /// List cached .deb archives
    List,

    /// Remove the private apt environment and build state
    Clear(ClearCacheArgs),
}

/// Arguments for cache clear command
#[derive(Parser, Debug)]
pub struct ClearCacheArgs {
    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}
