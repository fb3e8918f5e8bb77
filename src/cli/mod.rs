//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - supply: Supply command arguments
//! - cache: Cache command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod cache;
pub mod completions;
pub mod supply;

pub use cache::{CacheArgs, CacheSubcommand, ClearCacheArgs};
pub use completions::CompletionsArgs;
pub use supply::SupplyArgs;

/// Aptpack - apt packages for build environments
///
/// Stage apt packages into a dependency directory without touching the system
/// package database.
#[derive(Parser, Debug)]
#[command(
    name = "aptpack",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Stage apt packages into build dependency directories",
    long_about = "Aptpack reads an apt.yml manifest from the application directory, keeps a \
                  private apt environment (sources, keyring, package cache) under the build \
                  cache, and extracts the declared packages into the dependency directory \
                  handed to later build stages.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  aptpack supply /app /cache /deps 0     \x1b[90m# Stage packages from /app/apt.yml\x1b[0m\n   \
                  aptpack cache --cache-dir /cache       \x1b[90m# Show archive cache statistics\x1b[0m\n   \
                  aptpack cache list                     \x1b[90m# List cached .deb archives\x1b[0m\n   \
                  aptpack cache clear --yes              \x1b[90m# Drop the private apt environment\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download and install packages declared in apt.yml
    Supply(SupplyArgs),

    /// Manage the archive cache
    #[command(name = "cache")]
    Cache(CacheArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
