//! Aptpack - apt packages for build environments
//!
//! A command line tool that stages apt packages into a dependency directory
//! during a build, keeping all APT state private to the build cache instead
//! of touching the system package database.

use clap::Parser;

mod apt;
mod cache;
mod cli;
mod commands;
mod error;
mod hash;
mod manifest;
mod progress;
mod runner;
mod staging;
#[cfg(test)]
mod test_fixtures;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Supply(args) => commands::supply::run(args, cli.verbose),
        Commands::Cache(args) => commands::cache::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        ui::error(&format!("Error: {}", e));
        std::process::exit(1);
    }
}
