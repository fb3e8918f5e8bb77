//! Supply command implementation
//!
//! The build-phase staging flow:
//! 1. Read apt.yml from the build directory (a missing manifest is a no-op)
//! 2. Fingerprint the manifest and reset the cached apt environment when it changed
//! 3. Set up the private sources list and keyring
//! 4. Register extra keys and repositories
//! 5. Update package indexes and download the declared packages
//! 6. Extract the downloaded archives into the dependency directory
//! 7. Write a profile.d script exporting the staged paths

use std::fs;
use std::path::Path;

use crate::apt::{Apt, Templates};
use crate::cache::{BuildState, clear_cache};
use crate::cli::SupplyArgs;
use crate::error::{Result, fs as fs_error};
use crate::hash;
use crate::manifest::MANIFEST_FILE;
use crate::progress::StepProgress;
use crate::runner::ProcessRunner;
use crate::staging::Stage;
use crate::ui;

/// Run supply command
pub fn run(args: SupplyArgs, verbose: bool) -> Result<()> {
    let stage = Stage::new(&args.build_dir, &args.cache_dir, &args.deps_dir, &args.deps_idx);

    let manifest_path = stage.manifest_path();
    if !manifest_path.exists() {
        ui::info(&format!(
            "No {} found in {}, skipping apt packages",
            MANIFEST_FILE,
            args.build_dir.display()
        ));
        return Ok(());
    }

    let fingerprint = hash::hash_file(&manifest_path)?;
    refresh_cache(&stage.cache_dir, &fingerprint)?;

    let install_dir = stage.install_dir();
    fs::create_dir_all(&install_dir)
        .map_err(|e| fs_error::write_failed(install_dir.display().to_string(), e.to_string()))?;

    let runner = ProcessRunner;
    let mut apt =
        Apt::new(&runner, &manifest_path, &stage.cache_dir, &install_dir).with_templates(Templates {
            sources_list: args.sources_template.clone(),
            trusted_gpg: args.keyring_template.clone(),
        });

    ui::step("Preparing apt environment");
    apt.setup()?;

    if apt.manifest.is_empty() {
        ui::info("Manifest declares no packages, keys or repos");
    }

    if apt.manifest.has_keys() {
        run_step("Adding apt keys", verbose, || apt.add_keys())?;
    }
    if apt.manifest.has_repos() {
        run_step("Adding apt repositories", verbose, || {
            apt.add_repos().map(|()| String::new())
        })?;
    }

    run_step("Updating apt caches", verbose, || apt.update())?;
    run_step("Downloading apt packages", verbose, || apt.download())?;
    run_step("Installing apt packages", verbose, || apt.install())?;

    let script = stage.write_profile_script()?;
    if verbose {
        ui::info(&format!("Wrote {}", script.display()));
    }

    BuildState::new(fingerprint).save(&stage.cache_dir)?;

    ui::step(&format!("Supplied apt packages to {}", install_dir.display()));
    Ok(())
}

/// Reset the cached apt environment when the manifest fingerprint moved
fn refresh_cache(cache_dir: &Path, fingerprint: &str) -> Result<()> {
    match BuildState::load(cache_dir) {
        Ok(Some(state)) if !state.is_stale(fingerprint) => {
            ui::step("Reusing cached apt environment");
        }
        Ok(Some(_)) => {
            ui::step("Manifest changed, resetting apt caches");
            clear_cache(cache_dir)?;
        }
        Ok(None) => {
            ui::step("Building apt environment");
        }
        Err(e) => {
            // Self-heal rather than fail the build on a corrupt state file
            ui::warn(&format!("Build state unreadable ({}), resetting apt caches", e));
            clear_cache(cache_dir)?;
        }
    }
    Ok(())
}

/// Run one pipeline phase behind a step line and spinner
fn run_step(title: &str, verbose: bool, phase: impl FnOnce() -> Result<String>) -> Result<()> {
    ui::step(title);
    let progress = StepProgress::start(title);
    match phase() {
        Ok(output) => {
            progress.finish();
            if verbose {
                for line in output.lines() {
                    ui::info(line);
                }
            }
            Ok(())
        }
        Err(e) => {
            progress.abandon();
            Err(e)
        }
    }
}
