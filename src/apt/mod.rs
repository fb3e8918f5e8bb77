//! Hermetic APT pipeline
//!
//! Drives apt-key, apt-get, curl and dpkg against a private environment
//! under the cache directory so nothing touches system-wide APT state.
//! Operations compose in a fixed order: [`Apt::setup`], then
//! [`Apt::add_keys`] / [`Apt::add_repos`] (either order), then
//! [`Apt::update`], [`Apt::download`], [`Apt::install`].

pub mod layout;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, fs as fs_error};
use crate::manifest::Manifest;
use crate::runner::CommandRunner;

use layout::AptDirs;

/// Working directory for every external tool invocation
const RUN_DIR: &str = "/";

/// Seed files copied into the private environment by setup
#[derive(Debug, Clone)]
pub struct Templates {
    /// Copied to the private sources list
    pub sources_list: PathBuf,
    /// Copied to the private trusted keyring
    pub trusted_gpg: PathBuf,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            sources_list: PathBuf::from("/etc/apt/sources.list"),
            trusted_gpg: PathBuf::from("/etc/apt/trusted.gpg"),
        }
    }
}

/// APT operations scoped to a private environment under the cache dir
pub struct Apt<'a> {
    runner: &'a dyn CommandRunner,
    manifest_path: PathBuf,
    templates: Templates,
    dirs: AptDirs,
    install_dir: PathBuf,
    options: Vec<String>,
    /// Parsed manifest; populated by [`Apt::setup`]
    pub manifest: Manifest,
}

impl<'a> Apt<'a> {
    /// Create a pipeline over `cache_dir`, installing into `install_dir`
    pub fn new(
        runner: &'a dyn CommandRunner,
        manifest_path: &Path,
        cache_dir: &Path,
        install_dir: &Path,
    ) -> Self {
        let dirs = AptDirs::new(cache_dir);
        let options = dirs.apt_options();
        Self {
            runner,
            manifest_path: manifest_path.to_path_buf(),
            templates: Templates::default(),
            dirs,
            install_dir: install_dir.to_path_buf(),
            options,
            manifest: Manifest::default(),
        }
    }

    /// Replace the seed file locations (tests, non-standard stacks)
    pub fn with_templates(mut self, templates: Templates) -> Self {
        self.templates = templates;
        self
    }

    /// The environment layout this pipeline operates on
    pub fn dirs(&self) -> &AptDirs {
        &self.dirs
    }

    /// Load the manifest and materialize the private environment
    ///
    /// Copies the sources-list and trusted-keyring templates into place,
    /// creating parent directories as needed. The copies always overwrite,
    /// so every run starts from pristine seed files.
    pub fn setup(&mut self) -> Result<()> {
        self.manifest = Manifest::load(&self.manifest_path)?;
        copy_into_place(&self.templates.sources_list, &self.dirs.sources_list)?;
        copy_into_place(&self.templates.trusted_gpg, &self.dirs.trusted_gpg)?;
        Ok(())
    }

    /// Register trusted keys in the private keyring
    ///
    /// Runs each configured `gpg_advanced_options` line, then fetches each
    /// key URL, all via `apt-key` scoped to the private keyring. Returns
    /// the last captured output; the empty string when nothing ran.
    pub fn add_keys(&self) -> Result<String> {
        let keyring = self.dirs.trusted_gpg.display().to_string();
        let mut last_output = String::new();

        for options in &self.manifest.gpg_advanced_options {
            let mut args = vec!["--keyring".to_string(), keyring.clone(), "adv".to_string()];
            args.extend(options.split_whitespace().map(str::to_string));
            last_output = self.run("apt-key", args)?;
        }

        for key_url in &self.manifest.keys {
            let args = vec![
                "--keyring".to_string(),
                keyring.clone(),
                "adv".to_string(),
                "--fetch-keys".to_string(),
                key_url.clone(),
            ];
            last_output = self.run("apt-key", args)?;
        }

        Ok(last_output)
    }

    /// Append the configured repo lines to the private sources list
    ///
    /// Each line is appended as `"\n" + line` with no trailing newline.
    /// No external tools are involved. With no repos configured this is a
    /// no-op and the sources list is not touched.
    pub fn add_repos(&self) -> Result<()> {
        if self.manifest.repos.is_empty() {
            return Ok(());
        }

        let path = &self.dirs.sources_list;
        let mut content = fs::read_to_string(path)
            .map_err(|e| fs_error::read_failed(path.display().to_string(), e.to_string()))?;

        for repo in &self.manifest.repos {
            content.push('\n');
            content.push_str(repo);
        }

        fs::write(path, &content)
            .map_err(|e| fs_error::write_failed(path.display().to_string(), e.to_string()))?;
        Ok(())
    }

    /// Refresh package indexes in the private environment
    ///
    /// Returns apt-get's captured output verbatim.
    pub fn update(&self) -> Result<String> {
        let mut args = self.options.clone();
        args.push("update".to_string());
        self.run("apt-get", args)
    }

    /// Fetch every configured package into the private archive cache
    ///
    /// Direct `.deb` URLs go through a conditional curl fetch; package
    /// names go through apt-get's download-only reinstall. List order is
    /// preserved and the first failure aborts the remainder.
    pub fn download(&self) -> Result<String> {
        for package in &self.manifest.packages {
            if is_url(package) {
                self.fetch_archive(package)?;
            } else {
                self.download_package(package)?;
            }
        }
        Ok(String::new())
    }

    /// Extract every downloaded archive into the install dir
    ///
    /// Archives are discovered from the cache, not remembered from
    /// download, so previously cached `.deb` files install too. Extraction
    /// is `dpkg -x` only; no maintainer scripts run, re-extraction
    /// overwrites in place.
    pub fn install(&self) -> Result<String> {
        let install_dir = self.install_dir.display().to_string();
        for archive in self.downloaded_archives()? {
            let args = vec![
                "-x".to_string(),
                archive.display().to_string(),
                install_dir.clone(),
            ];
            self.run("dpkg", args)?;
        }
        Ok(String::new())
    }

    fn run(&self, program: &str, args: Vec<String>) -> Result<String> {
        self.runner.output(Path::new(RUN_DIR), program, &args)
    }

    fn fetch_archive(&self, url: &str) -> Result<String> {
        // curl will not create the directory itself
        fs::create_dir_all(&self.dirs.archives).map_err(|e| {
            fs_error::write_failed(self.dirs.archives.display().to_string(), e.to_string())
        })?;

        let target = self.dirs.archive_path(url).display().to_string();
        let args = vec![
            "-s".to_string(),
            "-L".to_string(),
            "-z".to_string(),
            target.clone(),
            "-o".to_string(),
            target,
            url.to_string(),
        ];
        self.run("curl", args)
    }

    fn download_package(&self, name: &str) -> Result<String> {
        let mut args = self.options.clone();
        args.extend(["-y", "--force-yes", "-d", "install", "--reinstall"].map(String::from));
        args.push(name.to_string());
        self.run("apt-get", args)
    }

    /// All `.deb` files in the archive cache, sorted by file name
    fn downloaded_archives(&self) -> Result<Vec<PathBuf>> {
        if !self.dirs.archives.is_dir() {
            // Nothing was downloaded
            return Ok(Vec::new());
        }

        let dir_display = self.dirs.archives.display().to_string();
        let entries = fs::read_dir(&self.dirs.archives)
            .map_err(|e| fs_error::read_failed(dir_display.clone(), e.to_string()))?;

        let mut archives = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| fs_error::read_failed(dir_display.clone(), e.to_string()))?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "deb") {
                archives.push(path);
            }
        }
        archives.sort();
        Ok(archives)
    }
}

/// True for direct .deb URLs as opposed to package names
fn is_url(package: &str) -> bool {
    package.starts_with("http://") || package.starts_with("https://")
}

/// Copy a seed file into the private environment, creating parents
fn copy_into_place(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| fs_error::write_failed(parent.display().to_string(), e.to_string()))?;
    }
    fs::copy(from, to).map_err(|e| {
        fs_error::copy_failed(
            from.display().to_string(),
            to.display().to_string(),
            e.to_string(),
        )
    })?;
    Ok(())
}
