//! Common test utilities for aptpack integration tests
//!
//! Integration tests never call the real apt tooling. [`TestStage`] builds a
//! throwaway build environment whose `bin/` directory holds stub versions of
//! `apt-get`, `apt-key`, `curl` and `dpkg` that append their argv to a log
//! file, so tests can assert the exact invocation sequence.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Command for the aptpack binary
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
#[allow(dead_code)]
pub fn aptpack_cmd() -> Command {
    Command::cargo_bin("aptpack").unwrap()
}

/// A fake build environment with stubbed external tools
#[allow(dead_code)]
pub struct TestStage {
    /// Temporary directory backing all the paths below
    pub temp: TempDir,
    /// Application directory (holds apt.yml)
    pub build_dir: PathBuf,
    /// Build cache directory
    pub cache_dir: PathBuf,
    /// Dependency root directory
    pub deps_dir: PathBuf,
    /// Stub tool directory, prepended to PATH
    pub bin_dir: PathBuf,
    /// Invocation log appended to by every stub tool
    pub log_file: PathBuf,
}

#[allow(dead_code)]
impl TestStage {
    /// Create a new stage with logging stubs for all four tools
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let build_dir = temp.path().join("build");
        let cache_dir = temp.path().join("cache");
        let deps_dir = temp.path().join("deps");
        let bin_dir = temp.path().join("bin");
        let log_file = temp.path().join("invocations.log");

        for dir in [&build_dir, &cache_dir, &deps_dir, &bin_dir] {
            fs::create_dir_all(dir).expect("Failed to create directory");
        }

        let stage = Self {
            temp,
            build_dir,
            cache_dir,
            deps_dir,
            bin_dir,
            log_file,
        };
        stage.stub_logging_tools();
        stage.seed_templates();
        stage
    }

    /// Write apt.yml into the build directory
    pub fn write_manifest(&self, content: &str) {
        fs::write(self.build_dir.join("apt.yml"), content).expect("Failed to write manifest");
    }

    /// Replace a stub with one that fails, printing `message` on stderr
    pub fn stub_failing(&self, tool: &str, message: &str) {
        let script = format!("#!/bin/sh\necho '{}' >&2\nexit 1\n", message);
        self.write_stub(tool, &script);
    }

    /// Command for `aptpack supply` wired to this stage's directories and stubs
    pub fn supply_cmd(&self) -> Command {
        let mut cmd = aptpack_cmd();
        cmd.arg("supply")
            .arg(&self.build_dir)
            .arg(&self.cache_dir)
            .arg(&self.deps_dir)
            .arg("0")
            .arg("--sources-template")
            .arg(self.sources_template())
            .arg("--keyring-template")
            .arg(self.keyring_template())
            .env("PATH", self.stub_path());
        cmd
    }

    /// PATH with the stub tool directory in front
    pub fn stub_path(&self) -> String {
        let current = std::env::var("PATH").unwrap_or_default();
        format!("{}:{}", self.bin_dir.display(), current)
    }

    /// Full invocation log, one line per stubbed tool call
    pub fn invocations(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }

    /// Seed file handed to --sources-template
    pub fn sources_template(&self) -> PathBuf {
        self.temp.path().join("sources.list")
    }

    /// Seed file handed to --keyring-template
    pub fn keyring_template(&self) -> PathBuf {
        self.temp.path().join("trusted.gpg")
    }

    /// Private sources list inside the cache
    pub fn cached_sources_list(&self) -> PathBuf {
        self.cache_dir.join("apt/sources/sources.list")
    }

    /// Archive cache directory inside the private environment
    pub fn archives_dir(&self) -> PathBuf {
        self.cache_dir.join("apt/cache/archives")
    }

    /// Directory packages are extracted into
    pub fn install_dir(&self) -> PathBuf {
        self.deps_dir.join("0").join("apt")
    }

    /// Launch environment script written by supply
    pub fn profile_script(&self) -> PathBuf {
        self.deps_dir.join("0").join("profile.d").join("000_apt.sh")
    }

    /// Drop a fake .deb into the archive cache, as if downloaded earlier
    pub fn seed_archive(&self, name: &str) {
        let dir = self.archives_dir();
        fs::create_dir_all(&dir).expect("Failed to create archives directory");
        fs::write(dir.join(name), b"fake deb contents").expect("Failed to write archive");
    }

    fn stub_logging_tools(&self) {
        // apt-get echoes a recognizable line so verbose output is observable
        self.write_stub(
            "apt-get",
            &format!(
                "#!/bin/sh\nprintf '%s\\n' \"apt-get $*\" >> '{}'\necho 'Reading package lists...'\n",
                self.log_file.display()
            ),
        );
        for tool in ["apt-key", "dpkg"] {
            self.write_stub(
                tool,
                &format!(
                    "#!/bin/sh\nprintf '%s\\n' \"{} $*\" >> '{}'\n",
                    tool,
                    self.log_file.display()
                ),
            );
        }
        // curl creates its -o target so the install phase sees the download
        self.write_stub(
            "curl",
            &format!(
                "#!/bin/sh\n\
                 printf '%s\\n' \"curl $*\" >> '{}'\n\
                 target=\"\"\n\
                 prev=\"\"\n\
                 for arg in \"$@\"; do\n\
                 \t[ \"$prev\" = \"-o\" ] && target=\"$arg\"\n\
                 \tprev=\"$arg\"\n\
                 done\n\
                 [ -n \"$target\" ] && : > \"$target\"\n\
                 exit 0\n",
                self.log_file.display()
            ),
        );
    }

    fn seed_templates(&self) {
        fs::write(
            self.sources_template(),
            "deb http://archive.ubuntu.com/ubuntu jammy main\n",
        )
        .expect("Failed to write sources template");
        fs::write(self.keyring_template(), b"fake keyring contents")
            .expect("Failed to write keyring template");
    }

    fn write_stub(&self, name: &str, script: &str) {
        let path = self.bin_dir.join(name);
        fs::write(&path, script).expect("Failed to write stub tool");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("Failed to mark stub executable");
        }
    }
}

impl Default for TestStage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_creation() {
        let stage = TestStage::new();
        assert!(stage.build_dir.exists());
        assert!(stage.bin_dir.join("apt-get").exists());
        assert!(stage.sources_template().exists());
    }

    #[test]
    fn test_stage_manifest_write() {
        let stage = TestStage::new();
        stage.write_manifest("packages:\n- jq\n");
        assert!(stage.build_dir.join("apt.yml").exists());
    }
}
