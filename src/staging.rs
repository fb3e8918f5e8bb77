//! Build stage layout and launch environment
//!
//! A supply run operates on the four locations the build phase hands
//! over: the application build dir (holding apt.yml), the cache persisted
//! between builds, and the deps dir / index that installed packages land
//! in. The profile.d script written here points the launch environment at
//! the extracted trees.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, fs as fs_error};
use crate::manifest::MANIFEST_FILE;

/// Name of the launch environment script under profile.d
pub const PROFILE_SCRIPT: &str = "000_apt.sh";

/// Subdirectory of the deps index that packages are extracted into
pub const INSTALL_SUBDIR: &str = "apt";

/// Subdirectories of the install dir added to PATH
const BIN_SUBDIRS: &[&str] = &["usr/bin", "usr/sbin"];

/// Subdirectories added to the library search paths
const LIB_SUBDIRS: &[&str] = &[
    "lib/x86_64-linux-gnu",
    "lib/i386-linux-gnu",
    "usr/lib/x86_64-linux-gnu",
    "usr/lib/i386-linux-gnu",
    "usr/lib",
];

/// Subdirectories added to the include search paths
const INCLUDE_SUBDIRS: &[&str] = &["usr/include", "usr/include/x86_64-linux-gnu"];

/// Subdirectories added to PKG_CONFIG_PATH
const PKG_CONFIG_SUBDIRS: &[&str] = &[
    "usr/lib/x86_64-linux-gnu/pkgconfig",
    "usr/lib/i386-linux-gnu/pkgconfig",
    "usr/lib/pkgconfig",
];

/// Directories of one supply invocation
#[derive(Debug, Clone)]
pub struct Stage {
    /// Application source being built
    pub build_dir: PathBuf,
    /// Cache persisted between builds
    pub cache_dir: PathBuf,
    /// Root for dependencies supplied to later phases
    pub deps_dir: PathBuf,
    /// Index of this buildpack within the deps dir
    pub deps_idx: String,
}

impl Stage {
    pub fn new(build_dir: &Path, cache_dir: &Path, deps_dir: &Path, deps_idx: &str) -> Self {
        Self {
            build_dir: build_dir.to_path_buf(),
            cache_dir: cache_dir.to_path_buf(),
            deps_dir: deps_dir.to_path_buf(),
            deps_idx: deps_idx.to_string(),
        }
    }

    /// Path of the package manifest inside the build dir
    pub fn manifest_path(&self) -> PathBuf {
        self.build_dir.join(MANIFEST_FILE)
    }

    /// Directory packages are extracted into
    pub fn install_dir(&self) -> PathBuf {
        self.deps_dir.join(&self.deps_idx).join(INSTALL_SUBDIR)
    }

    /// Directory of launch environment scripts for this deps index
    pub fn profile_d_dir(&self) -> PathBuf {
        self.deps_dir.join(&self.deps_idx).join("profile.d")
    }

    /// Write the launch environment script for the extracted packages
    ///
    /// Returns the path of the written script.
    pub fn write_profile_script(&self) -> Result<PathBuf> {
        let dir = self.profile_d_dir();
        fs::create_dir_all(&dir)
            .map_err(|e| fs_error::write_failed(dir.display().to_string(), e.to_string()))?;

        let path = dir.join(PROFILE_SCRIPT);
        fs::write(&path, profile_script(&self.install_dir()))
            .map_err(|e| fs_error::write_failed(path.display().to_string(), e.to_string()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .map_err(|e| fs_error::write_failed(path.display().to_string(), e.to_string()))?;
        }

        Ok(path)
    }
}

/// Shell exports pointing the launch environment at `install_dir`
pub fn profile_script(install_dir: &Path) -> String {
    let join = |subdirs: &[&str]| {
        subdirs
            .iter()
            .map(|sub| format!("{}/{}", install_dir.display(), sub))
            .collect::<Vec<_>>()
            .join(":")
    };

    let bins = join(BIN_SUBDIRS);
    let libs = join(LIB_SUBDIRS);
    let includes = join(INCLUDE_SUBDIRS);
    let pkg_config = join(PKG_CONFIG_SUBDIRS);

    format!(
        "export PATH=\"$PATH:{bins}\"\n\
         export LD_LIBRARY_PATH=\"$LD_LIBRARY_PATH:{libs}\"\n\
         export LIBRARY_PATH=\"$LIBRARY_PATH:{libs}\"\n\
         export INCLUDE_PATH=\"$INCLUDE_PATH:{includes}\"\n\
         export CPATH=\"$CPATH:{includes}\"\n\
         export CPPPATH=\"$CPPPATH:{includes}\"\n\
         export PKG_CONFIG_PATH=\"$PKG_CONFIG_PATH:{pkg_config}\"\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_paths() {
        let stage = Stage::new(
            Path::new("/tmp/build"),
            Path::new("/tmp/cache"),
            Path::new("/tmp/deps"),
            "0",
        );
        assert_eq!(stage.manifest_path(), Path::new("/tmp/build/apt.yml"));
        assert_eq!(stage.install_dir(), Path::new("/tmp/deps/0/apt"));
        assert_eq!(stage.profile_d_dir(), Path::new("/tmp/deps/0/profile.d"));
    }

    #[test]
    fn test_profile_script_exports() {
        let script = profile_script(Path::new("/deps/0/apt"));

        assert!(script.contains("export PATH=\"$PATH:/deps/0/apt/usr/bin:/deps/0/apt/usr/sbin\""));
        assert!(script.contains("export LD_LIBRARY_PATH="));
        assert!(script.contains("/deps/0/apt/usr/lib/x86_64-linux-gnu"));
        assert!(script.contains("export LIBRARY_PATH="));
        assert!(script.contains("export INCLUDE_PATH="));
        assert!(script.contains("/deps/0/apt/usr/include"));
        assert!(script.contains("export CPATH="));
        assert!(script.contains("export CPPPATH="));
        assert!(
            script.contains("export PKG_CONFIG_PATH=\"$PKG_CONFIG_PATH:/deps/0/apt/usr/lib/x86_64-linux-gnu/pkgconfig")
        );
    }

    #[test]
    fn test_write_profile_script() {
        let temp = tempfile::tempdir().unwrap();
        let stage = Stage::new(
            &temp.path().join("build"),
            &temp.path().join("cache"),
            &temp.path().join("deps"),
            "7",
        );

        let path = stage.write_profile_script().unwrap();

        assert_eq!(path, temp.path().join("deps/7/profile.d/000_apt.sh"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("deps/7/apt/usr/bin"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }
    }
}
