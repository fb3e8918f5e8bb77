//! Package manifest (apt.yml) data structures

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AptpackError, Result, manifest};

/// File name of the package manifest inside the build directory
pub const MANIFEST_FILE: &str = "apt.yml";

/// Package manifest from apt.yml
///
/// All fields are optional lists; an absent or empty manifest is valid and
/// simply declares nothing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Manifest {
    /// URLs of GPG keys fetched into the private keyring
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keys: Vec<String>,

    /// Raw `apt-key adv` argument lines, run before any key fetches
    /// (e.g. "--keyserver hkp://keyserver.example --recv-keys ABCDEF")
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gpg_advanced_options: Vec<String>,

    /// Repository source lines appended to the private sources list
    #[serde(default, deserialize_with = "null_as_empty")]
    pub repos: Vec<String>,

    /// Package names to install, or direct URLs to .deb files
    #[serde(default, deserialize_with = "null_as_empty")]
    pub packages: Vec<String>,
}

/// Accepts an explicit `key:` with no value as an empty list
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

impl Manifest {
    /// Load a manifest from disk
    ///
    /// A missing file yields the empty manifest; only unreadable or
    /// malformed content is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| manifest::read_failed(path.display().to_string(), e.to_string()))?;

        Self::from_yaml(&content).map_err(|e| match e {
            AptpackError::ManifestParseFailed { reason, .. } => {
                manifest::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Parse a manifest from a YAML string
    ///
    /// Empty and null documents are valid empty manifests.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        if value.is_null() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_value(value)?)
    }

    /// True when the manifest declares nothing at all
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
            && self.gpg_advanced_options.is_empty()
            && self.repos.is_empty()
            && self.packages.is_empty()
    }

    /// True when any apt-key work is configured (key URLs or advanced options)
    pub fn has_keys(&self) -> bool {
        !self.keys.is_empty() || !self.gpg_advanced_options.is_empty()
    }

    /// True when repository source lines are configured
    pub fn has_repos(&self) -> bool {
        !self.repos.is_empty()
    }

    /// True when packages are configured
    pub fn has_packages(&self) -> bool {
        !self.packages.is_empty()
    }
}
