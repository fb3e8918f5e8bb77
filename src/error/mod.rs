//! Error types and handling for aptpack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`manifest`]: `apt.yml` parsing errors
//! - [`tool`]: External tool invocation errors
//! - [`fs`]: File system errors
//! - [`cache`]: Cache and build-state errors

#![allow(dead_code, unused_assignments)]

// Declare submodules
pub mod cache;
pub mod fs;
pub mod manifest;
pub mod tool;

// Re-export convenience constructors from submodules
#[allow(unused_imports)]
pub use cache::{operation_failed as cache_operation_failed, state_invalid as cache_state_invalid};
#[allow(unused_imports)]
pub use fs::{
    copy_failed as file_copy_failed, io_error, not_found as file_not_found,
    read_failed as file_read_failed, write_failed as file_write_failed,
};
#[allow(unused_imports)]
pub use manifest::{parse_failed as manifest_parse_failed, read_failed as manifest_read_failed};
#[allow(unused_imports)]
pub use tool::{command_failed, unavailable as command_unavailable};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for aptpack operations
#[derive(Error, Diagnostic, Debug)]
pub enum AptpackError {
    // Manifest errors
    #[error("Failed to parse manifest: {path}")]
    #[diagnostic(
        code(aptpack::manifest::parse_failed),
        help("Check the YAML syntax; keys, repos and packages must be lists of strings")
    )]
    ManifestParseFailed { path: String, reason: String },

    #[error("Failed to read manifest: {path}")]
    #[diagnostic(code(aptpack::manifest::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    // External tool errors
    #[error("'{program}' failed: {reason}")]
    #[diagnostic(code(aptpack::tool::command_failed))]
    CommandFailed { program: String, reason: String },

    #[error("Failed to start '{program}': {reason}")]
    #[diagnostic(
        code(aptpack::tool::unavailable),
        help("Ensure apt-get, apt-key, curl and dpkg are installed and on PATH")
    )]
    CommandUnavailable { program: String, reason: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(aptpack::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(aptpack::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(aptpack::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to copy {from} to {to}: {reason}")]
    #[diagnostic(code(aptpack::fs::copy_failed))]
    FileCopyFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(aptpack::fs::io_error))]
    IoError { message: String },

    // Cache errors
    #[error("Cache operation failed: {message}")]
    #[diagnostic(code(aptpack::cache::operation_failed))]
    CacheOperationFailed { message: String },

    #[error("Invalid cache state file: {path}")]
    #[diagnostic(
        code(aptpack::cache::state_invalid),
        help("Delete the file to start from a clean cache")
    )]
    CacheStateInvalid { path: String, reason: String },
}

impl From<std::io::Error> for AptpackError {
    fn from(err: std::io::Error) -> Self {
        AptpackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AptpackError {
    fn from(err: serde_yaml::Error) -> Self {
        AptpackError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AptpackError {
    fn from(err: serde_json::Error) -> Self {
        AptpackError::CacheStateInvalid {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for AptpackError {
    fn from(err: inquire::InquireError) -> Self {
        AptpackError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AptpackError>;
