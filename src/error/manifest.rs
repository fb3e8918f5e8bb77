//! Manifest (`apt.yml`) errors

use super::AptpackError;

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> AptpackError {
    AptpackError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> AptpackError {
    AptpackError::ManifestReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
