//! Cache and build-state errors

use super::AptpackError;

/// Creates a cache operation failed error
pub fn operation_failed(message: impl Into<String>) -> AptpackError {
    AptpackError::CacheOperationFailed {
        message: message.into(),
    }
}

/// Creates an invalid cache state error
pub fn state_invalid(path: impl Into<String>, reason: impl Into<String>) -> AptpackError {
    AptpackError::CacheStateInvalid {
        path: path.into(),
        reason: reason.into(),
    }
}
