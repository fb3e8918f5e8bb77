//! File system errors

use super::AptpackError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> AptpackError {
    AptpackError::FileNotFound { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> AptpackError {
    AptpackError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> AptpackError {
    AptpackError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file copy failed error
pub fn copy_failed(
    from: impl Into<String>,
    to: impl Into<String>,
    reason: impl Into<String>,
) -> AptpackError {
    AptpackError::FileCopyFailed {
        from: from.into(),
        to: to.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> AptpackError {
    AptpackError::IoError {
        message: message.into(),
    }
}
