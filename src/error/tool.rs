//! External tool invocation errors

use super::AptpackError;

/// Creates a command failed error carrying the tool's own error output
pub fn command_failed(program: impl Into<String>, reason: impl Into<String>) -> AptpackError {
    AptpackError::CommandFailed {
        program: program.into(),
        reason: reason.into(),
    }
}

/// Creates an error for a tool that could not be spawned at all
pub fn unavailable(program: impl Into<String>, reason: impl Into<String>) -> AptpackError {
    AptpackError::CommandUnavailable {
        program: program.into(),
        reason: reason.into(),
    }
}
