//! External process execution

use std::path::Path;
use std::process::Command;

use crate::error::{Result, tool};

/// Executes an external program and captures its output
///
/// The single seam through which every apt-key, apt-get, curl and dpkg
/// invocation flows; tests substitute a recording implementation.
pub trait CommandRunner {
    /// Run `program` with `args` from working directory `dir`,
    /// returning captured stdout
    fn output(&self, dir: &Path, program: &str, args: &[String]) -> Result<String>;
}

/// Runs programs as real child processes
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn output(&self, dir: &Path, program: &str, args: &[String]) -> Result<String> {
        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| tool::unavailable(program, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = if stderr.trim().is_empty() {
                // Some tools report failures on stdout only
                let stdout = String::from_utf8_lossy(&output.stdout);
                if stdout.trim().is_empty() {
                    output.status.to_string()
                } else {
                    stdout.trim().to_string()
                }
            } else {
                stderr.trim().to_string()
            };
            return Err(tool::command_failed(program, reason));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
