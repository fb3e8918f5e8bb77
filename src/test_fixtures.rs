//! Test fixtures shared by the unit test modules.
//!
//! The central piece is [`RecordingRunner`], a [`CommandRunner`] double
//! that records every invocation instead of spawning processes, so tests
//! can assert the exact program, argument vector and working directory of
//! each external call.
//!
//! # Usage
//!
//! ```ignore
//! let runner = RecordingRunner::new();
//! runner.push_result(Ok("tool output".to_string()));
//!
//! let apt = Apt::new(&runner, &manifest, &cache, &install);
//! apt.update()?;
//!
//! assert_eq!(runner.calls()[0].program, "apt-get");
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use crate::apt::Templates;
use crate::error::Result;
use crate::runner::CommandRunner;

/// One recorded external invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub dir: PathBuf,
    pub program: String,
    pub args: Vec<String>,
}

/// A [`CommandRunner`] that records invocations instead of spawning
///
/// Canned results are consumed in FIFO order; once exhausted, every
/// further invocation succeeds with empty output.
#[derive(Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<Invocation>>,
    results: RefCell<VecDeque<Result<String>>>,
}

impl RecordingRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a canned result for the next invocation
    pub fn push_result(&self, result: Result<String>) {
        self.results.borrow_mut().push_back(result);
    }

    /// All invocations recorded so far
    #[must_use]
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    /// Number of invocations recorded so far
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl CommandRunner for RecordingRunner {
    fn output(&self, dir: &Path, program: &str, args: &[String]) -> Result<String> {
        self.calls.borrow_mut().push(Invocation {
            dir: dir.to_path_buf(),
            program: program.to_string(),
            args: args.to_vec(),
        });
        self.results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

/// Write a sources-list and keyring template pair under `dir`
///
/// # Panics
///
/// Panics if the files cannot be written.
#[must_use]
pub fn seed_templates(dir: &Path) -> Templates {
    let sources_list = dir.join("sources.list.template");
    let trusted_gpg = dir.join("trusted.gpg.template");
    fs::write(
        &sources_list,
        "deb http://archive.ubuntu.com/ubuntu jammy main\n",
    )
    .expect("Failed to write sources template");
    fs::write(&trusted_gpg, b"fake keyring contents")
        .expect("Failed to write keyring template");
    Templates {
        sources_list,
        trusted_gpg,
    }
}
