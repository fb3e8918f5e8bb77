//! Spinner display for long-running tool invocations

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while an external tool runs
///
/// Hidden automatically when stderr is not a terminal, so CI build logs
/// stay clean.
pub struct StepProgress {
    spinner: ProgressBar,
}

impl StepProgress {
    /// Start a spinner with the given message
    pub fn start(message: &str) -> Self {
        let style = ProgressStyle::default_spinner()
            .template("       {spinner:.cyan} {msg}")
            .unwrap();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(120));

        Self { spinner }
    }

    /// Stop the spinner, clearing its line
    pub fn finish(self) {
        self.spinner.finish_and_clear();
    }

    /// Abandon on error, leaving the message visible
    pub fn abandon(self) {
        self.spinner.abandon();
    }
}
