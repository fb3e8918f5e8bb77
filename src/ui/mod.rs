//! Terminal output for build logs
//!
//! Buildpack logs are line-oriented: one `----->` header per step and
//! indented detail lines beneath it. Styling degrades to plain text when
//! stdout is not a terminal.

use console::Style;

/// Print a step header line
pub fn step(message: &str) {
    println!(
        "{} {}",
        Style::new().cyan().bold().apply_to("----->"),
        message
    );
}

/// Print an indented detail line under the current step
pub fn info(message: &str) {
    println!("       {}", message);
}

/// Print an indented warning line
pub fn warn(message: &str) {
    println!("       {}", Style::new().yellow().apply_to(message));
}

/// Print an error line to stderr
pub fn error(message: &str) {
    eprintln!("{}", Style::new().red().bold().apply_to(message));
}
