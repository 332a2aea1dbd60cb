//! Diagnostic messages on stderr
//!
//! Results go to stdout; everything about how a run went goes here so the two
//! streams can be redirected separately.

use colored::Colorize;

/// Something was corrected or skipped but the run continues
pub fn warn(message: &str) {
    eprintln!("{} {message}", "warning:".yellow().bold());
}

/// Run-level progress, e.g. phase changes
pub fn info(message: &str) {
    eprintln!("{} {message}", "info:".cyan());
}

/// Per-candidate detail, printed only for verbose runs
pub fn trace(message: &str) {
    eprintln!("{}", message.bright_black());
}
