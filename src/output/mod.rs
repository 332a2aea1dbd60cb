//! Terminal output formatting
//!
//! Display utilities for CLI results, pretty-printing and diagnostics.

pub mod display;
pub mod formatters;
pub mod log;

pub use display::{print_compact, print_detailed, print_solve_report};
