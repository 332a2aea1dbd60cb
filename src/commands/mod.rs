//! Command implementations

pub mod solve;

pub use solve::{SolveReport, solve_grid};
