//! Grid solving command
//!
//! Runs one timed search over a grid and returns the report to display.

use crate::core::Grid;
use crate::search::{SearchConfig, SearchError, SearchOutcome, Solver};
use crate::validator::WordValidator;
use std::time::{Duration, Instant};

/// Result of solving a grid
#[derive(Debug)]
pub struct SolveReport {
    pub outcome: SearchOutcome,
    pub duration: Duration,
    pub min_word_len: usize,
    pub max_depth: usize,
}

/// Solve `grid` with the given configuration and validator
///
/// # Errors
///
/// Returns an error if the worker pool cannot be built.
pub fn solve_grid<V>(
    grid: &Grid,
    config: &SearchConfig,
    validator: &V,
) -> Result<SolveReport, SearchError>
where
    V: WordValidator + ?Sized,
{
    let start = Instant::now();
    let outcome = Solver::new(grid, config, validator)?.run();

    Ok(SolveReport {
        outcome,
        duration: start.elapsed(),
        min_word_len: config.min_word_len(),
        max_depth: config.max_depth(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::search::Mode;
    use crate::validator::OfflineValidator;

    #[test]
    fn solve_reports_configured_bounds() {
        let grid = Grid::new(&["eipa", "quen", "escs", "hseh"]).unwrap();
        let config = SearchConfig::new(3).with_mode(Mode::Batch);
        let validator = OfflineValidator::new(Dictionary::from_words(["uses", "pens"]));

        let report = solve_grid(&grid, &config, &validator).unwrap();
        assert_eq!(report.min_word_len, 4);
        assert_eq!(report.max_depth, 4);
        assert_eq!(report.outcome.words.total_words(), 2);
        assert_eq!(report.outcome.words.total_paths(), 5);
    }

    #[test]
    fn solve_with_embedded_dictionary() {
        let grid = Grid::new(&["ourb", "isfo", "ndaa", "gwrg"]).unwrap();
        let config = SearchConfig::new(5).with_threads(2);
        let validator = OfflineValidator::new(Dictionary::embedded());

        let report = solve_grid(&grid, &config, &validator).unwrap();
        let words = &report.outcome.words;
        assert!(words.contains("road"));
        assert!(words.contains("dawn"));
        assert!(words.entries().all(|e| (4..=5).contains(&e.len())));
    }
}
