//! Main search interface
//!
//! Drives one run through `Idle → Enumerating → Validating → Finalized`.
//! Inline runs validate while enumerating and go straight to `Finalized`;
//! batch runs keep the two phases strictly apart.

use super::SearchError;
use super::aggregator::{ResultAggregator, WordsByLength};
use super::config::{Mode, SearchConfig};
use super::controller::{ConcurrencyController, ValidationStats};
use super::enumerator::PathEnumerator;
use crate::core::Grid;
use crate::output::log;
use crate::validator::WordValidator;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Lifecycle of a search run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Enumerating,
    Validating,
    Finalized,
}

impl Phase {
    /// Whether `next` may directly follow this phase
    #[must_use]
    pub const fn can_advance_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Enumerating)
                | (Self::Enumerating, Self::Validating | Self::Finalized)
                | (Self::Validating, Self::Finalized)
                | (Self::Finalized, Self::Idle)
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Enumerating => "enumerating",
            Self::Validating => "validating",
            Self::Finalized => "finalized",
        };
        f.write_str(name)
    }
}

/// Everything a finished run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub words: WordsByLength,
    pub stats: ValidationStats,
    /// True if the run was interrupted and some work was skipped
    pub interrupted: bool,
}

/// Main word-grid solver
///
/// Coordinates enumeration, validation and aggregation for one grid.
pub struct Solver<'a, V: WordValidator + ?Sized> {
    grid: &'a Grid,
    config: &'a SearchConfig,
    validator: &'a V,
    controller: ConcurrencyController,
    phase: Phase,
}

impl<'a, V: WordValidator + ?Sized> Solver<'a, V> {
    /// Create a solver for `grid`
    ///
    /// # Errors
    ///
    /// Returns `SearchError::ThreadPool` if the worker pool cannot be built.
    pub fn new(
        grid: &'a Grid,
        config: &'a SearchConfig,
        validator: &'a V,
    ) -> Result<Self, SearchError> {
        Ok(Self {
            grid,
            config,
            validator,
            controller: ConcurrencyController::new(config)?,
            phase: Phase::Idle,
        })
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Flag that stops the current run when set to `true`
    #[must_use]
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        self.controller.interrupt_handle()
    }

    /// Validation calls issued across all runs of this solver
    #[must_use]
    pub fn calls_issued(&self) -> usize {
        self.controller.calls_issued()
    }

    fn advance(&mut self, next: Phase) {
        debug_assert!(
            self.phase.can_advance_to(next),
            "illegal phase change {} -> {next}",
            self.phase
        );
        self.phase = next;
        if self.config.verbose() {
            log::info(&format!("phase: {next}"));
        }
    }

    /// Run a complete search
    ///
    /// # Examples
    /// ```
    /// use word_squares::core::Grid;
    /// use word_squares::dictionary::Dictionary;
    /// use word_squares::search::{SearchConfig, Solver};
    /// use word_squares::validator::OfflineValidator;
    ///
    /// let grid = Grid::new(&["eipa", "quen", "escs", "hseh"]).unwrap();
    /// let config = SearchConfig::new(4);
    /// let validator = OfflineValidator::new(Dictionary::from_words(["uses", "sees"]));
    ///
    /// let mut solver = Solver::new(&grid, &config, &validator).unwrap();
    /// let outcome = solver.run();
    /// assert!(outcome.words.contains("uses"));
    /// assert!(!outcome.words.contains("sees")); // in the dictionary, not on the grid
    /// ```
    pub fn run(&mut self) -> SearchOutcome {
        if self.phase == Phase::Finalized {
            self.advance(Phase::Idle);
        }

        let enumerator = PathEnumerator::new(self.grid, self.config);
        let aggregator = ResultAggregator::new();

        self.advance(Phase::Enumerating);
        let stats = match self.config.mode() {
            Mode::Inline => {
                self.controller
                    .enumerate_inline(&enumerator, self.validator, &aggregator)
            }
            Mode::Batch => {
                let batch = enumerator.collect_batch();
                if self.config.verbose() {
                    log::info(&format!(
                        "{} candidates, {} distinct",
                        batch.emitted(),
                        batch.unique_words()
                    ));
                }
                self.advance(Phase::Validating);
                self.controller
                    .validate_batch(batch, self.validator, &aggregator)
            }
        };

        // Lengths beyond the cell count can never be filled
        let min_len = self.config.min_word_len();
        let max_len = self.config.max_depth().min(self.grid.len()).max(min_len);
        let words = aggregator.finalize(min_len..=max_len);
        self.advance(Phase::Finalized);

        SearchOutcome {
            words,
            stats,
            interrupted: stats.skipped > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PathRecord;
    use crate::dictionary::Dictionary;
    use crate::validator::OfflineValidator;
    use rustc_hash::FxHashSet;
    use std::sync::atomic::Ordering;

    const GRID_ONE: [&str; 4] = ["eipa", "quen", "escs", "hseh"];
    const GRID_TWO: [&str; 4] = ["ourb", "isfo", "ndaa", "gwrg"];

    fn offline(words: &[&str]) -> OfflineValidator {
        OfflineValidator::new(Dictionary::from_words(words))
    }

    fn solve(grid: &[&str], config: &SearchConfig, validator: &OfflineValidator) -> SearchOutcome {
        let grid = Grid::new(grid).unwrap();
        Solver::new(&grid, config, validator).unwrap().run()
    }

    #[test]
    fn untraceable_dictionary_words_are_absent() {
        let outcome = solve(&GRID_ONE, &SearchConfig::new(4), &offline(&["sees", "hens"]));
        assert!(outcome.words.is_empty());
        assert!(outcome.words.words_of_length(4).is_empty());
        assert!(!outcome.interrupted);
    }

    #[test]
    fn traceable_words_are_grouped_by_length() {
        let validator = offline(&["sees", "hens", "pens", "uses", "quip"]);
        let outcome = solve(&GRID_ONE, &SearchConfig::new(4), &validator);

        let fours: Vec<&str> = outcome
            .words
            .words_of_length(4)
            .iter()
            .map(|entry| entry.word())
            .collect();
        assert_eq!(fours, ["pens", "quip", "uses"]);
        assert_eq!(outcome.words.total_paths(), 6);
    }

    #[test]
    fn deep_search_finds_only_traceable_words() {
        let validator = offline(&["bird", "wings", "road", "boar"]);
        let outcome = solve(&GRID_TWO, &SearchConfig::new(8), &validator);

        assert!(!outcome.words.contains("bird"));
        assert!(!outcome.words.contains("wings"));
        assert_eq!(outcome.words.total_words(), 2);
        assert_eq!(outcome.words.get("boar").unwrap().paths().len(), 2);
        assert_eq!(outcome.words.lengths(), 4..=8);
    }

    #[test]
    fn depth_below_minimum_is_corrected_not_fatal() {
        let config = SearchConfig::new(3);
        assert_eq!(config.warnings().len(), 1);

        let outcome = solve(&GRID_ONE, &config, &offline(&["uses"]));
        assert_eq!(outcome.words.lengths(), 4..=4);
        assert!(outcome.words.contains("uses"));
    }

    #[test]
    fn words_and_paths_satisfy_invariants() {
        let grid = Grid::new(&GRID_TWO).unwrap();
        let config = SearchConfig::new(6);
        let validator = OfflineValidator::new(Dictionary::embedded());
        let outcome = Solver::new(&grid, &config, &validator).unwrap().run();

        assert!(!outcome.words.is_empty());
        for entry in outcome.words.entries() {
            assert!((4..=6).contains(&entry.len()));
            assert!(!entry.paths().is_empty());
            for path in entry.paths() {
                let positions = path.trace(&grid).unwrap();
                let distinct: FxHashSet<_> = positions.iter().collect();
                assert_eq!(distinct.len(), positions.len());
                assert!(positions.windows(2).all(|w| w[0].is_adjacent(w[1])));
                assert_eq!(path.spell(&grid).unwrap(), entry.word());
            }
        }
    }

    #[test]
    fn modes_and_thread_counts_agree() {
        let validator = OfflineValidator::new(Dictionary::embedded());
        let reference = solve(&GRID_ONE, &SearchConfig::new(6), &validator).words;

        for mode in [Mode::Inline, Mode::Batch] {
            for threads in [1, 4] {
                let config = SearchConfig::new(6).with_mode(mode).with_threads(threads);
                assert_eq!(
                    solve(&GRID_ONE, &config, &validator).words,
                    reference,
                    "{mode} with {threads} threads"
                );
            }
        }
    }

    #[test]
    fn huge_depth_is_bounded_by_cell_count() {
        let validator = offline(&["aaaa"]);
        let outcome = solve(&["aa", "aa"], &SearchConfig::new(usize::MAX), &validator);
        assert_eq!(outcome.words.lengths(), 4..=4);
        assert_eq!(outcome.words.get("aaaa").unwrap().paths().len(), 24);
    }

    #[test]
    fn dense_grid_keeps_every_path() {
        let rows = ["aaaa"; 4];
        let grid = Grid::new(&rows).unwrap();
        let mut expected = 0;
        PathEnumerator::with_bounds(&grid, 7, 7).walk(|_| expected += 1);

        for mode in [Mode::Batch, Mode::Inline] {
            let config = SearchConfig::new(7).with_min_word_len(7).with_mode(mode);
            let outcome = solve(&rows, &config, &offline(&["aaaaaaa"]));
            assert_eq!(outcome.words.total_words(), 1, "{mode}");
            assert_eq!(outcome.words.total_paths(), expected, "{mode}");
        }
    }

    #[test]
    fn same_word_on_two_paths_is_one_entry() {
        let outcome = solve(&["aa", "aa"], &SearchConfig::new(4), &offline(&["aaaa"]));
        assert_eq!(outcome.words.total_words(), 1);

        let paths: FxHashSet<&PathRecord> =
            outcome.words.get("aaaa").unwrap().paths().iter().collect();
        assert_eq!(paths.len(), 24);
    }

    #[test]
    fn phases_advance_through_a_run() {
        let grid = Grid::new(&GRID_ONE).unwrap();
        let config = SearchConfig::new(4).with_mode(Mode::Batch);
        let validator = offline(&["uses"]);
        let mut solver = Solver::new(&grid, &config, &validator).unwrap();

        assert_eq!(solver.phase(), Phase::Idle);
        let first = solver.run();
        assert_eq!(solver.phase(), Phase::Finalized);

        // A second run starts over and produces the same result
        let second = solver.run();
        assert_eq!(first, second);
        assert_eq!(solver.calls_issued(), 2 * 921);
    }

    #[test]
    fn phase_transitions() {
        assert!(Phase::Idle.can_advance_to(Phase::Enumerating));
        assert!(Phase::Enumerating.can_advance_to(Phase::Validating));
        assert!(Phase::Enumerating.can_advance_to(Phase::Finalized));
        assert!(Phase::Validating.can_advance_to(Phase::Finalized));
        assert!(!Phase::Idle.can_advance_to(Phase::Finalized));
        assert!(!Phase::Validating.can_advance_to(Phase::Enumerating));
    }

    #[test]
    fn interrupted_run_reports_partial_result() {
        let grid = Grid::new(&GRID_ONE).unwrap();
        let config = SearchConfig::new(4);
        let validator = offline(&["uses"]);
        let mut solver = Solver::new(&grid, &config, &validator).unwrap();
        solver.interrupt_handle().store(true, Ordering::Relaxed);

        let outcome = solver.run();
        assert!(outcome.interrupted);
        assert!(outcome.words.is_empty());
        assert_eq!(outcome.stats.skipped, 16);
    }
}
