//! Work distribution
//!
//! Two fan-out patterns share one bounded rayon pool:
//! - validation fan-out: the distinct candidate words of a batch are validated
//!   by the pool and accepted words are folded into the shared aggregator;
//! - enumeration fan-out: each root cell's subtree is one job with private
//!   search state, returning its own [`WordMap`]; the partial maps are reduced
//!   into one and handed to the aggregator after all jobs finish.
//!
//! With a single thread no pool is built and both run on the caller's thread.

use super::SearchError;
use super::aggregator::{ResultAggregator, WordMap};
use super::config::SearchConfig;
use super::enumerator::{Candidate, CandidateBatch, PathEnumerator};
use crate::core::{PathRecord, Position};
use crate::output::log;
use crate::validator::{Verdict, WordValidator};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Counters for one validation pass
///
/// In batch mode `checked` counts distinct words; in inline mode it counts
/// every candidate, so a word reached by several paths is checked each time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationStats {
    /// Candidates produced by the search, one per path
    pub candidates: usize,
    /// Distinct candidate texts (batch mode only)
    pub unique_candidates: Option<usize>,
    pub checked: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub timed_out: usize,
    /// Jobs dropped because the run was interrupted (words or root cells)
    pub skipped: usize,
}

#[derive(Default)]
struct Counters {
    candidates: AtomicUsize,
    checked: AtomicUsize,
    accepted: AtomicUsize,
    rejected: AtomicUsize,
    timed_out: AtomicUsize,
    skipped: AtomicUsize,
}

impl Counters {
    fn count(&self, verdict: Verdict) {
        self.checked.fetch_add(1, Ordering::Relaxed);
        let slot = match verdict {
            Verdict::Accepted => &self.accepted,
            Verdict::Rejected => &self.rejected,
            Verdict::Timeout => &self.timed_out,
        };
        slot.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self, unique_candidates: Option<usize>) -> ValidationStats {
        ValidationStats {
            candidates: self.candidates.load(Ordering::Relaxed),
            unique_candidates,
            checked: self.checked.load(Ordering::Relaxed),
            accepted: self.accepted.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            timed_out: self.timed_out.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
        }
    }
}

/// Bounded worker pool plus the run's shared diagnostics
pub struct ConcurrencyController {
    pool: Option<rayon::ThreadPool>,
    threads: usize,
    interrupt: Arc<AtomicBool>,
    calls: AtomicUsize,
    verbose: bool,
    show_progress: bool,
}

impl ConcurrencyController {
    /// Build a controller for `config.threads()` workers
    ///
    /// # Errors
    ///
    /// Returns `SearchError::ThreadPool` if the worker threads cannot be spawned.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let threads = config.threads();
        let pool = if threads > 1 {
            Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("squares-worker-{i}"))
                    .build()?,
            )
        } else {
            None
        };

        Ok(Self {
            pool,
            threads,
            interrupt: Arc::new(AtomicBool::new(false)),
            calls: AtomicUsize::new(0),
            verbose: config.verbose(),
            show_progress: config.show_progress(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn threads(&self) -> usize {
        self.threads
    }

    /// Flag that stops the run when set to `true`
    ///
    /// Jobs already running finish normally; jobs not yet started are skipped.
    #[must_use]
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupt)
    }

    pub fn interrupt(&self) {
        self.interrupt.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_interrupted(&self) -> bool {
        self.interrupt.load(Ordering::Relaxed)
    }

    /// Validation calls issued since the controller was created
    #[must_use]
    pub fn calls_issued(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    fn check<V>(&self, validator: &V, word: &str) -> Verdict
    where
        V: WordValidator + ?Sized,
    {
        let call = self.calls.fetch_add(1, Ordering::Relaxed) + 1;
        let verdict = validator.validate(word);
        if self.verbose {
            log::trace(&format!("calls: {call}, checking: {word}, {verdict}"));
        }
        verdict
    }

    /// Validate every distinct word of `batch` and record the accepted ones
    ///
    /// All paths of an accepted word are recorded together.
    pub fn validate_batch<V>(
        &self,
        batch: CandidateBatch,
        validator: &V,
        aggregator: &ResultAggregator,
    ) -> ValidationStats
    where
        V: WordValidator + ?Sized,
    {
        let counters = Counters::default();
        counters
            .candidates
            .store(batch.emitted(), Ordering::Relaxed);
        let unique = batch.unique_words();
        let progress = self.progress_bar(unique);

        let validate_one = |(word, paths): (String, Vec<PathRecord>)| {
            if self.is_interrupted() {
                counters.skipped.fetch_add(1, Ordering::Relaxed);
                return;
            }
            let verdict = self.check(validator, &word);
            counters.count(verdict);
            if verdict.is_accepted() {
                if self.verbose {
                    log::trace(&format!("Added word {word} ({} paths)", paths.len()));
                }
                aggregator.record_all(&word, paths);
            }
            progress.inc(1);
        };

        let words = batch.into_sorted();
        match &self.pool {
            Some(pool) => pool.install(|| words.into_par_iter().for_each(validate_one)),
            None => words.into_iter().for_each(validate_one),
        }

        progress.finish_and_clear();
        counters.snapshot(Some(unique))
    }

    /// Search every root with inline validation and merge the results
    pub fn enumerate_inline<V>(
        &self,
        enumerator: &PathEnumerator<'_>,
        validator: &V,
        aggregator: &ResultAggregator,
    ) -> ValidationStats
    where
        V: WordValidator + ?Sized,
    {
        let counters = Counters::default();
        let roots: Vec<Position> = enumerator.grid().positions().collect();

        let search_root = |root: Position| -> WordMap {
            let mut found = WordMap::default();
            if self.is_interrupted() {
                counters.skipped.fetch_add(1, Ordering::Relaxed);
                return found;
            }
            let mut emitted = 0;
            enumerator.walk_root(root, &mut |candidate: &Candidate<'_>| {
                emitted += 1;
                let verdict = self.check(validator, candidate.text());
                counters.count(verdict);
                if verdict.is_accepted() {
                    let record = candidate.to_record();
                    if self.verbose {
                        log::trace(&format!(
                            "Added word {} with path {record}",
                            candidate.text()
                        ));
                    }
                    found.insert(candidate.text(), record);
                }
            });
            counters.candidates.fetch_add(emitted, Ordering::Relaxed);
            found
        };

        match &self.pool {
            Some(pool) => {
                let merged = pool.install(|| {
                    roots
                        .into_par_iter()
                        .map(search_root)
                        .reduce(WordMap::default, WordMap::merge)
                });
                aggregator.absorb(merged);
            }
            None => {
                for root in roots {
                    aggregator.absorb(search_root(root));
                }
            }
        }

        counters.snapshot(None)
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) checking words")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    }
}
