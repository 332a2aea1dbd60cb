//! Grid search
//!
//! Path enumeration, validation dispatch and result aggregation.

pub mod aggregator;
pub mod config;
pub mod controller;
mod engine;
pub mod enumerator;

pub use aggregator::{ResultAggregator, WordEntry, WordMap, WordsByLength};
pub use config::{ConfigWarning, DEFAULT_MAX_DEPTH, MIN_WORD_LEN, Mode, SearchConfig};
pub use controller::{ConcurrencyController, ValidationStats};
pub use engine::{Phase, SearchOutcome, Solver};
pub use enumerator::{Candidate, CandidateBatch, PathEnumerator};

/// Error type for search setup
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
