//! Search configuration
//!
//! Out-of-range settings are corrected rather than rejected; every correction
//! is kept as a [`ConfigWarning`] so the caller can report it.

use std::fmt;

/// Shortest word reported by default
pub const MIN_WORD_LEN: usize = 4;

/// Longest path explored by default
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Worker count by default (fully sequential)
pub const DEFAULT_THREADS: usize = 1;

/// When candidates are validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Validate each candidate as soon as the search produces it
    #[default]
    Inline,
    /// Enumerate everything first, deduplicate by text, then validate
    Batch,
}

impl Mode {
    /// Create mode from name string
    ///
    /// Supported names: "inline", "batch". Defaults to inline if the name is
    /// unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "batch" | "deferred" => Self::Batch,
            _ => Self::Inline,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline => f.write_str("inline"),
            Self::Batch => f.write_str("batch"),
        }
    }
}

/// A setting that was adjusted to keep the search well defined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigWarning {
    MinWordLenRaised { requested: usize, applied: usize },
    MaxDepthRaised { requested: usize, applied: usize },
    ThreadsRaised { requested: usize, applied: usize },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinWordLenRaised { requested, applied } => write!(
                f,
                "minimum word length must be at least {applied} (got {requested})"
            ),
            Self::MaxDepthRaised { requested, applied } => write!(
                f,
                "maximum word length must be at least {applied} (got {requested}), searching for words of length {applied}"
            ),
            Self::ThreadsRaised { requested, applied } => {
                write!(f, "thread count must be at least {applied} (got {requested})")
            }
        }
    }
}

/// Parameters for one search run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    requested_min_word_len: usize,
    requested_max_depth: usize,
    requested_threads: usize,
    min_word_len: usize,
    max_depth: usize,
    threads: usize,
    mode: Mode,
    verbose: bool,
    show_progress: bool,
    warnings: Vec<ConfigWarning>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl SearchConfig {
    /// Create a configuration searching paths up to `max_depth` cells
    ///
    /// # Examples
    /// ```
    /// use word_squares::search::{ConfigWarning, SearchConfig};
    ///
    /// let config = SearchConfig::new(3);
    /// assert_eq!(config.max_depth(), 4);
    /// assert_eq!(
    ///     config.warnings(),
    ///     &[ConfigWarning::MaxDepthRaised { requested: 3, applied: 4 }]
    /// );
    /// ```
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        let mut config = Self {
            requested_min_word_len: MIN_WORD_LEN,
            requested_max_depth: max_depth,
            requested_threads: DEFAULT_THREADS,
            min_word_len: MIN_WORD_LEN,
            max_depth,
            threads: DEFAULT_THREADS,
            mode: Mode::default(),
            verbose: false,
            show_progress: false,
            warnings: Vec::new(),
        };
        config.settle();
        config
    }

    #[must_use]
    pub fn with_min_word_len(mut self, min_word_len: usize) -> Self {
        self.requested_min_word_len = min_word_len;
        self.settle();
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.requested_max_depth = max_depth;
        self.settle();
        self
    }

    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.requested_threads = threads;
        self.settle();
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Recompute effective values from the requested ones
    fn settle(&mut self) {
        self.warnings.clear();

        self.min_word_len = self.requested_min_word_len.max(1);
        if self.min_word_len != self.requested_min_word_len {
            self.warnings.push(ConfigWarning::MinWordLenRaised {
                requested: self.requested_min_word_len,
                applied: self.min_word_len,
            });
        }

        self.max_depth = self.requested_max_depth.max(self.min_word_len);
        if self.max_depth != self.requested_max_depth {
            self.warnings.push(ConfigWarning::MaxDepthRaised {
                requested: self.requested_max_depth,
                applied: self.max_depth,
            });
        }

        self.threads = self.requested_threads.max(1);
        if self.threads != self.requested_threads {
            self.warnings.push(ConfigWarning::ThreadsRaised {
                requested: self.requested_threads,
                applied: self.threads,
            });
        }
    }

    #[inline]
    #[must_use]
    pub const fn min_word_len(&self) -> usize {
        self.min_word_len
    }

    #[inline]
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[inline]
    #[must_use]
    pub const fn threads(&self) -> usize {
        self.threads
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    #[inline]
    #[must_use]
    pub const fn show_progress(&self) -> bool {
        self.show_progress
    }

    /// Corrections applied to the requested settings
    #[must_use]
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }
}
