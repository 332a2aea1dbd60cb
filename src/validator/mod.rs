//! Word validation
//!
//! A validator answers one question: is this letter string a real word? The
//! search only depends on the [`WordValidator`] trait, so the backing
//! dictionary can be an in-memory set or a remote lookup service.

pub mod offline;
pub mod remote;

pub use offline::OfflineValidator;
pub use remote::{Lookup, RemoteConfig, RemoteValidator};

use std::fmt;

/// Outcome of validating a single candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Accepted,
    Rejected,
    /// The lookup did not answer in time; counts as a rejection
    Timeout,
}

impl Verdict {
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Timeout => "timeout",
        };
        f.write_str(label)
    }
}

/// Decides whether a candidate string is a word
///
/// Implementations are called from several worker threads at once.
pub trait WordValidator: Send + Sync {
    /// Validate one lowercase candidate
    fn validate(&self, word: &str) -> Verdict;

    /// Short name used in diagnostics
    fn name(&self) -> &str;
}

/// Enum wrapper for all validator types
///
/// Allows runtime selection of the dictionary while keeping static dispatch.
pub enum ValidatorType {
    Offline(OfflineValidator),
    Remote(RemoteValidator),
}

impl WordValidator for ValidatorType {
    fn validate(&self, word: &str) -> Verdict {
        match self {
            Self::Offline(v) => v.validate(word),
            Self::Remote(v) => v.validate(word),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Offline(v) => v.name(),
            Self::Remote(v) => v.name(),
        }
    }
}

impl<V: WordValidator + ?Sized> WordValidator for &V {
    fn validate(&self, word: &str) -> Verdict {
        (**self).validate(word)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
