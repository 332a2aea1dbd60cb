//! Dictionary-backed validation

use super::{Verdict, WordValidator};
use crate::dictionary::Dictionary;

/// Validator backed by a preloaded in-memory dictionary
///
/// Lookups are case-insensitive hash probes; they never block and never fail.
#[derive(Debug, Clone)]
pub struct OfflineValidator {
    dictionary: Dictionary,
}

impl OfflineValidator {
    #[must_use]
    pub const fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

impl WordValidator for OfflineValidator {
    fn validate(&self, word: &str) -> Verdict {
        if self.dictionary.contains(word) {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }

    fn name(&self) -> &str {
        "offline"
    }
}
