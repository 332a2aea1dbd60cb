//! Result aggregation
//!
//! Accepted words are keyed by their lowercase text. Finding a known word again
//! adds the new path to its entry instead of creating a second entry.

use crate::core::PathRecord;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;
use std::collections::hash_map::Entry;
use std::ops::RangeInclusive;
use std::sync::{Mutex, PoisonError};

/// One discovered word and every distinct path that spells it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    paths: Vec<PathRecord>,
    seen: FxHashSet<PathRecord>,
}

impl WordEntry {
    #[must_use]
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_ascii_lowercase(),
            paths: Vec::new(),
            seen: FxHashSet::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Word length in letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn paths(&self) -> &[PathRecord] {
        &self.paths
    }

    /// Add a path unless the exact same path is already recorded
    ///
    /// Returns `true` if the path was new.
    pub fn add_path(&mut self, path: PathRecord) -> bool {
        if self.seen.insert(path.clone()) {
            self.paths.push(path);
            true
        } else {
            false
        }
    }

    fn absorb(&mut self, other: Self) {
        for path in other.paths {
            self.add_path(path);
        }
    }
}

/// Unsynchronized word map owned by a single worker
///
/// Workers fill their own map and hand it over whole, so no locking happens
/// while a subtree is searched.
#[derive(Debug, Clone, Default)]
pub struct WordMap {
    entries: FxHashMap<String, WordEntry>,
}

impl WordMap {
    /// Record `path` for `word`, creating the entry on first sight
    pub fn insert(&mut self, word: &str, path: PathRecord) {
        self.entry(word).add_path(path);
    }

    /// Record several paths for `word` at once
    pub fn insert_all(&mut self, word: &str, paths: impl IntoIterator<Item = PathRecord>) {
        let entry = self.entry(word);
        for path in paths {
            entry.add_path(path);
        }
    }

    fn entry(&mut self, word: &str) -> &mut WordEntry {
        let key = word.to_ascii_lowercase();
        self.entries
            .entry(key)
            .or_insert_with_key(|key| WordEntry::new(key))
    }

    /// Union of two maps; paths of words present in both are merged
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        // Fold the smaller map into the larger one
        let (mut into, from) = if self.entries.len() >= other.entries.len() {
            (self, other)
        } else {
            (other, self)
        };
        for (word, entry) in from.entries {
            match into.entries.entry(word) {
                Entry::Occupied(mut existing) => existing.get_mut().absorb(entry),
                Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
            }
        }
        into
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.entries.get(word)
    }
}

/// Thread-safe accumulator shared by all workers of a run
#[derive(Debug, Default)]
pub struct ResultAggregator {
    inner: Mutex<WordMap>,
}

impl ResultAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one accepted path
    pub fn record(&self, word: &str, path: PathRecord) {
        self.lock().insert(word, path);
    }

    /// Record every path of one accepted word
    pub fn record_all(&self, word: &str, paths: impl IntoIterator<Item = PathRecord>) {
        self.lock().insert_all(word, paths);
    }

    /// Merge a worker's partial results
    pub fn absorb(&self, partial: WordMap) {
        if partial.is_empty() {
            return;
        }
        let mut guard = self.lock();
        let current = std::mem::take(&mut *guard);
        *guard = current.merge(partial);
    }

    /// Number of distinct words so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Group the collected words by length, sorted for reproducible output
    #[must_use]
    pub fn finalize(self, lengths: RangeInclusive<usize>) -> WordsByLength {
        let map = self.inner.into_inner().unwrap_or_else(PoisonError::into_inner);
        WordsByLength::from_map(map, lengths)
    }

    // A panicking worker cannot leave a half-applied insert behind, so the
    // map behind a poisoned lock is still usable.
    fn lock(&self) -> std::sync::MutexGuard<'_, WordMap> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Final result: words grouped by length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordsByLength {
    lengths: RangeInclusive<usize>,
    groups: BTreeMap<usize, Vec<WordEntry>>,
}

impl WordsByLength {
    fn from_map(map: WordMap, lengths: RangeInclusive<usize>) -> Self {
        let mut groups: BTreeMap<usize, Vec<WordEntry>> = BTreeMap::new();
        for (_, mut entry) in map.entries {
            entry.paths.sort_unstable();
            groups.entry(entry.len()).or_default().push(entry);
        }
        for entries in groups.values_mut() {
            entries.sort_unstable_by(|a, b| a.word.cmp(&b.word));
        }
        Self { lengths, groups }
    }

    /// Configured length range, including lengths with no words
    #[must_use]
    pub fn lengths(&self) -> RangeInclusive<usize> {
        self.lengths.clone()
    }

    /// Entries of exactly `length` letters, sorted by word
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[WordEntry] {
        self.groups.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Every configured length with its (possibly empty) entries
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[WordEntry])> + '_ {
        self.lengths().map(|length| (length, self.words_of_length(length)))
    }

    /// All entries, shortest words first
    pub fn entries(&self) -> impl Iterator<Item = &WordEntry> + '_ {
        self.groups.values().flatten()
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        let word = word.to_ascii_lowercase();
        self.words_of_length(word.len())
            .binary_search_by(|entry| entry.word.as_str().cmp(&word))
            .ok()
            .map(|index| &self.words_of_length(word.len())[index])
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Number of unique words
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Number of unique paths over all words
    #[must_use]
    pub fn total_paths(&self) -> usize {
        self.entries().map(|entry| entry.paths.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
