//! Dictionary loading utilities
//!
//! Builds an in-memory word set from files, slices or the embedded list.

use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// A case-normalized set of known words
///
/// Loaded once before any search starts and read-only afterwards, so it can be
/// shared across worker threads without locking.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from arbitrary words
    ///
    /// Entries are trimmed and lowercased; anything that is empty or contains
    /// non-alphabetic characters is skipped.
    ///
    /// # Examples
    /// ```
    /// use word_squares::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["Road", "boar", "it's", ""]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("ROAD"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| normalize(word.as_ref()))
            .collect();
        Self { words }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(super::WORDS)
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.words.contains(&word.to_ascii_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize(word: &str) -> Option<String> {
    let trimmed = word.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}

/// Load a dictionary from a file with one word per line
///
/// Invalid entries are skipped, see [`Dictionary::from_words`].
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_squares::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::from_words(content.lines()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_words_normalizes_case() {
        let dictionary = Dictionary::from_words(["SEES", "Hens"]);
        assert!(dictionary.contains("sees"));
        assert!(dictionary.contains("HENS"));
        assert!(dictionary.contains("hEnS"));
    }

    #[test]
    fn from_words_skips_invalid() {
        let dictionary = Dictionary::from_words(["bird", "don't", "x-ray", "  ", "wings "]);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("wings"));
        assert!(!dictionary.contains("don't"));
    }

    #[test]
    fn from_words_collapses_duplicates() {
        let dictionary = Dictionary::from_words(["road", "ROAD", "Road"]);
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = Dictionary::default();
        assert!(dictionary.is_empty());
        assert!(!dictionary.contains("anything"));
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!(
            "word_squares_loader_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "boar\nRoad\n\n3d\n").unwrap();

        let dictionary = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("road"));
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }
}
