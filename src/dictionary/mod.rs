//! Dictionaries for word validation
//!
//! Provides the embedded default word list and loaders for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::Dictionary;
