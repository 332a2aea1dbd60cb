//! Word Squares
//!
//! Finds every dictionary word that can be traced on a letter grid by moving
//! between king's-move neighbours without reusing a cell.
//!
//! # Quick Start
//!
//! ```rust
//! use word_squares::core::Grid;
//! use word_squares::dictionary::Dictionary;
//! use word_squares::search::{SearchConfig, Solver};
//! use word_squares::validator::OfflineValidator;
//!
//! let grid = Grid::new(&["ourb", "isfo", "ndaa", "gwrg"]).unwrap();
//! let config = SearchConfig::new(4);
//! let validator = OfflineValidator::new(Dictionary::from_words(["road", "bird"]));
//!
//! let outcome = Solver::new(&grid, &config, &validator).unwrap().run();
//! for entry in outcome.words.entries() {
//!     println!("{}: {} path(s)", entry.word(), entry.paths().len());
//! }
//! ```

// Core domain types
pub mod core;

// Search engine
pub mod search;

// Word validation
pub mod validator;

// Dictionaries
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
