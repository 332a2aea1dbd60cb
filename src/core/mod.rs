//! Core domain types for the letter grid
//!
//! This module contains the grid and path types the search is built on.
//! Everything here is immutable once constructed and cheap to share.

mod grid;
mod path;

pub use grid::{Grid, GridError, Position};
pub use path::{Direction, ParseDirectionError, PathRecord};
