//! Letter grid representation
//!
//! A `Grid` is an immutable rectangle of lowercase ASCII letters with a
//! king's-move adjacency query.

use super::path::Direction;
use std::fmt;

/// A cell coordinate, `(0, 0)` being the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if `other` is one king's move away (Chebyshev distance 1)
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && (dr | dc) != 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error type for malformed grids
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {0} is empty")]
    EmptyRow(usize),
    #[error("row {row} has {actual} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("cell ({row}, {col}) contains '{ch}', expected an ASCII letter")]
    NonAlphabetic { row: usize, col: usize, ch: char },
}

/// Immutable rectangular letter grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid from its rows
    ///
    /// Letters are normalized to lowercase.
    ///
    /// # Errors
    /// Returns `GridError` if:
    /// - There are no rows, or a row is empty
    /// - Rows differ in length
    /// - A cell is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use word_squares::core::{Grid, Position};
    ///
    /// let grid = Grid::new(&["ABc", "def"]).unwrap();
    /// assert_eq!(grid.letter_at(Position::new(0, 1)), 'b');
    ///
    /// assert!(Grid::new(&["ab", "c"]).is_err());
    /// assert!(Grid::new(&["a1"]).is_err());
    /// ```
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let width = match rows.first() {
            None => return Err(GridError::Empty),
            Some(first) => first.as_ref().chars().count(),
        };

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let actual = line.chars().count();
            if actual == 0 {
                return Err(GridError::EmptyRow(row));
            }
            if actual != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    actual,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                if !ch.is_ascii_alphabetic() {
                    return Err(GridError::NonAlphabetic { row, col, ch });
                }
                cells.push(ch.to_ascii_lowercase() as u8);
            }
        }

        Ok(Self {
            cells,
            rows: rows.len(),
            cols: width,
        })
    }

    /// Parse a grid from a block of text, one row per line
    ///
    /// Surrounding whitespace and blank lines are ignored.
    ///
    /// # Errors
    /// Same as [`Grid::new`].
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Self::new(&rows)
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Construction rejects empty grids
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Letter stored at `pos`
    ///
    /// # Panics
    /// Panics if `pos` is outside the grid
    #[inline]
    #[must_use]
    pub fn letter_at(&self, pos: Position) -> char {
        char::from(self.cells[self.index(pos)])
    }

    /// Row-major cell index, used by the search for its visited mask
    #[inline]
    pub(crate) const fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    /// Neighbour of `pos` one step in `direction`, if it lies inside the grid
    #[must_use]
    pub fn step(&self, pos: Position, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        let next = Position::new(row, col);
        self.contains(next).then_some(next)
    }

    /// In-bounds neighbours of `pos` in canonical direction order
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = (Direction, Position)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.step(pos, d).map(|p| (d, p)))
    }

    /// Every cell position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", char::from(cell))?;
            }
        }
        Ok(())
    }
}
