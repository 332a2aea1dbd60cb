//! Backtracking path enumeration
//!
//! Every cell is used once as a root. From each root a depth-first search
//! extends the current path to every unvisited king's-move neighbour, in
//! canonical direction order, until the path reaches the depth bound.
//! The visited mask belongs to the walk of one root: a cell is marked when the
//! path enters it and cleared again on backtrack, so sibling branches and
//! other roots never see each other's state.

use super::config::SearchConfig;
use crate::core::{Direction, Grid, PathRecord, Position};
use rustc_hash::FxHashMap;

/// A letter string produced by the search, borrowed from the walk state
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    text: &'a str,
    start: Position,
    moves: &'a [Direction],
}

impl<'a> Candidate<'a> {
    #[inline]
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    #[inline]
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    #[inline]
    #[must_use]
    pub const fn moves(&self) -> &'a [Direction] {
        self.moves
    }

    /// Number of cells on the path
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.moves.len() + 1
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Owned copy of the path
    #[must_use]
    pub fn to_record(&self) -> PathRecord {
        PathRecord::new(self.start, self.moves.to_vec())
    }
}

/// Depth-first enumerator over one grid
#[derive(Debug, Clone, Copy)]
pub struct PathEnumerator<'g> {
    grid: &'g Grid,
    min_len: usize,
    max_depth: usize,
}

impl<'g> PathEnumerator<'g> {
    #[must_use]
    pub fn new(grid: &'g Grid, config: &SearchConfig) -> Self {
        Self::with_bounds(grid, config.min_word_len(), config.max_depth())
    }

    /// Enumerator emitting paths of `min_len..=max_depth` cells
    ///
    /// `max_depth` is raised to `min_len` if it is smaller.
    #[must_use]
    pub fn with_bounds(grid: &'g Grid, min_len: usize, max_depth: usize) -> Self {
        let min_len = min_len.max(1);
        Self {
            grid,
            min_len,
            max_depth: max_depth.max(min_len),
        }
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Walk every root cell in row-major order
    ///
    /// # Examples
    /// ```
    /// use word_squares::core::Grid;
    /// use word_squares::search::PathEnumerator;
    ///
    /// let grid = Grid::new(&["ab", "cd"]).unwrap();
    /// let mut count = 0;
    /// PathEnumerator::with_bounds(&grid, 2, 2).walk(|_| count += 1);
    /// assert_eq!(count, 12);
    /// ```
    pub fn walk<F>(&self, mut emit: F)
    where
        F: FnMut(&Candidate<'_>),
    {
        for root in self.grid.positions() {
            self.walk_root(root, &mut emit);
        }
    }

    /// Walk the whole subtree rooted at `root`
    ///
    /// # Panics
    /// Panics if `root` is outside the grid
    pub fn walk_root<F>(&self, root: Position, emit: &mut F)
    where
        F: FnMut(&Candidate<'_>),
    {
        // No path is longer than the number of cells
        let longest = self.max_depth.min(self.grid.len());
        let mut walk = Walk {
            grid: self.grid,
            min_len: self.min_len,
            max_depth: self.max_depth,
            visited: vec![false; self.grid.len()],
            text: String::with_capacity(longest),
            moves: Vec::with_capacity(longest),
            start: root,
            emit,
        };
        walk.visited[self.grid.index(root)] = true;
        walk.text.push(self.grid.letter_at(root));
        walk.descend(root);
    }

    /// Enumerate everything and group the paths by candidate text
    #[must_use]
    pub fn collect_batch(&self) -> CandidateBatch {
        let mut batch = CandidateBatch::default();
        self.walk(|candidate| batch.push(candidate));
        batch
    }
}

struct Walk<'g, 'e, F> {
    grid: &'g Grid,
    min_len: usize,
    max_depth: usize,
    visited: Vec<bool>,
    text: String,
    moves: Vec<Direction>,
    start: Position,
    emit: &'e mut F,
}

impl<F> Walk<'_, '_, F>
where
    F: FnMut(&Candidate<'_>),
{
    fn descend(&mut self, pos: Position) {
        // Cells are ASCII, so byte length equals path length
        let depth = self.text.len();
        if depth >= self.min_len {
            let candidate = Candidate {
                text: &self.text,
                start: self.start,
                moves: &self.moves,
            };
            (self.emit)(&candidate);
        }
        if depth >= self.max_depth {
            return;
        }

        let grid = self.grid;
        for (direction, next) in grid.neighbors(pos) {
            let index = grid.index(next);
            if self.visited[index] {
                continue;
            }

            self.visited[index] = true;
            self.text.push(grid.letter_at(next));
            self.moves.push(direction);

            self.descend(next);

            self.moves.pop();
            self.text.pop();
            self.visited[index] = false;
        }
    }
}

/// Candidates grouped by text, ready for deduplicated validation
#[derive(Debug, Clone, Default)]
pub struct CandidateBatch {
    words: FxHashMap<String, Vec<PathRecord>>,
    emitted: usize,
}

impl CandidateBatch {
    /// Add one emitted candidate
    pub fn push(&mut self, candidate: &Candidate<'_>) {
        self.emitted += 1;
        let record = candidate.to_record();
        if let Some(paths) = self.words.get_mut(candidate.text()) {
            paths.push(record);
        } else {
            self.words.insert(candidate.text().to_string(), vec![record]);
        }
    }

    /// Total candidates pushed, counting every path
    #[inline]
    #[must_use]
    pub const fn emitted(&self) -> usize {
        self.emitted
    }

    /// Number of distinct candidate texts
    #[inline]
    #[must_use]
    pub fn unique_words(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn paths(&self, word: &str) -> Option<&[PathRecord]> {
        self.words.get(word).map(Vec::as_slice)
    }

    /// Distinct candidates with their paths, sorted by text
    #[must_use]
    pub fn into_sorted(self) -> Vec<(String, Vec<PathRecord>)> {
        let mut words: Vec<_> = self.words.into_iter().collect();
        words.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        words
    }
}
