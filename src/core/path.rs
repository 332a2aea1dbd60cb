//! Compact path representation
//!
//! A path is stored as its start cell plus one direction code per step, which is
//! also the input format of anything that replays a path as pointer gestures.

use super::grid::{Grid, Position};
use std::fmt;
use std::str::FromStr;

/// One of the eight king's-move directions
///
/// Declaration order is the canonical neighbour visiting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    UpLeft,
    Up,
    UpRight,
    Left,
    Right,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    /// All directions in canonical order
    pub const ALL: [Self; 8] = [
        Self::UpLeft,
        Self::Up,
        Self::UpRight,
        Self::Left,
        Self::Right,
        Self::DownLeft,
        Self::Down,
        Self::DownRight,
    ];

    /// `(row, column)` offset of one step in this direction
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::UpLeft => (-1, -1),
            Self::Up => (-1, 0),
            Self::UpRight => (-1, 1),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
            Self::DownLeft => (1, -1),
            Self::Down => (1, 0),
            Self::DownRight => (1, 1),
        }
    }

    /// Short symbolic code (`LU`, `U`, `RU`, `L`, `R`, `LD`, `D`, `RD`)
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::UpLeft => "LU",
            Self::Up => "U",
            Self::UpRight => "RU",
            Self::Left => "L",
            Self::Right => "R",
            Self::DownLeft => "LD",
            Self::Down => "D",
            Self::DownRight => "RD",
        }
    }

    /// Direction of a single step from `from` to `to`
    ///
    /// Returns `None` unless the two positions are king's-move neighbours.
    #[must_use]
    pub fn between(from: Position, to: Position) -> Option<Self> {
        let dr = to.row as isize - from.row as isize;
        let dc = to.col as isize - from.col as isize;
        Self::ALL.into_iter().find(|d| d.delta() == (dr, dc))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error for an unknown direction code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction code '{0}'")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ParseDirectionError(code.to_string()))
    }
}

/// A path stored as start position plus direction codes
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathRecord {
    start: Position,
    moves: Vec<Direction>,
}

impl PathRecord {
    #[must_use]
    pub const fn new(start: Position, moves: Vec<Direction>) -> Self {
        Self { start, moves }
    }

    /// Build a record from an explicit list of positions
    ///
    /// Returns `None` for an empty list or when two consecutive positions are
    /// not neighbours.
    #[must_use]
    pub fn from_positions(positions: &[Position]) -> Option<Self> {
        let (&start, _) = positions.split_first()?;
        let moves = positions
            .windows(2)
            .map(|pair| Direction::between(pair[0], pair[1]))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { start, moves })
    }

    #[inline]
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    #[inline]
    #[must_use]
    pub fn moves(&self) -> &[Direction] {
        &self.moves
    }

    /// Number of cells visited, start included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len() + 1
    }

    /// A record always covers at least its start cell
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Replay the moves on `grid`
    ///
    /// Returns `None` if the start or any step falls outside the grid.
    #[must_use]
    pub fn trace(&self, grid: &Grid) -> Option<Vec<Position>> {
        if !grid.contains(self.start) {
            return None;
        }
        let mut positions = Vec::with_capacity(self.len());
        let mut current = self.start;
        positions.push(current);
        for &direction in &self.moves {
            current = grid.step(current, direction)?;
            positions.push(current);
        }
        Some(positions)
    }

    /// Letters spelled by replaying this path on `grid`
    #[must_use]
    pub fn spell(&self, grid: &Grid) -> Option<String> {
        self.trace(grid)
            .map(|positions| positions.into_iter().map(|p| grid.letter_at(p)).collect())
    }

    /// Space-separated move codes, e.g. `"LU U R"`
    #[must_use]
    pub fn moves_string(&self) -> String {
        self.moves
            .iter()
            .map(|d| d.code())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for PathRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)?;
        for direction in &self.moves {
            write!(f, " {direction}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(&["eipa", "quen", "escs", "hseh"]).unwrap()
    }

    #[test]
    fn direction_codes_follow_canonical_order() {
        let codes: Vec<&str> = Direction::ALL.iter().map(|d| d.code()).collect();
        assert_eq!(codes, ["LU", "U", "RU", "L", "R", "LD", "D", "RD"]);
    }

    #[test]
    fn direction_parse_accepts_codes() {
        assert_eq!("RU".parse::<Direction>(), Ok(Direction::UpRight));
        assert_eq!(" d ".parse::<Direction>(), Ok(Direction::Down));
        assert!("X".parse::<Direction>().is_err());
    }

    #[test]
    fn direction_between_neighbours_only() {
        let a = Position::new(1, 1);
        assert_eq!(
            Direction::between(a, Position::new(0, 0)),
            Some(Direction::UpLeft)
        );
        assert_eq!(
            Direction::between(a, Position::new(2, 1)),
            Some(Direction::Down)
        );
        assert_eq!(Direction::between(a, a), None);
        assert_eq!(Direction::between(a, Position::new(3, 1)), None);
    }

    #[test]
    fn from_positions_round_trips_through_trace() {
        let positions = [
            Position::new(1, 1),
            Position::new(2, 1),
            Position::new(3, 2),
            Position::new(3, 1),
        ];
        let record = PathRecord::from_positions(&positions).unwrap();
        assert_eq!(record.len(), 4);
        assert_eq!(
            record.moves(),
            &[Direction::Down, Direction::DownRight, Direction::Left]
        );
        assert_eq!(record.trace(&grid()).unwrap(), positions);
        assert_eq!(record.spell(&grid()).unwrap(), "uses");
    }

    #[test]
    fn from_positions_rejects_gaps() {
        let positions = [Position::new(0, 0), Position::new(0, 2)];
        assert!(PathRecord::from_positions(&positions).is_none());
        assert!(PathRecord::from_positions(&[]).is_none());
    }

    #[test]
    fn trace_off_grid_is_none() {
        let record = PathRecord::new(Position::new(0, 0), vec![Direction::Up]);
        assert!(record.trace(&grid()).is_none());

        let outside = PathRecord::new(Position::new(9, 9), vec![]);
        assert!(outside.spell(&grid()).is_none());
    }

    #[test]
    fn display_shows_start_and_codes() {
        let record = PathRecord::new(
            Position::new(0, 2),
            vec![Direction::Down, Direction::Right, Direction::Down],
        );
        assert_eq!(record.to_string(), "(0, 2) D R D");
        assert_eq!(record.moves_string(), "D R D");
    }
}
