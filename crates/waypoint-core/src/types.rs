//! Common types used across the Waypoint engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Path cost. Integer so that priority comparison is total and reproducible.
pub type Cost = u64;

/// A cell on a rectangular grid, addressed by column and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub col: i64,
    pub row: i64,
}

impl Position {
    /// Create a new position.
    pub const fn new(col: i64, row: i64) -> Self {
        Self { col, row }
    }

    /// Manhattan distance to another position, saturating at `Cost::MAX`.
    pub fn manhattan(&self, other: &Position) -> Cost {
        self.col
            .abs_diff(other.col)
            .saturating_add(self.row.abs_diff(other.row))
    }

    /// The neighbouring position one step in `direction`.
    ///
    /// `Up` decreases the row, matching top-to-bottom grid layouts.
    pub fn step(&self, direction: Direction) -> Position {
        let (dc, dr) = direction.delta();
        Position::new(self.col + dc, self.row + dr)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl From<(i64, i64)> for Position {
    fn from((col, row): (i64, i64)) -> Self {
        Position::new(col, row)
    }
}

/// One of the four orthogonal grid moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "U")]
    Up,
    #[serde(rename = "D")]
    Down,
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
}

impl Direction {
    /// All directions, in the order grid problems enumerate them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Single-letter token for this direction.
    pub fn token(&self) -> &'static str {
        match self {
            Direction::Up => "U",
            Direction::Down => "D",
            Direction::Left => "L",
            Direction::Right => "R",
        }
    }

    /// `(column, row)` offset of one step.
    pub fn delta(&self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
