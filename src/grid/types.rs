//! Coordinates and movement directions on the grid.

use std::fmt;

/// A cell coordinate. `x` is the column, `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Creates a new position.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Origin position (0, 0).
    pub fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Applies a signed offset, returning `None` when either axis would go
    /// negative. Upper bounds are checked by the grid.
    pub fn offset(&self, dx: isize, dy: isize) -> Option<Position> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Position { x, y })
    }

    /// Manhattan distance to another position.
    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Normalizes the position by the grid size.
    pub fn normalized(&self, size: usize) -> (f64, f64) {
        (self.x as f64 / size as f64, self.y as f64 / size as f64)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four cardinal moves used during exploration.
///
/// The discriminant is the index of the matching network output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Number of directions (and of network outputs).
    pub const COUNT: usize = 4;

    /// Returns all directions in enumeration order.
    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    /// Returns the index of this direction (0=Up, 1=Down, 2=Left, 3=Right).
    pub fn index(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// Inverse of [`Direction::index`].
    pub fn from_index(index: usize) -> Option<Direction> {
        Direction::all().get(index).copied()
    }

    /// `(dx, dy)` displacement. Up decreases the row.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// One-hot encoding of this direction, used as a training target.
    pub fn one_hot(&self) -> [f64; 4] {
        let mut v = [0.0; 4];
        v[self.index()] = 1.0;
        v
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}
