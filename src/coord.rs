//! Grid coordinates and neighborhood probes.

use core::fmt;

/// A position on (or off) the board. Plain value type with structural
/// equality; no range checking happens here. Callers that scan around a cell
/// deliberately produce off-board coordinates, so the board is the one that
/// decides what is in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The 3x3 block centered on this coordinate, including the center and
    /// any off-board positions. Used to build the no-touch buffer around a
    /// placed ship.
    pub fn moore(self) -> impl Iterator<Item = Coord> {
        (-1..=1).flat_map(move |dr| (-1..=1).map(move |dc| Coord::new(self.row + dr, self.col + dc)))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
