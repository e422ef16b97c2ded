//! Ship placement geometry and hit tracking.

use rand::Rng;

use crate::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Coin-flip orientation for random placement.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A ship occupying a contiguous line of cells. The occupied cells are
/// derived from `{bow, orientation, length}` on demand; only the remaining
/// hit points are mutable state, and the board is the only writer of those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    bow: Coord,
    orientation: Orientation,
    hit_points: usize,
}

impl Ship {
    pub fn new(length: usize, bow: Coord, orientation: Orientation) -> Self {
        Self {
            length,
            bow,
            orientation,
            hit_points: length,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn bow(&self) -> Coord {
        self.bow
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Remaining undamaged segments.
    pub fn hit_points(&self) -> usize {
        self.hit_points
    }

    /// The cells this ship occupies, bow first, extending along the row axis
    /// when vertical and along the column axis when horizontal.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.length as i32).map(move |i| match self.orientation {
            Orientation::Vertical => Coord::new(self.bow.row + i, self.bow.col),
            Orientation::Horizontal => Coord::new(self.bow.row, self.bow.col + i),
        })
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Register one hit. Each occupied cell can be fired upon at most once
    /// (the board's exclusion set guarantees that), so this never underflows.
    pub(crate) fn take_hit(&mut self) {
        self.hit_points -= 1;
    }

    pub fn is_destroyed(&self) -> bool {
        self.hit_points == 0
    }
}
