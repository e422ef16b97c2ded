//! Shot outcomes and error kinds shared across the crate.

use thiserror::Error;

use crate::coord::Coord;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot landed on open water.
    Miss,
    /// Shot damaged a ship that still has segments left.
    Hit,
    /// Shot destroyed the last segment of a ship.
    Sunk,
}

impl ShotResult {
    /// A hit or a sink keeps the turn with the same player.
    pub fn repeats_turn(self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Errors returned by board operations. Callers branch on the kind: shot
/// rejections are retried inside a turn, placement rejections are retried
/// during setup.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("coordinate {0} is outside the board")]
    OutOfBounds(Coord),
    #[error("cell {0} was already fired upon")]
    AlreadyFired(Coord),
    #[error("ship placement collides with an occupied or buffered cell at {0}")]
    Overlap(Coord),
}

/// Fatal game-level errors. Unlike [`BoardError`] these propagate out of the
/// match instead of being absorbed by a retry loop.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("could not place the fleet within {attempts} attempts; board too small for the fleet")]
    SetupExhausted { attempts: u32 },
    #[error("no acceptable target produced within {limit} attempts")]
    TargetRetriesExhausted { limit: u32 },
}
