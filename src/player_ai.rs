//! Automated player with uniformly random aim.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{BoardError, ShotResult};
use crate::coord::Coord;
use crate::player::Player;

/// Computer opponent. Picks uniformly over the whole board on every call and
/// keeps no memory of earlier guesses; the shared retry loop filters out
/// cells that were already tried.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, board_size: usize) -> Coord {
        Coord::new(
            rng.random_range(0..board_size as i32),
            rng.random_range(0..board_size as i32),
        )
    }

    fn handle_rejected(&mut self, coord: Coord, reason: &BoardError) {
        log::debug!("computer candidate {coord} rejected: {reason}");
    }

    fn handle_shot_result(&mut self, _coord: Coord, _result: ShotResult) {}
}
