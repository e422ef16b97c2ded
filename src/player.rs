//! Player trait: target selection plus the shared move protocol.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, GameError, ShotResult};
use crate::coord::Coord;

/// One side's turn-taking agent. Implementations only decide *where* to
/// shoot; the firing loop itself is shared.
pub trait Player {
    /// Produce the next candidate target on the opponent's board. Candidates
    /// may be illegal; `play_turn` rejects them and asks again.
    fn select_target(&mut self, rng: &mut SmallRng, board_size: usize) -> Coord;

    /// Called when the target board rejected a candidate.
    fn handle_rejected(&mut self, _coord: Coord, _reason: &BoardError) {}

    /// Called with the outcome once a candidate was accepted.
    fn handle_shot_result(&mut self, _coord: Coord, _result: ShotResult) {}

    /// Execute one move: ask for candidates until the target board accepts
    /// one, reporting each rejection back to the player. The retry loop never
    /// advances the match turn counter; the caller repeats the turn when the
    /// outcome is a hit or a sink.
    fn play_turn(
        &mut self,
        rng: &mut SmallRng,
        target: &mut Board,
        max_retries: u32,
    ) -> Result<(Coord, ShotResult), GameError> {
        for _ in 0..max_retries {
            let coord = self.select_target(rng, target.size());
            match target.fire(coord) {
                Ok(result) => {
                    self.handle_shot_result(coord, result);
                    return Ok((coord, result));
                }
                Err(reason) => self.handle_rejected(coord, &reason),
            }
        }
        Err(GameError::TargetRetriesExhausted { limit: max_retries })
    }
}
