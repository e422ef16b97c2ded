//! Match orchestration: setup, turn alternation, victory detection.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{GameError, ShotResult};
use crate::config::GameConfig;
use crate::coord::Coord;
use crate::player::Player;

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    UserWon,
    AiWon,
}

/// Which side is acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    User,
    Ai,
}

/// What happened during one call to [`Game::step`], for the presentation
/// layer to announce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub actor: Actor,
    pub coord: Coord,
    pub result: ShotResult,
    pub status: GameStatus,
}

/// One match between the user and the computer. Owns both boards; each move
/// routes the acting player to the opposing board.
pub struct Game {
    config: GameConfig,
    user: Box<dyn Player>,
    ai: Box<dyn Player>,
    user_board: Board,
    ai_board: Board,
    turn: u64,
    status: GameStatus,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("user_board", &self.user_board)
            .field("ai_board", &self.ai_board)
            .field("turn", &self.turn)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Set up a match: place both fleets at random and conceal the
    /// computer's board. Fails only when a fleet cannot be placed within the
    /// configured attempt cap.
    pub fn new(
        rng: &mut SmallRng,
        config: GameConfig,
        user: Box<dyn Player>,
        ai: Box<dyn Player>,
    ) -> Result<Self, GameError> {
        let user_board = Board::random(rng, &config)?;
        let mut ai_board = Board::random(rng, &config)?;
        ai_board.set_concealed(true);
        Ok(Self::from_boards(config, user, ai, user_board, ai_board))
    }

    /// Assemble a match from pre-built boards. Used for deterministic
    /// scenarios; `new` is the normal entry point.
    pub fn from_boards(
        config: GameConfig,
        user: Box<dyn Player>,
        ai: Box<dyn Player>,
        user_board: Board,
        ai_board: Board,
    ) -> Self {
        Self {
            config,
            user,
            ai,
            user_board,
            ai_board,
            turn: 0,
            status: GameStatus::InProgress,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Side that moves next, by parity of the turn counter.
    pub fn current_actor(&self) -> Actor {
        if self.turn % 2 == 0 {
            Actor::User
        } else {
            Actor::Ai
        }
    }

    pub fn user_board(&self) -> &Board {
        &self.user_board
    }

    pub fn ai_board(&self) -> &Board {
        &self.ai_board
    }

    /// Execute one move for the side whose turn it is. A hit or a sink keeps
    /// the turn counter in place so the same side moves again; the user's
    /// victory is checked before the computer's (each move damages only one
    /// board, so both can never hold at once).
    pub fn step(&mut self, rng: &mut SmallRng) -> Result<TurnReport, GameError> {
        let actor = self.current_actor();
        let (player, target) = match actor {
            Actor::User => (self.user.as_mut(), &mut self.ai_board),
            Actor::Ai => (self.ai.as_mut(), &mut self.user_board),
        };
        let (coord, result) = player.play_turn(rng, target, self.config.max_shot_retries)?;

        if self.ai_board.all_destroyed() {
            self.status = GameStatus::UserWon;
        } else if self.user_board.all_destroyed() {
            self.status = GameStatus::AiWon;
        }
        if !result.repeats_turn() {
            self.turn += 1;
        }

        Ok(TurnReport {
            actor,
            coord,
            result,
            status: self.status,
        })
    }
}
