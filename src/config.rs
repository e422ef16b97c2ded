//! Fleet composition and game tunables.

/// Classic small-board fleet: one cruiser, two destroyers, four boats.
pub const FLEET_LENGTHS: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

pub const DEFAULT_BOARD_SIZE: usize = 6;

/// Cap on placement tries across the whole fleet before setup gives up.
pub const DEFAULT_PLACEMENT_ATTEMPTS: u32 = 2000;

/// Retries for a single ship before its board is abandoned as a dead end.
pub const SHIP_RETRY_LIMIT: u32 = 100;

/// Cap on rejected candidate shots within a single turn.
pub const DEFAULT_SHOT_RETRIES: u32 = 1000;

/// Per-game configuration. The caps exist so that pathological randomness
/// surfaces as an error instead of looping forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub max_placement_attempts: u32,
    pub max_shot_retries: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            max_placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
            max_shot_retries: DEFAULT_SHOT_RETRIES,
        }
    }
}
