//! Board state: cell contents, placed ships, and the exclusion set that
//! enforces both "no touching ships" and "no refiring".

use std::collections::HashSet;

use rand::Rng;

use crate::common::{BoardError, GameError, ShotResult};
use crate::config::{GameConfig, FLEET_LENGTHS, SHIP_RETRY_LIMIT};
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

/// Visible content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
}

/// One player's ocean. Holds true state regardless of concealment; hiding
/// ships from the viewer is the renderer's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    size: usize,
    concealed: bool,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
    excluded: HashSet<Coord>,
    destroyed: usize,
}

impl Board {
    pub fn new(size: usize, concealed: bool) -> Self {
        Self {
            size,
            concealed,
            cells: vec![Cell::Empty; size * size],
            ships: Vec::new(),
            excluded: HashSet::new(),
            destroyed: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn concealed(&self) -> bool {
        self.concealed
    }

    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    /// Whether a coordinate lies within the board.
    pub fn contains(&self, coord: Coord) -> bool {
        (0..self.size as i32).contains(&coord.row) && (0..self.size as i32).contains(&coord.col)
    }

    /// True cell content, or `None` for off-board coordinates.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Victory condition against this board: every placed ship destroyed.
    pub fn all_destroyed(&self) -> bool {
        self.destroyed == self.ships.len()
    }

    /// Place a ship. Every occupied cell must be on the board and outside the
    /// exclusion set; the check runs over the whole ship before any state is
    /// touched, so a rejected placement leaves the board unchanged. Accepted
    /// ships mark their cells and silently reserve a one-cell buffer around
    /// themselves so no later ship can touch them, diagonals included.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        for cell in ship.cells() {
            if !self.contains(cell) {
                return Err(BoardError::OutOfBounds(cell));
            }
            if self.excluded.contains(&cell) {
                return Err(BoardError::Overlap(cell));
            }
        }
        for cell in ship.cells() {
            self.set_cell(cell, Cell::Ship);
            self.excluded.insert(cell);
        }
        self.exclude_buffer(&ship);
        self.ships.push(ship);
        Ok(())
    }

    /// Resolve a shot. Previously excluded cells are rejected whether they
    /// were fired upon before or merely sit in a ship's buffer zone. Intact
    /// ship cells are the one exemption: placement excluded them only against
    /// other ships, and they stay fireable until the first hit flips them to
    /// `Hit`.
    pub fn fire(&mut self, coord: Coord) -> Result<ShotResult, BoardError> {
        if !self.contains(coord) {
            return Err(BoardError::OutOfBounds(coord));
        }
        if self.excluded.contains(&coord) && self.cell(coord) != Some(Cell::Ship) {
            return Err(BoardError::AlreadyFired(coord));
        }
        self.excluded.insert(coord);

        for i in 0..self.ships.len() {
            if self.ships[i].contains(coord) {
                self.ships[i].take_hit();
                self.set_cell(coord, Cell::Hit);
                if self.ships[i].is_destroyed() {
                    self.destroyed += 1;
                    let ship = self.ships[i].clone();
                    self.reveal_buffer(&ship);
                    return Ok(ShotResult::Sunk);
                }
                return Ok(ShotResult::Hit);
            }
        }

        self.set_cell(coord, Cell::Miss);
        Ok(ShotResult::Miss)
    }

    /// Build a board with the full fleet placed at random. Each collision or
    /// out-of-bounds roll retries that ship with fresh coordinates; a ship
    /// that will not place within [`SHIP_RETRY_LIMIT`] tries has dead-ended
    /// the board, which is abandoned for a fresh one. The attempt counter
    /// spans everything and tripping it is fatal.
    pub fn random<R: Rng>(rng: &mut R, config: &GameConfig) -> Result<Self, GameError> {
        let mut attempts = 0u32;
        'fresh: loop {
            let mut board = Self::new(config.size, false);
            for &length in FLEET_LENGTHS.iter() {
                let mut stuck = 0u32;
                loop {
                    if attempts >= config.max_placement_attempts {
                        return Err(GameError::SetupExhausted { attempts });
                    }
                    attempts += 1;
                    let bow = Coord::new(
                        rng.random_range(0..config.size as i32),
                        rng.random_range(0..config.size as i32),
                    );
                    let ship = Ship::new(length, bow, Orientation::random(rng));
                    if board.place_ship(ship).is_ok() {
                        break;
                    }
                    stuck += 1;
                    if stuck >= SHIP_RETRY_LIMIT {
                        continue 'fresh;
                    }
                }
            }
            log::debug!("fleet placed after {attempts} attempts");
            return Ok(board);
        }
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row as usize * self.size + coord.col as usize)
        } else {
            None
        }
    }

    fn set_cell(&mut self, coord: Coord, value: Cell) {
        // callers only pass validated coordinates
        if let Some(i) = self.index(coord) {
            self.cells[i] = value;
        }
    }

    /// Reserve the ship's surroundings in the exclusion set without touching
    /// visible cell contents.
    fn exclude_buffer(&mut self, ship: &Ship) {
        for cell in ship.cells() {
            for probe in cell.moore() {
                if self.contains(probe) {
                    self.excluded.insert(probe);
                }
            }
        }
    }

    /// On destruction the buffer becomes visible: every still-empty cell
    /// around the wreck is marked as water the opponent need not try.
    fn reveal_buffer(&mut self, ship: &Ship) {
        for cell in ship.cells() {
            for probe in cell.moore() {
                if !self.contains(probe) {
                    continue;
                }
                self.excluded.insert(probe);
                if self.cell(probe) == Some(Cell::Empty) {
                    self.set_cell(probe, Cell::Miss);
                }
            }
        }
    }
}
