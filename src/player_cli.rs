//! Interactive player reading moves from the terminal.

use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::common::BoardError;
use crate::coord::Coord;
use crate::player::Player;

/// Human player. Prompts on stdout and reads "row col" pairs from stdin
/// until a line parses; range checking stays with the target board, which
/// reports out-of-bounds or repeated shots back through `handle_rejected`.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a move typed as two 1-based integers, e.g. `"3 4"`. Returns `None`
/// when the line does not parse; the caller re-asks.
pub fn parse_move(line: &str) -> Option<Coord> {
    let mut parts = line.split_whitespace();
    let row: i32 = parts.next()?.parse().ok()?;
    let col: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Coord::new(row - 1, col - 1))
}

impl Player for CliPlayer {
    fn select_target(&mut self, _rng: &mut SmallRng, _board_size: usize) -> Coord {
        loop {
            print!("Your move (row col): ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_err() {
                println!("Could not read input, try again.");
                continue;
            }
            match parse_move(line.trim()) {
                Some(coord) => return coord,
                None => println!("Enter two numbers, e.g. 3 4."),
            }
        }
    }

    fn handle_rejected(&mut self, _coord: Coord, reason: &BoardError) {
        println!("{reason}");
    }
}
