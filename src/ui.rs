//! Terminal rendering and announcements. Reads board state, writes nothing
//! back; concealment is applied here, not in the board.

use crate::board::{Board, Cell};
use crate::common::ShotResult;
use crate::coord::Coord;
use crate::game::{Actor, GameStatus, TurnReport};

const RULER: &str = "--------------------";

fn glyph(cell: Cell, concealed: bool) -> char {
    match cell {
        Cell::Empty => 'O',
        Cell::Ship => {
            if concealed {
                'O'
            } else {
                '■'
            }
        }
        Cell::Hit => 'X',
        Cell::Miss => '.',
    }
}

/// Render a board as the classic numbered table. A concealed board draws its
/// intact ship cells as open water.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::from(" |");
    for col in 1..=size {
        out.push_str(&format!(" {col} |"));
    }
    for row in 0..size {
        out.push_str(&format!("\n{}|", row + 1));
        for col in 0..size {
            let cell = board
                .cell(Coord::new(row as i32, col as i32))
                .unwrap_or(Cell::Empty);
            out.push(' ');
            out.push(glyph(cell, board.concealed()));
            out.push_str(" |");
        }
    }
    out
}

pub fn greet(size: usize) {
    println!("{RULER}");
    println!("     Sea Battle     ");
    println!("{RULER}");
    println!(" board size: {size}x{size}");
    println!(" move format: row col");
    println!(" (both 1-based)");
}

pub fn print_boards(user_board: &Board, ai_board: &Board) {
    println!("{RULER}");
    println!("Your board:");
    println!("{}", render_board(user_board));
    println!("{RULER}");
    println!("Computer's board:");
    println!("{}", render_board(ai_board));
}

pub fn announce_turn(actor: Actor) {
    println!("{RULER}");
    match actor {
        Actor::User => println!("Your turn!"),
        Actor::Ai => println!("Computer's turn!"),
    }
}

pub fn announce_shot(report: &TurnReport) {
    if report.actor == Actor::Ai {
        println!(
            "Computer fires at {} {}",
            report.coord.row + 1,
            report.coord.col + 1
        );
    }
    match report.result {
        ShotResult::Miss => println!("Miss!"),
        ShotResult::Hit => println!("Ship damaged!"),
        ShotResult::Sunk => println!("Ship destroyed!"),
    }
}

pub fn announce_winner(status: GameStatus) {
    println!("{RULER}");
    match status {
        GameStatus::UserWon => println!("You won!"),
        GameStatus::AiWon => println!("The computer won!"),
        GameStatus::InProgress => {}
    }
}
