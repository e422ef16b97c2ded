use seabattle::{Board, BoardError, Cell, Coord, Orientation, Ship, ShotResult};

fn coord(row: i32, col: i32) -> Coord {
    Coord::new(row, col)
}

#[test]
fn test_manual_place_and_fire_sink() {
    let mut board = Board::new(6, false);
    board
        .place_ship(Ship::new(3, coord(0, 0), Orientation::Horizontal))
        .unwrap();

    assert_eq!(board.fire(coord(0, 0)).unwrap(), ShotResult::Hit);
    assert_eq!(board.fire(coord(0, 1)).unwrap(), ShotResult::Hit);
    assert_eq!(board.fire(coord(0, 2)).unwrap(), ShotResult::Sunk);
    assert_eq!(board.destroyed_count(), 1);
    assert!(board.all_destroyed());

    // repeated shot is rejected
    assert_eq!(
        board.fire(coord(0, 2)).unwrap_err(),
        BoardError::AlreadyFired(coord(0, 2))
    );
}

#[test]
fn test_sink_requires_exactly_length_hits() {
    let mut board = Board::new(6, false);
    board
        .place_ship(Ship::new(2, coord(3, 3), Orientation::Vertical))
        .unwrap();
    assert_eq!(board.fire(coord(3, 3)).unwrap(), ShotResult::Hit);
    assert!(!board.all_destroyed());
    assert_eq!(board.ships()[0].hit_points(), 1);
    assert_eq!(board.fire(coord(4, 3)).unwrap(), ShotResult::Sunk);
    assert!(board.ships()[0].is_destroyed());
}

#[test]
fn test_fire_out_of_bounds() {
    let mut board = Board::new(6, false);
    assert_eq!(
        board.fire(coord(-1, 0)).unwrap_err(),
        BoardError::OutOfBounds(coord(-1, 0))
    );
    assert_eq!(
        board.fire(coord(6, 0)).unwrap_err(),
        BoardError::OutOfBounds(coord(6, 0))
    );
    assert_eq!(
        board.fire(coord(0, 6)).unwrap_err(),
        BoardError::OutOfBounds(coord(0, 6))
    );
}

#[test]
fn test_miss_marks_cell() {
    let mut board = Board::new(6, false);
    assert_eq!(board.fire(coord(5, 5)).unwrap(), ShotResult::Miss);
    assert_eq!(board.cell(coord(5, 5)), Some(Cell::Miss));
    assert_eq!(
        board.fire(coord(5, 5)).unwrap_err(),
        BoardError::AlreadyFired(coord(5, 5))
    );
}

#[test]
fn test_diagonal_buffer_blocks_placement() {
    let mut board = Board::new(6, false);
    board
        .place_ship(Ship::new(3, coord(0, 0), Orientation::Horizontal))
        .unwrap();
    let err = board
        .place_ship(Ship::new(1, coord(1, 1), Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err, BoardError::Overlap(coord(1, 1)));
}

#[test]
fn test_buffer_does_not_mark_cells_at_placement() {
    let mut board = Board::new(6, false);
    board
        .place_ship(Ship::new(3, coord(0, 0), Orientation::Horizontal))
        .unwrap();
    // the buffer is a placement constraint, not a rendering directive
    assert_eq!(board.cell(coord(1, 1)), Some(Cell::Empty));
    assert_eq!(board.cell(coord(0, 3)), Some(Cell::Empty));
}

#[test]
fn test_fire_into_placement_buffer_is_rejected() {
    let mut board = Board::new(6, false);
    board
        .place_ship(Ship::new(3, coord(0, 0), Orientation::Horizontal))
        .unwrap();
    assert_eq!(
        board.fire(coord(1, 1)).unwrap_err(),
        BoardError::AlreadyFired(coord(1, 1))
    );
    // ship cells themselves stay fireable
    assert_eq!(board.fire(coord(0, 1)).unwrap(), ShotResult::Hit);
}

#[test]
fn test_placement_is_atomic() {
    let mut board = Board::new(6, false);
    board
        .place_ship(Ship::new(3, coord(0, 0), Orientation::Horizontal))
        .unwrap();
    let snapshot = board.clone();

    // collides on its first cell only after two valid ones
    assert!(board
        .place_ship(Ship::new(2, coord(1, 3), Orientation::Horizontal))
        .is_err());
    assert_eq!(board, snapshot);

    // runs off the board on its last cell
    assert!(board
        .place_ship(Ship::new(3, coord(5, 4), Orientation::Horizontal))
        .is_err());
    assert_eq!(board, snapshot);

    assert!(board
        .place_ship(Ship::new(3, coord(4, 0), Orientation::Vertical))
        .is_err());
    assert_eq!(board, snapshot);
}

#[test]
fn test_place_out_of_bounds_reports_kind() {
    let mut board = Board::new(6, false);
    let err = board
        .place_ship(Ship::new(3, coord(5, 4), Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err, BoardError::OutOfBounds(coord(5, 6)));
}

#[test]
fn test_sink_reveals_buffer() {
    let mut board = Board::new(6, false);
    board
        .place_ship(Ship::new(1, coord(2, 2), Orientation::Horizontal))
        .unwrap();
    assert_eq!(board.fire(coord(2, 2)).unwrap(), ShotResult::Sunk);
    assert_eq!(board.cell(coord(2, 2)), Some(Cell::Hit));
    for row in 1..=3 {
        for col in 1..=3 {
            if (row, col) == (2, 2) {
                continue;
            }
            assert_eq!(board.cell(coord(row, col)), Some(Cell::Miss));
        }
    }
}

#[test]
fn test_single_vessel_victory() {
    // size-6 board with a single one-cell vessel: sinking it wins outright
    let mut board = Board::new(6, false);
    board
        .place_ship(Ship::new(1, coord(2, 2), Orientation::Vertical))
        .unwrap();
    assert!(!board.all_destroyed());
    assert_eq!(board.fire(coord(2, 2)).unwrap(), ShotResult::Sunk);
    assert!(board.all_destroyed());
}

#[test]
fn test_concealment_is_presentation_only() {
    let mut board = Board::new(6, true);
    board
        .place_ship(Ship::new(2, coord(0, 0), Orientation::Vertical))
        .unwrap();
    // the board stores true state regardless of concealment
    assert!(board.concealed());
    assert_eq!(board.cell(coord(0, 0)), Some(Cell::Ship));
}
