use seabattle::{parse_move, Coord};

#[test]
fn test_parse_move_accepts_two_numbers() {
    assert_eq!(parse_move("3 4"), Some(Coord::new(2, 3)));
    assert_eq!(parse_move("1 1"), Some(Coord::new(0, 0)));
    assert_eq!(parse_move("  6   2 "), Some(Coord::new(5, 1)));
}

#[test]
fn test_parse_move_keeps_out_of_range_values() {
    // range checking belongs to the board, not the parser
    assert_eq!(parse_move("0 0"), Some(Coord::new(-1, -1)));
    assert_eq!(parse_move("99 1"), Some(Coord::new(98, 0)));
}

#[test]
fn test_parse_move_rejects_garbage() {
    assert_eq!(parse_move(""), None);
    assert_eq!(parse_move("3"), None);
    assert_eq!(parse_move("a b"), None);
    assert_eq!(parse_move("3 4 5"), None);
    assert_eq!(parse_move("3,4"), None);
}
