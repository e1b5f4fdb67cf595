//! Tests for board state, legality, and win/tie queries.

use std::rc::Rc;
use tictactoe_console::{Board, PlaceError, Player};

fn players() -> (Rc<Player>, Rc<Player>) {
    (Rc::new(Player::new("You", 'X')), Rc::new(Player::new("Computer", 'O')))
}

#[test]
fn test_fresh_board() {
    let board = Board::new();
    assert_eq!(board.available_cells().len(), 9);
    assert_eq!(board.render(), " | | \n | | \n | | \n");
}

#[test]
fn test_place_and_query_occupancy() {
    let (x, o) = players();
    let mut board = Board::new();

    board.place(1, 2, &x).expect("cell is open");
    assert!(board.is_occupied_by(1, 2, &x));
    assert!(!board.is_occupied_by(1, 2, &o));
    assert!(!board.is_occupied_by(0, 0, &x));
}

#[test]
fn test_occupancy_is_by_identity() {
    let (x, _) = players();
    let twin = Player::new("You", 'X');
    let mut board = Board::new();

    board.place(0, 0, &x).expect("cell is open");
    assert!(board.is_occupied_by(0, 0, &x));
    assert!(
        !board.is_occupied_by(0, 0, &twin),
        "a distinct player with the same name and marker must not match"
    );
}

#[test]
fn test_available_cells_row_major() {
    let (x, _) = players();
    let mut board = Board::new();

    board.place(0, 0, &x).expect("cell is open");
    board.place(1, 1, &x).expect("cell is open");

    assert_eq!(
        board.available_cells(),
        vec![(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]
    );
}

#[test]
fn test_available_plus_placed_is_nine() {
    let (x, o) = players();
    let mut board = Board::new();

    let moves = [(0, 0), (1, 1), (2, 2), (0, 1), (2, 0)];
    for (placed, &(row, column)) in moves.iter().enumerate() {
        assert_eq!(board.available_cells().len() + placed, 9);
        let player = if placed % 2 == 0 { &x } else { &o };
        board.place(row, column, player).expect("cell is open");
    }
    assert_eq!(board.available_cells().len() + moves.len(), 9);
}

#[test]
fn test_place_out_of_bounds() {
    let (x, _) = players();
    let mut board = Board::new();

    let result = board.place(3, 0, &x);
    assert_eq!(result, Err(PlaceError::OutOfBounds { row: 3, column: 0 }));

    let result = board.place(0, 7, &x);
    assert_eq!(result, Err(PlaceError::OutOfBounds { row: 0, column: 7 }));
}

#[test]
fn test_place_occupied() {
    let (x, o) = players();
    let mut board = Board::new();

    board.place(2, 2, &x).expect("cell is open");
    let result = board.place(2, 2, &o);
    assert_eq!(result, Err(PlaceError::Occupied { row: 2, column: 2 }));
    assert!(board.is_occupied_by(2, 2, &x), "failed placement must not overwrite");
}

#[test]
fn test_out_of_range_query_is_false() {
    let (x, _) = players();
    let board = Board::new();
    assert!(!board.is_occupied_by(5, 5, &x));
}

#[test]
fn test_win_detection_rows() {
    let (x, _) = players();
    for row in 0..3 {
        let mut board = Board::new();
        for column in 0..3 {
            board.place(row, column, &x).expect("cell is open");
        }
        assert!(board.has_winner(&x), "row {row} should win");
    }
}

#[test]
fn test_win_detection_columns() {
    let (x, _) = players();
    for column in 0..3 {
        let mut board = Board::new();
        for row in 0..3 {
            board.place(row, column, &x).expect("cell is open");
        }
        assert!(board.has_winner(&x), "column {column} should win");
    }
}

#[test]
fn test_win_detection_diagonals() {
    let (x, _) = players();

    let mut board = Board::new();
    for i in 0..3 {
        board.place(i, i, &x).expect("cell is open");
    }
    assert!(board.has_winner(&x), "main diagonal should win");

    let mut board = Board::new();
    for i in 0..3 {
        board.place(i, 2 - i, &x).expect("cell is open");
    }
    assert!(board.has_winner(&x), "anti-diagonal should win");
}

#[test]
fn test_partial_line_is_not_a_win() {
    let (x, o) = players();
    let mut board = Board::new();

    board.place(0, 0, &x).expect("cell is open");
    board.place(0, 1, &x).expect("cell is open");
    assert!(!board.has_winner(&x));

    // Completing the line with the other player wins for nobody.
    board.place(0, 2, &o).expect("cell is open");
    assert!(!board.has_winner(&x));
    assert!(!board.has_winner(&o));
}

#[test]
fn test_render_shows_markers() {
    let (x, o) = players();
    let mut board = Board::new();

    board.place(0, 0, &x).expect("cell is open");
    board.place(1, 1, &o).expect("cell is open");
    board.place(2, 2, &x).expect("cell is open");

    assert_eq!(board.render(), "X| | \n |O| \n | |X\n");
}
