//! Board tests - grid access, full-row detection and removal

mod common;

use common::fill_row;

use arcade_tetris::core::Board;
use arcade_tetris::types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), GRID_WIDTH);
    assert_eq!(board.height(), GRID_HEIGHT);

    // All cells should be empty
    for y in 0..GRID_HEIGHT as i8 {
        for x in 0..GRID_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({x}, {y})");
            assert!(!board.is_occupied(x, y));
        }
    }
    assert!(board.find_full_rows().is_empty());
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    // Negative coordinates
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);

    // Beyond bounds
    assert_eq!(board.get(GRID_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, GRID_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, -1, Some(PieceKind::T)));
    assert!(!board.set(GRID_WIDTH as i8, 0, Some(PieceKind::T)));
    assert!(!board.set(0, GRID_HEIGHT as i8, Some(PieceKind::T)));
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_find_full_rows_ascending() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I, &[]);
    fill_row(&mut board, 17, PieceKind::J, &[]);
    fill_row(&mut board, 18, PieceKind::L, &[4]);
    fill_row(&mut board, 3, PieceKind::S, &[]);

    let rows = board.find_full_rows();
    assert_eq!(rows.as_slice(), &[3, 17, 19]);
}

#[test]
fn test_clear_single_row_shifts_down() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I, &[]);
    board.set(2, 18, Some(PieceKind::T));
    board.set(7, 0, Some(PieceKind::Z));

    assert_eq!(board.clear_rows(&[19]), 1);

    assert_eq!(board.get(2, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.get(7, 1), Some(Some(PieceKind::Z)));
    for x in 0..GRID_WIDTH as i8 {
        assert_eq!(board.get(x, 0), Some(None));
    }
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::new();
    // 19 full, 18 has a marker, 17 full, 16 has a marker
    fill_row(&mut board, 19, PieceKind::I, &[]);
    board.set(0, 18, Some(PieceKind::O));
    fill_row(&mut board, 17, PieceKind::I, &[]);
    board.set(9, 16, Some(PieceKind::S));

    assert_eq!(board.clear_rows(&[17, 19]), 2);

    // Markers keep their relative order and sit on the bottom two rows.
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::O)));
    assert_eq!(board.get(9, 18), Some(Some(PieceKind::S)));
    assert_eq!(board.occupied_count(), 2);
    assert!(board.find_full_rows().is_empty());
}

#[test]
fn test_clear_four_rows() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y, PieceKind::I, &[]);
    }
    board.set(4, 15, Some(PieceKind::T));

    let rows = board.find_full_rows();
    assert_eq!(board.clear_rows(&rows), 4);
    assert_eq!(board.occupied_count(), 1);
    assert_eq!(board.get(4, 19), Some(Some(PieceKind::T)));
}

#[test]
fn test_clear_rows_ignores_duplicates_and_out_of_range() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I, &[]);
    assert_eq!(board.clear_rows(&[19, 19, 40]), 1);
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_write_u8_grid_uses_colour_index_plus_one() {
    let mut board = Board::new();
    board.set(0, 0, Some(PieceKind::I));
    board.set(9, 19, Some(PieceKind::Z));

    let mut grid = [[0u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
    board.write_u8_grid(&mut grid);
    assert_eq!(grid[0][0], 1);
    assert_eq!(grid[19][9], 7);
    assert_eq!(grid[10][5], 0);
}

#[test]
fn test_reset_empties_board() {
    let mut board = Board::new();
    fill_row(&mut board, 10, PieceKind::L, &[1, 2]);
    assert_eq!(board.occupied_count(), 8);
    board.reset();
    assert_eq!(board, Board::new());
}
