//! Board setups shared by the integration tests.

use arcade_tetris::core::Board;
use arcade_tetris::types::{PieceKind, GRID_WIDTH};

/// Fill row `y` with `kind`, leaving the columns in `holes` empty.
pub fn fill_row(board: &mut Board, y: i8, kind: PieceKind, holes: &[i8]) {
    for x in 0..GRID_WIDTH as i8 {
        let cell = if holes.contains(&x) { None } else { Some(kind) };
        board.set(x, y, cell);
    }
}
