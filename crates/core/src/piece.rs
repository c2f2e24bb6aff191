//! Piece module - the falling tetromino
//!
//! A piece is a kind, a rotation (0..=3) and the board position of its
//! matrix's top-left cell. Every operation that consults the board takes it
//! as an argument; a piece never holds on to one.
//!
//! Moves and rotations are tentative: the new state is checked against the
//! board and rolled back when it does not fit, so a rejected attempt is
//! never observable.

use crate::board::Board;
use crate::shapes::{get_shape, Shape};
use crate::types::{PieceKind, GRID_HEIGHT, GRID_WIDTH, SPAWN_X, SPAWN_Y};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at an arbitrary position in its spawn orientation.
    pub fn new(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation: 0,
            x,
            y,
        }
    }

    /// Create a piece at the spawn position.
    pub fn spawn(kind: PieceKind) -> Self {
        Self::new(kind, SPAWN_X, SPAWN_Y)
    }

    /// Current orientation.
    pub fn shape(&self) -> &'static Shape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board coordinates of the four cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape()
            .cells
            .iter()
            .map(move |&(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Check the piece against the board.
    ///
    /// Columns must lie in `[0, GRID_WIDTH)` and rows below `GRID_HEIGHT`.
    /// Cells on rows `>= 0` must not overlap locked cells; cells above the
    /// board only need to respect the column bounds.
    pub fn is_valid_position(&self, board: &Board) -> bool {
        self.cells().all(|(x, y)| {
            if x < 0 || x >= GRID_WIDTH as i8 || y >= GRID_HEIGHT as i8 {
                return false;
            }
            y < 0 || !board.is_occupied(x, y)
        })
    }

    /// Shift by `(dx, dy)` if the result fits, otherwise leave the piece as is.
    pub fn try_move(&mut self, dx: i8, dy: i8, board: &Board) -> bool {
        let prev = *self;
        self.x += dx;
        self.y += dy;
        if !self.is_valid_position(board) {
            *self = prev;
            return false;
        }
        true
    }

    /// Rotate 90° clockwise in place (no wall kicks).
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let prev = self.rotation;
        self.rotation = (self.rotation + 1) % 4;
        if !self.is_valid_position(board) {
            self.rotation = prev;
            return false;
        }
        true
    }

    /// Rows the piece can still fall before it would collide.
    pub fn drop_distance(&self, board: &Board) -> i8 {
        let mut probe = *self;
        let mut distance = 0;
        while probe.try_move(0, 1, board) {
            distance += 1;
        }
        distance
    }

    /// Write the piece's cells into the board.
    ///
    /// Cells outside the board are skipped.
    pub fn lock(&self, board: &mut Board) {
        for (x, y) in self.cells() {
            board.set(x, y, Some(self.kind));
        }
    }
}
