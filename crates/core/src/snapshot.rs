use crate::piece::Piece;
use crate::types::{Phase, PieceKind, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything the renderer needs for one frame, copied out of the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// 0 = empty, otherwise colour index + 1
    pub board: [[u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub next: PieceKind,
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    /// Rows waiting to be removed after the clear flash.
    pub clearing: [bool; GRID_HEIGHT as usize],
    pub clear_elapsed_ms: u32,
    pub clear_delay_ms: u32,
}

impl GameSnapshot {
    pub fn is_clearing(&self) -> bool {
        self.clearing.iter().any(|&row| row)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            active: None,
            ghost_y: None,
            next: PieceKind::I,
            phase: Phase::StartMenu,
            score: 0,
            level: 1,
            lines: 0,
            clearing: [false; GRID_HEIGHT as usize],
            clear_elapsed_ms: 0,
            clear_delay_ms: 0,
        }
    }
}
