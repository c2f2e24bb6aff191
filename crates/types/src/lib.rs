//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # Board Dimensions
//!
//! Standard Tetris playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: (4, 0), the top-left cell of the piece matrix
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval (~60 FPS) |
//! | `BASE_FALL_MS` | 1000 | Gravity interval at level 1 |
//! | `FALL_STEP_MS` | 50 | Gravity speed-up per level |
//! | `MIN_FALL_MS` | 100 | Gravity floor |
//! | `LINE_CLEAR_DELAY_MS` | 500 | Flash delay before full rows are removed |
//!
//! # Examples
//!
//! ```
//! use arcade_tetris_types::{GameAction, PieceKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(PieceKind::from_index(piece.index()), Some(piece));
//!
//! assert_eq!(GameAction::HardDrop.as_str(), "hardDrop");
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Spawn column for the top-left cell of a new piece.
pub const SPAWN_X: i8 = (GRID_WIDTH / 2) as i8 - 1;

/// Spawn row for the top-left cell of a new piece.
pub const SPAWN_Y: i8 = 0;

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_FALL_MS: u32 = 1000;

/// Gravity interval reduction per level above 1.
pub const FALL_STEP_MS: u32 = 50;

/// Gravity never gets faster than one row per 100ms.
pub const MIN_FALL_MS: u32 = 100;

/// Delay between detecting full rows and removing them (flash animation).
pub const LINE_CLEAR_DELAY_MS: u32 = 500;

/// Lines needed per level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring indexed by rows cleared in one lock (Classic rules).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Tetromino piece kinds, in colour-index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, ordered by colour index.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Colour index (0..=6)
    pub const fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Uppercase letter used in the HUD.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Pause,
    /// Start from the menu, or acknowledge the game-over screen.
    Confirm,
}

impl GameAction {
    /// Name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Confirm => "confirm",
        }
    }
}

/// Top-level game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    StartMenu,
    Active,
    Paused,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::StartMenu => "startMenu",
            Phase::Active => "active",
            Phase::Paused => "paused",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Notable things that happened during a tick, for sound playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Horizontal move succeeded.
    Move,
    Rotate,
    Lock,
    LineClear,
    GameOver,
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;
