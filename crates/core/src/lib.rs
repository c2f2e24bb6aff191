//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: Same seed and same elapsed times produce identical games
//! - **Testable**: Gravity and the line-clear delay advance only through `tick`
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: No allocation on the tick, move or lock paths
//!
//! # Module Structure
//!
//! - [`shapes`]: the 7 tetrominoes and their 28 precomputed orientations
//! - [`piece`]: the falling piece, with move/rotate/lock against a borrowed board
//! - [`board`]: 10x20 grid with line detection and removal
//! - [`game_state`]: phase machine, gravity, line-clear delay, scoring
//! - [`rng`]: uniform random piece selection
//! - [`scoring`]: classic points table, level curve, gravity curve
//! - [`snapshot`]: plain-data copy of the state for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: any kind can follow any kind, repeats included
//! - **Plain rotation**: clockwise only, about the matrix origin, no wall kicks
//! - **No lock delay**: a piece locks on the first gravity step it cannot take
//! - **Line clear delay**: full rows flash for 500ms before they are removed
//! - **Scoring**: 40/100/300/1200 × level, level up every 10 lines
//!
//! # Example
//!
//! ```
//! use arcade_tetris_core::GameState;
//! use arcade_tetris_types::{GameAction, Phase};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.phase(), Phase::StartMenu);
//!
//! game.apply_action(GameAction::Confirm);
//! assert_eq!(game.phase(), Phase::Active);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.board().occupied_count(), 4);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. Gravity starts at one row per second and speeds up by
//! 50ms per level, never faster than 100ms.

pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use arcade_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, FullRows};
pub use game_state::{GameEvents, GameState};
pub use piece::Piece;
pub use rng::{PieceRng, SimpleRng};
pub use scoring::{fall_interval_ms, level_for_lines, line_clear_points};
pub use shapes::{color_of, get_shape, get_spawn_shape, Shape};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
