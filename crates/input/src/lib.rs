//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Every key press is
//! one discrete action; there is no DAS/ARR auto-shift.

pub mod map;

pub use arcade_tetris_types as types;

pub use map::{handle_key_event, should_quit};
