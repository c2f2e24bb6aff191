//! Arcade Tetris (workspace facade crate).
//!
//! Re-exports the member crates under `arcade_tetris::{core,input,term,types}`
//! and owns best-score persistence, which is the only piece of file I/O.

pub mod highscore;

pub use arcade_tetris_core as core;
pub use arcade_tetris_input as input;
pub use arcade_tetris_term as term;
pub use arcade_tetris_types as types;
