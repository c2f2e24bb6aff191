//! Scoring module - Classic Tetris scoring and level curve
//!
//! Levels start at 1. Points for a lock are the classic line table scaled by
//! the current level, the level rises every 10 lines, and gravity speeds up
//! by 50ms per level down to a 100ms floor.

use crate::types::{BASE_FALL_MS, FALL_STEP_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_FALL_MS};

/// Calculate line clear score (Classic rules)
/// lines: number of lines cleared in one lock (0-4, larger counts score as 4)
/// level: current level (1-based)
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    let base = LINE_SCORES[lines.min(LINE_SCORES.len() - 1)];
    base.saturating_mul(level)
}

/// Level for a running total of cleared lines.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level (in milliseconds)
pub fn fall_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(FALL_STEP_MS);
    BASE_FALL_MS.saturating_sub(speedup).max(MIN_FALL_MS)
}
