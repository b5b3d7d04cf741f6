//! Scoring module - line-clear points, level and speed
//!
//! Points are a fixed lookup on lines cleared in one pass; there is no level
//! multiplier. Level is derived from the total score and wraps after ten
//! levels, which resets the speed as well.

use crate::types::{BASE_SPEED, LEVEL_COUNT, LINE_SCORES, POINTS_PER_LEVEL, SPEED_STEP};

/// Points for one clearing pass.
/// More than four lines (only possible on a hand-built field) earns nothing.
pub fn line_clear_points(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// Level (1-10) for a total score
pub fn level_for_score(score: u32) -> u32 {
    1 + (score / POINTS_PER_LEVEL) % LEVEL_COUNT
}

/// Gravity tick threshold for a level
pub fn speed_for_level(level: u32) -> u32 {
    let steps = level.clamp(1, LEVEL_COUNT) - 1;
    BASE_SPEED - steps * SPEED_STEP
}
