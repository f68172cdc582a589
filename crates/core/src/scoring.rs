//! Scoring module - line-clear points and the level curve
//!
//! Points depend only on how many lines one lock cleared and on the level the
//! game was at before that lock. Every ten lines the level goes up by one and
//! gravity gets 60ms faster, down to a 120ms floor.

use serde::{Deserialize, Serialize};

use crate::types::{
    BASE_DROP_INTERVAL_MS, DROP_INTERVAL_FLOOR_MS, DROP_INTERVAL_STEP_MS, LINES_PER_LEVEL,
    LINE_SCORES,
};

/// Points for clearing `lines` rows in one lock at `level`.
///
/// Anything above four lines pays the four-line rate.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)].saturating_mul(level)
}

/// Level reached after `total_lines` cleared lines (levels start at 1).
pub fn level_for_lines(total_lines: u32) -> u32 {
    1 + total_lines / LINES_PER_LEVEL
}

/// Gravity interval for a level, never below [`DROP_INTERVAL_FLOOR_MS`].
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_INTERVAL_STEP_MS);
    BASE_DROP_INTERVAL_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_FLOOR_MS)
}

/// Score, line count, level and gravity of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Progress {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
}

impl Progress {
    pub fn new() -> Self {
        Self {
            score: 0,
            lines: 0,
            level: 1,
            drop_interval_ms: BASE_DROP_INTERVAL_MS,
        }
    }

    /// Account for one lock that cleared `cleared` lines and return the points awarded.
    ///
    /// Points use the level from before this clear. A lock that cleared nothing
    /// changes nothing.
    pub fn record_clear(&mut self, cleared: usize) -> u32 {
        if cleared == 0 {
            return 0;
        }

        let points = line_clear_score(cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared as u32);
        self.level = level_for_lines(self.lines);
        self.drop_interval_ms = drop_interval_ms(self.level);
        points
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}
