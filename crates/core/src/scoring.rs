//! Scoring module - placement points with a combo multiplier
//!
//! Rules per accepted placement, applied in order:
//!
//! 1. Every placed cell is worth `multiplier` points.
//! 2. If the placement cleared lines, each line is worth
//!    `POINTS_PER_LINE * multiplier`; the multiplier then grows by one and the
//!    no-clear streak resets.
//! 3. Otherwise the no-clear streak grows; on reaching
//!    `NO_CLEAR_RESET_STREAK` the multiplier drops back to the base value and
//!    the streak starts over.

use crate::types::{BASE_MULTIPLIER, NO_CLEAR_RESET_STREAK, POINTS_PER_LINE};

/// Score calculation result for one placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points for the placed cells.
    pub placement_score: u32,
    /// Points for cleared lines.
    pub line_clear_score: u32,
    pub total: u32,
    /// Multiplier used for this placement (before any update).
    pub multiplier: u32,
}

/// Points for placing `cells` cells at `multiplier`
pub fn calculate_placement_score(cells: u32, multiplier: u32) -> u32 {
    cells.saturating_mul(multiplier)
}

/// Points for clearing `lines` rows/columns at `multiplier`
pub fn calculate_line_score(lines: u32, multiplier: u32) -> u32 {
    lines
        .saturating_mul(POINTS_PER_LINE)
        .saturating_mul(multiplier)
}

/// Cumulative score and combo state for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEngine {
    score: u32,
    multiplier: u32,
    no_clear_streak: u32,
}

impl ScoreEngine {
    pub fn new() -> Self {
        Self {
            score: 0,
            multiplier: BASE_MULTIPLIER,
            no_clear_streak: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn no_clear_streak(&self) -> u32 {
        self.no_clear_streak
    }

    /// Book one accepted placement
    pub fn apply_placement(&mut self, occupied_cells: u32, lines_cleared: u32) -> ScoreResult {
        let multiplier = self.multiplier;
        let placement_score = calculate_placement_score(occupied_cells, multiplier);
        let line_clear_score = calculate_line_score(lines_cleared, multiplier);

        if lines_cleared > 0 {
            self.multiplier = self.multiplier.saturating_add(1);
            self.no_clear_streak = 0;
        } else {
            self.no_clear_streak += 1;
            if self.no_clear_streak >= NO_CLEAR_RESET_STREAK {
                self.multiplier = BASE_MULTIPLIER;
                self.no_clear_streak = 0;
            }
        }

        let total = placement_score.saturating_add(line_clear_score);
        self.score = self.score.saturating_add(total);

        ScoreResult {
            placement_score,
            line_clear_score,
            total,
            multiplier,
        }
    }

    /// Back to a fresh session's state
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}
