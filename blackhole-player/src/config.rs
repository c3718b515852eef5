//! Tuning knobs for [`SearchAgent`](crate::SearchAgent).

use std::time::Duration;

/// Plies searched when no depth is given.
pub const DEFAULT_DEPTH: u8 = 4;

/// Wall-clock budget for a single move when none is given.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_millis(2000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of plies to look ahead, counting the move being chosen. Must be positive.
    pub depth: u8,
    /// How long a move may take before the best candidate so far is played instead.
    pub time_budget: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            time_budget: DEFAULT_TIME_BUDGET,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(self, depth: u8) -> Self {
        Self { depth, ..self }
    }

    pub fn with_time_budget(self, time_budget: Duration) -> Self {
        Self {
            time_budget,
            ..self
        }
    }
}
