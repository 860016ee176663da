//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Counters collected while searching.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited (every recursive call counts once).
    pub nodes: u64,

    /// Terminal positions reached.
    pub leaves: u64,

    /// Sibling lists abandoned by an alpha-beta cutoff.
    pub cutoffs: u64,

    /// Deepest ply reached below the root move.
    pub max_depth: u8,

    /// Total time spent choosing the last move (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add another set of counters into this one.
    pub fn absorb(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.cutoffs += other.cutoffs;
        self.max_depth = self.max_depth.max(other.max_depth);
        self.time_us += other.time_us;
    }

    /// Calculate nodes searched per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
