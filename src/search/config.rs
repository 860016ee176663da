//! Engine configuration parameters.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EngineError;

use super::minimax::Pruning;
use super::policy::{GreedyPolicy, MinimaxPolicy, MovePolicy, RandomPolicy};

/// Named difficulty tiers, weakest first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniform random move.
    Random,
    /// Win if possible, else block, else random.
    Greedy,
    /// Full-depth minimax.
    Minimax,
    /// Full-depth minimax with alpha-beta pruning.
    #[default]
    AlphaBeta,
}

impl Difficulty {
    /// All tiers, weakest first.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Random,
        Difficulty::Greedy,
        Difficulty::Minimax,
        Difficulty::AlphaBeta,
    ];

    /// Build the move policy for this tier.
    #[must_use]
    pub fn policy(self) -> Box<dyn MovePolicy> {
        match self {
            Difficulty::Random => Box::new(RandomPolicy),
            Difficulty::Greedy => Box::new(GreedyPolicy),
            Difficulty::Minimax => Box::new(MinimaxPolicy::unpruned()),
            Difficulty::AlphaBeta => Box::new(MinimaxPolicy::alpha_beta()),
        }
    }

    /// Search variant used when this tier evaluates a position.
    #[must_use]
    pub fn pruning(self) -> Pruning {
        match self {
            Difficulty::Minimax => Pruning::None,
            _ => Pruning::AlphaBeta,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Random => "random",
            Difficulty::Greedy => "greedy",
            Difficulty::Minimax => "minimax",
            Difficulty::AlphaBeta => "alphabeta",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    /// Accepts tier names and the Easy/Medium/Hard labels of a typical
    /// difficulty selector.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "easy" => Ok(Difficulty::Random),
            "greedy" | "medium" => Ok(Difficulty::Greedy),
            "minimax" => Ok(Difficulty::Minimax),
            "alphabeta" | "alpha-beta" | "hard" => Ok(Difficulty::AlphaBeta),
            _ => Err(EngineError::UnknownDifficulty {
                name: s.to_string(),
            }),
        }
    }
}

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Move-selection tier.
    pub difficulty: Difficulty,

    /// Random seed for the random and greedy tiers.
    /// Same seed produces the same moves.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::AlphaBeta,
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a custom difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
