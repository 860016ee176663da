//! The engine facade a game loop talks to.
//!
//! An `Engine` owns its configuration, a seeded RNG and the move policy for
//! the configured tier. It never holds a board between calls: the loop
//! passes the authoritative board in and applies the returned move itself.

use std::time::Instant;

use tracing::{debug, warn};

use crate::core::{Board, GameRng, GameRngState, Move, Player};
use crate::error::{EngineError, Result};
use crate::rules::is_terminal;

use super::config::{Difficulty, EngineConfig};
use super::minimax::{Minimax, Score};
use super::policy::MovePolicy;
use super::stats::SearchStats;

/// Move selector for the automated player.
pub struct Engine {
    /// Engine configuration.
    config: EngineConfig,

    /// RNG for the random and greedy tiers.
    rng: GameRng,

    /// Move-selection policy.
    policy: Box<dyn MovePolicy>,

    /// Statistics of the last call.
    stats: SearchStats,

    /// Set once `with_policy` replaces the tier's policy.
    custom_policy: bool,
}

impl Engine {
    /// Create an engine for the configured difficulty.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            policy: config.difficulty.policy(),
            config,
            stats: SearchStats::default(),
            custom_policy: false,
        }
    }

    /// Replace the tier's policy with a custom one.
    ///
    /// Afterwards [`Engine::difficulty`] reports `None`. `evaluate` still
    /// searches with the configured tier's pruning.
    pub fn with_policy<P: MovePolicy + 'static>(mut self, policy: P) -> Self {
        self.policy = Box::new(policy);
        self.custom_policy = true;
        self
    }

    /// Choose the automated player's move.
    ///
    /// The board must not be terminal. Violations are reported as
    /// [`EngineError::TerminalPosition`] rather than producing a bogus move.
    /// The returned move always names a cell that is empty on `board`.
    pub fn select_move(&mut self, board: &Board, player: Player) -> Result<Move> {
        let start = Instant::now();
        self.stats.reset();

        if is_terminal(board) {
            warn!(%player, "move requested on a finished game");
            return Err(EngineError::TerminalPosition);
        }

        let mv = self
            .policy
            .choose_move(board, player, &mut self.rng, &mut self.stats)
            .ok_or(EngineError::TerminalPosition)?;

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            policy = self.policy.name(),
            %player,
            %mv,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "selected move"
        );

        Ok(mv)
    }

    /// Game-theoretic value of `board` with `player` to move.
    ///
    /// `+1` means `player` can force a win, `0` a draw, `-1` a loss.
    pub fn evaluate(&mut self, board: &Board, player: Player) -> Result<Score> {
        let start = Instant::now();
        self.stats.reset();

        if is_terminal(board) {
            return Err(EngineError::TerminalPosition);
        }

        let mut search = Minimax::new();
        let score = search.value(board, player, self.config.difficulty.pruning());
        self.stats.absorb(search.stats());
        self.stats.time_us = start.elapsed().as_micros() as u64;

        debug!(%player, score, nodes = self.stats.nodes, "evaluated position");
        Ok(score)
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The tier choosing moves, or `None` if a custom policy is installed.
    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        (!self.custom_policy).then_some(self.config.difficulty)
    }

    /// Name of the active policy.
    #[must_use]
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Get statistics of the last call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Snapshot of the RNG, for reproducing a session.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
