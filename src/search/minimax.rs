//! Exhaustive minimax search, with and without alpha-beta pruning.
//!
//! ## Place/undo protocol
//!
//! The recursion works on a single scratch board. Every child is explored
//! by `set` on entry and `clear` before the next sibling, with no early
//! exit in between, so each frame returns the board exactly as it got it.
//! The caller's board is copied once at the root and never touched.
//!
//! ## Scores
//!
//! Scores are `+1` (maximizer wins), `0` (draw) or `-1` (maximizer loses).
//! Depth is tracked for statistics only and does not weight the score, so
//! a slow win ties with a fast one and the first in scan order is kept.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Move, Player};

use super::stats::SearchStats;

/// Game-theoretic value from the maximizer's point of view.
pub type Score = i32;

/// Maximizer has completed a line.
pub const WIN: Score = 1;
/// Board full with no line.
pub const DRAW: Score = 0;
/// Minimizer has completed a line.
pub const LOSS: Score = -1;

/// Which search variant to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pruning {
    /// Plain minimax: every continuation is explored.
    None,
    /// Alpha-beta: same result, fewer nodes.
    #[default]
    AlphaBeta,
}

/// A candidate move together with its search score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: Score,
}

/// Score of a terminal position, or `None` if play continues.
///
/// Checked in a fixed order: maximizer win, minimizer win, full board.
#[must_use]
pub fn terminal_score(board: &Board, maximizer: Player) -> Option<Score> {
    if board.is_winner(maximizer) {
        Some(WIN)
    } else if board.is_winner(maximizer.opponent()) {
        Some(LOSS)
    } else if board.is_full() {
        Some(DRAW)
    } else {
        None
    }
}

/// Depth-first game-tree searcher.
///
/// Holds only counters; positions are passed in per call.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    stats: SearchStats,
}

impl Minimax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters accumulated since creation or the last reset.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Value of `board` by unpruned minimax.
    ///
    /// `maximizing` selects whose mark is placed at this layer: the
    /// maximizer's when true, the opponent's otherwise.
    pub fn evaluate(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        maximizer: Player,
    ) -> Score {
        self.visit(depth);
        if let Some(score) = terminal_score(board, maximizer) {
            self.stats.leaves += 1;
            return score;
        }

        let mark = layer_mark(maximizing, maximizer);
        let mut best = if maximizing { Score::MIN } else { Score::MAX };

        for mv in board.empty_cells() {
            board.set(mv, mark);
            let score = self.evaluate(board, depth + 1, !maximizing, maximizer);
            board.clear(mv);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }

    /// Value of `board` by minimax with alpha-beta pruning.
    ///
    /// `alpha` is the best score the maximizer can already guarantee and
    /// `beta` the best the minimizer can. Called with the full window
    /// (`Score::MIN`, `Score::MAX`) the result equals [`Minimax::evaluate`].
    pub fn evaluate_pruned(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
        maximizer: Player,
    ) -> Score {
        self.visit(depth);
        if let Some(score) = terminal_score(board, maximizer) {
            self.stats.leaves += 1;
            return score;
        }

        let mark = layer_mark(maximizing, maximizer);
        let mut best = if maximizing { Score::MIN } else { Score::MAX };

        for mv in board.empty_cells() {
            board.set(mv, mark);
            let score = self.evaluate_pruned(board, depth + 1, !maximizing, alpha, beta, maximizer);
            board.clear(mv);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }

    /// Value of the position for `to_move`, who places the next mark.
    #[must_use]
    pub fn value(&mut self, board: &Board, to_move: Player, pruning: Pruning) -> Score {
        let mut scratch = *board;
        match pruning {
            Pruning::None => self.evaluate(&mut scratch, 0, true, to_move),
            Pruning::AlphaBeta => {
                self.evaluate_pruned(&mut scratch, 0, true, Score::MIN, Score::MAX, to_move)
            }
        }
    }

    /// Score every empty cell for `player`, in row-major scan order.
    ///
    /// Each candidate is placed and searched one ply in with the opponent to
    /// move. Pruned searches start from the full window per candidate, so
    /// the scores are exact and identical across both variants.
    pub fn score_moves(
        &mut self,
        board: &Board,
        player: Player,
        pruning: Pruning,
    ) -> Vec<ScoredMove> {
        let mut scratch = *board;
        let mut scored = Vec::with_capacity(scratch.empty_cells().len());

        for mv in scratch.empty_cells() {
            scratch.set(mv, player.cell());
            let score = match pruning {
                Pruning::None => self.evaluate(&mut scratch, 0, false, player),
                Pruning::AlphaBeta => {
                    self.evaluate_pruned(&mut scratch, 0, false, Score::MIN, Score::MAX, player)
                }
            };
            scratch.clear(mv);
            scored.push(ScoredMove { mv, score });
        }

        scored
    }

    /// The best move for `player`, or `None` if the board has no empty cell.
    ///
    /// Ties keep the earliest move in scan order: a later candidate only
    /// replaces the current best with a strictly greater score.
    pub fn best_move(
        &mut self,
        board: &Board,
        player: Player,
        pruning: Pruning,
    ) -> Option<ScoredMove> {
        self.score_moves(board, player, pruning)
            .into_iter()
            .fold(None, |best: Option<ScoredMove>, candidate| match best {
                Some(b) if candidate.score <= b.score => Some(b),
                _ => Some(candidate),
            })
    }

    fn visit(&mut self, depth: u8) {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
    }
}

fn layer_mark(maximizing: bool, maximizer: Player) -> crate::core::Cell {
    if maximizing {
        maximizer.cell()
    } else {
        maximizer.opponent().cell()
    }
}
