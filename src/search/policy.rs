//! Move-selection policies, one per difficulty tier.
//!
//! Policies are trait-based so callers can plug in their own:
//! - `RandomPolicy`: uniform over empty cells
//! - `GreedyPolicy`: win now, else block, else random
//! - `MinimaxPolicy`: full-depth search, with or without pruning

use tracing::trace;

use crate::core::{Board, GameRng, Move, Player};

use super::minimax::{Minimax, Pruning};
use super::stats::SearchStats;

/// Policy for choosing the automated player's next move.
pub trait MovePolicy: Send + Sync {
    /// Choose a move for `player` on `board`.
    ///
    /// Returns `None` only if the board has no empty cell. Search counters
    /// are added to `stats`.
    fn choose_move(
        &self,
        board: &Board,
        player: Player,
        rng: &mut GameRng,
        stats: &mut SearchStats,
    ) -> Option<Move>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Uniform random choice among empty cells. No look-ahead.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose_move(
        &self,
        board: &Board,
        _player: Player,
        rng: &mut GameRng,
        _stats: &mut SearchStats,
    ) -> Option<Move> {
        rng.pick_move(&board.empty_cells())
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// One-ply lookahead: take a winning cell, else block the opponent's,
/// else fall back to a random cell.
#[derive(Clone, Debug, Default)]
pub struct GreedyPolicy;

impl MovePolicy for GreedyPolicy {
    fn choose_move(
        &self,
        board: &Board,
        player: Player,
        rng: &mut GameRng,
        stats: &mut SearchStats,
    ) -> Option<Move> {
        if let Some(mv) = completing_move(board, player) {
            trace!(%player, %mv, "greedy: winning move");
            return Some(mv);
        }
        if let Some(mv) = completing_move(board, player.opponent()) {
            trace!(%player, %mv, "greedy: blocking move");
            return Some(mv);
        }
        RandomPolicy.choose_move(board, player, rng, stats)
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}

/// Full-depth search. Picks the first move in scan order with the best score.
#[derive(Clone, Debug, Default)]
pub struct MinimaxPolicy {
    pruning: Pruning,
}

impl MinimaxPolicy {
    #[must_use]
    pub fn new(pruning: Pruning) -> Self {
        Self { pruning }
    }

    /// Plain minimax, no pruning.
    #[must_use]
    pub fn unpruned() -> Self {
        Self::new(Pruning::None)
    }

    /// Minimax with alpha-beta pruning.
    #[must_use]
    pub fn alpha_beta() -> Self {
        Self::new(Pruning::AlphaBeta)
    }

    #[must_use]
    pub fn pruning(&self) -> Pruning {
        self.pruning
    }
}

impl MovePolicy for MinimaxPolicy {
    fn choose_move(
        &self,
        board: &Board,
        player: Player,
        _rng: &mut GameRng,
        stats: &mut SearchStats,
    ) -> Option<Move> {
        let mut search = Minimax::new();
        let best = search.best_move(board, player, self.pruning);
        stats.absorb(search.stats());

        if let Some(best) = best {
            trace!(%player, mv = %best.mv, score = best.score, "minimax: best move");
        }
        best.map(|b| b.mv)
    }

    fn name(&self) -> &'static str {
        match self.pruning {
            Pruning::None => "minimax",
            Pruning::AlphaBeta => "alphabeta",
        }
    }
}

/// First empty cell in scan order that completes a line for `player`.
///
/// Each candidate is placed on a private copy, tested, and cleared.
#[must_use]
pub fn completing_move(board: &Board, player: Player) -> Option<Move> {
    let mut scratch = *board;
    for mv in board.empty_cells() {
        scratch.set(mv, player.cell());
        let wins = scratch.is_winner(player);
        scratch.clear(mv);
        if wins {
            return Some(mv);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_completing_move() {
        assert_eq!(completing_move(&board("XX./OO./..."), Player::X), Some(mv(0, 2)));
        assert_eq!(completing_move(&board("XX./OO./..."), Player::O), Some(mv(1, 2)));
        assert_eq!(completing_move(&board("X../.O./..."), Player::X), None);
    }

    #[test]
    fn test_completing_move_scan_order() {
        // X can win at (0,2) via the row or (2,0) via the column.
        assert_eq!(completing_move(&board("XX./X../..."), Player::X), Some(mv(0, 2)));
    }

    #[test]
    fn test_random_picks_empty_cell() {
        let b = board("XOX/O.X/OXO");
        let mut rng = GameRng::new(1);
        let mut stats = SearchStats::new();
        let chosen = RandomPolicy.choose_move(&b, Player::O, &mut rng, &mut stats);
        assert_eq!(chosen, Some(mv(1, 1)));
    }

    #[test]
    fn test_random_on_full_board() {
        let mut rng = GameRng::new(1);
        let mut stats = SearchStats::new();
        let chosen =
            RandomPolicy.choose_move(&board("XOX/OXO/OXO"), Player::X, &mut rng, &mut stats);
        assert_eq!(chosen, None);
    }

    #[test]
    fn test_greedy_prefers_win_over_block() {
        let mut rng = GameRng::new(3);
        let mut stats = SearchStats::new();
        let chosen =
            GreedyPolicy.choose_move(&board("XX./OO./..."), Player::X, &mut rng, &mut stats);
        assert_eq!(chosen, Some(mv(0, 2)));
    }

    #[test]
    fn test_greedy_blocks() {
        let mut rng = GameRng::new(3);
        let mut stats = SearchStats::new();
        let chosen =
            GreedyPolicy.choose_move(&board("OO./X../..."), Player::X, &mut rng, &mut stats);
        assert_eq!(chosen, Some(mv(0, 2)));
    }

    #[test]
    fn test_minimax_policy_counts_nodes() {
        let mut rng = GameRng::new(0);
        let mut stats = SearchStats::new();
        let policy = MinimaxPolicy::alpha_beta();
        let chosen = policy.choose_move(&board("X../.O./..."), Player::X, &mut rng, &mut stats);
        assert!(chosen.is_some());
        assert!(stats.nodes > 0);
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(RandomPolicy.name(), "random");
        assert_eq!(GreedyPolicy.name(), "greedy");
        assert_eq!(MinimaxPolicy::unpruned().name(), "minimax");
        assert_eq!(MinimaxPolicy::alpha_beta().name(), "alphabeta");
        assert_eq!(MinimaxPolicy::default().pruning(), Pruning::AlphaBeta);
    }
}
