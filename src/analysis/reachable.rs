//! Enumeration of every position reachable by legal alternating play.

use rustc_hash::FxHashSet;

use crate::core::{Board, Player};
use crate::rules::is_terminal;

/// Every board reachable from the empty board when `first` moves first,
/// including the empty board and terminal positions.
///
/// Play stops at a win, so boards with two completed lines of different
/// marks never appear.
#[must_use]
pub fn reachable_positions(first: Player) -> FxHashSet<Board> {
    let mut seen = FxHashSet::default();
    let mut stack = vec![Board::new()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        if is_terminal(&board) {
            continue;
        }
        let mark = to_move(&board, first).cell();
        for mv in board.empty_cells() {
            let mut next = board;
            next.set(mv, mark);
            stack.push(next);
        }
    }

    seen
}

/// Non-terminal reachable positions paired with the player to move,
/// sorted by number of marks with the empty board first.
#[must_use]
pub fn open_positions(first: Player) -> Vec<(Board, Player)> {
    let mut positions: Vec<_> = reachable_positions(first)
        .into_iter()
        .filter(|board| !is_terminal(board))
        .map(|board| (board, to_move(&board, first)))
        .collect();
    positions.sort_by_key(|(board, _)| (board.occupied(), board.to_string()));
    positions
}

/// Whose turn it is on a legal board where `first` opened.
#[must_use]
pub fn to_move(board: &Board, first: Player) -> Player {
    if board.count(first) == board.count(first.opponent()) {
        first
    } else {
        first.opponent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reachable_position_count() {
        // Well-known count of legal tic-tac-toe positions.
        assert_eq!(reachable_positions(Player::X).len(), 5478);
        assert_eq!(reachable_positions(Player::O).len(), 5478);
    }

    #[test]
    fn test_reachable_positions_have_at_most_one_winner() {
        for board in reachable_positions(Player::X) {
            assert!(!(board.is_winner(Player::X) && board.is_winner(Player::O)));
        }
    }

    #[test]
    fn test_open_positions_are_not_terminal() {
        let open = open_positions(Player::X);
        assert!(!open.is_empty());
        assert_eq!(open[0].0, Board::new());
        assert_eq!(open[0].1, Player::X);
        assert!(open.iter().all(|(board, _)| !is_terminal(board)));
    }

    #[test]
    fn test_to_move() {
        let b: Board = "X../.../...".parse().unwrap();
        assert_eq!(to_move(&b, Player::X), Player::O);
        assert_eq!(to_move(&b, Player::O), Player::X);
        assert_eq!(to_move(&Board::new(), Player::O), Player::O);
    }
}
