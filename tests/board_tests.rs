//! Board model and outcome integration tests.

use rust_ttt::core::{Board, Cell, Move, Player, WINNING_LINES};
use rust_ttt::rules::{is_terminal, outcome, GameResult};
use rust_ttt::EngineError;

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

// =============================================================================
// Predicates
// =============================================================================

#[test]
fn test_draw_position_detected() {
    let b = Board::from_rows([
        [Cell::X, Cell::O, Cell::X],
        [Cell::O, Cell::X, Cell::O],
        [Cell::O, Cell::X, Cell::O],
    ]);

    assert!(b.is_full());
    assert!(!b.is_winner(Player::X));
    assert!(!b.is_winner(Player::O));
    assert_eq!(outcome(&b), Some(GameResult::Draw));
}

#[test]
fn test_each_line_wins_for_exactly_that_mark() {
    for player in Player::BOTH {
        for line in WINNING_LINES {
            let mut b = Board::new();
            for mv in line {
                b.place(mv, player).unwrap();
            }
            assert!(b.is_winner(player), "{player} should win on {line:?}");
            assert!(!b.is_winner(player.opponent()));
            assert_eq!(outcome(&b), Some(GameResult::Winner(player)));
        }
    }
}

#[test]
fn test_broken_line_is_not_a_win() {
    for line in WINNING_LINES {
        let mut b = Board::new();
        b.place(line[0], Player::X).unwrap();
        b.place(line[1], Player::O).unwrap();
        b.place(line[2], Player::X).unwrap();
        assert!(!b.is_winner(Player::X));
        assert!(!b.is_winner(Player::O));
    }
}

#[test]
fn test_predicates_do_not_mutate() {
    let b = board("XO./.X./..O");
    let copy = b;
    let _ = b.is_winner(Player::X);
    let _ = b.is_full();
    let _ = outcome(&b);
    assert_eq!(b, copy);
}

#[test]
fn test_full_board_with_winner_reports_win() {
    let b = board("XXO/OOX/XOX");
    assert!(b.is_full());
    assert!(!is_terminal(&board("XXO/OOX/XO.")));
    assert_eq!(outcome(&b), Some(GameResult::Draw));

    let won = board("XXX/OOX/XOO");
    assert!(won.is_full());
    assert_eq!(outcome(&won), Some(GameResult::Winner(Player::X)));
}

// =============================================================================
// Collaborator helpers
// =============================================================================

#[test]
fn test_human_move_validation() {
    let mut b = Board::new();

    assert!(matches!(
        Move::new(3, 1),
        Err(EngineError::OutOfBounds { row: 3, col: 1 })
    ));

    let mv = Move::new(0, 0).unwrap();
    b.place(mv, Player::X).unwrap();
    assert_eq!(
        b.place(mv, Player::O),
        Err(EngineError::OccupiedCell { row: 0, col: 0 })
    );
}

#[test]
fn test_parse_and_display() {
    let b = board("X.O\n.X.\nO..");
    assert_eq!(b.to_string(), "X.O\n.X.\nO..");
    assert_eq!(b.count(Player::X), 2);
    assert_eq!(b.count(Player::O), 2);
    assert_eq!(b.occupied(), 4);
}

#[test]
fn test_deserialized_moves_are_range_checked() {
    assert!(serde_json::from_str::<Move>(r#"{"row":5,"col":0}"#).is_err());

    let mv: Move = serde_json::from_str(r#"{"row":2,"col":0}"#).unwrap();
    let mut b = Board::new();
    b.place(mv, Player::X).unwrap();
    assert_eq!(b.cell(mv), Cell::X);
    assert_eq!(
        b.place(mv, Player::O),
        Err(EngineError::OccupiedCell { row: 2, col: 0 })
    );
}
