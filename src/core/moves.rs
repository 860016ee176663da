//! Move representation: a (row, column) pair on the 3×3 grid.
//!
//! Moves are the only thing the engine hands back to its caller. A
//! `MoveList` holds at most nine of them, so it lives on the stack.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{EngineError, Result};

/// Side length of the grid.
pub const SIZE: usize = 3;

/// Number of cells on the grid.
pub const CELLS: usize = SIZE * SIZE;

/// A list of moves in row-major scan order.
pub type MoveList = SmallVec<[Move; CELLS]>;

/// A grid coordinate. Both `row` and `col` are in `0..3`.
///
/// Every way of obtaining a `Move`, deserialization included, goes through
/// the range check, so indexing a board with one never panics.
///
/// ```
/// use rust_ttt::core::Move;
///
/// let mv = Move::new(1, 2).unwrap();
/// assert_eq!(mv.index(), 5);
/// assert!(Move::new(3, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawMove")]
pub struct Move {
    row: usize,
    col: usize,
}

/// Unchecked wire form of a `Move`.
#[derive(Deserialize)]
struct RawMove {
    row: usize,
    col: usize,
}

impl TryFrom<RawMove> for Move {
    type Error = EngineError;

    fn try_from(raw: RawMove) -> Result<Self> {
        Move::new(raw.row, raw.col)
    }
}

impl Move {
    /// Create a move, validating that both coordinates are on the grid.
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= SIZE || col >= SIZE {
            return Err(EngineError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Build a move the caller already knows to be on the grid.
    pub(crate) const fn on_grid(row: usize, col: usize) -> Self {
        debug_assert!(row < SIZE && col < SIZE);
        Self { row, col }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Create a move from a row-major cell index in `0..9`.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::new(index / SIZE, index % SIZE)
    }

    /// Row-major cell index in `0..9`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Every coordinate of the grid in row-major scan order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Move { row, col }))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<Move> for (usize, usize) {
    fn from(mv: Move) -> Self {
        (mv.row, mv.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_bounds() {
        assert!(Move::new(0, 0).is_ok());
        assert!(Move::new(2, 2).is_ok());
        assert_eq!(
            Move::new(0, 3),
            Err(EngineError::OutOfBounds { row: 0, col: 3 })
        );
        assert_eq!(
            Move::new(5, 1),
            Err(EngineError::OutOfBounds { row: 5, col: 1 })
        );
    }

    #[test]
    fn test_index_round_trip() {
        for index in 0..CELLS {
            let mv = Move::from_index(index).unwrap();
            assert_eq!(mv.index(), index);
        }
        assert!(Move::from_index(9).is_err());
    }

    #[test]
    fn test_all_is_row_major() {
        let all: Vec<_> = Move::all().collect();
        assert_eq!(all.len(), CELLS);
        assert_eq!(all[0], Move { row: 0, col: 0 });
        assert_eq!(all[1], Move { row: 0, col: 1 });
        assert_eq!(all[3], Move { row: 1, col: 0 });
        assert_eq!(all[8], Move { row: 2, col: 2 });
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_display_and_tuple() {
        let mv = Move::new(2, 1).unwrap();
        assert_eq!(format!("{}", mv), "(2, 1)");
        assert_eq!(<(usize, usize)>::from(mv), (2, 1));
        assert_eq!((mv.row(), mv.col()), (2, 1));
    }

    #[test]
    fn test_serde_round_trip() {
        let mv = Move::new(1, 2).unwrap();
        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(json, r#"{"row":1,"col":2}"#);
        assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), mv);
    }

    #[test]
    fn test_deserialize_rejects_off_grid() {
        let err = serde_json::from_str::<Move>(r#"{"row":5,"col":0}"#).unwrap_err();
        assert!(err.to_string().contains("out of bounds"), "{err}");
        assert!(serde_json::from_str::<Move>(r#"{"row":0,"col":3}"#).is_err());
    }
}
