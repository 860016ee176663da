//! The 3×3 board and its pure predicates.
//!
//! `Board` is a plain `Copy` value. Nothing in here has side effects apart
//! from the explicit `set`/`clear`/`place` mutators; the predicates can be
//! called on any board, legal or not.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::moves::{Move, MoveList, CELLS, SIZE};
use super::player::{Cell, Player};
use crate::error::{EngineError, Result};

/// The eight winning lines: three rows, three columns, two diagonals.
pub const WINNING_LINES: [[Move; 3]; 8] = {
    const fn m(row: usize, col: usize) -> Move {
        Move::on_grid(row, col)
    }
    [
        [m(0, 0), m(0, 1), m(0, 2)],
        [m(1, 0), m(1, 1), m(1, 2)],
        [m(2, 0), m(2, 1), m(2, 2)],
        [m(0, 0), m(1, 0), m(2, 0)],
        [m(0, 1), m(1, 1), m(2, 1)],
        [m(0, 2), m(1, 2), m(2, 2)],
        [m(0, 0), m(1, 1), m(2, 2)],
        [m(0, 2), m(1, 1), m(2, 0)],
    ]
};

/// A 3×3 grid of cells, indexed `[row][col]`.
///
/// ## Example
///
/// ```
/// use rust_ttt::core::{Board, Player};
///
/// let board: Board = "XXX/OO./...".parse().unwrap();
/// assert!(board.is_winner(Player::X));
/// assert!(!board.is_winner(Player::O));
/// assert!(!board.is_full());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Build a board from explicit rows.
    #[must_use]
    pub const fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// The raw rows of the grid.
    #[must_use]
    pub const fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    #[must_use]
    pub const fn cell(&self, mv: Move) -> Cell {
        self.cells[mv.row()][mv.col()]
    }

    /// Overwrite a cell without any checks. Used for speculative search moves.
    pub fn set(&mut self, mv: Move, cell: Cell) {
        self.cells[mv.row()][mv.col()] = cell;
    }

    /// Reset a cell to `Empty`, undoing a speculative `set`.
    pub fn clear(&mut self, mv: Move) {
        self.set(mv, Cell::Empty);
    }

    /// Apply a real move for `player`, rejecting occupied cells.
    pub fn place(&mut self, mv: Move, player: Player) -> Result<()> {
        if !self.cell(mv).is_empty() {
            return Err(EngineError::OccupiedCell {
                row: mv.row(),
                col: mv.col(),
            });
        }
        self.set(mv, player.cell());
        Ok(())
    }

    /// True iff any of the eight lines is fully held by `player`.
    ///
    /// Legality is not checked: on a hand-built board both players may
    /// report a win.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        let target = player.cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&mv| self.cell(mv) == target))
    }

    /// True iff no cell is `Empty`, regardless of whether anyone has won.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// The winning player, checking `X` before `O`.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        Player::BOTH.into_iter().find(|&p| self.is_winner(p))
    }

    /// Empty cells in row-major scan order.
    #[must_use]
    pub fn empty_cells(&self) -> MoveList {
        Move::all().filter(|&mv| self.cell(mv).is_empty()).collect()
    }

    /// Number of marks `player` has on the board.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        let target = player.cell();
        self.cells.iter().flatten().filter(|&&c| c == target).count()
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Parse nine cell characters in row-major order.
    ///
    /// `/`, `|`, `,`, tabs and newlines are treated as separators. A space
    /// is an empty cell, matching the `" "` encoding many front ends use.
    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '/' | '|' | ',' | '\n' | '\r' | '\t'))
            .collect();

        if chars.len() != CELLS {
            return Err(EngineError::InvalidBoardLength {
                expected: CELLS,
                got: chars.len(),
            });
        }

        let mut board = Board::new();
        for (position, (&character, mv)) in chars.iter().zip(Move::all()).enumerate() {
            let cell = Cell::from_char(character).ok_or(EngineError::InvalidCellCharacter {
                character,
                position,
            })?;
            board.set(mv, cell);
        }
        Ok(board)
    }
}
