//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player};
use serde::{Deserialize, Serialize};

/// One of the eight lines that win the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinCombination {
    /// Position in [`WIN_COMBINATIONS`].
    pub index: usize,
    /// The three cell indices of the line.
    pub cells: [usize; 3],
}

/// Winning lines in scan order: rows, then columns, then diagonals.
pub const WIN_COMBINATIONS: [WinCombination; 8] = [
    // Rows
    WinCombination { index: 0, cells: [0, 1, 2] },
    WinCombination { index: 1, cells: [3, 4, 5] },
    WinCombination { index: 2, cells: [6, 7, 8] },
    // Columns
    WinCombination { index: 3, cells: [0, 3, 6] },
    WinCombination { index: 4, cells: [1, 4, 7] },
    WinCombination { index: 5, cells: [2, 5, 8] },
    // Diagonals
    WinCombination { index: 6, cells: [0, 4, 8] },
    WinCombination { index: 7, cells: [6, 4, 2] },
];

impl WinCombination {
    /// Returns true if `player` holds all three cells.
    pub fn is_held_by(&self, board: &Board, player: Player) -> bool {
        self.cells
            .iter()
            .all(|&index| board.get(index) == Some(Cell::Occupied(player)))
    }
}

/// Returns the first combination completed by `player`, if any.
///
/// Lines are scanned in [`WIN_COMBINATIONS`] order, so the result is
/// deterministic even on boards where two lines are complete.
pub fn check_win(board: &Board, player: Player) -> Option<WinCombination> {
    WIN_COMBINATIONS
        .iter()
        .find(|combo| combo.is_held_by(board, player))
        .copied()
}
