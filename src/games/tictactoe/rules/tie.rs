//! Tie detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player};
use super::win::check_win;
use tracing::instrument;

/// Checks if the board is full (no empty cells).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

/// Checks for a tie: a full board where neither player has three in a row.
#[instrument(skip(board), fields(board = %board))]
pub fn is_tie(board: &Board) -> bool {
    is_full(board)
        && check_win(board, Player::Human).is_none()
        && check_win(board, Player::Computer).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_tie(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board: Board = "....H....".parse().unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_tie_detection() {
        // H C H / H C C / C H H
        let board: Board = "HCH HCC CHH".parse().unwrap();
        assert!(is_full(&board));
        assert!(is_tie(&board));
    }

    #[test]
    fn test_not_tie_if_winner() {
        // Full board with the human holding the left column.
        let board: Board = "HCH HCC HHC".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_tie(&board));
    }
}
