//! Tic-tac-toe against an exhaustive minimax opponent.

mod action;
mod engine;
mod minimax;
pub mod rules;
mod types;

pub use action::{Move, MoveError, ParseBoardError};
pub use engine::{GameEngine, Highlight, Outcome, Phase, TurnOutcome};
pub use minimax::{
    COMPUTER_WIN_SCORE, Evaluation, HUMAN_WIN_SCORE, ScoredMove, SearchStats, TIE_SCORE,
    best_spot, minimax, minimax_with_stats,
};
pub use rules::{WIN_COMBINATIONS, WinCombination, check_win, is_full, is_tie};
pub use types::{Board, CELL_COUNT, Cell, Player};
