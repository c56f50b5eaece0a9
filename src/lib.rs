//! Unbeatable tic-tac-toe.
//!
//! A 3x3 game against a computer that searches the whole game tree with
//! minimax and so never loses.
//!
//! # Architecture
//!
//! - **Board**: nine cells, each empty or held by a [`Player`]
//! - **Rules**: win and tie detection over the eight fixed lines
//! - **Oracle**: [`minimax`] and [`best_spot`], the computer's move choice
//! - **Engine**: [`GameEngine`] runs a full turn per human move
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{GameEngine, TurnOutcome};
//!
//! let mut engine = GameEngine::default();
//! let turn = engine.attempt_human_move(0);
//! assert_eq!(turn, TurnOutcome::Continue { computer_move: 4 });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, FirstPlayer, GameConfig, Theme};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CELL_COUNT, COMPUTER_WIN_SCORE, Cell, Evaluation, GameEngine, HUMAN_WIN_SCORE,
    Highlight, Move, MoveError, Outcome, ParseBoardError, Phase, Player, ScoredMove,
    SearchStats, TIE_SCORE, TurnOutcome, WIN_COMBINATIONS, WinCombination, best_spot, check_win,
    is_full, is_tie, minimax, minimax_with_stats,
};
