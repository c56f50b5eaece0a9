//! Exhaustive minimax search for the computer's move.
//!
//! The tree is small enough (at most 549 946 nodes from an empty board) that
//! every line is played out to the end. Leaves score from the computer's point
//! of view: a human win is [`HUMAN_WIN_SCORE`], a computer win is
//! [`COMPUTER_WIN_SCORE`] and a full board is [`TIE_SCORE`]. Depth is not
//! part of the score, so the search does not prefer quick wins over slow ones.
//!
//! Ties between equally scored moves go to the lowest cell index: candidates
//! are generated in ascending order and only a strict improvement replaces the
//! current best.

use super::rules::{check_win, is_full};
use super::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Leaf score when the human has three in a row.
pub const HUMAN_WIN_SCORE: i32 = -10;
/// Leaf score when the computer has three in a row.
pub const COMPUTER_WIN_SCORE: i32 = 10;
/// Leaf score for a full board with no winner.
pub const TIE_SCORE: i32 = 0;

/// A candidate move and the score minimax assigns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Cell index (0-8).
    index: usize,
    /// Score with both sides playing on optimally.
    score: i32,
}

/// Result of evaluating a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evaluation {
    /// The board is already decided; no move to make.
    Terminal(i32),
    /// Best move for the side to move.
    Move(ScoredMove),
}

impl Evaluation {
    /// Returns the score, terminal or not.
    pub fn score(&self) -> i32 {
        match self {
            Evaluation::Terminal(score) => *score,
            Evaluation::Move(scored) => scored.score,
        }
    }

    /// Returns the chosen cell, if the position was not terminal.
    pub fn index(&self) -> Option<usize> {
        match self {
            Evaluation::Terminal(_) => None,
            Evaluation::Move(scored) => Some(scored.index),
        }
    }
}

/// Counters gathered during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SearchStats {
    /// Positions evaluated, the root included.
    nodes: u64,
}

/// Evaluates `board` with `to_move` to play.
pub fn minimax(board: &Board, to_move: Player) -> Evaluation {
    minimax_with_stats(board, to_move).0
}

/// Same as [`minimax`], also reporting how many positions were visited.
#[instrument(skip(board), fields(board = %board))]
pub fn minimax_with_stats(board: &Board, to_move: Player) -> (Evaluation, SearchStats) {
    let mut stats = SearchStats::default();
    let evaluation = search(board, to_move, &mut stats);
    debug!(nodes = stats.nodes, ?evaluation, "Search finished");
    (evaluation, stats)
}

/// Returns the computer's move, or `None` if the game is already decided.
#[instrument(skip(board), fields(board = %board))]
pub fn best_spot(board: &Board) -> Option<usize> {
    let index = minimax(board, Player::Computer).index();
    debug!(?index, "Computer picked cell");
    index
}

fn terminal_score(board: &Board) -> Option<i32> {
    if check_win(board, Player::Human).is_some() {
        Some(HUMAN_WIN_SCORE)
    } else if check_win(board, Player::Computer).is_some() {
        Some(COMPUTER_WIN_SCORE)
    } else if is_full(board) {
        Some(TIE_SCORE)
    } else {
        None
    }
}

fn search(board: &Board, to_move: Player, stats: &mut SearchStats) -> Evaluation {
    stats.nodes += 1;

    if let Some(score) = terminal_score(board) {
        return Evaluation::Terminal(score);
    }

    let mut best: Option<ScoredMove> = None;
    for index in board.empty_cells() {
        let mut next = *board;
        // Cells from empty_cells() are always free.
        if next.apply_move(index, to_move).is_err() {
            continue;
        }
        let score = search(&next, to_move.opponent(), stats).score();

        let improves = match (best, to_move) {
            (None, _) => true,
            (Some(current), Player::Computer) => score > current.score,
            (Some(current), Player::Human) => score < current.score,
        };
        if improves {
            best = Some(ScoredMove { index, score });
        }
    }

    match best {
        Some(scored) => Evaluation::Move(scored),
        // Unreachable: a non-terminal board has an empty cell.
        None => Evaluation::Terminal(TIE_SCORE),
    }
}
