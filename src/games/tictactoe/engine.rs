//! Turn orchestration: human move, terminal checks, computer reply.
//!
//! One call to [`GameEngine::attempt_human_move`] runs a whole turn. The
//! engine reports what happened through [`TurnOutcome`] and keeps no handle to
//! whatever draws the board.

use super::action::{Move, MoveError};
use super::minimax::best_spot;
use super::rules::{WinCombination, check_win, is_full};
use super::types::CELL_COUNT;
use super::{Board, Player};
use crate::config::FirstPlayer;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where the game stands between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to pick a cell.
    AwaitingHumanMove,
    /// Someone completed a line. The board is locked.
    Won(Player),
    /// Board filled with no winner. The board is locked.
    Tied,
}

/// Visual treatment the presentation applies to a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Highlight {
    /// The human completed a line.
    HumanWin,
    /// The computer completed a line.
    ComputerWin,
    /// Nobody did.
    Tie,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed `combination`.
    Won {
        /// The winning side.
        winner: Player,
        /// The completed line.
        combination: WinCombination,
    },
    /// Board full, no line.
    Tied,
}

impl Outcome {
    /// Banner text for the end of the game.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Won {
                winner: Player::Human,
                ..
            } => "You win!",
            Outcome::Won {
                winner: Player::Computer,
                ..
            } => "You lose!",
            Outcome::Tied => "Tie Game!",
        }
    }

    /// Which color semantics apply.
    pub fn highlight(&self) -> Highlight {
        match self {
            Outcome::Won {
                winner: Player::Human,
                ..
            } => Highlight::HumanWin,
            Outcome::Won {
                winner: Player::Computer,
                ..
            } => Highlight::ComputerWin,
            Outcome::Tied => Highlight::Tie,
        }
    }

    /// Cells to paint: the winning line, or every cell on a tie.
    pub fn highlighted_cells(&self) -> Vec<usize> {
        match self {
            Outcome::Won { combination, .. } => combination.cells.to_vec(),
            Outcome::Tied => (0..CELL_COUNT).collect(),
        }
    }
}

/// Result of one call to [`GameEngine::attempt_human_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The request was dropped and nothing changed.
    Ignored(MoveError),
    /// Both sides moved and the game goes on.
    Continue {
        /// Cell the computer answered with.
        computer_move: usize,
    },
    /// The human's move completed a line.
    HumanWon(WinCombination),
    /// The computer's reply completed a line.
    ComputerWon {
        /// Cell the computer answered with.
        computer_move: usize,
        /// The completed line.
        combination: WinCombination,
    },
    /// The board filled up with no line.
    Tied {
        /// Set when the computer's reply filled the last cell.
        computer_move: Option<usize>,
    },
}

impl TurnOutcome {
    /// Cell the computer played this turn, if it moved.
    pub fn computer_move(&self) -> Option<usize> {
        match self {
            TurnOutcome::Continue { computer_move } => Some(*computer_move),
            TurnOutcome::ComputerWon { computer_move, .. } => Some(*computer_move),
            TurnOutcome::Tied { computer_move } => *computer_move,
            TurnOutcome::Ignored(_) | TurnOutcome::HumanWon(_) => None,
        }
    }

    /// The game's result, if this turn ended it.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            TurnOutcome::HumanWon(combination) => Some(Outcome::Won {
                winner: Player::Human,
                combination: *combination,
            }),
            TurnOutcome::ComputerWon { combination, .. } => Some(Outcome::Won {
                winner: Player::Computer,
                combination: *combination,
            }),
            TurnOutcome::Tied { .. } => Some(Outcome::Tied),
            TurnOutcome::Ignored(_) | TurnOutcome::Continue { .. } => None,
        }
    }
}

/// A single game against the minimax opponent.
///
/// The engine owns its board; separate engines never share state.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    outcome: Option<Outcome>,
    history: Vec<Move>,
    first_player: FirstPlayer,
}

impl GameEngine {
    /// Creates an engine and starts its first game.
    #[instrument]
    pub fn new(first_player: FirstPlayer) -> Self {
        let mut engine = Self {
            board: Board::new(),
            outcome: None,
            history: Vec::new(),
            first_player,
        };
        engine.start_new_game();
        engine
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played this game, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns who opens each game.
    pub fn first_player(&self) -> FirstPlayer {
        self.first_player
    }

    /// Returns the result once the game is over.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        match self.outcome {
            None => Phase::AwaitingHumanMove,
            Some(Outcome::Won { winner, .. }) => Phase::Won(winner),
            Some(Outcome::Tied) => Phase::Tied,
        }
    }

    /// False once the game is over, until [`GameEngine::start_new_game`].
    pub fn accepts_input(&self) -> bool {
        self.outcome.is_none()
    }

    /// Clears the board and unlocks input.
    ///
    /// If the computer opens, its first move is played here and returned.
    #[instrument(skip(self), fields(first_player = ?self.first_player))]
    pub fn start_new_game(&mut self) -> Option<usize> {
        self.board = Board::new();
        self.outcome = None;
        self.history.clear();
        info!("New game started");

        match self.first_player {
            FirstPlayer::Human => None,
            FirstPlayer::Computer => {
                let index = best_spot(&self.board)?;
                // The empty board has no line, so the opening cannot end the game.
                self.place(index, Player::Computer).ok()?;
                Some(index)
            }
        }
    }

    /// Plays the human's move at `index` and, if the game goes on, the
    /// computer's reply.
    ///
    /// Requests on an occupied cell, an out-of-range index or a finished game
    /// change nothing and come back as [`TurnOutcome::Ignored`].
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn attempt_human_move(&mut self, index: usize) -> TurnOutcome {
        if !self.accepts_input() {
            debug!("Board is locked, ignoring move");
            return TurnOutcome::Ignored(MoveError::GameOver);
        }

        let combination = match self.place(index, Player::Human) {
            Ok(combination) => combination,
            Err(e) => {
                debug!(error = %e, "Ignoring move");
                return TurnOutcome::Ignored(e);
            }
        };

        if let Some(combination) = combination {
            return self.finish(TurnOutcome::HumanWon(combination));
        }
        if is_full(&self.board) {
            return self.finish(TurnOutcome::Tied {
                computer_move: None,
            });
        }

        let Some(computer_move) = best_spot(&self.board) else {
            // Unreachable: the board is neither won nor full here.
            return self.finish(TurnOutcome::Tied {
                computer_move: None,
            });
        };
        match self.place(computer_move, Player::Computer) {
            Ok(Some(combination)) => self.finish(TurnOutcome::ComputerWon {
                computer_move,
                combination,
            }),
            Ok(None) if is_full(&self.board) => self.finish(TurnOutcome::Tied {
                computer_move: Some(computer_move),
            }),
            Ok(None) => TurnOutcome::Continue { computer_move },
            Err(e) => TurnOutcome::Ignored(e),
        }
    }

    /// Applies a move and returns the line it completed, if any.
    fn place(&mut self, index: usize, player: Player) -> Result<Option<WinCombination>, MoveError> {
        self.board.apply_move(index, player)?;
        self.history.push(Move::new(player, index));
        debug!(%player, index, "Move applied");
        Ok(check_win(&self.board, player))
    }

    fn finish(&mut self, turn: TurnOutcome) -> TurnOutcome {
        self.outcome = turn.outcome();
        if let Some(outcome) = &self.outcome {
            info!(banner = outcome.message(), ?outcome, "Game over");
        }
        turn
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(FirstPlayer::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_opens_on_empty_board() {
        let engine = GameEngine::default();
        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.phase(), Phase::AwaitingHumanMove);
        assert!(engine.accepts_input());
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut engine = GameEngine::default();
        let turn = engine.attempt_human_move(0);
        let computer_move = turn.computer_move().unwrap();
        let before = *engine.board();

        assert_eq!(
            engine.attempt_human_move(computer_move),
            TurnOutcome::Ignored(MoveError::CellOccupied(computer_move))
        );
        assert_eq!(engine.board(), &before);
        assert_eq!(engine.history().len(), 2);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut engine = GameEngine::default();
        assert_eq!(
            engine.attempt_human_move(9),
            TurnOutcome::Ignored(MoveError::OutOfBounds(9))
        );
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_outcome_messages() {
        let combination = crate::games::tictactoe::rules::WIN_COMBINATIONS[3];
        let human = Outcome::Won {
            winner: Player::Human,
            combination,
        };
        let computer = Outcome::Won {
            winner: Player::Computer,
            combination,
        };
        assert_eq!(human.message(), "You win!");
        assert_eq!(computer.message(), "You lose!");
        assert_eq!(Outcome::Tied.message(), "Tie Game!");
        assert_eq!(human.highlight(), Highlight::HumanWin);
        assert_eq!(computer.highlight(), Highlight::ComputerWin);
        assert_eq!(Outcome::Tied.highlight(), Highlight::Tie);
        assert_eq!(human.highlighted_cells(), vec![0, 3, 6]);
        assert_eq!(Outcome::Tied.highlighted_cells().len(), 9);
    }
}
