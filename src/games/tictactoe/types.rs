//! Core domain types for tic-tac-toe.

use super::action::{MoveError, ParseBoardError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Side in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// The person at the keyboard.
    Human,
    /// The minimax opponent.
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell taken by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::Human) => 'H',
            Cell::Occupied(Player::Computer) => 'C',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are addressed by index 0-8 in row-major order. The board is `Copy`
/// so the search can evaluate each branch on its own snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given index.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is on the board and empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Places `player`'s mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for an index past 8 and
    /// [`MoveError::CellOccupied`] if the cell is taken. The board is left
    /// untouched in both cases.
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        match self.cells.get_mut(index) {
            None => Err(MoveError::OutOfBounds(index)),
            Some(Cell::Occupied(_)) => Err(MoveError::CellOccupied(index)),
            Some(cell) => {
                *cell = Cell::Occupied(player);
                Ok(())
            }
        }
    }

    /// Returns the indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Returns the indices held by `player` in ascending order.
    pub fn cells_of(&self, player: Player) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Occupied(player))
            .map(|(index, _)| index)
            .collect()
    }

    /// Formats the board as three rows, showing 1-9 on empty cells.
    pub fn grid(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => char::from(b'1' + index as u8),
                    cell => cell.symbol(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses `H`, `C` and `.`/`_`/`-` cells, skipping whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut count = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match ch {
                'H' | 'h' => Cell::Occupied(Player::Human),
                'C' | 'c' => Cell::Occupied(Player::Computer),
                '.' | '_' | '-' => Cell::Empty,
                other => return Err(ParseBoardError::InvalidCell(other)),
            };
            if count < CELL_COUNT {
                board.cells[count] = cell;
            }
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(ParseBoardError::WrongLength(count));
        }
        Ok(board)
    }
}
