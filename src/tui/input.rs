//! Keyboard and mouse mapping onto board cells.

use crossterm::event::KeyCode;
use ratatui::layout::{Position, Rect};
use unbeatable_tictactoe::CELL_COUNT;

/// Moves the cursor one cell with the arrow keys or h/j/k/l.
///
/// The cursor stops at the board edges.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / 3, cursor % 3);

    let (row, col) = match key {
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(2)),
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(2), col),
        _ => (row, col),
    };

    row * 3 + col
}

/// Maps digit keys 1-9 to cell indices 0-8.
pub fn digit_cell(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(digit @ 1..=9) => Some(digit as usize - 1),
            _ => None,
        },
        _ => None,
    }
}

/// Finds the cell drawn under a terminal coordinate.
pub fn cell_at(areas: &[Rect; CELL_COUNT], column: u16, row: u16) -> Option<usize> {
    areas
        .iter()
        .position(|area| area.contains(Position { x: column, y: row }))
}
