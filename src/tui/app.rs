//! Application state and logic.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::{debug, info};
use unbeatable_tictactoe::{CELL_COUNT, GameConfig, GameEngine, TurnOutcome};

use super::input::{cell_at, digit_cell, move_cursor};
use super::ui::Palette;

/// Main application state.
pub struct App {
    engine: GameEngine,
    config: GameConfig,
    palette: Palette,
    cursor: usize,
    status_message: String,
    cell_areas: [Rect; CELL_COUNT],
    should_quit: bool,
}

impl App {
    /// Creates a new application and starts the first game.
    pub fn new(config: GameConfig) -> Self {
        let engine = GameEngine::new(*config.first_player());
        let palette = Palette::from_theme(config.theme());
        let mut app = Self {
            engine,
            config,
            palette,
            cursor: 4,
            status_message: String::new(),
            cell_areas: [Rect::default(); CELL_COUNT],
            should_quit: false,
        };
        app.status_message = app.opening_message(app.engine.history().first().map(|m| m.index));
        app
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the config.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Gets the resolved highlight colors.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Gets the cursor cell.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where each cell was drawn, for mouse hit-testing.
    pub fn set_cell_areas(&mut self, areas: [Rect; CELL_COUNT]) {
        self.cell_areas = areas;
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('n') | KeyCode::Char('r') => self.restart(),
            KeyCode::Char('f') => self.swap_opener(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            code => {
                if let Some(index) = digit_cell(code) {
                    self.cursor = index;
                    self.play(index);
                } else {
                    self.cursor = move_cursor(self.cursor, code);
                }
            }
        }
    }

    /// Handles a mouse event; a left click on a cell plays it.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = event.kind
            && let Some(index) = cell_at(&self.cell_areas, event.column, event.row)
        {
            self.cursor = index;
            self.play(index);
        }
    }

    /// Plays the human's move and reports the turn.
    fn play(&mut self, index: usize) {
        let turn = self.engine.attempt_human_move(index);
        debug!(?turn, "Turn finished");

        self.status_message = match turn {
            // Input is disabled after the game ends; keep the banner.
            TurnOutcome::Ignored(_) if !self.engine.accepts_input() => return,
            TurnOutcome::Ignored(e) => format!("{}. Pick another cell.", e),
            TurnOutcome::Continue { computer_move } => {
                format!("Computer played cell {}. Your move.", computer_move + 1)
            }
            TurnOutcome::HumanWon(_) | TurnOutcome::ComputerWon { .. } | TurnOutcome::Tied { .. } => {
                match turn.outcome() {
                    Some(outcome) => format!("{} Press 'n' for a new game.", outcome.message()),
                    None => String::new(),
                }
            }
        };
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        let opening = self.engine.start_new_game();
        self.cursor = 4;
        self.status_message = self.opening_message(opening);
    }

    /// Swaps who opens and starts a new game.
    fn swap_opener(&mut self) {
        let first_player = self.engine.first_player().toggle();
        info!(?first_player, "Swapping first player");
        self.engine = GameEngine::new(first_player);
        self.cursor = 4;
        let opening = self.engine.history().first().map(|m| m.index);
        self.status_message = self.opening_message(opening);
    }

    fn opening_message(&self, computer_opening: Option<usize>) -> String {
        match computer_opening {
            Some(index) => format!("Computer opened on cell {}. Your move.", index + 1),
            None => format!(
                "{} open. Your move ({}).",
                self.engine.first_player().label(),
                self.config.human_mark()
            ),
        }
    }
}
