//! Stateless UI rendering for tic-tac-toe.

use std::str::FromStr;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tracing::warn;
use unbeatable_tictactoe::{CELL_COUNT, Cell, Highlight, Player, Theme};

use super::app::App;

/// Highlight colors resolved from the config theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    human_win: Color,
    computer_win: Color,
    tie: Color,
}

impl Palette {
    /// Parses the theme's color names, falling back to the built-in ones.
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            human_win: resolve(theme, Highlight::HumanWin),
            computer_win: resolve(theme, Highlight::ComputerWin),
            tie: resolve(theme, Highlight::Tie),
        }
    }

    /// Color for a highlight.
    pub fn color(&self, highlight: Highlight) -> Color {
        match highlight {
            Highlight::HumanWin => self.human_win,
            Highlight::ComputerWin => self.computer_win,
            Highlight::Tie => self.tie,
        }
    }
}

fn resolve(theme: &Theme, highlight: Highlight) -> Color {
    let name = theme.color_for(highlight);
    Color::from_str(name).unwrap_or_else(|_| {
        warn!(name, ?highlight, "Unknown color name, using default");
        Color::from_str(Theme::default_color_for(highlight)).unwrap_or(Color::Reset)
    })
}

/// Renders the whole screen and returns where each cell landed.
pub fn draw(frame: &mut Frame, app: &App) -> [Rect; CELL_COUNT] {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    // Title
    let title = Paragraph::new("Unbeatable Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    // Board
    let cells = draw_board(frame, chunks[1], app);

    // End-of-game banner over the board
    if let Some(outcome) = app.engine().outcome() {
        let banner_area = center_rect(chunks[1], 24, 3);
        let banner = Paragraph::new(outcome.message())
            .style(
                Style::default()
                    .fg(app.palette().color(outcome.highlight()))
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(Clear, banner_area);
        frame.render_widget(banner, banner_area);
    }

    // Status
    let status_text = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new("arrows/hjkl move  enter/1-9/click play  n new game  f swap opener  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    cells
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> [Rect; CELL_COUNT] {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); CELL_COUNT];
    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(2),
                Constraint::Length(12),
                Constraint::Length(2),
                Constraint::Length(12),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            let index = row * 3 + col;
            cells[index] = cols[col * 2];
            draw_cell(frame, cols[col * 2], app, index);
            if col < 2 {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, index: usize) {
    let config = app.config();
    let cell = app.engine().board().get(index).unwrap_or_default();

    let (symbol, mut style) = match cell {
        Cell::Empty => ((index + 1).to_string(), Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Player::Human) => (
            config.human_mark().to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::Computer) => (
            config.computer_mark().to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    };

    match app.engine().outcome() {
        Some(outcome) if outcome.highlighted_cells().contains(&index) => {
            style = style.bg(app.palette().color(outcome.highlight()));
        }
        None if index == app.cursor() => {
            style = style.bg(Color::White).fg(Color::Black);
        }
        _ => {}
    }

    // Vertically center the mark in the 3-line cell.
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
        Line::from(Span::styled(format!("{:^width$}", symbol, width = area.width as usize), style)),
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
    ]);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
