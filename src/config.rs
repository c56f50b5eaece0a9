//! Game configuration loaded from TOML.

use crate::games::tictactoe::Highlight;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "unbeatable_tictactoe.toml";

/// Which side makes the first move of each game.
///
/// Defaults to [`FirstPlayer::Human`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The human opens.
    #[default]
    Human,
    /// The computer opens with its minimax move.
    Computer,
}

impl FirstPlayer {
    /// Returns the display label for this option.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "You",
            Self::Computer => "Computer",
        }
    }

    /// Toggles between `Human` and `Computer`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }
}

/// Color names for the end-of-game highlight.
///
/// Names are whatever ratatui's `Color` parses: `"blue"`, `"lightred"`,
/// `"#00ff00"` and so on.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Theme {
    /// Winning line when the human wins.
    #[serde(default = "default_human_win")]
    human_win: String,

    /// Winning line when the computer wins.
    #[serde(default = "default_computer_win")]
    computer_win: String,

    /// Every cell on a tie.
    #[serde(default = "default_tie")]
    tie: String,
}

fn default_human_win() -> String {
    "blue".to_string()
}

fn default_computer_win() -> String {
    "red".to_string()
}

fn default_tie() -> String {
    "green".to_string()
}

impl Theme {
    /// Color name for the given highlight.
    pub fn color_for(&self, highlight: Highlight) -> &str {
        match highlight {
            Highlight::HumanWin => &self.human_win,
            Highlight::ComputerWin => &self.computer_win,
            Highlight::Tie => &self.tie,
        }
    }

    /// Built-in color name for the given highlight.
    pub fn default_color_for(highlight: Highlight) -> &'static str {
        match highlight {
            Highlight::HumanWin => "blue",
            Highlight::ComputerWin => "red",
            Highlight::Tie => "green",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            human_win: default_human_win(),
            computer_win: default_computer_win(),
            tie: default_tie(),
        }
    }
}

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Who opens each game.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Mark drawn on the human's cells.
    #[serde(default = "default_human_mark")]
    human_mark: char,

    /// Mark drawn on the computer's cells.
    #[serde(default = "default_computer_mark")]
    computer_mark: char,

    /// Log file used while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Highlight colors.
    #[serde(default)]
    theme: Theme,
}

fn default_human_mark() -> char {
    'O'
}

fn default_computer_mark() -> char {
    'X'
}

fn default_log_file() -> PathBuf {
    PathBuf::from("unbeatable_tictactoe.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::default(),
            human_mark: default_human_mark(),
            computer_mark: default_computer_mark(),
            log_file: default_log_file(),
            theme: Theme::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(first_player = ?config.first_player, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if present, else
    /// the defaults.
    ///
    /// An explicit path that cannot be read is an error.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Returns a copy with a different opening side.
    pub fn with_first_player(mut self, first_player: FirstPlayer) -> Self {
        self.first_player = first_player;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.human_mark == self.computer_mark {
            return Err(ConfigError::new(format!(
                "human_mark and computer_mark must differ (both are {:?})",
                self.human_mark
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
