//! Command-line interface for unbeatable_tictactoe.

use clap::{Parser, Subcommand, ValueEnum};
use unbeatable_tictactoe::Player;

/// Unbeatable Tic-Tac-Toe - play against an exhaustive minimax opponent
#[derive(Parser, Debug)]
#[command(name = "unbeatable_tictactoe")]
#[command(about = "Tic-tac-toe against a computer that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./unbeatable_tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Let the computer open each game, overriding the config file
        #[arg(long)]
        computer_first: bool,
    },

    /// Print the minimax move for a board
    BestMove {
        /// Nine cells in row-major order: H (human), C (computer), . _ or - (empty).
        /// Whitespace is ignored, so "H.. .C. ..." works.
        board: String,

        /// Side to move
        #[arg(long, value_enum, default_value = "computer")]
        to_move: Side,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Side to move, as accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The human player
    Human,
    /// The computer player
    Computer,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Human => Player::Human,
            Side::Computer => Player::Computer,
        }
    }
}
