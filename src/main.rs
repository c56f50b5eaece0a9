//! Unbeatable Tic-Tac-Toe - command-line entry point.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, Side};
use serde_json::json;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use unbeatable_tictactoe::{Board, Evaluation, FirstPlayer, GameConfig, minimax_with_stats};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Play {
        computer_first: false,
    });

    match command {
        Command::Play { computer_first } => {
            let config = GameConfig::load(cli.config.as_deref()).context("Failed to load config")?;
            let config = if computer_first {
                config.with_first_player(FirstPlayer::Computer)
            } else {
                config
            };
            tui::run_tui(config)
        }
        Command::BestMove {
            board,
            to_move,
            json,
        } => run_best_move(&board, to_move, json),
    }
}

/// Print the oracle's answer for one board
#[instrument(skip(board))]
fn run_best_move(board: &str, to_move: Side, as_json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;
    info!(%board, "Evaluating board");

    let (evaluation, stats) = minimax_with_stats(&board, to_move.into());

    if as_json {
        let value = match evaluation {
            Evaluation::Move(scored) => json!({
                "board": board.to_string(),
                "index": scored.index(),
                "score": scored.score(),
                "nodes": stats.nodes(),
            }),
            Evaluation::Terminal(score) => json!({
                "board": board.to_string(),
                "index": null,
                "score": score,
                "nodes": stats.nodes(),
            }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}\n", board.grid());
    match evaluation {
        Evaluation::Move(scored) => println!(
            "best move: {} (score {}, {} positions searched)",
            scored.index(),
            scored.score(),
            stats.nodes()
        ),
        Evaluation::Terminal(score) => println!("terminal (score {})", score),
    }
    Ok(())
}
