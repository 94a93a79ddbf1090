//! Tic Tac Toe
//!
//! Opens the game window by default; `selfplay` and `analyze` run the engine
//! from the terminal.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe::config::Config;
use tictactoe::search::Searcher;
use tictactoe::ui::TicTacToeApp;
use tictactoe::{AIEngine, Board, GameState, Outcome};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,tictactoe=debug";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let fallback = cli.log_level.as_deref().unwrap_or(DEFAULT_LOG_FILTER);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();

    let command = cli.command.unwrap_or_default();
    let config = command.config();
    match command {
        Command::Gui { .. } => run_gui(config),
        Command::Selfplay => run_selfplay(),
        Command::Analyze { board, exhaustive } => run_analyze(&board, exhaustive),
    }
}

/// Open the game window
fn run_gui(config: Config) -> Result<()> {
    info!(?config, "starting GUI");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([350.0, 450.0])
            .with_min_inner_size([300.0, 400.0])
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI failed: {e}"))
}

/// Computer against itself from the empty board
#[instrument]
fn run_selfplay() -> Result<()> {
    let mut state = GameState::new();
    let mut engine = AIEngine::new();

    println!("{}\n", state.board());
    while !state.outcome().is_terminal() {
        let mark = state.turn();
        let result = engine.get_move_with_stats(state.board(), mark);
        let index = result
            .best_move
            .context("engine found no move on an unfinished board")?;
        let outcome = state.play(index)?;

        println!(
            "{mark} plays {index} (score {}, {} nodes, {}ms)",
            result.score, result.nodes, result.time_ms
        );
        println!("{}\n", state.board());

        if outcome.is_terminal() {
            info!(%outcome, "selfplay finished");
        }
    }

    println!("Result: {}", state.outcome());
    Ok(())
}

/// Evaluate one position given in text form
#[instrument]
fn run_analyze(text: &str, exhaustive: bool) -> Result<()> {
    let board: Board = text.parse().context("could not read board")?;
    let state = GameState::from_board(board)?;

    println!("{}\n", state.board());
    println!("Outcome: {}", state.outcome());

    if state.outcome() != Outcome::InProgress {
        return Ok(());
    }

    let mark = state.turn();
    let mut engine = AIEngine::new();
    let result = engine.get_move_with_stats(state.board(), mark);

    println!("To move: {mark}");
    match result.best_move {
        Some(index) => println!("Best move: {index}"),
        None => println!("Best move: none"),
    }
    println!("Score: {}", result.score);
    println!("Nodes: {} (depth {}, {}ms)", result.nodes, result.depth, result.time_ms);

    if exhaustive {
        let full = AIEngine::with_searcher(Searcher::exhaustive())
            .get_move_with_stats(state.board(), mark);
        println!("Without pruning: {} nodes, best move {:?}", full.nodes, full.best_move);
    }

    Ok(())
}
