//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use tictactoe::config::{Config, FirstMover, DEFAULT_COMPUTER_DELAY_MS};

/// Tic Tac Toe - hotseat or against an unbeatable computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with a minimax computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. "debug", "tictactoe=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand to run (defaults to the GUI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the game window
    Gui {
        /// Who opens a game against the computer
        #[arg(long, value_enum, default_value_t = FirstMover::Human)]
        first_mover: FirstMover,

        /// Pause before the computer answers, in milliseconds
        #[arg(long, default_value_t = DEFAULT_COMPUTER_DELAY_MS)]
        computer_delay_ms: u64,
    },

    /// Let the computer play both sides and print the game
    Selfplay,

    /// Print the outcome and best move for a position
    Analyze {
        /// Nine cells, row-major: X, O, and '.' or '_' for empty
        /// (whitespace and '|', '-', '+' are ignored)
        board: String,

        /// Also run the search without pruning and compare
        #[arg(long)]
        exhaustive: bool,
    },
}

impl Command {
    /// Session settings for the GUI
    pub fn config(&self) -> Config {
        match self {
            Command::Gui {
                first_mover,
                computer_delay_ms,
            } => Config::default()
                .with_first_mover(*first_mover)
                .with_delay_ms(*computer_delay_ms),
            _ => Config::default(),
        }
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::Gui {
            first_mover: FirstMover::default(),
            computer_delay_ms: DEFAULT_COMPUTER_DELAY_MS,
        }
    }
}
