//! Tic-tac-toe engine with a minimax computer opponent
//!
//! Standard 3x3 rules:
//! - X always moves first, then the players alternate
//! - Three of a kind in a row, column or diagonal wins
//! - A full board with no line is a draw
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board, marks and the game state with its turn order
//! - [`rules`]: Win detection and outcome classification
//! - [`search`]: Full-depth minimax with alpha-beta pruning
//! - [`engine`]: Computer opponent wrapping the search with timing and logs
//! - [`session`]: Modes, scores and the delayed computer reply
//! - [`ui`]: egui frontend with the main menu and game screen
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{apply_move, best_move, new_board, outcome, Mark, Outcome};
//!
//! let board = new_board();
//! let board = apply_move(&board, 4, Mark::X).unwrap();
//!
//! // Computer answers as O
//! let reply = best_move(&board, Mark::O, Mark::X).unwrap();
//! let board = apply_move(&board, reply, Mark::O).unwrap();
//!
//! assert_eq!(outcome(&board), Outcome::InProgress);
//! assert_eq!(board.mark_count(), 2);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod search;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, GameState, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use config::{Config, FirstMover};
pub use engine::{AIEngine, MoveResult};
pub use error::{Error, InvalidMove, Result};
pub use rules::Outcome;
pub use session::{GameMode, GameSession, Scores};

use search::Searcher;

/// Empty board
#[inline]
pub fn new_board() -> Board {
    Board::new()
}

/// New board with `mark` at `index`. The input board is not modified.
#[inline]
pub fn apply_move(board: &Board, index: usize, mark: Mark) -> std::result::Result<Board, InvalidMove> {
    board.apply_move(index, mark)
}

/// Classify a board as won, drawn or in progress
#[inline]
pub fn outcome(board: &Board) -> Outcome {
    rules::outcome(board)
}

/// Optimal move for `computer`, or `None` when no cell is empty.
///
/// Ties go to the lowest index.
pub fn best_move(board: &Board, computer: Mark, opponent: Mark) -> Option<usize> {
    Searcher::new().search(board, computer, opponent).best_move
}
