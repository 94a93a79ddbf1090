//! Error types for the tic-tac-toe crate

use thiserror::Error;

/// Rejected move. The board is left unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("invalid move: position {index} is out of range (expected 0-8)")]
    OutOfRange { index: usize },

    #[error("invalid move: position {index} is already occupied")]
    Occupied { index: usize },
}

impl InvalidMove {
    /// Index the caller tried to play
    pub fn index(&self) -> usize {
        match *self {
            InvalidMove::OutOfRange { index } | InvalidMove::Occupied { index } => index,
        }
    }
}

/// Main error type for the crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    InvalidMove(#[from] InvalidMove),

    #[error("game already over")]
    GameOver,

    #[error("not your turn")]
    NotYourTurn,

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
