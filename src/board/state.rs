//! Board plus side to move

use tracing::debug;

use super::{Board, Mark};
use crate::error::{Error, Result};
use crate::rules::{outcome, side_to_move, Outcome};

/// A board and the mark whose turn it is next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    turn: Mark,
}

impl GameState {
    /// Empty board, X to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
        }
    }

    /// Wrap an existing board, inferring the side to move from the counts.
    pub fn from_board(board: Board) -> Result<Self> {
        match side_to_move(&board) {
            Some(turn) => Ok(Self { board, turn }),
            None => Err(Error::InvalidPieceCounts {
                x_count: board.count(Mark::X),
                o_count: board.count(Mark::O),
            }),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Mark {
        self.turn
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        outcome(&self.board)
    }

    /// Place the side to move's mark at `index` and pass the turn.
    ///
    /// Rejected moves (terminal position, bad index, occupied cell) leave the
    /// state untouched.
    pub fn play(&mut self, index: usize) -> Result<Outcome> {
        if self.outcome().is_terminal() {
            return Err(Error::GameOver);
        }

        let mark = self.turn;
        self.board = self.board.apply_move(index, mark)?;
        self.turn = mark.opponent();

        let result = self.outcome();
        debug!(index, %mark, outcome = %result, "move applied");
        Ok(result)
    }

    /// Back to an empty board with X to move
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
