//! Computer opponent integrating the search with timing and logging
//!
//! The engine is a thin layer over [`Searcher`]: it derives the opponent's
//! mark, times the search and reports the result in a form the frontends
//! can display.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AIEngine, Board, Mark};
//!
//! let mut engine = AIEngine::new();
//! let board: Board = "XX. OO. X..".parse().unwrap();
//!
//! // O completes the middle row
//! let result = engine.get_move_with_stats(&board, Mark::O);
//! assert_eq!(result.best_move, Some(5));
//! println!("Nodes: {}", result.nodes);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::{debug, instrument, warn};

use crate::board::{Board, Mark};
use crate::search::{SearchResult, Searcher};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<usize>,
    /// Minimax value of the move for the side that searched
    pub score: i32,
    /// Deepest ply reached
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.stats.max_depth,
            time_ms,
            nodes: result.stats.nodes,
        }
    }
}

/// Optimal-play computer opponent.
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    /// Engine with alpha-beta pruning enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(),
        }
    }

    /// Engine backed by a specific searcher configuration.
    #[must_use]
    pub fn with_searcher(searcher: Searcher) -> Self {
        Self { searcher }
    }

    /// Best move for `color`, or `None` when the board is full.
    ///
    /// Use `get_move_with_stats` if you need search statistics.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, color: Mark) -> Option<usize> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Best move for `color` with timing and node counts.
    #[must_use]
    #[instrument(skip(self, board), fields(board = %board.to_compact()))]
    pub fn get_move_with_stats(&mut self, board: &Board, color: Mark) -> MoveResult {
        let start = Instant::now();

        let result = self.searcher.search(board, color, color.opponent());
        let move_result = MoveResult::from_search(result, start.elapsed().as_millis() as u64);

        match move_result.best_move {
            Some(index) => debug!(
                index,
                score = move_result.score,
                nodes = move_result.nodes,
                depth = move_result.depth,
                time_ms = move_result.time_ms,
                "search complete"
            ),
            None => warn!("no move available: board is full"),
        }

        move_result
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_finds_immediate_win() {
        let board: Board = "OO. XX. X..".parse().unwrap();
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&board, Mark::O);

        assert_eq!(result.best_move, Some(2));
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let board: Board = "X.. XO. ...".parse().unwrap();
        let mut engine = AIEngine::new();
        assert_eq!(engine.get_move(&board, Mark::O), Some(6));
    }

    #[test]
    fn test_engine_full_board() {
        let board: Board = "XOX XOO OXX".parse().unwrap();
        let mut engine = AIEngine::default();
        let result = engine.get_move_with_stats(&board, Mark::X);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_engine_multiple_searches() {
        let mut engine = AIEngine::new();
        let board: Board = "X........".parse().unwrap();
        let first = engine.get_move_with_stats(&board, Mark::O);
        let second = engine.get_move_with_stats(&board, Mark::O);
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.nodes, second.nodes);
    }

    #[test]
    fn test_engine_corner_opening_answered_by_center() {
        // Any reply other than the center loses against a corner opening
        let board: Board = "X........".parse().unwrap();
        let mut engine = AIEngine::new();
        assert_eq!(engine.get_move(&board, Mark::O), Some(4));
    }

    #[test]
    fn test_engine_exhaustive_agrees() {
        let board: Board = ".X. .O. ...".parse().unwrap();
        let mut pruned = AIEngine::new();
        let mut full = AIEngine::with_searcher(Searcher::exhaustive());
        let a = pruned.get_move_with_stats(&board, Mark::X);
        let b = full.get_move_with_stats(&board, Mark::X);
        assert_eq!(a.best_move, b.best_move);
        assert_eq!(a.score, b.score);
        assert!(a.nodes <= b.nodes);
    }
}
