//! Minimax search with alpha-beta pruning
//!
//! This module implements the computer opponent's move selection. The game
//! tree of a 3x3 board is small enough to search to the end, so every leaf
//! is a terminal position scored +1 (computer wins), -1 (opponent wins) or
//! 0 (draw). There is no depth discount.
//!
//! # Features
//!
//! - Full-depth minimax, maximizing for the computer's mark
//! - Alpha-beta pruning (can be switched off for verification)
//! - Stable move order: empty cells are tried in ascending index order, and
//!   ties at the root go to the lowest index
//! - Place/undo on a private scratch board; the caller's board is never
//!   touched
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Mark};
//! use tictactoe::search::Searcher;
//!
//! let board: Board = "XX. OO. ...".parse().unwrap();
//! let result = Searcher::new().search(&board, Mark::X, Mark::O);
//! assert_eq!(result.best_move, Some(2));
//! assert_eq!(result.score, 1);
//! ```

use crate::board::{Board, Mark, TOTAL_CELLS};
use crate::rules::winner;

/// Score when the computer's mark completes a line
pub const WIN_SCORE: i32 = 1;
/// Score when the opponent's mark completes a line
pub const LOSS_SCORE: i32 = -1;
/// Score of a full board with no line
pub const DRAW_SCORE: i32 = 0;

/// Infinity score for alpha-beta bounds
const INF: i32 = WIN_SCORE + 1;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, root children included
    pub nodes: u64,
    /// Sibling loops cut short by alpha-beta
    pub cutoffs: u64,
    /// Deepest ply reached below the root
    pub max_depth: u8,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` only when the board has no empty cell
    pub best_move: Option<usize>,
    /// Minimax value of the best move from the computer's side
    pub score: i32,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// The two marks taking part in a search
#[derive(Debug, Clone, Copy)]
struct Sides {
    /// Maximizing side
    computer: Mark,
    /// Minimizing side
    opponent: Mark,
}

impl Sides {
    #[inline]
    fn mark_for(self, maximizing: bool) -> Mark {
        if maximizing {
            self.computer
        } else {
            self.opponent
        }
    }
}

/// Full-depth minimax searcher.
///
/// Holds only configuration and per-search counters; create one per search
/// or reuse it, the counters are reset on every call.
#[derive(Debug, Clone)]
pub struct Searcher {
    pruning: bool,
    stats: SearchStats,
}

impl Searcher {
    /// Searcher with alpha-beta pruning enabled
    #[must_use]
    pub fn new() -> Self {
        Self::with_pruning(true)
    }

    /// Plain minimax that visits every node. Same scores, more nodes.
    #[must_use]
    pub fn exhaustive() -> Self {
        Self::with_pruning(false)
    }

    #[must_use]
    pub fn with_pruning(pruning: bool) -> Self {
        Self {
            pruning,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn pruning(&self) -> bool {
        self.pruning
    }

    /// Statistics of the last search
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Pick the best move for `computer` on `board`.
    ///
    /// Every empty cell is tried in ascending order: the computer's mark is
    /// placed, the reply is scored from the opponent's side with a fresh
    /// full window, and the mark is taken back. The first cell with the
    /// highest score wins.
    ///
    /// On a full board no move exists: `best_move` is `None` and `score` is
    /// the value of the board itself.
    #[must_use]
    pub fn search(&mut self, board: &Board, computer: Mark, opponent: Mark) -> SearchResult {
        self.stats = SearchStats::default();
        let sides = Sides { computer, opponent };

        let mut work_board = *board;
        let mut best_move = None;
        let mut best_score = -INF;

        for index in 0..TOTAL_CELLS {
            if work_board.place_mark(index, computer).is_err() {
                continue;
            }
            let score = self.minimax(&mut work_board, sides, false, -INF, INF, 1);
            work_board.undo_move(index);

            if score > best_score {
                best_score = score;
                best_move = Some(index);
            }
        }

        if best_move.is_none() {
            best_score = Self::terminal_score(&work_board, sides).unwrap_or(DRAW_SCORE);
        }

        SearchResult {
            best_move,
            score: best_score,
            stats: self.stats,
        }
    }

    /// Minimax value of `board` from the computer's side.
    ///
    /// `maximizing` says whose turn it is: `true` when `computer` moves next.
    /// Uses a full `(-inf, +inf)` window, so the value is exact with or
    /// without pruning.
    #[must_use]
    pub fn score_position(
        &mut self,
        board: &Board,
        computer: Mark,
        opponent: Mark,
        maximizing: bool,
    ) -> i32 {
        self.stats = SearchStats::default();
        let mut work_board = *board;
        self.minimax(
            &mut work_board,
            Sides { computer, opponent },
            maximizing,
            -INF,
            INF,
            0,
        )
    }

    /// Fixed score of a finished position, `None` while play continues.
    #[inline]
    fn terminal_score(board: &Board, sides: Sides) -> Option<i32> {
        if let Some(mark) = winner(board) {
            return Some(if mark == sides.computer {
                WIN_SCORE
            } else {
                LOSS_SCORE
            });
        }
        if board.is_full() {
            return Some(DRAW_SCORE);
        }
        None
    }

    /// Recursive minimax with alpha-beta bounds.
    ///
    /// Strict place/recurse/undo order: `board` is identical on entry and
    /// exit.
    fn minimax(
        &mut self,
        board: &mut Board,
        sides: Sides,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        depth: u8,
    ) -> i32 {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if let Some(score) = Self::terminal_score(board, sides) {
            return score;
        }

        let mark = sides.mark_for(maximizing);
        let mut best_score = if maximizing { -INF } else { INF };

        for index in 0..TOTAL_CELLS {
            if board.place_mark(index, mark).is_err() {
                continue;
            }
            let score = self.minimax(board, sides, !maximizing, alpha, beta, depth + 1);
            board.undo_move(index);

            if maximizing {
                best_score = best_score.max(score);
                alpha = alpha.max(score);
            } else {
                best_score = best_score.min(score);
                beta = beta.min(score);
            }

            if self.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best_score
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_search_finds_winning_move() {
        let b = board("XX. OO. ...");
        let result = Searcher::new().search(&b, Mark::X, Mark::O);
        assert_eq!(result.best_move, Some(2));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_search_blocks_opponent_win() {
        // O to move, X threatens 0-1-2
        let b = board("XX. .O. ...");
        let result = Searcher::new().search(&b, Mark::O, Mark::X);
        assert_eq!(result.best_move, Some(2));
    }

    #[test]
    fn test_search_prefers_win_over_block() {
        // O can block X at 2 or win at 5
        let b = board("XX. OO. X..");
        let result = Searcher::new().search(&b, Mark::O, Mark::X);
        assert_eq!(result.best_move, Some(5));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_search_single_empty_cell() {
        let b = board("XOX OXO OX.");
        let result = Searcher::new().search(&b, Mark::X, Mark::O);
        assert_eq!(result.best_move, Some(8));
    }

    #[test]
    fn test_search_full_board_returns_none() {
        let b = board("XOX XOO OXX");
        let result = Searcher::new().search(&b, Mark::X, Mark::O);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, DRAW_SCORE);
        assert_eq!(result.stats.nodes, 0);
    }

    #[test]
    fn test_search_empty_board_is_draw_first_index() {
        // Every opening draws under perfect play; ties go to index 0
        let result = Searcher::new().search(&Board::new(), Mark::X, Mark::O);
        assert_eq!(result.best_move, Some(0));
        assert_eq!(result.score, DRAW_SCORE);
        assert_eq!(result.stats.max_depth, 9);
    }

    #[test]
    fn test_search_does_not_mutate_input() {
        let b = board("X.. .O. ...");
        let copy = b;
        let _ = Searcher::new().search(&b, Mark::X, Mark::O);
        assert_eq!(b, copy);
    }

    #[test]
    fn test_losing_position_scores_loss() {
        // O has a fork: threats on 2 (row 0) and 6 (column 0); X can stop one
        let b = board("OO. OXX .X.");
        let result = Searcher::new().search(&b, Mark::X, Mark::O);
        assert_eq!(result.score, LOSS_SCORE);
    }

    #[test]
    fn test_score_position_matches_search_score() {
        let b = board("X.. .O. ...");
        let mut searcher = Searcher::new();
        let result = searcher.search(&b, Mark::X, Mark::O);
        let value = searcher.score_position(&b, Mark::X, Mark::O, true);
        assert_eq!(value, result.score);
    }

    #[test]
    fn test_terminal_position_scores() {
        let won = board("XXX OO. ...");
        let mut searcher = Searcher::new();
        assert_eq!(searcher.score_position(&won, Mark::X, Mark::O, false), WIN_SCORE);
        assert_eq!(searcher.score_position(&won, Mark::O, Mark::X, true), LOSS_SCORE);
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let b = Board::new();
        let pruned = Searcher::new().search(&b, Mark::X, Mark::O);
        let full = Searcher::exhaustive().search(&b, Mark::X, Mark::O);

        assert_eq!(pruned.best_move, full.best_move);
        assert_eq!(pruned.score, full.score);
        assert!(pruned.stats.nodes < full.stats.nodes);
        assert!(pruned.stats.cutoffs > 0);
        assert_eq!(full.stats.cutoffs, 0);
    }

    #[test]
    fn test_exhaustive_node_count_from_empty() {
        // Every game prefix of tic-tac-toe, excluding the empty root
        let full = Searcher::exhaustive().search(&Board::new(), Mark::X, Mark::O);
        assert_eq!(full.stats.nodes, 549_945);
    }
}
