//! Reachability checks for positions built outside of normal play

use crate::board::{Board, Mark};

/// Piece counts allowed by alternating play with X first:
/// equal, or X ahead by one.
#[inline]
pub fn is_reachable_counts(board: &Board) -> bool {
    let x = board.count(Mark::X);
    let o = board.count(Mark::O);
    x == o || x == o + 1
}

/// Mark to move next, inferred from the piece counts.
///
/// Returns `None` when the counts could not come from alternating play.
pub fn side_to_move(board: &Board) -> Option<Mark> {
    let x = board.count(Mark::X);
    let o = board.count(Mark::O);
    if x == o {
        Some(Mark::X)
    } else if x == o + 1 {
        Some(Mark::O)
    } else {
        None
    }
}
