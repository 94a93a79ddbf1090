//! Win condition checking
//!
//! A player wins with three of their marks on one of the 8 fixed lines:
//! 3 rows, 3 columns and 2 diagonals.

use crate::board::{Board, Cell, Mark};

/// All winning lines, in the order they are checked.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Mark owning the whole line, if any
#[inline]
fn line_owner(board: &Board, [a, b, c]: [usize; 3]) -> Option<Mark> {
    let cells = board.cells();
    match cells[a] {
        Cell::Mark(mark) if cells[b] == cells[a] && cells[c] == cells[a] => Some(mark),
        _ => None,
    }
}

/// Find the first completed line and its owner.
///
/// Lines are scanned in [`LINES`] order and the scan stops at the first hit,
/// so at most one winner is ever reported even on boards that could not
/// arise in real play.
pub fn winning_line(board: &Board) -> Option<([usize; 3], Mark)> {
    LINES
        .iter()
        .find_map(|&line| line_owner(board, line).map(|mark| (line, mark)))
}

/// Check for a winner
///
/// Returns `Some(mark)` if there's a winner, `None` otherwise.
#[inline]
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(_, mark)| mark)
}

/// Check if `mark` owns any complete line
pub fn has_three_in_row(board: &Board, mark: Mark) -> bool {
    LINES.iter().any(|&line| line_owner(board, line) == Some(mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
        assert!(!has_three_in_row(&Board::new(), Mark::X));
    }

    #[test]
    fn test_every_row() {
        assert_eq!(winner(&board("XXX OO. ...")), Some(Mark::X));
        assert_eq!(winner(&board("XX. OOO X..")), Some(Mark::O));
        assert_eq!(winner(&board("OO. ... XXX")), Some(Mark::X));
    }

    #[test]
    fn test_every_column() {
        assert_eq!(winner(&board("XO. XO. X..")), Some(Mark::X));
        assert_eq!(winner(&board("XO. XO. .OX")), Some(Mark::O));
        assert_eq!(winner(&board("O.X O.X ..X")), Some(Mark::X));
    }

    #[test]
    fn test_both_diagonals() {
        assert_eq!(winner(&board("XO. OX. ..X")), Some(Mark::X));
        assert_eq!(winner(&board("XXO XO. O..")), Some(Mark::O));
    }

    #[test]
    fn test_winning_line_reports_triple() {
        let b = board("XO. OX. ..X");
        assert_eq!(winning_line(&b), Some(([0, 4, 8], Mark::X)));

        let b = board("XXO XO. O..");
        assert_eq!(winning_line(&b), Some(([2, 4, 6], Mark::O)));
    }

    #[test]
    fn test_two_in_row_not_win() {
        let b = board("XX. OO. ...");
        assert_eq!(winner(&b), None);
        assert_eq!(winning_line(&b), None);
    }

    #[test]
    fn test_mixed_line_not_win() {
        assert_eq!(winner(&board("XOX ... ...")), None);
    }

    #[test]
    fn test_single_winner_on_forced_double() {
        // Not reachable in play: both X and O own a row.
        let b = board("XXX OOO ...");
        assert_eq!(winner(&b), Some(Mark::X));
        assert!(has_three_in_row(&b, Mark::X));
        assert!(has_three_in_row(&b, Mark::O));
    }

    #[test]
    fn test_lines_cover_each_cell() {
        for index in 0..9 {
            assert!(LINES.iter().any(|line| line.contains(&index)));
        }
        // Center sits on 4 lines, corners on 3, edges on 2
        let on = |i: usize| LINES.iter().filter(|line| line.contains(&i)).count();
        assert_eq!(on(4), 4);
        assert_eq!(on(0), 3);
        assert_eq!(on(1), 2);
    }
}
