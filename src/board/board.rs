//! Board structure and text format

use std::fmt;
use std::str::FromStr;

use super::{Cell, Mark, BOARD_SIZE, TOTAL_CELLS};
use crate::error::{Error, InvalidMove};

/// 3x3 game board, cells in row-major order (index = row * 3 + col).
///
/// A plain value type: copying it is how callers take snapshots, and the
/// renderer only ever reads from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Build a board from raw cells (no reachability check)
    pub fn from_cells(cells: [Cell; TOTAL_CELLS]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell at index (None if out of range)
    #[inline]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// All cells in row-major order
    #[inline]
    pub fn cells(&self) -> &[Cell; TOTAL_CELLS] {
        &self.cells
    }

    /// Check if index is on the board and empty
    #[inline]
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Validate a move without applying it
    pub fn check_move(&self, index: usize) -> Result<(), InvalidMove> {
        match self.get(index) {
            None => Err(InvalidMove::OutOfRange { index }),
            Some(Cell::Mark(_)) => Err(InvalidMove::Occupied { index }),
            Some(Cell::Empty) => Ok(()),
        }
    }

    /// Return a copy of this board with `mark` placed at `index`.
    ///
    /// Fails with [`InvalidMove`] if the index is off the board or the cell
    /// is already taken; `self` is never modified.
    pub fn apply_move(&self, index: usize, mark: Mark) -> Result<Board, InvalidMove> {
        let mut next = *self;
        next.place_mark(index, mark)?;
        Ok(next)
    }

    /// Place a mark in place. Pair with [`Board::undo_move`] during search.
    #[inline]
    pub fn place_mark(&mut self, index: usize, mark: Mark) -> Result<(), InvalidMove> {
        self.check_move(index)?;
        self.cells[index] = Cell::Mark(mark);
        Ok(())
    }

    /// Clear a cell back to Empty. Out-of-range indices are ignored.
    #[inline]
    pub fn undo_move(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::Empty;
        }
    }

    /// Empty indices in ascending order
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
    }

    /// True when no cell is empty
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of cells holding `mark`
    #[inline]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Mark(mark)).count()
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.mark_count() == 0
    }

    /// Single-line form accepted by `FromStr`, e.g. `"XX.OO...."`
    pub fn to_compact(&self) -> String {
        self.cells.iter().map(|cell| cell.symbol()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            for col in 0..BOARD_SIZE {
                if col > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", self.cells[row * BOARD_SIZE + col].symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse the compact form, e.g. `"XX.OO...."` or `"XX_|OO_|___"`.
    ///
    /// `.` and `_` mean empty; whitespace and the `|`, `-`, `+` separators of
    /// the [`Display`](fmt::Display) form are skipped. Marks are
    /// case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; TOTAL_CELLS];
        let mut filled = 0;

        for (position, character) in s.chars().enumerate() {
            let cell = match character {
                'X' | 'x' => Cell::Mark(Mark::X),
                'O' | 'o' => Cell::Mark(Mark::O),
                '.' | '_' => Cell::Empty,
                '|' | '-' | '+' => continue,
                c if c.is_whitespace() => continue,
                _ => {
                    return Err(Error::InvalidCellCharacter {
                        character,
                        position,
                        context: s.to_string(),
                    })
                }
            };
            if filled < TOTAL_CELLS {
                cells[filled] = cell;
            }
            filled += 1;
        }

        if filled != TOTAL_CELLS {
            return Err(Error::InvalidBoardLength {
                expected: TOTAL_CELLS,
                got: filled,
                context: s.to_string(),
            });
        }

        Ok(Self { cells })
    }
}
