//! 3x3 board storage and controlled mutation.

use crate::error::{InvalidMove, InvalidMoveReason};
use crate::outcome::GameOutcome;
use crate::rules;
use crate::types::{Cell, Mark, Move, SIZE};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board, indexed `(row, col)` from the top-left.
///
/// A cell, once marked, only returns to empty through [`Board::reset`].
/// The search engine is the one exception: it tries cells and restores
/// them before returning, through crate-private access.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Clears every cell for a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; SIZE]; SIZE];
        debug!("Board reset");
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the coordinates are off the board or the
    /// cell is taken. The board is left untouched in both cases.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), InvalidMove> {
        let mv = Move::new(row, col);
        if !mv.in_bounds() {
            return Err(InvalidMove::new(row, col, InvalidMoveReason::OutOfRange));
        }
        if !self.at(mv).is_empty() {
            return Err(InvalidMove::new(row, col, InvalidMoveReason::Occupied));
        }
        self.set(mv, Cell::Marked(mark));
        Ok(())
    }

    /// Returns the cell at `(row, col)`, or `None` off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns true if `(row, col)` is on the board and empty.
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(Cell::is_empty)
    }

    /// All cells, row by row.
    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        Move::ALL
            .into_iter()
            .filter(move |&mv| self.at(mv).is_empty())
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Marked(mark))
            .count()
    }

    /// Returns true if `mark` holds a full row, column, or diagonal.
    pub fn is_winner(&self, mark: Mark) -> bool {
        rules::is_winner(self, mark)
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Derives the outcome with the given mark assignment.
    ///
    /// See [`rules::outcome_for`] for the priority order.
    pub fn outcome_for(&self, player: Mark, engine: Mark) -> GameOutcome {
        rules::outcome_for(self, player, engine)
    }

    /// Cell lookup for a move known to be in bounds.
    pub(crate) fn at(&self, mv: Move) -> Cell {
        self.cells[mv.row][mv.col]
    }

    /// Unchecked write, used by placement and by the search's try/undo.
    pub(crate) fn set(&mut self, mv: Move, cell: Cell) {
        self.cells[mv.row][mv.col] = cell;
    }
}

/// Renders the board with empty cells numbered 1-9.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Cell::Empty => write!(f, "{}", Move::new(row, col).index() + 1)?,
                    Cell::Marked(mark) => write!(f, "{}", mark)?,
                }
                if col + 1 < SIZE {
                    write!(f, "|")?;
                }
            }
            if row + 1 < SIZE {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells().count(), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_sets_cell() {
        let mut board = Board::new();
        board.place(1, 2, Mark::X).expect("valid placement");
        assert_eq!(board.cell(1, 2), Some(Cell::Marked(Mark::X)));
        assert_eq!(board.count(Mark::X), 1);
        assert_eq!(board.count(Mark::O), 0);
    }

    #[test]
    fn test_place_out_of_range() {
        let mut board = Board::new();
        let err = board.place(3, 0, Mark::X).unwrap_err();
        assert_eq!(err.reason, InvalidMoveReason::OutOfRange);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_occupied_leaves_board_unchanged() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X).expect("valid placement");
        let before = board.clone();

        let err = board.place(0, 0, Mark::O).unwrap_err();
        assert_eq!(err, InvalidMove::new(0, 0, InvalidMoveReason::Occupied));
        assert_eq!(board, before);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X).expect("valid placement");
        board.place(2, 2, Mark::O).expect("valid placement");
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut board = Board::new();
        board.place(0, 1, Mark::X).expect("valid placement");
        let open: Vec<Move> = board.empty_cells().take(3).collect();
        assert_eq!(open, vec![Move::new(0, 0), Move::new(0, 2), Move::new(1, 0)]);
    }

    #[test]
    fn test_cell_off_board() {
        let board = Board::new();
        assert_eq!(board.cell(0, 3), None);
        assert!(!board.is_open(5, 5));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X).expect("valid placement");
        board.place(1, 1, Mark::O).expect("valid placement");
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
