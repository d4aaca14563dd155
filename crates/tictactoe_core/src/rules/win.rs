//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Move};

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// Returns true if `mark` holds all three cells of any line.
///
/// Called at every search node, so it stays allocation-free.
pub fn is_winner(board: &Board, mark: Mark) -> bool {
    let target = Cell::Marked(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|&mv| board.at(mv) == target))
}
