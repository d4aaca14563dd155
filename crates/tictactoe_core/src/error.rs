//! Error types for board mutation and search.
//!
//! Both errors are caller bugs: the shell failed to gate input, or asked
//! the engine to move on a finished board. They are never retried.

use derive_more::{Display, Error, From};

/// Why a placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidMoveReason {
    /// Row or column outside `0..3`.
    #[display("coordinates are off the board")]
    OutOfRange,
    /// The target cell already holds a mark.
    #[display("cell is already occupied")]
    Occupied,
    /// The session's game has already ended.
    #[display("game is already over")]
    GameOver,
}

/// A placement on an occupied or out-of-range cell, or after the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Invalid move at ({row}, {col}): {reason}")]
pub struct InvalidMove {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
    /// Why the move was rejected.
    pub reason: InvalidMoveReason,
}

impl InvalidMove {
    /// Creates an invalid move error.
    pub fn new(row: usize, col: usize, reason: InvalidMoveReason) -> Self {
        Self { row, col, reason }
    }
}

/// Search requested on a board with no empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("No legal move: the board is full")]
pub struct NoLegalMove;

/// Any failure from the game core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// See [`InvalidMove`].
    #[display("{_0}")]
    InvalidMove(InvalidMove),
    /// See [`NoLegalMove`].
    #[display("{_0}")]
    NoLegalMove(NoLegalMove),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_message() {
        let err = InvalidMove::new(1, 2, InvalidMoveReason::Occupied);
        assert_eq!(err.to_string(), "Invalid move at (1, 2): cell is already occupied");
    }

    #[test]
    fn test_game_error_from() {
        let err: GameError = NoLegalMove.into();
        assert_eq!(err, GameError::NoLegalMove(NoLegalMove));
        assert!(err.to_string().contains("board is full"));
    }
}
