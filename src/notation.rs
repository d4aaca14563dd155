//! Compact text notation for boards.
//!
//! Nine cells in row-major order: `X`, `O`, or one of `.`, `_`, `-` for an
//! empty cell. `/` may separate rows and is ignored, so `"XX./.O./..."`
//! and `"XX..O...."` are the same board.

use derive_more::{Display, From};
use tictactoe_core::{Board, Cell, CELLS, Invariant, InvalidMove, Mark, Move, SingleWinner};
use tracing::instrument;

/// Error parsing board notation.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum NotationError {
    /// Not exactly nine cells.
    #[display("Expected 9 cells, found {_0}")]
    WrongLength(usize),

    /// A character that is neither a mark nor an empty cell.
    #[display("Unknown cell symbol '{_0}'")]
    UnknownSymbol(char),

    /// Both X and O hold a line, which no game can reach.
    #[display("Both sides hold a line")]
    BothWin,

    /// The board rejected a placement.
    #[display("{_0}")]
    #[from]
    Placement(InvalidMove),
}

impl std::error::Error for NotationError {}

/// Parses a board from notation.
#[instrument]
pub fn parse_board(text: &str) -> Result<Board, NotationError> {
    let cells: Vec<char> = text.trim().chars().filter(|&c| c != '/').collect();
    if cells.len() != CELLS {
        return Err(NotationError::WrongLength(cells.len()));
    }

    let mut board = Board::new();
    for (mv, symbol) in Move::ALL.into_iter().zip(cells) {
        let mark = match symbol.to_ascii_uppercase() {
            'X' => Mark::X,
            'O' => Mark::O,
            '.' | '_' | '-' => continue,
            other => return Err(NotationError::UnknownSymbol(other)),
        };
        board.place(mv.row, mv.col, mark)?;
    }

    if !SingleWinner::holds(&board) {
        return Err(NotationError::BothWin);
    }
    Ok(board)
}

/// Formats a board as notation with `/` between rows.
pub fn format_board(board: &Board) -> String {
    board
        .cells()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Cell::Empty => '.',
                    Cell::Marked(mark) => mark.symbol(),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_separators() {
        let board = parse_board("XX./.O./...").expect("valid notation");
        assert_eq!(board.cell(0, 0), Some(Cell::Marked(Mark::X)));
        assert_eq!(board.cell(0, 1), Some(Cell::Marked(Mark::X)));
        assert_eq!(board.cell(1, 1), Some(Cell::Marked(Mark::O)));
        assert_eq!(board.empty_cells().count(), 6);
    }

    #[test]
    fn test_parse_accepts_lowercase_and_alternate_blanks() {
        let board = parse_board("x_-o.....").expect("valid notation");
        assert_eq!(board.cell(0, 0), Some(Cell::Marked(Mark::X)));
        assert_eq!(board.cell(1, 0), Some(Cell::Marked(Mark::O)));
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(parse_board("XX."), Err(NotationError::WrongLength(3)));
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(parse_board("XX?......"), Err(NotationError::UnknownSymbol('?')));
    }

    #[test]
    fn test_both_win_rejected() {
        assert_eq!(parse_board("XXX/OOO/..."), Err(NotationError::BothWin));
    }

    #[test]
    fn test_format_matches_parse() {
        let text = "XO./.X./..O";
        let board = parse_board(text).expect("valid notation");
        assert_eq!(format_board(&board), text);
    }
}
