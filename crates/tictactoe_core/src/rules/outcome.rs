//! Outcome derivation for tic-tac-toe.

use super::{is_full, is_winner};
use crate::{Board, GameOutcome, Mark};

/// Derives the game outcome from the board.
///
/// Priority is fixed: engine win, then player win, then draw, then in
/// progress. Both sides holding a line cannot happen in legal play; if it
/// does, the engine win is reported.
pub fn outcome_for(board: &Board, player: Mark, engine: Mark) -> GameOutcome {
    if is_winner(board, engine) {
        GameOutcome::EngineWins
    } else if is_winner(board, player) {
        GameOutcome::PlayerWins
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(board: &mut Board, rows: [&str; 3]) {
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let mark = match ch {
                    'X' => Mark::X,
                    'O' => Mark::O,
                    _ => continue,
                };
                board.place(row, col, mark).expect("test placement");
            }
        }
    }

    #[test]
    fn test_in_progress() {
        let mut board = Board::new();
        fill(&mut board, ["X..", ".O.", "..."]);
        assert_eq!(outcome_for(&board, Mark::X, Mark::O), GameOutcome::InProgress);
    }

    #[test]
    fn test_player_wins() {
        let mut board = Board::new();
        fill(&mut board, ["XXX", "OO.", "..."]);
        assert_eq!(outcome_for(&board, Mark::X, Mark::O), GameOutcome::PlayerWins);
    }

    #[test]
    fn test_draw() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        fill(&mut board, ["XOX", "OXX", "OXO"]);
        assert_eq!(outcome_for(&board, Mark::X, Mark::O), GameOutcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        let mut board = Board::new();
        fill(&mut board, ["XXX", "OOX", "XOO"]);
        assert_eq!(outcome_for(&board, Mark::X, Mark::O), GameOutcome::PlayerWins);
    }

    #[test]
    fn test_engine_win_takes_priority() {
        // Unreachable in legal play; the priority still has to be stable.
        let mut board = Board::new();
        fill(&mut board, ["XXX", "OOO", "..."]);
        assert_eq!(outcome_for(&board, Mark::X, Mark::O), GameOutcome::EngineWins);
    }
}
