//! Exhaustive minimax search.
//!
//! Every call walks the full remaining game tree: no alpha-beta, no
//! transposition table. Tic-tac-toe is small enough (at most 9 plies) that
//! the walk finishes in milliseconds.
//!
//! Scores are raw terminal values from the engine's point of view, with no
//! depth discount. The engine therefore treats a win in two moves and a win
//! in four as equal, and may take the longer one when it comes first in scan
//! order. It never turns a won or drawn position into a loss.

use crate::error::NoLegalMove;
use crate::types::{Cell, Mark, Move};
use crate::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument, warn};

/// Score of a position the engine has won.
pub const WIN_SCORE: i32 = 10;

/// Score of a position the engine has lost.
pub const LOSS_SCORE: i32 = -10;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct SearchReport {
    /// The chosen move.
    best: Move,
    /// Minimax value of the chosen move.
    score: i32,
    /// Positions evaluated, root children included.
    nodes: u64,
}

/// Minimax engine playing `engine` against `player`.
///
/// The engine is always the maximizing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct SearchEngine {
    /// Mark placed by the engine.
    engine: Mark,
    /// Mark placed by the opponent.
    player: Mark,
}

impl SearchEngine {
    /// Creates an engine for the given mark assignment.
    pub fn new(engine: Mark, player: Mark) -> Self {
        Self { engine, player }
    }

    /// Returns the optimal move for the engine.
    ///
    /// Ties go to the first empty cell in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`NoLegalMove`] if the board is full.
    pub fn find_best_move(&self, board: &mut Board) -> Result<Move, NoLegalMove> {
        self.analyze(board).map(|report| report.best)
    }

    /// Searches the position and reports the chosen move with its score.
    ///
    /// The board is borrowed mutably for the try/undo walk and is identical
    /// to its input when this returns.
    ///
    /// # Errors
    ///
    /// Returns [`NoLegalMove`] if the board is full.
    #[instrument(skip(self, board), fields(engine = %self.engine))]
    pub fn analyze(&self, board: &mut Board) -> Result<SearchReport, NoLegalMove> {
        let before = board.clone();
        let mut nodes = 0;
        let mut best: Option<(Move, i32)> = None;

        for mv in Move::ALL {
            if !board.at(mv).is_empty() {
                continue;
            }
            let score = {
                let mut trial = Trial::place(board, mv, self.engine);
                self.minimax(&mut trial, false, &mut nodes)
            };
            // Strict improvement only: the first cell reaching the best score wins.
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        debug_assert_eq!(*board, before, "search left marks on the board");

        let Some((best, score)) = best else {
            warn!("Search requested on a full board");
            return Err(NoLegalMove);
        };

        debug!(%best, score, nodes, "Search complete");
        Ok(SearchReport::new(best, score, nodes))
    }

    /// Minimax value of `board` with `maximizing` telling whose turn it is.
    ///
    /// Returns [`WIN_SCORE`], [`LOSS_SCORE`], or [`DRAW_SCORE`]. The board
    /// is restored before returning.
    pub fn evaluate(&self, board: &mut Board, maximizing: bool) -> i32 {
        let mut nodes = 0;
        self.minimax(board, maximizing, &mut nodes)
    }

    fn minimax(&self, board: &mut Board, maximizing: bool, nodes: &mut u64) -> i32 {
        *nodes += 1;

        if board.is_winner(self.engine) {
            return WIN_SCORE;
        }
        if board.is_winner(self.player) {
            return LOSS_SCORE;
        }
        if board.is_full() {
            return DRAW_SCORE;
        }

        let (mark, mut best) = if maximizing {
            (self.engine, i32::MIN)
        } else {
            (self.player, i32::MAX)
        };

        for mv in Move::ALL {
            if !board.at(mv).is_empty() {
                continue;
            }
            let mut trial = Trial::place(board, mv, mark);
            let score = self.minimax(&mut trial, !maximizing, nodes);
            if maximizing {
                if score > best {
                    best = score;
                }
            } else if score < best {
                best = score;
            }
        }

        best
    }
}

/// Finds the optimal move for `engine` against `player`.
///
/// Convenience wrapper over [`SearchEngine::find_best_move`].
///
/// # Errors
///
/// Returns [`NoLegalMove`] if the board is full.
#[instrument(skip(board))]
pub fn find_best_move(board: &mut Board, engine: Mark, player: Mark) -> Result<Move, NoLegalMove> {
    SearchEngine::new(engine, player).find_best_move(board)
}

/// A hypothetical placement that is undone when dropped.
///
/// Dropping clears the cell on every exit path, so an early return from
/// the recursion can never leave a stray mark behind.
struct Trial<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl<'a> Trial<'a> {
    fn place(board: &'a mut Board, mv: Move, mark: Mark) -> Self {
        board.set(mv, Cell::Marked(mark));
        Self { board, mv }
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.set(self.mv, Cell::Empty);
    }
}
