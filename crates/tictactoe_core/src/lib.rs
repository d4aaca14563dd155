//! Tic-tac-toe game core: board, rules, and a perfect-play minimax engine.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid with checked placement and win/draw queries
//! - **Rules**: pure line, fullness, and outcome checks over a board
//! - **Search**: exhaustive minimax returning the engine's optimal move
//! - **Session**: one game between a human (X, first) and the engine (O)
//!
//! Presentation is left to the caller: a shell feeds human moves into a
//! [`GameSession`] and renders what comes back.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Board, Mark, Move, find_best_move};
//!
//! let mut board = Board::new();
//! board.place(0, 0, Mark::X)?;
//! board.place(0, 1, Mark::X)?;
//!
//! let reply = find_best_move(&mut board, Mark::O, Mark::X)?;
//! assert_eq!(reply, Move::new(0, 2));
//! # Ok::<(), tictactoe_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod invariants;
mod outcome;
pub mod rules;
mod search;
mod session;
mod types;

pub use board::Board;
pub use error::{GameError, InvalidMove, InvalidMoveReason, NoLegalMove};
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, MarksBalanced, SingleWinner,
};
pub use outcome::GameOutcome;
pub use search::{DRAW_SCORE, LOSS_SCORE, SearchEngine, SearchReport, WIN_SCORE, find_best_move};
pub use session::{ENGINE_MARK, GameSession, PLAYER_MARK, Placement, TurnReport};
pub use types::{CELLS, Cell, Mark, Move, SIZE};
