//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from board storage so the search engine and the session share one
//! definition of a win.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::is_full;
pub use outcome::outcome_for;
pub use win::{LINES, is_winner};
