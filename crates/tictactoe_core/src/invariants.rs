//! Board invariants for games played through a [`GameSession`](crate::GameSession).
//!
//! Invariants are logical properties that hold after every legal move.
//! The session asserts them in debug builds; tests check them directly.

use crate::{Board, Mark};
use strum::IntoEnumIterator;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X moves first, so X has as many marks as O or one more.
pub struct MarksBalanced;

impl Invariant<Board> for MarksBalanced {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);
        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has as many marks as O or exactly one more"
    }
}

/// Invariant: at most one side has completed a line.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        let winners = Mark::iter().filter(|&mark| board.is_winner(mark)).count();
        let valid = winners <= 1;
        if !valid {
            warn!(winners, "More than one side holds a line");
        }
        valid
    }

    fn description() -> &'static str {
        "At most one side holds a line"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (MarksBalanced, SingleWinner);
