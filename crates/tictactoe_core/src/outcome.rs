//! Game outcome derived from board contents.

use serde::{Deserialize, Serialize};

/// Status of a game, always recomputed from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No line and at least one empty cell.
    InProgress,
    /// The human completed a line.
    PlayerWins,
    /// The engine completed a line.
    EngineWins,
    /// Board full with no line.
    Draw,
}

impl GameOutcome {
    /// Returns true once no further moves may be played.
    pub fn is_over(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::PlayerWins => write!(f, "Player wins"),
            GameOutcome::EngineWins => write!(f, "Engine wins"),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}
