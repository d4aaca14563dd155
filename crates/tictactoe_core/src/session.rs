//! A single game between a human and the engine.
//!
//! The session is the one owner of the board. The shell hands it human
//! moves; the session answers with the engine's reply and the new outcome.

use crate::error::{GameError, InvalidMove, InvalidMoveReason};
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::outcome::GameOutcome;
use crate::search::{SearchEngine, SearchReport};
use crate::types::{Mark, Move};
use crate::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Mark played by the human. The human always moves first.
pub const PLAYER_MARK: Mark = Mark::X;

/// Mark played by the engine.
pub const ENGINE_MARK: Mark = Mark::O;

/// A mark placed during the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Placement {
    /// Who placed it.
    pub mark: Mark,
    /// Where it was placed.
    pub at: Move,
}

/// What happened during one call to [`GameSession::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct TurnReport {
    /// The human's move.
    human: Move,
    /// The engine's reply, absent if the human's move ended the game.
    engine: Option<Move>,
    /// Outcome after the turn.
    outcome: GameOutcome,
}

/// Game session: one board, the human as X, the engine as O.
#[derive(Debug, Clone, Getters)]
pub struct GameSession {
    /// Current board.
    board: Board,
    /// Placements of the current game, in order.
    history: Vec<Placement>,
    /// Report from the engine's most recent search in this game.
    last_search: Option<SearchReport>,
    #[getter(skip)]
    engine: SearchEngine,
}

impl GameSession {
    /// Starts a session with an empty board and the human to move.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self {
            board: Board::new(),
            history: Vec::new(),
            last_search: None,
            engine: SearchEngine::new(ENGINE_MARK, PLAYER_MARK),
        }
    }

    /// Starts a new game in this session.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
        self.last_search = None;
        info!("New game started");
    }

    /// Current outcome, recomputed from the board.
    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome_for(PLAYER_MARK, ENGINE_MARK)
    }

    /// Returns true once the game has a winner or the board is full.
    pub fn is_over(&self) -> bool {
        self.outcome().is_over()
    }

    /// Plays the human's move at `(row, col)` and, unless that ends the
    /// game, the engine's reply.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] if the game is over or the cell is
    /// off the board or taken. The session is unchanged on error.
    #[instrument(skip(self))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<TurnReport, GameError> {
        if self.is_over() {
            warn!(outcome = %self.outcome(), "Move rejected: game is over");
            return Err(InvalidMove::new(row, col, InvalidMoveReason::GameOver).into());
        }

        self.board.place(row, col, PLAYER_MARK)?;
        let human = Move::new(row, col);
        self.record(Placement::new(PLAYER_MARK, human));

        let outcome = self.outcome();
        if outcome.is_over() {
            info!(%human, %outcome, "Game over after human move");
            return Ok(TurnReport::new(human, None, outcome));
        }

        let reply = self.engine_turn()?;
        let outcome = self.outcome();
        info!(%human, %reply, %outcome, "Turn complete");
        Ok(TurnReport::new(human, Some(reply), outcome))
    }

    fn engine_turn(&mut self) -> Result<Move, GameError> {
        let report = self.engine.analyze(&mut self.board)?;
        let reply = *report.best();
        self.board.place(reply.row, reply.col, ENGINE_MARK)?;
        self.last_search = Some(report);
        self.record(Placement::new(ENGINE_MARK, reply));
        Ok(reply)
    }

    fn record(&mut self, placement: Placement) {
        debug!(mark = %placement.mark, at = %placement.at, "Placement recorded");
        self.history.push(placement);
        debug_assert!(
            BoardInvariants::check_all(&self.board).is_ok(),
            "board invariants violated"
        );
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
