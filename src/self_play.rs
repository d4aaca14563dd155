//! Engine-versus-engine play from the empty board.

use crate::notation::format_board;
use anyhow::{Context, Result};
use std::io::Write;
use tictactoe_core::{Board, GameOutcome, Mark, SearchEngine};
use tracing::{info, instrument};

/// Plays one game with the engine on both sides, X first.
///
/// Each position is written to `output` as it is reached. Returns the final
/// outcome from O's side (`EngineWins` means O won). Optimal play on both
/// sides always ends in a draw.
#[instrument(skip(output))]
pub fn run_self_play(output: &mut impl Write) -> Result<GameOutcome> {
    let mut board = Board::new();
    let mut to_move = Mark::X;

    loop {
        let outcome = board.outcome_for(Mark::X, Mark::O);
        if outcome.is_over() {
            writeln!(output, "Result: {}", describe(outcome))?;
            info!(%outcome, "Self-play finished");
            return Ok(outcome);
        }

        let engine = SearchEngine::new(to_move, to_move.opponent());
        let report = engine
            .analyze(&mut board)
            .context("engine found no move on an unfinished board")?;
        let mv = *report.best();
        board.place(mv.row, mv.col, to_move)?;
        writeln!(
            output,
            "{} plays {} (score {}): {}",
            to_move,
            mv,
            report.score(),
            format_board(&board)
        )?;
        to_move = to_move.opponent();
    }
}

fn describe(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::PlayerWins => "X wins",
        GameOutcome::EngineWins => "O wins",
        GameOutcome::Draw => "draw",
        GameOutcome::InProgress => "unfinished",
    }
}
