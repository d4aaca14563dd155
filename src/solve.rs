//! One-shot analysis of a position given in notation.

use crate::notation::parse_board;
use anyhow::{Context, Result};
use std::io::Write;
use tictactoe_core::{Mark, SearchEngine, SearchReport};
use tracing::{info, instrument};

/// Finds the best move for `engine` on the board given as notation.
///
/// Writes either a human-readable line or the JSON report to `output`.
#[instrument(skip(output))]
pub fn run_solve(
    notation: &str,
    engine: Mark,
    json: bool,
    output: &mut impl Write,
) -> Result<SearchReport> {
    let mut board = parse_board(notation).context("Invalid board")?;
    let report = SearchEngine::new(engine, engine.opponent())
        .analyze(&mut board)
        .context("Board is already full")?;
    info!(best = %report.best(), score = report.score(), "Position solved");

    if json {
        writeln!(output, "{}", serde_json::to_string(&report)?)?;
    } else {
        let best = report.best();
        writeln!(
            output,
            "{} should play square {} {} (score {}, {} positions searched)",
            engine,
            best.index() + 1,
            best,
            report.score(),
            report.nodes()
        )?;
    }
    Ok(report)
}
