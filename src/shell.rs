//! Line-based terminal shell for playing against the engine.
//!
//! The shell owns a [`GameSession`], turns input lines into moves, and
//! renders the board with a status line after every turn. It is generic
//! over its input and output so tests can drive it from memory.

use crate::config::ShellConfig;
use anyhow::Result;
use derive_more::Display;
use std::io::{BufRead, Write};
use tictactoe_core::{GameOutcome, GameSession, Move, TurnReport};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Enter a square as a number 1-9 (as shown on the board) or as 'row col' (0-2 each).
Commands: reset (or new) starts over, help shows this text, quit (or q) exits.";

/// A parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place the human's mark.
    Place(Move),
    /// Start a new game.
    Reset,
    /// Show usage.
    Help,
    /// Leave the shell.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Blank line.
    #[display("Please enter a square")]
    Empty,
    /// Cell number outside 1-9.
    #[display("Squares are numbered 1-9, got {_0}")]
    CellNumber(usize),
    /// Anything else.
    #[display("Unrecognized input '{_0}' (type 'help')")]
    Unrecognized(String),
}

impl std::error::Error for InputError {}

impl std::str::FromStr for Input {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "" => return Err(InputError::Empty),
            "reset" | "new" => return Ok(Input::Reset),
            "help" | "?" => return Ok(Input::Help),
            "quit" | "q" | "exit" => return Ok(Input::Quit),
            _ => {}
        }

        let parts: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .collect();
        let numbers: Option<Vec<usize>> = parts.iter().map(|part| part.parse().ok()).collect();

        match numbers.as_deref() {
            Some(&[number]) => match number.checked_sub(1).and_then(Move::from_index) {
                Some(mv) => Ok(Input::Place(mv)),
                None => Err(InputError::CellNumber(number)),
            },
            // Range is checked by the board so the error names the cell.
            Some(&[row, col]) => Ok(Input::Place(Move::new(row, col))),
            _ => Err(InputError::Unrecognized(line.to_string())),
        }
    }
}

/// Status line shown under the board.
pub fn status_line(session: &GameSession) -> &'static str {
    match session.outcome() {
        GameOutcome::PlayerWins => "You win!",
        GameOutcome::EngineWins => "Computer wins!",
        GameOutcome::Draw => "It's a draw!",
        GameOutcome::InProgress if session.history().is_empty() => "Your turn! Pick any square.",
        GameOutcome::InProgress => "Your turn!",
    }
}

/// Terminal shell around one [`GameSession`].
pub struct Shell<R, W> {
    input: R,
    output: W,
    session: GameSession,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell with a fresh session.
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            input,
            output,
            session: GameSession::new(),
            config,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Consumes the shell, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip(self), fields(player = %self.config.player_name()))]
    pub fn run(&mut self) -> Result<()> {
        info!("Shell started");
        writeln!(
            self.output,
            "Tic-tac-toe: {} (X) vs Computer (O)",
            self.config.player_name()
        )?;
        self.render()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                writeln!(self.output)?;
                break;
            }

            match line.parse::<Input>() {
                Ok(Input::Quit) => break,
                Ok(Input::Help) => writeln!(self.output, "{}", HELP)?,
                Ok(Input::Reset) => {
                    self.session.reset();
                    self.render()?;
                }
                Ok(Input::Place(mv)) => self.place(mv)?,
                Err(e) => {
                    debug!(error = %e, "Bad input");
                    writeln!(self.output, "{}", e)?;
                }
            }
        }

        info!("Shell exiting");
        Ok(())
    }

    fn place(&mut self, mv: Move) -> Result<()> {
        match self.session.play(mv.row, mv.col) {
            Ok(report) => self.report_turn(&report),
            Err(e) => {
                warn!(error = %e, "Move rejected");
                writeln!(self.output, "{}", e)?;
                if self.session.is_over() {
                    writeln!(self.output, "Type 'reset' to play again.")?;
                }
                Ok(())
            }
        }
    }

    fn report_turn(&mut self, report: &TurnReport) -> Result<()> {
        if let Some(reply) = report.engine() {
            writeln!(self.output, "Computer is thinking...")?;
            writeln!(
                self.output,
                "Computer plays square {} {}",
                reply.index() + 1,
                reply
            )?;
            if *self.config.show_search_stats()
                && let Some(search) = self.session.last_search()
            {
                writeln!(
                    self.output,
                    "Search: score {}, {} positions",
                    search.score(),
                    search.nodes()
                )?;
            }
        }
        self.render()
    }

    fn render(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.session.board())?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", status_line(&self.session))?;
        if self.session.is_over() {
            writeln!(self.output, "Type 'reset' to play again.")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell_number() {
        assert_eq!("5".parse::<Input>(), Ok(Input::Place(Move::new(1, 1))));
        assert_eq!("1".parse::<Input>(), Ok(Input::Place(Move::new(0, 0))));
        assert_eq!(" 9 ".parse::<Input>(), Ok(Input::Place(Move::new(2, 2))));
    }

    #[test]
    fn test_parse_row_col() {
        assert_eq!("0 2".parse::<Input>(), Ok(Input::Place(Move::new(0, 2))));
        assert_eq!("2,1".parse::<Input>(), Ok(Input::Place(Move::new(2, 1))));
        assert_eq!("3 3".parse::<Input>(), Ok(Input::Place(Move::new(3, 3))));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("reset".parse::<Input>(), Ok(Input::Reset));
        assert_eq!("NEW".parse::<Input>(), Ok(Input::Reset));
        assert_eq!("q".parse::<Input>(), Ok(Input::Quit));
        assert_eq!("help".parse::<Input>(), Ok(Input::Help));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Input>(), Err(InputError::Empty));
        assert_eq!("0".parse::<Input>(), Err(InputError::CellNumber(0)));
        assert_eq!("10".parse::<Input>(), Err(InputError::CellNumber(10)));
        assert!(matches!("abc".parse::<Input>(), Err(InputError::Unrecognized(_))));
        assert!(matches!("1 2 3".parse::<Input>(), Err(InputError::Unrecognized(_))));
    }

    #[test]
    fn test_status_line_progression() {
        let mut session = GameSession::new();
        assert_eq!(status_line(&session), "Your turn! Pick any square.");
        session.play(1, 1).expect("legal move");
        assert_eq!(status_line(&session), "Your turn!");
    }
}
