//! Command-line interface for the tic-tac-toe shell.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictactoe_core::Mark;

/// Tic-tac-toe against an engine that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a perfect-play minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the shell configuration file
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Tracing filter (overrides the config file; RUST_LOG overrides both)
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game in the terminal (you are X and move first)
    Play {
        /// Show the engine's score and node count after each reply
        #[arg(long)]
        stats: bool,
    },

    /// Print the engine's best move for a position
    Solve {
        /// Board in row-major notation, e.g. "XX./.O./..." ('.', '_' or '-' for empty)
        board: String,

        /// Mark the engine plays
        #[arg(long, value_enum, default_value_t = MarkArg::O)]
        mark: MarkArg,

        /// Print the search report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides from an empty board
    SelfPlay,
}

/// Mark selection on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkArg {
    /// Cross
    X,
    /// Nought
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}
