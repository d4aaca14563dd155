//! Terminal tic-tac-toe against a perfect-play engine.
//!
//! The game logic lives in [`tictactoe_core`]; this crate is the shell
//! around it.
//!
//! # Architecture
//!
//! - **Shell**: line-based interactive play over any `BufRead`/`Write`
//! - **Solve**: best move for a position given in board notation
//! - **Self-play**: the engine against itself from the empty board
//! - **Config**: TOML settings for the shell

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod notation;
mod self_play;
mod shell;
mod solve;

pub use cli::{Cli, Command, MarkArg};
pub use config::{ConfigError, ShellConfig};
pub use notation::{NotationError, format_board, parse_board};
pub use self_play::run_self_play;
pub use shell::{Input, InputError, Shell, status_line};
pub use solve::run_solve;
