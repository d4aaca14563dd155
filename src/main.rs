//! Tic-tac-toe shell entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::{Cli, Command, Shell, ShellConfig, run_self_play, run_solve};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ShellConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    let fallback = cli
        .log_filter
        .clone()
        .unwrap_or_else(|| config.log_filter().clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
    debug!(?cli, "Parsed command line");

    let command = cli.command.unwrap_or(Command::Play { stats: false });
    let stdout = std::io::stdout();
    match command {
        Command::Play { stats } => {
            info!("Starting interactive game");
            let config = if stats {
                config.with_search_stats(true)
            } else {
                config
            };
            let mut shell = Shell::new(std::io::stdin().lock(), stdout.lock(), config);
            shell.run()
        }
        Command::Solve { board, mark, json } => {
            run_solve(&board, mark.into(), json, &mut stdout.lock()).map(|_| ())
        }
        Command::SelfPlay => run_self_play(&mut stdout.lock()).map(|_| ()),
    }
}
