//! Xcircle - terminal N-by-N connect-M game.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;
use xcircle::{Cli, GameEngine, Session};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = cli.settings()?.game_config()?;
    info!(
        board_size = config.board_size(),
        win_length = config.win_length(),
        "Starting xcircle"
    );

    let mut session = Session::new(
        GameEngine::new(config),
        io::stdin().lock(),
        io::stdout().lock(),
        io::stderr(),
    );
    session.play()?;

    Ok(())
}
