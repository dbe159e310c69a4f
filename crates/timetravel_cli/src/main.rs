//! Timetravel - terminal driver for the tic-tac-toe engine.

#![warn(missing_docs)]

mod cli;
mod command;
mod config;
mod render;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::DisplayConfig;
use session::Session;
use std::io::Write;
use timetravel_tictactoe::GameEngine;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = DisplayConfig::resolve(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play => run_play(config),
        Command::Replay { moves, jump, json } => run_replay(&moves, jump, json, &config),
    }
}

/// Run the interactive loop on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: DisplayConfig) -> Result<()> {
    info!("Starting interactive session");
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut session = Session::new(config);
    session.run(stdin.lock(), &mut stdout)?;
    info!(status = %session.engine().status(), moves = session.engine().cursor(), "Session ended");
    Ok(())
}

/// Apply moves non-interactively and print the result
#[instrument(skip(config))]
fn run_replay(moves: &[usize], jump: Option<usize>, json: bool, config: &DisplayConfig) -> Result<()> {
    let mut engine = GameEngine::replay(moves).context("Failed to replay moves")?;
    if let Some(step) = jump {
        engine.jump_to(step).context("Failed to jump")?;
    }

    let view = engine.view();
    let mut stdout = std::io::stdout();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &view)?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", render::frame(&view, config))?;
    }
    Ok(())
}
