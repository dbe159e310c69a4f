//! Command-line interface for timetravel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Timetravel - tic-tac-toe with move history
#[derive(Parser, Debug)]
#[command(name = "timetravel")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML display config (defaults to ./timetravel.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading commands from stdin
    Play,

    /// Apply a list of moves and print the resulting game
    Replay {
        /// Cell indices 0-8, comma separated (e.g. 0,4,1,3,2)
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// History step to jump to after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the view as JSON instead of a text board
        #[arg(long)]
        json: bool,
    },
}
