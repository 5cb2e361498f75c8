//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with a move history you can jump around in
#[derive(Parser, Debug)]
#[command(name = "rewind_tictactoe")]
#[command(about = "Tic-tac-toe with a jump-anywhere move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults to ./rewind.toml when present.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run; plays interactively when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply a script of intents and print the result
    Replay {
        /// Intents: cell numbers 0-8 to move, jN or @N to jump to entry N
        #[arg(required = true, num_args = 1..)]
        script: Vec<String>,

        /// Print the final history as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Print every intermediate state, not just the last one
        #[arg(long, conflicts_with = "json")]
        trace: bool,
    },
}
