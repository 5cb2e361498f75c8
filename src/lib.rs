//! Tic-tac-toe with a jump-anywhere move history.
//!
//! Game rules and the history live in [`rewind_core`]. This crate adds
//! what a player touches: the terminal UI, a headless replay mode, the
//! presentation model both of them share, and settings and logging.
//!
//! # Architecture
//!
//! - **view**: pure functions from a history to status text and move labels
//! - **script**: parse and run intent scripts without a terminal
//! - **tui**: ratatui front end that turns keys and clicks into intents
//! - **config** / **logging**: TOML settings and tracing setup

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod logging;
pub mod script;
pub mod tui;
pub mod view;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, Settings};
pub use logging::{init_file_logging, init_stderr_logging};
pub use script::{ScriptError, parse_script, run_script, run_script_with};

pub use rewind_core::{
    Board, GameHistory, GameStatus, HistoryError, Intent, MoveRejection, Player, Position,
    Square,
};
