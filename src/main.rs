//! Rewind Tic-Tac-Toe - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use rewind_tictactoe::cli::{Cli, Command};
use rewind_tictactoe::view::{move_entries, render_board_text, status_line};
use rewind_tictactoe::{
    GameHistory, Intent, Settings, init_file_logging, init_stderr_logging, parse_script,
    run_script_with, tui,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_file_logging(&settings)?;
            tui::run_tui(&settings)
        }
        Command::Replay {
            script,
            json,
            trace,
        } => {
            init_stderr_logging(&settings);
            run_replay(&settings, &script.join(" "), json, trace)
        }
    }
}

/// Runs a script headlessly and prints the outcome.
fn run_replay(settings: &Settings, script: &str, json: bool, trace: bool) -> Result<()> {
    let intents = parse_script(script)?;
    info!(count = intents.len(), "Replaying script");

    let history = run_script_with(&intents, |intent, history| {
        if trace {
            print_step(settings, intent, history);
        }
    })
    .context("Replay stopped")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&history)?);
    } else if !trace {
        print_history(settings, &history);
    }
    Ok(())
}

fn print_step(settings: &Settings, intent: &Intent, history: &GameHistory) {
    println!("== {} ==", intent);
    print_history(settings, history);
    println!();
}

fn print_history(settings: &Settings, history: &GameHistory) {
    println!(
        "{}",
        render_board_text(history.current_board(), *settings.show_cell_numbers())
    );
    println!();
    println!("{}", status_line(history));
    for entry in move_entries(history) {
        let marker = if entry.is_current { ">" } else { " " };
        println!("{} {}. {}", marker, entry.index, entry.label);
    }
}
