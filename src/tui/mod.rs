//! Terminal UI for the game.
//!
//! The UI owns one [`App`], draws it, and turns key presses and clicks into
//! intents. There is no background work; each event is handled to
//! completion before the next frame is drawn.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use input::{Action, Direction, action_for, move_cursor};
pub use ui::{ClickTarget, ScreenLayout, draw, hit_test, screen_layout};

use crate::Settings;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Runs the interactive game until the user quits.
#[instrument(skip(settings))]
pub fn run_tui(settings: &Settings) -> Result<()> {
    info!("Starting TUI");

    enable_raw_mode()?;
    let res = with_restore(
        enter_screen,
        |mut terminal| run_app(&mut terminal, App::new(), settings),
        leave_screen,
    );

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Runs `session` on whatever `enter` produced, then runs `leave` no matter
/// which of the two failed.
///
/// An error from `enter` or `session` takes precedence over one from `leave`.
fn with_restore<T>(
    enter: impl FnOnce() -> Result<T>,
    session: impl FnOnce(T) -> Result<()>,
    leave: impl FnOnce() -> Result<()>,
) -> Result<()> {
    let res = enter().and_then(session);
    let restored = leave();
    res.and(restored)
}

fn enter_screen() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn leave_screen() -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
    raw?;
    screen?;
    Ok(())
}

/// Draw-and-handle loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App, settings: &Settings) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let area = terminal.draw(|f| draw(f, &app, settings))?.area;

        if *app.should_quit() {
            return Ok(());
        }

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match action_for(key) {
                Some(action) => app.handle_action(action),
                None => debug!(?key, "Unmapped key"),
            },
            Event::Mouse(mouse) => {
                if let Some(action) = click_action(area, &app, mouse) {
                    app.handle_action(action);
                }
            }
            _ => {}
        }
    }
}

/// Maps a left click onto a placement or a jump.
fn click_action(area: Rect, app: &App, mouse: MouseEvent) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    match hit_test(area, mouse.column, mouse.row, app)? {
        ClickTarget::Cell(position) => Some(Action::PlaceAt(position)),
        ClickTarget::Move(index) => Some(Action::JumpTo(index)),
    }
}
