//! Application state and logic.

use super::input::{Action, Direction, move_cursor};
use derive_getters::Getters;
use rewind_core::{GameHistory, HistoryError, Intent, Position};
use tracing::{debug, info, instrument, warn};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The list of snapshots.
    Moves,
}

/// Main application state.
///
/// The game itself is a single [`GameHistory`] value that every intent
/// replaces wholesale.
#[derive(Debug, Getters)]
pub struct App {
    history: GameHistory,
    cursor: Position,
    focus: Focus,
    selected_move: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with an empty board.
    pub fn new() -> Self {
        Self {
            history: GameHistory::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_move: 0,
            should_quit: false,
        }
    }

    /// Applies an intent to the game.
    ///
    /// # Errors
    ///
    /// Returns the history error for a jump outside the move list. The
    /// current state is kept in that case.
    #[instrument(skip(self), fields(current_move = self.history.current_move()))]
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), HistoryError> {
        let next = self.history.apply(intent)?;
        if next == self.history {
            debug!(%intent, "Intent left the game unchanged");
        }
        self.history = next;
        self.selected_move = self.history.current_move();
        Ok(())
    }

    /// Handles a mapped key action.
    #[instrument(skip(self))]
    pub fn handle_action(&mut self, action: Action) {
        let intent = match action {
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
                None
            }
            Action::Restart => {
                self.restart();
                None
            }
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
                self.selected_move = self.history.current_move();
                None
            }
            Action::Navigate(direction) => {
                self.navigate(direction);
                None
            }
            Action::Activate => Some(match self.focus {
                Focus::Board => Intent::place(self.cursor),
                Focus::Moves => Intent::jump(self.selected_move),
            }),
            Action::PlaceAt(position) => {
                self.cursor = position;
                Some(Intent::place(position))
            }
            Action::JumpTo(move_index) => Some(Intent::jump(move_index)),
            Action::StepBack => self
                .history
                .current_move()
                .checked_sub(1)
                .map(Intent::jump),
            Action::StepForward => {
                let next = self.history.current_move() + 1;
                (next < self.history.len()).then(|| Intent::jump(next))
            }
        };

        if let Some(intent) = intent
            && let Err(e) = self.dispatch(intent)
        {
            warn!(%intent, error = %e, "Intent rejected");
        }
    }

    fn navigate(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, direction),
            Focus::Moves => {
                let last = self.history.len() - 1;
                self.selected_move = match direction {
                    Direction::Up | Direction::Left => self.selected_move.saturating_sub(1),
                    Direction::Down | Direction::Right => (self.selected_move + 1).min(last),
                };
            }
        }
    }

    /// Starts over with an empty board.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.history = GameHistory::new();
        self.selected_move = 0;
        self.cursor = Position::Center;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
