//! Keyboard mapping for the interactive UI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rewind_core::Position;

/// Cursor direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor or the move-list selection.
    Navigate(Direction),
    /// Activate the focused element (place a mark or jump).
    Activate,
    /// Place a mark directly on a cell.
    PlaceAt(Position),
    /// Jump directly to a history index.
    JumpTo(usize),
    /// Jump one snapshot back.
    StepBack,
    /// Jump one snapshot forward.
    StepForward,
    /// Switch focus between the board and the move list.
    ToggleFocus,
    /// Start a new game.
    Restart,
    /// Leave the application.
    Quit,
}

/// Maps a key event to an action.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Navigate(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Navigate(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Navigate(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Navigate(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::PlaceAt),
        KeyCode::Char('[') => Some(Action::StepBack),
        KeyCode::Char(']') => Some(Action::StepForward),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::ToggleFocus),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves the board cursor, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(
            action_for(key(KeyCode::Char('1'))),
            Some(Action::PlaceAt(Position::TopLeft))
        );
        assert_eq!(
            action_for(key(KeyCode::Char('9'))),
            Some(Action::PlaceAt(Position::BottomRight))
        );
        assert_eq!(action_for(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn test_cursor_moves_and_stops_at_edges() {
        assert_eq!(
            move_cursor(Position::Center, Direction::Up),
            Position::TopCenter
        );
        assert_eq!(
            move_cursor(Position::TopCenter, Direction::Up),
            Position::TopCenter
        );
        assert_eq!(
            move_cursor(Position::MiddleRight, Direction::Right),
            Position::MiddleRight
        );
        assert_eq!(
            move_cursor(Position::BottomRight, Direction::Left),
            Position::BottomCenter
        );
    }
}
