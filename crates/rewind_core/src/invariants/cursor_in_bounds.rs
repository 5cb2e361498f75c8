//! Cursor invariant: the history is non-empty and the view points into it.

use super::Invariant;
use crate::GameHistory;

/// Invariant: `0 <= current_move < len` and `len >= 1`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameHistory> for CursorInBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        !history.boards().is_empty() && history.current_move() < history.boards().len()
    }

    fn description() -> &'static str {
        "History is non-empty and the current move points into it"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_holds_through_moves_and_jumps() {
        let history = GameHistory::new();
        assert!(CursorInBoundsInvariant::holds(&history));

        let history = history.apply_move(Position::Center);
        assert!(CursorInBoundsInvariant::holds(&history));

        let history = history.jump_to(0).unwrap();
        assert!(CursorInBoundsInvariant::holds(&history));
    }
}
