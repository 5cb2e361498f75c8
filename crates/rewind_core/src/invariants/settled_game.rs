//! Settled game invariant: nothing is played after a win.

use super::Invariant;
use crate::GameHistory;
use crate::rules::check_winner;

/// Invariant: only the last snapshot may hold a winning line.
pub struct SettledGameInvariant;

impl Invariant<GameHistory> for SettledGameInvariant {
    fn holds(history: &GameHistory) -> bool {
        let boards = history.boards();
        let before_last = boards.len().saturating_sub(1);
        boards[..before_last]
            .iter()
            .all(|board| check_winner(board).is_none())
    }

    fn description() -> &'static str {
        "No move follows a board that already has a winner"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_won_history_holds() {
        let history = [0, 3, 1, 4, 2].iter().fold(GameHistory::new(), |h, &i| {
            h.apply_move(Position::from_index(i).unwrap())
        });
        assert!(history.winner().is_some());
        assert!(SettledGameInvariant::holds(&history));
    }
}
