//! Monotonic timeline invariant: each snapshot is its predecessor plus one mark.

use super::Invariant;
use crate::{Board, GameHistory, Player, Square};

/// Invariant: the timeline replays as a legal sequence of placements.
///
/// Index 0 is the empty board. Every later board differs from the one
/// before it in exactly one square, which went from empty to the mark of
/// the player whose turn it was.
pub struct MonotonicTimelineInvariant;

impl MonotonicTimelineInvariant {
    fn is_single_placement(before: &Board, after: &Board, player: Player) -> bool {
        let mut changed = before
            .squares()
            .iter()
            .zip(after.squares())
            .filter(|(b, a)| b != a);

        matches!(
            (changed.next(), changed.next()),
            (Some((Square::Empty, placed)), None) if *placed == Square::Occupied(player)
        )
    }
}

impl Invariant<GameHistory> for MonotonicTimelineInvariant {
    fn holds(history: &GameHistory) -> bool {
        let boards = history.boards();

        if boards.first() != Some(&Board::new()) {
            return false;
        }

        boards.windows(2).enumerate().all(|(i, pair)| {
            Self::is_single_placement(&pair[0], &pair[1], Player::for_move(i))
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark for the player to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_played_history_holds() {
        let history = GameHistory::new()
            .apply_move(Position::TopLeft)
            .apply_move(Position::Center)
            .apply_move(Position::BottomRight);
        assert!(MonotonicTimelineInvariant::holds(&history));
    }

    #[test]
    fn test_wrong_player_violates() {
        let before = Board::new();
        let after = before.with_mark(Position::Center, Player::O);
        assert!(!MonotonicTimelineInvariant::is_single_placement(
            &before,
            &after,
            Player::X
        ));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let before = Board::new();
        let after = before
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::TopLeft, Player::X);
        assert!(!MonotonicTimelineInvariant::is_single_placement(
            &before,
            &after,
            Player::X
        ));
    }

    #[test]
    fn test_unchanged_board_violates() {
        let board = Board::new();
        assert!(!MonotonicTimelineInvariant::is_single_placement(
            &board,
            &board,
            Player::X
        ));
    }
}
