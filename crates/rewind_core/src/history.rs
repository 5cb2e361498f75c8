//! Branching move history for tic-tac-toe.
//!
//! A [`GameHistory`] holds every board reached in the game, oldest first,
//! together with the index of the board currently on display. The pair
//! is one value: transitions take `&self` and return a whole new history,
//! so a move can never be applied against a stale cursor.

use crate::invariants::{InvariantSet, TimelineInvariants};
use crate::rules::check_winner;
use crate::{Board, HistoryError, Intent, MoveRejection, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Whether the displayed board is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No completed line; the player to move may place a mark.
    InProgress,
    /// A player completed a line; moves are ignored on this board.
    Won(Player),
}

/// Ordered board snapshots plus the index of the one being viewed.
///
/// Invariants: there is always at least one board (the empty board at
/// index 0), and `current_move < len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistorySnapshot")]
pub struct GameHistory {
    boards: Vec<Board>,
    current_move: usize,
}

#[allow(clippy::len_without_is_empty)]
impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
            current_move: 0,
        }
    }

    /// All snapshots, oldest first.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Number of snapshots. Never zero.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Snapshot at `index`, if it exists.
    pub fn board_at(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The displayed snapshot.
    pub fn current_board(&self) -> &Board {
        &self.boards[self.current_move]
    }

    /// The player allowed to move on the displayed board.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Winner on the displayed board.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current_board())
    }

    /// Status of the displayed board.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None => GameStatus::InProgress,
        }
    }

    /// Returns why a move at `position` would be ignored, if it would be.
    pub fn move_rejection(&self, position: Position) -> Option<MoveRejection> {
        if let Some(winner) = self.winner() {
            return Some(MoveRejection::GameOver(winner));
        }
        if !self.current_board().is_empty(position) {
            return Some(MoveRejection::SquareOccupied(position));
        }
        None
    }

    /// Places the current player's mark at `position`.
    ///
    /// Snapshots after the displayed one are discarded and the new board
    /// becomes the last entry. On an occupied square or a won board the
    /// history is returned unchanged.
    #[instrument(skip(self), fields(current_move = self.current_move, len = self.boards.len()))]
    pub fn apply_move(&self, position: Position) -> Self {
        if let Some(rejection) = self.move_rejection(position) {
            debug!(%rejection, "Ignoring move");
            return self.clone();
        }

        let player = self.to_move();
        let next_board = self.current_board().with_mark(position, player);

        let mut boards = Vec::with_capacity(self.current_move + 2);
        boards.extend_from_slice(&self.boards[..=self.current_move]);
        boards.push(next_board);

        let discarded = self.boards.len() - (self.current_move + 1);
        let next = Self {
            current_move: boards.len() - 1,
            boards,
        };

        debug!(
            %player,
            %position,
            discarded,
            new_move = next.current_move,
            "Move applied"
        );
        debug_assert!(
            TimelineInvariants::check_all(&next).is_ok(),
            "move produced an inconsistent history"
        );
        next
    }

    /// Points the view at `move_index` without touching any snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidIndex`] if `move_index >= len()`.
    #[instrument(skip(self), fields(len = self.boards.len()))]
    pub fn jump_to(&self, move_index: usize) -> Result<Self, HistoryError> {
        if move_index >= self.boards.len() {
            return Err(HistoryError::InvalidIndex {
                index: move_index,
                len: self.boards.len(),
            });
        }

        debug!(from = self.current_move, to = move_index, "Jumping");
        Ok(Self {
            boards: self.boards.clone(),
            current_move: move_index,
        })
    }

    /// Applies a user intent.
    ///
    /// # Errors
    ///
    /// Only jump intents can fail; see [`GameHistory::jump_to`].
    #[instrument(skip(self))]
    pub fn apply(&self, intent: Intent) -> Result<Self, HistoryError> {
        match intent {
            Intent::Move { position } => Ok(self.apply_move(position)),
            Intent::Jump { move_index } => self.jump_to(move_index),
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Unvalidated wire form of [`GameHistory`].
#[derive(Debug, Deserialize)]
struct HistorySnapshot {
    boards: Vec<Board>,
    current_move: usize,
}

impl TryFrom<HistorySnapshot> for GameHistory {
    type Error = HistoryError;

    fn try_from(snapshot: HistorySnapshot) -> Result<Self, Self::Error> {
        let history = GameHistory {
            boards: snapshot.boards,
            current_move: snapshot.current_move,
        };

        TimelineInvariants::check_all(&history).map_err(|violations| {
            let reason = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            HistoryError::Corrupt { reason }
        })?;

        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play(history: &GameHistory, cells: &[usize]) -> GameHistory {
        cells.iter().fold(history.clone(), |h, &i| {
            h.apply_move(Position::from_index(i).unwrap())
        })
    }

    #[test]
    fn test_new_history() {
        let history = GameHistory::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_move(), 0);
        assert_eq!(history.current_board(), &Board::new());
        assert_eq!(history.to_move(), Player::X);
        assert_eq!(history.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_move_appends_and_alternates() {
        let history = play(&GameHistory::new(), &[4]);
        assert_eq!(history.len(), 2);
        assert_eq!(history.current_move(), 1);
        assert_eq!(
            history.current_board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(history.to_move(), Player::O);
    }

    #[test]
    fn test_occupied_square_is_noop() {
        let history = play(&GameHistory::new(), &[4]);
        let again = history.apply_move(Position::Center);
        assert_eq!(again, history);
        assert_eq!(
            history.move_rejection(Position::Center),
            Some(MoveRejection::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_won_board_is_noop() {
        let history = play(&GameHistory::new(), &[0, 3, 1, 4, 2]);
        assert_eq!(history.status(), GameStatus::Won(Player::X));
        assert_eq!(history.apply_move(Position::BottomRight), history);
        assert_eq!(
            history.move_rejection(Position::BottomRight),
            Some(MoveRejection::GameOver(Player::X))
        );
    }

    #[test]
    fn test_jump_keeps_boards() {
        let history = play(&GameHistory::new(), &[0, 3, 1]);
        let viewed = history.jump_to(1).unwrap();
        assert_eq!(viewed.boards(), history.boards());
        assert_eq!(viewed.current_move(), 1);
        assert_eq!(viewed.to_move(), Player::O);
    }

    #[test]
    fn test_jump_out_of_range() {
        let history = play(&GameHistory::new(), &[0]);
        assert_eq!(
            history.jump_to(2),
            Err(HistoryError::InvalidIndex { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_move_after_jump_truncates_future() {
        let history = play(&GameHistory::new(), &[0, 3, 1, 4]);
        assert_eq!(history.len(), 5);

        let branched = history.jump_to(1).unwrap().apply_move(Position::BottomRight);
        assert_eq!(branched.len(), 3);
        assert_eq!(branched.current_move(), 2);
        assert_eq!(&branched.boards()[..2], &history.boards()[..2]);
        assert_eq!(
            branched.current_board().get(Position::BottomRight),
            Square::Occupied(Player::O)
        );
    }

    #[test]
    fn test_jump_back_reopens_won_game() {
        let won = play(&GameHistory::new(), &[0, 3, 1, 4, 2]);
        let reopened = won.jump_to(4).unwrap();
        assert_eq!(reopened.status(), GameStatus::InProgress);

        let replayed = reopened.apply_move(Position::BottomRight);
        assert_eq!(replayed.len(), 6);
        assert_eq!(replayed.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_apply_dispatches_intents() {
        let history = GameHistory::new()
            .apply(Intent::place(Position::TopLeft))
            .and_then(|h| h.apply(Intent::jump(0)))
            .unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.current_move(), 0);
        assert!(GameHistory::new().apply(Intent::jump(1)).is_err());
    }
}
