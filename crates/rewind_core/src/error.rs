//! Error and rejection types for the game history.

use crate::{Player, Position};
use derive_more::{Display, Error};

/// Error raised by history operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// A jump targeted an index outside the history.
    #[display("Move index {} is out of range (history has {} entries)", index, len)]
    InvalidIndex {
        /// The requested move index.
        index: usize,
        /// Length of the history at the time of the request.
        len: usize,
    },

    /// A restored history does not describe a legal game.
    #[display("Corrupt history: {}", reason)]
    Corrupt {
        /// Which checks failed.
        reason: String,
    },
}

/// Reason a move intent is ignored.
///
/// Rejected moves are not errors: the history is returned unchanged.
/// This type only exists so callers can log why nothing happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveRejection {
    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(Player),
}
