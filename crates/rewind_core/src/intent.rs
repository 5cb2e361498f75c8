//! User intents routed into the game history.
//!
//! The rendering layer never touches the history directly; it turns
//! clicks and key presses into intents and hands them to
//! [`GameHistory::apply`](crate::GameHistory::apply).

use crate::Position;
use serde::{Deserialize, Serialize};

/// An action requested by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Intent {
    /// Place the current player's mark on a cell.
    #[display("move at {}", position.to_index())]
    Move {
        /// The cell to mark.
        position: Position,
    },
    /// View an earlier (or later) snapshot.
    #[display("jump to #{}", move_index)]
    Jump {
        /// Index into the history.
        move_index: usize,
    },
}

impl Intent {
    /// Creates a move intent.
    pub fn place(position: Position) -> Self {
        Intent::Move { position }
    }

    /// Creates a jump intent.
    pub fn jump(move_index: usize) -> Self {
        Intent::Jump { move_index }
    }
}
