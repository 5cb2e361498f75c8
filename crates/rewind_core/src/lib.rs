//! Pure tic-tac-toe game logic with a branching move history.
//!
//! The crate has no I/O. A rendering layer reads the displayed board,
//! the player to move and the winner from a [`GameHistory`], and turns
//! user input into [`Intent`]s that produce the next history.
//!
//! # Example
//!
//! ```
//! use rewind_core::{GameHistory, GameStatus, Intent, Player, Position};
//!
//! let history = [0, 3, 1, 4, 2]
//!     .into_iter()
//!     .filter_map(Position::from_index)
//!     .fold(GameHistory::new(), |h, pos| h.apply_move(pos));
//! assert_eq!(history.status(), GameStatus::Won(Player::X));
//!
//! // Going back to the start and playing again discards the old future.
//! let history = history.apply(Intent::jump(0))?.apply(Intent::place(Position::TopLeft))?;
//! assert_eq!(history.len(), 2);
//! # Ok::<(), rewind_core::HistoryError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod history;
mod intent;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use error::{HistoryError, MoveRejection};
pub use history::{GameHistory, GameStatus};
pub use intent::Intent;
pub use position::Position;
pub use rules::check_winner;
pub use types::{Board, Player, Square};
