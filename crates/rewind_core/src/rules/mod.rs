//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board). Nothing here
//! looks at the history; the history asks these rules about its
//! current snapshot.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, check_winner, winning_line};
