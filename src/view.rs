//! Presentation model: what the UI shows, derived from the history.
//!
//! Everything here is a pure function of a [`GameHistory`]; renderers
//! only lay the results out.

use rewind_core::{Board, GameHistory, GameStatus, Player, Position, Square};

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub index: usize,
    /// Text shown for the entry.
    pub label: String,
    /// Whether this entry is the displayed snapshot.
    pub is_current: bool,
}

/// Status line for the displayed board.
pub fn status_line(history: &GameHistory) -> String {
    match history.status() {
        GameStatus::Won(winner) => format!("Winner: {}", winner),
        GameStatus::InProgress => format!("Next player: {}", history.to_move()),
    }
}

/// Label of the move list entry at `index`.
pub fn move_label(index: usize) -> String {
    if index == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", index)
    }
}

/// Move list entries, one per snapshot, oldest first.
pub fn move_entries(history: &GameHistory) -> Vec<MoveEntry> {
    (0..history.len())
        .map(|index| MoveEntry {
            index,
            label: move_label(index),
            is_current: index == history.current_move(),
        })
        .collect()
}

/// Text for a single square.
pub fn cell_symbol(square: Square, pos: Position, show_numbers: bool) -> String {
    match square {
        Square::Occupied(Player::X) => "X".to_string(),
        Square::Occupied(Player::O) => "O".to_string(),
        Square::Empty if show_numbers => (pos.to_index() + 1).to_string(),
        Square::Empty => " ".to_string(),
    }
}

/// Plain-text rendering of a board.
pub fn render_board_text(board: &Board, show_numbers: bool) -> String {
    let rows: Vec<String> = (0..3)
        .map(|row| {
            (0..3)
                .filter_map(|col| Position::from_row_col(row, col))
                .map(|pos| format!(" {} ", cell_symbol(board.get(pos), pos, show_numbers)))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}
