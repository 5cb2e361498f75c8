//! Tests for headless intent scripts.

use rewind_tictactoe::{
    GameStatus, HistoryError, Player, Position, Square, parse_script, run_script,
};

#[test]
fn test_top_row_script() {
    let intents = parse_script("0 3 1 4 2").unwrap();
    let history = run_script(&intents).unwrap();

    assert_eq!(history.status(), GameStatus::Won(Player::X));
    assert_eq!(history.len(), 6);
    assert_eq!(history.current_move(), 5);
}

#[test]
fn test_restart_from_start_script() {
    let intents = parse_script("0 3 1 4 2 j0 0").unwrap();
    let history = run_script(&intents).unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history.current_move(), 1);
    assert_eq!(
        history.current_board().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );
    assert_eq!(history.current_board().occupied_count(), 1);
}

#[test]
fn test_moves_after_win_are_ignored() {
    let won = run_script(&parse_script("0 3 1 4 2").unwrap()).unwrap();
    let more = run_script(&parse_script("0 3 1 4 2 8 7").unwrap()).unwrap();
    assert_eq!(more, won);
}

#[test]
fn test_jump_past_end_stops_script() {
    let err = run_script(&parse_script("4 @5 0").unwrap()).unwrap_err();
    assert_eq!(err, HistoryError::InvalidIndex { index: 5, len: 2 });
}

#[test]
fn test_bad_token_is_reported() {
    let err = parse_script("0,3,x").unwrap_err();
    assert_eq!(err.offset, 2);
    assert!(err.to_string().contains("\"x\""));
}
