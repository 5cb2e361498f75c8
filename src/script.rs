//! Headless intent scripts.
//!
//! A script is a list of tokens separated by whitespace or commas. A
//! cell number `0`-`8` is a move intent; `jN` or `@N` is a jump intent
//! to history index `N`.

use derive_more::{Display, Error};
use rewind_core::{GameHistory, HistoryError, Intent, Position};
use tracing::{debug, instrument, warn};

/// A token that is not a valid intent.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid token {:?} at position {}: {}", token, offset, reason)]
pub struct ScriptError {
    /// The offending token.
    pub token: String,
    /// Zero-based index of the token in the script.
    pub offset: usize,
    /// What is wrong with it.
    pub reason: String,
}

/// Parses one token into an intent.
fn parse_token(token: &str, offset: usize) -> Result<Intent, ScriptError> {
    let error = |reason: &str| ScriptError {
        token: token.to_string(),
        offset,
        reason: reason.to_string(),
    };

    if let Some(rest) = token.strip_prefix(['j', 'J', '@']) {
        let move_index = rest
            .parse::<usize>()
            .map_err(|_| error("expected a history index after the jump marker"))?;
        return Ok(Intent::jump(move_index));
    }

    let cell = token
        .parse::<usize>()
        .map_err(|_| error("expected a cell number 0-8 or a jump like j2"))?;
    Position::from_index(cell)
        .map(Intent::place)
        .ok_or_else(|| error("cell number must be between 0 and 8"))
}

/// Parses a whole script.
#[instrument]
pub fn parse_script(script: &str) -> Result<Vec<Intent>, ScriptError> {
    script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(offset, token)| parse_token(token, offset))
        .collect()
}

/// Applies intents in order, starting from a fresh game.
///
/// Ignored moves leave the history as it was, as they do in the UI.
///
/// # Errors
///
/// Stops at the first jump outside the history.
pub fn run_script(intents: &[Intent]) -> Result<GameHistory, HistoryError> {
    run_script_with(intents, |_, _| {})
}

/// Like [`run_script`], calling `observe` with every intermediate state.
#[instrument(skip(intents, observe), fields(count = intents.len()))]
pub fn run_script_with<F>(intents: &[Intent], mut observe: F) -> Result<GameHistory, HistoryError>
where
    F: FnMut(&Intent, &GameHistory),
{
    intents
        .iter()
        .try_fold(GameHistory::new(), |history, intent| {
            debug!(%intent, "Applying scripted intent");
            let next = history.apply(*intent).inspect_err(|e| {
                warn!(%intent, error = %e, "Scripted intent failed");
            })?;
            observe(intent, &next);
            Ok(next)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_tokens() {
        let intents = parse_script("4, 0 j1 @0\n8").unwrap();
        assert_eq!(
            intents,
            vec![
                Intent::place(Position::Center),
                Intent::place(Position::TopLeft),
                Intent::jump(1),
                Intent::jump(0),
                Intent::place(Position::BottomRight),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_out_of_range_cell() {
        let err = parse_script("0 9").unwrap_err();
        assert_eq!(err.token, "9");
        assert_eq!(err.offset, 1);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_script("x").is_err());
        assert!(parse_script("j").is_err());
    }

    #[test]
    fn test_observer_sees_every_step() {
        let intents = parse_script("0 1 j1").unwrap();
        let mut seen = Vec::new();
        let history = run_script_with(&intents, |_, h| seen.push(h.current_move())).unwrap();
        assert_eq!(seen, vec![1, 2, 1]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_empty_script_is_new_game() {
        let intents = parse_script("  ").unwrap();
        assert!(intents.is_empty());
        assert_eq!(run_script(&intents).unwrap(), GameHistory::new());
    }
}
