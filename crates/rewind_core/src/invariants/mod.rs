//! First-class invariants for the game history.
//!
//! Invariants are logical properties that must hold for every history a
//! transition can produce. They are asserted after moves in debug builds
//! and enforced whenever a history is restored from its serialized form.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples; every member is checked, so the error lists
/// all violations rather than the first one.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod cursor_in_bounds;
pub mod monotonic_timeline;
pub mod settled_game;

pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use monotonic_timeline::MonotonicTimelineInvariant;
pub use settled_game::SettledGameInvariant;

/// All history invariants as a composable set.
pub type TimelineInvariants = (
    CursorInBoundsInvariant,
    MonotonicTimelineInvariant,
    SettledGameInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameHistory, Position};

    #[test]
    fn test_invariant_set_holds_for_new_history() {
        assert!(TimelineInvariants::check_all(&GameHistory::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let history = GameHistory::new()
            .apply_move(Position::TopLeft)
            .apply_move(Position::Center)
            .apply_move(Position::TopRight)
            .jump_to(1)
            .unwrap()
            .apply_move(Position::BottomLeft);

        assert!(TimelineInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (CursorInBoundsInvariant, SettledGameInvariant);
        assert!(TwoInvariants::check_all(&GameHistory::new()).is_ok());
    }
}
