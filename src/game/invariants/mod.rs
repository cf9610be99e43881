//! First-class invariants for the snapshot history.
//!
//! Invariants are logical properties that must hold for every history a
//! session can reach. They are testable independently and serve as
//! documentation of system guarantees.

pub mod alternating_mark;
pub mod monotonic_history;
pub mod snapshot_count;

pub use alternating_mark::AlternatingMarkInvariant;
pub use monotonic_history::MonotonicHistoryInvariant;
pub use snapshot_count::SnapshotCountInvariant;

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
/// Implementations are provided for tuples, enabling composition of
/// multiple invariants into a single verification step.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or `Err` with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
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

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    MonotonicHistoryInvariant,
    AlternatingMarkInvariant,
    SnapshotCountInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameHistory, Position};

    #[test]
    fn test_invariant_set_holds_for_fresh_session() {
        let history = GameHistory::new();
        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut history = GameHistory::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            history.select_cell(pos);
        }
        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_rewind_then_play() {
        let mut history = GameHistory::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            history.select_cell(pos);
        }
        history.jump_to(1);
        history.select_cell(Position::BottomLeft);

        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let history = GameHistory::new();

        type TwoInvariants = (MonotonicHistoryInvariant, SnapshotCountInvariant);
        assert!(TwoInvariants::check_all(&history).is_ok());
    }
}
