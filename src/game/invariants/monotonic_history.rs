//! Monotonic history invariant: each step fills exactly one empty square.

use super::super::{GameHistory, Square};
use super::Invariant;

/// Invariant: adjacent snapshots differ in exactly one square, and that
/// square transitions from empty to occupied.
///
/// Marks are never cleared or overwritten within a game, so the history
/// is monotonic: every snapshot contains its predecessor.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameHistory> for MonotonicHistoryInvariant {
    fn holds(history: &GameHistory) -> bool {
        for pair in history.snapshots().windows(2) {
            let diffs: Vec<(Square, Square)> = pair[0]
                .squares()
                .iter()
                .zip(pair[1].squares().iter())
                .filter(|(before, after)| before != after)
                .map(|(before, after)| (*before, *after))
                .collect();

            let [(before, after)] = diffs.as_slice() else {
                return false;
            };
            if *before != Square::Empty || !matches!(after, Square::Occupied(_)) {
                return false;
            }
        }
        true
    }

    fn description() -> &'static str {
        "Adjacent snapshots differ in exactly one square, empty to occupied"
    }
}
