//! Snapshot count invariant: index equals marks on the board.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: the snapshot at index `i` has exactly `i` occupied
/// squares, and the cursor points inside the sequence.
///
/// Index 0 being the all-empty snapshot is the `i = 0` case. This is
/// what makes parity-derived turn order sound.
pub struct SnapshotCountInvariant;

impl Invariant<GameHistory> for SnapshotCountInvariant {
    fn holds(history: &GameHistory) -> bool {
        if history.current_index() >= history.snapshots().len() {
            return false;
        }

        history
            .snapshots()
            .iter()
            .enumerate()
            .all(|(i, board)| board.occupied_count() == i)
    }

    fn description() -> &'static str {
        "Snapshot at index i has exactly i occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, GameHistory, Player, Position, Square};

    #[test]
    fn test_fresh_session_holds() {
        assert!(SnapshotCountInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_played_session_holds() {
        let mut history = GameHistory::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            history.select_cell(pos);
        }
        assert!(SnapshotCountInvariant::holds(&history));
    }

    #[test]
    fn test_nonempty_initial_snapshot_violates() {
        let first = Board::new().with(Position::Center, Square::Occupied(Player::X));
        let history = GameHistory::from_parts(vec![first], 0);

        assert!(!SnapshotCountInvariant::holds(&history));
    }

    #[test]
    fn test_dangling_cursor_violates() {
        let history = GameHistory::from_parts(vec![Board::new()], 1);
        assert!(!SnapshotCountInvariant::holds(&history));
    }
}
