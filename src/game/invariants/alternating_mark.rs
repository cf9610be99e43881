//! Alternating mark invariant: X, O, X, O, ... derived from parity.

use super::super::{Board, GameHistory, Player, Square};
use super::Invariant;

/// Invariant: the mark added between snapshots `k` and `k + 1` belongs
/// to X when `k` is even, O when `k` is odd.
///
/// Turn order is derived from the snapshot index, never stored, so this
/// is the property that keeps "whose turn" consistent with the history.
pub struct AlternatingMarkInvariant;

impl AlternatingMarkInvariant {
    /// The single mark added between two adjacent snapshots, if the
    /// step is well-formed.
    fn added_mark(before: &Board, after: &Board) -> Option<Player> {
        let mut added = None;
        for (b, a) in before.squares().iter().zip(after.squares().iter()) {
            match (b, a) {
                (Square::Empty, Square::Occupied(player)) => {
                    if added.is_some() {
                        return None;
                    }
                    added = Some(*player);
                }
                (b, a) if b != a => return None,
                _ => {}
            }
        }
        added
    }
}

impl Invariant<GameHistory> for AlternatingMarkInvariant {
    fn holds(history: &GameHistory) -> bool {
        let mut expected = Player::X;
        for pair in history.snapshots().windows(2) {
            if Self::added_mark(&pair[0], &pair[1]) != Some(expected) {
                return false;
            }
            expected = expected.opponent();
        }
        true
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, O, ... matching snapshot parity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, GameHistory, Position};

    #[test]
    fn test_fresh_session_holds() {
        assert!(AlternatingMarkInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_played_session_holds() {
        let mut history = GameHistory::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            history.select_cell(pos);
        }
        assert!(AlternatingMarkInvariant::holds(&history));
    }

    #[test]
    fn test_first_mark_by_o_violates() {
        let first = Board::new();
        let second = first.with(Position::Center, Square::Occupied(Player::O));
        let history = GameHistory::from_parts(vec![first, second], 1);

        assert!(!AlternatingMarkInvariant::holds(&history));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let first = Board::new();
        let second = first.with(Position::TopLeft, Square::Occupied(Player::X));
        let third = second.with(Position::Center, Square::Occupied(Player::X));
        let history = GameHistory::from_parts(vec![first, second, third], 2);

        assert!(!AlternatingMarkInvariant::holds(&history));
    }
}
