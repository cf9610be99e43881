//! Win detection logic.

use tracing::instrument;

use super::super::{Board, Player, Position, Square};

/// Checks if there is a winner on the board.
///
/// Scans the eight winning lines in a fixed order (rows, then columns,
/// then diagonals) and returns the mark of the first complete line, or
/// `None` if no line is complete. A full board with no winner is a draw,
/// which is the caller's conjunction of this and [`super::is_full`].
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    const LINES: [[Position; 3]; 8] = [
        // Rows
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
        [
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
        ],
        [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
        // Columns
        [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
        ],
        [
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter,
        ],
        [
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ],
        // Diagonals
        [Position::TopLeft, Position::Center, Position::BottomRight],
        [Position::TopRight, Position::Center, Position::BottomLeft],
    ];

    for [a, b, c] in LINES {
        if let Square::Occupied(player) = board.get(a) {
            let mark = Square::Occupied(player);
            if board.get(b) == mark && board.get(c) == mark {
                return Some(player);
            }
        }
    }

    None
}
