//! Snapshot history: the owning state of a game session.
//!
//! A session is an ordered sequence of immutable board snapshots plus a
//! cursor into that sequence. Placing a mark never mutates a snapshot;
//! it derives a new one and appends it, discarding any snapshots past
//! the cursor first. Everything else (whose turn it is, whether the
//! game is over) is derived on read, so it cannot drift out of sync
//! with the sequence.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use super::Position;

/// Reason a selection was rejected.
///
/// The public [`GameHistory::select_cell`] swallows this (invalid clicks
/// are defined as silent no-ops); it surfaces through
/// [`GameHistory::try_select`] for callers that want to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SelectError {
    /// The square at the position is already occupied.
    #[display("{_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),

    /// The current snapshot already has a winner.
    #[display("Game is already over")]
    GameOver,
}

/// One entry in the move-selection list of a [`GameView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Human-readable label ("Go to game start", "Go to move #3", ...).
    pub label: String,
    /// Snapshot index this entry jumps to.
    pub index: usize,
}

/// Projection of the current session state for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The snapshot at the current index.
    pub board: Board,
    /// One entry per snapshot in history, in order.
    pub moves: Vec<MoveEntry>,
    /// Derived game status.
    pub status: GameStatus,
}

/// The game history store: all snapshots reached this session plus the
/// currently selected one.
///
/// Invariants, maintained by construction and checkable via
/// [`super::invariants`]:
/// - index 0 is always the all-empty snapshot;
/// - adjacent snapshots differ in exactly one square, which goes from
///   empty to occupied;
/// - the mark placed between snapshots `k` and `k + 1` is `X` when `k`
///   is even, `O` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    snapshots: Vec<Board>,
    current: usize,
}

impl GameHistory {
    /// Creates a fresh session: one empty snapshot, cursor on it.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// All snapshots reached so far, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Index of the currently selected snapshot.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The currently selected snapshot.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// The player who moves next, derived from the cursor's parity.
    ///
    /// Snapshot index equals the number of marks on the board, so an
    /// even index means X (who goes first) is to move.
    pub fn to_move(&self) -> Player {
        if self.current % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Derived status of the currently selected snapshot.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(winner) = rules::check_winner(board) {
            GameStatus::Won(winner)
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.to_move())
        }
    }

    /// Attempts to place the next player's mark at `pos`.
    ///
    /// On success the history past the cursor is discarded, the derived
    /// snapshot is appended, and the cursor moves to it.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::GameOver`] if the current snapshot already
    /// has a winner, or [`SelectError::SquareOccupied`] if `pos` is taken.
    #[instrument(skip(self), fields(index = self.current))]
    pub fn try_select(&mut self, pos: Position) -> Result<(), SelectError> {
        let board = self.current_board();
        if rules::check_winner(board).is_some() {
            return Err(SelectError::GameOver);
        }
        if !board.is_empty(pos) {
            return Err(SelectError::SquareOccupied(pos));
        }

        let next = board.with(pos, Square::Occupied(self.to_move()));

        // Rewind-then-play discards the abandoned future.
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current = self.snapshots.len() - 1;

        debug!(
            index = self.current,
            board = %self.current_board().display(),
            "snapshot appended"
        );
        Ok(())
    }

    /// Places the next player's mark at `pos`, ignoring invalid selections.
    ///
    /// Selecting an occupied square or selecting after the game is
    /// decided fails closed: the history and cursor are left untouched.
    pub fn select_cell(&mut self, pos: Position) {
        if let Err(reason) = self.try_select(pos) {
            debug!(%reason, position = %pos, "selection ignored");
        }
    }

    /// Moves the cursor to snapshot `index` without altering history.
    ///
    /// Jumping is always legal, including onto decided or mid-game
    /// snapshots. An out-of-range index cannot arise from entries handed
    /// out by [`Self::current_view`] and is a programming error.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.snapshots().len()`.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) {
        assert!(
            index < self.snapshots.len(),
            "jump target {index} out of range (history length {})",
            self.snapshots.len()
        );
        self.current = index;
    }

    /// Derives the presentation view of the current state.
    pub fn current_view(&self) -> GameView {
        let moves = self
            .snapshots
            .iter()
            .enumerate()
            .map(|(index, _)| MoveEntry {
                label: if index == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{index}")
                },
                index,
            })
            .collect();

        GameView {
            board: *self.current_board(),
            moves,
            status: self.status(),
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl GameHistory {
    /// Builds a history from raw parts, bypassing the transition rules.
    /// Used by invariant tests to construct corrupted sequences.
    pub(crate) fn from_parts(snapshots: Vec<Board>, current: usize) -> Self {
        Self { snapshots, current }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_single_empty_snapshot() {
        let history = GameHistory::new();
        assert_eq!(history.snapshots().len(), 1);
        assert_eq!(history.current_index(), 0);
        assert_eq!(history.current_board().occupied_count(), 0);
        assert_eq!(history.to_move(), Player::X);
    }

    #[test]
    fn test_select_appends_and_advances() {
        let mut history = GameHistory::new();
        history.select_cell(Position::Center);

        assert_eq!(history.snapshots().len(), 2);
        assert_eq!(history.current_index(), 1);
        assert_eq!(
            history.current_board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(history.to_move(), Player::O);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut history = GameHistory::new();
        history.select_cell(Position::Center);

        let before = history.clone();
        assert_eq!(
            history.try_select(Position::Center),
            Err(SelectError::SquareOccupied(Position::Center))
        );
        assert_eq!(history, before);
    }

    #[test]
    fn test_jump_does_not_touch_history() {
        let mut history = GameHistory::new();
        history.select_cell(Position::TopLeft);
        history.select_cell(Position::Center);

        history.jump_to(0);
        assert_eq!(history.current_index(), 0);
        assert_eq!(history.snapshots().len(), 3);
        assert_eq!(history.to_move(), Player::X);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_jump_out_of_range_panics() {
        let mut history = GameHistory::new();
        history.jump_to(1);
    }

    #[test]
    fn test_current_board_renders_after_move() {
        let mut history = GameHistory::new();
        history.select_cell(Position::Center);

        assert_eq!(
            history.current_board().display(),
            ".|.|.\n-+-+-\n.|X|.\n-+-+-\n.|.|."
        );
    }

    #[test]
    fn test_view_labels() {
        let mut history = GameHistory::new();
        history.select_cell(Position::TopLeft);
        history.select_cell(Position::Center);

        let view = history.current_view();
        let labels: Vec<&str> = view.moves.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Go to game start", "Go to move #1", "Go to move #2"]
        );
        assert_eq!(view.moves[2].index, 2);
        assert_eq!(view.status, GameStatus::InProgress(Player::X));
    }
}
