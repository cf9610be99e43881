//! Rewindable tic-tac-toe.
//!
//! Two players alternate placing marks on a 3x3 board while every board
//! state reached is kept as an immutable snapshot, so the session can be
//! rewound to any earlier point and replayed from there (discarding the
//! abandoned future, standard undo-with-branching-discarded semantics).
//!
//! # Architecture
//!
//! - [`game`] - the pure core: [`game::GameHistory`] (snapshot sequence +
//!   cursor), win/draw rules, and checkable invariants
//! - [`tui`] - a ratatui front end consuming [`game::GameHistory::current_view`]
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::game::{GameHistory, GameStatus, Player, Position};
//!
//! let mut game = GameHistory::new();
//! game.select_cell(Position::TopLeft);   // X
//! game.select_cell(Position::Center);    // O
//! game.select_cell(Position::TopCenter); // X
//!
//! // Rewind to move 1 and play a different line; moves 2-3 are discarded.
//! game.jump_to(1);
//! game.select_cell(Position::BottomRight); // O again, parity is derived
//!
//! assert_eq!(game.snapshots().len(), 3);
//! assert_eq!(game.current_view().status, GameStatus::InProgress(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod game;
pub mod tui;
