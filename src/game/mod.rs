//! The game core: snapshot history store, rules, and invariants.
//!
//! Everything here is pure, synchronous state transition: no I/O, no
//! rendering, no observers. A presentation layer drives it through
//! [`GameHistory::select_cell`], [`GameHistory::jump_to`], and
//! [`GameHistory::current_view`].

pub mod history;
pub mod invariants;
pub mod position;
pub mod rules;
pub mod types;

pub use history::{GameHistory, GameView, MoveEntry, SelectError};
pub use position::Position;
pub use rules::{check_winner, is_full};
pub use types::{Board, GameStatus, Player, Square};
