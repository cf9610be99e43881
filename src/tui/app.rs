//! Application state and logic.

use tracing::debug;

use crate::game::{GameHistory, GameView, Position};

/// Direction of a board-cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Move the cursor one row up.
    Up,
    /// Move the cursor one row down.
    Down,
    /// Move the cursor one column left.
    Left,
    /// Move the cursor one column right.
    Right,
}

/// Main application state: the game session plus presentation-only
/// state (board cursor, status line, quit flag).
pub struct App {
    history: GameHistory,
    cursor: Position,
    status_line: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        let history = GameHistory::new();
        let status_line = history.status().to_string();
        Self {
            history,
            cursor: Position::Center,
            status_line,
            should_quit: false,
        }
    }

    /// Derives the current view of the game.
    pub fn view(&self) -> GameView {
        self.history.current_view()
    }

    /// Index of the currently displayed snapshot.
    pub fn current_index(&self) -> usize {
        self.history.current_index()
    }

    /// The board cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The current status line.
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Requests shutdown.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Starts a new game, discarding the whole history.
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.history = GameHistory::new();
        self.status_line = self.history.status().to_string();
    }

    /// Moves the board cursor, stopping at the edges.
    pub fn move_cursor(&mut self, direction: Direction) {
        let (row, col) = (self.cursor.row(), self.cursor.col());
        let (row, col) = match direction {
            Direction::Up => (row.saturating_sub(1), col),
            Direction::Down => ((row + 1).min(2), col),
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => (row, (col + 1).min(2)),
        };
        if let Some(pos) = Position::from_row_col(row, col) {
            self.cursor = pos;
        }
    }

    /// Places the next mark at the cursor.
    pub fn select_at_cursor(&mut self) {
        self.select(self.cursor);
    }

    /// Places the next mark at the numbered square (0-8), as shown on
    /// the board's empty cells.
    pub fn select_numbered(&mut self, index: usize) {
        if let Some(pos) = Position::from_index(index) {
            self.cursor = pos;
            self.select(pos);
        }
    }

    fn select(&mut self, pos: Position) {
        // Invalid selections are no-ops in the core; report them on the
        // status line instead of mutating anything.
        match self.history.try_select(pos) {
            Ok(()) => self.status_line = self.history.status().to_string(),
            Err(reason) => self.status_line = format!("{reason}. {}", self.history.status()),
        }
    }

    /// Steps one snapshot back in history, if not at the start.
    pub fn history_back(&mut self) {
        let index = self.history.current_index();
        if index > 0 {
            self.jump(index - 1);
        }
    }

    /// Steps one snapshot forward in history, if not at the latest.
    pub fn history_forward(&mut self) {
        let index = self.history.current_index();
        if index + 1 < self.history.snapshots().len() {
            self.jump(index + 1);
        }
    }

    /// Jumps to the game start.
    pub fn jump_to_start(&mut self) {
        self.jump(0);
    }

    /// Jumps to the latest snapshot.
    pub fn jump_to_latest(&mut self) {
        self.jump(self.history.snapshots().len() - 1);
    }

    /// Jumps to a snapshot chosen from the move list.
    pub fn jump(&mut self, index: usize) {
        self.history.jump_to(index);
        self.status_line = self.history.status().to_string();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
