//! Terminal front end.
//!
//! A thin presentation layer over [`crate::game`]: it renders the view
//! returned by [`crate::game::GameHistory::current_view`] after every
//! state change and translates key presses into the core's operations.
//! The event loop is synchronous; the core has no suspension points and
//! every operation runs to completion before the next event is read.

mod app;
pub mod ui;

pub use app::{App, Direction};

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

/// Runs the TUI until the user quits.
pub fn run() -> Result<()> {
    info!("starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new();
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if app.should_quit() {
            return Ok(());
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_key(&mut app, key);
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('n') => app.restart(),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_at_cursor(),
        KeyCode::Char(c @ '1'..='9') => app.select_numbered(c as usize - '1' as usize),
        KeyCode::Char('[') => app.history_back(),
        KeyCode::Char(']') => app.history_forward(),
        KeyCode::Char('g') => app.jump_to_start(),
        KeyCode::Char('G') => app.jump_to_latest(),
        _ => {}
    }
}
