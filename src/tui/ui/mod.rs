//! Stateless UI rendering.

mod board;
mod moves;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::App;

/// Renders the whole screen from the app's derived view.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title
            Constraint::Min(11),    // Board + move list
            Constraint::Length(3),  // Status
            Constraint::Length(1),  // Key help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(43), Constraint::Length(26)])
        .split(chunks[1]);

    board::render_board(frame, main[0], &view.board, app.cursor());
    moves::render_moves(frame, main[1], &view.moves, app.current_index());

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows/hjkl move · enter/1-9 place · [/] rewind/forward · g/G start/latest · n new · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}
