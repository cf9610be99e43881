//! Move-list rendering: one jump target per snapshot in history.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::game::MoveEntry;

/// Renders the move list with the current snapshot highlighted.
pub fn render_moves(frame: &mut Frame, area: Rect, moves: &[MoveEntry], current: usize) {
    let items: Vec<ListItem> = moves
        .iter()
        .map(|entry| ListItem::new(entry.label.as_str()))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Moves"))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    let mut state = ListState::default();
    state.select(Some(current));
    frame.render_stateful_widget(list, area, &mut state);
}
