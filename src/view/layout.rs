//! Top bar rendering (logo, search input, result count)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{ActivePane, UiState};

pub fn render_top_bar(frame: &mut Frame, area: Rect, ui_state: &UiState, result_count: usize) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),  // Logo
            Constraint::Min(0),      // Search input
            Constraint::Length(22),  // Result count
        ])
        .split(area);

    let logo = Paragraph::new("🍿 popcorn")
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(logo, chunks[0]);

    let search_focused = ui_state.active_pane == ActivePane::Search;
    let search_style = if search_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let search_text = if ui_state.query.is_empty() {
        "Search movies..."
    } else {
        &ui_state.query
    };

    let search = Paragraph::new(search_text).style(search_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .padding(Padding::horizontal(1))
            .border_style(if search_focused {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            }),
    );
    frame.render_widget(search, chunks[1]);

    let count = Paragraph::new(format!("Found {} results", result_count))
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(count, chunks[2]);
}
