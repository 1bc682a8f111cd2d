//! Left pane rendering (search results, loading/error/idle states)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, ListItem, Padding, Paragraph},
    Frame,
};

use crate::model::{ActivePane, SearchState, UiState};
use super::utils::{render_scrollable_list, truncate_string};

pub fn render_results_pane(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    search: &SearchState,
) {
    let is_focused = ui_state.active_pane == ActivePane::Results;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Movies (1 to collapse) ")
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    if !ui_state.results_open {
        let collapsed = Paragraph::new("+")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(collapsed, area);
        return;
    }

    match search {
        SearchState::Idle => {
            let hint = Paragraph::new("Type in search to find movies\n\nTab switches panes\n↑/↓ selects, Enter opens")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(hint, area);
        }
        SearchState::Searching => {
            let loading = Paragraph::new("Loading...")
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            frame.render_widget(loading, area);
        }
        SearchState::Error(message) => {
            let error = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .wrap(ratatui::widgets::Wrap { trim: false })
                .block(block);
            frame.render_widget(error, area);
        }
        SearchState::Results { movies, selected } => {
            let content_width = area.width.saturating_sub(4) as usize;
            let title_width = content_width.saturating_sub(9); // " (YYYY)" + margin

            let items: Vec<ListItem> = movies
                .iter()
                .enumerate()
                .map(|(i, movie)| {
                    let style = if i == *selected && is_focused {
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                    } else if i == *selected {
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    let text = format!(
                        "{} ({})",
                        truncate_string(&movie.title, title_width),
                        movie.year
                    );
                    ListItem::new(text).style(style)
                })
                .collect();

            render_scrollable_list(frame, area, items, *selected, block);
        }
    }
}
