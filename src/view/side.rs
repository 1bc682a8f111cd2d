//! Right pane rendering: movie detail (with the star row) when a movie is
//! selected, otherwise the watched summary and list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{
    ActivePane, DetailState, MovieDetail, StarRating, UiState, WatchedList,
};
use super::utils::{render_scrollable_list, truncate_string};

pub fn render_side_pane(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    detail: &DetailState,
    watched: &WatchedList,
) {
    let is_focused = ui_state.active_pane == ActivePane::Side;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let pane_block = |title: &'static str| {
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .padding(Padding::horizontal(1))
            .border_style(border_style)
    };

    if !ui_state.side_open {
        let collapsed = Paragraph::new("+")
            .style(Style::default().fg(Color::DarkGray))
            .block(pane_block(" Watched (2 to collapse) "));
        frame.render_widget(collapsed, area);
        return;
    }

    match detail {
        DetailState::Hidden => {
            render_watched(frame, area, ui_state, watched, is_focused, border_style);
        }
        DetailState::Loading => {
            let loading = Paragraph::new("Loading...")
                .style(Style::default().fg(Color::Yellow))
                .block(pane_block(" Details "));
            frame.render_widget(loading, area);
        }
        DetailState::Error(message) => {
            let error = Paragraph::new(format!("{}\n\nEsc to go back", message))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: false })
                .block(pane_block(" Details "));
            frame.render_widget(error, area);
        }
        DetailState::Shown { detail, rating } => {
            let is_watched = watched.contains(&detail.id);
            render_detail(frame, area, detail, rating, is_watched, is_focused, border_style);
        }
    }
}

fn render_detail(
    frame: &mut Frame,
    area: Rect,
    detail: &MovieDetail,
    rating: &StarRating,
    is_watched: bool,
    is_focused: bool,
    border_style: Style,
) {
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            detail.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{} • {} min", detail.released, detail.runtime_minutes)),
        Line::from(detail.genre.clone()),
        Line::from(format!("⭐ {} IMDb rating", detail.imdb_rating)),
        Line::from(""),
    ];

    if is_watched {
        lines.push(Line::from(Span::styled(
            "This movie is already in your watched list.",
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(Span::styled(
            "D removes it  •  Esc goes back",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(star_row(rating, is_focused));
        let hint = if rating.is_rated() {
            "←/→ preview  Enter rate  A add to list  Esc back"
        } else {
            "←/→ preview  Enter rate  Esc back"
        };
        lines.push(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(detail.plot.clone()));
    lines.push(Line::from(""));
    lines.push(Line::from(format!("Starring {}", detail.actors)));
    lines.push(Line::from(format!("Directed by {}", detail.director)));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Details ")
            .padding(Padding::horizontal(1))
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);
}

/// Star row plus the displayed number: filled stars follow the preview
/// while one is active, otherwise the committed rating. The cursor star is
/// underlined when the pane has focus.
fn star_row(rating: &StarRating, is_focused: bool) -> Line<'static> {
    let displayed = rating.displayed();
    let mut spans: Vec<Span> = Vec::with_capacity(rating.max() as usize + 1);

    for i in 0..rating.max() {
        let symbol = if i < displayed { "★" } else { "☆" };
        let mut style = if i < displayed {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if is_focused && i == rating.cursor() {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(symbol, style));
    }

    let label = if displayed > 0 {
        format!("  {}", displayed)
    } else {
        String::new()
    };
    spans.push(Span::styled(label, Style::default().fg(Color::Yellow)));

    Line::from(spans)
}

fn render_watched(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    watched: &WatchedList,
    is_focused: bool,
    border_style: Style,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Summary
            Constraint::Min(0),    // Watched list
        ])
        .split(area);

    let summary = watched.summary();
    let summary_lines = vec![
        Line::from(Span::styled(
            "Movies you watched",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("#️⃣ {} movies", summary.count)),
        Line::from(format!(
            "⭐ {:.2}   🌟 {:.2}   ⏳ {:.2} min",
            summary.avg_imdb_rating, summary.avg_user_rating, summary.avg_runtime
        )),
    ];
    let summary_widget = Paragraph::new(summary_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Summary ")
            .padding(Padding::horizontal(1))
            .border_style(border_style),
    );
    frame.render_widget(summary_widget, chunks[0]);

    let list_block = Block::default()
        .borders(Borders::ALL)
        .title(" Watched (2 to collapse) ")
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    if watched.is_empty() {
        let empty = Paragraph::new("Rate a movie to add it here")
            .style(Style::default().fg(Color::DarkGray))
            .block(list_block);
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let content_width = chunks[1].width.saturating_sub(4) as usize;
    let title_width = content_width.saturating_sub(26); // trailing stats

    let items: Vec<ListItem> = watched
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == ui_state.watched_selected && is_focused {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if i == ui_state.watched_selected {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let text = format!(
                "{}  ⭐ {}  🌟 {}  ⏳ {} min",
                truncate_string(&entry.title, title_width),
                entry.imdb_rating,
                entry.user_rating,
                entry.runtime_minutes
            );
            ListItem::new(text).style(style)
        })
        .collect();

    render_scrollable_list(frame, chunks[1], items, ui_state.watched_selected, list_block);
}
