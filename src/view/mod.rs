//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (truncation, scrollable lists)
//! - `layout`: Top bar (logo, search input, result count)
//! - `results`: Left pane (search results)
//! - `side`: Right pane (movie detail or watched list)
//! - `overlays`: Help popup

mod utils;
mod layout;
mod results;
mod side;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{DetailState, SearchState, UiState, WatchedList};

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        ui_state: &UiState,
        search: &SearchState,
        detail: &DetailState,
        watched: &WatchedList,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Top bar: logo + search + result count
                Constraint::Min(0),    // Two content panes
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], ui_state, search.result_count());

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40), // Search results
                Constraint::Percentage(60), // Detail or watched list
            ])
            .split(chunks[1]);

        results::render_results_pane(frame, main_chunks[0], ui_state, search);
        side::render_side_pane(frame, main_chunks[1], ui_state, detail, watched);

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
