//! Core type definitions for the application

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivePane {
    Search,
    Results,
    Side,
}

impl ActivePane {
    pub fn next(self) -> Self {
        match self {
            ActivePane::Search => ActivePane::Results,
            ActivePane::Results => ActivePane::Side,
            ActivePane::Side => ActivePane::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActivePane::Search => ActivePane::Side,
            ActivePane::Results => ActivePane::Search,
            ActivePane::Side => ActivePane::Results,
        }
    }
}

/// UI state for the application
#[derive(Clone)]
pub struct UiState {
    pub active_pane: ActivePane,
    pub query: String,
    /// Collapse toggles for the two content panes. Collapsing hides the
    /// content without discarding it.
    pub results_open: bool,
    pub side_open: bool,
    /// Cursor into the watched list when the side pane shows it
    pub watched_selected: usize,
    pub show_help_popup: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_pane: ActivePane::Search,
            query: String::new(),
            results_open: true,
            side_open: true,
            watched_selected: 0,
            show_help_popup: false,
        }
    }
}
