//! Search/detail pane data and state machines

use super::rating::StarRating;

/// A single movie from search results
#[derive(Clone, Debug, PartialEq)]
pub struct MovieSummary {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
}

/// Full movie record fetched for the currently selected id
#[derive(Clone, Debug, PartialEq)]
pub struct MovieDetail {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    pub runtime_minutes: u32,
    pub imdb_rating: f64,
    pub plot: String,
    pub released: String,
    pub actors: String,
    pub director: String,
    pub genre: String,
}

/// State of the search (left) pane.
///
/// `Idle` means nothing has been typed; it is distinct from a search that
/// came back with no matches, which surfaces as `Error`.
#[derive(Clone, Debug, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Searching,
    Results {
        movies: Vec<MovieSummary>,
        selected: usize,
    },
    Error(String),
}

impl SearchState {
    pub fn result_count(&self) -> usize {
        match self {
            SearchState::Results { movies, .. } => movies.len(),
            _ => 0,
        }
    }
}

/// State of the detail (right) pane. `Hidden` means no movie is selected
/// and the pane shows the watched list instead.
#[derive(Clone, Debug, Default)]
pub enum DetailState {
    #[default]
    Hidden,
    Loading,
    Shown {
        detail: MovieDetail,
        rating: StarRating,
    },
    Error(String),
}
