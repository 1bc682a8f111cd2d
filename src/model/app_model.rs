//! Main application model with state management
//!
//! Fetch completions go through the `apply_*` methods, which enforce the
//! stale-response rule: only the latest search (by sequence number) and the
//! currently selected movie (by id) may write into visible state.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use super::content::{DetailState, MovieDetail, MovieSummary, SearchState};
use super::rating::StarRating;
use super::types::{ActivePane, UiState};
use super::watched::{WatchedEntry, WatchedList, WatchedStore, WatchedSummary};

/// Main application model containing all state
pub struct AppModel {
    pub ui_state: Arc<Mutex<UiState>>,
    search_state: Arc<Mutex<SearchState>>,
    detail_state: Arc<Mutex<DetailState>>,
    selected_id: Arc<Mutex<Option<String>>>,
    watched: Arc<Mutex<WatchedList>>,
    store: WatchedStore,
    search_seq: Arc<Mutex<u64>>,
    should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new(store: WatchedStore) -> Self {
        let watched = store.load();
        tracing::info!(count = watched.len(), "Watched list loaded");
        Self {
            ui_state: Arc::new(Mutex::new(UiState::default())),
            search_state: Arc::new(Mutex::new(SearchState::default())),
            detail_state: Arc::new(Mutex::new(DetailState::default())),
            selected_id: Arc::new(Mutex::new(None)),
            watched: Arc::new(Mutex::new(watched)),
            store,
            search_seq: Arc::new(Mutex::new(0)),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    // ========================================================================
    // UI state
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    pub async fn cycle_pane_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_pane = state.active_pane.next();
        drop(state);
        self.rating_clear_preview().await;
    }

    pub async fn cycle_pane_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_pane = state.active_pane.prev();
        drop(state);
        self.rating_clear_preview().await;
    }

    pub async fn set_active_pane(&self, pane: ActivePane) {
        let mut state = self.ui_state.lock().await;
        state.active_pane = pane;
    }

    pub async fn toggle_results_pane(&self) {
        let mut state = self.ui_state.lock().await;
        state.results_open = !state.results_open;
    }

    pub async fn toggle_side_pane(&self) {
        let mut state = self.ui_state.lock().await;
        state.side_open = !state.side_open;
    }

    pub async fn show_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    // ========================================================================
    // Search query & results
    // ========================================================================

    pub async fn append_to_query(&self, c: char) -> String {
        let mut state = self.ui_state.lock().await;
        state.query.push(c);
        state.query.clone()
    }

    pub async fn backspace_query(&self) -> String {
        let mut state = self.ui_state.lock().await;
        state.query.pop();
        state.query.clone()
    }

    pub async fn clear_query(&self) {
        self.ui_state.lock().await.query.clear();
    }

    pub async fn get_query(&self) -> String {
        self.ui_state.lock().await.query.clone()
    }

    /// Start a new search: bumps the sequence number so any in-flight
    /// response becomes stale, and flips the pane to the loading state.
    pub async fn begin_search(&self) -> u64 {
        let mut seq = self.search_seq.lock().await;
        *seq += 1;
        *self.search_state.lock().await = SearchState::Searching;
        *seq
    }

    /// Reset to idle (empty query). Also bumps the sequence number so an
    /// in-flight response cannot resurrect results for cleared input.
    pub async fn reset_search(&self) {
        let mut seq = self.search_seq.lock().await;
        *seq += 1;
        *self.search_state.lock().await = SearchState::Idle;
    }

    /// Apply a successful search result. Discarded (returning false) when a
    /// newer search has been issued since `seq`.
    pub async fn apply_search_results(&self, seq: u64, movies: Vec<MovieSummary>) -> bool {
        let current = self.search_seq.lock().await;
        if *current != seq {
            tracing::debug!(seq, current = *current, "Discarding stale search response");
            return false;
        }
        *self.search_state.lock().await = SearchState::Results {
            movies,
            selected: 0,
        };
        true
    }

    /// Apply a failed search, same staleness rule as results.
    pub async fn apply_search_error(&self, seq: u64, message: String) -> bool {
        let current = self.search_seq.lock().await;
        if *current != seq {
            tracing::debug!(seq, current = *current, "Discarding stale search error");
            return false;
        }
        *self.search_state.lock().await = SearchState::Error(message);
        true
    }

    pub async fn get_search_state(&self) -> SearchState {
        self.search_state.lock().await.clone()
    }

    pub async fn results_move_up(&self) {
        let mut state = self.search_state.lock().await;
        if let SearchState::Results { selected, .. } = &mut *state {
            if *selected > 0 {
                *selected -= 1;
            }
        }
    }

    pub async fn results_move_down(&self) {
        let mut state = self.search_state.lock().await;
        if let SearchState::Results { movies, selected } = &mut *state {
            if *selected < movies.len().saturating_sub(1) {
                *selected += 1;
            }
        }
    }

    pub async fn get_selected_result(&self) -> Option<MovieSummary> {
        let state = self.search_state.lock().await;
        if let SearchState::Results { movies, selected } = &*state {
            movies.get(*selected).cloned()
        } else {
            None
        }
    }

    // ========================================================================
    // Movie detail
    // ========================================================================

    /// Select a movie and flip the side pane to loading. The search state is
    /// untouched; "back" returns to it exactly as it was.
    pub async fn select_movie(&self, id: &str) {
        *self.selected_id.lock().await = Some(id.to_string());
        *self.detail_state.lock().await = DetailState::Loading;
    }

    /// Clear the selection: the side pane falls back to the watched list.
    pub async fn clear_selection(&self) {
        *self.selected_id.lock().await = None;
        *self.detail_state.lock().await = DetailState::Hidden;
    }

    pub async fn get_selected_id(&self) -> Option<String> {
        self.selected_id.lock().await.clone()
    }

    /// Apply a fetched detail. Discarded when the selection has moved on to
    /// a different id (or been cleared) since the fetch was issued.
    pub async fn apply_detail(&self, id: &str, detail: MovieDetail) -> bool {
        let selected = self.selected_id.lock().await;
        if selected.as_deref() != Some(id) {
            tracing::debug!(id, selected = ?*selected, "Discarding stale detail response");
            return false;
        }
        *self.detail_state.lock().await = DetailState::Shown {
            detail,
            rating: StarRating::default(),
        };
        true
    }

    pub async fn apply_detail_error(&self, id: &str, message: String) -> bool {
        let selected = self.selected_id.lock().await;
        if selected.as_deref() != Some(id) {
            tracing::debug!(id, selected = ?*selected, "Discarding stale detail error");
            return false;
        }
        *self.detail_state.lock().await = DetailState::Error(message);
        true
    }

    pub async fn get_detail_state(&self) -> DetailState {
        self.detail_state.lock().await.clone()
    }

    // ========================================================================
    // Star rating
    // ========================================================================

    pub async fn rating_cursor_left(&self) {
        let mut state = self.detail_state.lock().await;
        if let DetailState::Shown { rating, .. } = &mut *state {
            rating.cursor_left();
        }
    }

    pub async fn rating_cursor_right(&self) {
        let mut state = self.detail_state.lock().await;
        if let DetailState::Shown { rating, .. } = &mut *state {
            rating.cursor_right();
        }
    }

    /// Commit the rating at the cursor; returns the committed value.
    pub async fn rating_commit(&self) -> Option<u8> {
        let mut state = self.detail_state.lock().await;
        if let DetailState::Shown { rating, .. } = &mut *state {
            Some(rating.commit())
        } else {
            None
        }
    }

    pub async fn rating_clear_preview(&self) {
        let mut state = self.detail_state.lock().await;
        if let DetailState::Shown { rating, .. } = &mut *state {
            rating.clear_preview();
        }
    }

    pub async fn rating_is_previewing(&self) -> bool {
        match &*self.detail_state.lock().await {
            DetailState::Shown { rating, .. } => rating.is_previewing(),
            _ => false,
        }
    }

    // ========================================================================
    // Watched list
    // ========================================================================

    pub async fn get_watched(&self) -> WatchedList {
        self.watched.lock().await.clone()
    }

    pub async fn get_watched_summary(&self) -> WatchedSummary {
        self.watched.lock().await.summary()
    }

    pub async fn is_selected_watched(&self) -> bool {
        let selected = self.selected_id.lock().await.clone();
        match selected {
            Some(id) => self.watched.lock().await.contains(&id),
            None => false,
        }
    }

    /// Build a watched entry from the shown detail plus the committed rating,
    /// append it, and persist. The read-modify-write-persist sequence runs
    /// under the lock with no suspension in between. Clears the selection on
    /// success, mirroring "back".
    pub async fn add_watched_from_detail(&self) -> anyhow::Result<bool> {
        let entry = {
            let state = self.detail_state.lock().await;
            match &*state {
                DetailState::Shown { detail, rating } if rating.is_rated() => WatchedEntry {
                    id: detail.id.clone(),
                    title: detail.title.clone(),
                    year: detail.year.clone(),
                    poster_url: detail.poster_url.clone(),
                    imdb_rating: detail.imdb_rating,
                    runtime_minutes: detail.runtime_minutes,
                    user_rating: rating.committed(),
                    added_at: Utc::now(),
                },
                _ => return Ok(false),
            }
        };

        {
            let mut watched = self.watched.lock().await;
            if !watched.push(entry) {
                return Ok(false);
            }
            self.store.save(&watched)?;
        }

        self.clear_selection().await;
        Ok(true)
    }

    /// Remove an entry by id and persist, then clear the selection.
    pub async fn delete_watched(&self, id: &str) -> anyhow::Result<bool> {
        let removed = {
            let mut watched = self.watched.lock().await;
            let removed = watched.remove(id);
            if removed {
                self.store.save(&watched)?;
            }
            removed
        };

        if removed {
            let mut ui_state = self.ui_state.lock().await;
            let len = self.watched.lock().await.len();
            if ui_state.watched_selected >= len && len > 0 {
                ui_state.watched_selected = len - 1;
            } else if len == 0 {
                ui_state.watched_selected = 0;
            }
            drop(ui_state);
            self.clear_selection().await;
        }
        Ok(removed)
    }

    pub async fn watched_move_up(&self) {
        let mut state = self.ui_state.lock().await;
        if state.watched_selected > 0 {
            state.watched_selected -= 1;
        }
    }

    pub async fn watched_move_down(&self) {
        let len = self.watched.lock().await.len();
        let mut state = self.ui_state.lock().await;
        if state.watched_selected < len.saturating_sub(1) {
            state.watched_selected += 1;
        }
    }

    pub async fn get_selected_watched_id(&self) -> Option<String> {
        let selected = self.ui_state.lock().await.watched_selected;
        self.watched.lock().await.get(selected).map(|e| e.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_model(dir: &tempfile::TempDir) -> AppModel {
        AppModel::new(WatchedStore::new(dir.path().join("watched.json")))
    }

    fn matrix_summary() -> MovieSummary {
        MovieSummary {
            id: "tt0133093".to_string(),
            title: "The Matrix".to_string(),
            year: "1999".to_string(),
            poster_url: String::new(),
        }
    }

    fn matrix_detail() -> MovieDetail {
        MovieDetail {
            id: "tt0133093".to_string(),
            title: "The Matrix".to_string(),
            year: "1999".to_string(),
            poster_url: String::new(),
            runtime_minutes: 136,
            imdb_rating: 8.7,
            plot: String::new(),
            released: "31 Mar 1999".to_string(),
            actors: String::new(),
            director: String::new(),
            genre: "Action, Sci-Fi".to_string(),
        }
    }

    #[tokio::test]
    async fn stale_search_response_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let model = test_model(&dir);

        let seq1 = model.begin_search().await;
        let seq2 = model.begin_search().await;

        // Q1 resolves late: must not become visible
        assert!(!model.apply_search_results(seq1, vec![matrix_summary()]).await);
        assert!(matches!(model.get_search_state().await, SearchState::Searching));

        assert!(model.apply_search_results(seq2, vec![matrix_summary()]).await);
        assert_eq!(model.get_search_state().await.result_count(), 1);
    }

    #[tokio::test]
    async fn cleared_query_kills_inflight_response() {
        let dir = tempfile::tempdir().unwrap();
        let model = test_model(&dir);

        let seq = model.begin_search().await;
        model.reset_search().await;

        assert!(!model.apply_search_results(seq, vec![matrix_summary()]).await);
        assert!(matches!(model.get_search_state().await, SearchState::Idle));
    }

    #[tokio::test]
    async fn stale_search_error_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let model = test_model(&dir);

        let seq1 = model.begin_search().await;
        let seq2 = model.begin_search().await;

        assert!(!model.apply_search_error(seq1, "boom".to_string()).await);
        assert!(model.apply_search_error(seq2, "Movie not found!".to_string()).await);
        assert!(matches!(model.get_search_state().await, SearchState::Error(_)));
    }

    #[tokio::test]
    async fn detail_response_for_old_selection_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let model = test_model(&dir);

        model.select_movie("tt0133093").await;
        model.select_movie("tt1375666").await;

        assert!(!model.apply_detail("tt0133093", matrix_detail()).await);
        assert!(matches!(model.get_detail_state().await, DetailState::Loading));
    }

    #[tokio::test]
    async fn back_preserves_search_results() {
        let dir = tempfile::tempdir().unwrap();
        let model = test_model(&dir);

        let seq = model.begin_search().await;
        model.apply_search_results(seq, vec![matrix_summary()]).await;

        model.select_movie("tt0133093").await;
        model.apply_detail("tt0133093", matrix_detail()).await;

        model.clear_selection().await;
        assert!(matches!(model.get_detail_state().await, DetailState::Hidden));
        assert_eq!(model.get_search_state().await.result_count(), 1);
    }

    #[tokio::test]
    async fn add_requires_committed_rating() {
        let dir = tempfile::tempdir().unwrap();
        let model = test_model(&dir);

        model.select_movie("tt0133093").await;
        model.apply_detail("tt0133093", matrix_detail()).await;

        // Preview alone is not a commitment
        model.rating_cursor_right().await;
        assert!(!model.add_watched_from_detail().await.unwrap());
        assert_eq!(model.get_watched().await.len(), 0);
    }

    #[tokio::test]
    async fn rate_and_add_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let model = test_model(&dir);

        let seq = model.begin_search().await;
        model.apply_search_results(seq, vec![matrix_summary()]).await;

        model.select_movie("tt0133093").await;
        model.apply_detail("tt0133093", matrix_detail()).await;

        // Walk the cursor to star index 8 and commit rating 9
        for _ in 0..8 {
            model.rating_cursor_right().await;
        }
        assert_eq!(model.rating_commit().await, Some(9));

        assert!(model.add_watched_from_detail().await.unwrap());

        let watched = model.get_watched().await;
        assert_eq!(watched.len(), 1);
        let entry = watched.get(0).unwrap();
        assert_eq!(entry.user_rating, 9);
        assert_eq!(entry.runtime_minutes, 136);

        // Selection cleared, summary recomputed over the new entry
        assert!(model.get_selected_id().await.is_none());
        let summary = model.get_watched_summary().await;
        assert_eq!(summary.count, 1);
        assert!((summary.avg_user_rating - 9.0).abs() < f64::EPSILON);

        // Persisted immediately: a fresh model over the same file sees it
        let model2 = test_model(&dir);
        assert!(model2.get_watched().await.contains("tt0133093"));
    }

    #[tokio::test]
    async fn delete_clears_selection_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let model = test_model(&dir);

        model.select_movie("tt0133093").await;
        model.apply_detail("tt0133093", matrix_detail()).await;
        model.rating_commit().await;
        model.add_watched_from_detail().await.unwrap();

        model.select_movie("tt0133093").await;
        model.apply_detail("tt0133093", matrix_detail()).await;
        assert!(model.is_selected_watched().await);

        assert!(model.delete_watched("tt0133093").await.unwrap());
        assert!(model.get_selected_id().await.is_none());
        assert!(model.get_watched().await.is_empty());

        let model2 = test_model(&dir);
        assert!(model2.get_watched().await.is_empty());
    }

    #[tokio::test]
    async fn duplicate_add_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let model = test_model(&dir);

        model.select_movie("tt0133093").await;
        model.apply_detail("tt0133093", matrix_detail()).await;
        model.rating_commit().await;
        model.add_watched_from_detail().await.unwrap();

        model.select_movie("tt0133093").await;
        model.apply_detail("tt0133093", matrix_detail()).await;
        model.rating_commit().await;
        assert!(!model.add_watched_from_detail().await.unwrap());
        assert_eq!(model.get_watched().await.len(), 1);
    }
}
