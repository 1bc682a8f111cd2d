//! Fetch orchestration and watched-list mutations

use super::AppController;

impl AppController {
    /// React to an edited query: empty input resets to idle with no network
    /// call; anything else issues a search tagged with a fresh sequence
    /// number so only the latest query's response can win.
    pub async fn on_query_changed(&self, query: String) {
        let model = self.model.lock().await;

        if query.is_empty() {
            model.reset_search().await;
            return;
        }

        let seq = model.begin_search().await;
        drop(model);

        let controller = self.clone();
        tokio::spawn(async move {
            tracing::debug!(query, seq, "Performing search");
            let result = controller.omdb.search(&query).await;
            let model = controller.model.lock().await;
            match result {
                Ok(movies) => {
                    let applied = model.apply_search_results(seq, movies).await;
                    if applied {
                        tracing::info!(query, "Search completed");
                    }
                }
                Err(e) => {
                    tracing::warn!(query, error = %e, "Search failed");
                    model.apply_search_error(seq, e.to_string()).await;
                }
            }
        });
    }

    /// Open the detail view for the currently highlighted search result.
    pub async fn open_selected_movie(&self) {
        let model = self.model.lock().await;
        let Some(movie) = model.get_selected_result().await else {
            return;
        };
        model.select_movie(&movie.id).await;
        drop(model);

        let controller = self.clone();
        tokio::spawn(async move {
            tracing::debug!(id = %movie.id, "Fetching movie detail");
            let result = controller.omdb.detail(&movie.id).await;
            let model = controller.model.lock().await;
            match result {
                Ok(detail) => {
                    model.apply_detail(&movie.id, detail).await;
                }
                Err(e) => {
                    tracing::warn!(id = %movie.id, error = %e, "Detail fetch failed");
                    model.apply_detail_error(&movie.id, e.to_string()).await;
                }
            }
        });
    }

    /// Add the shown movie with its committed rating to the watched list.
    pub async fn add_watched(&self) {
        let model = self.model.lock().await;
        match model.add_watched_from_detail().await {
            Ok(true) => tracing::info!("Added movie to watched list"),
            Ok(false) => {}
            Err(e) => tracing::error!(error = %e, "Failed to persist watched list"),
        }
    }

    /// Remove a movie from the watched list by id.
    pub async fn delete_watched(&self, id: &str) {
        let model = self.model.lock().await;
        match model.delete_watched(id).await {
            Ok(true) => tracing::info!(id, "Removed movie from watched list"),
            Ok(false) => {}
            Err(e) => tracing::error!(error = %e, "Failed to persist watched list"),
        }
    }
}
