//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the
//! application. It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (active pane, UI state)
//! - `content`: Search/detail pane data and state machines
//! - `rating`: Star rating widget state
//! - `watched`: Watched list, summary, and file persistence
//! - `omdb`: OMDb API client
//! - `app_model`: Main application model with state management methods

mod types;
mod content;
mod rating;
mod watched;
mod omdb;
mod app_model;

// Re-export all public types for convenient access
pub use types::{ActivePane, UiState};

pub use content::{DetailState, MovieDetail, MovieSummary, SearchState};

pub use rating::StarRating;

pub use watched::{WatchedEntry, WatchedList, WatchedStore, WatchedSummary};

pub use omdb::{FetchError, OmdbClient};

pub use app_model::AppModel;
