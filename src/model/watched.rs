//! Watched list, aggregate summary, and file persistence
//!
//! The list is the source of truth in memory; every mutation rewrites the
//! JSON file wholesale so the persisted form is always consistent with what
//! the user sees.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A movie the user has watched and rated
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WatchedEntry {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    pub imdb_rating: f64,
    pub runtime_minutes: u32,
    /// 1-10, committed through the star widget
    pub user_rating: u8,
    pub added_at: DateTime<Utc>,
}

/// Ordered watched collection; insertion order preserved, ids unique.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WatchedList {
    entries: Vec<WatchedEntry>,
}

impl WatchedList {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WatchedEntry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&WatchedEntry> {
        self.entries.get(index)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Append an entry. Rejects duplicates by id and reports whether the
    /// entry was actually added.
    pub fn push(&mut self, entry: WatchedEntry) -> bool {
        if self.contains(&entry.id) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove the entry with the given id, reporting whether it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn summary(&self) -> WatchedSummary {
        WatchedSummary {
            count: self.entries.len(),
            avg_imdb_rating: mean(self.entries.iter().map(|e| e.imdb_rating)),
            avg_user_rating: mean(self.entries.iter().map(|e| e.user_rating as f64)),
            avg_runtime: mean(self.entries.iter().map(|e| e.runtime_minutes as f64)),
        }
    }
}

/// Aggregate numbers shown above the watched list. Averages over an empty
/// list are defined as 0.0 so they render as "0.00".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WatchedSummary {
    pub count: usize,
    pub avg_imdb_rating: f64,
    pub avg_user_rating: f64,
    pub avg_runtime: f64,
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// File-backed storage for the watched list
#[derive(Clone)]
pub struct WatchedStore {
    path: PathBuf,
}

impl WatchedStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the persisted list. A missing or unparsable file is treated as
    /// an empty list; the user never sees an error for it.
    pub fn load(&self) -> WatchedList {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return WatchedList::default(),
        };
        match serde_json::from_str(&content) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Watched file unparsable, starting empty");
                WatchedList::default()
            }
        }
    }

    /// Overwrite the persisted list with the current in-memory state.
    pub fn save(&self, list: &WatchedList) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let content = serde_json::to_string(list)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, imdb: f64, user: u8, runtime: u32) -> WatchedEntry {
        WatchedEntry {
            id: id.to_string(),
            title: format!("Movie {id}"),
            year: "1999".to_string(),
            poster_url: String::new(),
            imdb_rating: imdb,
            runtime_minutes: runtime,
            user_rating: user,
            added_at: Utc::now(),
        }
    }

    #[test]
    fn push_rejects_duplicate_ids() {
        let mut list = WatchedList::default();
        assert!(list.push(entry("tt0133093", 8.7, 9, 136)));
        assert!(!list.push(entry("tt0133093", 8.7, 5, 136)));
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().user_rating, 9);
    }

    #[test]
    fn remove_reports_presence() {
        let mut list = WatchedList::default();
        list.push(entry("a", 7.0, 7, 100));
        assert!(list.remove("a"));
        assert!(!list.remove("a"));
        assert!(list.is_empty());
    }

    #[test]
    fn summary_averages() {
        let mut list = WatchedList::default();
        list.push(entry("a", 8.0, 10, 148));
        list.push(entry("b", 8.5, 9, 116));
        let summary = list.summary();
        assert_eq!(summary.count, 2);
        assert!((summary.avg_imdb_rating - 8.25).abs() < f64::EPSILON);
        assert!((summary.avg_user_rating - 9.5).abs() < f64::EPSILON);
        assert!((summary.avg_runtime - 132.0).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_is_idempotent() {
        let mut list = WatchedList::default();
        list.push(entry("a", 8.0, 10, 148));
        assert_eq!(list.summary(), list.summary());
    }

    #[test]
    fn empty_summary_is_zero() {
        let summary = WatchedList::default().summary();
        assert_eq!(summary.count, 0);
        assert_eq!(format!("{:.2}", summary.avg_imdb_rating), "0.00");
        assert_eq!(format!("{:.2}", summary.avg_user_rating), "0.00");
        assert_eq!(format!("{:.2}", summary.avg_runtime), "0.00");
    }

    #[test]
    fn store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = WatchedStore::new(dir.path().join("watched.json"));

        let mut list = store.load();
        assert!(list.is_empty());

        list.push(entry("tt0133093", 8.7, 9, 136));
        store.save(&list).unwrap();

        let reloaded = store.load();
        assert_eq!(reloaded.len(), 1);
        assert!(reloaded.contains("tt0133093"));

        list.remove("tt0133093");
        store.save(&list).unwrap();
        assert!(!store.load().contains("tt0133093"));
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("watched.json");
        fs::write(&path, "not json {").unwrap();
        let store = WatchedStore::new(path);
        assert!(store.load().is_empty());
    }
}
