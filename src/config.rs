//! Runtime configuration for the OMDb client and local storage.
//!
//! The API key is injected into the client at construction rather than read
//! from a hidden static, so tests and alternate deployments can supply their
//! own.

use std::path::PathBuf;

const OMDB_BASE_URL: &str = "https://www.omdbapi.com/";

// Free-tier demo key, overridable via OMDB_API_KEY.
const DEMO_API_KEY: &str = "6a7f8b70";

const WATCHED_FILE: &str = ".popcorn/watched.json";

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub watched_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let api_key =
            std::env::var("OMDB_API_KEY").unwrap_or_else(|_| DEMO_API_KEY.to_string());

        Self {
            api_key,
            base_url: OMDB_BASE_URL.to_string(),
            watched_path: PathBuf::from(WATCHED_FILE),
        }
    }
}
