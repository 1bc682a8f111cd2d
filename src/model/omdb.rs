//! OMDb API client
//!
//! Two GET endpoints: title search (`s=` parameter) and full detail by imdb
//! id (`i=` parameter). OMDb signals "nothing found" in-band with
//! `"Response": "False"` and an `Error` message, which is kept distinct
//! from transport failures.

use std::fmt;

use reqwest::Client;
use serde::Deserialize;

use crate::config::Config;

use super::content::{MovieDetail, MovieSummary};

/// Why a fetch did not produce data
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure or non-success status
    Network(String),
    /// OMDb's in-band "nothing found" response
    NoResults(String),
    /// Response body was not the expected JSON
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Something went wrong fetching the data: {msg}"),
            FetchError::NoResults(msg) => write!(f, "{msg}"),
            FetchError::Parse(msg) => write!(f, "Unexpected response from OMDb: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Parse(e.to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

/// OMDb API client. The key is injected at construction.
#[derive(Clone)]
pub struct OmdbClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl OmdbClient {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            client: Client::new(),
        }
    }

    /// Search movies by title substring. Callers short-circuit empty
    /// queries; an empty query never reaches the network.
    pub async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, FetchError> {
        tracing::debug!(query, "API: search");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("s", query), ("apikey", &self.api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Network(format!("status {status}")));
        }

        let body = response.json::<SearchResponse>().await?;
        summaries_from_response(body)
    }

    /// Fetch the full record for one imdb id.
    pub async fn detail(&self, id: &str) -> Result<MovieDetail, FetchError> {
        tracing::debug!(id, "API: detail");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("i", id), ("apikey", &self.api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Network(format!("status {status}")));
        }

        let body = response.json::<DetailResponse>().await?;
        detail_from_response(body)
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search", default)]
    search: Vec<SearchItem>,
    #[serde(rename = "Error", default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster", default)]
    poster: String,
}

#[derive(Debug, Deserialize)]
struct DetailResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error", default)]
    error: Option<String>,
    #[serde(rename = "imdbID", default)]
    imdb_id: String,
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster", default)]
    poster: String,
    #[serde(rename = "Runtime", default)]
    runtime: String,
    #[serde(rename = "imdbRating", default)]
    imdb_rating: String,
    #[serde(rename = "Plot", default)]
    plot: String,
    #[serde(rename = "Released", default)]
    released: String,
    #[serde(rename = "Actors", default)]
    actors: String,
    #[serde(rename = "Director", default)]
    director: String,
    #[serde(rename = "Genre", default)]
    genre: String,
}

fn summaries_from_response(body: SearchResponse) -> Result<Vec<MovieSummary>, FetchError> {
    if body.response == "False" {
        let msg = body.error.unwrap_or_else(|| "No such movies".to_string());
        return Err(FetchError::NoResults(msg));
    }

    Ok(body
        .search
        .into_iter()
        .map(|item| MovieSummary {
            id: item.imdb_id,
            title: item.title,
            year: item.year,
            poster_url: item.poster,
        })
        .collect())
}

fn detail_from_response(body: DetailResponse) -> Result<MovieDetail, FetchError> {
    if body.response == "False" {
        // Bad or unknown id; there is no "no results" list for details
        let msg = body.error.unwrap_or_else(|| "Movie not found".to_string());
        return Err(FetchError::Network(msg));
    }

    Ok(MovieDetail {
        id: body.imdb_id,
        title: body.title,
        year: body.year,
        poster_url: body.poster,
        runtime_minutes: parse_runtime_minutes(&body.runtime),
        imdb_rating: parse_rating(&body.imdb_rating),
        plot: body.plot,
        released: body.released,
        actors: body.actors,
        director: body.director,
        genre: body.genre,
    })
}

/// Runtime arrives as e.g. "136 min"; "N/A" and garbage become 0.
fn parse_runtime_minutes(runtime: &str) -> u32 {
    runtime
        .split_whitespace()
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

/// imdbRating arrives as e.g. "8.7"; "N/A" becomes 0.0.
fn parse_rating(rating: &str) -> f64 {
    rating.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_results() {
        let body: SearchResponse = serde_json::from_str(
            r#"{
                "Search": [
                    {
                        "Title": "The Matrix",
                        "Year": "1999",
                        "imdbID": "tt0133093",
                        "Type": "movie",
                        "Poster": "https://example.com/matrix.jpg"
                    }
                ],
                "totalResults": "1",
                "Response": "True"
            }"#,
        )
        .unwrap();

        let movies = summaries_from_response(body).unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].id, "tt0133093");
        assert_eq!(movies[0].title, "The Matrix");
        assert_eq!(movies[0].year, "1999");
    }

    #[test]
    fn negative_marker_maps_to_no_results() {
        let body: SearchResponse =
            serde_json::from_str(r#"{"Response":"False","Error":"Movie not found!"}"#).unwrap();
        let err = summaries_from_response(body).unwrap_err();
        assert_eq!(err, FetchError::NoResults("Movie not found!".to_string()));
    }

    #[test]
    fn parses_detail() {
        let body: DetailResponse = serde_json::from_str(
            r#"{
                "Title": "The Matrix",
                "Year": "1999",
                "Released": "31 Mar 1999",
                "Runtime": "136 min",
                "Genre": "Action, Sci-Fi",
                "Director": "Lana Wachowski, Lilly Wachowski",
                "Actors": "Keanu Reeves, Laurence Fishburne, Carrie-Anne Moss",
                "Plot": "A computer hacker learns about the true nature of reality.",
                "Poster": "https://example.com/matrix.jpg",
                "imdbRating": "8.7",
                "imdbID": "tt0133093",
                "Response": "True"
            }"#,
        )
        .unwrap();

        let detail = detail_from_response(body).unwrap();
        assert_eq!(detail.runtime_minutes, 136);
        assert!((detail.imdb_rating - 8.7).abs() < f64::EPSILON);
        assert_eq!(detail.director, "Lana Wachowski, Lilly Wachowski");
    }

    #[test]
    fn unknown_id_maps_to_network_error() {
        let body: DetailResponse =
            serde_json::from_str(r#"{"Response":"False","Error":"Incorrect IMDb ID."}"#).unwrap();
        let err = detail_from_response(body).unwrap_err();
        assert_eq!(err, FetchError::Network("Incorrect IMDb ID.".to_string()));
    }

    #[test]
    fn not_available_fields_become_zero() {
        assert_eq!(parse_runtime_minutes("N/A"), 0);
        assert_eq!(parse_runtime_minutes(""), 0);
        assert_eq!(parse_runtime_minutes("90 min"), 90);
        assert_eq!(parse_rating("N/A"), 0.0);
        assert_eq!(parse_rating("7.3"), 7.3);
    }
}
