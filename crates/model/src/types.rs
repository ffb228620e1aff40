//! Core domain types for a movie lookup.
//!
//! Upstream-facing records (`MetadataRecord`, `RatingsPayload`, `VideoHit`)
//! describe what the metadata, ratings and video-search services hand back.
//! `MovieResult` is the merged record returned to callers; its serde names
//! are the JSON contract of the HTTP API.

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Sentinel used when a rating is not available
pub const NOT_AVAILABLE: &str = "N/A";

/// Named-ratings source whose value is surfaced as `rottenTomatoes`
pub const ROTTEN_TOMATOES_SOURCE: &str = "Rotten Tomatoes";

/// Base URL for poster images (fixed width rendition)
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Base URL for backdrop images (original size)
pub const BACKDROP_BASE_URL: &str = "https://image.tmdb.org/t/p/original";

/// Watch-page prefix a trailer video id is appended to
pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Qualifier appended to the canonical title when searching for a trailer
pub const TRAILER_QUERY_SUFFIX: &str = " official trailer";

// =============================================================================
// Type Aliases
// =============================================================================

/// Internal identifier assigned by the metadata service
pub type MovieId = u64;

// =============================================================================
// Metadata
// =============================================================================

/// One candidate returned by a metadata search.
///
/// Only the first (highest-ranked) record of a search is ever used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

impl MetadataRecord {
    /// Full poster URL, if the record carries a poster path fragment.
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| format!("{POSTER_BASE_URL}{path}"))
    }

    /// Full backdrop URL, if the record carries a backdrop path fragment.
    pub fn backdrop_url(&self) -> Option<String> {
        self.backdrop_path
            .as_deref()
            .map(|path| format!("{BACKDROP_BASE_URL}{path}"))
    }

    /// Query used to look up this movie's trailer.
    pub fn trailer_query(&self) -> String {
        format!("{}{}", self.title, TRAILER_QUERY_SUFFIX)
    }
}

// =============================================================================
// Ratings
// =============================================================================

/// A `{source, value}` pair from the ratings service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRating {
    pub source: String,
    pub value: String,
}

/// Ratings data for a title the ratings service knows about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingsPayload {
    pub imdb_rating: Option<String>,
    pub ratings: Vec<NamedRating>,
    /// Aggregate score, possibly already the upstream's own "N/A"
    pub metascore: Option<String>,
}

/// Outcome of a ratings lookup whose transport call succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatingsLookup {
    Found(RatingsPayload),
    /// The service flagged the id as unknown; carries its reason, if any
    NotFound(Option<String>),
}

/// Ratings summary embedded in a `MovieResult`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingsRecord {
    pub imdb: String,
    pub rotten_tomatoes: String,
    pub metacritic: String,
}

impl RatingsRecord {
    /// Summarise a ratings payload.
    ///
    /// ## Algorithm
    /// 1. `imdb` is the numeric rating
    /// 2. `rotten_tomatoes` is the value of the first named rating whose source
    ///    equals `ROTTEN_TOMATOES_SOURCE` exactly, else `NOT_AVAILABLE`
    /// 3. `metacritic` is the aggregate score, passed through verbatim
    ///
    /// Fields the service left out entirely become `NOT_AVAILABLE`.
    pub fn from_payload(payload: RatingsPayload) -> Self {
        let rotten_tomatoes = payload
            .ratings
            .into_iter()
            .find(|rating| rating.source == ROTTEN_TOMATOES_SOURCE)
            .map(|rating| rating.value)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Self {
            imdb: payload
                .imdb_rating
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            rotten_tomatoes,
            metacritic: payload
                .metascore
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}

// =============================================================================
// Video search
// =============================================================================

/// One item from a video search.
///
/// `video_id` is optional because the service can return non-video items
/// (channels, playlists) that lack it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoHit {
    pub video_id: Option<String>,
}

impl VideoHit {
    /// Canonical watch-page URL for this video.
    pub fn watch_url(&self) -> Option<String> {
        self.video_id
            .as_deref()
            .map(|id| format!("{WATCH_URL_PREFIX}{id}"))
    }
}

// =============================================================================
// Final result
// =============================================================================

/// Unified movie record returned by a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieResult {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "lancamento")]
    pub release_date: Option<String>,
    #[serde(rename = "sinopse")]
    pub overview: Option<String>,
    pub poster: Option<String>,
    pub backdrop: Option<String>,
    #[serde(rename = "notasOMDb")]
    pub ratings: Option<RatingsRecord>,
    pub trailer: Option<String>,
}

impl MovieResult {
    /// Merge the canonical metadata match with the optional lookups.
    pub fn assemble(
        movie: MetadataRecord,
        ratings: Option<RatingsRecord>,
        trailer: Option<String>,
    ) -> Self {
        let poster = movie.poster_url();
        let backdrop = movie.backdrop_url();
        Self {
            title: movie.title,
            release_date: movie.release_date,
            overview: movie.overview,
            poster,
            backdrop,
            ratings,
            trailer,
        }
    }
}
