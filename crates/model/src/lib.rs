//! # Model Crate
//!
//! Domain types and error types for movie lookups.
//!
//! ## Main Components
//!
//! - **types**: upstream records (metadata, ratings, videos) and the merged `MovieResult`
//! - **error**: `ProviderError` for single upstream calls, `AggregationError` for a whole lookup
//!
//! ## Example Usage
//!
//! ```ignore
//! use model::{MetadataRecord, MovieResult, RatingsPayload, RatingsRecord};
//!
//! let ratings = RatingsRecord::from_payload(payload);
//! let result = MovieResult::assemble(movie, Some(ratings), None);
//! println!("{}", serde_json::to_string(&result)?);
//! ```

// Public modules
pub mod error;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{AggregationError, ProviderError, ProviderResult, Result, Service};
pub use types::{
    // Type aliases
    MovieId,
    // Core types
    MetadataRecord,
    MovieResult,
    NamedRating,
    RatingsLookup,
    RatingsPayload,
    RatingsRecord,
    VideoHit,
    // Constants
    BACKDROP_BASE_URL,
    NOT_AVAILABLE,
    POSTER_BASE_URL,
    ROTTEN_TOMATOES_SOURCE,
    TRAILER_QUERY_SUFFIX,
    WATCH_URL_PREFIX,
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn inception() -> MetadataRecord {
        MetadataRecord {
            id: 27205,
            title: "Inception".to_string(),
            release_date: Some("2010-07-15".to_string()),
            overview: Some("Um filme sobre sonhos".to_string()),
            poster_path: Some("/poster.jpg".to_string()),
            backdrop_path: None,
        }
    }

    #[test]
    fn test_ratings_record_picks_named_source() {
        let payload = RatingsPayload {
            imdb_rating: Some("8.8".to_string()),
            ratings: vec![
                NamedRating {
                    source: "Internet Movie Database".to_string(),
                    value: "8.8/10".to_string(),
                },
                NamedRating {
                    source: "Rotten Tomatoes".to_string(),
                    value: "87%".to_string(),
                },
            ],
            metascore: Some("74".to_string()),
        };

        let record = RatingsRecord::from_payload(payload);

        assert_eq!(record.imdb, "8.8");
        assert_eq!(record.rotten_tomatoes, "87%");
        assert_eq!(record.metacritic, "74");
    }

    #[test]
    fn test_ratings_record_missing_source_is_not_available() {
        let payload = RatingsPayload {
            imdb_rating: Some("7.0".to_string()),
            ratings: vec![NamedRating {
                // Match is exact, not case-insensitive
                source: "rotten tomatoes".to_string(),
                value: "50%".to_string(),
            }],
            metascore: Some("N/A".to_string()),
        };

        let record = RatingsRecord::from_payload(payload);

        assert_eq!(record.rotten_tomatoes, NOT_AVAILABLE);
        assert_eq!(record.metacritic, "N/A");
    }

    #[test]
    fn test_ratings_record_empty_payload() {
        let record = RatingsRecord::from_payload(RatingsPayload::default());

        assert_eq!(record.imdb, NOT_AVAILABLE);
        assert_eq!(record.rotten_tomatoes, NOT_AVAILABLE);
        assert_eq!(record.metacritic, NOT_AVAILABLE);
    }

    #[test]
    fn test_image_urls() {
        let movie = inception();
        assert_eq!(
            movie.poster_url().as_deref(),
            Some("https://image.tmdb.org/t/p/w500/poster.jpg")
        );
        assert_eq!(movie.backdrop_url(), None);
        assert_eq!(movie.trailer_query(), "Inception official trailer");
    }

    #[test]
    fn test_watch_url() {
        let hit = VideoHit {
            video_id: Some("YoHD9XEInc0".to_string()),
        };
        assert_eq!(
            hit.watch_url().as_deref(),
            Some("https://www.youtube.com/watch?v=YoHD9XEInc0")
        );
        assert_eq!(VideoHit { video_id: None }.watch_url(), None);
    }

    #[test]
    fn test_movie_result_json_contract() {
        let ratings = RatingsRecord {
            imdb: "8.8".to_string(),
            rotten_tomatoes: "87%".to_string(),
            metacritic: "74".to_string(),
        };
        let result = MovieResult::assemble(
            inception(),
            Some(ratings),
            Some("https://www.youtube.com/watch?v=YoHD9XEInc0".to_string()),
        );

        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(
            value,
            json!({
                "titulo": "Inception",
                "lancamento": "2010-07-15",
                "sinopse": "Um filme sobre sonhos",
                "poster": "https://image.tmdb.org/t/p/w500/poster.jpg",
                "backdrop": null,
                "notasOMDb": {
                    "imdb": "8.8",
                    "rottenTomatoes": "87%",
                    "metacritic": "74"
                },
                "trailer": "https://www.youtube.com/watch?v=YoHD9XEInc0"
            })
        );
    }

    #[test]
    fn test_degraded_result_serializes_nulls() {
        let result = MovieResult::assemble(inception(), None, None);
        let value = serde_json::to_value(&result).unwrap();

        assert!(value["notasOMDb"].is_null());
        assert!(value["trailer"].is_null());
    }

    #[test]
    fn test_metadata_record_tolerates_missing_fields() {
        let record: MetadataRecord =
            serde_json::from_value(json!({ "id": 1, "title": "Inception", "release_date": "2010" }))
                .unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.release_date.as_deref(), Some("2010"));
        assert!(record.overview.is_none());
        assert!(record.poster_path.is_none());
    }
}
