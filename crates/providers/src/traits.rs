//! Trait seams for the three upstream services.
//!
//! The aggregator only talks to these traits, so the HTTP clients in this
//! crate can be swapped for in-memory fakes in tests.

use async_trait::async_trait;
use model::{MetadataRecord, MovieId, ProviderResult, RatingsLookup, VideoHit};

/// Movie search and identifier resolution.
///
/// ## Design Note
/// `Send + Sync` lets one provider be shared across concurrent requests
/// behind an `Arc<dyn MetadataProvider>`.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Search movies by free-text title, best match first.
    async fn search_movies(&self, query: &str) -> ProviderResult<Vec<MetadataRecord>>;

    /// Resolve the cross-service (IMDb) id for a movie.
    ///
    /// `Ok(None)` means the service has no such id, which is not an error.
    async fn external_id(&self, movie_id: MovieId) -> ProviderResult<Option<String>>;
}

/// Ratings keyed by the cross-service id.
#[async_trait]
pub trait RatingsProvider: Send + Sync {
    async fn ratings(&self, external_id: &str) -> ProviderResult<RatingsLookup>;
}

/// Free-text video search.
#[async_trait]
pub trait VideoSearchProvider: Send + Sync {
    async fn search_videos(&self, query: &str) -> ProviderResult<Vec<VideoHit>>;
}
