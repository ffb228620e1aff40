//! # Movie Aggregator
//!
//! This module merges three upstream lookups into one `MovieResult`:
//! 1. Search the metadata service and take the first result
//! 2. Resolve that result's external (IMDb) id
//! 3. Look up ratings, only when an external id exists
//! 4. Look up a trailer, best-effort
//! 5. Assemble the result
//!
//! ## Failure policy
//!
//! Steps 1-3 are required: an empty search is `NotFound`, and any failed
//! call in those steps fails the whole lookup with the upstream's message.
//! Step 4 is isolated: whatever goes wrong there only leaves `trailer` empty.
//!
//! Steps 3 and 4 are independent once the canonical match is known, so they
//! run concurrently with `tokio::join!`. That does not change the outcome of
//! any lookup compared to running them one after the other.

use std::time::Instant;

use anyhow::Result as AnyResult;
use tracing::{debug, info, warn};

use model::{
    AggregationError, MetadataRecord, MovieResult, RatingsLookup, RatingsRecord, Result,
};
use providers::{Providers, ProvidersConfig};

/// Merges metadata, ratings and trailer lookups for a title.
///
/// Cheap to clone; every upstream is behind an `Arc`. Holds no per-request
/// state, so one instance serves concurrent requests.
#[derive(Clone)]
pub struct MovieAggregator {
    providers: Providers,
}

impl MovieAggregator {
    /// Create an aggregator over the given upstreams.
    pub fn new(providers: Providers) -> Self {
        Self { providers }
    }

    /// Create an aggregator talking to the real upstream APIs.
    pub fn from_config(config: &ProvidersConfig) -> AnyResult<Self> {
        Ok(Self::new(Providers::from_config(config)?))
    }

    /// Main entry point: look up everything known about `title`.
    ///
    /// # Arguments
    /// * `title` - Free-text title, passed to the metadata search as-is
    ///
    /// # Returns
    /// The merged record, or an `AggregationError` when the search has no
    /// results or a required upstream call fails
    pub async fn aggregate(&self, title: &str) -> Result<MovieResult> {
        let start_time = Instant::now();

        let movie = self.find_canonical_match(title).await?;
        info!(
            "Canonical match for {:?}: id={} title={:?}",
            title, movie.id, movie.title
        );

        let external_id = self.resolve_external_id(&movie).await?;

        let (ratings, trailer) = tokio::join!(
            self.lookup_ratings(external_id.as_deref()),
            self.lookup_trailer(&movie)
        );
        let ratings = ratings?;

        info!(
            "Aggregated {:?} in {:.2?} (ratings: {}, trailer: {})",
            movie.title,
            start_time.elapsed(),
            ratings.is_some(),
            trailer.is_some()
        );

        Ok(MovieResult::assemble(movie, ratings, trailer))
    }

    /// Search the metadata service and keep only the first result.
    async fn find_canonical_match(&self, title: &str) -> Result<MetadataRecord> {
        let results = self.providers.metadata.search_movies(title).await?;
        debug!("Metadata search for {:?} returned {} results", title, results.len());

        results.into_iter().next().ok_or_else(|| {
            info!("No metadata results for {:?}", title);
            AggregationError::NotFound {
                title: title.to_string(),
            }
        })
    }

    /// Resolve the external id. Null and empty ids both come back as `None`.
    async fn resolve_external_id(&self, movie: &MetadataRecord) -> Result<Option<String>> {
        let external_id = self.providers.metadata.external_id(movie.id).await?;
        Ok(external_id.filter(|id| !id.is_empty()))
    }

    /// Fetch ratings for the external id, if there is one.
    ///
    /// The ratings service saying it does not know the id is `Ok(None)`;
    /// a failed call is an error.
    async fn lookup_ratings(&self, external_id: Option<&str>) -> Result<Option<RatingsRecord>> {
        let Some(external_id) = external_id else {
            debug!("No external id, skipping ratings lookup");
            return Ok(None);
        };

        match self.providers.ratings.ratings(external_id).await? {
            RatingsLookup::Found(payload) => Ok(Some(RatingsRecord::from_payload(payload))),
            RatingsLookup::NotFound(reason) => {
                info!(
                    "No ratings for {}: {}",
                    external_id,
                    reason.as_deref().unwrap_or("unknown id")
                );
                Ok(None)
            }
        }
    }

    /// Find a trailer link. Never fails; every problem becomes `None`.
    async fn lookup_trailer(&self, movie: &MetadataRecord) -> Option<String> {
        let query = movie.trailer_query();

        let hits = match self.providers.videos.search_videos(&query).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!("Trailer lookup for {:?} failed: {}", movie.title, e);
                return None;
            }
        };

        let Some(first) = hits.first() else {
            debug!("No videos found for {:?}", query);
            return None;
        };

        let url = first.watch_url();
        if url.is_none() {
            warn!("First video result for {:?} has no video id", query);
        }
        url
    }
}
