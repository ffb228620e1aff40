//! Upstream clients for movie lookups.
//!
//! This crate provides:
//! - Trait seams (`MetadataProvider`, `RatingsProvider`, `VideoSearchProvider`)
//! - HTTP implementations for TMDb, OMDb and the YouTube Data API
//! - `ProvidersConfig` and `Providers::from_config` to wire them together
//!
//! All clients share one `reqwest::Client`, so connection pooling and the
//! request timeout are configured in a single place.

pub mod config;
pub mod http;
pub mod omdb;
pub mod tmdb;
pub mod traits;
pub mod youtube;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

// Re-export main types
pub use config::{ProvidersConfig, ServiceConfig};
pub use omdb::OmdbClient;
pub use tmdb::TmdbClient;
pub use traits::{MetadataProvider, RatingsProvider, VideoSearchProvider};
pub use youtube::YoutubeClient;

/// The three upstream services, as trait objects.
#[derive(Clone)]
pub struct Providers {
    pub metadata: Arc<dyn MetadataProvider>,
    pub ratings: Arc<dyn RatingsProvider>,
    pub videos: Arc<dyn VideoSearchProvider>,
}

impl Providers {
    /// Build HTTP clients for all three services from explicit configuration.
    pub fn from_config(config: &ProvidersConfig) -> Result<Self> {
        let http = http::build_client(config.timeout).context("Building HTTP client")?;

        info!(
            "Upstreams: tmdb={} (language {}), omdb={}, youtube={}, timeout={:?}",
            config.tmdb.base_url,
            config.tmdb_language,
            config.omdb.base_url,
            config.youtube.base_url,
            config.timeout
        );

        Ok(Self {
            metadata: Arc::new(TmdbClient::new(
                http.clone(),
                config.tmdb.clone(),
                config.tmdb_language.clone(),
            )),
            ratings: Arc::new(OmdbClient::new(http.clone(), config.omdb.clone())),
            videos: Arc::new(YoutubeClient::new(http, config.youtube.clone())),
        })
    }
}
