//! TMDb client: movie search and external id resolution.

use async_trait::async_trait;
use model::{MetadataRecord, MovieId, ProviderError, ProviderResult, Service};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ServiceConfig;
use crate::http::get_json;
use crate::traits::MetadataProvider;

/// Client for the TMDb v3 API.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    config: ServiceConfig,
    language: String,
}

impl TmdbClient {
    /// # Arguments
    /// * `http` - Shared HTTP client
    /// * `config` - Base URL and API key
    /// * `language` - Locale preference for search results (e.g. "pt-BR")
    pub fn new(http: reqwest::Client, config: ServiceConfig, language: impl Into<String>) -> Self {
        let config = ServiceConfig::new(config.trimmed_base_url(), config.api_key);
        Self {
            http,
            config,
            language: language.into(),
        }
    }
}

#[async_trait]
impl MetadataProvider for TmdbClient {
    async fn search_movies(&self, query: &str) -> ProviderResult<Vec<MetadataRecord>> {
        let url = format!("{}/search/movie", self.config.base_url);
        let response: SearchResponse = get_json(
            &self.http,
            Service::Tmdb,
            &url,
            &[
                ("api_key", self.config.api_key.as_str()),
                ("language", self.language.as_str()),
                ("query", query),
            ],
        )
        .await?;

        debug!("TMDb search for {:?} returned {} results", query, response.results.len());
        response.into_records()
    }

    async fn external_id(&self, movie_id: MovieId) -> ProviderResult<Option<String>> {
        let url = format!("{}/movie/{}/external_ids", self.config.base_url, movie_id);
        let response: ExternalIdsResponse = get_json(
            &self.http,
            Service::Tmdb,
            &url,
            &[("api_key", self.config.api_key.as_str())],
        )
        .await?;

        Ok(response.imdb_id)
    }
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Value>,
}

impl SearchResponse {
    /// Decode results in rank order.
    ///
    /// The first result is the canonical match and must decode; malformed
    /// records further down the ranking are dropped.
    fn into_records(self) -> ProviderResult<Vec<MetadataRecord>> {
        let mut results = self.results.into_iter();
        let Some(first) = results.next() else {
            return Ok(Vec::new());
        };

        let first = MetadataRecord::deserialize(first).map_err(|e| ProviderError::Decode {
            service: Service::Tmdb,
            reason: e.to_string(),
        })?;

        let mut records = vec![first];
        for (rank, value) in results.enumerate() {
            match MetadataRecord::deserialize(value) {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping malformed TMDb result #{}: {}", rank + 2, e),
            }
        }
        Ok(records)
    }
}

#[derive(Debug, Deserialize)]
struct ExternalIdsResponse {
    #[serde(default)]
    imdb_id: Option<String>,
}
