//! OMDb client: ratings by IMDb id.

use async_trait::async_trait;
use model::{NamedRating, ProviderResult, RatingsLookup, RatingsPayload, Service};
use serde::Deserialize;
use tracing::debug;

use crate::config::ServiceConfig;
use crate::http::get_json;
use crate::traits::RatingsProvider;

/// Value of OMDb's `Response` field for unknown ids
const NEGATIVE_OUTCOME: &str = "False";

#[derive(Debug, Clone)]
pub struct OmdbClient {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl OmdbClient {
    pub fn new(http: reqwest::Client, config: ServiceConfig) -> Self {
        let config = ServiceConfig::new(config.trimmed_base_url(), config.api_key);
        Self { http, config }
    }
}

#[async_trait]
impl RatingsProvider for OmdbClient {
    async fn ratings(&self, external_id: &str) -> ProviderResult<RatingsLookup> {
        let url = format!("{}/", self.config.base_url);
        let response: OmdbResponse = get_json(
            &self.http,
            Service::Omdb,
            &url,
            &[("i", external_id), ("apikey", self.config.api_key.as_str())],
        )
        .await?;

        Ok(response.into_lookup(external_id))
    }
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "Response")]
    response: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Ratings", default)]
    ratings: Vec<OmdbRating>,
    #[serde(rename = "Metascore")]
    metascore: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmdbRating {
    #[serde(rename = "Source")]
    source: String,
    #[serde(rename = "Value")]
    value: String,
}

impl OmdbResponse {
    fn into_lookup(self, external_id: &str) -> RatingsLookup {
        if self.response.as_deref() == Some(NEGATIVE_OUTCOME) {
            debug!("OMDb has no entry for {}: {:?}", external_id, self.error);
            return RatingsLookup::NotFound(self.error);
        }

        RatingsLookup::Found(RatingsPayload {
            imdb_rating: self.imdb_rating,
            ratings: self
                .ratings
                .into_iter()
                .map(|r| NamedRating {
                    source: r.source,
                    value: r.value,
                })
                .collect(),
            metascore: self.metascore,
        })
    }
}
