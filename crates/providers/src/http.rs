//! Shared request helper for the upstream clients.

use std::time::Duration;

use model::{ProviderError, ProviderResult, Service};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

/// Longest slice of an error body kept in `ProviderError::Status`
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Build the HTTP client shared by all upstream clients.
pub fn build_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("movie-lookup/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Issue a GET and decode the JSON body.
///
/// Transport errors are stripped of their URL, which carries the API key in
/// its query string.
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    service: Service,
    url: &str,
    query: &[(&str, &str)],
) -> ProviderResult<T> {
    debug!("{} GET {}", service, url);

    let response = http.get(url).query(query).send().await.map_err(|e| {
        let reason = e.without_url().to_string();
        error!("{} request to {} failed: {}", service, url, reason);
        ProviderError::Transport { service, reason }
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("{} returned {} for {}", service, status, url);
        return Err(ProviderError::Status {
            service,
            status: status.as_u16(),
            body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ProviderError::Transport {
            service,
            reason: e.without_url().to_string(),
        })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        error!("{} sent an unexpected body for {}: {}", service, url, e);
        ProviderError::Decode {
            service,
            reason: e.to_string(),
        }
    })
}
