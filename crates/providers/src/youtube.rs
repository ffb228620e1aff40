//! YouTube Data API client: video search.

use async_trait::async_trait;
use model::{ProviderResult, Service, VideoHit};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ServiceConfig;
use crate::http::get_json;
use crate::traits::VideoSearchProvider;

#[derive(Debug, Clone)]
pub struct YoutubeClient {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl YoutubeClient {
    pub fn new(http: reqwest::Client, config: ServiceConfig) -> Self {
        let config = ServiceConfig::new(config.trimmed_base_url(), config.api_key);
        Self { http, config }
    }
}

#[async_trait]
impl VideoSearchProvider for YoutubeClient {
    async fn search_videos(&self, query: &str) -> ProviderResult<Vec<VideoHit>> {
        let url = format!("{}/search", self.config.base_url);
        let response: SearchResponse = get_json(
            &self.http,
            Service::Youtube,
            &url,
            &[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("key", self.config.api_key.as_str()),
            ],
        )
        .await?;

        Ok(response.items.into_iter().map(video_hit).collect())
    }
}

/// Items are decoded one at a time so a malformed entry only loses its own
/// video id and the ranking stays intact.
fn video_hit(item: Value) -> VideoHit {
    match SearchItem::deserialize(item) {
        Ok(item) => VideoHit {
            video_id: item.id.and_then(|id| id.video_id),
        },
        Err(e) => {
            debug!("Malformed YouTube search item: {}", e);
            VideoHit { video_id: None }
        }
    }
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: Option<SearchItemId>,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{http_client, start_mock_upstream};
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::routing::get;
    use axum::{Json, Router};
    use model::ProviderError;
    use serde_json::json;
    use std::collections::HashMap;

    const API_KEY: &str = "yt-test-key";

    async fn search(Query(params): Query<HashMap<String, String>>) -> Response {
        if params.get("key").map(String::as_str) != Some(API_KEY) {
            return (
                StatusCode::FORBIDDEN,
                Json(json!({ "error": { "code": 403, "message": "quotaExceeded" } })),
            )
                .into_response();
        }
        if params.get("type").map(String::as_str) != Some("video")
            || params.get("part").map(String::as_str) != Some("snippet")
        {
            return StatusCode::BAD_REQUEST.into_response();
        }

        match params.get("q").map(String::as_str) {
            Some("Inception official trailer") => Json(json!({
                "kind": "youtube#searchListResponse",
                "items": [
                    { "id": { "kind": "youtube#video", "videoId": "YoHD9XEInc0" } },
                    { "id": { "kind": "youtube#video", "videoId": "8hP9D6kZseM" } }
                ]
            }))
            .into_response(),
            Some("Mixed official trailer") => Json(json!({
                "items": [
                    { "id": { "kind": "youtube#video", "videoId": "YoHD9XEInc0" } },
                    { "id": "not-an-object" },
                    { "id": { "videoId": 42 } },
                    { "id": { "kind": "youtube#video", "videoId": "8hP9D6kZseM" } }
                ]
            }))
            .into_response(),
            Some("Channel official trailer") => Json(json!({
                "items": [{ "id": { "kind": "youtube#channel", "channelId": "UC123" } }]
            }))
            .into_response(),
            _ => Json(json!({ "items": [] })).into_response(),
        }
    }

    async fn start_mock_youtube() -> (String, tokio::task::JoinHandle<()>) {
        start_mock_upstream(Router::new().route("/search", get(search))).await
    }

    fn client(base_url: &str, api_key: &str) -> YoutubeClient {
        YoutubeClient::new(http_client(), ServiceConfig::new(base_url, api_key))
    }

    #[tokio::test]
    async fn test_search_videos_keeps_order() {
        let (addr, handle) = start_mock_youtube().await;
        let youtube = client(&addr, API_KEY);

        let hits = youtube
            .search_videos("Inception official trailer")
            .await
            .expect("search failed");

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].video_id.as_deref(), Some("YoHD9XEInc0"));

        handle.abort();
    }

    #[tokio::test]
    async fn test_item_without_video_id() {
        let (addr, handle) = start_mock_youtube().await;
        let youtube = client(&addr, API_KEY);

        let hits = youtube
            .search_videos("Channel official trailer")
            .await
            .expect("search failed");

        assert_eq!(hits, vec![VideoHit { video_id: None }]);

        handle.abort();
    }

    #[tokio::test]
    async fn test_malformed_items_keep_first_video() {
        let (addr, handle) = start_mock_youtube().await;
        let youtube = client(&addr, API_KEY);

        let hits = youtube
            .search_videos("Mixed official trailer")
            .await
            .expect("search failed");

        let ids: Vec<Option<&str>> = hits.iter().map(|h| h.video_id.as_deref()).collect();
        assert_eq!(ids, vec![Some("YoHD9XEInc0"), None, None, Some("8hP9D6kZseM")]);

        handle.abort();
    }

    #[tokio::test]
    async fn test_empty_result_list() {
        let (addr, handle) = start_mock_youtube().await;
        let youtube = client(&addr, API_KEY);

        let hits = youtube
            .search_videos("Nothing official trailer")
            .await
            .expect("search failed");
        assert!(hits.is_empty());

        handle.abort();
    }

    #[tokio::test]
    async fn test_quota_error_is_status_error() {
        let (addr, handle) = start_mock_youtube().await;
        let youtube = client(&addr, "exhausted-key");

        let err = youtube.search_videos("Inception official trailer").await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Status { service: Service::Youtube, status: 403, .. }
        ));

        handle.abort();
    }
}
