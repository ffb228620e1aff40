//! HTTP API in front of the aggregator.
//!
//! Routes:
//! - `GET /api/filmes/{titulo}`: aggregated movie record, or 500 `{"erro": ...}`
//! - `GET /api/status`: liveness and version
//! - `GET /api/teste-erro`: always fails through the error path, for smoke tests

use anyhow::bail;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::error;

use model::{AggregationError, MovieResult};

use crate::aggregator::MovieAggregator;

pub const STATUS_MESSAGE: &str = "API rodando normalmente";

#[derive(Clone)]
struct AppState {
    aggregator: MovieAggregator,
}

/// Build the application router.
pub fn router(aggregator: MovieAggregator) -> Router {
    Router::new()
        .route("/api/filmes/{titulo}", get(lookup_movie))
        .route("/api/status", get(status))
        .route("/api/teste-erro", get(controlled_error))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { aggregator })
}

async fn lookup_movie(
    State(state): State<AppState>,
    Path(titulo): Path<String>,
) -> Result<Json<MovieResult>, ApiError> {
    let movie = state.aggregator.aggregate(&titulo).await?;
    Ok(Json(movie))
}

async fn status() -> Json<serde_json::Value> {
    Json(json!({
        "status": STATUS_MESSAGE,
        "versao": env!("CARGO_PKG_VERSION"),
    }))
}

fn fail_on_purpose() -> anyhow::Result<()> {
    bail!("Erro de teste controlado!")
}

async fn controlled_error() -> Response {
    match fail_on_purpose() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "mensagem": "Erro tratado com sucesso",
                "erro": err.to_string(),
            })),
        )
            .into_response(),
    }
}

/// Errors a handler can return.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Aggregation(ref err) = self;
        match err.upstream_service() {
            Some(service) => error!("Request failed at {}: {}", service, err),
            None => error!("Request failed: {}", err),
        }
        let body = Json(json!({ "erro": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
