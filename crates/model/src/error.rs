//! Error types shared by the upstream clients and the aggregator.
//!
//! Two layers:
//! - `ProviderError` describes a single failed call to one upstream service
//! - `AggregationError` is what a whole lookup fails with
//!
//! Degraded data (no ratings, no trailer) is never an error; it shows up as
//! `None` fields on `MovieResult`.

use std::fmt;

use thiserror::Error;

/// The upstream services a lookup talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Tmdb,
    Omdb,
    Youtube,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Service::Tmdb => "TMDb",
            Service::Omdb => "OMDb",
            Service::Youtube => "YouTube",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during a single call to an upstream service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Request never produced a response (connection refused, timeout, ...)
    #[error("{service} request failed: {reason}")]
    Transport { service: Service, reason: String },

    /// Upstream answered with a non-success HTTP status
    #[error("{service} returned {status}: {body}")]
    Status {
        service: Service,
        status: u16,
        body: String,
    },

    /// Response body was not the JSON shape we expect
    #[error("{service} response could not be decoded: {reason}")]
    Decode { service: Service, reason: String },
}

impl ProviderError {
    /// Which upstream this failure came from.
    pub fn service(&self) -> Service {
        match self {
            ProviderError::Transport { service, .. }
            | ProviderError::Status { service, .. }
            | ProviderError::Decode { service, .. } => *service,
        }
    }
}

/// Reasons a movie lookup fails as a whole.
///
/// The `Display` output is what the HTTP layer sends back to clients, so
/// upstream failures are rendered with the originating message unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregationError {
    /// The metadata search returned zero candidates
    #[error("Movie not found on TMDb: {title}")]
    NotFound { title: String },

    /// A required upstream call failed (metadata search, id resolution or ratings)
    #[error(transparent)]
    Upstream(#[from] ProviderError),
}

impl AggregationError {
    /// The upstream that caused the failure, if any.
    pub fn upstream_service(&self) -> Option<Service> {
        match self {
            AggregationError::NotFound { .. } => None,
            AggregationError::Upstream(err) => Some(err.service()),
        }
    }
}

/// Result of a single upstream call
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Convenience type alias for aggregation results
pub type Result<T> = std::result::Result<T, AggregationError>;
