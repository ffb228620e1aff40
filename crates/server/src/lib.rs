//! Server crate for the movie lookup service.
//!
//! This crate contains the aggregator that merges the upstream lookups, the
//! HTTP API in front of it, and the configuration shared by the binaries.

pub mod aggregator;
pub mod api;
pub mod config;

pub use aggregator::MovieAggregator;
pub use api::{router, ApiError};
pub use config::{ProviderArgs, ServerConfig};

use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info,server=debug,providers=debug";

/// Initialize logging from `RUST_LOG`, falling back to `default_filter`.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}
