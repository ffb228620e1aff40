//! Settings for the upstream clients.

use std::fmt;
use std::time::Duration;

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_OMDB_BASE_URL: &str = "http://www.omdbapi.com";
pub const DEFAULT_YOUTUBE_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_TMDB_LANGUAGE: &str = "pt-BR";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where one upstream lives and how to authenticate against it.
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: String,
    pub api_key: String,
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Base URL without a trailing slash, ready for `format!("{base}/path")`.
    pub fn trimmed_base_url(&self) -> String {
        self.base_url.trim_end_matches('/').to_string()
    }
}

// Keys must never end up in logs.
impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Everything needed to build the three upstream clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvidersConfig {
    pub tmdb: ServiceConfig,
    /// Locale preference sent with every metadata search
    pub tmdb_language: String,
    pub omdb: ServiceConfig,
    pub youtube: ServiceConfig,
    /// Per-request timeout applied by the shared HTTP client
    pub timeout: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ServiceConfig::new("http://localhost", "super-secret");
        let debug = format!("{:?}", config);

        assert!(debug.contains("http://localhost"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_trimmed_base_url() {
        let config = ServiceConfig::new("http://localhost:8080/3/", "k");
        assert_eq!(config.trimmed_base_url(), "http://localhost:8080/3");
    }

    #[test]
    fn test_default_timeout() {
        assert_eq!(DEFAULT_TIMEOUT.as_secs(), 10);
    }
}
