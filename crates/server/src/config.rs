//! Command-line and environment configuration.
//!
//! Every option can be given as a flag or through the environment (a `.env`
//! file is loaded by the binaries before parsing). API keys are required.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use clap::{Args, Parser};

use providers::config::{
    DEFAULT_OMDB_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_TMDB_BASE_URL, DEFAULT_TMDB_LANGUAGE,
    DEFAULT_YOUTUBE_BASE_URL,
};
use providers::{ProvidersConfig, ServiceConfig};

/// Upstream settings shared by the server and the CLI.
#[derive(Clone, Args)]
pub struct ProviderArgs {
    /// TMDb API key
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    pub tmdb_api_key: String,

    /// OMDb API key
    #[arg(long, env = "OMDB_API_KEY", hide_env_values = true)]
    pub omdb_api_key: String,

    /// YouTube Data API key
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    pub youtube_api_key: String,

    #[arg(long, env = "TMDB_BASE_URL", default_value = DEFAULT_TMDB_BASE_URL)]
    pub tmdb_base_url: String,

    #[arg(long, env = "OMDB_BASE_URL", default_value = DEFAULT_OMDB_BASE_URL)]
    pub omdb_base_url: String,

    #[arg(long, env = "YOUTUBE_BASE_URL", default_value = DEFAULT_YOUTUBE_BASE_URL)]
    pub youtube_base_url: String,

    /// Language preference for metadata searches
    #[arg(long, env = "TMDB_LANGUAGE", default_value = DEFAULT_TMDB_LANGUAGE)]
    pub tmdb_language: String,

    /// Timeout for each upstream request, in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub http_timeout_secs: u64,
}

impl ProviderArgs {
    pub fn to_config(&self) -> ProvidersConfig {
        ProvidersConfig {
            tmdb: ServiceConfig::new(&self.tmdb_base_url, &self.tmdb_api_key),
            tmdb_language: self.tmdb_language.clone(),
            omdb: ServiceConfig::new(&self.omdb_base_url, &self.omdb_api_key),
            youtube: ServiceConfig::new(&self.youtube_base_url, &self.youtube_api_key),
            timeout: Duration::from_secs(self.http_timeout_secs),
        }
    }
}

/// Movie lookup HTTP server
#[derive(Clone, Parser)]
#[command(name = "movie-lookup-server")]
#[command(about = "Aggregates TMDb, OMDb and YouTube data for a movie title", long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "BIND_ADDR", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind_addr: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    #[command(flatten)]
    pub providers: ProviderArgs,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
