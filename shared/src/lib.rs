pub mod aggregate;
pub mod fetcher;
pub mod filter;
pub mod snapshot;
pub mod stallingsnet;

use crate::error::{ConfigError, InitializationError};
use chrono_tz::Tz;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub const ENV_VAR_PREFIX: &str = "UTRECHT_FIETST__";
pub const SETTINGS_FILE: &str = "Settings.toml";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    pub feed: FeedConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FeedConfig {
    pub url: String,
    pub timeout_seconds: u64,
    pub cache_ttl_seconds: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: stallingsnet::feed::FEED_URL.to_string(),
            timeout_seconds: 10,
            cache_ttl_seconds: 60,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DashboardConfig {
    pub listen_addr: String,
    pub interval_seconds: u64,
    pub top_n: usize,
    pub timezone: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:3000".to_string(),
            interval_seconds: 60,
            top_n: 3,
            timezone: "Europe/Amsterdam".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Parses the configured IANA zone name used for displaying observation times.
    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| ConfigError::Timezone(self.timezone.clone(), e.to_string()))
    }
}

pub fn load_config() -> Result<Config, ConfigError> {
    Ok(Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(SETTINGS_FILE))
        .merge(Env::prefixed(ENV_VAR_PREFIX).split("__"))
        .extract::<Config>()?)
}

pub mod error {
    use thiserror::Error;
    use tracing::dispatcher::SetGlobalDefaultError;

    #[derive(Debug, Error)]
    pub enum ConfigError {
        #[error("failed to load configuration: {0}")]
        Figment(#[from] figment::Error),
        #[error("unknown timezone {0}: {1}")]
        Timezone(String, String),
    }

    #[derive(Debug, Error)]
    pub enum InitializationError {
        #[error(transparent)]
        Tracing(#[from] SetGlobalDefaultError),
        #[error(transparent)]
        Config(#[from] ConfigError),
        #[error("failed to build HTTP client: {0}")]
        HttpClient(#[from] reqwest::Error),
    }

    /// Failure of one fetch of the upstream feed. Either kind means no snapshot was produced.
    #[derive(Debug, Error)]
    pub enum FetchError {
        #[error("upstream request failed: {0}")]
        Upstream(#[from] reqwest::Error),
        #[error("could not parse feed response: {0}")]
        Parse(#[from] serde_json::Error),
    }
}

pub fn init_tracing() -> Result<(), InitializationError> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

pub async fn shutdown_listener(token: Option<CancellationToken>) {
    let ctrl_c = signal::ctrl_c();
    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(name: "signal.sigterm.failed", error = ?e, "could not install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!(name: "signal.ctrlc.received", "received Ctrl+C signal, shutting down"),
        _ = terminate => info!(name: "signal.sigterm.received", "received SIGTERM signal, shutting down"),
    }

    if let Some(token) = token {
        token.cancel();
    }
}
