use crate::FeedConfig;
use crate::error::FetchError;
use crate::snapshot::Snapshot;
use crate::stallingsnet::feed::{Facility, parse_facilities};
use parking_lot::RwLock;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, instrument};

const USER_AGENT: &str = concat!("utrecht-fietst/", env!("CARGO_PKG_VERSION"));

/// Somewhere the current list of facilities can be read from.
pub trait FeedSource: Send + Sync {
    fn fetch_facilities(&self) -> impl Future<Output = Result<Vec<Facility>, FetchError>> + Send;
}

/// The stallingsnet HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    client: reqwest::Client,
    url: String,
}

impl HttpFeed {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &FeedConfig) -> Result<Self, reqwest::Error> {
        Self::new(&config.url, Duration::from_secs(config.timeout_seconds))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl FeedSource for HttpFeed {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_facilities(&self) -> Result<Vec<Facility>, FetchError> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(parse_facilities(&body)?)
    }
}

struct CachedSnapshot {
    snapshot: Arc<Snapshot>,
    fetched_at: Instant,
}

/// Memoizes the enriched snapshot for `ttl` so upstream sees at most one
/// request per window. The slot is only ever swapped whole, so readers see
/// either the previous snapshot or the new one.
pub struct SnapshotFetcher<S> {
    source: S,
    ttl: Duration,
    slot: RwLock<Option<CachedSnapshot>>,
}

impl<S: FeedSource> SnapshotFetcher<S> {
    pub fn new(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            slot: RwLock::new(None),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the cached snapshot while it is fresh, otherwise fetches, enriches
    /// and caches a new one. Errors leave the cached snapshot as it was.
    #[instrument(skip(self))]
    pub async fn fetch(&self) -> Result<Arc<Snapshot>, FetchError> {
        if let Some(snapshot) = self.cached() {
            debug!(name: "fetcher.cache.hit", facilities = snapshot.len(), "serving cached snapshot");
            return Ok(snapshot);
        }

        debug!(name: "fetcher.cache.miss", "cached snapshot missing or expired, fetching feed");
        let facilities = self.source.fetch_facilities().await?;
        let snapshot = Arc::new(Snapshot::enriched(facilities));

        let unlocated = snapshot.unlocated().count();
        if unlocated > 0 {
            debug!(
                name: "fetcher.coordinates.missing",
                count = unlocated,
                "facilities without known coordinates"
            );
        }
        info!(
            name: "fetcher.snapshot.fetched",
            facilities = snapshot.len(),
            "fetched parking snapshot"
        );

        *self.slot.write() = Some(CachedSnapshot {
            snapshot: Arc::clone(&snapshot),
            fetched_at: Instant::now(),
        });
        Ok(snapshot)
    }

    /// Age of the cached snapshot, if any, regardless of whether it has expired.
    pub fn cache_age(&self) -> Option<Duration> {
        self.slot.read().as_ref().map(|c| c.fetched_at.elapsed())
    }

    fn cached(&self) -> Option<Arc<Snapshot>> {
        self.slot
            .read()
            .as_ref()
            .filter(|c| c.fetched_at.elapsed() < self.ttl)
            .map(|c| Arc::clone(&c.snapshot))
    }
}
