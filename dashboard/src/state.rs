use axum::extract::FromRef;
use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;
use parking_lot::RwLock;
use shared::fetcher::{HttpFeed, SnapshotFetcher};
use std::sync::Arc;

pub type Fetcher = SnapshotFetcher<HttpFeed>;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub fetcher: Arc<Fetcher>,
    pub display: Display,
    pub health: HealthState,
}

/// How data products are presented to the front end.
#[derive(Clone, Debug)]
pub struct Display {
    pub timezone: Tz,
    pub top_n: usize,
}

/// Outcome of the most recent poll cycles, read by `/health`.
#[derive(Clone)]
pub struct HealthState {
    pub last_attempted_update: Arc<RwLock<Option<DateTime<Utc>>>>,
    pub last_successful_update: Arc<RwLock<Option<DateTime<Utc>>>>,
    pub last_error: Arc<RwLock<Option<String>>>,
    pub max_staleness: TimeDelta,
}

impl HealthState {
    pub fn new(max_staleness: TimeDelta) -> Self {
        Self {
            last_attempted_update: Arc::new(RwLock::new(None)),
            last_successful_update: Arc::new(RwLock::new(None)),
            last_error: Arc::new(RwLock::new(None)),
            max_staleness,
        }
    }

    pub fn record_attempt(&self, at: DateTime<Utc>) {
        *self.last_attempted_update.write() = Some(at);
    }

    pub fn record_success(&self, at: DateTime<Utc>) {
        *self.last_successful_update.write() = Some(at);
    }

    pub fn record_error(&self, message: String) {
        *self.last_error.write() = Some(message);
    }
}
