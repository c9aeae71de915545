use crate::state::{Fetcher, HealthState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

pub async fn health_check(
    State(state): State<HealthState>,
    State(fetcher): State<Arc<Fetcher>>,
) -> impl IntoResponse {
    let last_attempted_update = *state.last_attempted_update.read();
    let last_successful_update = *state.last_successful_update.read();
    let last_error = state
        .last_error
        .read()
        .clone()
        .unwrap_or_else(|| "unknown".to_string());

    let Some(last_successful_update) = last_successful_update else {
        return if let Some(last_attempted_update) = last_attempted_update {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!(
                    "Parking feed has not been successfully fetched. Last attempted update: {last_attempted_update}. Last error: {last_error}"
                ),
            )
        } else {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "No attempted or successful parking feed updates".to_string(),
            )
        };
    };

    if (Utc::now() - last_successful_update) > state.max_staleness {
        let last_attempted_update = last_attempted_update.unwrap_or(last_successful_update);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!(
                "Parking feed not fetched in the last {} seconds. Last successful update: {last_successful_update}. Last attempted update: {last_attempted_update}. Last error: {last_error}",
                state.max_staleness.num_seconds()
            ),
        )
    } else {
        (
            StatusCode::OK,
            format!(
                "Parking feed last successfully fetched: {last_successful_update}. Cached snapshot age: {}",
                cached_snapshot_age(&fetcher)
            ),
        )
    }
}

fn cached_snapshot_age(fetcher: &Fetcher) -> String {
    fetcher.cache_age().map_or_else(
        || "none".to_string(),
        |age| humantime::format_duration(Duration::from_secs(age.as_secs())).to_string(),
    )
}
