use crate::state::{Display, Fetcher};
use crate::v1::api_models::{FacilitiesResponse, SummaryResponse, TopResponse};
use crate::v1::error::ApiError;
use crate::v1::extractors::params::{FacilityFilter, TopCount};
use crate::views::{facility_views, format_last_update, top_entries};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use chrono::Utc;
use shared::{aggregate, filter};
use std::sync::Arc;

/// Full enriched snapshot in upstream order.
pub async fn get_snapshot(
    State(fetcher): State<Arc<Fetcher>>,
    State(display): State<Display>,
) -> Result<impl IntoResponse, ApiError> {
    let requested_at = Utc::now();
    let snapshot = fetcher.fetch().await?;

    Ok(Json(FacilitiesResponse {
        requested_at,
        count: snapshot.len(),
        facilities: facility_views(&snapshot, &display.timezone),
    }))
}

/// Snapshot reduced by the `query`/`minFree` search controls, upstream order kept.
pub async fn get_facilities(
    State(fetcher): State<Arc<Fetcher>>,
    State(display): State<Display>,
    params: FacilityFilter,
) -> Result<impl IntoResponse, ApiError> {
    let requested_at = Utc::now();
    let snapshot = fetcher.fetch().await?;
    let filtered = filter::apply(&snapshot, &params.query, params.min_free);

    Ok(Json(FacilitiesResponse {
        requested_at,
        count: filtered.len(),
        facilities: facility_views(&filtered, &display.timezone),
    }))
}

pub async fn get_summary(
    State(fetcher): State<Arc<Fetcher>>,
    State(display): State<Display>,
) -> Result<impl IntoResponse, ApiError> {
    let requested_at = Utc::now();
    let snapshot = fetcher.fetch().await?;
    let stats = aggregate::summarize(&snapshot);

    Ok(Json(SummaryResponse {
        requested_at,
        last_update: stats
            .latest_time
            .map(|t| format_last_update(t, &display.timezone)),
        stats,
        max_free: aggregate::max_free(&snapshot),
    }))
}

pub async fn get_top(
    State(fetcher): State<Arc<Fetcher>>,
    State(display): State<Display>,
    TopCount(n): TopCount,
) -> Result<impl IntoResponse, ApiError> {
    let requested_at = Utc::now();
    let snapshot = fetcher.fetch().await?;

    Ok(Json(TopResponse {
        requested_at,
        top: top_entries(&snapshot, n.unwrap_or(display.top_n)),
    }))
}
