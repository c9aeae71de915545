use crate::state::{Display, Fetcher};
use crate::v1::api_models::DashboardResponse;
use crate::v1::error::ApiError;
use crate::v1::extractors::params::FacilityFilter;
use crate::views::{availability_rows, facility_views, format_last_update, map_view, top_entries};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use chrono::Utc;
use shared::{aggregate, filter};
use std::sync::Arc;

/// Everything one dashboard page needs. Statistics, the top list and the slider
/// bound describe the whole snapshot; the table, chart and map follow the filter.
pub async fn get_dashboard(
    State(fetcher): State<Arc<Fetcher>>,
    State(display): State<Display>,
    params: FacilityFilter,
) -> Result<impl IntoResponse, ApiError> {
    let requested_at = Utc::now();
    let snapshot = fetcher.fetch().await?;

    let summary = aggregate::summarize(&snapshot);
    let filtered = filter::apply(&snapshot, &params.query, params.min_free);

    Ok(Json(DashboardResponse {
        requested_at,
        last_update: summary
            .latest_time
            .map(|t| format_last_update(t, &display.timezone)),
        summary,
        top: top_entries(&snapshot, display.top_n),
        max_free: aggregate::max_free(&snapshot),
        query: params.query,
        min_free: params.min_free,
        facilities: facility_views(&filtered, &display.timezone),
        availability: availability_rows(&filtered),
        map: map_view(&filtered),
    }))
}
