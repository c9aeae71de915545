use crate::views::{AvailabilityRow, FacilityView, MapView, TopEntry};
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::aggregate::SummaryStats;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitiesResponse {
    pub requested_at: DateTime<Utc>,
    pub count: usize,
    pub facilities: Vec<FacilityView>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub requested_at: DateTime<Utc>,
    /// `latest_time` in the display timezone, `dd-mm-yyyy HH:MM:SS`.
    pub last_update: Option<String>,
    #[serde(flatten)]
    pub stats: SummaryStats,
    pub max_free: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopResponse {
    pub requested_at: DateTime<Utc>,
    pub top: Vec<TopEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub requested_at: DateTime<Utc>,
    pub last_update: Option<String>,
    pub summary: SummaryStats,
    pub top: Vec<TopEntry>,
    pub max_free: u32,
    pub query: String,
    pub min_free: u32,
    pub facilities: Vec<FacilityView>,
    pub availability: Vec<AvailabilityRow>,
    pub map: MapView,
}
