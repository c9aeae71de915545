//! Data products rendered by the dashboard front end: local times, the top-N
//! list with map links, availability rows for the table and bar chart, and the
//! map layer.

use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use shared::aggregate;
use shared::snapshot::Snapshot;
use shared::stallingsnet::feed::Facility;

pub const LAST_UPDATE_FORMAT: &str = "%d-%m-%Y %H:%M:%S";
pub const MAP_ZOOM: f64 = 13.0;

pub fn local_time(time: DateTime<Utc>, timezone: &Tz) -> DateTime<FixedOffset> {
    time.with_timezone(timezone).fixed_offset()
}

pub fn format_last_update(time: DateTime<Utc>, timezone: &Tz) -> String {
    time.with_timezone(timezone)
        .format(LAST_UPDATE_FORMAT)
        .to_string()
}

pub fn google_maps_link(lat: f64, lon: f64) -> String {
    format!("https://www.google.com/maps/search/?api=1&query={lat},{lon}")
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FacilityView {
    pub facility_name: String,
    pub total_places: u32,
    pub free_places: u32,
    pub occupied_places: u32,
    pub time: DateTime<FixedOffset>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl FacilityView {
    pub fn new(facility: &Facility, timezone: &Tz) -> Self {
        Self {
            facility_name: facility.facility_name.clone(),
            total_places: facility.total_places,
            free_places: facility.free_places,
            occupied_places: facility.occupied_places,
            time: local_time(facility.time, timezone),
            lat: facility.lat,
            lon: facility.lon,
        }
    }
}

pub fn facility_views(snapshot: &Snapshot, timezone: &Tz) -> Vec<FacilityView> {
    snapshot
        .facilities()
        .iter()
        .map(|f| FacilityView::new(f, timezone))
        .collect()
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopEntry {
    pub facility_name: String,
    pub free_places: u32,
    pub total_places: u32,
    pub maps_link: Option<String>,
}

/// The `n` facilities with the most free places, linked to Google Maps when located.
pub fn top_entries(snapshot: &Snapshot, n: usize) -> Vec<TopEntry> {
    aggregate::top_n(snapshot, n)
        .into_iter()
        .map(|f| TopEntry {
            facility_name: f.facility_name.clone(),
            free_places: f.free_places,
            total_places: f.total_places,
            maps_link: f.lat.zip(f.lon).map(|(lat, lon)| google_maps_link(lat, lon)),
        })
        .collect()
}

/// One row of the availability table, also used as one bar of the chart.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRow {
    pub facility_name: String,
    pub total_places: u32,
    pub free_places: u32,
    pub occupied_places: u32,
}

pub fn availability_rows(snapshot: &Snapshot) -> Vec<AvailabilityRow> {
    aggregate::ranked(snapshot)
        .into_iter()
        .map(|f| AvailabilityRow {
            facility_name: f.facility_name.clone(),
            total_places: f.total_places,
            free_places: f.free_places,
            occupied_places: f.occupied_places,
        })
        .collect()
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapPoint {
    pub facility_name: String,
    pub lat: f64,
    pub lon: f64,
    pub free_places: u32,
    pub total_places: u32,
    /// RGB, red for no free places shading to green for the most free places on the map.
    pub color: [u8; 3],
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub points: Vec<MapPoint>,
    pub view_state: Option<ViewState>,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn availability_color(free: u32, max_free: u32) -> [u8; 3] {
    if max_free == 0 {
        return [255, 0, 0];
    }
    let ratio = (f64::from(free) / f64::from(max_free)).min(1.0);
    let green = (ratio * 255.0) as u8;
    [255 - green, green, 0]
}

/// Map layer for the located facilities of `snapshot`. Unlocated facilities are
/// left out; with nothing located there is no view state to centre on.
#[allow(clippy::cast_precision_loss)]
pub fn map_view(snapshot: &Snapshot) -> MapView {
    let located: Vec<(&Facility, f64, f64)> = snapshot
        .facilities()
        .iter()
        .filter_map(|f| f.lat.zip(f.lon).map(|(lat, lon)| (f, lat, lon)))
        .collect();

    if located.is_empty() {
        return MapView::default();
    }

    let max_free = located
        .iter()
        .map(|(f, _, _)| f.free_places)
        .max()
        .unwrap_or(0);
    let count = located.len() as f64;
    let view_state = ViewState {
        latitude: located.iter().map(|(_, lat, _)| lat).sum::<f64>() / count,
        longitude: located.iter().map(|(_, _, lon)| lon).sum::<f64>() / count,
        zoom: MAP_ZOOM,
        pitch: 0.0,
    };

    let points = located
        .into_iter()
        .map(|(f, lat, lon)| MapPoint {
            facility_name: f.facility_name.clone(),
            lat,
            lon,
            free_places: f.free_places,
            total_places: f.total_places,
            color: availability_color(f.free_places, max_free),
        })
        .collect();

    MapView {
        points,
        view_state: Some(view_state),
    }
}
