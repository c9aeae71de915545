use crate::snapshot::Snapshot;
use crate::stallingsnet::feed::Facility;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_stallingen: usize,
    pub totaal_plekken: u64,
    pub totaal_vrij: u64,
    pub totaal_bezet: u64,
    /// Most recent observation time in the snapshot, `None` when it is empty.
    pub latest_time: Option<DateTime<Utc>>,
}

pub fn summarize(snapshot: &Snapshot) -> SummaryStats {
    let facilities = snapshot.facilities();
    let names: HashSet<&str> = facilities
        .iter()
        .map(|f| f.facility_name.as_str())
        .collect();

    SummaryStats {
        total_stallingen: names.len(),
        totaal_plekken: facilities.iter().map(|f| u64::from(f.total_places)).sum(),
        totaal_vrij: facilities.iter().map(|f| u64::from(f.free_places)).sum(),
        totaal_bezet: facilities.iter().map(|f| u64::from(f.occupied_places)).sum(),
        latest_time: facilities.iter().map(|f| f.time).max(),
    }
}

/// All facilities ordered by free places, most first. Equal counts keep snapshot order.
pub fn ranked(snapshot: &Snapshot) -> Vec<&Facility> {
    let mut facilities: Vec<&Facility> = snapshot.facilities().iter().collect();
    facilities.sort_by(|a, b| b.free_places.cmp(&a.free_places));
    facilities
}

pub fn top_n(snapshot: &Snapshot, n: usize) -> Vec<&Facility> {
    let mut facilities = ranked(snapshot);
    facilities.truncate(n);
    facilities
}

/// Highest free-place count in the snapshot, 0 when it is empty.
pub fn max_free(snapshot: &Snapshot) -> u32 {
    snapshot
        .facilities()
        .iter()
        .map(|f| f.free_places)
        .max()
        .unwrap_or(0)
}
