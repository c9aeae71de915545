#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use shared::snapshot::Snapshot;
use shared::stallingsnet::feed::Facility;

pub fn observed_at(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 14, minute, 0)
        .single()
        .expect("fixture time is unambiguous")
}

pub fn facility(name: &str, free: u32) -> Facility {
    Facility {
        facility_name: name.to_string(),
        total_places: free + 100,
        free_places: free,
        occupied_places: 100,
        time: observed_at(0),
        lat: None,
        lon: None,
    }
}

/// Stationsplein (5 free), Neude (12 free), Knoop (0 free), in that order.
pub fn three_facilities() -> Snapshot {
    Snapshot::new(vec![
        facility("Stationsplein", 5),
        facility("Neude", 12),
        facility("Knoop", 0),
    ])
}

pub const FEED_BODY: &str = r#"[
    {"facilityName": "Stationsplein Laag", "totalPlaces": 6000, "freePlaces": 1200, "occupiedPlaces": 4800, "time": "2025-06-02T14:05:00+02:00"},
    {"facilityName": "Neude", "totalPlaces": 2000, "freePlaces": 35, "occupiedPlaces": 1965, "time": "2025-06-02T14:04:00+02:00"},
    {"facilityName": "Fietsenstalling Oudegracht", "totalPlaces": 300, "freePlaces": 80, "occupiedPlaces": 220, "time": "2025-06-02T14:03:00+02:00", "facilityId": 17}
]"#;
