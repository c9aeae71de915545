mod common;

use chrono::{TimeZone, Utc};
use common::FEED_BODY;
use shared::stallingsnet::feed::{parse_facilities, parse_feed_time};

#[test]
fn parses_feed_body_in_upstream_order() -> Result<(), serde_json::Error> {
    let facilities = parse_facilities(FEED_BODY)?;
    let names: Vec<&str> = facilities.iter().map(|f| f.facility_name.as_str()).collect();
    assert_eq!(names, ["Stationsplein Laag", "Neude", "Fietsenstalling Oudegracht"]);

    let first = &facilities[0];
    assert_eq!(first.total_places, 6000);
    assert_eq!(first.free_places, 1200);
    assert_eq!(first.occupied_places, 4800);
    assert_eq!(first.time, Utc.with_ymd_and_hms(2025, 6, 2, 12, 5, 0).unwrap());
    assert_eq!(first.lat, None);
    assert_eq!(first.lon, None);
    Ok(())
}

#[test]
fn rejects_body_that_is_not_an_array() {
    assert!(parse_facilities(r#"{"facilityName": "Neude"}"#).is_err());
    assert!(parse_facilities("<html>maintenance</html>").is_err());
}

#[test]
fn rejects_record_without_counts() {
    let body = r#"[{"facilityName": "Neude", "time": "2025-06-02T14:04:00Z"}]"#;
    assert!(parse_facilities(body).is_err());
}

#[test]
fn rejects_negative_counts() {
    let body = r#"[{"facilityName": "Neude", "totalPlaces": 10, "freePlaces": -1,
        "occupiedPlaces": 11, "time": "2025-06-02T14:04:00Z"}]"#;
    assert!(parse_facilities(body).is_err());
}

#[test]
fn empty_array_is_an_empty_feed() -> Result<(), serde_json::Error> {
    assert!(parse_facilities("[]")?.is_empty());
    Ok(())
}

#[test]
fn feed_times_with_offset_are_normalized_to_utc() {
    assert_eq!(
        parse_feed_time("2025-01-15T08:30:00+01:00"),
        Utc.with_ymd_and_hms(2025, 1, 15, 7, 30, 0).single()
    );
    assert_eq!(
        parse_feed_time("2025-01-15T08:30:00Z"),
        Utc.with_ymd_and_hms(2025, 1, 15, 8, 30, 0).single()
    );
}

#[test]
fn feed_times_without_offset_are_read_as_utc() {
    assert_eq!(
        parse_feed_time("2025-01-15T08:30:00"),
        Utc.with_ymd_and_hms(2025, 1, 15, 8, 30, 0).single()
    );
    assert_eq!(
        parse_feed_time("2025-01-15 08:30:00.250").map(|t| t.timestamp_millis()),
        Utc.with_ymd_and_hms(2025, 1, 15, 8, 30, 0)
            .single()
            .map(|t| t.timestamp_millis() + 250)
    );
}

#[test]
fn unknown_time_format_is_rejected() {
    assert_eq!(parse_feed_time("15-01-2025 08:30"), None);
    let body = r#"[{"facilityName": "Neude", "totalPlaces": 10, "freePlaces": 1,
        "occupiedPlaces": 9, "time": "gisteren"}]"#;
    assert!(parse_facilities(body).is_err());
}
