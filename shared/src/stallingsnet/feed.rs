use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub const FEED_URL: &str = "https://stallingsnet.nl/api/1/parkingcount/utrecht";

const NAIVE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// One bicycle-parking facility as reported by the feed at the latest poll.
///
/// `lat`/`lon` are never sent upstream; they are filled in from the coordinate
/// registry after parsing and stay `None` when no registry entry matches.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub facility_name: String,
    pub total_places: u32,
    pub free_places: u32,
    pub occupied_places: u32,
    #[serde(deserialize_with = "deserialize_feed_time")]
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

/// Decodes a feed response body. The body must be a JSON array of facilities.
pub fn parse_facilities(body: &str) -> Result<Vec<Facility>, serde_json::Error> {
    serde_json::from_str(body)
}

/// Accepts RFC 3339 timestamps and offset-less timestamps, which are read as UTC.
fn deserialize_feed_time<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_feed_time(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("unrecognized timestamp format: {raw}"))
    })
}

pub fn parse_feed_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }
    NAIVE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}
