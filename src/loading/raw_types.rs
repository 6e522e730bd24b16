use chrono::NaiveDateTime;
use serde::Deserialize;

use super::de::deserialize_trip_datetime;

/// Top-level station feed document; stations nest under `data`.
#[derive(Debug, Deserialize)]
pub struct StationFeed {
    pub data: StationFeedData,
}

#[derive(Debug, Deserialize)]
pub struct StationFeedData {
    pub stations: Vec<FeedStation>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FeedStation {
    pub short_name: String,
    pub name: String,
    pub lon: Option<f64>,
    pub lat: Option<f64>,
}

/// One row of the trip export. Extra columns in the file are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedTrip {
    pub start_station_id: String,
    pub end_station_id: String,
    #[serde(deserialize_with = "deserialize_trip_datetime")]
    pub started_at: NaiveDateTime,
    #[serde(deserialize_with = "deserialize_trip_datetime")]
    pub ended_at: NaiveDateTime,
}
