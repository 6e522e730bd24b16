//! Loading station and trip datasets from local files.
//!
//! A load either succeeds completely or fails; the traffic core is never
//! handed partial data. Individual malformed trip rows are the one
//! exception: they are skipped with a warning, matching how upstream
//! exports mix well-formed and broken records in the same file.

mod config;
mod de;
mod raw_types;

pub use config::DatasetConfig;
pub use raw_types::{FeedStation, FeedTrip, StationFeed};

use std::fs::File;
use std::io::Read;

use geo::Point;
use hashbrown::HashSet;
use log::{info, warn};

use crate::Error;
use crate::model::{Dataset, Station, Trip, canonical_station_id};

/// Position substituted for stations with missing or non-finite
/// coordinates.
const PLACEHOLDER_POSITION: (f64, f64) = (0.0, 0.0);

const TRIP_COLUMNS: [&str; 4] = [
    "start_station_id",
    "end_station_id",
    "started_at",
    "ended_at",
];

/// Loads stations and trips for one session.
///
/// # Errors
///
/// Returns an error if either path is missing, unreadable, or fails to
/// parse at the document level.
pub fn load_dataset(config: &DatasetConfig) -> Result<Dataset, Error> {
    config.validate()?;

    info!("Loading stations: {}", config.stations_path.display());
    let stations = stations_from_reader(File::open(&config.stations_path)?)?;

    info!("Loading trips: {}", config.trips_path.display());
    let trips = trips_from_reader(File::open(&config.trips_path)?)?;

    info!(
        "Loaded {} stations and {} trips",
        stations.len(),
        trips.len()
    );
    Ok(Dataset { stations, trips })
}

/// Parses a station feed document (`data.stations`) from JSON.
///
/// Stations with unusable coordinates are kept at a placeholder position;
/// stations with an empty or duplicate id are dropped with a warning.
///
/// # Errors
///
/// Returns an error if the document is not valid JSON in the expected
/// shape.
pub fn stations_from_reader<R: Read>(reader: R) -> Result<Vec<Station>, Error> {
    let feed: StationFeed = serde_json::from_reader(reader)?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut stations = Vec::with_capacity(feed.data.stations.len());
    for raw in feed.data.stations {
        let id = canonical_station_id(&raw.short_name);
        if id.is_empty() {
            warn!("Skipping station with empty short_name: {:?}", raw.name);
            continue;
        }
        if !seen.insert(id.to_owned()) {
            warn!("Duplicate station id '{id}', keeping the first record");
            continue;
        }
        stations.push(Station {
            geometry: station_position(&raw),
            short_name: raw.short_name,
            name: (!raw.name.is_empty()).then_some(raw.name),
        });
    }
    Ok(stations)
}

fn station_position(raw: &FeedStation) -> Point {
    match (raw.lon, raw.lat) {
        (Some(lon), Some(lat)) if lon.is_finite() && lat.is_finite() => Point::new(lon, lat),
        _ => {
            warn!(
                "Invalid coordinates for station '{}', using placeholder",
                raw.short_name
            );
            Point::new(PLACEHOLDER_POSITION.0, PLACEHOLDER_POSITION.1)
        }
    }
}

/// Parses trip records from CSV.
///
/// Rows that fail to deserialize are skipped rather than failing the
/// load; the skip count is logged once at the end.
///
/// # Errors
///
/// Returns an error if the header row is unreadable or a required column
/// is missing.
pub fn trips_from_reader<R: Read>(reader: R) -> Result<Vec<Trip>, Error> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader.headers()?.clone();
    for required in TRIP_COLUMNS {
        if !headers.iter().any(|column| column == required) {
            return Err(Error::InvalidData(format!(
                "Trips CSV missing column '{required}'"
            )));
        }
    }

    let mut skipped = 0usize;
    let trips: Vec<Trip> = reader
        .deserialize::<FeedTrip>()
        .filter_map(|row| match row {
            Ok(raw) => Some(Trip {
                start_station_id: raw.start_station_id,
                end_station_id: raw.end_station_id,
                started_at: raw.started_at,
                ended_at: raw.ended_at,
            }),
            Err(_) => {
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        warn!("Skipped {skipped} malformed trip rows");
    }
    Ok(trips)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATIONS_JSON: &str = r#"{
        "data": {
            "stations": [
                {"short_name": "A32000", "name": "Central Square", "lon": -71.1031, "lat": 42.3656},
                {"short_name": " A32000 ", "name": "Central Square dup", "lon": -71.1, "lat": 42.3},
                {"short_name": "B32001", "name": "", "lat": 42.3601},
                {"short_name": "  ", "name": "nameless"}
            ]
        }
    }"#;

    #[test]
    fn parses_station_feed_with_fallbacks() {
        let stations = stations_from_reader(STATIONS_JSON.as_bytes()).unwrap();

        assert_eq!(stations.len(), 2);

        assert_eq!(stations[0].short_name, "A32000");
        assert_eq!(stations[0].name.as_deref(), Some("Central Square"));
        assert_eq!(stations[0].geometry.x(), -71.1031);
        assert_eq!(stations[0].geometry.y(), 42.3656);

        // missing lon lands on the placeholder, empty name becomes None
        assert_eq!(stations[1].short_name, "B32001");
        assert_eq!(stations[1].name, None);
        assert_eq!(stations[1].geometry.x(), 0.0);
        assert_eq!(stations[1].geometry.y(), 0.0);
        assert_eq!(stations[1].label(), "B32001");
    }

    #[test]
    fn rejects_malformed_station_document() {
        assert!(stations_from_reader(&b"{\"data\": {}}"[..]).is_err());
        assert!(stations_from_reader(&b"not json"[..]).is_err());
    }

    #[test]
    fn parses_trips_and_skips_broken_rows() {
        let csv = "\
ride_id,start_station_id,end_station_id,started_at,ended_at
r1,A32000,B32001,2024-03-01 08:15:00,2024-03-01 08:40:12
r2,B32001,A32000,not-a-timestamp,2024-03-01 09:00:00
r3,A32000,A32000,2024-03-02T17:05:00,2024-03-02T17:20:00
";
        let trips = trips_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].start_station_id, "A32000");
        assert_eq!(trips[0].started_at.to_string(), "2024-03-01 08:15:00");
        assert_eq!(trips[1].end_station_id, "A32000");
        assert_eq!(trips[1].ended_at.to_string(), "2024-03-02 17:20:00");
    }

    #[test]
    fn reports_missing_trip_columns() {
        let csv = "start_station_id,started_at,ended_at\nA,2024-03-01 08:00:00,2024-03-01 08:10:00\n";

        let err = trips_from_reader(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, Error::InvalidData(ref msg) if msg.contains("end_station_id")));
    }

    #[test]
    fn load_aborts_on_missing_files() {
        let config = DatasetConfig::new("/nonexistent/stations.json", "/nonexistent/trips.csv");

        assert!(load_dataset(&config).is_err());
    }
}
