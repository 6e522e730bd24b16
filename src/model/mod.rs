//! Domain types for station traffic aggregation.

use chrono::NaiveDateTime;
use geo::Point;

/// Normalizes a station identifier for lookup.
///
/// Station feeds and trip records may disagree on surrounding whitespace;
/// both sides go through this before any comparison.
pub fn canonical_station_id(raw: &str) -> &str {
    raw.trim()
}

/// A fixed bike-share dock location.
#[derive(Debug, Clone)]
pub struct Station {
    /// Short code identifying the station, unique within a feed.
    pub short_name: String,
    /// Human-readable name, when the feed provides one.
    pub name: Option<String>,
    /// Position as (lon, lat).
    pub geometry: Point,
}

impl Station {
    /// Display label for tooltips, falling back to the short code.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.short_name)
    }
}

/// A single rental event between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub start_station_id: String,
    pub end_station_id: String,
    pub started_at: NaiveDateTime,
    pub ended_at: NaiveDateTime,
}

/// Per-station counts from one aggregation pass.
///
/// Produced fresh on every pass; never accumulated across passes.
/// `total` is always `arrivals + departures`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationTraffic {
    /// Canonical id of the station this record belongs to.
    pub short_name: String,
    pub arrivals: usize,
    pub departures: usize,
    pub total: usize,
}

/// Stations and trips for one loaded session.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub stations: Vec<Station>,
    pub trips: Vec<Trip>,
}
