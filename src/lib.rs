//! Station traffic aggregation core for bike-share map visualizations.
//!
//! Loads a station feed (JSON) and trip records (CSV), counts arrivals
//! and departures per station, filters trips by a time-of-day window,
//! and maps traffic totals to marker radius and flow-color values. Map
//! rendering, viewport projection, and slider wiring are external
//! collaborators; this crate is the pure data core behind them.

pub mod error;
pub mod filter;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod scale;
pub mod traffic;

pub use error::Error;

// Re-export key components
pub use filter::{TIME_WINDOW_MINUTES, TimeFilter, filter_trips_by_time, format_minutes};
pub use loading::{DatasetConfig, load_dataset};
pub use model::{Dataset, Station, StationTraffic, Trip, canonical_station_id};
pub use scale::{RadiusScale, ScaleMode, departure_ratio, flow_bucket};
pub use traffic::{station_traffic, traffic_snapshot};
