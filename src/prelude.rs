// Re-export key components
pub use crate::error::Error;
pub use crate::filter::{TIME_WINDOW_MINUTES, TimeFilter, filter_trips_by_time, format_minutes};
pub use crate::loading::{DatasetConfig, load_dataset, stations_from_reader, trips_from_reader};
pub use crate::model::{Dataset, Station, StationTraffic, Trip, canonical_station_id};
pub use crate::scale::{RadiusScale, ScaleMode, departure_ratio, flow_bucket};
pub use crate::traffic::{station_traffic, traffic_snapshot};
