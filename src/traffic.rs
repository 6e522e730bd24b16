//! Per-station arrival and departure counting.

use hashbrown::HashMap;

use crate::filter::{TimeFilter, filter_trips_by_time};
use crate::model::{Dataset, Station, StationTraffic, Trip, canonical_station_id};

/// Counts arrivals, departures, and total traffic for every station.
///
/// Trips are grouped by their canonical endpoint ids and matched against
/// each station's canonical `short_name`. Stations with no matching trips
/// report zeros. Trips referencing unknown stations contribute nothing
/// and are not an error.
///
/// Accepts any iterator of borrowed trips so the baseline pass (the full
/// trip slice) and a filtered pass share one code path. Inputs are never
/// mutated; the result is a fresh collection in station input order.
pub fn station_traffic<'a, I>(stations: &[Station], trips: I) -> Vec<StationTraffic>
where
    I: IntoIterator<Item = &'a Trip>,
{
    let mut departures: HashMap<&str, usize> = HashMap::new();
    let mut arrivals: HashMap<&str, usize> = HashMap::new();
    for trip in trips {
        *departures
            .entry(canonical_station_id(&trip.start_station_id))
            .or_default() += 1;
        *arrivals
            .entry(canonical_station_id(&trip.end_station_id))
            .or_default() += 1;
    }

    stations
        .iter()
        .map(|station| {
            let id = canonical_station_id(&station.short_name);
            let departures = departures.get(id).copied().unwrap_or(0);
            let arrivals = arrivals.get(id).copied().unwrap_or(0);
            StationTraffic {
                short_name: id.to_owned(),
                arrivals,
                departures,
                total: arrivals + departures,
            }
        })
        .collect()
}

/// Runs one filter-then-aggregate pass over a loaded dataset.
///
/// This is the per-slider-event entry point: trips are narrowed to the
/// selected time window, then counted per station.
pub fn traffic_snapshot(dataset: &Dataset, filter: TimeFilter) -> Vec<StationTraffic> {
    let trips = filter_trips_by_time(&dataset.trips, filter);
    station_traffic(&dataset.stations, trips.iter().copied())
}
