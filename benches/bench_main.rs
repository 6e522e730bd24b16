use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};

use dockflow::{
    Station, TimeFilter, Trip, filter_trips_by_time, station_traffic,
};
use geo::Point;

fn synthetic_stations(count: usize) -> Vec<Station> {
    (0..count)
        .map(|i| Station {
            short_name: format!("S{i:04}"),
            name: None,
            geometry: Point::new(-71.0 + i as f64 * 1e-4, 42.3 + i as f64 * 1e-4),
        })
        .collect()
}

fn synthetic_trips(count: usize, stations: usize) -> Vec<Trip> {
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    (0..count)
        .map(|i| {
            let start_minute = (i * 7) % 1380;
            Trip {
                start_station_id: format!("S{:04}", i % stations),
                end_station_id: format!("S{:04}", (i * 13) % stations),
                started_at: date
                    .and_hms_opt((start_minute / 60) as u32, (start_minute % 60) as u32, 0)
                    .unwrap(),
                ended_at: date
                    .and_hms_opt(((start_minute + 25) / 60) as u32, ((start_minute + 25) % 60) as u32, 0)
                    .unwrap(),
            }
        })
        .collect()
}

fn bench_traffic(c: &mut Criterion) {
    let stations = synthetic_stations(500);
    let trips = synthetic_trips(100_000, 500);

    c.bench_function("station_traffic_100k", |b| {
        b.iter(|| station_traffic(black_box(&stations), black_box(&trips)));
    });

    c.bench_function("filter_trips_100k", |b| {
        b.iter(|| filter_trips_by_time(black_box(&trips), TimeFilter::Minute(510)));
    });
}

criterion_group!(benches, bench_traffic);
criterion_main!(benches);
