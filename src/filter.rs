//! Time-of-day filtering of trips.

use chrono::{NaiveDateTime, Timelike};

use crate::Error;
use crate::model::Trip;

/// Half-width of the inclusion band around the selected time, in minutes.
/// A design constant, not a configuration knob.
pub const TIME_WINDOW_MINUTES: u16 = 60;

/// Minutes in a day; slider values must stay below this.
pub const MINUTES_PER_DAY: u16 = 1440;

/// The currently selected time-of-day filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFilter {
    /// No filtering; every trip passes through.
    AnyTime,
    /// Keep trips starting or ending within the window around this
    /// minute-since-midnight.
    Minute(u16),
}

impl TimeFilter {
    /// Converts a raw slider value, where `-1` means "any time".
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidData` for values outside `-1..=1439`.
    pub fn from_slider(value: i32) -> Result<Self, Error> {
        if value == -1 {
            return Ok(Self::AnyTime);
        }
        match u16::try_from(value) {
            Ok(minute) if minute < MINUTES_PER_DAY => Ok(Self::Minute(minute)),
            _ => Err(Error::InvalidData(format!(
                "slider value out of range: {value}"
            ))),
        }
    }
}

/// Minutes since midnight for a timestamp; seconds and date discarded.
fn minutes_since_midnight(ts: NaiveDateTime) -> u16 {
    (ts.hour() * 60 + ts.minute()) as u16
}

/// Keeps trips whose start or end time falls within the fixed window
/// around the selected minute.
///
/// The filter is stable: surviving trips keep their input order.
/// `AnyTime` passes every trip through unchanged.
pub fn filter_trips_by_time(trips: &[Trip], filter: TimeFilter) -> Vec<&Trip> {
    match filter {
        TimeFilter::AnyTime => trips.iter().collect(),
        TimeFilter::Minute(target) => trips
            .iter()
            .filter(|trip| {
                let started = minutes_since_midnight(trip.started_at);
                let ended = minutes_since_midnight(trip.ended_at);
                started.abs_diff(target) <= TIME_WINDOW_MINUTES
                    || ended.abs_diff(target) <= TIME_WINDOW_MINUTES
            })
            .collect(),
    }
}

/// Formats minutes-since-midnight as a 12-hour clock label, e.g. "8:50 AM".
pub fn format_minutes(minutes: u16) -> String {
    let (hour, minute) = (minutes / 60, minutes % 60);
    let (hour12, meridiem) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{hour12}:{minute:02} {meridiem}")
}
