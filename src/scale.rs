//! Traffic-to-visual scale policies.
//!
//! Marker radius uses a square-root scale so marker *area*, not radius,
//! grows linearly with traffic. Flow direction is quantized into three
//! buckets driving a two-color blend between all-arrivals and
//! all-departures.

use crate::filter::TimeFilter;
use crate::model::StationTraffic;

/// Radius range endpoints per mode, in pixels.
const UNFILTERED_RANGE: (f64, f64) = (3.0, 25.0);
const FILTERED_RANGE: (f64, f64) = (3.0, 50.0);

/// Which radius range applies.
///
/// Filtered traffic counts are typically smaller and more concentrated,
/// so the filtered range is wider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMode {
    Unfiltered,
    Filtered,
}

impl From<TimeFilter> for ScaleMode {
    fn from(filter: TimeFilter) -> Self {
        match filter {
            TimeFilter::AnyTime => Self::Unfiltered,
            TimeFilter::Minute(_) => Self::Filtered,
        }
    }
}

/// Square-root scale from traffic counts to marker radius.
///
/// The `(domain, range)` pair is fixed at construction; toggling the
/// filter builds a new scale instead of mutating this one.
#[derive(Debug, Clone, Copy)]
pub struct RadiusScale {
    max_total: usize,
    range: (f64, f64),
}

impl RadiusScale {
    /// Builds a scale over the domain `[0, max_total]`.
    pub fn new(mode: ScaleMode, max_total: usize) -> Self {
        let range = match mode {
            ScaleMode::Unfiltered => UNFILTERED_RANGE,
            ScaleMode::Filtered => FILTERED_RANGE,
        };
        Self { max_total, range }
    }

    /// Builds a scale sized to an aggregation pass.
    pub fn from_traffic(mode: ScaleMode, traffic: &[StationTraffic]) -> Self {
        let max_total = traffic.iter().map(|t| t.total).max().unwrap_or(0);
        Self::new(mode, max_total)
    }

    /// Marker radius for a traffic count.
    ///
    /// Zero traffic sits at the range floor, never at zero, so idle
    /// stations stay visible. An all-zero domain degenerates to the floor.
    #[allow(clippy::cast_precision_loss)]
    pub fn radius(&self, total: usize) -> f64 {
        let (lo, hi) = self.range;
        if self.max_total == 0 {
            return lo;
        }
        let t = (total.min(self.max_total) as f64 / self.max_total as f64).sqrt();
        lo + (hi - lo) * t
    }
}

/// Fraction of a station's traffic that is departures.
///
/// Zero when the station saw no traffic at all; counts are integers, so
/// the ratio is always a finite value in `[0, 1]`.
#[allow(clippy::cast_precision_loss)]
pub fn departure_ratio(departures: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        departures as f64 / total as f64
    }
}

/// Quantizes a `[0, 1]` flow ratio into three buckets: mostly arrivals
/// (0.0), balanced (0.5), mostly departures (1.0). Out-of-range input is
/// clamped.
pub fn flow_bucket(ratio: f64) -> f64 {
    let ratio = ratio.clamp(0.0, 1.0);
    if ratio < 1.0 / 3.0 {
        0.0
    } else if ratio < 2.0 / 3.0 {
        0.5
    } else {
        1.0
    }
}
