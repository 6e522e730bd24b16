use chrono::NaiveDateTime;
use serde::Deserialize;

/// Timestamp formats seen across trip exports; the Bluebikes dump uses
/// the first, ISO `T` separators appear in older files.
const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
];

pub(super) fn deserialize_trip_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&raw, format).ok())
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp: {raw}")))
}
