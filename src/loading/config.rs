use std::path::PathBuf;

use crate::Error;

/// File locations for one session's datasets.
#[derive(Debug, Clone, Default)]
pub struct DatasetConfig {
    /// Station feed JSON with a `data.stations` array.
    pub stations_path: PathBuf,
    /// Trip records CSV.
    pub trips_path: PathBuf,
}

impl DatasetConfig {
    pub fn new(stations_path: impl Into<PathBuf>, trips_path: impl Into<PathBuf>) -> Self {
        Self {
            stations_path: stations_path.into(),
            trips_path: trips_path.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if !self.stations_path.exists() {
            return Err(Error::InvalidData(format!(
                "Station file not found: {}",
                self.stations_path.display()
            )));
        }
        if !self.trips_path.exists() {
            return Err(Error::InvalidData(format!(
                "Trip file not found: {}",
                self.trips_path.display()
            )));
        }
        Ok(())
    }
}
