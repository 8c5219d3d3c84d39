// crates/gazetteer-core/src/loader/cleaned.rs
use crate::error::{GazetteerError, Result};
use crate::model::{LocationRecord, LocationTable};
use std::path::Path;

/// Reads back a cleaned CSV (`ID,location_name,lat,long`) written by the reporter.
pub fn read_locations_csv(path: impl AsRef<Path>) -> Result<LocationTable> {
    let path = path.as_ref();
    let mut rdr = csv::Reader::from_path(path).map_err(|e| GazetteerError::load(path, e))?;

    rdr.deserialize::<LocationRecord>()
        .map(|row| row.map_err(|e| GazetteerError::load(path, e)))
        .collect()
}
