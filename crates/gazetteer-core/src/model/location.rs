// crates/gazetteer-core/src/model/location.rs
use crate::common::TableStats;
use serde::{Deserialize, Serialize};

/// A cleaned gazetteer entry.
///
/// Serialized with the column names of the output files
/// (`ID,location_name,lat,long`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "location_name")]
    pub name: String,
    pub lat: f64,
    pub long: f64,
}

impl LocationRecord {
    pub fn new(id: i64, name: impl Into<String>, lat: f64, long: f64) -> Self {
        Self {
            id,
            name: name.into(),
            lat,
            long,
        }
    }
}

/// The cleaned table, in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocationTable {
    records: Vec<LocationRecord>,
}

impl LocationTable {
    pub fn new(records: Vec<LocationRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LocationRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> TableStats {
        let fold = |pick: fn(&LocationRecord) -> f64, better: fn(f64, f64) -> f64| {
            self.records.iter().map(pick).reduce(better)
        };

        TableStats {
            records: self.records.len(),
            lat_min: fold(|r| r.lat, f64::min),
            lat_max: fold(|r| r.lat, f64::max),
            long_min: fold(|r| r.long, f64::min),
            long_max: fold(|r| r.long, f64::max),
        }
    }
}

impl<'a> IntoIterator for &'a LocationTable {
    type Item = &'a LocationRecord;
    type IntoIter = std::slice::Iter<'a, LocationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<LocationRecord> for LocationTable {
    fn from_iter<I: IntoIterator<Item = LocationRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
