// crates/gazetteer-core/src/query.rs

//! # Query Engine
//!
//! Bundles the four analyses into one [`QueryResultSet`]. Results borrow from the
//! table; nothing is copied.

use crate::config::QueryParams;
use crate::error::Result;
use crate::model::{LocationRecord, LocationTable};
use crate::traits::GazetteerQuery;

/// The records reaching each coordinate bound, looked up independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremes<'a> {
    pub lat_min: &'a LocationRecord,
    pub lat_max: &'a LocationRecord,
    pub long_min: &'a LocationRecord,
    pub long_max: &'a LocationRecord,
}

/// Which coordinate an extreme is taken on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Lat,
    Long,
}

impl<'a> Extremes<'a> {
    /// `(label, axis, record)` in report order.
    pub fn entries(&self) -> [(&'static str, Axis, &'a LocationRecord); 4] {
        [
            ("Latitude min", Axis::Lat, self.lat_min),
            ("Latitude max", Axis::Lat, self.lat_max),
            ("Longitude min", Axis::Long, self.long_min),
            ("Longitude max", Axis::Long, self.long_max),
        ]
    }
}

/// Renders an extreme as `"<coordinate> - <location_name>"`.
pub fn describe_extreme(axis: Axis, record: &LocationRecord) -> String {
    let value = match axis {
        Axis::Lat => record.lat,
        Axis::Long => record.long,
    };
    format!("{value:.6} - {}", record.name)
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryResultSet<'a> {
    pub substring_match: Vec<&'a LocationRecord>,
    pub alpha_range: Vec<&'a LocationRecord>,
    pub extremes: Extremes<'a>,
    pub bounding_filter: Vec<&'a LocationRecord>,
}

/// Runs all four analyses with the given parameters.
pub fn run_queries<'a>(table: &'a LocationTable, params: &QueryParams) -> Result<QueryResultSet<'a>> {
    let substring_match = table.substring_match(&params.needle);
    tracing::info!(needle = %params.needle, matches = substring_match.len(), "substring match");

    let alpha_range = table.alpha_range(params.alpha_lo, params.alpha_hi);
    tracing::info!(
        lo = %params.alpha_lo,
        hi = %params.alpha_hi,
        matches = alpha_range.len(),
        "alphabetical range"
    );

    let extremes = table.extremes()?;
    for (label, axis, record) in extremes.entries() {
        tracing::info!("{label}: {}", describe_extreme(axis, record));
    }

    let bounding_filter = table.bounding_filter(params.lat_min, params.long_max);
    tracing::info!(
        lat_min = params.lat_min,
        long_max = params.long_max,
        matches = bounding_filter.len(),
        "bounding filter"
    );

    Ok(QueryResultSet {
        substring_match,
        alpha_range,
        extremes,
        bounding_filter,
    })
}
