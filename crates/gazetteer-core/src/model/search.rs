// crates/gazetteer-core/src/model/search.rs
use super::location::{LocationRecord, LocationTable};
use crate::error::{GazetteerError, Result};
use crate::query::Extremes;
use crate::traits::{fold_case, GazetteerQuery, NameMatch};

/// The first record whose key beats every earlier one.
///
/// `better(candidate, current)` must be strict so ties keep the earlier record.
fn first_extreme(
    records: &[LocationRecord],
    key: fn(&LocationRecord) -> f64,
    better: fn(f64, f64) -> bool,
) -> Option<&LocationRecord> {
    let mut iter = records.iter();
    let mut best = iter.next()?;
    for r in iter {
        if better(key(r), key(best)) {
            best = r;
        }
    }
    Some(best)
}

impl GazetteerQuery for [LocationRecord] {
    fn substring_match(&self, needle: &str) -> Vec<&LocationRecord> {
        let q = fold_case(needle);
        // Flat scan, source order.
        self.iter()
            .filter(|r| r.name_contains_folded(&q))
            .collect()
    }

    fn alpha_range(&self, lo: char, hi: char) -> Vec<&LocationRecord> {
        let lo = lo.to_string();
        let hi = hi.to_string();
        self.iter()
            .filter(|r| {
                r.initial_upper()
                    .is_some_and(|c| lo.as_str() <= c.as_str() && c.as_str() <= hi.as_str())
            })
            .collect()
    }

    fn extremes(&self) -> Result<Extremes<'_>> {
        let empty = || GazetteerError::EmptyTable {
            operation: "extremes",
        };
        let lower = |a: f64, b: f64| a < b;
        let higher = |a: f64, b: f64| a > b;

        Ok(Extremes {
            lat_min: first_extreme(self, |r| r.lat, lower).ok_or_else(empty)?,
            lat_max: first_extreme(self, |r| r.lat, higher).ok_or_else(empty)?,
            long_min: first_extreme(self, |r| r.long, lower).ok_or_else(empty)?,
            long_max: first_extreme(self, |r| r.long, higher).ok_or_else(empty)?,
        })
    }

    fn bounding_filter(&self, lat_min: f64, long_max: f64) -> Vec<&LocationRecord> {
        self.iter()
            .filter(|r| r.lat >= lat_min && r.long <= long_max)
            .collect()
    }
}

impl GazetteerQuery for LocationTable {
    fn substring_match(&self, needle: &str) -> Vec<&LocationRecord> {
        self.records().substring_match(needle)
    }

    fn alpha_range(&self, lo: char, hi: char) -> Vec<&LocationRecord> {
        self.records().alpha_range(lo, hi)
    }

    fn extremes(&self) -> Result<Extremes<'_>> {
        self.records().extremes()
    }

    fn bounding_filter(&self, lat_min: f64, long_max: f64) -> Vec<&LocationRecord> {
        self.records().bounding_filter(lat_min, long_max)
    }
}
