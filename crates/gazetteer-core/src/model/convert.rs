// crates/gazetteer-core/src/model/convert.rs
use crate::common::{CleanReport, DropReason};
use crate::model::location::{LocationRecord, LocationTable};
use crate::raw::RawRecord;
use std::collections::HashSet;

/// Parses a trimmed numeric field, keeping only finite values.
///
/// Anything that fails coercion (`"N/A"`, `"inf"`, `""`) becomes `None`.
pub fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Projects one raw line onto `{ID, location_name, lat, long}`.
///
/// Order matters: a row missing any projected field is a `MissingField` drop even
/// if its coordinates would also fail to parse.
pub fn clean_record(raw: &RawRecord) -> Result<LocationRecord, DropReason> {
    let (Some(id), Some(name), Some(lat), Some(long)) = (
        raw.geonameid.as_deref(),
        raw.name.as_deref(),
        raw.latitude.as_deref(),
        raw.longitude.as_deref(),
    ) else {
        return Err(DropReason::MissingField);
    };

    let id: i64 = id.trim().parse().map_err(|_| DropReason::BadId)?;
    let lat = parse_finite(lat).ok_or(DropReason::BadCoordinate)?;
    let long = parse_finite(long).ok_or(DropReason::BadCoordinate)?;

    Ok(LocationRecord::new(id, name, lat, long))
}

/// **Standard Converter:** Raw -> cleaned table.
///
/// Keeps source order; the first occurrence of an ID wins.
pub fn from_raw<I>(raw_records: I) -> (LocationTable, CleanReport)
where
    I: IntoIterator<Item = RawRecord>,
{
    let mut report = CleanReport::default();
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for raw in raw_records {
        report.rows_read += 1;
        match clean_record(&raw) {
            Ok(rec) if !seen.insert(rec.id) => report.record_drop(DropReason::DuplicateId),
            Ok(rec) => records.push(rec),
            Err(reason) => report.record_drop(reason),
        }
    }

    report.kept = records.len();
    (LocationTable::new(records), report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, name: &str, lat: &str, long: &str) -> RawRecord {
        let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
        RawRecord {
            geonameid: opt(id),
            name: opt(name),
            latitude: opt(lat),
            longitude: opt(long),
            ..RawRecord::default()
        }
    }

    #[test]
    fn parse_finite_rejects_garbage_and_infinities() {
        assert_eq!(parse_finite(" 12.34 "), Some(12.34));
        assert_eq!(parse_finite("-0.6"), Some(-0.6));
        assert_eq!(parse_finite("N/A"), None);
        assert_eq!(parse_finite("inf"), None);
        assert_eq!(parse_finite("NaN"), None);
    }

    #[test]
    fn cleaning_drops_incomplete_and_uncoercible_rows() {
        let rows = vec![
            raw("1", "Gounghin", "12.3", "-1.5"),
            raw("2", "", "12.0", "-1.0"),
            raw("3", "Koudougou", "north", "-2.36"),
            raw("x4", "Bobo", "11.18", "-4.29"),
            raw("5", "Zabre", "11.17", ""),
            raw("6", "Zabre", "11.17", "-0.6"),
        ];

        let (table, report) = from_raw(rows);

        let ids: Vec<i64> = table.iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 6]);
        assert_eq!(report.rows_read, 6);
        assert_eq!(report.kept, 2);
        assert_eq!(report.missing_field, 2);
        assert_eq!(report.bad_coordinate, 1);
        assert_eq!(report.bad_id, 1);
        assert_eq!(report.dropped(), 4);
    }

    #[test]
    fn null_like_words_are_ordinary_names() {
        let rows = vec![
            raw("1", "NA", "12.0", "-1.0"),
            raw("2", "null", "12.1", "-1.1"),
            raw("3", "Zabre", "nan", "-0.6"),
        ];
        let (table, report) = from_raw(rows);
        let names: Vec<&str> = table.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["NA", "null"]);
        assert_eq!(report.bad_coordinate, 1);
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let rows = vec![
            raw("7", "Ouagadougou", "12.37", "-1.52"),
            raw("7", "Ouaga bis", "12.0", "-1.0"),
        ];
        let (table, report) = from_raw(rows);
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].name, "Ouagadougou");
        assert_eq!(report.duplicate_id, 1);
    }

    #[test]
    fn every_kept_record_has_finite_coordinates() {
        let rows = vec![
            raw("1", "A", "1e400", "0"),
            raw("2", "B", "-inf", "0"),
            raw("3", "C", "10.5", "0.25"),
        ];
        let (table, _) = from_raw(rows);
        assert!(table.iter().all(|r| r.lat.is_finite() && r.long.is_finite()));
        assert_eq!(table.len(), 1);
    }
}
