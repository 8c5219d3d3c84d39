// crates/gazetteer-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to the
//! cleaning converter in [`crate::model::convert`].

use crate::common::CleanReport;
use crate::error::{GazetteerError, Result};
use crate::model::{convert, LocationTable};
use crate::raw::{RawRecord, COLUMNS};
use std::io::Read;
use std::path::Path;

mod cleaned;
pub mod common_io;

pub use cleaned::read_locations_csv;

/// Parses a headerless, tab-separated GeoNames dump into raw records.
///
/// Short rows are padded with `None`; a row wider than the 19-column schema means
/// the file is not a GeoNames dump and fails the whole load.
pub fn read_raw_records<R: Read>(reader: R, path: &Path) -> Result<Vec<RawRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut out = Vec::new();
    for (idx, row) in rdr.records().enumerate() {
        let row = row.map_err(|e| GazetteerError::load(path, e))?;
        if row.len() > COLUMNS.len() {
            return Err(GazetteerError::load(
                path,
                format!(
                    "line {}: expected {} fields, found {}",
                    idx + 1,
                    COLUMNS.len(),
                    row.len()
                ),
            ));
        }
        out.push(RawRecord::from_record(&row));
    }
    Ok(out)
}

/// Loads and cleans a raw dump (`BF.txt` or `BF.txt.gz`).
pub fn load_table(path: impl AsRef<Path>) -> Result<(LocationTable, CleanReport)> {
    let path = path.as_ref();
    let reader = common_io::open_stream(path)?;
    let raw = read_raw_records(reader, path)?;
    tracing::info!(rows = raw.len(), path = %path.display(), "raw dump parsed");

    let (table, report) = convert::from_raw(raw);
    if report.dropped() > 0 {
        tracing::warn!(
            missing_field = report.missing_field,
            bad_id = report.bad_id,
            bad_coordinate = report.bad_coordinate,
            duplicate_id = report.duplicate_id,
            "dropped {} of {} rows while cleaning",
            report.dropped(),
            report.rows_read
        );
    }
    tracing::info!(records = report.kept, "table cleaned");
    Ok((table, report))
}
