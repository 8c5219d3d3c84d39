// crates/gazetteer-core/src/report.rs

//! # Reporter
//!
//! Writes query results as flat CSV files and as a three-sheet workbook.
//! Existing files are overwritten without versioning.

use crate::config::QueryParams;
use crate::error::{GazetteerError, Result};
use crate::model::LocationRecord;
use crate::query::{describe_extreme, QueryResultSet};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;

pub const HEADERS: [&str; 4] = ["ID", "location_name", "lat", "long"];

pub const SHEET_MATCHES: &str = "gounghin";
pub const SHEET_ALPHA: &str = "A_to_P";
pub const SHEET_SUMMARY: &str = "Résumé";

/// Writes records as `ID,location_name,lat,long`. The header is written even when
/// there are no rows.
pub fn write_locations_csv<'a, I>(path: &Path, records: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a LocationRecord>,
{
    let err = |e: csv::Error| GazetteerError::report(path, e);

    // Headers by hand: serde only emits them alongside the first row.
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(err)?;
    wtr.write_record(HEADERS).map_err(err)?;

    let mut rows = 0;
    for r in records {
        wtr.serialize(r).map_err(err)?;
        rows += 1;
    }
    wtr.flush().map_err(|e| GazetteerError::report(path, e))?;
    Ok(rows)
}

/// A cell in the second column of the summary sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryValue {
    Count(usize),
    Text(String),
}

impl SummaryValue {
    fn blank() -> Self {
        SummaryValue::Text(String::new())
    }
}

/// Rows of the summary sheet, header row first.
pub fn summary_rows(
    total: usize,
    results: &QueryResultSet<'_>,
    params: &QueryParams,
) -> Vec<(String, SummaryValue)> {
    let mut rows = vec![
        ("Analyse".to_string(), SummaryValue::Text("Résultat".into())),
        ("Nombre total de lieux".to_string(), SummaryValue::Count(total)),
        (
            format!("Lieux avec \"{}\"", params.needle),
            SummaryValue::Count(results.substring_match.len()),
        ),
        (
            format!("Lieux {}-{}", params.alpha_lo, params.alpha_hi),
            SummaryValue::Count(results.alpha_range.len()),
        ),
        (
            format!("Lieux lat>={} et long<={}", params.lat_min, params.long_max),
            SummaryValue::Count(results.bounding_filter.len()),
        ),
        (String::new(), SummaryValue::blank()),
        ("Coordonnées extrêmes".to_string(), SummaryValue::blank()),
    ];

    for (label, axis, record) in results.extremes.entries() {
        rows.push((
            label.to_string(),
            SummaryValue::Text(describe_extreme(axis, record)),
        ));
    }
    rows
}

fn write_record_sheet(sheet: &mut Worksheet, records: &[&LocationRecord]) -> std::result::Result<(), XlsxError> {
    let bold = Format::new().set_bold();
    for (col, header) in (0u16..).zip(HEADERS) {
        sheet.write_string_with_format(0, col, header, &bold)?;
    }
    for (row, r) in (1u32..).zip(records) {
        sheet.write_number(row, 0, r.id as f64)?;
        sheet.write_string(row, 1, r.name.as_str())?;
        sheet.write_number(row, 2, r.lat)?;
        sheet.write_number(row, 3, r.long)?;
    }
    Ok(())
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    rows: &[(String, SummaryValue)],
) -> std::result::Result<(), XlsxError> {
    for (row, (label, value)) in (0u32..).zip(rows) {
        sheet.write_string(row, 0, label.as_str())?;
        match value {
            SummaryValue::Count(n) => sheet.write_number(row, 1, *n as f64)?,
            SummaryValue::Text(s) => sheet.write_string(row, 1, s.as_str())?,
        };
    }
    Ok(())
}

/// Writes the workbook: matches, alphabetical range, then the summary sheet.
///
/// The match sheet is always present, header-only when nothing matched.
pub fn write_workbook(
    path: &Path,
    total: usize,
    results: &QueryResultSet<'_>,
    params: &QueryParams,
) -> Result<()> {
    let err = |e: XlsxError| GazetteerError::report(path, e);
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_MATCHES).map_err(err)?;
    write_record_sheet(sheet, &results.substring_match).map_err(err)?;
    tracing::info!(rows = results.substring_match.len(), "sheet '{SHEET_MATCHES}' written");

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_ALPHA).map_err(err)?;
    write_record_sheet(sheet, &results.alpha_range).map_err(err)?;
    tracing::info!(rows = results.alpha_range.len(), "sheet '{SHEET_ALPHA}' written");

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_SUMMARY).map_err(err)?;
    write_summary_sheet(sheet, &summary_rows(total, results, params)).map_err(err)?;

    workbook.save(path).map_err(err)?;
    tracing::info!(path = %path.display(), "workbook saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::read_locations_csv;
    use crate::model::LocationTable;
    use crate::query::run_queries;
    use std::io::Read;

    fn sample() -> LocationTable {
        LocationTable::new(vec![
            LocationRecord::new(1, "Gounghin", 12.3, -1.5),
            LocationRecord::new(2, "Ouagadougou", 12.37, -1.52),
            LocationRecord::new(3, "Zabre", 11.17, -0.6),
        ])
    }

    #[test]
    fn csv_round_trips_the_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("burkina_location.csv");
        let table = LocationTable::new(vec![
            LocationRecord::new(2357048, "Gounghin, secteur 12", 12.066_666_7, -1.5),
            LocationRecord::new(7, "Pô", 11.0, 0.1 + 0.2),
        ]);

        assert_eq!(write_locations_csv(&path, &table).unwrap(), 2);
        assert_eq!(read_locations_csv(&path).unwrap(), table);
    }

    #[test]
    fn empty_csv_still_has_a_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gounghin.csv");
        write_locations_csv(&path, std::iter::empty()).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "ID,location_name,lat,long\n"
        );
        assert!(read_locations_csv(&path).unwrap().is_empty());
    }

    #[test]
    fn summary_lists_counts_then_extremes() {
        let table = sample();
        let params = QueryParams::default();
        let results = run_queries(&table, &params).unwrap();
        let rows = summary_rows(table.len(), &results, &params);

        assert_eq!(rows.len(), 11);
        assert_eq!(rows[1], ("Nombre total de lieux".into(), SummaryValue::Count(3)));
        assert_eq!(rows[2], ("Lieux avec \"gounghin\"".into(), SummaryValue::Count(1)));
        assert_eq!(rows[3], ("Lieux A-P".into(), SummaryValue::Count(2)));
        assert_eq!(rows[4], ("Lieux lat>=11 et long<=0.5".into(), SummaryValue::Count(3)));
        assert_eq!(
            rows[8],
            ("Latitude max".into(), SummaryValue::Text("12.370000 - Ouagadougou".into()))
        );
        assert_eq!(
            rows[9],
            ("Longitude min".into(), SummaryValue::Text("-1.520000 - Ouagadougou".into()))
        );
    }

    fn xlsx_part(path: &Path, name: &str) -> String {
        let mut xlsx = zip::ZipArchive::new(std::fs::File::open(path).unwrap()).unwrap();
        let mut xml = String::new();
        xlsx.by_name(name).unwrap().read_to_string(&mut xml).unwrap();
        xml
    }

    /// The `<c r="..">...</c>` element for one cell reference.
    fn cell<'x>(xml: &'x str, reference: &str) -> &'x str {
        let start = xml
            .find(&format!("<c r=\"{reference}\""))
            .unwrap_or_else(|| panic!("no cell {reference}"));
        let end = start + xml[start..].find("</c>").expect("closed cell");
        &xml[start..end]
    }

    #[test]
    fn workbook_cells_keep_headers_numbers_and_extremes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mini_projet.xlsx");
        let table = sample();
        let params = QueryParams {
            needle: "kaya".into(),
            ..QueryParams::default()
        };
        let results = run_queries(&table, &params).unwrap();
        write_workbook(&path, table.len(), &results, &params).unwrap();

        let strings = xlsx_part(&path, "xl/sharedStrings.xml");
        for header in HEADERS {
            assert!(strings.contains(&format!("<t>{header}</t>")), "{header}");
        }
        assert!(strings.contains("<t>11.170000 - Zabre</t>"));
        assert!(strings.contains("<t>12.370000 - Ouagadougou</t>"));
        assert!(strings.contains("<t>-1.520000 - Ouagadougou</t>"));
        assert!(strings.contains("<t>-0.600000 - Zabre</t>"));

        // Empty match sheet: the header row and nothing else.
        let matches = xlsx_part(&path, "xl/worksheets/sheet1.xml");
        assert!(matches.contains("<row r=\"1\""));
        assert!(!matches.contains("<row r=\"2\""));
        for reference in ["A1", "B1", "C1", "D1"] {
            assert!(cell(&matches, reference).contains("t=\"s\""), "{reference}");
        }

        // Alphabetical sheet: ID and coordinates are numeric cells.
        let alpha = xlsx_part(&path, "xl/worksheets/sheet2.xml");
        assert!(cell(&alpha, "A2").contains("<v>1</v>"));
        assert!(!cell(&alpha, "A2").contains("t=\"s\""));
        assert!(cell(&alpha, "C3").contains("<v>12.37</v>"));
        assert!(cell(&alpha, "B2").contains("t=\"s\""));

        // Summary counts are numbers: total, matches, A-P, bounding filter.
        let summary = xlsx_part(&path, "xl/worksheets/sheet3.xml");
        for (reference, expected) in [("B2", 3), ("B3", 0), ("B4", 2), ("B5", 3)] {
            let c = cell(&summary, reference);
            assert!(!c.contains("t=\"s\""), "{reference} should be numeric: {c}");
            assert!(c.contains(&format!("<v>{expected}</v>")), "{reference}: {c}");
        }
        assert!(cell(&summary, "B8").contains("t=\"s\""));
    }

    #[test]
    fn workbook_has_three_named_sheets_even_without_matches() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mini_projet.xlsx");
        let table = sample();
        let params = QueryParams {
            needle: "kaya".into(),
            ..QueryParams::default()
        };
        let results = run_queries(&table, &params).unwrap();
        assert!(results.substring_match.is_empty());

        write_workbook(&path, table.len(), &results, &params).unwrap();

        let mut xlsx = zip::ZipArchive::new(std::fs::File::open(&path).unwrap()).unwrap();
        let mut manifest = String::new();
        xlsx.by_name("xl/workbook.xml")
            .unwrap()
            .read_to_string(&mut manifest)
            .unwrap();
        let first = manifest.find("name=\"gounghin\"").expect("gounghin sheet");
        let second = manifest.find("name=\"A_to_P\"").expect("A_to_P sheet");
        let third = manifest.find("name=\"Résumé\"").expect("summary sheet");
        assert!(first < second && second < third);
    }
}
