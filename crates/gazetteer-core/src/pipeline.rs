// crates/gazetteer-core/src/pipeline.rs

//! # Pipeline
//!
//! Fetch -> Extract -> Load -> Query -> Report, each stage gated on the previous
//! one through `?`. Artifacts of completed stages stay on disk when a later
//! stage fails.

use crate::common::{CleanReport, TableStats};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::extract::extract_archive;
use crate::loader::load_table;
use crate::model::LocationRecord;
use crate::query::{describe_extreme, run_queries};
use crate::report::{write_locations_csv, write_workbook};
use std::path::PathBuf;

/// What a finished run produced. Owned, so it outlives the table.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub stats: TableStats,
    pub clean: CleanReport,
    /// First rows of the cleaned table, for display.
    pub table_preview: Vec<LocationRecord>,
    pub substring_matches: Vec<LocationRecord>,
    pub alpha_range_count: usize,
    /// `(label, "<coordinate> - <name>")` in report order.
    pub extremes: Vec<(String, String)>,
    pub bounding_filter_count: usize,
    /// First rows of the bounding filter, for display.
    pub bounding_preview: Vec<LocationRecord>,
    pub artifacts: Artifacts,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Artifacts {
    pub locations_csv: PathBuf,
    pub matches_csv: PathBuf,
    pub workbook: PathBuf,
}

const PREVIEW_ROWS: usize = 10;

/// Full run: download the archive, then everything in [`run_from_archive`].
#[cfg(feature = "fetch")]
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    config.validate()?;
    crate::fetch::download(&config.source_url, &config.archive_path())?;
    run_from_archive(config)
}

/// Runs every stage after the download, starting from the archive already at
/// [`PipelineConfig::archive_path`].
pub fn run_from_archive(config: &PipelineConfig) -> Result<RunSummary> {
    config.validate()?;

    let text = extract_archive(&config.archive_path(), &config.work_dir, &config.text_filename)?;

    let (table, clean) = load_table(&text)?;
    let locations_csv = config.locations_csv_path();
    write_locations_csv(&locations_csv, &table)?;
    tracing::info!(path = %locations_csv.display(), rows = table.len(), "cleaned table saved");

    let results = run_queries(&table, &config.query)?;

    let matches_csv = config.matches_csv_path();
    write_locations_csv(&matches_csv, results.substring_match.iter().copied())?;

    let workbook = config.workbook_path();
    write_workbook(&workbook, table.len(), &results, &config.query)?;

    Ok(RunSummary {
        stats: table.stats(),
        clean,
        table_preview: table.iter().take(PREVIEW_ROWS).cloned().collect(),
        substring_matches: results.substring_match.iter().map(|r| (*r).clone()).collect(),
        alpha_range_count: results.alpha_range.len(),
        extremes: results
            .extremes
            .entries()
            .into_iter()
            .map(|(label, axis, r)| (label.to_string(), describe_extreme(axis, r)))
            .collect(),
        bounding_filter_count: results.bounding_filter.len(),
        bounding_preview: results
            .bounding_filter
            .iter()
            .take(PREVIEW_ROWS)
            .map(|r| (*r).clone())
            .collect(),
        artifacts: Artifacts {
            locations_csv,
            matches_csv,
            workbook,
        },
    })
}
