//! gazetteer — batch runner for gazetteer-core
//!
//! Runs the whole pipeline with the built-in configuration:
//! download, extract, clean, query, report. Progress goes to the log; the
//! closing summary is printed to stdout.
//!
//! Any stage failure stops the run and exits non-zero with a message naming
//! the stage. Files written by earlier stages are left in place.
mod args;

use crate::args::CliArgs;
use anyhow::Context;
use clap::Parser;
use gazetteer_core::{PipelineConfig, RunSummary};

fn main() -> anyhow::Result<()> {
    let _args = CliArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_target(false)
        .init();

    let config = PipelineConfig::default();

    #[cfg(feature = "fetch")]
    let outcome = gazetteer_core::pipeline::run(&config);
    // Without HTTP support the archive must already be in the working directory.
    #[cfg(not(feature = "fetch"))]
    let outcome = gazetteer_core::pipeline::run_from_archive(&config);

    let summary = outcome.map_err(|e| {
        let stage = e.stage();
        anyhow::Error::new(e).context(format!("{stage} stage failed"))
    })?;

    print_summary(&summary).context("could not print summary")?;
    Ok(())
}

fn print_summary(summary: &RunSummary) -> std::io::Result<()> {
    use std::io::Write;
    let mut out = std::io::stdout().lock();

    writeln!(out, "Locations: {}", summary.stats.records)?;
    if let (Some(lat_min), Some(lat_max), Some(long_min), Some(long_max)) = (
        summary.stats.lat_min,
        summary.stats.lat_max,
        summary.stats.long_min,
        summary.stats.long_max,
    ) {
        writeln!(out, "  Latitude:  {lat_min:.6} .. {lat_max:.6}")?;
        writeln!(out, "  Longitude: {long_min:.6} .. {long_max:.6}")?;
    }
    if summary.clean.dropped() > 0 {
        writeln!(
            out,
            "  Dropped while cleaning: {} of {} rows",
            summary.clean.dropped(),
            summary.clean.rows_read
        )?;
    }

    writeln!(out, "\nPreview:")?;
    writeln!(out, "  {:>10}  {:<32} {:>11} {:>11}", "ID", "location_name", "lat", "long")?;
    for r in &summary.table_preview {
        writeln!(
            out,
            "  {:>10}  {:<32} {:>11.6} {:>11.6}",
            r.id, r.name, r.lat, r.long
        )?;
    }

    writeln!(out, "\nName matches: {}", summary.substring_matches.len())?;
    for r in &summary.substring_matches {
        writeln!(
            out,
            "  - {} (ID: {}, Lat: {:.6}, Long: {:.6})",
            r.name, r.id, r.lat, r.long
        )?;
    }

    writeln!(out, "Alphabetical range: {}", summary.alpha_range_count)?;

    writeln!(out, "Extreme coordinates:")?;
    for (label, value) in &summary.extremes {
        writeln!(out, "  {label}: {value}")?;
    }

    writeln!(out, "Bounding filter: {}", summary.bounding_filter_count)?;
    for r in &summary.bounding_preview {
        writeln!(out, "  - {} (Lat: {:.6}, Long: {:.6})", r.name, r.lat, r.long)?;
    }

    writeln!(out, "\nFiles written:")?;
    for path in [
        &summary.artifacts.locations_csv,
        &summary.artifacts.matches_csv,
        &summary.artifacts.workbook,
    ] {
        writeln!(out, "  {}", path.display())?;
    }
    Ok(())
}
