// crates/gazetteer-core/src/extract.rs

//! # Extractor
//!
//! Unpacks the downloaded zip next to it and hands the raw dump path to the loader.

use crate::error::{GazetteerError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Extracts every entry of `archive` into `dest_dir` and returns `dest_dir/expected`.
///
/// Entry paths are sanitized by `zip`, so nothing is written outside `dest_dir`.
/// Existing files with the same names are overwritten.
pub fn extract_archive(archive: &Path, dest_dir: &Path, expected: &str) -> Result<PathBuf> {
    let file = File::open(archive).map_err(|e| GazetteerError::extraction(archive, e))?;
    let mut zip =
        ZipArchive::new(BufReader::new(file)).map_err(|e| GazetteerError::extraction(archive, e))?;

    for name in zip.file_names() {
        tracing::debug!(entry = name, "archive entry");
    }
    if zip.index_for_name(expected).is_none() {
        return Err(GazetteerError::extraction(
            archive,
            format!("archive does not contain {expected}"),
        ));
    }

    zip.extract(dest_dir)
        .map_err(|e| GazetteerError::extraction(archive, e))?;
    tracing::info!(entries = zip.len(), dir = %dest_dir.display(), "archive extracted");

    let text = dest_dir.join(expected);
    if !text.is_file() {
        return Err(GazetteerError::extraction(
            archive,
            format!("{} missing after extraction", text.display()),
        ));
    }
    Ok(text)
}
