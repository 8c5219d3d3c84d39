// crates/gazetteer-core/src/fetch.rs

//! # Fetcher
//!
//! Single best-effort download of the source archive. The body is streamed to
//! `<dest>.part` and only renamed to `dest` once fully written, so a failed
//! transfer never leaves something that looks like a complete archive.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

fn part_path(dest: &Path) -> PathBuf {
    let mut name = dest.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

/// Copies `reader` to `dest` through a temporary `.part` file.
///
/// Returns the number of bytes written. On error the partial file is removed and
/// `dest` is left untouched: an archive from an earlier run stays on disk, but the
/// error stops the pipeline before anything reads it.
pub fn save_stream<R: Read>(mut reader: R, dest: &Path) -> io::Result<u64> {
    let part = part_path(dest);

    let mut copy = || -> io::Result<u64> {
        let mut writer = BufWriter::new(File::create(&part)?);
        let bytes = io::copy(&mut reader, &mut writer)?;
        writer.flush()?;
        drop(writer);
        fs::rename(&part, dest)?;
        Ok(bytes)
    };

    copy().inspect_err(|_| {
        let _ = fs::remove_file(&part);
    })
}

/// Downloads `url` into `dest`, streaming rather than buffering the body.
#[cfg(feature = "fetch")]
pub fn download(url: &str, dest: &Path) -> crate::Result<u64> {
    use crate::error::GazetteerError;

    tracing::info!(%url, dest = %dest.display(), "downloading archive");

    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| GazetteerError::network(url, e))?;

    let bytes = save_stream(response, dest).map_err(|e| GazetteerError::network(url, e))?;
    tracing::info!(
        "download finished: {} ({:.1} KB)",
        dest.display(),
        bytes as f64 / 1024.0
    );
    Ok(bytes)
}
