// crates/gazetteer-core/src/config.rs

//! # Pipeline Configuration
//!
//! All constants of a run live in one immutable [`PipelineConfig`] that is
//! handed to [`crate::pipeline::run`]. There is no file or environment layer:
//! the defaults are the run.

use crate::error::{GazetteerError, Result};
use std::path::PathBuf;

pub const DATA_URL: &str = "https://download.geonames.org/export/dump/BF.zip";
pub const ARCHIVE_FILENAME: &str = "BF.zip";
pub const TEXT_FILENAME: &str = "BF.txt";
pub const LOCATIONS_CSV: &str = "burkina_location.csv";
pub const MATCHES_CSV: &str = "gounghin.csv";
pub const WORKBOOK_FILENAME: &str = "mini_projet.xlsx";

/// Parameters of the four hard-coded analyses.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    /// Case-insensitive substring searched in `location_name`.
    pub needle: String,
    /// Inclusive bounds on the upper-cased first letter of a name.
    pub alpha_lo: char,
    pub alpha_hi: char,
    /// `lat >= lat_min`
    pub lat_min: f64,
    /// `long <= long_max`
    pub long_max: f64,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            needle: "gounghin".to_string(),
            alpha_lo: 'A',
            alpha_hi: 'P',
            lat_min: 11.0,
            long_max: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub source_url: String,
    /// Directory the archive is downloaded to and extracted in.
    pub work_dir: PathBuf,
    pub archive_filename: String,
    pub text_filename: String,
    pub locations_csv: String,
    pub matches_csv: String,
    pub workbook_filename: String,
    pub query: QueryParams,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_url: DATA_URL.to_string(),
            work_dir: PathBuf::from("."),
            archive_filename: ARCHIVE_FILENAME.to_string(),
            text_filename: TEXT_FILENAME.to_string(),
            locations_csv: LOCATIONS_CSV.to_string(),
            matches_csv: MATCHES_CSV.to_string(),
            workbook_filename: WORKBOOK_FILENAME.to_string(),
            query: QueryParams::default(),
        }
    }
}

impl PipelineConfig {
    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = dir.into();
        self
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn archive_path(&self) -> PathBuf {
        self.work_dir.join(&self.archive_filename)
    }

    pub fn text_path(&self) -> PathBuf {
        self.work_dir.join(&self.text_filename)
    }

    pub fn locations_csv_path(&self) -> PathBuf {
        self.work_dir.join(&self.locations_csv)
    }

    pub fn matches_csv_path(&self) -> PathBuf {
        self.work_dir.join(&self.matches_csv)
    }

    pub fn workbook_path(&self) -> PathBuf {
        self.work_dir.join(&self.workbook_filename)
    }

    /// Rejects parameter combinations that would make an analysis meaningless.
    pub fn validate(&self) -> Result<()> {
        let q = &self.query;
        if q.needle.trim().is_empty() {
            return Err(GazetteerError::Config("search needle is empty".into()));
        }
        if q.alpha_lo > q.alpha_hi {
            return Err(GazetteerError::Config(format!(
                "alphabetical range {}..={} is inverted",
                q.alpha_lo, q.alpha_hi
            )));
        }
        if !q.lat_min.is_finite() || !q.long_max.is_finite() {
            return Err(GazetteerError::Config(
                "bounding thresholds must be finite numbers".into(),
            ));
        }
        if self.text_filename.is_empty() || self.archive_filename.is_empty() {
            return Err(GazetteerError::Config("input filenames must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_burkina_run() {
        let cfg = PipelineConfig::default();
        assert_eq!(cfg.source_url, DATA_URL);
        assert_eq!(cfg.query.needle, "gounghin");
        assert_eq!((cfg.query.alpha_lo, cfg.query.alpha_hi), ('A', 'P'));
        assert_eq!(cfg.query.lat_min, 11.0);
        assert_eq!(cfg.query.long_max, 0.5);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn paths_resolve_against_work_dir() {
        let cfg = PipelineConfig::default().with_work_dir("/tmp/run");
        assert_eq!(cfg.archive_path(), PathBuf::from("/tmp/run/BF.zip"));
        assert_eq!(cfg.text_path(), PathBuf::from("/tmp/run/BF.txt"));
        assert_eq!(cfg.workbook_path(), PathBuf::from("/tmp/run/mini_projet.xlsx"));
    }

    #[test]
    fn validate_rejects_bad_queries() {
        let inverted = QueryParams {
            alpha_lo: 'Q',
            alpha_hi: 'B',
            ..QueryParams::default()
        };
        assert!(PipelineConfig::default().with_query(inverted).validate().is_err());

        let blank = QueryParams {
            needle: "  ".into(),
            ..QueryParams::default()
        };
        assert!(PipelineConfig::default().with_query(blank).validate().is_err());

        let nan = QueryParams {
            lat_min: f64::NAN,
            ..QueryParams::default()
        };
        assert!(PipelineConfig::default().with_query(nan).validate().is_err());
    }
}
