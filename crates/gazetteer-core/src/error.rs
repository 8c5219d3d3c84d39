// crates/gazetteer-core/src/error.rs
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The pipeline stage an error belongs to.
///
/// Every [`GazetteerError`] maps to exactly one stage so that callers can print a
/// categorized message ("load stage failed: ...") without inspecting variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Config,
    Fetch,
    Extract,
    Load,
    Query,
    Report,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Config => "config",
            Stage::Fetch => "fetch",
            Stage::Extract => "extract",
            Stage::Load => "load",
            Stage::Query => "query",
            Stage::Report => "report",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum GazetteerError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Network error while fetching {url}: {message}")]
    Network { url: String, message: String },

    #[error("Could not extract {}: {message}", path.display())]
    Extraction { path: PathBuf, message: String },

    #[error("Could not load {}: {message}", path.display())]
    Load { path: PathBuf, message: String },

    #[error("Query `{operation}` needs at least one record, table is empty")]
    EmptyTable { operation: &'static str },

    #[error("Could not write {}: {message}", path.display())]
    Report { path: PathBuf, message: String },
}

impl GazetteerError {
    pub fn stage(&self) -> Stage {
        match self {
            GazetteerError::Config(_) => Stage::Config,
            GazetteerError::Network { .. } => Stage::Fetch,
            GazetteerError::Extraction { .. } => Stage::Extract,
            GazetteerError::Load { .. } => Stage::Load,
            GazetteerError::EmptyTable { .. } => Stage::Query,
            GazetteerError::Report { .. } => Stage::Report,
        }
    }

    pub(crate) fn network(url: &str, err: impl fmt::Display) -> Self {
        GazetteerError::Network {
            url: url.to_owned(),
            message: err.to_string(),
        }
    }

    pub(crate) fn extraction(path: &Path, err: impl fmt::Display) -> Self {
        GazetteerError::Extraction {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    pub(crate) fn load(path: &Path, err: impl fmt::Display) -> Self {
        GazetteerError::Load {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    pub(crate) fn report(path: &Path, err: impl fmt::Display) -> Self {
        GazetteerError::Report {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GazetteerError>;
