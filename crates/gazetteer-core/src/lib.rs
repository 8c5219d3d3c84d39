// crates/gazetteer-core/src/lib.rs

//! Fetch a GeoNames country dump, clean it into a table of locations, run the
//! four fixed analyses and write the CSV and workbook reports.

pub mod common;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod query;
pub mod report;
pub mod traits;
// Raw input rows, before cleaning
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::common::{CleanReport, DropReason, TableStats};
pub use crate::config::{PipelineConfig, QueryParams};
pub use crate::error::{GazetteerError, Result, Stage};
pub use crate::model::{LocationRecord, LocationTable};
pub use crate::pipeline::{Artifacts, RunSummary};
pub use crate::query::{run_queries, Extremes, QueryResultSet};
// Export the Query Trait (Crucial for users!)
pub use crate::traits::{GazetteerQuery, NameMatch};

pub mod prelude {
    pub use crate::{
        GazetteerError, GazetteerQuery, LocationRecord, LocationTable, NameMatch,
        PipelineConfig, QueryParams, Result,
    };
}
