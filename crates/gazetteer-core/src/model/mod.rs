// crates/gazetteer-core/src/model/mod.rs
pub mod convert;
pub mod location;
pub mod search;

pub use location::{LocationRecord, LocationTable};
