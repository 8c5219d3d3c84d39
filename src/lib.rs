//! Umbrella crate for the gazetteer workspace.
//!
//! Re-exports [`gazetteer_core`] so the demos can `use gazetteer_rs::prelude::*`.

pub use gazetteer_core::*;
