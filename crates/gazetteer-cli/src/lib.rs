//! gazetteer-cli
//! =============
//!
//! Command-line batch runner for the `gazetteer-core` pipeline.
//!
//! This crate primarily provides a binary (`gazetteer`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Usage
//! -----
//!
//! ```text
//! gazetteer
//! ```
//!
//! One run writes, into the current directory:
//!
//! - `BF.zip` and the extracted `BF.txt`
//! - `burkina_location.csv`: every cleaned location
//! - `gounghin.csv`: locations whose name contains "gounghin"
//! - `mini_projet.xlsx`: sheets `gounghin`, `A_to_P` and `Résumé`
//!
//! For programmatic access to the pipeline stages, use the
//! [`gazetteer-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
