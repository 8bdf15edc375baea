// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A catalog of Swahili hymns stored as one JSON record per hymn.
//!
//! The catalog is three kinds of file: hymn records, a denormalized index that
//! summarizes every record, and a JSON Schema document. This crate loads them,
//! answers lookups, checks that the index still matches the records, and
//! assembles everything into a single offline bundle.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  types.rs   │────▶│  index/      │────▶│ catalog.rs  │
//! │ (Hymn,      │     │ (Index,      │     │ (load,      │
//! │  Verse, …)  │     │  HymnInfo)   │     │  cache)     │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                                                 │
//!        ┌──────────────────┬─────────────────────┤
//!        ▼                  ▼                     ▼
//! ┌─────────────┐    ┌─────────────┐       ┌─────────────┐
//! │  query.rs   │    │  verify/    │       │  build/     │
//! │ (category,  │    │ (validate,  │       │ (bundle,    │
//! │  tag, title)│    │  integrity) │       │  reindex)   │
//! └─────────────┘    └─────────────┘       └─────────────┘
//! ```
//!
//! Everything is read-only over files that do not change during a run. The
//! index and schema are memoized per `Catalog`; records are read on demand.
//!
//! # Usage
//!
//! ```no_run
//! use tenzi::{verify, Catalog};
//!
//! let catalog = Catalog::at("data");
//! let report = verify::check_integrity(&catalog)?;
//! for issue in &report.issues {
//!     eprintln!("{}", issue);
//! }
//! let praise = catalog.by_category("praise")?;
//! # Ok::<(), tenzi::CatalogError>(())
//! ```

pub mod build;
pub mod catalog;
pub mod config;
pub mod error;
pub mod index;
mod query;
pub mod testing;
pub mod types;
mod utils;
pub mod verify;

pub use build::{generate, reindex, write_bundle, Bundle, BundleSummary};
pub use catalog::Catalog;
pub use config::CatalogPaths;
pub use error::{CatalogError, Missing, Result};
pub use index::{HymnInfo, Index};
pub use types::{Category, Chorus, ChorusPosition, Hymn, Stanza, Timestamp, Verse};
pub use utils::normalize;
pub use verify::{
    check_integrity, check_lookups, check_metadata, validate, IntegrityReport, ValidationReport,
};
