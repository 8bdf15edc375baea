// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog error types.
//!
//! Two kinds cover every read path: something referenced has no backing data
//! (`NotFound`), or the data exists but is inconsistent (`Validation`).
//! Validation errors carry the whole list of messages so one pass surfaces
//! every defect. `Write` only comes out of the bundle and index writers.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// What a `NotFound` error was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    Index,
    Schema,
    Hymn(u32),
    HymnsDir,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Missing::Index => write!(f, "index"),
            Missing::Schema => write!(f, "schema"),
            Missing::Hymn(id) => write!(f, "hymn {}", id),
            Missing::HymnsDir => write!(f, "hymns directory"),
        }
    }
}

/// Catalog operation errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A referenced identifier, file, or index has no backing data.
    #[error("{what} not found at {}: {reason}", path.display())]
    NotFound {
        what: Missing,
        path: PathBuf,
        reason: String,
    },

    /// Structural or cross-referential mismatch.
    #[error("validation failed with {} error(s): {}", errors.len(), errors.join("; "))]
    Validation { errors: Vec<String> },

    /// Output file could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    pub(crate) fn not_found(what: Missing, path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        CatalogError::NotFound {
            what,
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// The hymn id a `NotFound` error names, if any.
    pub fn missing_hymn(&self) -> Option<u32> {
        match self {
            CatalogError::NotFound {
                what: Missing::Hymn(id),
                ..
            } => Some(*id),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogError::Validation { .. })
    }
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
