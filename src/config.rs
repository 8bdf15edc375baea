// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where a catalog lives on disk.
//!
//! The conventional layout is
//!
//! ```text
//! <root>/
//! ├── index.json
//! ├── schema.json
//! └── hymns/
//!     ├── hymn_001.json
//!     └── ...
//! ```
//!
//! Every part can be pointed elsewhere; `HymnInfo.file` is always resolved
//! against `hymns_dir`.

use std::path::{Path, PathBuf};

/// Environment variable the CLI reads when `--data-dir` is not given.
pub const DATA_DIR_ENV: &str = "TENZI_DATA_DIR";

/// Default catalog root, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

pub const INDEX_FILE: &str = "index.json";
pub const SCHEMA_FILE: &str = "schema.json";
pub const HYMNS_DIR: &str = "hymns";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    pub root: PathBuf,
    pub index_file: PathBuf,
    pub hymns_dir: PathBuf,
    pub schema_file: PathBuf,
}

impl CatalogPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        CatalogPaths {
            index_file: root.join(INDEX_FILE),
            hymns_dir: root.join(HYMNS_DIR),
            schema_file: root.join(SCHEMA_FILE),
            root,
        }
    }

    pub fn with_index_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.index_file = path.into();
        self
    }

    pub fn with_hymns_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.hymns_dir = path.into();
        self
    }

    pub fn with_schema_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.schema_file = path.into();
        self
    }

    /// Path of a record file named by an index entry.
    pub fn hymn_path(&self, file: &str) -> PathBuf {
        self.hymns_dir.join(file)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for CatalogPaths {
    fn default() -> Self {
        CatalogPaths::new(DEFAULT_DATA_DIR)
    }
}
