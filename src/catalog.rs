// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Read-only access to a catalog on disk.
//!
//! The index and schema are read once per process and memoized; nothing
//! invalidates them because the files are not expected to change during a
//! run. Hymn records are read on demand and never cached, so a lookup always
//! reflects the file as it is now.
//!
//! Every failure here is a `NotFound`: an absent file and a file that does not
//! parse are the same thing to a caller that needed the data.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::config::CatalogPaths;
use crate::error::{CatalogError, Missing, Result};
use crate::index::{HymnInfo, Index};
use crate::types::Hymn;

pub struct Catalog {
    paths: CatalogPaths,
    index: OnceLock<Index>,
    schema: OnceLock<serde_json::Value>,
}

impl Catalog {
    pub fn open(paths: CatalogPaths) -> Self {
        Catalog {
            paths,
            index: OnceLock::new(),
            schema: OnceLock::new(),
        }
    }

    /// Open a catalog using the conventional layout under `root`.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Catalog::open(CatalogPaths::new(root))
    }

    pub fn paths(&self) -> &CatalogPaths {
        &self.paths
    }

    /// The index, read on first use.
    pub fn index(&self) -> Result<&Index> {
        if let Some(index) = self.index.get() {
            return Ok(index);
        }
        let loaded: Index = read_json(&self.paths.index_file, Missing::Index)?;
        debug!(
            path = %self.paths.index_file.display(),
            hymns = loaded.hymns.len(),
            version = %loaded.version,
            "loaded index"
        );
        Ok(self.index.get_or_init(|| loaded))
    }

    /// The JSON Schema document, read on first use and never interpreted.
    pub fn schema(&self) -> Result<&serde_json::Value> {
        if let Some(schema) = self.schema.get() {
            return Ok(schema);
        }
        let loaded: serde_json::Value = read_json(&self.paths.schema_file, Missing::Schema)?;
        debug!(path = %self.paths.schema_file.display(), "loaded schema");
        Ok(self.schema.get_or_init(|| loaded))
    }

    /// Load one hymn by id, resolving its file through the index.
    pub fn hymn(&self, id: u32) -> Result<Hymn> {
        let index = self.index()?;
        let info = index.info(id).ok_or_else(|| {
            CatalogError::not_found(Missing::Hymn(id), &self.paths.index_file, "not listed in index")
        })?;
        self.load_record(info)
    }

    /// Load the record an index entry points at.
    pub fn load_record(&self, info: &HymnInfo) -> Result<Hymn> {
        let path = self.paths.hymn_path(&info.file);
        trace!(id = info.id, path = %path.display(), "loading hymn");
        read_json(&path, Missing::Hymn(info.id))
    }

    /// Load several hymns in order. The first missing one fails the whole call.
    pub fn hymns(&self, ids: &[u32]) -> Result<Vec<Hymn>> {
        ids.iter().map(|&id| self.hymn(id)).collect()
    }

    /// Every record the index enumerates, in index order.
    pub fn load_all(&self) -> Result<Vec<Hymn>> {
        let index = self.index()?;
        let hymns = index
            .hymns
            .iter()
            .map(|info| self.load_record(info))
            .collect::<Result<Vec<_>>>()?;
        debug!(count = hymns.len(), "loaded all hymns");
        Ok(hymns)
    }

    /// Record files present in the hymns directory, sorted by file name.
    ///
    /// Used to regenerate the index, so it does not consult the index at all.
    pub fn scan_hymn_files(&self) -> Result<Vec<(String, Hymn)>> {
        let dir = &self.paths.hymns_dir;
        let entries =
            fs::read_dir(dir).map_err(|e| CatalogError::not_found(Missing::HymnsDir, dir, e))?;

        let paths = entries
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<PathBuf>>>()
            .map_err(|e| CatalogError::not_found(Missing::HymnsDir, dir, e))?;

        // Every record file is either listed or an error; nothing is skipped quietly.
        let mut files = paths
            .into_iter()
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
            .map(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .map(str::to_string)
                    .ok_or_else(|| {
                        CatalogError::not_found(Missing::HymnsDir, &path, "file name is not valid UTF-8")
                    })
            })
            .collect::<Result<Vec<String>>>()?;
        files.sort();

        files
            .into_iter()
            .map(|file| {
                let path = dir.join(&file);
                let value: serde_json::Value = read_json(&path, Missing::HymnsDir)?;
                let id = value
                    .get("id")
                    .and_then(serde_json::Value::as_u64)
                    .and_then(|id| u32::try_from(id).ok())
                    .unwrap_or(0);
                let hymn = serde_json::from_value::<Hymn>(value)
                    .map_err(|e| CatalogError::not_found(Missing::Hymn(id), &path, invalid_json(e)))?;
                Ok((file, hymn))
            })
            .collect()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path, what: Missing) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| CatalogError::not_found(what, path, e))?;
    serde_json::from_str(&content).map_err(|e| CatalogError::not_found(what, path, invalid_json(e)))
}

fn invalid_json(e: serde_json::Error) -> String {
    format!("invalid JSON: {}", e)
}
