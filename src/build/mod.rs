// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bundle assembly and index regeneration.
//!
//! `generate` pulls the index, every record it lists, and the schema into one
//! `Bundle`. It is all-or-nothing: the first record that cannot be loaded
//! fails the build. The bundle's version and timestamp come from the index,
//! never from the clock, so regenerating from unchanged inputs is
//! byte-for-byte identical. `write_bundle` reports a CRC32 so two runs can be
//! compared without diffing.
//!
//! `reindex` goes the other way: it scans the record files and derives a
//! fresh index from them.

mod bundle;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::index::{HymnInfo, Index};
use crate::types::Timestamp;

pub use bundle::*;

/// Assemble the offline bundle.
pub fn generate(catalog: &Catalog) -> Result<Bundle> {
    let index = catalog.index()?;
    let schema = catalog.schema()?;

    let mut hymns = BTreeMap::new();
    let mut misfiled = Vec::new();
    for info in &index.hymns {
        let hymn = catalog.load_record(info)?;
        if hymn.id != info.id {
            misfiled.push(format!(
                "{} holds hymn {} but is listed as hymn {}",
                info.file, hymn.id, info.id
            ));
        }
        hymns.insert(hymn.id.to_string(), hymn);
    }
    if !misfiled.is_empty() {
        return Err(CatalogError::Validation { errors: misfiled });
    }

    let bundle = Bundle {
        version: index.version.clone(),
        last_updated: index.last_updated.clone(),
        total_hymns: index.total_hymns,
        index: index.clone(),
        hymns,
        schema: schema.clone(),
    };

    // INVARIANT: one bundle entry per counted hymn
    if bundle.hymns.len() != bundle.total_hymns {
        return Err(CatalogError::Validation {
            errors: vec![format!(
                "bundle holds {} hymns but total_hymns is {}",
                bundle.hymns.len(),
                bundle.total_hymns
            )],
        });
    }

    debug!(hymns = bundle.hymns.len(), version = %bundle.version, "assembled bundle");
    Ok(bundle)
}

/// Serialize a bundle to `path`, creating parent directories as needed.
pub fn write_bundle(bundle: &Bundle, path: &Path, pretty: bool) -> Result<BundleSummary> {
    let bytes = to_json_bytes(bundle, pretty)?;
    write_file(path, &bytes)?;

    let summary = BundleSummary {
        hymns: bundle.hymns.len(),
        bytes: bytes.len(),
        checksum: crc32fast::hash(&bytes),
    };
    info!(
        path = %path.display(),
        hymns = summary.hymns,
        bytes = summary.bytes,
        checksum = %format!("{:08x}", summary.checksum),
        "wrote bundle"
    );
    Ok(summary)
}

/// Derive a fresh index from the record files on disk.
///
/// Records are listed under the file name they were found as. Each record is
/// structurally sound by construction (it deserialized), so no validation
/// pass runs here.
pub fn reindex(
    catalog: &Catalog,
    version: &str,
    last_updated: impl Into<Timestamp>,
) -> Result<Index> {
    let scanned = catalog.scan_hymn_files()?;
    let entries: Vec<HymnInfo> = scanned
        .iter()
        .map(|(file, hymn)| HymnInfo::from_hymn(hymn, file.as_str()))
        .collect();

    let index = Index::build(version, last_updated, entries);
    info!(hymns = index.total_hymns, version, "regenerated index");
    Ok(index)
}

/// Write any serializable document (index, bundle) as JSON.
pub fn write_json<T: Serialize>(value: &T, path: &Path, pretty: bool) -> Result<usize> {
    let bytes = to_json_bytes(value, pretty)?;
    write_file(path, &bytes)?;
    Ok(bytes.len())
}

fn to_json_bytes<T: Serialize>(value: &T, pretty: bool) -> Result<Vec<u8>> {
    let encoded = if pretty {
        serde_json::to_vec_pretty(value)
    } else {
        serde_json::to_vec(value)
    };
    // Our types only hold strings, numbers and string-keyed maps.
    encoded.map_err(|e| CatalogError::Validation {
        errors: vec![format!("failed to serialize: {}", e)],
    })
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, bytes).map_err(write_err)
}
