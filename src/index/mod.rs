// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The denormalized catalog index.
//!
//! `index.json` lists one `HymnInfo` per record plus two reverse lookups
//! (category → ids, tag → ids). Every `HymnInfo` field must mirror the record
//! it points at; `verify::check_integrity` is what holds that line.
//!
//! ```text
//! index.json
//! ├── version, total_hymns, last_updated
//! ├── hymns: [HymnInfo]          one per record, sorted by id
//! ├── categories: {name: [id]}   reverse lookup
//! └── tags: {name: [id]}         reverse lookup
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{Category, Hymn, Timestamp};

/// One index entry, mirroring derived fields of a hymn record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HymnInfo {
    pub id: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub category: Category,
    /// Record file name, relative to the hymns directory.
    pub file: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub has_chorus: bool,
    pub verse_count: usize,
    /// Unmodeled fields, re-emitted as found.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl HymnInfo {
    /// Derive the entry a record should have.
    pub fn from_hymn(hymn: &Hymn, file: impl Into<String>) -> Self {
        HymnInfo {
            id: hymn.id,
            title: hymn.title.clone(),
            subtitle: hymn.subtitle.clone(),
            category: hymn.category,
            file: file.into(),
            tags: hymn.tags.clone(),
            has_chorus: hymn.has_chorus(),
            verse_count: hymn.verse_count(),
            extra: BTreeMap::new(),
        }
    }
}

/// Conventional record file name for an id: `hymn_001.json`.
pub fn default_file_name(id: u32) -> String {
    format!("hymn_{:03}.json", id)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    pub version: String,
    pub total_hymns: usize,
    pub last_updated: Timestamp,
    pub hymns: Vec<HymnInfo>,
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<u32>>,
    #[serde(default)]
    pub tags: BTreeMap<String, Vec<u32>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Index {
    /// Regenerate a complete index from its entries.
    ///
    /// Entries are sorted by id; lookup tables hold sorted, de-duplicated ids.
    pub fn build(
        version: impl Into<String>,
        last_updated: impl Into<Timestamp>,
        mut hymns: Vec<HymnInfo>,
    ) -> Self {
        hymns.sort_by_key(|h| h.id);

        let (categories, tags) = reverse_lookups(&hymns);

        Index {
            version: version.into(),
            total_hymns: hymns.len(),
            last_updated: last_updated.into(),
            hymns,
            categories,
            tags,
            extra: BTreeMap::new(),
        }
    }

    pub fn info(&self, id: u32) -> Option<&HymnInfo> {
        self.hymns.iter().find(|h| h.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.hymns.iter().map(|h| h.id)
    }

    /// Ids filed under a category. Unknown names yield an empty slice.
    pub fn ids_for_category(&self, name: &str) -> &[u32] {
        self.categories.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ids carrying a tag. Unknown names yield an empty slice.
    pub fn ids_for_tag(&self, name: &str) -> &[u32] {
        self.tags.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

type Lookup = BTreeMap<String, Vec<u32>>;

/// Category and tag tables as `Index::build` would produce them.
pub fn reverse_lookups(hymns: &[HymnInfo]) -> (Lookup, Lookup) {
    let mut categories: Lookup = BTreeMap::new();
    let mut tags: Lookup = BTreeMap::new();

    for info in hymns {
        categories
            .entry(info.category.as_str().to_string())
            .or_default()
            .push(info.id);
        for tag in &info.tags {
            tags.entry(tag.clone()).or_default().push(info.id);
        }
    }

    // INVARIANT: lookup ids are sorted and unique; check_lookups compares them as-is
    for ids in categories.values_mut().chain(tags.values_mut()) {
        ids.sort_unstable();
        ids.dedup();
    }

    (categories, tags)
}
