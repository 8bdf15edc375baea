use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::index::Index;
use crate::types::{Hymn, Timestamp};

/// Everything a mobile client needs offline, in one document.
///
/// `hymns` keys are the decimal form of each id. The map is ordered, so the
/// same inputs always serialize to the same bytes. The index and records keep
/// their timestamps and unmodeled fields exactly as read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    pub version: String,
    pub last_updated: Timestamp,
    pub total_hymns: usize,
    pub index: Index,
    pub hymns: BTreeMap<String, Hymn>,
    pub schema: serde_json::Value,
}

impl Bundle {
    pub fn hymn(&self, id: u32) -> Option<&Hymn> {
        self.hymns.get(&id.to_string())
    }
}

/// What `write_bundle` produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleSummary {
    pub hymns: usize,
    pub bytes: usize,
    /// CRC32 of the written bytes; equal across runs on unchanged inputs.
    pub checksum: u32,
}
