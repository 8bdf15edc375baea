//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so tests don't each invent their own hymns.

#![doc(hidden)]

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};

use crate::index::{default_file_name, HymnInfo, Index};
use crate::types::{Category, Chorus, ChorusPosition, Hymn, Verse};

/// Fixed timestamp so generated indexes compare equal across runs.
pub fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
}

/// Create a hymn with `verses` two-line verses and no chorus.
///
/// This is the canonical implementation used across all tests.
pub fn make_hymn(id: u32, title: &str, verses: usize) -> Hymn {
    Hymn {
        id,
        title: title.to_string(),
        subtitle: None,
        author: None,
        meter: None,
        category: Category::General,
        verses: (1..=verses)
            .map(|n| Verse {
                number: n as u32,
                text: vec![
                    format!("{} ubeti {} mstari 1", title, n),
                    format!("{} ubeti {} mstari 2", title, n),
                ],
            })
            .collect(),
        chorus: None,
        tags: vec![],
        scripture_references: vec![],
        created_at: None,
        updated_at: None,
        extra: BTreeMap::new(),
    }
}

/// Create a hymn with a non-empty chorus sung after each verse.
pub fn make_hymn_with_chorus(id: u32, title: &str, verses: usize) -> Hymn {
    Hymn {
        chorus: Some(Chorus {
            text: vec!["Haleluya, haleluya".to_string(), "Amina".to_string()],
            position: ChorusPosition::AfterEachVerse,
        }),
        ..make_hymn(id, title, verses)
    }
}

/// Create a hymn filed under a category with the given tags.
pub fn make_hymn_in(id: u32, title: &str, category: Category, tags: &[&str]) -> Hymn {
    Hymn {
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..make_hymn(id, title, 2)
    }
}

/// Index derived from the hymns, using conventional file names.
pub fn index_for(hymns: &[Hymn]) -> Index {
    Index::build(
        "1.0.0",
        timestamp(),
        hymns
            .iter()
            .map(|h| HymnInfo::from_hymn(h, default_file_name(h.id)))
            .collect(),
    )
}

/// Write a complete catalog (`index.json`, `schema.json`, `hymns/`) under `root`.
///
/// The index is written as given, so tests can hand in a stale one.
pub fn write_catalog(root: &Path, index: &Index, hymns: &[Hymn]) -> io::Result<()> {
    let hymns_dir = root.join("hymns");
    fs::create_dir_all(&hymns_dir)?;

    fs::write(root.join("index.json"), to_json(index)?)?;
    fs::write(root.join("schema.json"), to_json(&minimal_schema())?)?;

    for hymn in hymns {
        let file = index
            .info(hymn.id)
            .map(|info| info.file.clone())
            .unwrap_or_else(|| default_file_name(hymn.id));
        fs::write(hymns_dir.join(file), to_json(hymn)?)?;
    }

    Ok(())
}

/// A small JSON Schema document used as the bundle's pass-through payload.
pub fn minimal_schema() -> serde_json::Value {
    serde_json::json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "Hymn",
        "type": "object",
        "required": ["id", "title", "verses"]
    })
}

fn to_json<T: serde::Serialize>(value: &T) -> io::Result<String> {
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}
