// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The hymn record: one JSON document per hymn.
//!
//! Records are authored by hand, loaded read-only, and never mutated. The
//! index mirrors a handful of derived values from each record (`verse_count`,
//! `has_chorus`), so those helpers live here next to the data they derive from.
//!
//! Fields this crate does not model are kept in `extra` and written back
//! unchanged, so a bundle carries every record as authored.
//!
//! # Wire format
//!
//! ```json
//! {
//!   "id": 1,
//!   "title": "Mungu Ni Pendo",
//!   "category": "worship",
//!   "verses": [{ "number": 1, "text": ["Mungu ni pendo", "..."] }],
//!   "chorus": { "text": ["..."], "position": "after_each_verse" },
//!   "tags": ["upendo"],
//!   "scripture_references": ["1 Yohana 4:8"]
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// CATEGORY
// =============================================================================

/// The closed set of hymn categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Worship,
    Praise,
    Prayer,
    Thanksgiving,
    Christmas,
    Easter,
    Communion,
    Baptism,
    Wedding,
    Funeral,
    Evangelism,
    SecondComing,
    Morning,
    Evening,
    General,
}

impl Category {
    pub const ALL: [Category; 15] = [
        Category::Worship,
        Category::Praise,
        Category::Prayer,
        Category::Thanksgiving,
        Category::Christmas,
        Category::Easter,
        Category::Communion,
        Category::Baptism,
        Category::Wedding,
        Category::Funeral,
        Category::Evangelism,
        Category::SecondComing,
        Category::Morning,
        Category::Evening,
        Category::General,
    ];

    /// Wire name, as it appears in records and the index lookup table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Worship => "worship",
            Category::Praise => "praise",
            Category::Prayer => "prayer",
            Category::Thanksgiving => "thanksgiving",
            Category::Christmas => "christmas",
            Category::Easter => "easter",
            Category::Communion => "communion",
            Category::Baptism => "baptism",
            Category::Wedding => "wedding",
            Category::Funeral => "funeral",
            Category::Evangelism => "evangelism",
            Category::SecondComing => "second_coming",
            Category::Morning => "morning",
            Category::Evening => "evening",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}

// =============================================================================
// CHORUS POSITION
// =============================================================================

/// Where the chorus is sung.
///
/// Serialized as `after_each_verse`, `after_verse_<N>` or `at_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChorusPosition {
    #[default]
    AfterEachVerse,
    AfterVerse(u32),
    AtEnd,
}

const AFTER_VERSE_PREFIX: &str = "after_verse_";

impl FromStr for ChorusPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "after_each_verse" => Ok(ChorusPosition::AfterEachVerse),
            "at_end" => Ok(ChorusPosition::AtEnd),
            other => {
                let n = other
                    .strip_prefix(AFTER_VERSE_PREFIX)
                    .and_then(|n| n.parse::<u32>().ok())
                    .filter(|n| *n > 0)
                    .ok_or_else(|| format!("invalid chorus position '{}'", other))?;
                Ok(ChorusPosition::AfterVerse(n))
            }
        }
    }
}

impl TryFrom<String> for ChorusPosition {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChorusPosition> for String {
    fn from(pos: ChorusPosition) -> Self {
        pos.to_string()
    }
}

impl fmt::Display for ChorusPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChorusPosition::AfterEachVerse => f.write_str("after_each_verse"),
            ChorusPosition::AfterVerse(n) => write!(f, "{}{}", AFTER_VERSE_PREFIX, n),
            ChorusPosition::AtEnd => f.write_str("at_end"),
        }
    }
}

// =============================================================================
// TIMESTAMP
// =============================================================================

/// A timestamp kept exactly as written.
///
/// Catalog files carry RFC 3339 datetimes with any offset, and sometimes a
/// bare date. The text is what gets stored and re-emitted; `parse` reads it
/// when a point in time is actually needed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// RFC 3339, or a bare `YYYY-MM-DD` taken as midnight UTC.
    pub fn parse(&self) -> Option<DateTime<Utc>> {
        if let Ok(at) = DateTime::parse_from_rfc3339(&self.0) {
            return Some(at.with_timezone(&Utc));
        }
        let midnight = NaiveDate::parse_from_str(&self.0, "%Y-%m-%d")
            .ok()?
            .and_hms_opt(0, 0, 0)?;
        Some(Utc.from_utc_datetime(&midnight))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(at: DateTime<Utc>) -> Self {
        Timestamp(at.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

impl From<&str> for Timestamp {
    fn from(text: &str) -> Self {
        Timestamp(text.to_string())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// RECORD
// =============================================================================

/// One numbered verse. Numbers are usually sequential but nothing enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub number: u32,
    pub text: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chorus {
    #[serde(default)]
    pub text: Vec<String>,
    #[serde(default)]
    pub position: ChorusPosition,
}

impl Chorus {
    /// A chorus counts only if at least one line has visible text.
    pub fn is_empty(&self) -> bool {
        self.text.iter().all(|line| line.trim().is_empty())
    }
}

/// A hymn record as stored in `hymns/*.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hymn {
    pub id: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meter: Option<String>,
    pub category: Category,
    pub verses: Vec<Verse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chorus: Option<Chorus>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub scripture_references: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Hymn {
    pub fn verse_count(&self) -> usize {
        self.verses.len()
    }

    /// True when a chorus exists and has non-empty text.
    pub fn has_chorus(&self) -> bool {
        // INVARIANT: must agree with HymnInfo::has_chorus for a fresh index
        self.chorus.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Verses and chorus in the order they are sung.
    ///
    /// `after_verse_<N>` refers to the verse whose `number` is N; if no verse
    /// carries that number the chorus is sung once at the end. An empty chorus
    /// is never sung.
    pub fn sung_order(&self) -> Vec<Stanza<'_>> {
        let chorus = self.chorus.as_ref().filter(|c| !c.is_empty());
        let mut order = Vec::with_capacity(self.verses.len() * 2);

        let Some(chorus) = chorus else {
            order.extend(self.verses.iter().map(Stanza::Verse));
            return order;
        };

        let mut placed = false;
        for verse in &self.verses {
            order.push(Stanza::Verse(verse));
            let after_this = match chorus.position {
                ChorusPosition::AfterEachVerse => true,
                ChorusPosition::AfterVerse(n) => !placed && verse.number == n,
                ChorusPosition::AtEnd => false,
            };
            if after_this {
                order.push(Stanza::Chorus(chorus));
                placed = true;
            }
        }
        if !placed {
            order.push(Stanza::Chorus(chorus));
        }
        order
    }
}

/// One block of a hymn as sung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stanza<'a> {
    Verse(&'a Verse),
    Chorus(&'a Chorus),
}
