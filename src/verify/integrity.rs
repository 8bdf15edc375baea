// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cross-checking index entries against the records they describe.
//!
//! The index copies four things out of each record that readers rely on
//! without opening the record: id, title, verse count and chorus presence.
//! `check_integrity` loads every record the index lists and compares all
//! four. A record that cannot be loaded is fatal, not an issue: there is
//! nothing to compare against.
//!
//! The remaining mirrored fields (subtitle, category, tags) drive lookups and
//! search. `check_metadata` compares those in a separate pass, so each report
//! stays about one kind of drift.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::index::{reverse_lookups, HymnInfo, Index};
use crate::types::Hymn;

/// Which mirrored field disagreed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Title,
    VerseCount,
    Chorus,
    Subtitle,
    Category,
    Tags,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Id => "id",
            Field::Title => "title",
            Field::VerseCount => "verse count",
            Field::Chorus => "chorus",
            Field::Subtitle => "subtitle",
            Field::Category => "category",
            Field::Tags => "tags",
        })
    }
}

/// One mismatch between an index entry and its record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityIssue {
    /// Id as listed in the index.
    pub id: u32,
    pub field: Field,
    /// What the index entry says.
    pub expected: String,
    /// What the record says.
    pub actual: String,
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hymn {}: {} mismatch (index: {}, record: {})",
            self.id, self.field, self.expected, self.actual
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    /// Number of index entries checked.
    pub checked: usize,
    pub issues: Vec<IntegrityIssue>,
}

impl IntegrityReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues concerning one hymn id.
    pub fn issues_for(&self, id: u32) -> impl Iterator<Item = &IntegrityIssue> {
        self.issues.iter().filter(move |issue| issue.id == id)
    }

    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    pub fn into_result(self) -> Result<()> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(CatalogError::Validation {
                errors: self.messages(),
            })
        }
    }
}

/// Compare one index entry with the record it points at.
pub fn compare_entry(info: &HymnInfo, record: &Hymn) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();
    let mut push = |field, expected: String, actual: String| {
        issues.push(IntegrityIssue {
            id: info.id,
            field,
            expected,
            actual,
        });
    };

    if record.id != info.id {
        push(Field::Id, info.id.to_string(), record.id.to_string());
    }
    if record.title != info.title {
        push(Field::Title, format!("{:?}", info.title), format!("{:?}", record.title));
    }
    if record.verse_count() != info.verse_count {
        push(
            Field::VerseCount,
            info.verse_count.to_string(),
            record.verse_count().to_string(),
        );
    }
    if record.has_chorus() != info.has_chorus {
        push(
            Field::Chorus,
            chorus_label(info.has_chorus).to_string(),
            chorus_label(record.has_chorus()).to_string(),
        );
    }

    issues
}

fn chorus_label(present: bool) -> &'static str {
    if present {
        "has chorus"
    } else {
        "no chorus"
    }
}

/// Compare the lookup-facing fields of an entry with its record.
pub fn compare_metadata(info: &HymnInfo, record: &Hymn) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();
    let mut push = |field, expected: String, actual: String| {
        issues.push(IntegrityIssue {
            id: info.id,
            field,
            expected,
            actual,
        });
    };

    if record.subtitle != info.subtitle {
        push(
            Field::Subtitle,
            format!("{:?}", info.subtitle.as_deref().unwrap_or_default()),
            format!("{:?}", record.subtitle.as_deref().unwrap_or_default()),
        );
    }
    if record.category != info.category {
        push(Field::Category, info.category.to_string(), record.category.to_string());
    }
    // Tag order carries no meaning
    let listed: BTreeSet<&str> = info.tags.iter().map(String::as_str).collect();
    let tagged: BTreeSet<&str> = record.tags.iter().map(String::as_str).collect();
    if listed != tagged {
        push(Field::Tags, format!("{:?}", listed), format!("{:?}", tagged));
    }

    issues
}

/// Load every record the index lists and compare it with its entry.
///
/// Runs over the full enumeration. The first record that cannot be loaded
/// aborts the check with `NotFound`.
pub fn check_integrity(catalog: &Catalog) -> Result<IntegrityReport> {
    let report = run_pass(catalog, compare_entry)?;
    info!(
        checked = report.checked,
        issues = report.issues.len(),
        "integrity check finished"
    );
    Ok(report)
}

/// Like `check_integrity`, for subtitle, category and tags.
pub fn check_metadata(catalog: &Catalog) -> Result<IntegrityReport> {
    let report = run_pass(catalog, compare_metadata)?;
    info!(
        checked = report.checked,
        issues = report.issues.len(),
        "metadata check finished"
    );
    Ok(report)
}

fn run_pass(
    catalog: &Catalog,
    compare: fn(&HymnInfo, &Hymn) -> Vec<IntegrityIssue>,
) -> Result<IntegrityReport> {
    let index = catalog.index()?;
    let mut report = IntegrityReport::default();

    for entry in &index.hymns {
        let record = catalog.load_record(entry)?;
        for issue in compare(entry, &record) {
            warn!(id = issue.id, field = %issue.field, "{}", issue);
            report.issues.push(issue);
        }
        report.checked += 1;
    }

    Ok(report)
}

/// Check the index's own bookkeeping: total count, duplicate ids, and the
/// category/tag tables against the entries.
pub fn check_lookups(index: &Index) -> Vec<String> {
    let mut errors = Vec::new();

    if index.total_hymns != index.hymns.len() {
        errors.push(format!(
            "total_hymns is {} but the index lists {} hymns",
            index.total_hymns,
            index.hymns.len()
        ));
    }

    let mut seen = HashSet::new();
    for id in index.ids() {
        if !seen.insert(id) {
            errors.push(format!("Hymn {} is listed more than once", id));
        }
    }

    let (categories, tags) = reverse_lookups(&index.hymns);
    compare_table("categories", &categories, &index.categories, &seen, &mut errors);
    compare_table("tags", &tags, &index.tags, &seen, &mut errors);

    errors
}

fn compare_table(
    table: &str,
    expected: &BTreeMap<String, Vec<u32>>,
    actual: &BTreeMap<String, Vec<u32>>,
    known: &HashSet<u32>,
    errors: &mut Vec<String>,
) {
    let names: BTreeSet<&String> = expected.keys().chain(actual.keys()).collect();

    for name in names {
        let want: BTreeSet<u32> = expected.get(name).into_iter().flatten().copied().collect();
        let have: BTreeSet<u32> = actual.get(name).into_iter().flatten().copied().collect();

        for id in want.difference(&have) {
            errors.push(format!("{} table is missing hymn {} under '{}'", table, id, name));
        }
        for id in have.difference(&want) {
            if known.contains(id) {
                errors.push(format!(
                    "{} table lists hymn {} under '{}' but its entry does not",
                    table, id, name
                ));
            } else {
                errors.push(format!(
                    "{} table lists unknown hymn {} under '{}'",
                    table, id, name
                ));
            }
        }
    }
}
