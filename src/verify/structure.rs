// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural validation of a raw hymn record.
//!
//! Works on `serde_json::Value` rather than `Hymn` because the point is to
//! describe records that would not deserialize. Verse errors name the verse by
//! its 1-based position in the `verses` array, not by its `number` field: a
//! record with two verses both numbered 1 still gets distinct messages.

use serde::Serialize;
use serde_json::Value;

use crate::error::{CatalogError, Result};

/// Outcome of validating one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// `Ok(())` when valid, otherwise a `Validation` error carrying every message.
    pub fn into_result(self) -> Result<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(CatalogError::Validation {
                errors: self.errors,
            })
        }
    }
}

/// Check a record's shape: id, title, verses, and each verse's number and text.
pub fn validate(record: &Value) -> ValidationReport {
    let mut errors = Vec::new();

    if !record.get("id").is_some_and(Value::is_number) {
        errors.push("Missing or invalid id (must be a number)".to_string());
    }

    match record.get("title").and_then(Value::as_str) {
        Some(title) if !title.is_empty() => {}
        _ => errors.push("Missing or invalid title (must be a non-empty string)".to_string()),
    }

    match record.get("verses").and_then(Value::as_array) {
        Some(verses) if !verses.is_empty() => {
            for (i, verse) in verses.iter().enumerate() {
                let position = i + 1;
                if !verse.get("number").is_some_and(Value::is_number) {
                    errors.push(format!("Verse {}: missing or invalid number", position));
                }
                match verse.get("text").and_then(Value::as_array) {
                    Some(lines) if !lines.is_empty() => {}
                    _ => errors.push(format!(
                        "Verse {}: missing or empty text (must be a non-empty array of lines)",
                        position
                    )),
                }
            }
        }
        _ => errors.push("Missing or empty verses (must be a non-empty array)".to_string()),
    }

    ValidationReport::from_errors(errors)
}
