// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Read-only lookups layered over the index and the record files.
//!
//! Lookups resolve ids from the index, then load each record. An unknown
//! category or tag is just an empty result, but a listed id whose file is
//! missing fails the whole lookup: callers either get every record they asked
//! for or an error naming the one that wasn't there.
//!
//! Title search only looks at index metadata (title and subtitle), never at
//! verse text, and an empty term matches nothing.

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::types::Hymn;
use crate::utils::{contains_normalized, normalize};

impl Catalog {
    /// Hymns filed under `name`, in lookup-table order.
    pub fn by_category(&self, name: &str) -> Result<Vec<Hymn>> {
        let ids = self.index()?.ids_for_category(name);
        debug!(category = name, matches = ids.len(), "category lookup");
        self.hymns(ids)
    }

    /// Hymns carrying tag `name`, in lookup-table order.
    pub fn by_tag(&self, name: &str) -> Result<Vec<Hymn>> {
        let ids = self.index()?.ids_for_tag(name);
        debug!(tag = name, matches = ids.len(), "tag lookup");
        self.hymns(ids)
    }

    /// Case-insensitive substring search over title and subtitle.
    pub fn search_by_title(&self, term: &str) -> Result<Vec<Hymn>> {
        let ids = self.search_ids(term)?;
        debug!(term, matches = ids.len(), "title search");
        self.hymns(&ids)
    }

    /// Ids whose index metadata matches `term`, in index order.
    ///
    /// Narrowing the term can only shrink this set.
    pub fn search_ids(&self, term: &str) -> Result<Vec<u32>> {
        // INVARIANT: only the empty term is special; blank terms stay substrings
        if term.is_empty() {
            return Ok(Vec::new());
        }
        let needle = normalize(term);

        Ok(self
            .index()?
            .hymns
            .iter()
            .filter(|info| {
                contains_normalized(&info.title, &needle)
                    || info
                        .subtitle
                        .as_deref()
                        .is_some_and(|s| contains_normalized(s, &needle))
            })
            .map(|info| info.id)
            .collect())
    }

    /// Category names with how many hymns each lists.
    pub fn categories(&self) -> Result<Vec<(String, usize)>> {
        Ok(self
            .index()?
            .categories
            .iter()
            .map(|(name, ids)| (name.clone(), ids.len()))
            .collect())
    }

    /// Tag names with how many hymns each lists.
    pub fn tags(&self) -> Result<Vec<(String, usize)>> {
        Ok(self
            .index()?
            .tags
            .iter()
            .map(|(name, ids)| (name.clone(), ids.len()))
            .collect())
    }
}
