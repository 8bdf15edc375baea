// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: structural validation and index integrity.
//!
//! Two complementary passes:
//!
//! 1. **Structural validation** (`validate`) looks at one raw record and
//!    reports every shape problem it finds. It never touches the index.
//!
//! 2. **Integrity checking** (`check_integrity`) walks every index entry,
//!    loads the record it points at, and compares the mirrored fields. This is
//!    the pass that catches a record edited without regenerating the index.
//!
//! `check_lookups` covers the index's own bookkeeping: the total count and the
//! category/tag tables.
//!
//! Both passes collect messages instead of stopping at the first defect.

mod integrity;
mod structure;

pub use integrity::*;
pub use structure::*;
