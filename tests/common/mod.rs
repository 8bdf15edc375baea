//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tenzi::Catalog;
use tempfile::TempDir;

// Re-export canonical test utilities from tenzi::testing
pub use tenzi::testing::{index_for, make_hymn, make_hymn_in, make_hymn_with_chorus, timestamp, write_catalog};

// ============================================================================
// FIXTURE DIRECTORIES
// ============================================================================

/// Directory holding the checked-in catalog fixtures.
pub const FIXTURES_DIR: &str = "data/fixtures";

/// Path to a fixture catalog or record directory.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

/// Open a checked-in fixture catalog.
pub fn fixture_catalog(name: &str) -> Catalog {
    Catalog::at(fixture(name))
}

/// Copy a fixture catalog into a scratch directory so tests can edit it.
pub fn scratch_copy(name: &str) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    copy_dir(&fixture(name), dir.path());
    dir
}

fn copy_dir(from: &Path, to: &Path) {
    std::fs::create_dir_all(to).expect("Failed to create dir");
    for entry in std::fs::read_dir(from).expect("Failed to read fixture dir") {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            std::fs::copy(entry.path(), &target).expect("Failed to copy fixture");
        }
    }
}

/// Ids of a list of hymns, in order.
pub fn ids(hymns: &[tenzi::Hymn]) -> Vec<u32> {
    hymns.iter().map(|h| h.id).collect()
}
