//! Tests for category, tag and title lookups.

use crate::common::{fixture_catalog, ids};

#[test]
fn test_by_category() {
    let catalog = fixture_catalog("valid");
    assert_eq!(ids(&catalog.by_category("worship").unwrap()), vec![1]);
    assert_eq!(ids(&catalog.by_category("prayer").unwrap()), vec![3]);
}

#[test]
fn test_unknown_category_and_tag_are_empty() {
    let catalog = fixture_catalog("valid");
    assert!(catalog.by_category("christmas").unwrap().is_empty());
    assert!(catalog.by_category("not-a-category").unwrap().is_empty());
    assert!(catalog.by_tag("krismasi").unwrap().is_empty());
}

#[test]
fn test_by_tag() {
    let catalog = fixture_catalog("valid");
    assert_eq!(ids(&catalog.by_tag("upendo").unwrap()), vec![1, 3]);
    assert_eq!(ids(&catalog.by_tag("sifa").unwrap()), vec![2]);
}

#[test]
fn test_lookup_fails_on_missing_record() {
    let catalog = fixture_catalog("missing-hymn");

    // Hymn 2 is listed under "praise" and "sifa" but its file is gone.
    assert_eq!(catalog.by_category("praise").unwrap_err().missing_hymn(), Some(2));
    assert_eq!(catalog.by_tag("sifa").unwrap_err().missing_hymn(), Some(2));

    // Lookups that never touch hymn 2 still work.
    assert_eq!(ids(&catalog.by_tag("upendo").unwrap()), vec![1, 3]);
}

#[test]
fn test_search_title_and_subtitle() {
    let catalog = fixture_catalog("valid");
    assert_eq!(ids(&catalog.search_by_title("yesu").unwrap()), vec![2, 3]);
    assert_eq!(ids(&catalog.search_by_title("FRIEND").unwrap()), vec![3]);
    assert_eq!(ids(&catalog.search_by_title("god is").unwrap()), vec![1]);
}

#[test]
fn test_search_is_metadata_only() {
    let catalog = fixture_catalog("valid");
    // Appears in a verse of hymn 2, not in any title.
    assert!(catalog.search_by_title("mataifa").unwrap().is_empty());
}

#[test]
fn test_empty_search_returns_nothing() {
    let catalog = fixture_catalog("valid");
    assert!(catalog.search_by_title("").unwrap().is_empty());
}

#[test]
fn test_listings_reflect_lookup_tables() {
    let catalog = fixture_catalog("valid");
    let categories = catalog.categories().unwrap();
    assert_eq!(
        categories,
        vec![
            ("praise".to_string(), 1),
            ("prayer".to_string(), 1),
            ("worship".to_string(), 1),
        ]
    );
    let tags = catalog.tags().unwrap();
    assert!(tags.contains(&("upendo".to_string(), 2)));
    assert_eq!(tags.len(), 5);
}
