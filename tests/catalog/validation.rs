//! Tests for structural validation of record files.

use crate::common::fixture;
use tenzi::validate;

fn validate_fixture(name: &str) -> tenzi::ValidationReport {
    let path = fixture("records").join(name);
    let content = std::fs::read_to_string(&path).expect("Failed to read record fixture");
    let value: serde_json::Value = serde_json::from_str(&content).expect("Failed to parse record fixture");
    validate(&value)
}

#[test]
fn test_valid_record() {
    let report = validate_fixture("valid.json");
    assert!(report.is_valid, "{:?}", report.errors);
}

#[test]
fn test_every_catalog_record_is_valid() {
    for entry in std::fs::read_dir(fixture("valid").join("hymns")).unwrap() {
        let path = entry.unwrap().path();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let report = validate(&value);
        assert!(report.is_valid, "{}: {:?}", path.display(), report.errors);
    }
}

#[test]
fn test_zero_verses() {
    let report = validate_fixture("no-verses.json");
    assert!(!report.is_valid);
    assert!(report.errors.iter().any(|e| e.contains("verses")), "{:?}", report.errors);
}

#[test]
fn test_bad_verses_reported_by_position() {
    let report = validate_fixture("bad-verses.json");
    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 2, "{:?}", report.errors);
    // Second verse also claims number 1; the message must still say 2.
    assert!(report.errors[0].starts_with("Verse 2:"), "{:?}", report.errors);
    assert!(report.errors[1].starts_with("Verse 3:"), "{:?}", report.errors);
}

#[test]
fn test_string_id_and_missing_title() {
    let report = validate_fixture("no-title.json");
    assert_eq!(report.errors.len(), 2, "{:?}", report.errors);
    assert!(report.errors[0].contains("id"));
    assert!(report.errors[1].contains("title"));
}
