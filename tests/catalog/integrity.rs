//! Tests for the integrity check over full fixture catalogs.

use crate::common::{fixture_catalog, scratch_copy};
use tenzi::verify::Field;
use tenzi::{check_integrity, check_lookups, check_metadata, Catalog};

fn edit_record(dir: &std::path::Path, file: &str, edit: impl FnOnce(&mut serde_json::Value)) {
    let path = dir.join("hymns").join(file);
    let mut record: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    edit(&mut record);
    std::fs::write(&path, serde_json::to_string_pretty(&record).unwrap()).unwrap();
}

#[test]
fn test_valid_catalog_has_no_issues() {
    let catalog = fixture_catalog("valid");
    let report = check_integrity(&catalog).unwrap();

    assert_eq!(report.checked, 3);
    assert!(report.is_ok(), "{:#?}", report.issues);
    assert!(check_metadata(&catalog).unwrap().is_ok());
    assert!(check_lookups(catalog.index().unwrap()).is_empty());
}

#[test]
fn test_sample_catalog_is_consistent() {
    let catalog = Catalog::at("data");
    let report = check_integrity(&catalog).unwrap();
    assert!(report.is_ok(), "{:#?}", report.issues);
    assert!(check_lookups(catalog.index().unwrap()).is_empty());
}

#[test]
fn test_hymn_one_matches_its_entry() {
    let catalog = fixture_catalog("valid");
    let info = catalog.index().unwrap().info(1).unwrap().clone();
    assert_eq!(info.verse_count, 2);
    assert!(info.has_chorus);

    let report = check_integrity(&catalog).unwrap();
    assert_eq!(report.issues_for(1).count(), 0);
}

#[test]
fn test_extra_verse_without_reindex() {
    // Hymn 1 has three verses on disk, the index still says two.
    let report = check_integrity(&fixture_catalog("stale-index")).unwrap();

    assert_eq!(report.issues.len(), 1, "{:#?}", report.issues);
    let issue = &report.issues[0];
    assert_eq!(issue.id, 1);
    assert_eq!(issue.field, Field::VerseCount);
    assert_eq!(issue.expected, "2");
    assert_eq!(issue.actual, "3");

    let msg = issue.to_string();
    assert!(msg.contains('1') && msg.contains("verse count"), "got: {}", msg);
}

#[test]
fn test_into_result_fails_on_issue() {
    let err = check_integrity(&fixture_catalog("stale-index"))
        .unwrap()
        .into_result()
        .unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("verse count"));
}

#[test]
fn test_missing_record_aborts_check() {
    let err = check_integrity(&fixture_catalog("missing-hymn")).unwrap_err();
    assert_eq!(err.missing_hymn(), Some(2));
}

#[test]
fn test_chorus_and_title_edits_detected() {
    let dir = scratch_copy("valid");
    let path = dir.path().join("hymns/hymn_002.json");
    let mut record: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    record["title"] = "Bwana Yesu Asifiwe Milele".into();
    record["chorus"]["text"] = serde_json::json!([""]);
    std::fs::write(&path, serde_json::to_string(&record).unwrap()).unwrap();

    let report = check_integrity(&Catalog::at(dir.path())).unwrap();
    let fields: Vec<Field> = report.issues_for(2).map(|i| i.field).collect();
    assert_eq!(fields, vec![Field::Title, Field::Chorus]);
    assert_eq!(report.issues.len(), 2);
}

#[test]
fn test_record_id_disagreeing_with_entry() {
    let dir = scratch_copy("valid");
    let path = dir.path().join("hymns/hymn_003.json");
    let mut record: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    record["id"] = 33.into();
    std::fs::write(&path, serde_json::to_string(&record).unwrap()).unwrap();

    let report = check_integrity(&Catalog::at(dir.path())).unwrap();
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].field, Field::Id);
    assert_eq!(report.issues[0].id, 3);
}

#[test]
fn test_category_tags_and_subtitle_drift() {
    let dir = scratch_copy("valid");
    edit_record(dir.path(), "hymn_001.json", |record| {
        record["category"] = "funeral".into();
        record["tags"] = serde_json::json!(["faraja", "neema"]);
        record["subtitle"] = "Love Divine".into();
    });
    let catalog = Catalog::at(dir.path());

    // The four-field check and the lookup tables are both blind to this.
    assert!(check_integrity(&catalog).unwrap().is_ok());
    assert!(check_lookups(catalog.index().unwrap()).is_empty());

    let report = check_metadata(&catalog).unwrap();
    assert_eq!(report.checked, 3);
    let fields: Vec<Field> = report.issues_for(1).map(|i| i.field).collect();
    assert_eq!(fields, vec![Field::Subtitle, Field::Category, Field::Tags]);
    assert_eq!(report.issues.len(), 3);
    assert!(report.messages()[1].contains("index: worship, record: funeral"));
}

#[test]
fn test_stale_index_metadata_still_matches() {
    // Only the verse count drifted in this fixture.
    assert!(check_metadata(&fixture_catalog("stale-index")).unwrap().is_ok());
}

#[test]
fn test_chorus_without_text_is_a_mismatch_not_a_failure() {
    let dir = scratch_copy("valid");
    edit_record(dir.path(), "hymn_001.json", |record| {
        record["chorus"] = serde_json::json!({ "position": "at_end" });
    });

    let report = check_integrity(&Catalog::at(dir.path())).unwrap();
    assert_eq!(report.issues.len(), 1, "{:#?}", report.issues);
    assert_eq!(report.issues[0].id, 1);
    assert_eq!(report.issues[0].field, Field::Chorus);
}
