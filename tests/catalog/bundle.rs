//! Tests for bundle assembly and index regeneration.

use std::fs;

use crate::common::{fixture_catalog, scratch_copy, timestamp};
use tempfile::TempDir;
use tenzi::{generate, reindex, write_bundle, Bundle, Catalog};

#[test]
fn test_bundle_from_valid_catalog() {
    let catalog = fixture_catalog("valid");
    let bundle = generate(&catalog).unwrap();

    assert_eq!(bundle.total_hymns, 3);
    assert_eq!(bundle.hymns.len(), bundle.total_hymns);
    assert_eq!(bundle.version, "1.2.0");
    assert_eq!(bundle.last_updated, catalog.index().unwrap().last_updated);
    assert_eq!(bundle.schema["title"], "Hymn");
}

#[test]
fn test_bundle_keys_are_listed_ids() {
    let catalog = fixture_catalog("valid");
    let bundle = generate(&catalog).unwrap();
    let listed: Vec<String> = catalog.index().unwrap().ids().map(|id| id.to_string()).collect();

    for key in bundle.hymns.keys() {
        assert!(listed.contains(key), "unexpected key {}", key);
        assert_eq!(bundle.hymns[key].id.to_string(), *key);
    }
}

#[test]
fn test_bundle_fails_on_missing_record() {
    let err = generate(&fixture_catalog("missing-hymn")).unwrap_err();
    assert_eq!(err.missing_hymn(), Some(2));
}

#[test]
fn test_bundle_output_is_byte_identical() {
    let out = TempDir::new().unwrap();
    let first_path = out.path().join("first.json");
    let second_path = out.path().join("second.json");

    let first = write_bundle(&generate(&fixture_catalog("valid")).unwrap(), &first_path, true).unwrap();
    let second = write_bundle(&generate(&fixture_catalog("valid")).unwrap(), &second_path, true).unwrap();

    assert_eq!(first.checksum, second.checksum);
    assert_eq!(fs::read(&first_path).unwrap(), fs::read(&second_path).unwrap());
}

#[test]
fn test_bundle_json_shape() {
    let out = TempDir::new().unwrap();
    let path = out.path().join("nested/dir/bundle.json");
    write_bundle(&generate(&fixture_catalog("valid")).unwrap(), &path, false).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["total_hymns"], 3);
    assert_eq!(json["hymns"]["1"]["title"], "Mungu Ni Pendo");
    assert_eq!(json["index"]["hymns"][0]["verseCount"], 2);
    assert!(json["schema"].is_object());

    let parsed: Bundle = serde_json::from_value(json).unwrap();
    assert_eq!(parsed.hymns.len(), 3);
}

#[test]
fn test_reindex_repairs_stale_index() {
    let dir = scratch_copy("stale-index");
    let catalog = Catalog::at(dir.path());

    let fresh = reindex(&catalog, "1.2.1", timestamp()).unwrap();
    assert_eq!(fresh.info(1).unwrap().verse_count, 3);
    assert_eq!(fresh.total_hymns, 3);

    fs::write(
        dir.path().join("index.json"),
        serde_json::to_string_pretty(&fresh).unwrap(),
    )
    .unwrap();

    let repaired = Catalog::at(dir.path());
    assert!(tenzi::check_integrity(&repaired).unwrap().is_ok());
    assert!(tenzi::check_lookups(repaired.index().unwrap()).is_empty());
}

#[test]
fn test_reindex_of_valid_catalog_matches_checked_in_index() {
    let catalog = fixture_catalog("valid");
    let current = catalog.index().unwrap();
    let fresh = reindex(&catalog, &current.version, current.last_updated.clone()).unwrap();
    assert_eq!(&fresh, current);
}

#[test]
fn test_bundle_keeps_index_and_records_as_written() {
    let dir = scratch_copy("valid");

    let index_path = dir.path().join("index.json");
    let mut index: serde_json::Value = serde_json::from_str(&fs::read_to_string(&index_path).unwrap()).unwrap();
    index["last_updated"] = "2024-01-15T13:30:00+03:00".into();
    index["notes"] = "toleo la majaribio".into();
    index["hymns"][0]["audio"] = "hymn_001.mp3".into();
    fs::write(&index_path, serde_json::to_string_pretty(&index).unwrap()).unwrap();

    let record_path = dir.path().join("hymns/hymn_001.json");
    let mut record: serde_json::Value = serde_json::from_str(&fs::read_to_string(&record_path).unwrap()).unwrap();
    record["created_at"] = "2024-01-15".into();
    record["language"] = "sw".into();
    fs::write(&record_path, serde_json::to_string_pretty(&record).unwrap()).unwrap();

    let catalog = Catalog::at(dir.path());
    let hymn = catalog.hymn(1).unwrap();
    assert_eq!(hymn.created_at.unwrap().as_str(), "2024-01-15");

    let bundle = generate(&catalog).unwrap();
    assert_eq!(bundle.last_updated.as_str(), "2024-01-15T13:30:00+03:00");

    let json = serde_json::to_value(&bundle).unwrap();
    assert_eq!(json["last_updated"], "2024-01-15T13:30:00+03:00");
    assert_eq!(json["index"]["last_updated"], "2024-01-15T13:30:00+03:00");
    assert_eq!(json["index"]["notes"], "toleo la majaribio");
    assert_eq!(json["index"]["hymns"][0]["audio"], "hymn_001.mp3");
    assert_eq!(json["hymns"]["1"]["created_at"], "2024-01-15");
    assert_eq!(json["hymns"]["1"]["language"], "sw");
}

#[test]
fn test_bundle_rejects_record_listed_under_other_id() {
    let dir = scratch_copy("valid");
    let path = dir.path().join("hymns/hymn_003.json");
    let mut record: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    record["id"] = 33.into();
    fs::write(&path, serde_json::to_string(&record).unwrap()).unwrap();

    let err = generate(&Catalog::at(dir.path())).unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("holds hymn 33 but is listed as hymn 3"), "got: {}", err);
}
