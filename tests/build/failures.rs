//! Builds that must fail without writing anything.

use regolith::build::{run_build, BuildOptions};
use regolith::{SearchError, ValidationError};
use tempfile::TempDir;

use crate::common::write_file;

fn run(temp: &TempDir) -> regolith::Result<regolith::build::BuildReport> {
    run_build(temp.path(), &temp.path().join("out"), &BuildOptions::default())
}

#[test]
fn test_missing_manifest() {
    let temp = TempDir::new().unwrap();
    let err = run(&temp).unwrap_err();
    assert!(matches!(err, SearchError::Io(_)));
    assert!(!temp.path().join("out").exists());
}

#[test]
fn test_invalid_manifest_json() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "manifest.json", "{ not json");
    assert!(matches!(run(&temp).unwrap_err(), SearchError::Manifest(_)));
}

#[test]
fn test_missing_record_file() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "manifest.json",
        r#"{"version": 1, "locations": ["locations/gone.json"]}"#,
    );
    let err = run(&temp).unwrap_err();
    assert!(matches!(err, SearchError::Manifest(msg) if msg.contains("gone.json")));
}

#[test]
fn test_duplicate_slugs_abort_build() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "manifest.json",
        r#"{"version": 1, "locations": ["a.json", "b.json"]}"#,
    );
    write_file(temp.path(), "a.json", r#"{"slug": "gale", "name": "Gale Crater"}"#);
    write_file(temp.path(), "b.json", r#"{"slug": "gale", "name": "Gale again"}"#);

    let err = run(&temp).unwrap_err();
    assert!(matches!(err, SearchError::DuplicateDocument { id } if id == "location-gale"));
    assert!(!temp.path().join("out").exists());
}

#[test]
fn test_blank_title_aborts_build() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "manifest.json", r#"{"version": 1, "articles": ["a.json"]}"#);
    write_file(temp.path(), "a.json", r#"{"slug": "untitled", "title": "   "}"#);

    let err = run(&temp).unwrap_err();
    assert!(matches!(
        err,
        SearchError::Validation(ValidationError::MissingField { field: "title", .. })
    ));
}
