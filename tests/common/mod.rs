//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use regolith::{Document, DocumentType, SearchResult, Snapshot};

// Re-export canonical test utilities from regolith::testing
pub use regolith::testing::{jezero_corpus, make_corpus, make_doc, make_location};

/// Build a snapshot, panicking on build errors.
pub fn build_snapshot(docs: Vec<Document>) -> Snapshot {
    Snapshot::build(docs).expect("test corpus should build")
}

/// Build, serialize and reload, so tests exercise the loaded path.
pub fn build_loaded(docs: Vec<Document>) -> Snapshot {
    let json = build_snapshot(docs).to_json().expect("serialize");
    Snapshot::from_json(&json).expect("reload")
}

/// Result ids in rank order.
pub fn ids(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.document.id.as_str()).collect()
}

/// A document of the given type with only a title.
pub fn titled(id: &str, title: &str, doc_type: DocumentType) -> Document {
    Document::new(id, title, format!("/{}", id), doc_type)
}

/// Write a file, creating parent directories.
pub fn write_file(dir: &Path, name: &str, body: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, body).unwrap();
}

/// Lay out a small content tree: two articles (one draft) and two locations.
pub fn write_content_fixture(dir: &Path) {
    write_file(
        dir,
        "manifest.json",
        r#"{
            "version": 1,
            "articles": ["blog/moxie.json", "blog/draft.json"],
            "locations": ["locations/jezero.json", "locations/olympus.json"]
        }"#,
    );
    write_file(
        dir,
        "blog/moxie.json",
        r#"{
            "slug": "moxie",
            "title": "Making oxygen on Mars",
            "description": "How MOXIE split CO2 in Jezero crater",
            "body": "MOXIE produced oxygen sixteen times during the Perseverance mission.",
            "category": "infrastructure",
            "tags": ["isru", "oxygen"],
            "pubDate": "2024-03-01T00:00:00Z"
        }"#,
    );
    write_file(
        dir,
        "blog/draft.json",
        r#"{
            "slug": "secret",
            "title": "Unfinished thoughts on terraforming",
            "draft": true
        }"#,
    );
    write_file(
        dir,
        "locations/jezero.json",
        r#"{
            "slug": "jezero",
            "name": "Jezero Crater",
            "description": "Ancient lake delta",
            "body": "Landing site of Perseverance.",
            "region": "Isidis Planitia",
            "features": ["delta", "crater"]
        }"#,
    );
    write_file(
        dir,
        "locations/olympus.json",
        r#"{
            "slug": "olympus",
            "name": "Olympus Mons",
            "description": "The tallest volcano in the solar system",
            "region": "Tharsis",
            "features": ["volcano", "shield"]
        }"#,
    );
}
