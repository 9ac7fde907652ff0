//! Loading must reject anything that is not a consistent snapshot, and never
//! panic doing so.

use regolith::snapshot::MAX_SNAPSHOT_SIZE;
use regolith::{compression, Snapshot};
use serde_json::{json, Value};

use crate::common::{build_snapshot, jezero_corpus, make_corpus};

fn snapshot_value() -> Value {
    let json = build_snapshot(jezero_corpus()).to_json().unwrap();
    serde_json::from_str(&json).unwrap()
}

fn assert_rejected(value: &Value) {
    let err = Snapshot::from_json(&value.to_string()).unwrap_err();
    assert!(err.is_snapshot_corrupt(), "expected corrupt, got {:?}", err);
}

#[test]
fn test_untouched_snapshot_loads() {
    let value = snapshot_value();
    assert!(Snapshot::from_json(&value.to_string()).is_ok());
}

#[test]
fn test_rejects_future_version() {
    let mut value = snapshot_value();
    value["index"]["version"] = json!(2);
    assert_rejected(&value);
}

#[test]
fn test_rejects_missing_or_bad_boost() {
    let mut value = snapshot_value();
    value["index"]["boosts"]
        .as_object_mut()
        .unwrap()
        .remove("title");
    assert_rejected(&value);

    let mut value = snapshot_value();
    value["index"]["boosts"]["tags"] = json!(-2.0);
    assert_rejected(&value);
}

#[test]
fn test_rejects_tf_position_mismatch() {
    let mut value = snapshot_value();
    value["index"]["terms"]["jezero"][0]["tf"] = json!(7);
    assert_rejected(&value);
}

#[test]
fn test_rejects_dangling_ordinal() {
    let mut value = snapshot_value();
    value["index"]["terms"]["jezero"][0]["doc"] = json!(99);
    assert_rejected(&value);
}

#[test]
fn test_rejects_empty_posting_list() {
    let mut value = snapshot_value();
    value["index"]["terms"]["jezero"] = json!([]);
    assert_rejected(&value);
}

#[test]
fn test_rejects_unsorted_postings() {
    let mut value = snapshot_value();
    value["index"]["terms"]["jezero"]
        .as_array_mut()
        .unwrap()
        .reverse();
    assert_rejected(&value);
}

#[test]
fn test_rejects_ref_without_document() {
    let mut value = snapshot_value();
    value["index"]["refs"][0] = json!("ghost");
    assert_rejected(&value);
}

#[test]
fn test_rejects_document_count_mismatch() {
    let mut value = snapshot_value();
    value["documents"].as_array_mut().unwrap().pop();
    assert_rejected(&value);
}

#[test]
fn test_rejects_pair_key_mismatch() {
    let mut value = snapshot_value();
    value["documents"][0][0] = json!("b");
    assert_rejected(&value);
}

#[test]
fn test_rejects_invalid_stored_document() {
    let mut value = snapshot_value();
    value["documents"][0][1]["title"] = json!("");
    assert_rejected(&value);
}

#[test]
fn test_rejects_unknown_document_type() {
    let mut value = snapshot_value();
    value["documents"][0][1]["type"] = json!("crater");
    assert_rejected(&value);
}

#[test]
fn test_rejects_non_snapshot_json() {
    for text in ["", "null", "[]", "{}", r#"{"index": {}}"#, "{\"documents\": []}"] {
        let err = Snapshot::from_json(text).unwrap_err();
        assert!(err.is_snapshot_corrupt(), "{:?} should be corrupt", text);
    }
}

#[test]
fn test_rejects_oversized_input_before_parsing() {
    let bytes = vec![b' '; MAX_SNAPSHOT_SIZE + 1];
    assert!(Snapshot::from_bytes(&bytes).unwrap_err().is_snapshot_corrupt());
}

#[test]
fn test_truncated_snapshot_never_panics() {
    let json = build_snapshot(make_corpus(5)).to_json().unwrap();
    let bytes = json.as_bytes();
    for cut in (0..bytes.len()).step_by(37) {
        assert!(Snapshot::from_bytes(&bytes[..cut]).is_err());
    }
}

#[test]
fn test_brotli_round_trip_preserves_results() {
    let built = build_snapshot(make_corpus(40));
    let json = built.to_json().unwrap();

    let compressed = compression::compress(json.as_bytes(), compression::DEFAULT_QUALITY).unwrap();
    assert!(compressed.len() < json.len());

    let restored = compression::decompress(&compressed).unwrap();
    let loaded = Snapshot::from_bytes(&restored).unwrap();
    assert_eq!(
        built.search("crater dust", 10).unwrap(),
        loaded.search("crater dust", 10).unwrap()
    );
}

#[test]
fn test_garbage_brotli_is_corrupt() {
    let err = compression::decompress(b"definitely not brotli").unwrap_err();
    assert!(err.is_snapshot_corrupt());
}
