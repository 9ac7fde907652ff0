//! Serving through `LiveIndex`: degrade on bad input, swap under load.

use std::sync::Arc;
use std::thread;

use regolith::{LiveIndex, SearchError};

use crate::common::{build_snapshot, ids, jezero_corpus, make_corpus, make_doc};

#[test]
fn test_corrupt_snapshot_degrades() {
    let live = LiveIndex::from_snapshot("{\"index\": 42}");
    assert!(!live.is_available());
    assert!(live.unavailable_reason().unwrap().contains("snapshot corrupt"));
    assert!(live.search("jezero", 10).unwrap().is_empty());
    assert!(live.current().is_none());
}

#[test]
fn test_unavailable_still_rejects_zero_limit() {
    let live = LiveIndex::unavailable("not fetched yet");
    assert!(matches!(
        live.search("jezero", 0),
        Err(SearchError::InvalidArgument(_))
    ));
}

#[test]
fn test_loads_from_bytes() {
    let json = build_snapshot(jezero_corpus()).to_json().unwrap();
    let live = LiveIndex::from_snapshot_bytes(json.as_bytes());
    assert!(live.is_available());
    assert_eq!(ids(&live.search("jezero", 10).unwrap()), vec!["a", "b"]);
}

#[test]
fn test_swap_recovers_unavailable_index() {
    let live = LiveIndex::unavailable("boot");
    assert!(live.swap(build_snapshot(jezero_corpus())).is_none());
    assert!(live.is_available());
    assert!(live.unavailable_reason().is_none());
    assert_eq!(live.search("crater", 10).unwrap()[0].document.id, "a");
}

#[test]
fn test_swap_returns_previous_snapshot() {
    let live = LiveIndex::new(build_snapshot(jezero_corpus()));
    let held = live.current().unwrap();

    let previous = live
        .swap(build_snapshot(vec![make_doc("c", "Phobos transit", "")]))
        .unwrap();
    assert!(Arc::ptr_eq(&held, &previous));

    // Old handles keep answering from the old data.
    assert_eq!(ids(&held.search("jezero", 10).unwrap()), vec!["a", "b"]);
    assert!(live.search("jezero", 10).unwrap().is_empty());
    assert_eq!(ids(&live.search("phobos", 10).unwrap()), vec!["c"]);
}

#[test]
fn test_readers_see_whole_snapshots_during_swaps() {
    let live = Arc::new(LiveIndex::new(build_snapshot(make_corpus(30))));
    let small = build_snapshot(make_corpus(3)).to_json().unwrap();
    let large = build_snapshot(make_corpus(30)).to_json().unwrap();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let live = Arc::clone(&live);
            thread::spawn(move || {
                for _ in 0..200 {
                    let snapshot = live.current().unwrap();
                    let count = snapshot.index().doc_count();
                    assert!(count == 3 || count == 30);
                    assert_eq!(count, snapshot.store().len());
                }
            })
        })
        .collect();

    for i in 0..20 {
        let json = if i % 2 == 0 { &small } else { &large };
        live.swap(regolith::Snapshot::from_json(json).unwrap());
    }

    for reader in readers {
        reader.join().unwrap();
    }
}
