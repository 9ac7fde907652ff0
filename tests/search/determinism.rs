//! Same input, same output.

use crate::common::{build_snapshot, make_corpus};
use regolith::Snapshot;

#[test]
fn test_repeated_queries_identical() {
    let snapshot = build_snapshot(make_corpus(200));
    let first = snapshot.search("crater dust", 10).unwrap();
    for _ in 0..5 {
        assert_eq!(snapshot.search("crater dust", 10).unwrap(), first);
    }
}

#[test]
fn test_rebuild_serializes_identically() {
    let a = build_snapshot(make_corpus(150)).to_json().unwrap();
    let b = build_snapshot(make_corpus(150)).to_json().unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_parallel_build_matches_sequential() {
    let sequential = Snapshot::build(make_corpus(300)).unwrap();
    let parallel = Snapshot::build_parallel(make_corpus(300)).unwrap();
    assert_eq!(sequential, parallel);
    assert_eq!(
        sequential.search("volcano oxygen", 20).unwrap(),
        parallel.search("volcano oxygen", 20).unwrap()
    );
}

#[test]
fn test_concurrent_queries_agree() {
    let snapshot = std::sync::Arc::new(build_snapshot(make_corpus(100)));
    let expected = snapshot.search("rover delta", 10).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let snapshot = std::sync::Arc::clone(&snapshot);
            std::thread::spawn(move || snapshot.search("rover delta", 10).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
