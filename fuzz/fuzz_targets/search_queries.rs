// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Arbitrary queries against a fixed corpus.

#![no_main]

use libfuzzer_sys::fuzz_target;
use regolith::testing::make_corpus;
use regolith::Snapshot;

fuzz_target!(|query: &[u8]| {
    static SNAPSHOT: std::sync::OnceLock<Snapshot> = std::sync::OnceLock::new();
    let snapshot = SNAPSHOT.get_or_init(|| Snapshot::build(make_corpus(200)).unwrap());

    let query = String::from_utf8_lossy(query);
    let results = snapshot.search(&query, 10).unwrap();

    assert!(results.len() <= 10);
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for result in &results {
        assert!(result.score > 0.0);
        assert!(snapshot.store().contains(&result.document.id));
    }
});
