// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snapshot loading under adversarial input.
//!
//! A snapshot is fetched over the network, so a truncated download or a
//! tampered file must end in `SnapshotCorrupt`, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use regolith::verify::check_pair;
use regolith::{compression, Snapshot};

fuzz_target!(|data: &[u8]| {
    if let Ok(snapshot) = Snapshot::from_bytes(data) {
        // Anything that loads is consistent and queryable.
        assert!(check_pair(snapshot.index(), snapshot.store()).is_ok());
        let _ = snapshot.search("mars", 10);

        let json = snapshot.to_json().unwrap();
        assert_eq!(Snapshot::from_json(&json).unwrap(), snapshot);
    }

    let _ = compression::decompress(data);
});
