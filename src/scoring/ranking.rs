// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored documents get sorted.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Build order** - the document indexed first wins a tie
//!
//! Build order is the final tiebreaker, so two results never compare equal
//! and the output is fully deterministic.

use std::cmp::Ordering;

/// A scored document, identified by its build-order ordinal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub ordinal: u32,
    pub score: f64,
}

/// Compare two hits for ranking. `Less` means `a` ranks first.
pub fn compare_hits(a: &Hit, b: &Hit) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.ordinal.cmp(&b.ordinal))
}

/// Sort hits into ranking order and keep the best `limit`.
pub fn rank(mut hits: Vec<Hit>, limit: usize) -> Vec<Hit> {
    hits.sort_by(compare_hits);
    hits.truncate(limit);
    hits
}
