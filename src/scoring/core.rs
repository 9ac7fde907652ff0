// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Plain TF × boost. No IDF, no length normalization, no position bonus: a
//! title hit is worth ten content hits, and that's the whole model.
//!
//! # Constants
//!
//! | Field       | Boost |
//! |-------------|-------|
//! | Title       | 10.0  |
//! | Description | 5.0   |
//! | Category    | 3.0   |
//! | Tags        | 2.0   |
//! | Content     | 1.0   |
//!
//! The builder copies these into every index it produces, and the query
//! engine reads boosts from the index, so a loaded snapshot never depends on
//! the constants of the binary that loads it.

use crate::types::Field;

// =============================================================================
// FIELD BOOSTS
// =============================================================================

pub const TITLE_BOOST: f64 = 10.0;
pub const DESCRIPTION_BOOST: f64 = 5.0;
pub const CATEGORY_BOOST: f64 = 3.0;
pub const TAGS_BOOST: f64 = 2.0;
pub const CONTENT_BOOST: f64 = 1.0;

/// Boost table in indexing order, as baked into a fresh index.
pub fn default_boosts() -> Vec<(Field, f64)> {
    Field::ALL.iter().map(|f| (*f, f.boost())).collect()
}

/// Contribution of one (field, term) match: `boost × term frequency`.
#[inline]
pub fn term_score(boost: f64, term_freq: u32) -> f64 {
    boost * f64::from(term_freq)
}
