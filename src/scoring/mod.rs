// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! A result's score is the sum of `boost × term frequency` over every
//! (field, query term) pair it matched. Ranking sorts by that score and falls
//! back to build order, so identical input always yields identical output.

mod core;
pub mod ranking;

pub use core::*;
