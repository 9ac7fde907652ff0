// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighting and excerpting over arbitrary text.
//!
//! Both slice on characters, so multi-byte input must never split a code point.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use regolith::{extract_excerpt, highlight_terms};

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    terms: Vec<String>,
    max_length: u8,
}

fuzz_target!(|input: Input| {
    let highlighted = highlight_terms(&input.text, &input.terms);
    if !input.text.contains("<mark>") && !input.text.contains("</mark>") {
        assert_eq!(
            highlighted.replace("<mark>", "").replace("</mark>", ""),
            input.text
        );
    }

    let max = input.max_length as usize;
    let excerpt = extract_excerpt(&input.text, &input.terms, max);
    assert!(excerpt.chars().count() <= max + 6);
});
