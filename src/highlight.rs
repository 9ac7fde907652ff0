// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result presentation: term highlighting and excerpt windows.
//!
//! Both helpers work on raw field text and never change a character of it;
//! highlighting only inserts marker strings, excerpts only cut and add `...`.

use std::collections::HashSet;

use crate::types::SearchResult;
use crate::utils::{fold_char, normalize, tokenize, word_spans};

/// Excerpt length used when the caller has no preference.
pub const DEFAULT_EXCERPT_LENGTH: usize = 200;

const ELLIPSIS: &str = "...";

/// Strings inserted around each highlighted word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub open: String,
    pub close: String,
}

impl Marker {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// `<mark>` / `</mark>`.
    pub fn html() -> Self {
        Self::new("<mark>", "</mark>")
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::html()
    }
}

/// Wrap every whole-word occurrence of any term in `<mark>` tags.
///
/// ```
/// use regolith::highlight_terms;
///
/// let out = highlight_terms("Jezero crater, lake-delta", &["jezero", "delta"]);
/// assert_eq!(out, "<mark>Jezero</mark> crater, lake-<mark>delta</mark>");
/// ```
pub fn highlight_terms<S: AsRef<str>>(text: &str, terms: &[S]) -> String {
    highlight_terms_with(text, terms, &Marker::html())
}

/// [`highlight_terms`] with a caller-chosen marker.
///
/// Terms go through the index tokenizer, so a word is highlighted when its
/// normalized form equals a normalized term. A multi-word term highlights
/// each of its words.
pub fn highlight_terms_with<S: AsRef<str>>(text: &str, terms: &[S], marker: &Marker) -> String {
    let wanted: HashSet<String> = terms
        .iter()
        .flat_map(|t| tokenize(t.as_ref()))
        .map(|token| token.term)
        .collect();
    if wanted.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + 16);
    let mut cursor = 0;
    for (start, end) in word_spans(text) {
        if wanted.contains(&normalize(&text[start..end])) {
            out.push_str(&text[cursor..start]);
            out.push_str(&marker.open);
            out.push_str(&text[start..end]);
            out.push_str(&marker.close);
            cursor = end;
        }
    }
    out.push_str(&text[cursor..]);
    out
}

/// A window of at most `max_length` characters around the first occurrence
/// of any term.
///
/// Terms are first matched as whole words through the index tokenizer, so
/// "ice" skips "price" and "gale" finds "Galé". Only when no whole word
/// matches does a case-insensitive substring search run, which lets a single
/// letter find itself inside a word. The window starts `max_length / 2`
/// characters before the match, clamped to the content. `...` marks each
/// end that was cut.
///
/// When no term occurs, the excerpt is the start of `content`. A
/// `max_length` at least as long as the content returns it whole.
pub fn extract_excerpt<S: AsRef<str>>(content: &str, terms: &[S], max_length: usize) -> String {
    if max_length == 0 {
        return String::new();
    }

    let chars: Vec<char> = content.chars().collect();
    let total = chars.len();

    let found =
        first_word_match(content, terms).or_else(|| first_substring_match(&chars, terms));
    let start = match found {
        Some(pos) => {
            let start = pos.saturating_sub(max_length / 2);
            if max_length > total - start {
                total.saturating_sub(max_length)
            } else {
                start
            }
        }
        None => 0,
    };
    let end = start.saturating_add(max_length).min(total);

    let mut excerpt = String::with_capacity(end - start + 2 * ELLIPSIS.len());
    if start > 0 {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt.extend(&chars[start..end]);
    if end < total {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt
}

/// Character index of the first word in `content` whose normalized form
/// equals a normalized term.
fn first_word_match<S: AsRef<str>>(content: &str, terms: &[S]) -> Option<usize> {
    let wanted: HashSet<String> = terms
        .iter()
        .flat_map(|term| tokenize(term.as_ref()))
        .map(|token| token.term)
        .collect();
    if wanted.is_empty() {
        return None;
    }

    tokenize(content)
        .into_iter()
        .find(|token| wanted.contains(&token.term))
        .map(|token| content[..token.offset].chars().count())
}

/// Character index of the earliest case-insensitive substring occurrence of
/// any term.
fn first_substring_match<S: AsRef<str>>(chars: &[char], terms: &[S]) -> Option<usize> {
    let folded: Vec<char> = chars.iter().map(|&c| fold_char(c)).collect();

    terms
        .iter()
        .filter_map(|term| {
            let needle: Vec<char> = term.as_ref().trim().chars().map(fold_char).collect();
            if needle.is_empty() || needle.len() > folded.len() {
                return None;
            }
            folded.windows(needle.len()).position(|w| w == needle.as_slice())
        })
        .min()
}

/// Every distinct matched term of a result, ready for the helpers above.
pub fn terms_from_matches(result: &SearchResult) -> Vec<String> {
    result
        .matched_terms()
        .into_iter()
        .map(str::to_string)
        .collect()
}
