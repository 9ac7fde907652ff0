//! Tokenization and string normalization.
//!
//! One tokenizer serves indexing, querying and highlighting. If these ever
//! disagree, a term can be indexed and never found, so everything that turns
//! text into terms goes through [`tokenize`].

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// A normalized term and the byte offset where its source word starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub term: String,
    pub offset: usize,
}

/// Normalize a string for search: lowercase, strip diacritics, and collapse whitespace.
///
/// - "Galé" → "gale"
/// - "Éire" → "eire"
/// - "  Olympus   Mons " → "olympus mons"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
/// 4. Collapse whitespace
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight normalization for WASM builds without unicode-normalization.
/// Lowercases and collapses whitespace only.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Combining marks (Unicode category Mn) for the scripts we expect in content.
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Characters that belong to a word. Combining marks stay attached to the
/// letter they modify, so decomposed input doesn't split words in half.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || is_combining_mark(c)
}

/// Split text into normalized terms.
///
/// Words are maximal runs of alphanumeric characters. Each word is
/// normalized; words that normalize to nothing are dropped. No stemming and
/// no stop words: "rovers" and "rover" are different terms, and "the" is a
/// term like any other.
///
/// Offsets are byte offsets into `text`, so `&text[offset..]` starts at the
/// word.
pub fn tokenize(text: &str) -> Vec<Token> {
    word_spans(text)
        .into_iter()
        .filter_map(|(start, end)| {
            let term = normalize(&text[start..end]);
            (!term.is_empty()).then_some(Token {
                term,
                offset: start,
            })
        })
        .collect()
}

/// Byte ranges `[start, end)` of every word in `text`, in order.
pub fn word_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        match (is_word_char(c), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                spans.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }

    spans
}

/// Case-fold a single character for substring comparison.
///
/// Takes the first char of the lowercase mapping so the folded text has the
/// same number of characters as the original.
#[inline]
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
