// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query execution against a built or loaded index.
//!
//! The query is tokenized with the indexing tokenizer, each distinct token is
//! looked up once, and every posting it hits adds `boost × tf` to its
//! document. There is no AND semantics: a document matching any token in any
//! field is a candidate.
//!
//! Queries only read the index and store, so one pair can serve any number of
//! threads at once.

use std::collections::{BTreeMap, HashMap};

use crate::error::{InvalidArgumentError, Result};
use crate::index::{DocumentStore, Index, Posting};
use crate::scoring::ranking::{rank, Hit};
use crate::scoring::term_score;
use crate::types::{Field, MatchedTerm, SearchResult};
use crate::utils::tokenize;

/// Result limit used by the site's search box.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Per-document accumulator. Postings are kept by reference so match metadata
/// is only materialized for results that survive truncation.
#[derive(Default)]
struct Candidate<'a> {
    score: f64,
    hits: Vec<(&'a str, &'a Posting)>,
}

/// Distinct query terms in first-seen order.
///
/// Repeating a word in the query does not count it twice.
pub fn query_terms(query: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for token in tokenize(query) {
        if !terms.contains(&token.term) {
            terms.push(token.term);
        }
    }
    terms
}

/// Run a free-text query and return at most `max_results` ranked results.
///
/// - `max_results == 0` is rejected, not clamped.
/// - A blank query (or one with no word characters) returns no results.
/// - Ranking: score descending, then build order.
pub fn search(
    index: &Index,
    store: &DocumentStore,
    query: &str,
    max_results: usize,
) -> Result<Vec<SearchResult>> {
    if max_results == 0 {
        return Err(InvalidArgumentError::MaxResults(max_results).into());
    }

    let terms = query_terms(query);
    if terms.is_empty() {
        return Ok(Vec::new());
    }

    let mut candidates: HashMap<u32, Candidate<'_>> = HashMap::new();
    for term in &terms {
        for posting in index.postings(term) {
            let candidate = candidates.entry(posting.doc).or_default();
            candidate.score += term_score(index.boost(posting.field), posting.term_freq);
            candidate.hits.push((term.as_str(), posting));
        }
    }

    let hits: Vec<Hit> = candidates
        .iter()
        .map(|(&ordinal, c)| Hit {
            ordinal,
            score: c.score,
        })
        .collect();

    let results = rank(hits, max_results)
        .into_iter()
        .filter_map(|hit| {
            let candidate = candidates.remove(&hit.ordinal)?;
            let document = store.get(index.doc_ref(hit.ordinal)?)?.clone();
            Some(SearchResult {
                document,
                score: hit.score,
                matches: collect_matches(&candidate.hits),
            })
        })
        .collect();

    Ok(results)
}

fn collect_matches(hits: &[(&str, &Posting)]) -> BTreeMap<Field, Vec<MatchedTerm>> {
    let mut matches: BTreeMap<Field, Vec<MatchedTerm>> = BTreeMap::new();
    for (term, posting) in hits {
        matches.entry(posting.field).or_default().push(MatchedTerm {
            term: (*term).to_string(),
            positions: posting.positions.clone(),
        });
    }
    matches
}
