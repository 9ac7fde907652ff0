// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Consistency checks for loaded snapshots.
//!
//! A built index is consistent by construction. A deserialized one is just
//! JSON someone handed us, so before it answers a single query we check every
//! invariant the query engine relies on. Failing here turns into
//! `SnapshotCorrupt`; the alternative is wrong results or an index-out-of-range
//! panic halfway through a query.

use std::collections::HashSet;

use thiserror::Error;

use crate::error::ValidationError;
use crate::index::{DocumentStore, Index, FORMAT_VERSION};
use crate::types::{Document, Field};

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantError {
    #[error("unsupported format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("field '{field}' has no usable boost")]
    InvalidBoost { field: Field },

    #[error("document pair key '{key}' does not match document id '{id}'")]
    MismatchedPair { key: String, id: String },

    #[error("document id '{id}' appears more than once")]
    DuplicateDocument { id: String },

    #[error("document '{id}' is referenced more than once")]
    DuplicateRef { id: String },

    #[error("index references '{id}' but no such document is stored")]
    MissingDocument { id: String },

    #[error("index has {refs} documents but the store has {stored}")]
    MismatchedCounts { refs: usize, stored: usize },

    #[error(transparent)]
    InvalidDocument(#[from] ValidationError),

    #[error("empty term in dictionary")]
    EmptyTerm,

    #[error("posting list for '{term}' is empty")]
    EmptyPostingList { term: String },

    #[error("posting for '{term}' points at document {doc} but only {doc_count} exist")]
    InvalidDocOrdinal {
        term: String,
        doc: u32,
        doc_count: usize,
    },

    #[error("posting for '{term}' in document {doc} has tf {term_freq} but {positions} positions")]
    InvalidTermFreq {
        term: String,
        doc: u32,
        term_freq: u32,
        positions: usize,
    },

    #[error("posting list for '{term}' not in build order at position {position}")]
    UnsortedPostingList { term: String, position: usize },
}

/// Check the index on its own: version, boosts, and posting list shape.
pub fn check_index(index: &Index) -> Result<(), InvariantError> {
    if index.version != FORMAT_VERSION {
        return Err(InvariantError::UnsupportedVersion {
            found: index.version,
            expected: FORMAT_VERSION,
        });
    }

    for field in Field::ALL {
        match index.boosts.get(&field) {
            Some(boost) if boost.is_finite() && *boost > 0.0 => {}
            _ => return Err(InvariantError::InvalidBoost { field }),
        }
    }

    let doc_count = index.refs.len();
    for (term, postings) in &index.terms {
        if term.is_empty() {
            return Err(InvariantError::EmptyTerm);
        }
        if postings.is_empty() {
            return Err(InvariantError::EmptyPostingList { term: term.clone() });
        }

        for (position, posting) in postings.iter().enumerate() {
            if posting.doc as usize >= doc_count {
                return Err(InvariantError::InvalidDocOrdinal {
                    term: term.clone(),
                    doc: posting.doc,
                    doc_count,
                });
            }
            if posting.term_freq == 0 || posting.term_freq as usize != posting.positions.len() {
                return Err(InvariantError::InvalidTermFreq {
                    term: term.clone(),
                    doc: posting.doc,
                    term_freq: posting.term_freq,
                    positions: posting.positions.len(),
                });
            }
            // Strictly increasing by (doc, field).
            if position > 0 {
                let prev = &postings[position - 1];
                if (prev.doc, prev.field) >= (posting.doc, posting.field) {
                    return Err(InvariantError::UnsortedPostingList {
                        term: term.clone(),
                        position,
                    });
                }
            }
        }
    }

    Ok(())
}

/// Check a deserialized `[id, Document]` list before it becomes a store.
pub fn check_documents(pairs: &[(String, Document)]) -> Result<(), InvariantError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(pairs.len());
    for (key, doc) in pairs {
        if key != &doc.id {
            return Err(InvariantError::MismatchedPair {
                key: key.clone(),
                id: doc.id.clone(),
            });
        }
        doc.validate()?;
        if !seen.insert(key.as_str()) {
            return Err(InvariantError::DuplicateDocument { id: key.clone() });
        }
    }
    Ok(())
}

/// Check that the index and store describe the same document set.
pub fn check_pair(index: &Index, store: &DocumentStore) -> Result<(), InvariantError> {
    check_index(index)?;

    if index.refs.len() != store.len() {
        return Err(InvariantError::MismatchedCounts {
            refs: index.refs.len(),
            stored: store.len(),
        });
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(index.refs.len());
    for id in &index.refs {
        if !seen.insert(id.as_str()) {
            return Err(InvariantError::DuplicateRef { id: id.clone() });
        }
        if !store.contains(id) {
            return Err(InvariantError::MissingDocument { id: id.clone() });
        }
    }

    Ok(())
}
