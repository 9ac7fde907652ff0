// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The built index and the document store that travels with it.
//!
//! # Invariants (checked by `verify` when a snapshot is loaded)
//!
//! - **POSTING_WELLFORMED**: every posting's `doc < refs.len()`,
//!   `term_freq == positions.len() > 0`
//! - **NON_EMPTY**: every term has at least one posting
//! - **BUILD_ORDER**: each posting list is ordered by `doc`, then by field
//! - **BOOSTS**: every field has a finite, positive boost
//!
//! Neither type offers mutation. A content change means a new build; the old
//! index keeps answering until the host swaps it out.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::scoring::default_boosts;
use crate::types::{Document, Field};

/// Snapshot format version. Bumped whenever tokenization or the index layout
/// changes in a way that old snapshots can't be read correctly.
pub const FORMAT_VERSION: u32 = 1;

/// One (document, field, term) occurrence record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    /// Build-order ordinal of the document (index into `Index::refs`).
    pub doc: u32,
    pub field: Field,
    #[serde(rename = "tf")]
    pub term_freq: u32,
    /// Byte offsets of each occurrence in the field's raw text.
    #[serde(rename = "pos")]
    pub positions: Vec<u32>,
}

/// Inverted index: term → postings, plus the boosts it was built with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Index {
    pub(crate) version: u32,
    pub(crate) boosts: BTreeMap<Field, f64>,
    /// Document ids in build order. Postings refer to documents by position here.
    pub(crate) refs: Vec<String>,
    pub(crate) terms: BTreeMap<String, Vec<Posting>>,
}

impl Index {
    pub(crate) fn from_parts(refs: Vec<String>, terms: BTreeMap<String, Vec<Posting>>) -> Self {
        Self {
            version: FORMAT_VERSION,
            boosts: default_boosts().into_iter().collect(),
            refs,
            terms,
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Boost baked into this index for `field`.
    pub fn boost(&self, field: Field) -> f64 {
        self.boosts
            .get(&field)
            .copied()
            .unwrap_or_else(|| field.boost())
    }

    pub fn doc_count(&self) -> usize {
        self.refs.len()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn posting_count(&self) -> usize {
        self.terms.values().map(Vec::len).sum()
    }

    /// Document id for a build-order ordinal.
    pub fn doc_ref(&self, ordinal: u32) -> Option<&str> {
        self.refs.get(ordinal as usize).map(String::as_str)
    }

    pub fn refs(&self) -> &[String] {
        &self.refs
    }

    /// Postings for an already-normalized term. Empty if the term is unknown.
    pub fn postings(&self, term: &str) -> &[Posting] {
        self.terms.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every term with its postings, in lexicographic term order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &[Posting])> {
        self.terms.iter().map(|(t, p)| (t.as_str(), p.as_slice()))
    }

    /// Number of distinct terms that occur in each field.
    pub fn terms_per_field(&self) -> BTreeMap<Field, usize> {
        let mut counts: BTreeMap<Field, usize> = BTreeMap::new();
        for postings in self.terms.values() {
            let mut seen: Vec<Field> = postings.iter().map(|p| p.field).collect();
            seen.sort();
            seen.dedup();
            for field in seen {
                *counts.entry(field).or_default() += 1;
            }
        }
        counts
    }
}

/// Ordered `id → Document` mapping, co-serialized with the index.
///
/// Iteration follows insertion order; lookups by id are O(1).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentStore {
    docs: Vec<Document>,
    by_id: HashMap<String, usize>,
}

impl DocumentStore {
    /// Build a store, rejecting duplicate ids.
    pub fn from_documents(docs: Vec<Document>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(docs.len());
        for (i, doc) in docs.iter().enumerate() {
            if by_id.insert(doc.id.clone(), i).is_some() {
                return Err(SearchError::DuplicateDocument { id: doc.id.clone() });
            }
        }
        Ok(Self { docs, by_id })
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.by_id.get(id).map(|&i| &self.docs[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Documents in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.docs.iter()
    }

    pub fn into_documents(self) -> Vec<Document> {
        self.docs
    }
}
