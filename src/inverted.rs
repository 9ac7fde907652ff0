// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction.
//!
//! Each document is cut into its five fields, each field is tokenized on its
//! own, and every (document, field, term) triple becomes one posting carrying
//! the term frequency and occurrence offsets.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **UNIQUE_IDS**: duplicate ids abort the build. No partial index.
//! 2. **VALID_DOCS**: an invalid document aborts the build.
//! 3. **BUILD_ORDER**: posting lists are in document build order, then field
//!    order. Ranking ties are broken by this order.
//! 4. **PURE**: same input, same index. Parallel and sequential builds agree.

use std::collections::{BTreeMap, HashMap, HashSet};

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{Result, SearchError};
use crate::index::{DocumentStore, Index, Posting};
use crate::types::{Document, Field};
use crate::utils::tokenize;

/// Build an index and its document store from documents in build order.
pub fn build(documents: Vec<Document>) -> Result<(Index, DocumentStore)> {
    let index = build_index(&documents)?;
    let store = DocumentStore::from_documents(documents)?;
    Ok((index, store))
}

/// Same as [`build`], tokenizing documents on the rayon pool.
pub fn build_parallel(documents: Vec<Document>) -> Result<(Index, DocumentStore)> {
    let index = build_index_parallel(&documents)?;
    let store = DocumentStore::from_documents(documents)?;
    Ok((index, store))
}

/// Build only the inverted index; the caller keeps the documents.
pub fn build_index(documents: &[Document]) -> Result<Index> {
    check_documents(documents)?;

    let per_doc: Vec<Vec<(String, Posting)>> = documents
        .iter()
        .enumerate()
        .map(|(ordinal, doc)| index_document(ordinal as u32, doc))
        .collect();

    Ok(assemble(documents, per_doc))
}

/// Build an index using parallel map-reduce.
///
/// 1. **Map phase**: tokenize each document on its own task
/// 2. **Reduce phase**: merge per-document postings in build order
///
/// Rayon's indexed `collect` keeps document order, so the merge yields the
/// exact posting lists `build_index` would.
#[cfg(feature = "parallel")]
pub fn build_index_parallel(documents: &[Document]) -> Result<Index> {
    check_documents(documents)?;

    let per_doc: Vec<Vec<(String, Posting)>> = documents
        .par_iter()
        .enumerate()
        .map(|(ordinal, doc)| index_document(ordinal as u32, doc))
        .collect();

    Ok(assemble(documents, per_doc))
}

/// Sequential version for non-parallel builds (WASM).
#[cfg(not(feature = "parallel"))]
pub fn build_index_parallel(documents: &[Document]) -> Result<Index> {
    build_index(documents)
}

/// Validate every document and reject duplicate ids before any indexing work.
fn check_documents(documents: &[Document]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(documents.len());
    for doc in documents {
        doc.validate()?;
        if !seen.insert(doc.id.as_str()) {
            return Err(SearchError::DuplicateDocument { id: doc.id.clone() });
        }
    }
    Ok(())
}

/// Postings for one document: one per (field, term), fields in indexing order,
/// terms in first-occurrence order within the field.
fn index_document(ordinal: u32, doc: &Document) -> Vec<(String, Posting)> {
    let mut out = Vec::new();

    for field in Field::ALL {
        let text = doc.field_text(field);
        let mut slots: HashMap<String, usize> = HashMap::new();
        let mut grouped: Vec<(String, Vec<u32>)> = Vec::new();

        for token in tokenize(&text) {
            // Document::validate caps fields at MAX_FIELD_BYTES.
            let offset = token.offset as u32;
            match slots.get(&token.term) {
                Some(&slot) => grouped[slot].1.push(offset),
                None => {
                    slots.insert(token.term.clone(), grouped.len());
                    grouped.push((token.term, vec![offset]));
                }
            }
        }

        out.extend(grouped.into_iter().map(|(term, positions)| {
            let posting = Posting {
                doc: ordinal,
                field,
                term_freq: positions.len() as u32,
                positions,
            };
            (term, posting)
        }));
    }

    out
}

fn assemble(documents: &[Document], per_doc: Vec<Vec<(String, Posting)>>) -> Index {
    let mut terms: BTreeMap<String, Vec<Posting>> = BTreeMap::new();
    for postings in per_doc {
        for (term, posting) in postings {
            terms.entry(term).or_default().push(posting);
        }
    }

    let refs: Vec<String> = documents.iter().map(|d| d.id.clone()).collect();
    let index = Index::from_parts(refs, terms);

    debug!(
        "built index: {} documents, {} terms, {} postings",
        index.doc_count(),
        index.term_count(),
        index.posting_count()
    );

    index
}

impl Index {
    /// Build an index from documents in build order. See [`build_index`].
    pub fn build(documents: &[Document]) -> Result<Self> {
        build_index(documents)
    }
}
