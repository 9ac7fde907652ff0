// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snapshot serialization.
//!
//! A snapshot is one JSON object carrying the index and the documents it
//! refers to:
//!
//! ```text
//! {
//!   "index":     { "version": 1, "boosts": {...}, "refs": [...], "terms": {...} },
//!   "documents": [ ["blog-oxygen", { "id": "blog-oxygen", ... }], ... ]
//! }
//! ```
//!
//! Documents are written as `[id, document]` pairs in store order, so the
//! store's insertion order survives the round trip.
//!
//! # Loading
//!
//! Every load goes through the same gate: size limit, JSON parse, then the
//! consistency checks in [`crate::verify`]. Any failure is
//! `SnapshotCorrupt`; nothing half-loaded is ever returned.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::index::{DocumentStore, Index};
use crate::inverted;
use crate::search;
use crate::types::{Document, SearchResult};
use crate::verify;

/// Maximum snapshot size accepted on load (100MB).
pub const MAX_SNAPSHOT_SIZE: usize = 100 * 1024 * 1024;

#[derive(Serialize)]
struct WireRef<'a> {
    index: &'a Index,
    documents: Vec<(&'a str, &'a Document)>,
}

#[derive(Deserialize)]
struct WireOwned {
    index: Index,
    documents: Vec<(String, Document)>,
}

fn wire<'a>(index: &'a Index, store: &'a DocumentStore) -> WireRef<'a> {
    WireRef {
        index,
        documents: store.iter().map(|d| (d.id.as_str(), d)).collect(),
    }
}

/// Serialize an index and its store to compact JSON.
pub fn serialize(index: &Index, store: &DocumentStore) -> Result<String> {
    serde_json::to_string(&wire(index, store)).map_err(SearchError::Serialization)
}

/// Serialize with indentation, for snapshots meant to be read by people.
pub fn serialize_pretty(index: &Index, store: &DocumentStore) -> Result<String> {
    serde_json::to_string_pretty(&wire(index, store)).map_err(SearchError::Serialization)
}

/// Load a snapshot from JSON text.
pub fn deserialize(text: &str) -> Result<(Index, DocumentStore)> {
    deserialize_bytes(text.as_bytes())
}

/// Load a snapshot from raw (uncompressed) bytes.
pub fn deserialize_bytes(bytes: &[u8]) -> Result<(Index, DocumentStore)> {
    if bytes.len() > MAX_SNAPSHOT_SIZE {
        return Err(SearchError::corrupt(format!(
            "snapshot is {} bytes, limit is {}",
            bytes.len(),
            MAX_SNAPSHOT_SIZE
        )));
    }

    let wire: WireOwned = serde_json::from_slice(bytes)
        .map_err(|e| SearchError::corrupt(format!("invalid JSON: {}", e)))?;

    verify::check_documents(&wire.documents).map_err(|e| SearchError::corrupt(e.to_string()))?;

    let documents: Vec<Document> = wire.documents.into_iter().map(|(_, doc)| doc).collect();
    let store = DocumentStore::from_documents(documents)
        .map_err(|e| SearchError::corrupt(e.to_string()))?;

    verify::check_pair(&wire.index, &store).map_err(|e| SearchError::corrupt(e.to_string()))?;

    Ok((wire.index, store))
}

/// CRC32 of a byte buffer.
pub fn checksum(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}

/// A consistent index/store pair, ready to answer queries.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    index: Index,
    store: DocumentStore,
}

impl Snapshot {
    /// Build from documents in build order.
    pub fn build(documents: Vec<Document>) -> Result<Self> {
        let (index, store) = inverted::build(documents)?;
        Ok(Self { index, store })
    }

    /// Same as [`Snapshot::build`] on the rayon pool.
    pub fn build_parallel(documents: Vec<Document>) -> Result<Self> {
        let (index, store) = inverted::build_parallel(documents)?;
        Ok(Self { index, store })
    }

    /// Pair an index with a store, checking they describe the same documents.
    pub fn from_parts(index: Index, store: DocumentStore) -> Result<Self> {
        verify::check_pair(&index, &store).map_err(|e| SearchError::corrupt(e.to_string()))?;
        Ok(Self { index, store })
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let (index, store) = deserialize(text)?;
        Ok(Self { index, store })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (index, store) = deserialize_bytes(bytes)?;
        Ok(Self { index, store })
    }

    pub fn to_json(&self) -> Result<String> {
        serialize(&self.index, &self.store)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serialize_pretty(&self.index, &self.store)
    }

    /// CRC32 of the compact serialization.
    pub fn checksum(&self) -> Result<u32> {
        Ok(checksum(self.to_json()?.as_bytes()))
    }

    pub fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>> {
        search::search(&self.index, &self.store, query, max_results)
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn into_parts(self) -> (Index, DocumentStore) {
        (self.index, self.store)
    }
}
