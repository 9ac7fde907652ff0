// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A swappable, degradable holder for the snapshot a process is serving.
//!
//! Search is a nice-to-have on a content site. If the snapshot fails to load
//! the page should keep working with search switched off, so loading here
//! never fails: a bad snapshot leaves the holder unavailable and logs why.
//!
//! Rebuilds publish a whole new [`Snapshot`] with [`LiveIndex::swap`].
//! Queries clone the `Arc` under a read lock and run without it, so a query
//! that started before a swap finishes against the snapshot it started with.

use std::sync::Arc;

use log::{info, warn};
use parking_lot::RwLock;

use crate::error::{InvalidArgumentError, Result};
use crate::snapshot::Snapshot;
use crate::types::SearchResult;

enum State {
    Ready(Arc<Snapshot>),
    Unavailable(String),
}

pub struct LiveIndex {
    state: RwLock<State>,
}

impl LiveIndex {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            state: RwLock::new(State::Ready(Arc::new(snapshot))),
        }
    }

    /// A holder with search switched off.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            state: RwLock::new(State::Unavailable(reason.into())),
        }
    }

    /// Load from snapshot JSON. A corrupt snapshot yields an unavailable
    /// holder instead of an error.
    pub fn from_snapshot(text: &str) -> Self {
        Self::from_snapshot_bytes(text.as_bytes())
    }

    pub fn from_snapshot_bytes(bytes: &[u8]) -> Self {
        match Snapshot::from_bytes(bytes) {
            Ok(snapshot) => {
                info!(
                    "search index loaded: {} documents, {} terms",
                    snapshot.index().doc_count(),
                    snapshot.index().term_count()
                );
                Self::new(snapshot)
            }
            Err(e) => {
                warn!("search disabled: {}", e);
                Self::unavailable(e.to_string())
            }
        }
    }

    /// Replace the served snapshot. Returns the previous one, if any.
    pub fn swap(&self, snapshot: Snapshot) -> Option<Arc<Snapshot>> {
        let next = State::Ready(Arc::new(snapshot));
        match std::mem::replace(&mut *self.state.write(), next) {
            State::Ready(previous) => Some(previous),
            State::Unavailable(_) => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(*self.state.read(), State::Ready(_))
    }

    /// Why search is off, when it is.
    pub fn unavailable_reason(&self) -> Option<String> {
        match &*self.state.read() {
            State::Ready(_) => None,
            State::Unavailable(reason) => Some(reason.clone()),
        }
    }

    /// The snapshot currently being served.
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        match &*self.state.read() {
            State::Ready(snapshot) => Some(Arc::clone(snapshot)),
            State::Unavailable(_) => None,
        }
    }

    /// Query the current snapshot. An unavailable holder returns no results;
    /// argument errors are still reported.
    pub fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>> {
        match self.current() {
            Some(snapshot) => snapshot.search(query, max_results),
            None => {
                if max_results == 0 {
                    return Err(InvalidArgumentError::MaxResults(0).into());
                }
                Ok(Vec::new())
            }
        }
    }
}
