// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for building, loading and querying an index.
//!
//! Build-time errors (`Validation`, `DuplicateDocument`) abort the whole build.
//! Runtime errors are limited to bad arguments and corrupt snapshots. A
//! corrupt snapshot means search is unavailable; see [`crate::LiveIndex`] for
//! the degrading holder.

use thiserror::Error;

/// A document that fails construction checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field (`id`, `title`, `url`) is empty.
    #[error("document '{id}' is missing required field '{field}'")]
    MissingField { id: String, field: &'static str },

    /// The document type is neither `article` nor `location`.
    #[error("unknown document type '{0}' (expected 'article' or 'location')")]
    UnknownType(String),

    /// A field too long for its match offsets to fit in a posting.
    #[error("document '{id}' field '{field}' is {len} bytes, limit is {limit}")]
    FieldTooLarge {
        id: String,
        field: &'static str,
        len: usize,
        limit: usize,
    },
}

/// Arguments rejected before any work is done.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgumentError {
    /// `max_results` must be at least 1.
    #[error("max_results must be positive, got {0}")]
    MaxResults(usize),

    /// The snapshot could not be parsed or does not describe a consistent
    /// index/store pair.
    #[error("snapshot corrupt: {0}")]
    SnapshotCorrupt(String),
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("duplicate document id '{id}'")]
    DuplicateDocument { id: String },

    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),

    #[error("failed to serialize snapshot: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("invalid manifest: {0}")]
    Manifest(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SearchError {
    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        SearchError::InvalidArgument(InvalidArgumentError::SnapshotCorrupt(reason.into()))
    }

    /// True when a snapshot failed to load. Callers should disable search
    /// rather than propagate.
    pub fn is_snapshot_corrupt(&self) -> bool {
        matches!(
            self,
            SearchError::InvalidArgument(InvalidArgumentError::SnapshotCorrupt(_))
        )
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
