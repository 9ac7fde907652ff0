// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field-weighted full-text search for static content sites.
//!
//! Articles and locations go in at build time; a single JSON snapshot comes
//! out; the browser (or any process) loads it once and answers ranked
//! queries against it with no further I/O.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │   build/     │───▶│ inverted.rs  │───▶│ snapshot.rs  │──▶ search-index.json
//! │ (records →   │    │ (tokenize,   │    │ (JSON, CRC32,│
//! │  Documents)  │    │  postings)   │    │  verify)     │
//! └──────────────┘    └──────────────┘    └──────────────┘
//!                                                │ load
//!                                                ▼
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ highlight.rs │◀───│  search.rs   │◀───│   live.rs    │
//! │ (<mark>,     │    │ (boost × tf, │    │ (swap,       │
//! │  excerpts)   │    │  ranking)    │    │  degrade)    │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! # Scoring
//!
//! | Field         | Boost |
//! |---------------|-------|
//! | `title`       | 10    |
//! | `description` | 5     |
//! | `category`    | 3     |
//! | `tags`        | 2     |
//! | `content`     | 1     |
//!
//! A document's score is the sum of `boost × tf` over every (field, term)
//! pair the query hits. Ties go to the document built first.
//!
//! # Usage
//!
//! ```
//! use regolith::{highlight_terms, terms_from_matches, Document, DocumentType, Snapshot};
//!
//! let snapshot = Snapshot::build(vec![
//!     Document::new("a", "Jezero Crater", "/locations/jezero", DocumentType::Location)
//!         .with_description("ancient lake delta"),
//!     Document::new("b", "Rover mission", "/blog/rover", DocumentType::Article)
//!         .with_description("explores Jezero region"),
//! ])?;
//!
//! let json = snapshot.to_json()?;
//! let loaded = Snapshot::from_json(&json)?;
//!
//! let results = loaded.search("jezero", 10)?;
//! assert_eq!(results[0].document.id, "a");
//! assert_eq!(results[1].document.id, "b");
//!
//! let terms = terms_from_matches(&results[0]);
//! assert_eq!(
//!     highlight_terms(&results[0].document.title, &terms),
//!     "<mark>Jezero</mark> Crater"
//! );
//! # Ok::<(), regolith::SearchError>(())
//! ```

// Module declarations
#[cfg(not(target_arch = "wasm32"))]
pub mod build;
pub mod compression;
mod error;
mod highlight;
mod index;
mod inverted;
mod live;
mod scoring;
mod search;
pub mod snapshot;
pub mod testing;
mod types;
mod utils;
pub mod verify;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use error::{InvalidArgumentError, Result, SearchError, ValidationError};
pub use highlight::{
    extract_excerpt, highlight_terms, highlight_terms_with, terms_from_matches, Marker,
    DEFAULT_EXCERPT_LENGTH,
};
pub use index::{DocumentStore, Index, Posting, FORMAT_VERSION};
pub use inverted::{build, build_index, build_index_parallel, build_parallel};
pub use live::LiveIndex;
pub use scoring::ranking::{compare_hits, rank, Hit};
pub use scoring::{
    default_boosts, term_score, CATEGORY_BOOST, CONTENT_BOOST, DESCRIPTION_BOOST, TAGS_BOOST,
    TITLE_BOOST,
};
pub use search::{query_terms, search, DEFAULT_MAX_RESULTS};
pub use snapshot::{deserialize, deserialize_bytes, serialize, serialize_pretty, Snapshot};
pub use types::{Document, DocumentType, Field, MatchedTerm, SearchResult, MAX_FIELD_BYTES};
pub use utils::{normalize, tokenize, Token};
pub use verify::InvariantError;

#[cfg(feature = "wasm")]
pub use wasm::SearchClient;
