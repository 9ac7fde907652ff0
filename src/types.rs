// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search index.
//!
//! A [`Document`] is what goes in, a [`SearchResult`] is what comes out. In
//! between, every document is cut into five [`Field`]s that are tokenized and
//! weighted independently.
//!
//! # Invariants
//!
//! - **Document**: `id`, `title` and `url` are non-empty. Enforced by
//!   [`Document::validate`], which the builder calls for every input.
//! - **Field**: the derived `Ord` is the indexing order (title first) and the
//!   serialization order. It is NOT the ranking order; use [`Field::boost`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::scoring::{CATEGORY_BOOST, CONTENT_BOOST, DESCRIPTION_BOOST, TAGS_BOOST, TITLE_BOOST};

/// Longest indexed field text, in bytes. Postings store offsets as `u32`.
pub const MAX_FIELD_BYTES: usize = u32::MAX as usize;

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// What kind of page a document points at. Drives result badges, never ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Article,
    Location,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Article => "article",
            DocumentType::Location => "location",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "article" => Ok(DocumentType::Article),
            "location" => Ok(DocumentType::Location),
            other => Err(ValidationError::UnknownType(other.to_string())),
        }
    }
}

/// One searchable unit: an article or a location.
///
/// Serialized with the same field names the site's client code reads
/// (`type`, `pubDate`), so a snapshot's documents can be handed to the UI
/// as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    pub url: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Carried through for display and sorting by callers; never indexed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<DateTime<Utc>>,
}

impl Document {
    /// Create a document with the required fields. Optional fields start empty.
    ///
    /// Does not validate; see [`Document::try_new`].
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        doc_type: DocumentType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            content: String::new(),
            url: url.into(),
            doc_type,
            category: None,
            tags: Vec::new(),
            pub_date: None,
        }
    }

    /// Like [`Document::new`], but fails when `id`, `title` or `url` is blank.
    pub fn try_new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        doc_type: DocumentType,
    ) -> Result<Self, ValidationError> {
        let doc = Self::new(id, title, url, doc_type);
        doc.validate()?;
        Ok(doc)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_pub_date(mut self, pub_date: DateTime<Utc>) -> Self {
        self.pub_date = Some(pub_date);
        self
    }

    /// Check the construction invariants: `id`, `title` and `url` non-empty,
    /// and no indexed field longer than [`MAX_FIELD_BYTES`].
    ///
    /// Whitespace-only values count as empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [("id", &self.id), ("title", &self.title), ("url", &self.url)];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField {
                    id: self.id.clone(),
                    field,
                });
            }
        }
        self.check_field_sizes(MAX_FIELD_BYTES)
    }

    fn check_field_sizes(&self, limit: usize) -> Result<(), ValidationError> {
        for field in Field::ALL {
            let len = self.field_text(field).len();
            if len > limit {
                return Err(ValidationError::FieldTooLarge {
                    id: self.id.clone(),
                    field: field.as_str(),
                    len,
                    limit,
                });
            }
        }
        Ok(())
    }

    /// Raw text of one indexed field. Tags are joined by a single space, so
    /// match offsets in the tags field point into that joined string.
    pub fn field_text(&self, field: Field) -> std::borrow::Cow<'_, str> {
        use std::borrow::Cow;
        match field {
            Field::Title => Cow::Borrowed(&self.title),
            Field::Description => Cow::Borrowed(&self.description),
            Field::Content => Cow::Borrowed(&self.content),
            Field::Category => Cow::Borrowed(self.category.as_deref().unwrap_or("")),
            Field::Tags => Cow::Owned(self.tags.join(" ")),
        }
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// An indexed region of a document.
///
/// Each field carries a fixed boost. The values are constants of the design
/// (see `scoring`), so two builds of the same content always rank alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Description,
    Content,
    Category,
    Tags,
}

impl Field {
    /// Every field, in indexing order.
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Description,
        Field::Content,
        Field::Category,
        Field::Tags,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Content => "content",
            Field::Category => "category",
            Field::Tags => "tags",
        }
    }

    /// Build-time boost multiplier for this field.
    pub fn boost(&self) -> f64 {
        match self {
            Field::Title => TITLE_BOOST,
            Field::Description => DESCRIPTION_BOOST,
            Field::Content => CONTENT_BOOST,
            Field::Category => CATEGORY_BOOST,
            Field::Tags => TAGS_BOOST,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// A query term found in one field of a result, with the byte offsets of each
/// occurrence in that field's raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedTerm {
    pub term: String,
    pub positions: Vec<u32>,
}

/// One ranked hit.
///
/// `score` is only meaningful relative to other results of the same query.
/// `matches` lists every field that contributed to the score, so the UI can
/// highlight without re-tokenizing the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub document: Document,
    pub score: f64,
    pub matches: BTreeMap<Field, Vec<MatchedTerm>>,
}

impl SearchResult {
    /// Distinct matched terms across all fields, in first-seen order.
    pub fn matched_terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = Vec::new();
        for matched in self.matches.values().flatten() {
            if !terms.contains(&matched.term.as_str()) {
                terms.push(&matched.term);
            }
        }
        terms
    }
}
