// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Content records and their mapping onto search documents.
//!
//! Records arrive already validated by the content pipeline. This adapter
//! only renames fields and derives ids and urls from slugs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Document, DocumentType};

/// A blog article as exported by the content pipeline.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub pub_date: Option<DateTime<Utc>>,
    /// Drafts are never indexed.
    #[serde(default)]
    pub draft: bool,
}

/// A point of interest from the location database.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl ArticleRecord {
    pub fn document_id(&self) -> String {
        format!("blog-{}", self.slug)
    }

    pub fn to_document(&self) -> Document {
        let mut doc = Document::new(
            self.document_id(),
            self.title.as_str(),
            format!("/blog/{}", self.slug),
            DocumentType::Article,
        )
        .with_description(self.description.as_str())
        .with_content(self.body.as_str())
        .with_tags(self.tags.iter().cloned());
        doc.category = self.category.clone();
        doc.pub_date = self.pub_date;
        doc
    }
}

impl LocationRecord {
    pub fn document_id(&self) -> String {
        format!("location-{}", self.slug)
    }

    /// Region becomes the category and features become tags.
    pub fn to_document(&self) -> Document {
        let mut doc = Document::new(
            self.document_id(),
            self.name.as_str(),
            format!("/locations/{}", self.slug),
            DocumentType::Location,
        )
        .with_description(self.description.as_str())
        .with_content(self.body.as_str())
        .with_tags(self.features.iter().cloned());
        doc.category = self.region.clone();
        doc
    }
}

/// Documents in build order: published articles, then locations.
pub fn documents_from_collections(
    articles: &[ArticleRecord],
    locations: &[LocationRecord],
) -> Vec<Document> {
    articles
        .iter()
        .filter(|a| !a.draft)
        .map(ArticleRecord::to_document)
        .chain(locations.iter().map(LocationRecord::to_document))
        .collect()
}
