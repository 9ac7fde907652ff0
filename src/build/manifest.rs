// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Manifest file name inside the input directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Highest manifest version this build understands.
pub const MANIFEST_VERSION: u32 = 1;

/// Lists the record files to index, relative to the input directory.
///
/// ```json
/// { "version": 1, "articles": ["blog/oxygen.json"], "locations": ["loc/jezero.json"] }
/// ```
///
/// Files are indexed in the order listed, articles first.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct InputManifest {
    pub version: u32,
    #[serde(default)]
    pub articles: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
}

impl InputManifest {
    /// Read and check `manifest.json` from `input_dir`.
    pub fn load(input_dir: &Path) -> Result<Self> {
        let path = input_dir.join(MANIFEST_FILE);
        let content = fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let manifest: InputManifest = serde_json::from_str(content)
            .map_err(|e| SearchError::Manifest(format!("invalid manifest JSON: {}", e)))?;
        if manifest.version == 0 || manifest.version > MANIFEST_VERSION {
            return Err(SearchError::Manifest(format!(
                "unsupported manifest version {} (expected {})",
                manifest.version, MANIFEST_VERSION
            )));
        }
        Ok(manifest)
    }

    pub fn file_count(&self) -> usize {
        self.articles.len() + self.locations.len()
    }
}
