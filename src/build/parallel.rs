// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel record loading.
//!
//! Reading and parsing one JSON file per record is the slow part of a build
//! and every file is independent, so they load on the rayon pool. Rayon's
//! indexed `collect` keeps manifest order, which is the build order.

use std::fs;
use std::path::Path;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::de::DeserializeOwned;

use crate::error::{Result, SearchError};

use super::{ArticleRecord, InputManifest, LocationRecord};

/// Records loaded from a manifest, in manifest order.
#[derive(Debug, Clone, Default)]
pub struct LoadedCollections {
    pub articles: Vec<ArticleRecord>,
    pub locations: Vec<LocationRecord>,
}

fn load_record<T: DeserializeOwned>(input_dir: &Path, filename: &str) -> Result<T> {
    let path = input_dir.join(filename);
    let content = fs::read_to_string(&path)
        .map_err(|e| SearchError::Manifest(format!("failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str::<T>(&content)
        .map_err(|e| SearchError::Manifest(format!("invalid record {}: {}", filename, e)))
}

/// Load every file in `files` as one record of type `T`.
///
/// The first unreadable or unparseable file fails the whole load.
#[cfg(feature = "parallel")]
pub fn load_records<T>(input_dir: &Path, files: &[String]) -> Result<Vec<T>>
where
    T: DeserializeOwned + Send,
{
    files
        .par_iter()
        .map(|filename| load_record(input_dir, filename))
        .collect()
}

#[cfg(not(feature = "parallel"))]
pub fn load_records<T>(input_dir: &Path, files: &[String]) -> Result<Vec<T>>
where
    T: DeserializeOwned + Send,
{
    files
        .iter()
        .map(|filename| load_record(input_dir, filename))
        .collect()
}

/// [`load_records`] ticking a progress bar per file.
#[cfg(feature = "parallel")]
pub fn load_records_with_progress<T>(
    input_dir: &Path,
    files: &[String],
    progress: &ProgressBar,
    counter: &AtomicUsize,
) -> Result<Vec<T>>
where
    T: DeserializeOwned + Send,
{
    let total = progress.length().unwrap_or(files.len() as u64) as usize;

    files
        .par_iter()
        .map(|filename| {
            let record = load_record(input_dir, filename)?;

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            Ok(record)
        })
        .collect()
}

/// Load both collections listed in the manifest.
pub fn load_collections(input_dir: &Path, manifest: &InputManifest) -> Result<LoadedCollections> {
    Ok(LoadedCollections {
        articles: load_records(input_dir, &manifest.articles)?,
        locations: load_records(input_dir, &manifest.locations)?,
    })
}

/// Load both collections with a shared progress bar.
#[cfg(feature = "parallel")]
pub fn load_collections_with_progress(
    input_dir: &Path,
    manifest: &InputManifest,
    progress: &ProgressBar,
) -> Result<LoadedCollections> {
    let counter = AtomicUsize::new(0);
    Ok(LoadedCollections {
        articles: load_records_with_progress(input_dir, &manifest.articles, progress, &counter)?,
        locations: load_records_with_progress(input_dir, &manifest.locations, progress, &counter)?,
    })
}

/// Non-parallel fallback (no progress).
#[cfg(not(feature = "parallel"))]
pub fn load_collections_with_progress(
    input_dir: &Path,
    manifest: &InputManifest,
) -> Result<LoadedCollections> {
    load_collections(input_dir, manifest)
}
