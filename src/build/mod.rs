// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Offline build pipeline: manifest → records → documents → snapshot file.

pub mod document;
pub mod manifest;
pub mod parallel;

use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::{info, warn};

use crate::compression;
use crate::error::Result;
use crate::snapshot::{checksum, Snapshot};

pub use document::*;
pub use manifest::*;
pub use parallel::*;

/// Snapshot file name when content hashing is off.
pub const SNAPSHOT_FILE: &str = "search-index.json";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Indented JSON instead of compact.
    pub pretty: bool,
    /// Also write a brotli-compressed `.br` next to the snapshot.
    pub brotli: bool,
    /// Name the snapshot `search-index-{crc32}.json` for cache busting.
    pub content_hash: bool,
}

/// What a build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub articles: usize,
    pub drafts_skipped: usize,
    pub locations: usize,
    pub documents: usize,
    pub terms: usize,
    pub postings: usize,
    pub output: PathBuf,
    pub bytes: usize,
    pub checksum: u32,
    pub compressed_output: Option<PathBuf>,
    pub compressed_bytes: Option<usize>,
}

#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Snapshot file name for a build.
pub fn snapshot_filename(content_hash: bool, crc: u32) -> String {
    if content_hash {
        format!("search-index-{:08x}.json", crc)
    } else {
        SNAPSHOT_FILE.to_string()
    }
}

/// Run a full build from `input_dir/manifest.json` into `output_dir`.
///
/// Any unreadable record, invalid document or duplicate id fails the build
/// before anything is written.
pub fn run_build(
    input_dir: &Path,
    output_dir: &Path,
    options: &BuildOptions,
) -> Result<BuildReport> {
    let manifest = InputManifest::load(input_dir)?;

    #[cfg(feature = "parallel")]
    let multi = MultiProgress::new();
    #[cfg(feature = "parallel")]
    let load_pb = multi.add(ProgressBar::new(manifest.file_count() as u64));
    #[cfg(feature = "parallel")]
    load_pb.set_style(create_progress_style());
    #[cfg(feature = "parallel")]
    load_pb.set_prefix("Loading");
    #[cfg(feature = "parallel")]
    load_pb.set_message("records...");

    let collections = parallel::load_collections_with_progress(
        input_dir,
        &manifest,
        #[cfg(feature = "parallel")]
        &load_pb,
    )?;

    #[cfg(feature = "parallel")]
    load_pb.finish_with_message(format!("loaded {} records", manifest.file_count()));

    let documents = documents_from_collections(&collections.articles, &collections.locations);
    let drafts_skipped = collections.articles.iter().filter(|a| a.draft).count();
    if documents.is_empty() {
        warn!("no documents to index; writing an empty snapshot");
    }

    let snapshot = Snapshot::build_parallel(documents)?;
    let index = snapshot.index();

    let json = if options.pretty {
        snapshot.to_json_pretty()?
    } else {
        snapshot.to_json()?
    };
    let crc = checksum(json.as_bytes());

    fs::create_dir_all(output_dir)?;
    let output = output_dir.join(snapshot_filename(options.content_hash, crc));
    fs::write(&output, &json)?;
    info!("wrote {} ({} bytes, crc32 {:08x})", output.display(), json.len(), crc);

    let (compressed_output, compressed_bytes) = if options.brotli {
        let compressed = compression::compress(json.as_bytes(), compression::DEFAULT_QUALITY)?;
        let mut name = output.clone().into_os_string();
        name.push(".br");
        let path = PathBuf::from(name);
        fs::write(&path, &compressed)?;
        info!("wrote {} ({} bytes)", path.display(), compressed.len());
        (Some(path), Some(compressed.len()))
    } else {
        (None, None)
    };

    Ok(BuildReport {
        articles: collections.articles.len() - drafts_skipped,
        drafts_skipped,
        locations: collections.locations.len(),
        documents: index.doc_count(),
        terms: index.term_count(),
        postings: index.posting_count(),
        output,
        bytes: json.len(),
        checksum: crc,
        compressed_output,
        compressed_bytes,
    })
}
