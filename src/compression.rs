// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Brotli transport compression for snapshots.
//!
//! JSON snapshots are mostly repeated keys and short terms, which brotli
//! squeezes hard. Compression is a separate layer: the snapshot loader only
//! ever sees plain bytes.

use std::io::{Read, Write};

use crate::error::{Result, SearchError};
use crate::snapshot::MAX_SNAPSHOT_SIZE;

/// Quality used by the build pipeline (brotli's maximum).
pub const DEFAULT_QUALITY: u32 = 11;

const BUFFER_SIZE: usize = 4096;
const WINDOW_BITS: u32 = 22;

/// Compress `bytes` at the given quality (0..=11, clamped).
pub fn compress(bytes: &[u8], quality: u32) -> Result<Vec<u8>> {
    let mut compressed = Vec::new();
    {
        let mut encoder = brotli::CompressorWriter::new(
            &mut compressed,
            BUFFER_SIZE,
            quality.min(11),
            WINDOW_BITS,
        );
        encoder.write_all(bytes)?;
        encoder.flush()?;
    }
    Ok(compressed)
}

/// Decompress brotli data. Output larger than `MAX_SNAPSHOT_SIZE` or a
/// malformed stream is a corrupt snapshot.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>> {
    let decoder = brotli::Decompressor::new(bytes, BUFFER_SIZE);
    let mut out = Vec::new();
    decoder
        .take(MAX_SNAPSHOT_SIZE as u64 + 1)
        .read_to_end(&mut out)
        .map_err(|e| SearchError::corrupt(format!("brotli stream: {}", e)))?;

    if out.len() > MAX_SNAPSHOT_SIZE {
        return Err(SearchError::corrupt(format!(
            "decompressed snapshot exceeds {} bytes",
            MAX_SNAPSHOT_SIZE
        )));
    }
    Ok(out)
}
