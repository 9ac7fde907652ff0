// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the regolith command-line interface.
//!
//! Three subcommands: `index` builds a snapshot from a content manifest,
//! `inspect` summarizes a snapshot, and `search` queries one.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "regolith",
    about = "Field-weighted search index builder for static content sites",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a search snapshot from a directory of content records
    Index {
        /// Input directory containing manifest.json and record files
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for the snapshot
        #[arg(short, long)]
        output: PathBuf,

        /// Write indented JSON
        #[arg(long)]
        pretty: bool,

        /// Also write a brotli-compressed copy (.br)
        #[arg(long)]
        brotli: bool,

        /// Put the CRC32 of the snapshot in its file name
        #[arg(long)]
        content_hash: bool,
    },

    /// Summarize a snapshot file (.json or .json.br)
    Inspect {
        /// Path to the snapshot
        file: PathBuf,
    },

    /// Query a snapshot file and print ranked results
    Search {
        /// Path to the snapshot
        file: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value_t = regolith::DEFAULT_MAX_RESULTS)]
        limit: usize,

        /// Excerpt length in characters (0 disables excerpts)
        #[arg(long, default_value_t = regolith::DEFAULT_EXCERPT_LENGTH)]
        excerpt: usize,
    },
}
