// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use regolith::build::{run_build, BuildOptions};
use regolith::{
    compression, extract_excerpt, highlight_terms_with, snapshot, terms_from_matches, Field,
    Snapshot,
};

mod cli;
use cli::display::{self, format_size, themed, BOLD};
use cli::{Cli, Commands};

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Index {
            input,
            output,
            pretty,
            brotli,
            content_hash,
        } => run_index(
            &input,
            &output,
            BuildOptions {
                pretty,
                brotli,
                content_hash,
            },
        ),
        Commands::Inspect { file } => run_inspect(&file),
        Commands::Search {
            file,
            query,
            limit,
            excerpt,
        } => run_search(&file, &query, limit, excerpt),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Read a snapshot file, decompressing `.br` files.
fn read_snapshot_bytes(path: &Path) -> Result<(Vec<u8>, Option<usize>)> {
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    if path.extension().is_some_and(|ext| ext == "br") {
        debug!("decompressing {} ({} bytes)", path.display(), raw.len());
        let compressed_len = raw.len();
        let plain = compression::decompress(&raw)
            .with_context(|| format!("failed to decompress {}", path.display()))?;
        Ok((plain, Some(compressed_len)))
    } else {
        Ok((raw, None))
    }
}

fn run_index(input: &Path, output: &Path, options: BuildOptions) -> Result<()> {
    let report = run_build(input, output, &options)
        .with_context(|| format!("build from {} failed", input.display()))?;

    eprintln!();
    eprintln!("✅ Build complete");
    eprintln!(
        "   {} documents ({} articles, {} locations, {} drafts skipped)",
        report.documents, report.articles, report.locations, report.drafts_skipped
    );
    eprintln!(
        "   {} terms │ {} postings │ crc32 {:08x}",
        report.terms, report.postings, report.checksum
    );
    eprintln!("  ✓ {} ({})", report.output.display(), format_size(report.bytes));
    if let (Some(path), Some(bytes)) = (&report.compressed_output, report.compressed_bytes) {
        eprintln!(
            "  ✓ {} ({}, {})",
            path.display(),
            format_size(bytes),
            display::savings(report.bytes, bytes)
        );
    }
    Ok(())
}

fn run_inspect(path: &Path) -> Result<()> {
    let (plain, compressed_len) = read_snapshot_bytes(path)?;
    let snapshot = Snapshot::from_bytes(&plain)
        .with_context(|| format!("failed to load {}", path.display()))?;
    let index = snapshot.index();
    let plain_len = plain.len();

    let brotli_len = match compressed_len {
        Some(len) => len,
        None => compression::compress(&plain, compression::DEFAULT_QUALITY)?.len(),
    };

    display::section_top("SNAPSHOT");
    display::kv_row("file", &path.display().to_string());
    display::kv_row("format version", &index.version().to_string());
    display::kv_row("size", &format_size(plain_len));
    display::kv_row(
        "brotli",
        &format!(
            "{} ({})",
            format_size(brotli_len),
            display::savings(plain_len, brotli_len)
        ),
    );
    display::kv_row("crc32", &format!("{:08x}", snapshot::checksum(&plain)));
    display::section_bot();

    let articles = snapshot
        .store()
        .iter()
        .filter(|d| d.doc_type == regolith::DocumentType::Article)
        .count();
    display::section_top("CONTENTS");
    display::kv_row("documents", &index.doc_count().to_string());
    display::kv_row("  articles", &articles.to_string());
    display::kv_row("  locations", &(index.doc_count() - articles).to_string());
    display::kv_row("terms", &index.term_count().to_string());
    display::kv_row("postings", &index.posting_count().to_string());
    display::section_bot();

    let per_field = index.terms_per_field();
    display::section_top("FIELDS");
    for field in Field::ALL {
        let terms = per_field.get(&field).copied().unwrap_or(0);
        display::row(&format!(
            " {} ×{:<5} {} terms",
            display::pad_right(&display::field_label(field), 14),
            index.boost(field),
            terms
        ));
    }
    display::section_bot();
    Ok(())
}

fn run_search(path: &Path, query: &str, limit: usize, excerpt_len: usize) -> Result<()> {
    let (bytes, _) = read_snapshot_bytes(path)?;
    let snapshot = Snapshot::from_bytes(&bytes)
        .with_context(|| format!("failed to load {}", path.display()))?;
    let results = snapshot.search(query, limit)?;

    if results.is_empty() {
        println!("No results for \"{}\"", query);
        return Ok(());
    }

    let marker = display::highlight_marker();
    for (rank, result) in results.iter().enumerate() {
        let terms = terms_from_matches(result);
        let doc = &result.document;
        println!(
            "{:>2}. {} {} {}",
            rank + 1,
            display::score_value(result.score),
            display::type_badge(doc.doc_type),
            themed(display::accent, &[BOLD], &highlight_terms_with(&doc.title, &terms, &marker)),
        );
        println!("      {}", themed(display::muted, &[], &doc.url));

        let fields: Vec<String> = result
            .matches
            .keys()
            .map(|f| display::field_label(*f))
            .collect();
        println!("      matched in {}", fields.join(", "));

        if excerpt_len > 0 {
            let source = if doc.content.is_empty() {
                &doc.description
            } else {
                &doc.content
            };
            let excerpt = extract_excerpt(source, &terms, excerpt_len);
            if !excerpt.is_empty() {
                println!("      {}", highlight_terms_with(&excerpt, &terms, &marker));
            }
        }
        println!();
    }
    Ok(())
}
