// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the regolith CLI.
//!
//! Two palettes, one tuned for dark terminals and one for light. Detection
//! order:
//!
//! 1. `REGOLITH_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark
//!
//! `NO_COLOR` and non-TTY stdout turn every escape sequence off, so piped
//! output is plain text.

use std::sync::OnceLock;

use regolith::{DocumentType, Field, Marker};

/// Width between the `│` borders.
pub const BOX_WIDTH: usize = 72;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// `COLORFGBG` is "fg;bg"; background 7 and up (except 8) is light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.split(';').next_back()?.parse().ok()?;
    Some(if bg >= 7 && bg != 8 {
        Theme::Light
    } else {
        Theme::Dark
    })
}

fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("REGOLITH_THEME").ok().as_deref().and_then(parse_theme) {
        return theme;
    }
    if let Some(theme) = std::env::var("COLORFGBG")
        .ok()
        .as_deref()
        .and_then(theme_from_colorfgbg)
    {
        return theme;
    }
    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// Semantic colors, one RGB triple per role.
struct Palette {
    accent: (u8, u8, u8),
    rust: (u8, u8, u8),
    dust: (u8, u8, u8),
    ice: (u8, u8, u8),
    good: (u8, u8, u8),
    bad: (u8, u8, u8),
    muted: (u8, u8, u8),
}

const DARK: Palette = Palette {
    accent: (229, 192, 123),
    rust: (224, 120, 86),
    dust: (209, 174, 134),
    ice: (120, 190, 230),
    good: (152, 195, 121),
    bad: (224, 108, 117),
    muted: (110, 115, 128),
};

const LIGHT: Palette = Palette {
    accent: (160, 100, 0),
    rust: (180, 70, 30),
    dust: (130, 95, 60),
    ice: (20, 110, 170),
    good: (60, 140, 60),
    bad: (200, 40, 60),
    muted: (150, 150, 158),
};

fn palette() -> &'static Palette {
    match theme() {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

pub fn accent() -> String {
    rgb(palette().accent)
}
pub fn rust() -> String {
    rgb(palette().rust)
}
pub fn dust() -> String {
    rgb(palette().dust)
}
pub fn ice() -> String {
    rgb(palette().ice)
}
pub fn good() -> String {
    rgb(palette().good)
}
pub fn bad() -> String {
    rgb(palette().bad)
}
pub fn muted() -> String {
    rgb(palette().muted)
}

/// Colors on only for a TTY without `NO_COLOR`.
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a palette color plus modifiers, or nothing when colors are off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, skipping ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ---------------------------------------------------------------------------
// Boxes
// ---------------------------------------------------------------------------

fn border(s: &str) -> String {
    themed(muted, &[], s)
}

/// ┌─ LABEL ─────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(accent, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// │ content     │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// Key/value row with the key dimmed.
pub fn kv_row(key: &str, value: &str) {
    row(&format!(" {}{}", pad_right(&themed(muted, &[], key), 18), value));
}

/// └─────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

/// Right-pad a styled string to a visible width.
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ---------------------------------------------------------------------------
// Formatters
// ---------------------------------------------------------------------------

pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Compressed size as a percentage saved.
pub fn savings(raw: usize, compressed: usize) -> String {
    if raw == 0 {
        return themed(muted, &[], "n/a");
    }
    let saved = (1.0 - compressed as f64 / raw as f64) * 100.0;
    if saved > 0.0 {
        themed(good, &[BOLD], &format!("-{:.0}%", saved))
    } else {
        themed(bad, &[BOLD], &format!("+{:.0}%", -saved))
    }
}

pub fn type_badge(doc_type: DocumentType) -> String {
    let label = format!("[{}]", doc_type);
    match doc_type {
        DocumentType::Article => themed(ice, &[], &label),
        DocumentType::Location => themed(rust, &[], &label),
    }
}

pub fn field_label(field: Field) -> String {
    match field {
        Field::Title => themed(accent, &[BOLD], field.as_str()),
        Field::Description => themed(dust, &[], field.as_str()),
        _ => themed(muted, &[], field.as_str()),
    }
}

pub fn score_value(score: f64) -> String {
    let text = format!("{:>6.1}", score);
    if score >= 10.0 {
        themed(good, &[BOLD], &text)
    } else if score >= 5.0 {
        themed(accent, &[], &text)
    } else {
        themed(muted, &[], &text)
    }
}

/// Highlight marker for matched words: bold rust when colored, `[[…]]`
/// otherwise.
pub fn highlight_marker() -> Marker {
    if use_colors() {
        Marker::new(format!("{}{}", BOLD, rust()), RESET.to_string())
    } else {
        Marker::new("[[", "]]")
    }
}
