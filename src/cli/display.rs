// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the tenzi CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `TENZI_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and turns color off when stdout is not a TTY, so piping a hymn
//! into a file gives plain text.
//!
//! # Theme detection order
//!
//! 1. `TENZI_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use tenzi::verify::{IntegrityIssue, ValidationReport};
use tenzi::{BundleSummary, Hymn, HymnInfo, Stanza};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("TENZI_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; bg 7 and up (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
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

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(text: &str) -> String {
    themed(GRAY, &[], text)
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!("{} {}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// Print section divider: ├──────────────────┤
pub fn section_mid() {
    println!("{}", border(&format!("├{}┤", "─".repeat(BOX_WIDTH))));
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

pub fn ok_mark() -> String {
    themed(GREEN, &[BOLD], "✓")
}

pub fn fail_mark() -> String {
    themed(RED, &[BOLD], "✗")
}

/// `  12  Mungu Ni Pendo (subtitle)  [worship] 3v +C`
pub fn info_line(info: &HymnInfo) -> String {
    let mut line = format!(
        "{:>4}  {}",
        info.id,
        themed(BLUE, &[BOLD], &info.title)
    );
    if let Some(subtitle) = &info.subtitle {
        line.push_str(&format!(" {}", themed(GRAY, &[], &format!("({})", subtitle))));
    }
    line.push_str(&format!(
        "  {} {}v{}",
        themed(MAGENTA, &[], &format!("[{}]", info.category)),
        info.verse_count,
        if info.has_chorus { " +C" } else { "" }
    ));
    line
}

/// One line per hymn, as the index would summarize it.
pub fn hymn_list(hymns: &[Hymn]) {
    if hymns.is_empty() {
        println!("{}", themed(GRAY, &[DIM], "(no hymns)"));
        return;
    }
    for hymn in hymns {
        println!("{}", info_line(&HymnInfo::from_hymn(hymn, "")));
    }
}

/// Full text of one hymn, verses and chorus in sung order.
pub fn hymn(hymn: &Hymn) {
    section_top(&format!("{}. {}", hymn.id, hymn.title));
    if let Some(subtitle) = &hymn.subtitle {
        row(&themed(GRAY, &[], subtitle));
    }
    let meta: Vec<String> = [
        hymn.author.clone(),
        hymn.meter.clone(),
        Some(hymn.category.to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();
    row(&themed(GRAY, &[DIM], &meta.join(" · ")));

    for stanza in hymn.sung_order() {
        section_mid();
        match stanza {
            Stanza::Verse(verse) => {
                row(&themed(YELLOW, &[BOLD], &verse.number.to_string()));
                for line in &verse.text {
                    row(line);
                }
            }
            Stanza::Chorus(chorus) => {
                row(&themed(CYAN, &[BOLD], "Kiitikio"));
                for line in &chorus.text {
                    row(&format!("  {}", line));
                }
            }
        }
    }

    if !hymn.scripture_references.is_empty() {
        section_mid();
        row(&themed(GRAY, &[], &hymn.scripture_references.join("; ")));
    }
    section_bot();
}

pub fn validation(file: &str, report: &ValidationReport) {
    if report.is_valid {
        println!("{} {}", ok_mark(), file);
        return;
    }
    println!("{} {}", fail_mark(), file);
    for error in &report.errors {
        println!("    {}", themed(RED, &[], error));
    }
}

pub fn integrity(checked: usize, issues: &[IntegrityIssue], lookup_errors: &[String]) {
    section_top("Integrity");
    row(&format!("{} index entries checked", checked));
    for issue in issues {
        row(&format!("{} {}", fail_mark(), issue));
    }
    for error in lookup_errors {
        row(&format!("{} {}", fail_mark(), error));
    }
    if issues.is_empty() && lookup_errors.is_empty() {
        row(&format!("{} index matches every record", ok_mark()));
    }
    section_bot();
}

pub fn bundle_summary(path: &str, summary: &BundleSummary) {
    println!(
        "{} {}  {} hymns │ {} │ crc32 {}",
        ok_mark(),
        path,
        summary.hymns,
        format_size(summary.bytes),
        themed(YELLOW, &[], &format!("{:08x}", summary.checksum))
    );
}

pub fn counts(entries: &[(String, usize)]) {
    let width = entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, count) in entries {
        println!("{:<width$}  {}", name, themed(GRAY, &[], &count.to_string()), width = width);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
