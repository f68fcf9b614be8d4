// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the typeahead CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Respects `NO_COLOR`
//! and non-TTY detection for pipelines, so piped output is plain text.
//!
//! # Theme detection order
//!
//! 1. `TYPEAHEAD_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::ops::Range;
use std::sync::OnceLock;
use typeahead::{Corpus, Item, SearchState};

/// Columns between the left and right border
const BOX_WIDTH: usize = 80;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn theme_from_env() -> Theme {
    let forced = std::env::var("TYPEAHEAD_THEME").map(|v| v.to_lowercase());
    match forced.as_deref() {
        Ok("light" | "l") => return Theme::Light,
        Ok("dark" | "d") => return Theme::Dark,
        _ => {}
    }

    // COLORFGBG is "fg;bg"; background 7 and 9..=15 are light
    let background = std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| v.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()));
    match background {
        Some(bg) if bg >= 7 && bg != 8 => Theme::Light,
        _ => Theme::Dark,
    }
}

/// What a piece of output means; each tone maps to one palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    /// The matched slice of a description
    Match,
    /// A match at offset 0
    Exact,
    /// A match further into the description
    Offset,
    /// The highlighted result row
    Selected,
    Label,
    Heading,
    Muted,
}

impl Tone {
    /// OneDark (dark) and One Light (light) true-color values.
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (self, theme) {
            (Tone::Match, Theme::Dark) => (229, 192, 123),
            (Tone::Match, Theme::Light) => (193, 132, 1),
            (Tone::Exact, Theme::Dark) => (152, 195, 121),
            (Tone::Exact, Theme::Light) => (80, 161, 79),
            (Tone::Offset, Theme::Dark) => (97, 175, 239),
            (Tone::Offset, Theme::Light) => (64, 120, 242),
            (Tone::Selected, Theme::Dark) => (198, 120, 221),
            (Tone::Selected, Theme::Light) => (166, 38, 164),
            (Tone::Label | Tone::Heading, Theme::Dark) => (86, 182, 194),
            (Tone::Label | Tone::Heading, Theme::Light) => (1, 132, 188),
            (Tone::Muted, Theme::Dark) => (92, 99, 112),
            (Tone::Muted, Theme::Light) => (160, 161, 167),
        }
    }

    fn escape(self) -> String {
        let (r, g, b) = self.rgb(*THEME.get_or_init(theme_from_env));
        let weight = match self {
            Tone::Match | Tone::Selected | Tone::Heading => BOLD,
            _ => "",
        };
        format!("{}\x1b[38;2;{};{};{}m", weight, r, g, b)
    }
}

/// Colors only on a TTY, and never with `NO_COLOR` set
fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

fn paint(tone: Tone, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", tone.escape(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Printed width, skipping ANSI escapes
fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    s.chars()
        .filter(|&c| match c {
            '\x1b' => {
                in_escape = true;
                false
            }
            'm' if in_escape => {
                in_escape = false;
                false
            }
            _ => !in_escape,
        })
        .count()
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn framed(left: char, fill: &str, right: char) {
    if use_colors() {
        let border = Tone::Muted.escape();
        println!("{border}{left}{RESET}{fill}{border}{right}{RESET}");
    } else {
        println!("{left}{fill}{right}");
    }
}

/// `│ content        │`
fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    framed('│', &format!("{}{}", content, " ".repeat(pad)), '│');
}

/// `┌─ LABEL ───┐` at the top of a box, `├─ LABEL ───┤` inside one
fn rule(label: &str, opening: bool) {
    let title = format!("─ {} ", paint(Tone::Heading, label));
    let fill = format!("{}{}", title, "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&title))));
    let (left, right) = if opening { ('┌', '┐') } else { ('├', '┤') };
    framed(left, &fill, right);
}

fn no_matches() {
    let dim = if use_colors() { DIM } else { "" };
    row(&format!("{}{}", dim, paint(Tone::Muted, "  no matches")));
}

/// `└───────────┘`
fn close() {
    framed('└', &"─".repeat(BOX_WIDTH), '┘');
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Description with the matched query emphasised
pub fn highlighted(item: &Item, query_len: usize) -> String {
    match item.highlight(query_len) {
        Some(hl) if use_colors() => format!(
            "{}{}{}",
            hl.before,
            paint(Tone::Match, hl.matched),
            hl.after
        ),
        Some(hl) => format!("{}[{}]{}", hl.before, hl.matched, hl.after),
        None => item.description.clone(),
    }
}

/// Rank group badge: `@3` for a match at offset 3
pub fn group_badge(offset: Option<usize>) -> String {
    match offset {
        Some(0) => paint(Tone::Exact, "@0"),
        Some(offset) => paint(Tone::Offset, &format!("@{}", offset)),
        None => paint(Tone::Muted, "--"),
    }
}

/// One result line: marker, position, label, description, group
pub fn result_line(position: usize, item: &Item, query_len: usize, selected: bool) -> String {
    let marker = if selected {
        paint(Tone::Selected, "▶")
    } else {
        " ".to_string()
    };
    let label = if selected {
        paint(Tone::Selected, &item.label)
    } else {
        paint(Tone::Label, &item.label)
    };
    format!(
        " {} {:>3}  {} ({}) {}",
        marker,
        position,
        label,
        highlighted(item, query_len),
        group_badge(item.match_offset())
    )
}

/// Print a ranked result list
pub fn print_results<'a>(query: &str, items: impl IntoIterator<Item = &'a Item>) {
    let query_len = query.chars().count();
    rule(&format!("RESULTS for \"{}\"", query), true);
    let mut count = 0;
    for (position, item) in items.into_iter().enumerate() {
        row(&result_line(position, item, query_len, false));
        count += 1;
    }
    if count == 0 {
        no_matches();
    }
    close();
}

/// Print the controller state after an input event
pub fn print_state(state: &SearchState<'_>) {
    let query_len = state.query.chars().count();
    rule(&format!("QUERY \"{}\"", state.query), true);

    let mut flags = Vec::new();
    if state.loading {
        flags.push(paint(Tone::Match, "loading…"));
    }
    flags.push(if state.focused {
        paint(Tone::Exact, "focused")
    } else {
        paint(Tone::Muted, "unfocused")
    });
    row(&format!("  {}", flags.join("  ")));

    if !state.focused {
        // The list is only shown while the field has focus.
        close();
        return;
    }

    rule(&format!("{} RESULTS", state.results.len()), false);
    for (position, item) in state.results.iter().enumerate() {
        let selected = state.selected_index == Some(position);
        row(&result_line(position, item, query_len, selected));
    }
    close();
}

/// Print the corpus in its sorted traversal order
pub fn print_corpus(corpus: &Corpus) {
    rule(&format!("CORPUS ({} items, description order)", corpus.len()), true);
    for (index, item) in corpus.iter().enumerate() {
        row(&format!(
            " {:>4}  {} ({})",
            index,
            paint(Tone::Label, &item.label),
            item.description
        ));
    }
    close();
}

/// Print a rank group table with the members of each group
pub fn print_groups<'a>(
    query: &str,
    groups: impl IntoIterator<Item = (usize, Range<usize>, Vec<&'a Item>)>,
) {
    rule(&format!("GROUPS for \"{}\"", query), true);
    let mut any = false;
    for (group, range, members) in groups {
        any = true;
        let labels: Vec<&str> = members.iter().map(|item| item.label.as_str()).collect();
        row(&format!(
            " {} {:>9}  {}",
            group_badge(Some(group)),
            format!("[{}, {})", range.start, range.end),
            labels.join(", ")
        ));
    }
    if !any {
        no_matches();
    }
    close();
}
