//! Character and line truncation with elision markers.
//!
//! Lengths are counted in `char`s so a cut never lands inside a multi-byte
//! character. Every marker counts toward the cap it enforces.

use serde::Serialize;
use std::borrow::Cow;

use super::limits::PreviewLimits;

/// Outcome of [`truncate_lines`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruncationResult {
    /// Retained lines, each char-capped, followed by the elision marker line
    /// when lines were dropped.
    pub lines: Vec<String>,
    pub was_truncated: bool,
    /// Lines shortened by the per-line character cap.
    pub truncated_by_char_count: usize,
    /// Lines dropped by the line cap (the marker line is not counted).
    pub truncated_line_count: usize,
}

/// Cap `text` at `limit` characters.
///
/// Text that already fits is returned borrowed. Otherwise the result is the
/// longest prefix that leaves room for `…[N chars truncated]`, where `N` is
/// the number of original characters missing from the prefix.
///
/// When `limit` is too small for that marker even with an empty prefix, the
/// bare `N chars truncated` is returned if it fits, and failing that the first
/// `limit` characters of `text` with no marker.
pub fn truncate_text(text: &str, limit: usize) -> Cow<'_, str> {
    let total = text.chars().count();
    if total <= limit {
        return Cow::Borrowed(text);
    }
    Cow::Owned(elide_chars(text, total, limit))
}

/// Cap a tool call's summary line. Same rules as [`truncate_text`].
pub fn truncate_header(header: &str, limit: usize) -> Cow<'_, str> {
    truncate_text(header, limit)
}

/// Cap every line at `max_line_chars`, then keep at most `max_lines` lines.
///
/// Dropped lines are replaced by a single `… truncated N lines` entry.
pub fn truncate_lines<S: AsRef<str>>(lines: &[S], limits: PreviewLimits) -> TruncationResult {
    let mut truncated_by_char_count = 0;
    let mut kept: Vec<String> = lines
        .iter()
        .map(|line| match truncate_text(line.as_ref(), limits.max_line_chars) {
            Cow::Borrowed(line) => line.to_string(),
            Cow::Owned(line) => {
                truncated_by_char_count += 1;
                line
            }
        })
        .collect();

    let mut truncated_line_count = 0;
    if kept.len() > limits.max_lines {
        truncated_line_count = kept.len() - limits.max_lines;
        kept.truncate(limits.max_lines);
        kept.push(lines_marker(truncated_line_count));
    }

    TruncationResult {
        lines: kept,
        was_truncated: truncated_by_char_count > 0 || truncated_line_count > 0,
        truncated_by_char_count,
        truncated_line_count,
    }
}

/// Whether `line` is the synthetic marker appended by [`truncate_lines`].
pub fn is_lines_marker(line: &str) -> bool {
    line.strip_prefix("… truncated ")
        .and_then(|rest| rest.strip_suffix(" lines"))
        .is_some_and(|count| !count.is_empty() && count.chars().all(|c| c.is_ascii_digit()))
}

fn lines_marker(dropped: usize) -> String {
    format!("… truncated {} lines", dropped)
}

fn chars_marker(removed: usize) -> String {
    format!("…[{} chars truncated]", removed)
}

fn elide_chars(text: &str, total: usize, limit: usize) -> String {
    let marker_len = |removed: usize| chars_marker(removed).chars().count();

    if marker_len(total) > limit {
        let bare = format!("{} chars truncated", total);
        if bare.chars().count() <= limit {
            return bare;
        }
        return char_prefix(text, limit).to_string();
    }

    // The marker only shrinks as the prefix grows, so start from the widest
    // marker and extend while the next character still fits.
    let mut keep = limit - marker_len(total);
    while keep < total && keep + 1 + marker_len(total - keep - 1) <= limit {
        keep += 1;
    }

    let mut out = char_prefix(text, keep).to_string();
    out.push_str(&chars_marker(total - keep));
    out
}

fn char_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
