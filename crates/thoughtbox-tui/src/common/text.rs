//! Text utilities for TUI rendering.
//!
//! Display-width aware helpers shared by the form renderer and the
//! auto-grow presenter.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with ellipsis if it exceeds `max_width` (unicode-aware).
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        width += ch_width;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Normalizes pasted text before it enters a text area.
///
/// CRLF/CR become `\n`, ANSI escape bytes are dropped and tabs expand to
/// four spaces.
pub fn sanitize_paste(s: &str) -> Cow<'_, str> {
    if s.contains(['\r', '\x1b', '\t']) {
        Cow::Owned(
            s.replace("\r\n", "\n")
                .replace('\r', "\n")
                .replace('\x1b', "")
                .replace('\t', "    "),
        )
    } else {
        Cow::Borrowed(s)
    }
}

/// Splits one logical line into visual rows no wider than `width` columns.
///
/// Returns `(start_char, end_char)` ranges. An empty line yields one empty
/// row. Characters wider than `width` still get a row of their own.
pub fn wrap_ranges(line: &str, width: usize) -> Vec<(usize, usize)> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut start = 0;
    let mut row_width = 0;
    for (idx, ch) in line.chars().enumerate() {
        let ch_width = ch.width().unwrap_or(0);
        if row_width + ch_width > width && idx > start {
            rows.push((start, idx));
            start = idx;
            row_width = 0;
        }
        row_width += ch_width;
    }
    rows.push((start, line.chars().count()));
    rows
}

/// Number of visual rows `line` occupies at `width`.
pub fn wrapped_row_count(line: &str, width: usize) -> usize {
    wrap_ranges(line, width).len()
}

/// Returns the slice of `line` between two char indices.
pub fn char_slice(line: &str, start: usize, end: usize) -> &str {
    let byte_at = |idx: usize| {
        line.char_indices()
            .nth(idx)
            .map_or(line.len(), |(byte, _)| byte)
    };
    &line[byte_at(start)..byte_at(end)]
}
