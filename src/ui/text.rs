//! Width-aware text wrapping driven by [`OutputPreferences`].
//!
//! Escape sequences count as zero width, so already-styled text measures the
//! same as its plain form. Wrap plain text before styling it: a color span
//! that crosses a break is only reset on the last row.

use crate::ui::preferences::OutputPreferences;
use crate::ui::style::{csi_sequences, visible_width};

/// Wrap `text` according to the preferences, or return it unchanged when
/// wrapping is disabled.
pub fn wrap_text(text: &str, preferences: &OutputPreferences) -> String {
    if !preferences.wrap_text() || text.is_empty() {
        return text.to_string();
    }
    let width = preferences.wrap_column();
    text.split('\n')
        .map(|line| wrap_line(line, width).join("\n"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap a single line to fit `max_width` visible columns.
///
/// Prefers space boundaries and falls back to hard wrapping tokens that are
/// wider than a whole row.
pub fn wrap_line(line: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 || visible_width(line) <= max_width {
        return vec![line.to_string()];
    }

    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0usize;
    let mut row_started = false;

    for word in line.split(' ') {
        let word_width = visible_width(word);
        if !row_started {
            row_started = true;
        } else if row_width + 1 + word_width <= max_width {
            row.push(' ');
            row_width += 1;
        } else {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }

        if word_width <= max_width.saturating_sub(row_width) {
            row.push_str(word);
            row_width += word_width;
            continue;
        }

        // Only reachable on a fresh row: the token is wider than a whole row.
        let mut pieces = hard_split(word, max_width);
        let last = pieces.pop().unwrap_or_default();
        rows.extend(pieces);
        row_width = visible_width(&last);
        row = last;
    }

    rows.push(row);
    rows
}

/// Split `word` into chunks of at most `width` visible characters, keeping
/// escape sequences attached to the following character.
fn hard_split(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut count = 0usize;
    let mut rest = word;

    while let Some(ch) = rest.chars().next() {
        if ch == '\x1b' {
            if let Some(m) = csi_sequences().find(rest).filter(|m| m.start() == 0) {
                current.push_str(m.as_str());
                rest = &rest[m.end()..];
                continue;
            }
        }
        if count == width {
            pieces.push(std::mem::take(&mut current));
            count = 0;
        }
        current.push(ch);
        count += 1;
        rest = &rest[ch.len_utf8()..];
    }

    if !current.is_empty() || pieces.is_empty() {
        pieces.push(current);
    }
    pieces
}
