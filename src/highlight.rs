// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Markup for suggestion rows.

/// Class on the `<span>` wrapped around each matched run.
pub const MATCH_CLASS: &str = "suggestion-match";

/// Escape text for an HTML text node or quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Byte length of a case-insensitive match of `query` at the start of `text`.
fn match_len(text: &str, query: &[char]) -> Option<usize> {
    let mut wanted = query.iter();
    let mut pending = wanted.next();
    for (offset, c) in text.char_indices() {
        for lower in c.to_lowercase() {
            match pending {
                Some(q) if *q == lower => pending = wanted.next(),
                _ => return None,
            }
        }
        if pending.is_none() {
            return Some(offset + c.len_utf8());
        }
    }
    None
}

/// Wrap every case-insensitive, non-overlapping occurrence of `query` in
/// `label` with `<span class="suggestion-match">`. The rest is escaped.
///
/// ```
/// use fairway::highlight_match;
///
/// assert_eq!(
///     highlight_match("US Open", "open"),
///     r#"US <span class="suggestion-match">Open</span>"#
/// );
/// ```
pub fn highlight_match(label: &str, query: &str) -> String {
    let query: Vec<char> = query.trim().chars().flat_map(char::to_lowercase).collect();
    if query.is_empty() {
        return escape_html(label);
    }

    let mut out = String::with_capacity(label.len() + 32);
    let mut plain_from = 0;
    let mut i = 0;
    while i < label.len() {
        if let Some(len) = match_len(&label[i..], &query) {
            push_escaped(&mut out, &label[plain_from..i]);
            out.push_str("<span class=\"");
            out.push_str(MATCH_CLASS);
            out.push_str("\">");
            push_escaped(&mut out, &label[i..i + len]);
            out.push_str("</span>");
            i += len;
            plain_from = i;
        } else {
            i += label[i..].chars().next().map_or(1, char::len_utf8);
        }
    }
    push_escaped(&mut out, &label[plain_from..]);
    out
}
