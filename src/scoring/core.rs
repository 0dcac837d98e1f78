// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind live suggestions.
//!
//! `similarity` scores one `(text, query)` pair on a 0-100 scale. An exact
//! match (ignoring case) is always exactly 100. Anything else accumulates
//! independent signals: a prefix match, a substring match, a word-start
//! match, an acronym match and a small character-overlap term. The signals
//! overlap on purpose (a prefix is also a substring and a word start), so the
//! raw sum can pass 100 and gets clamped.
//!
//! # Key Invariant: Bounded
//!
//! ```text
//! 0 ≤ similarity(text, query) ≤ 100
//! similarity(x, x) = 100            for any non-empty x
//! similarity("", q) = similarity(t, "") = 0
//! ```
//!
//! # Constants
//!
//! | Signal       | Bonus | Condition                                       |
//! |--------------|-------|-------------------------------------------------|
//! | Exact        | 100   | whole text equals query (short-circuits)        |
//! | Prefix       | 50    | text starts with query                          |
//! | Substring    | 30    | text contains query                             |
//! | Word start   | 20    | some whitespace-delimited word starts with query|
//! | Acronym      | 15    | word initials contain the query sans whitespace |
//! | Overlap      | ≤10   | 10 × (query chars found in text) / query length |

use crate::contracts::check_similarity_bounded;
use crate::utils::{fold, initials, strip_whitespace};

// =============================================================================
// SIMILARITY CONSTANTS
// =============================================================================

/// Score for a case-insensitive exact match. Also the clamp ceiling.
pub const EXACT_SCORE: f64 = 100.0;

/// Bonus when the text starts with the query.
pub const PREFIX_BONUS: f64 = 50.0;

/// Bonus when the text contains the query anywhere.
pub const SUBSTRING_BONUS: f64 = 30.0;

/// Bonus when any word of the text starts with the query.
pub const WORD_START_BONUS: f64 = 20.0;

/// Bonus when the text's word initials contain the query.
pub const ACRONYM_BONUS: f64 = 15.0;

/// Maximum character-overlap bonus (reached when every query character
/// appears somewhere in the text).
pub const MAX_OVERLAP_BONUS: f64 = 10.0;

/// Score how well `query` matches `text`, from 0 to 100.
///
/// Case-insensitive throughout. Absent or empty inputs score 0. Pure: no
/// allocation survives the call and nothing outside the arguments is read.
pub fn similarity(text: Option<&str>, query: Option<&str>) -> f64 {
    let (Some(text), Some(query)) = (text, query) else {
        return 0.0;
    };
    if text.is_empty() || query.is_empty() {
        return 0.0;
    }

    let text = fold(text);
    let query = fold(query);

    if text == query {
        return EXACT_SCORE;
    }

    let mut score = 0.0;

    if text.starts_with(&query) {
        score += PREFIX_BONUS;
    }

    if text.contains(&query) {
        score += SUBSTRING_BONUS;
    }

    if text.split_whitespace().any(|word| word.starts_with(&query)) {
        score += WORD_START_BONUS;
    }

    if initials(&text).contains(&strip_whitespace(&query)) {
        score += ACRONYM_BONUS;
    }

    score += overlap_bonus(&text, &query);

    let score = score.min(EXACT_SCORE);
    check_similarity_bounded(score);
    score
}

/// Convenience wrapper for the common borrowed-`&str` case.
#[inline]
pub fn similarity_str(text: &str, query: &str) -> f64 {
    similarity(Some(text), Some(query))
}

/// Fraction of query characters that occur anywhere in the text, scaled to
/// `MAX_OVERLAP_BONUS`. Repeated query characters count once per occurrence
/// in the query, so "oo" against "o" is a full overlap.
///
/// Both arguments are expected already case-folded and the query non-empty.
fn overlap_bonus(text: &str, query: &str) -> f64 {
    let mut found = 0usize;
    let mut total = 0usize;
    for c in query.chars() {
        total += 1;
        if text.contains(c) {
            found += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }
    MAX_OVERLAP_BONUS * (found as f64 / total as f64)
}
