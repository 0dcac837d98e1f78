//! Runtime contracts for the ranking and paging invariants.
//!
//! Debug-mode assertions that fail loudly the moment an invariant breaks:
//!
//! 1. **Zero-cost in release builds** (everything is `debug_assert!`)
//! 2. **Early failure detection** in tests and during development
//!
//! # Contracts
//!
//! | Contract Function              | Invariant                                       |
//! |--------------------------------|-------------------------------------------------|
//! | `check_similarity_bounded`     | `0 ≤ similarity ≤ 100`                          |
//! | `check_suggestions_well_formed`| `len ≤ limit`, every score above threshold, sorted |
//! | `check_scores_descending`      | full-search scores never increase               |
//! | `check_page_in_range`          | `1 ≤ current_page ≤ max(1, total_pages)`        |
//!
//! # Usage
//!
//! ```ignore
//! use fairway::contracts::*;
//!
//! // In debug builds, this panics if the page escaped its range
//! check_page_in_range(cursor.current_page(), cursor.total_pages());
//!
//! // In release builds, this is a no-op
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The full-search name tiers must stay strictly ordered. Location boosts can
/// still lift an acronym hit (50 + 15) past a bare substring hit (60).
const _: () = {
    use crate::scoring::ranking::{
        ACRONYM_NAME_SCORE, EXACT_NAME_SCORE, PREFIX_NAME_SCORE, SUBSTRING_NAME_SCORE,
    };

    assert!(EXACT_NAME_SCORE > PREFIX_NAME_SCORE);
    assert!(PREFIX_NAME_SCORE > SUBSTRING_NAME_SCORE);
    assert!(SUBSTRING_NAME_SCORE > ACRONYM_NAME_SCORE);
    assert!(ACRONYM_NAME_SCORE > 0);
};

use crate::scoring::EXACT_SCORE;
use crate::types::ScoredMatch;

// ============================================================================
// SCORING CONTRACTS
// ============================================================================

/// Check a similarity score is within `[0, 100]` and not NaN.
#[inline]
pub fn check_similarity_bounded(score: f64) {
    debug_assert!(
        (0.0..=EXACT_SCORE).contains(&score),
        "Contract violation: similarity {} outside [0, {}]",
        score,
        EXACT_SCORE
    );
}

/// Check a suggestion list respects its limit, threshold and ordering.
///
/// # Panics (debug builds only)
/// Panics if the list is too long, holds a score at or below `threshold`, or
/// is not sorted by descending score.
#[inline]
pub fn check_suggestions_well_formed(results: &[ScoredMatch], limit: usize, threshold: f64) {
    debug_assert!(
        results.len() <= limit,
        "Contract violation: {} suggestions exceed limit {}",
        results.len(),
        limit
    );
    for m in results {
        check_similarity_bounded(m.score);
        debug_assert!(
            m.score > threshold,
            "Contract violation: suggestion score {} <= threshold {}",
            m.score,
            threshold
        );
    }
    check_scores_descending(results.iter().map(|m| m.score));
}

/// Check a score sequence never increases.
#[inline]
pub fn check_scores_descending(scores: impl IntoIterator<Item = f64>) {
    if cfg!(debug_assertions) {
        let mut prev = f64::INFINITY;
        for (i, score) in scores.into_iter().enumerate() {
            debug_assert!(
                score <= prev,
                "Contract violation: score {} at position {} exceeds previous {}",
                score,
                i,
                prev
            );
            prev = score;
        }
    }
}

// ============================================================================
// PAGINATION CONTRACTS
// ============================================================================

/// Check the current page is inside `[1, max(1, total_pages)]`.
#[inline]
pub fn check_page_in_range(current_page: usize, total_pages: usize) {
    debug_assert!(
        current_page >= 1 && current_page <= total_pages.max(1),
        "Contract violation: page {} outside [1, {}]",
        current_page,
        total_pages.max(1)
    );
}
