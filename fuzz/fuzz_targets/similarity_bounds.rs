// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the 0-100 similarity scorer.
//!
//! Arbitrary text and query pairs, including case-folding oddities like "İ"
//! whose lowercase form is longer than the original.

#![no_main]

use arbitrary::Arbitrary;
use fairway::scoring::{similarity, EXACT_SCORE};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Pair {
    text: Option<String>,
    query: Option<String>,
}

fuzz_target!(|pair: Pair| {
    let score = similarity(pair.text.as_deref(), pair.query.as_deref());

    // INVARIANT 1: bounded
    assert!(
        (0.0..=EXACT_SCORE).contains(&score),
        "score {} out of range for {:?}",
        score,
        pair
    );

    // INVARIANT 2: absent or empty input scores zero
    if pair.text.as_deref().map_or(true, str::is_empty)
        || pair.query.as_deref().map_or(true, str::is_empty)
    {
        assert_eq!(score, 0.0);
    }

    // INVARIANT 3: identity is an exact match
    if let Some(text) = pair.text.as_deref().filter(|s| !s.is_empty()) {
        assert_eq!(similarity(Some(text), Some(text)), EXACT_SCORE);
    }
});
