// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full search: the result table behind the submit button.
//!
//! Scores every event with [`score_event`], drops the zeros and orders the
//! rest best first. Ranking returns corpus positions rather than events, so
//! the caller builds its active result set without copying or aliasing the
//! corpus.

use crate::contracts::check_scores_descending;
use crate::scoring::ranking::score_event;
use crate::types::Event;

/// Corpus positions of every event matching `query`, best first.
///
/// Ties keep corpus order. An empty query matches nothing.
pub fn rank(query: &str, corpus: &[Event]) -> Vec<usize> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(usize, u32)> = corpus
        .iter()
        .enumerate()
        .map(|(pos, event)| (pos, score_event(event, query)))
        .filter(|(_, score)| *score > 0)
        .collect();

    // sort_by is stable; reverse the score comparison, never the slice.
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    check_scores_descending(scored.iter().map(|(_, score)| f64::from(*score)));
    log::debug!("search {:?}: {} of {} events", query, scored.len(), corpus.len());

    scored.into_iter().map(|(pos, _)| pos).collect()
}

/// Same as [`rank`], resolved to event references.
pub fn search_events<'a>(query: &str, corpus: &'a [Event]) -> Vec<&'a Event> {
    rank(query, corpus).into_iter().map(|pos| &corpus[pos]).collect()
}
