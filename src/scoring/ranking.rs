// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full-search scoring: how one event earns its place in the result table.
//!
//! Unlike live suggestions, full search is tiered, not additive. The name
//! family (`name`, `event_name`) decides a base score by the strongest kind
//! of match it has:
//!
//! ```text
//! exact (100) > prefix (80) > substring (60) > acronym (50)
//! ```
//!
//! A name-family hit then collects a small +5 per location field that also
//! contains the query, and stops there. Only events with no name-family
//! match at all fall through to the location/tier/number fallback, where
//! every matching field adds up. An event that scores 0 is not a result.
//!
//! The short-circuit matters: a name substring hit in Rockford scores 60,
//! while a city-only hit on "Rockford" scores 30. Making the two stages
//! additive would reorder results.

use crate::types::Event;
use crate::utils::{alnum_only, alnum_words, fold, initials, non_empty};

// =============================================================================
// FULL SEARCH CONSTANTS
// =============================================================================

/// Base score: `name` or `event_name` equals the query.
pub const EXACT_NAME_SCORE: u32 = 100;

/// Base score: `name` or `event_name` starts with the query.
pub const PREFIX_NAME_SCORE: u32 = 80;

/// Base score: `name` or `event_name` contains the query.
pub const SUBSTRING_NAME_SCORE: u32 = 60;

/// Base score: the query spells (part of) the name's word initials.
pub const ACRONYM_NAME_SCORE: u32 = 50;

/// Boost per location field (city, state, country) on top of a name match.
pub const LOCATION_BOOST: u32 = 5;

/// Fallback score per location field when no name field matched.
pub const LOCATION_FALLBACK_SCORE: u32 = 30;

/// Fallback score when the tier label contains the query.
pub const TIER_FALLBACK_SCORE: u32 = 20;

/// Fallback score when the numeric field contains the query.
pub const NUMBER_FALLBACK_SCORE: u32 = 40;

/// Does `query` spell the word initials of `text`, or a run inside them?
///
/// The query is lowercased and stripped to ASCII letters and digits; the text
/// keeps its word boundaries but loses punctuation. Either side empty after
/// cleaning is never a match.
///
/// ```
/// use fairway::matches_acronym;
///
/// assert!(matches_acronym("Professional Disc Golf World Championships", "pdgwc"));
/// assert!(matches_acronym("Professional Disc Golf World Championships", "dg"));
/// assert!(!matches_acronym("Professional Disc Golf World Championships", "xyz"));
/// ```
pub fn matches_acronym(text: &str, query: &str) -> bool {
    let clean_query = alnum_only(query);
    let clean_text = alnum_words(text);
    if clean_query.is_empty() || clean_text.is_empty() {
        return false;
    }
    // Exact equality is a special case of containment.
    initials(&clean_text).contains(&clean_query)
}

/// Case-insensitive substring test on an optional field.
fn contains_folded(field: Option<&str>, folded_query: &str) -> bool {
    non_empty(field).is_some_and(|text| fold(text).contains(folded_query))
}

/// Substring test on the string form of the numeric field. Not case-folded:
/// the field is digits.
fn contains_number(field: Option<&str>, query: &str) -> bool {
    non_empty(field).is_some_and(|digits| digits.contains(query))
}

/// Base score from the name family alone (0 when nothing matches).
fn name_score(event: &Event, query: &str, folded_query: &str) -> u32 {
    let names: [Option<String>; 2] = [
        non_empty(event.name.as_deref()).map(fold),
        non_empty(event.event_name.as_deref()).map(fold),
    ];
    let names = || names.iter().flatten();

    if names().any(|n| n == folded_query) {
        EXACT_NAME_SCORE
    } else if names().any(|n| n.starts_with(folded_query)) {
        PREFIX_NAME_SCORE
    } else if names().any(|n| n.contains(folded_query)) {
        SUBSTRING_NAME_SCORE
    } else if [event.name.as_deref(), event.event_name.as_deref()]
        .into_iter()
        .flatten()
        .any(|n| matches_acronym(n, query))
    {
        ACRONYM_NAME_SCORE
    } else {
        0
    }
}

/// Score one event for a full search. Higher is better; 0 means excluded.
///
/// An empty query scores 0 for every event.
pub fn score_event(event: &Event, query: &str) -> u32 {
    if query.is_empty() {
        return 0;
    }
    let folded_query = fold(query);
    let locations = [
        event.city.as_deref(),
        event.state.as_deref(),
        event.country.as_deref(),
    ];
    let location_hits = locations
        .iter()
        .filter(|field| contains_folded(**field, &folded_query))
        .count() as u32;

    let base = name_score(event, query, &folded_query);
    if base > 0 {
        return base + LOCATION_BOOST * location_hits;
    }

    let mut score = LOCATION_FALLBACK_SCORE * location_hits;
    if contains_folded(event.tier.as_deref(), &folded_query) {
        score += TIER_FALLBACK_SCORE;
    }
    if contains_number(event.pdga_number.as_deref(), query) {
        score += NUMBER_FALLBACK_SCORE;
    }
    score
}
