//! Full-search ranking over the fixture season.
//!
//! Name-family matches are tiered (exact > prefix > substring > acronym) and
//! only events with no name match fall through to location, tier and number.

use super::common::{make_event, names, season};
use fairway::tiers::classify_event;
use fairway::{generate_suggestions, rank, score_event, search_events, Event};

fn ranked_names(query: &str, corpus: &[Event]) -> Vec<String> {
    names(rank(query, corpus).into_iter().map(|pos| &corpus[pos]))
}

// ============================================================================
// NAME TIERS
// ============================================================================

#[test]
fn test_substring_ties_keep_corpus_order() {
    let corpus = season();
    assert_eq!(
        ranked_names("open", &corpus),
        [
            "European Open",
            "Ledgestone Insurance Open",
            "US Open",
            "Portland Open",
            "Tampere Open",
            "Swedish Open"
        ]
    );
}

#[test]
fn test_exact_name_only() {
    let corpus = season();
    assert_eq!(ranked_names("US OPEN", &corpus), ["US Open"]);
}

#[test]
fn test_exact_ranks_at_or_above_substring() {
    let corpus = vec![
        make_event("Open Doubles", "Austin"),
        make_event("Ice Bowl Open", "Austin"),
        make_event("Ice Bowl", "Austin"),
    ];
    let order = rank("ice bowl", &corpus);
    assert_eq!(order[0], 2);
    assert!(score_event(&corpus[2], "ice bowl") >= score_event(&corpus[1], "ice bowl"));
}

#[test]
fn test_name_match_beats_location_match() {
    let corpus = season();
    // Rockford Ice Bowl: prefix 80 + city 5. US Open: city-only fallback 30.
    assert_eq!(ranked_names("rockford", &corpus), ["Rockford Ice Bowl", "US Open"]);
    assert_eq!(score_event(&corpus[10], "rockford"), 85);
    assert_eq!(score_event(&corpus[3], "rockford"), 30);
}

#[test]
fn test_acronym_match() {
    let corpus = season();
    assert_eq!(
        ranked_names("pdgwc", &corpus),
        ["PDGA Professional Disc Golf World Championships"]
    );
    assert_eq!(score_event(&corpus[0], "pdgwc"), 50);
}

// ============================================================================
// FALLBACK FIELDS
// ============================================================================

#[test]
fn test_state_fallback() {
    let corpus = season();
    assert_eq!(
        ranked_names("illinois", &corpus),
        ["Ledgestone Insurance Open", "US Open", "Rockford Ice Bowl"]
    );
}

#[test]
fn test_country_fallback() {
    let corpus = season();
    assert_eq!(ranked_names("finland", &corpus), ["European Open", "Tampere Open"]);
}

#[test]
fn test_tier_fallback_uses_classified_label() {
    let corpus = season();
    assert_eq!(ranked_names("tier-c", &corpus), ["Spring Fling", "Rockford Ice Bowl"]);
}

#[test]
fn test_untiered_events_not_found_by_placeholder() {
    let mut untiered = make_event("Spring Fling", "Emporia");
    classify_event(&mut untiered);
    let corpus = vec![untiered];
    assert!(rank("n/a", &corpus).is_empty());
    assert!(rank("n", &corpus).is_empty());
    assert!(generate_suggestions("n/a", &corpus, 8).is_empty());
}

#[test]
fn test_number_fallback() {
    let corpus = season();
    assert_eq!(ranked_names("787", &corpus), ["Rockford Ice Bowl"]);
    assert_eq!(score_event(&corpus[10], "787"), 40);
}

// ============================================================================
// EDGES
// ============================================================================

#[test]
fn test_no_match_is_empty() {
    let corpus = season();
    assert!(rank("zzzz", &corpus).is_empty());
    assert!(rank("", &corpus).is_empty());
    assert!(rank("open", &[]).is_empty());
}

#[test]
fn test_search_events_borrows_corpus() {
    let corpus = season();
    let hits = search_events("finland", &corpus);
    assert!(std::ptr::eq(hits[0], &corpus[1]));
}
