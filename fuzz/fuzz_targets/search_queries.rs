// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Throws arbitrary strings at the suggestion engine, the full-search ranker
//! and the highlighter over a fixed corpus. None of them may panic, and each
//! must keep its ordering and bound invariants.

#![no_main]

use fairway::{generate_suggestions, highlight_match, rank, score_event, Event};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

fn corpus() -> &'static [Event] {
    static CORPUS: OnceLock<Vec<Event>> = OnceLock::new();
    CORPUS.get_or_init(|| {
        let names = [
            ("PDGA Professional Disc Golf World Championships", "Dallas", "Major"),
            ("European Open", "Nokia", "Major"),
            ("Ledgestone Insurance Open", "Peoria", "Elite"),
            ("Rockford Ice Bowl", "Rockford", "Tier-C"),
            ("Kävelykatu Klassikko", "Tampere", "Tier-B"),
            ("Île-de-France Open", "Paris", "Tier-A"),
            ("", "", ""),
        ];
        names
            .iter()
            .enumerate()
            .map(|(i, (name, city, tier))| Event {
                id: Some(i as i64),
                name: Some(name.to_string()),
                event_name: Some(format!("2024 {}", name)),
                city: Some(city.to_string()),
                tier: Some(tier.to_string()),
                pdga_number: Some(format!("{}", 70_000 + i)),
                ..Event::default()
            })
            .collect()
    })
}

fuzz_target!(|query: &[u8]| {
    let query = String::from_utf8_lossy(query);
    // Cap length on a char boundary to avoid timeouts
    let query: String = query.chars().take(200).collect();
    let corpus = corpus();

    // INVARIANT 1: suggestions bounded, above threshold, best first
    let suggestions = generate_suggestions(&query, corpus, 8);
    assert!(suggestions.len() <= 8);
    for pair in suggestions.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for m in &suggestions {
        assert!(m.score > 10.0 && m.score <= 100.0);
        // INVARIANT 2: highlighting never panics on the label
        let _ = highlight_match(m.label(), query.trim());
    }

    // INVARIANT 3: ranked positions are valid and descending
    let order = rank(&query, corpus);
    for &pos in &order {
        assert!(pos < corpus.len());
    }
    for pair in order.windows(2) {
        assert!(score_event(&corpus[pair[0]], &query) >= score_event(&corpus[pair[1]], &query));
    }
});
