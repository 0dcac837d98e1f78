// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Live suggestions: the dropdown under the search box.
//!
//! Every event gets five similarity scores (name, event name, city, state,
//! tier), each scaled by a field weight. The event keeps the best one, not the
//! sum: one strong field beats several weak ones. Anything at or below the
//! threshold is noise and dropped; the rest is ranked and cut to the limit.
//!
//! | Field        | Weight |
//! |--------------|--------|
//! | `name`       | 1.0    |
//! | `event_name` | 1.0    |
//! | `city`       | 0.5    |
//! | `state`      | 0.5    |
//! | `tier`       | 0.3    |

use crate::config::SearchOptions;
use crate::contracts::check_suggestions_well_formed;
use crate::scoring::similarity;
use crate::types::{Event, MatchField, ScoredMatch};

pub const NAME_WEIGHT: f64 = 1.0;
pub const EVENT_NAME_WEIGHT: f64 = 1.0;
pub const CITY_WEIGHT: f64 = 0.5;
pub const STATE_WEIGHT: f64 = 0.5;
pub const TIER_WEIGHT: f64 = 0.3;

/// Best weighted field score for one event, plus the name field to display.
///
/// `MatchField::Name` wins ties with `event_name`, including when neither
/// matched at all.
pub fn score_suggestion(event: &Event, query: &str) -> (f64, MatchField) {
    let q = Some(query);
    let name = similarity(event.name.as_deref(), q) * NAME_WEIGHT;
    let event_name = similarity(event.event_name.as_deref(), q) * EVENT_NAME_WEIGHT;
    let city = similarity(event.city.as_deref(), q) * CITY_WEIGHT;
    let state = similarity(event.state.as_deref(), q) * STATE_WEIGHT;
    let tier = similarity(event.tier.as_deref(), q) * TIER_WEIGHT;

    let best = [name, event_name, city, state, tier]
        .into_iter()
        .fold(0.0_f64, f64::max);
    let field = if name >= event_name {
        MatchField::Name
    } else {
        MatchField::EventName
    };
    (best, field)
}

/// Suggestions with the default options (limit 8, 2+ chars, threshold 10).
pub fn generate_suggestions(query: &str, corpus: &[Event], limit: usize) -> Vec<ScoredMatch> {
    let options = SearchOptions {
        suggestion_limit: limit,
        ..SearchOptions::default()
    };
    suggest(query, corpus, &options)
}

/// Rank the corpus for a partially typed query.
///
/// Returns at most `options.suggestion_limit` matches, each scoring strictly
/// above `options.suggestion_threshold`, best first. Queries shorter than
/// `options.min_query_chars` after trimming return nothing.
pub fn suggest(query: &str, corpus: &[Event], options: &SearchOptions) -> Vec<ScoredMatch> {
    let query = query.trim();
    if query.chars().count() < options.min_query_chars {
        return Vec::new();
    }

    let mut scored: Vec<(usize, f64, MatchField)> = corpus
        .iter()
        .enumerate()
        .filter_map(|(pos, event)| {
            let (score, field) = score_suggestion(event, query);
            (score > options.suggestion_threshold).then_some((pos, score, field))
        })
        .collect();

    // Stable: equal scores keep corpus order.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(options.suggestion_limit);

    let results: Vec<ScoredMatch> = scored
        .into_iter()
        .map(|(pos, score, match_field)| ScoredMatch {
            event: corpus[pos].clone(),
            score,
            match_field,
        })
        .collect();

    check_suggestions_well_formed(
        &results,
        options.suggestion_limit,
        options.suggestion_threshold,
    );
    log::debug!("suggest {:?}: {} of {} events", query, results.len(), corpus.len());
    results
}
