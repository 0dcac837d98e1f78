// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The browse view: every event grouped into Majors, Elite Series and the rest.
//!
//! Grouping works on classified tier labels (see [`crate::tiers`]). Majors and
//! Elite events are listed by name; everything else is listed by tier rank
//! first, so all Tier-A events come before Tier-B, then by name.

use crate::sort::{compare_text, tier_rank};
use crate::types::Event;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Events split by tier family, each group in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TierGroups<'a> {
    pub major: Vec<&'a Event>,
    pub elite: Vec<&'a Event>,
    pub others: Vec<&'a Event>,
}

impl TierGroups<'_> {
    pub fn len(&self) -> usize {
        self.major.len() + self.elite.len() + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn by_name(a: &Event, b: &Event) -> Ordering {
    compare_text(a.name.as_deref(), b.name.as_deref())
}

/// Group events by tier family. Input order only matters for exact ties.
pub fn group_by_tier<'a>(events: impl IntoIterator<Item = &'a Event>) -> TierGroups<'a> {
    let mut groups = TierGroups::default();
    for event in events {
        match event.tier.as_deref() {
            Some("Major") => groups.major.push(event),
            Some("Elite") => groups.elite.push(event),
            _ => groups.others.push(event),
        }
    }

    groups.major.sort_by(|a, b| by_name(a, b));
    groups.elite.sort_by(|a, b| by_name(a, b));
    groups.others.sort_by(|a, b| {
        tier_rank(a.tier.as_deref())
            .cmp(&tier_rank(b.tier.as_deref()))
            .then_with(|| by_name(a, b))
    });
    groups
}

/// The year an event was played: its `year` field, else the year of its
/// start date.
pub fn event_year(event: &Event) -> Option<i32> {
    event.year.or_else(|| {
        event
            .start_date
            .as_deref()
            .and_then(|date| date.get(..4))
            .and_then(|year| year.parse().ok())
    })
}

/// Year and country filters for the browse view. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub year: Option<i32>,
    pub country: Option<String>,
}

impl ListingFilter {
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.country.is_none()
    }

    pub fn matches(&self, event: &Event) -> bool {
        if let Some(year) = self.year {
            if event_year(event) != Some(year) {
                return false;
            }
        }
        if let Some(country) = &self.country {
            if event.country.as_deref() != Some(country.as_str()) {
                return false;
            }
        }
        true
    }

    /// Filter then group. An empty filter groups the whole corpus.
    pub fn apply<'a>(&self, corpus: &'a [Event]) -> TierGroups<'a> {
        let groups = group_by_tier(corpus.iter().filter(|event| self.matches(event)));
        log::debug!(
            "listing filter {:?}: {} of {} events",
            self,
            groups.len(),
            corpus.len()
        );
        groups
    }
}

/// Distinct years, newest first (the year dropdown).
pub fn available_years(corpus: &[Event]) -> Vec<i32> {
    let years: BTreeSet<i32> = corpus.iter().filter_map(event_year).collect();
    years.into_iter().rev().collect()
}

/// Distinct non-empty countries, alphabetical (the country dropdown).
pub fn available_countries(corpus: &[Event]) -> Vec<&str> {
    let countries: BTreeSet<&str> = corpus
        .iter()
        .filter_map(|event| event.country.as_deref())
        .filter(|country| !country.is_empty())
        .collect();
    countries.into_iter().collect()
}
