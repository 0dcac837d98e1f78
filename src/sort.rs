// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Column sorting for the result table.
//!
//! Three comparator families:
//!
//! - **`start_date`**: calendar order. Missing or unparsable dates become
//!   `NaiveDate::MIN`, so they lead an ascending sort instead of failing it.
//! - **`tier`**: the fixed competitive ladder below. Anything off the ladder
//!   ranks 999 and trails an ascending sort.
//! - **everything else**: case-insensitive text, absent treated as empty.
//!   `pdga_number` compares numerically, with non-numeric values after all
//!   numbers.
//!
//! | Tier    | Rank | Tier    | Rank |
//! |---------|------|---------|------|
//! | Major   | 1    | Tier-XA | 6    |
//! | Elite   | 2    | Tier-XB | 7    |
//! | Tier-A  | 3    | Tier-XC | 8    |
//! | Tier-B  | 4    | Tier-XM | 9    |
//! | Tier-C  | 5    | unknown | 999  |
//!
//! Sorting is stable and always produces a new ordering; the input slice is
//! never reordered in place. Clicking the same header twice must give back
//! the same rows for tied keys, not a reshuffle.

use crate::types::{Event, SortColumn, SortDirection, SortState};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

/// Ladder position for tiers not in [`TIER_ORDER`].
pub const UNKNOWN_TIER_RANK: u32 = 999;

/// Competitive ladder, highest first.
pub const TIER_ORDER: [(&str, u32); 9] = [
    ("Major", 1),
    ("Elite", 2),
    ("Tier-A", 3),
    ("Tier-B", 4),
    ("Tier-C", 5),
    ("Tier-XA", 6),
    ("Tier-XB", 7),
    ("Tier-XC", 8),
    ("Tier-XM", 9),
];

/// Rank of a tier label on the ladder (exact, case-sensitive label match).
pub fn tier_rank(tier: Option<&str>) -> u32 {
    tier.and_then(|label| {
        TIER_ORDER
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, rank)| *rank)
    })
    .unwrap_or(UNKNOWN_TIER_RANK)
}

/// Parse a start date, falling back to the earliest representable date.
///
/// Accepts `2024-07-04`, RFC 3339 timestamps, `2024-07-04T09:00:00` and
/// `07/04/2024`.
pub fn parse_date(value: Option<&str>) -> NaiveDate {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
                .or_else(|| {
                    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
                        .ok()
                        .map(|dt| dt.date())
                })
                .or_else(|| NaiveDate::parse_from_str(s, "%m/%d/%Y").ok())
        })
        .unwrap_or(NaiveDate::MIN)
}

/// Case-insensitive text order, absent treated as empty.
pub fn compare_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.unwrap_or("").to_lowercase();
    let b = b.unwrap_or("").to_lowercase();
    a.cmp(&b)
}

/// New ordering of `active` (positions into `corpus`) under `state`.
///
/// With no active column the current order is returned unchanged.
pub fn sort_positions(active: &[usize], corpus: &[Event], state: &SortState) -> Vec<usize> {
    let mut sorted = active.to_vec();
    if let Some(column) = state.column {
        // Keys are precomputed: date parsing and case folding per comparison
        // would dominate on a few thousand rows.
        let keys: Vec<SortKey> = sorted
            .iter()
            .map(|&pos| SortKey::of(&corpus[pos], column))
            .collect();
        let mut order: Vec<usize> = (0..sorted.len()).collect();
        order.sort_by(|&i, &j| {
            let ord = keys[i].cmp_asc(&keys[j]);
            match state.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
        sorted = order.into_iter().map(|i| sorted[i]).collect();
    }
    sorted
}

/// Precomputed comparison key for one row.
enum SortKey {
    Date(NaiveDate),
    Rank(u32),
    Number(f64),
    Text(String),
}

impl SortKey {
    fn of(event: &Event, column: SortColumn) -> Self {
        match column {
            SortColumn::StartDate => SortKey::Date(parse_date(event.start_date.as_deref())),
            SortColumn::Tier => SortKey::Rank(tier_rank(event.tier.as_deref())),
            SortColumn::PdgaNumber => match event
                .pdga_number
                .as_deref()
                .and_then(|s| s.trim().parse::<f64>().ok())
            {
                Some(n) => SortKey::Number(n),
                None => SortKey::Text(event.pdga_number.as_deref().unwrap_or("").to_lowercase()),
            },
            _ => SortKey::Text(event.column_text(column).unwrap_or("").to_lowercase()),
        }
    }

    fn cmp_asc(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            (SortKey::Rank(a), SortKey::Rank(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            // Numbers lead text.
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }
}
