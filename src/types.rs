// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks every search surface shares.
//!
//! `Event` is the read-only projection of a tournament record that the
//! scoring, ranking and sorting code consumes. It is loaded once and never
//! mutated while a scoring or sort pass is running. Everything else here is
//! small vocabulary: which name field a suggestion matched, which column a
//! table is sorted by, and in which direction.
//!
//! # Invariants
//!
//! - **Event**: immutable for the duration of a pass. Derived result sets hold
//!   positions into the corpus, never copies that could drift.
//!
//! - **ScoredMatch**: `score > suggestion threshold` for anything the
//!   suggestion engine hands out. Produced fresh per query, never persisted.
//!
//! - **SortState**: resets to `{None, Asc}` on every new free-text search.

use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// EVENTS
// =============================================================================

/// A tournament record as seen by the search core.
///
/// All text fields are optional: the backend happily returns nulls, and the
/// scorers treat an absent field exactly like an empty one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Grouping identifier shared by every yearly edition of a recurring series.
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    /// Per-edition identifier used to join identity and detail records.
    #[serde(default, deserialize_with = "lenient_u64")]
    pub pdga_event_id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    /// Alternate display name (usually the sponsor-branded title).
    #[serde(default)]
    pub event_name: Option<String>,
    /// Classified tier label: "Major", "Elite", "Tier-A" .. "Tier-XM".
    #[serde(default)]
    pub tier: Option<String>,
    /// Display class for the tier badge.
    #[serde(default, rename = "tierCode")]
    pub tier_code: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub year: Option<i32>,
    /// Numeric-ish field, only ever matched as a string.
    #[serde(default, deserialize_with = "lenient_string")]
    pub pdga_number: Option<String>,
}

impl Event {
    /// Text stored under a sortable column, if any.
    pub fn column_text(&self, column: SortColumn) -> Option<&str> {
        let value = match column {
            SortColumn::Name => &self.name,
            SortColumn::EventName => &self.event_name,
            SortColumn::StartDate => &self.start_date,
            SortColumn::Tier => &self.tier,
            SortColumn::TierCode => &self.tier_code,
            SortColumn::City => &self.city,
            SortColumn::State => &self.state,
            SortColumn::Country => &self.country,
            SortColumn::PdgaNumber => &self.pdga_number,
        };
        value.as_deref()
    }

    /// The label a suggestion shows: the matched field, falling back to `name`.
    pub fn display_label(&self, field: MatchField) -> &str {
        let preferred = match field {
            MatchField::Name => self.name.as_deref(),
            MatchField::EventName => self.event_name.as_deref(),
        };
        preferred
            .filter(|s| !s.is_empty())
            .or(self.name.as_deref())
            .unwrap_or("")
    }

    /// One-line summary shown under a suggestion: `date • tier • city, region`.
    ///
    /// The region is the state when present, otherwise the country.
    pub fn meta_line(&self) -> String {
        let region = self
            .state
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.country.as_deref())
            .unwrap_or("");
        format!(
            "{} • {} • {}, {}",
            self.start_date.as_deref().unwrap_or(""),
            self.tier.as_deref().unwrap_or(""),
            self.city.as_deref().unwrap_or(""),
            region
        )
    }
}

/// Identity record: links an edition to its series and canonical name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventIdentity {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub pdga_event_id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Detail record for one edition, with the raw (unclassified) tier code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDetail {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub pdga_event_id: Option<u64>,
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub pdga_number: Option<String>,
}

// =============================================================================
// SUGGESTIONS
// =============================================================================

/// Which name field a suggestion should display and highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchField {
    Name,
    EventName,
}

/// One live suggestion: the event, its best weighted field score, and the
/// name field to show.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredMatch {
    pub event: Event,
    pub score: f64,
    pub match_field: MatchField,
}

impl ScoredMatch {
    pub fn label(&self) -> &str {
        self.event.display_label(self.match_field)
    }
}

// =============================================================================
// SORTING VOCABULARY
// =============================================================================

/// A sortable table column, keyed by the same names the table headers use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Name,
    EventName,
    StartDate,
    Tier,
    #[serde(rename = "tierCode")]
    TierCode,
    City,
    State,
    Country,
    PdgaNumber,
}

impl SortColumn {
    pub const ALL: [SortColumn; 9] = [
        SortColumn::Name,
        SortColumn::EventName,
        SortColumn::StartDate,
        SortColumn::Tier,
        SortColumn::TierCode,
        SortColumn::City,
        SortColumn::State,
        SortColumn::Country,
        SortColumn::PdgaNumber,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::EventName => "event_name",
            SortColumn::StartDate => "start_date",
            SortColumn::Tier => "tier",
            SortColumn::TierCode => "tierCode",
            SortColumn::City => "city",
            SortColumn::State => "state",
            SortColumn::Country => "country",
            SortColumn::PdgaNumber => "pdga_number",
        }
    }
}

impl FromStr for SortColumn {
    type Err = Error;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        SortColumn::ALL
            .into_iter()
            .find(|column| column.as_str() == key)
            .ok_or_else(|| Error::UnknownColumn(key.to_string()))
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Active column and direction for the result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl SortState {
    /// Header-click transition: same column flips direction, a new column
    /// starts ascending.
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == Some(column) {
            self.direction = self.direction.toggled();
        } else {
            self.column = Some(column);
            self.direction = SortDirection::Asc;
        }
    }

    pub fn reset(&mut self) {
        *self = SortState::default();
    }
}

// =============================================================================
// LENIENT NUMERIC FIELDS
// =============================================================================
// The backend is inconsistent about numbers: the same column arrives as 1234,
// 1234.0 or "1234" depending on the endpoint. Accept all three.

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumberOrText {
    fn as_i64(&self) -> Option<i64> {
        match self {
            NumberOrText::Int(n) => Some(*n),
            NumberOrText::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(*f as i64),
            NumberOrText::Float(_) => None,
            NumberOrText::Text(s) => s.trim().parse().ok(),
        }
    }

    fn into_text(self) -> String {
        match self {
            NumberOrText::Int(n) => n.to_string(),
            NumberOrText::Float(f) => f.to_string(),
            NumberOrText::Text(s) => s,
        }
    }
}

fn lenient_i64<'de, D: Deserializer<'de>>(de: D) -> Result<Option<i64>, D::Error> {
    let value: Option<NumberOrText> = Option::deserialize(de)?;
    Ok(value.as_ref().and_then(NumberOrText::as_i64))
}

fn lenient_u64<'de, D: Deserializer<'de>>(de: D) -> Result<Option<u64>, D::Error> {
    let value: Option<NumberOrText> = Option::deserialize(de)?;
    Ok(value
        .as_ref()
        .and_then(NumberOrText::as_i64)
        .and_then(|n| u64::try_from(n).ok()))
}

fn lenient_i32<'de, D: Deserializer<'de>>(de: D) -> Result<Option<i32>, D::Error> {
    let value: Option<NumberOrText> = Option::deserialize(de)?;
    Ok(value
        .as_ref()
        .and_then(NumberOrText::as_i64)
        .and_then(|n| i32::try_from(n).ok()))
}

fn lenient_string<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    let value: Option<NumberOrText> = Option::deserialize(de)?;
    Ok(value.map(NumberOrText::into_text).filter(|s| !s.is_empty()))
}
