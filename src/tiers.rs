// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! PDGA tier codes and their display labels.
//!
//! Detail records carry the raw code (`"M"`, `"NT"`, `"A"` ...). Everything
//! downstream, from the sort engine to the table badges, works with the
//! classified label and its badge class:
//!
//! | Code | Label     | Class     |
//! |------|-----------|-----------|
//! | M    | Major     | major     |
//! | NT   | Elite     | elite     |
//! | A    | Tier-A    | tier-a    |
//! | B    | Tier-B    | tier-b    |
//! | C    | Tier-C    | tier-c    |
//! | XA   | Tier-XA   | tier-xa   |
//! | XB   | Tier-XB   | tier-xb   |
//! | XC   | Tier-XC   | tier-xc   |
//! | XM   | Tier-XM   | tier-xm   |

use crate::types::Event;

/// Placeholder rendered for an event without any tier. Display only; an
/// untiered event keeps `tier: None` so search never scores this text.
pub const MISSING_TIER_LABEL: &str = "N/A";

/// Badge class for codes outside the table.
pub const OTHER_TIER_CLASS: &str = "tier-other";

const TIERS: [(&str, &str, &str); 9] = [
    ("M", "Major", "major"),
    ("NT", "Elite", "elite"),
    ("A", "Tier-A", "tier-a"),
    ("B", "Tier-B", "tier-b"),
    ("C", "Tier-C", "tier-c"),
    ("XA", "Tier-XA", "tier-xa"),
    ("XB", "Tier-XB", "tier-xb"),
    ("XC", "Tier-XC", "tier-xc"),
    ("XM", "Tier-XM", "tier-xm"),
];

/// A classified tier: display label plus badge class.
///
/// `label` is `None` when the event has no tier at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierClass {
    pub label: Option<String>,
    pub class: String,
}

/// Classify a raw tier code.
///
/// Accepts both raw codes and labels that were already classified, so running
/// it twice is harmless. Unknown codes keep their text under the `tier-other`
/// class, as does a missing tier (with no label).
pub fn classify(raw: Option<&str>) -> TierClass {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return TierClass {
            label: None,
            class: OTHER_TIER_CLASS.to_string(),
        };
    };

    TIERS
        .iter()
        .find(|(code, label, _)| raw.eq_ignore_ascii_case(code) || raw == *label)
        .map(|(_, label, class)| TierClass {
            label: Some((*label).to_string()),
            class: (*class).to_string(),
        })
        .unwrap_or_else(|| TierClass {
            label: Some(raw.to_string()),
            class: OTHER_TIER_CLASS.to_string(),
        })
}

/// Rewrite an event's `tier` to its label and fill in `tier_code`.
pub fn classify_event(event: &mut Event) {
    let TierClass { label, class } = classify(event.tier.as_deref());
    event.tier = label;
    event.tier_code = Some(class);
}
