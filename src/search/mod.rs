// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: turning a query into an ordered list of events.
//!
//! Two entry points with two policies. `suggest` runs on every keystroke and
//! returns a short list of the best weighted single-field matches. `full`
//! runs on submit and orders every matching event by the tiered name-first
//! score. Both sort stably, so events with equal scores keep corpus order and
//! repeated searches never shuffle ties.

pub mod full;
pub mod suggest;

pub use full::{rank, search_events};
pub use suggest::{generate_suggestions, score_suggestion, suggest};
