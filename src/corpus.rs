// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Building the in-memory corpus.
//!
//! The backend serves two record kinds: identity records (series id and
//! canonical name) and detail records (one per yearly edition, with a raw tier
//! code). [`assemble`] joins them into the flat [`Event`] list every search
//! surface works on. Files that already hold assembled events load directly
//! through [`load_events`].
//!
//! The corpus is read once. Nothing in the crate mutates it afterwards.

use crate::error::{Error, Result};
use crate::sort::parse_date;
use crate::tiers::classify_event;
use crate::types::{Event, EventDetail, EventIdentity};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;

/// Join details to identities by `pdga_event_id`, classify tiers, and order
/// newest first.
///
/// A detail without a matching identity keeps `id` and `name` empty. When two
/// identities share a `pdga_event_id`, the first one wins. Events whose start
/// date cannot be parsed go last; ties keep detail order.
pub fn assemble(identities: &[EventIdentity], details: Vec<EventDetail>) -> Vec<Event> {
    let mut by_event_id: HashMap<u64, &EventIdentity> = HashMap::with_capacity(identities.len());
    for identity in identities {
        if let Some(key) = identity.pdga_event_id {
            by_event_id.entry(key).or_insert(identity);
        }
    }

    let mut unmatched = 0usize;
    let mut events: Vec<Event> = details
        .into_iter()
        .map(|detail| {
            let identity = detail
                .pdga_event_id
                .and_then(|key| by_event_id.get(&key).copied());
            if identity.is_none() {
                unmatched += 1;
            }
            let mut event = Event {
                id: identity.and_then(|i| i.id),
                pdga_event_id: detail.pdga_event_id,
                name: identity.and_then(|i| i.name.clone()),
                event_name: detail.event_name,
                tier: detail.tier,
                tier_code: None,
                city: detail.city,
                state: detail.state,
                country: detail.country,
                start_date: detail.start_date,
                year: detail.year,
                pdga_number: detail.pdga_number,
            };
            classify_event(&mut event);
            event
        })
        .collect();

    if unmatched > 0 {
        log::warn!("{} detail records have no identity record", unmatched);
    }

    sort_newest_first(&mut events);
    events
}

/// Stable newest-first order by start date; unparsable dates sink.
pub fn sort_newest_first(events: &mut [Event]) {
    events.sort_by_cached_key(|event| std::cmp::Reverse(parse_date(event.start_date.as_deref())));
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| Error::Json {
        path: Some(path.to_path_buf()),
        source,
    })
}

/// Load a JSON array of already-assembled events.
///
/// Tiers are classified on the way in, so files holding raw codes and files
/// holding labels both work. Order is preserved.
pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    let mut events: Vec<Event> = read_json(path)?;
    for event in &mut events {
        classify_event(event);
    }
    log::info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Load identity and detail arrays and [`assemble`] them.
pub fn load_assembled(identities: &Path, details: &Path) -> Result<Vec<Event>> {
    let identity_records: Vec<EventIdentity> = read_json(identities)?;
    let detail_records: Vec<EventDetail> = read_json(details)?;
    log::info!(
        "Assembling {} details against {} identities",
        detail_records.len(),
        identity_records.len()
    );
    Ok(assemble(&identity_records, detail_records))
}
