//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Event, EventDetail, EventIdentity};

/// Create an event with just a name and a city; everything else absent.
///
/// This is the canonical implementation used across all tests.
pub fn make_event(name: &str, city: &str) -> Event {
    Event {
        name: Some(name.to_string()),
        city: Some(city.to_string()),
        ..Event::default()
    }
}

/// Create a fully populated event as the assembled corpus would hold it.
pub fn make_listed_event(id: i64, name: &str, tier: &str, start_date: &str) -> Event {
    Event {
        id: Some(id),
        pdga_event_id: Some(70_000 + id as u64),
        name: Some(name.to_string()),
        event_name: Some(format!("{} presented by Innova", name)),
        tier: Some(tier.to_string()),
        tier_code: None,
        city: Some("Emporia".to_string()),
        state: Some("Kansas".to_string()),
        country: Some("United States".to_string()),
        start_date: Some(start_date.to_string()),
        year: start_date.get(..4).and_then(|y| y.parse().ok()),
        pdga_number: Some((70_000 + id).to_string()),
    }
}

/// Create an identity record.
pub fn make_identity(id: i64, pdga_event_id: u64, name: &str) -> EventIdentity {
    EventIdentity {
        id: Some(id),
        pdga_event_id: Some(pdga_event_id),
        name: Some(name.to_string()),
    }
}

/// Create a detail record with a raw tier code.
pub fn make_detail(pdga_event_id: u64, event_name: &str, tier: &str, start_date: &str) -> EventDetail {
    EventDetail {
        pdga_event_id: Some(pdga_event_id),
        event_name: Some(event_name.to_string()),
        tier: Some(tier.to_string()),
        start_date: Some(start_date.to_string()),
        ..EventDetail::default()
    }
}
