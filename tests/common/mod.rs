//! Shared test utilities and fixtures.

#![allow(dead_code)]

use fairway::{Event, ResultPage};
use std::sync::LazyLock;

// Re-export canonical test utilities from fairway::testing
pub use fairway::testing::{make_detail, make_event, make_identity, make_listed_event};

// ============================================================================
// FIXTURE CORPUS
// ============================================================================

/// A small, realistic season: majors, elite series, A/B/C tiers and XC
/// leagues across three countries. Newest first, as the loader orders it.
pub const SEASON_JSON: &str = r#"[
  {"id": 1,  "pdga_event_id": 77758, "name": "PDGA Professional Disc Golf World Championships",
   "event_name": "2024 PDGA Pro Worlds", "tier": "M", "city": "Dallas", "state": "Texas",
   "country": "United States", "start_date": "2024-08-20", "year": 2024, "pdga_number": 77758},
  {"id": 2,  "pdga_event_id": 77761, "name": "European Open", "event_name": "2024 European Open",
   "tier": "M", "city": "Nokia", "state": null, "country": "Finland",
   "start_date": "2024-07-11", "year": 2024, "pdga_number": "77761"},
  {"id": 3,  "pdga_event_id": 77762, "name": "Ledgestone Insurance Open",
   "event_name": "Discraft Ledgestone Open", "tier": "NT", "city": "Peoria", "state": "Illinois",
   "country": "United States", "start_date": "2024-08-01", "year": 2024, "pdga_number": 77762},
  {"id": 4,  "pdga_event_id": 77765, "name": "US Open", "event_name": "United States Disc Golf Championship",
   "tier": "NT", "city": "Rockford", "state": "Illinois", "country": "United States",
   "start_date": "2024-06-13", "year": 2024, "pdga_number": 77765},
  {"id": 5,  "pdga_event_id": 78101, "name": "Portland Open", "event_name": "Portland Open presented by Dynamic",
   "tier": "NT", "city": "Portland", "state": "Oregon", "country": "United States",
   "start_date": "2024-07-25", "year": 2024, "pdga_number": 78101},
  {"id": 6,  "pdga_event_id": 78200, "name": "Tampere Open", "event_name": "Tampere Open",
   "tier": "A", "city": "Tampere", "state": null, "country": "Finland",
   "start_date": "2023-06-02", "year": 2023, "pdga_number": 78200},
  {"id": 7,  "pdga_event_id": 78305, "name": "Texas State Championships", "event_name": null,
   "tier": "A", "city": "Austin", "state": "Texas", "country": "United States",
   "start_date": "2023-03-04", "year": 2023, "pdga_number": 78305},
  {"id": 8,  "pdga_event_id": 78411, "name": "Spring Fling", "event_name": "Spring Fling Doubles",
   "tier": "C", "city": "Emporia", "state": "Kansas", "country": "United States",
   "start_date": "2023-04-15", "year": 2023, "pdga_number": 78411},
  {"id": null, "pdga_event_id": 78520, "name": "Swedish Open", "event_name": "Swedish Open",
   "tier": "B", "city": "Gothenburg", "state": null, "country": "Sweden",
   "start_date": "not scheduled", "year": null, "pdga_number": 78520},
  {"id": 10, "pdga_event_id": 78633, "name": "Tuesday Night Minis", "event_name": null,
   "tier": "XC", "city": "Emporia", "state": "Kansas", "country": "United States",
   "start_date": "2023-09-05", "year": 2023, "pdga_number": 78633},
  {"id": 11, "pdga_event_id": 78744, "name": "Rockford Ice Bowl", "event_name": null,
   "tier": "C", "city": "Rockford", "state": "Illinois", "country": "United States",
   "start_date": "2024-01-20", "year": 2024, "pdga_number": 78744},
  {"id": 12, "pdga_event_id": 78855, "name": "Mystery Doubles", "event_name": null,
   "tier": "L", "city": "Austin", "state": "Texas", "country": "United States",
   "start_date": null, "year": null, "pdga_number": null}
]"#;

static SEASON: LazyLock<Vec<Event>> = LazyLock::new(|| {
    let mut events: Vec<Event> = serde_json::from_str(SEASON_JSON).expect("fixture parses");
    for event in &mut events {
        fairway::tiers::classify_event(event);
    }
    events
});

/// The classified fixture corpus.
pub fn season() -> Vec<Event> {
    SEASON.clone()
}

// ============================================================================
// HELPERS
// ============================================================================

/// Names of events, in order.
pub fn names<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vec<String> {
    events
        .into_iter()
        .map(|e| e.name.clone().unwrap_or_default())
        .collect()
}

/// What a renderer saw on one call.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub page: usize,
    pub total_pages: usize,
    pub names: Vec<String>,
    pub filler_rows: usize,
}

impl Rendered {
    pub fn of(page: &ResultPage<'_>) -> Self {
        Rendered {
            page: page.info.current_page,
            total_pages: page.info.total_pages,
            names: names(page.events.iter().copied()),
            filler_rows: page.filler_rows,
        }
    }
}

/// Corpus of `n` events all containing "open", in a single city.
pub fn open_corpus(n: usize) -> Vec<Event> {
    (0..n)
        .map(|i| make_event(&format!("Open {:03}", i), "Austin"))
        .collect()
}
