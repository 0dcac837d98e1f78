//! Search, suggestion and ranking core for browsing disc golf tournament records.
//!
//! Two deliberately different scorers serve two surfaces: live suggestions
//! under the search box, and the full result table behind the submit button.
//! Around them sit a stable column sort, a pagination cursor and a small
//! keyboard/mouse state machine for the suggestion dropdown.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │  corpus.rs  │────▶│ search/suggest.rs│────▶│  controller.rs   │
//! │ (assemble,  │     │ (max of weighted │     │ (dropdown state, │
//! │  tiers)     │     │  similarity)     │     │  hand-off slot)  │
//! └─────────────┘     └──────────────────┘     └──────────────────┘
//!        │
//!        │            ┌──────────────────┐     ┌──────────────────┐
//!        └───────────▶│  search/full.rs  │────▶│    session.rs    │
//!                     │ (tiered ranking) │     │ (sort.rs,        │
//!                     └──────────────────┘     │  pagination.rs)  │
//!                                              └──────────────────┘
//! ```
//!
//! # Scorers
//!
//! | Surface      | Module                | Policy                                 |
//! |--------------|-----------------------|----------------------------------------|
//! | Suggestions  | `scoring::core`       | additive 0-100, best weighted field    |
//! | Full search  | `scoring::ranking`    | name tier first, fallback only if none |
//!
//! The two must not be unified: they disagree on purpose.
//!
//! # Usage
//!
//! ```
//! use fairway::{rank, generate_suggestions, Event};
//!
//! let corpus = vec![
//!     Event { name: Some("US Open".into()), city: Some("Rockford".into()), ..Event::default() },
//!     Event { name: Some("European Open".into()), city: Some("Nokia".into()), ..Event::default() },
//! ];
//!
//! assert_eq!(rank("open", &corpus), vec![0, 1]);
//! assert_eq!(generate_suggestions("open", &corpus, 8).len(), 2);
//! ```

// Module declarations
pub mod config;
pub mod contracts;
pub mod controller;
pub mod corpus;
mod error;
mod highlight;
pub mod listing;
pub mod pagination;
pub mod scoring;
mod search;
pub mod session;
pub mod sort;
pub mod testing;
pub mod tiers;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::SearchOptions;
pub use controller::{Commit, DropdownState, Key, KeyOutcome, SelectionHandoff, SuggestionController};
pub use corpus::{assemble, load_assembled, load_events};
pub use error::{Error, Result};
pub use highlight::{escape_html, highlight_match};
pub use listing::{available_countries, available_years, group_by_tier, ListingFilter, TierGroups};
pub use pagination::{PageInfo, PageSlice, PaginationCursor};
pub use scoring::ranking::{matches_acronym, score_event};
pub use scoring::{similarity, similarity_str};
pub use search::{generate_suggestions, rank, score_suggestion, search_events, suggest};
pub use session::{Renderer, ResultPage, SearchSession};
pub use sort::sort_positions;
pub use tiers::classify;
pub use types::{
    Event, EventDetail, EventIdentity, MatchField, ScoredMatch, SortColumn, SortDirection,
    SortState,
};
