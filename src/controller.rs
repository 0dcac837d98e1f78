// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyboard and mouse state machine for the suggestion dropdown.
//!
//! ```text
//!                 input (< min chars), Escape, blur outside
//!        ┌──────────────────────────────────────────────┐
//!        ▼                                              │
//!   ┌─────────┐  input (≥ min chars)  ┌──────────────────┴─┐
//!   │ Closed  │──────────────────────▶│ Open { None }      │
//!   └─────────┘                       └──────────┬─────────┘
//!        ▲                                       │ ArrowDown / ArrowUp
//!        │ Enter, click (commit)      ┌──────────▼─────────┐
//!        └────────────────────────────│ Open { Some(i) }   │◀─┐ arrows wrap
//!                                     └────────────────────┴──┘
//! ```
//!
//! A click commits its own row whatever is highlighted. Enter only commits
//! when a row is highlighted; otherwise the host form submits as usual.
//!
//! Committing writes the event id into a [`SelectionHandoff`] and asks the
//! caller to navigate. The page that opens reads the slot once with
//! [`SelectionHandoff::take`], which clears it. Events without an id fall back
//! to a full search for their label.

use crate::config::SearchOptions;
use crate::highlight::highlight_match;
use crate::search::suggest;
use crate::types::{Event, ScoredMatch};
use serde::Serialize;
use std::str::FromStr;

/// Keys the dropdown reacts to, named as in `KeyboardEvent.key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

impl FromStr for Key {
    type Err = std::convert::Infallible;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(match name {
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    /// Open, with the highlighted row if any.
    Open { selected: Option<usize> },
}

/// What the host page should do after a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Commit {
    /// Open the event page for this series id.
    Navigate { id: i64 },
    /// Put `query` in the search box and run a full search.
    Submit { query: String },
}

/// Result of a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not ours: let the default action (form submit, caret move) happen.
    Ignored,
    /// Consumed; suppress the default action and re-render.
    Handled,
    Committed(Commit),
}

/// One-shot slot for the event id chosen on the search page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionHandoff {
    selected: Option<i64>,
}

impl SelectionHandoff {
    pub fn store(&mut self, id: i64) {
        self.selected = Some(id);
    }

    /// Read and clear.
    pub fn take(&mut self) -> Option<i64> {
        self.selected.take()
    }

    pub fn peek(&self) -> Option<i64> {
        self.selected
    }
}

/// A dropdown row ready to paint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRow {
    pub index: usize,
    /// Escaped label with the matched runs wrapped in spans.
    pub label_html: String,
    pub meta: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SuggestionController {
    options: SearchOptions,
    state: DropdownState,
    query: String,
    suggestions: Vec<ScoredMatch>,
}

impl SuggestionController {
    pub fn new(options: SearchOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn state(&self) -> DropdownState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DropdownState::Open { .. })
    }

    pub fn selected(&self) -> Option<usize> {
        match self.state {
            DropdownState::Open { selected } => selected,
            DropdownState::Closed => None,
        }
    }

    pub fn suggestions(&self) -> &[ScoredMatch] {
        &self.suggestions
    }

    /// The search box changed. Regenerates suggestions, or closes the
    /// dropdown when the text is too short.
    ///
    /// An open dropdown can be empty ("no suggestions found").
    pub fn input(&mut self, text: &str, corpus: &[Event]) {
        if text.trim().chars().count() < self.options.min_query_chars {
            self.close();
            return;
        }
        self.query = text.trim().to_string();
        self.suggestions = suggest(text, corpus, &self.options);
        self.state = DropdownState::Open { selected: None };
    }

    /// Focus on a box that already holds text reopens the dropdown.
    pub fn focus(&mut self, text: &str, corpus: &[Event]) {
        if text.trim().chars().count() >= self.options.min_query_chars {
            self.input(text, corpus);
        }
    }

    /// Escape, or a click outside the search form.
    pub fn close(&mut self) {
        self.state = DropdownState::Closed;
    }

    pub fn key(&mut self, key: Key, handoff: &mut SelectionHandoff) -> KeyOutcome {
        let DropdownState::Open { selected } = self.state else {
            return KeyOutcome::Ignored;
        };
        let len = self.suggestions.len();

        match key {
            Key::ArrowDown | Key::ArrowUp if len == 0 => KeyOutcome::Handled,
            Key::ArrowDown => {
                let next = selected.map_or(0, |i| (i + 1) % len);
                self.state = DropdownState::Open { selected: Some(next) };
                KeyOutcome::Handled
            }
            Key::ArrowUp => {
                let next = match selected {
                    None | Some(0) => len - 1,
                    Some(i) => i - 1,
                };
                self.state = DropdownState::Open { selected: Some(next) };
                KeyOutcome::Handled
            }
            Key::Enter => match selected {
                Some(index) => self
                    .commit(index, handoff)
                    .map_or(KeyOutcome::Ignored, KeyOutcome::Committed),
                None => KeyOutcome::Ignored,
            },
            Key::Escape => {
                self.close();
                KeyOutcome::Handled
            }
            Key::Other => KeyOutcome::Ignored,
        }
    }

    /// Mouse click on row `index`: commits that row.
    pub fn click(&mut self, index: usize, handoff: &mut SelectionHandoff) -> Option<Commit> {
        if !self.is_open() {
            return None;
        }
        self.commit(index, handoff)
    }

    fn commit(&mut self, index: usize, handoff: &mut SelectionHandoff) -> Option<Commit> {
        let chosen = self.suggestions.get(index)?;
        let commit = match chosen.event.id {
            Some(id) => {
                handoff.store(id);
                Commit::Navigate { id }
            }
            None => Commit::Submit {
                query: chosen.label().to_string(),
            },
        };
        log::debug!("suggestion {} committed: {:?}", index, commit);
        self.close();
        Some(commit)
    }

    /// Rows for the open dropdown; empty when closed.
    pub fn rows(&self) -> Vec<SuggestionRow> {
        if !self.is_open() {
            return Vec::new();
        }
        let selected = self.selected();
        self.suggestions
            .iter()
            .enumerate()
            .map(|(index, m)| SuggestionRow {
                index,
                label_html: highlight_match(m.label(), &self.query),
                meta: m.event.meta_line(),
                highlighted: selected == Some(index),
            })
            .collect()
    }
}
