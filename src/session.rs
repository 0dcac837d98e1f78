// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One search page's worth of state.
//!
//! [`SearchSession`] owns the corpus and everything derived from it: the
//! active result set, the sort state, the pagination cursor and the
//! suggestion dropdown. The active result set is a list of corpus positions.
//! Every search or sort computes a complete new list first and only then
//! swaps it in and renders, so a renderer never sees a half-updated table.
//!
//! ```
//! use fairway::{Event, ResultPage, SearchSession};
//!
//! let corpus = vec![
//!     Event { name: Some("US Open".into()), ..Event::default() },
//!     Event { name: Some("European Open".into()), ..Event::default() },
//! ];
//! let mut session = SearchSession::new(corpus);
//! let mut rows = 0;
//! session.search("open", &mut |page: &ResultPage<'_>| rows = page.events.len());
//! assert_eq!(rows, 2);
//! ```

use crate::config::SearchOptions;
use crate::controller::{Commit, Key, KeyOutcome, SelectionHandoff, SuggestionController};
use crate::error::Result;
use crate::pagination::{PageInfo, PageSlice, PaginationCursor};
use crate::search::rank;
use crate::sort::sort_positions;
use crate::types::{Event, SortColumn, SortState};
use serde::Serialize;

/// The rows the table shows after a state change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage<'a> {
    pub events: Vec<&'a Event>,
    pub start_index: usize,
    pub end_index: usize,
    /// Blank rows that pad a short page.
    pub filler_rows: usize,
    pub info: PageInfo,
    pub sort: SortState,
}

/// Receives every page the session publishes.
pub trait Renderer {
    fn render(&mut self, page: &ResultPage<'_>);
}

impl<F> Renderer for F
where
    F: FnMut(&ResultPage<'_>),
{
    fn render(&mut self, page: &ResultPage<'_>) {
        self(page)
    }
}

#[derive(Debug)]
pub struct SearchSession {
    corpus: Vec<Event>,
    active: Vec<usize>,
    query: String,
    sort: SortState,
    pagination: PaginationCursor,
    suggestions: SuggestionController,
    handoff: SelectionHandoff,
}

impl SearchSession {
    pub fn new(corpus: Vec<Event>) -> Self {
        Self::with_options(corpus, SearchOptions::default())
    }

    pub fn with_options(corpus: Vec<Event>, options: SearchOptions) -> Self {
        let options = options.normalized();
        Self {
            corpus,
            active: Vec::new(),
            query: String::new(),
            sort: SortState::default(),
            pagination: PaginationCursor::new(options.page_size),
            suggestions: SuggestionController::new(options),
            handoff: SelectionHandoff::default(),
        }
    }

    pub fn corpus(&self) -> &[Event] {
        &self.corpus
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn page_info(&self) -> PageInfo {
        self.pagination.info()
    }

    /// Every active result in table order.
    pub fn results(&self) -> impl ExactSizeIterator<Item = &Event> + '_ {
        self.active.iter().map(|&pos| &self.corpus[pos])
    }

    pub fn result_count(&self) -> usize {
        self.active.len()
    }

    /// The current page without re-rendering.
    pub fn current_page(&self) -> ResultPage<'_> {
        let slice = self.pagination.current_page_data(&self.active);
        self.resolve(slice)
    }

    fn resolve(&self, slice: PageSlice<'_, usize>) -> ResultPage<'_> {
        resolve_page(&self.corpus, slice, self.sort)
    }

    /// Run a full search and show page 1 of the results.
    ///
    /// Resets the sort. A blank query yields an empty result set.
    pub fn search(&mut self, query: &str, renderer: &mut impl Renderer) -> usize {
        let query = query.trim();
        let active = rank(query, &self.corpus);

        self.query = query.to_string();
        self.active = active;
        self.sort.reset();
        log::info!("search {:?}: {} results", query, self.active.len());

        let (corpus, sort) = (&self.corpus, self.sort);
        self.pagination.init(&self.active, |slice| {
            renderer.render(&resolve_page(corpus, slice, sort));
        });
        self.active.len()
    }

    /// Header click: toggle or switch the sort column, then re-sort the
    /// active results and return to page 1.
    pub fn sort_by(&mut self, column: SortColumn, renderer: &mut impl Renderer) {
        let mut sort = self.sort;
        sort.toggle(column);
        let active = sort_positions(&self.active, &self.corpus, &sort);

        self.sort = sort;
        self.active = active;
        log::debug!("sorted by {} {:?}", column, sort.direction);

        let corpus = &self.corpus;
        self.pagination.init(&self.active, |slice| {
            renderer.render(&resolve_page(corpus, slice, sort));
        });
    }

    /// [`sort_by`](Self::sort_by) with a header key such as `"start_date"`.
    pub fn sort_by_key(&mut self, key: &str, renderer: &mut impl Renderer) -> Result<()> {
        let column: SortColumn = key.parse()?;
        self.sort_by(column, renderer);
        Ok(())
    }

    pub fn set_page(&mut self, page: usize, renderer: &mut impl Renderer) -> usize {
        let (corpus, sort) = (&self.corpus, self.sort);
        self.pagination.set_page(page, &self.active, |slice| {
            renderer.render(&resolve_page(corpus, slice, sort));
        })
    }

    pub fn next_page(&mut self, renderer: &mut impl Renderer) -> usize {
        self.set_page(self.pagination.current_page() + 1, renderer)
    }

    pub fn prev_page(&mut self, renderer: &mut impl Renderer) -> usize {
        self.set_page(self.pagination.current_page().saturating_sub(1), renderer)
    }

    // -------------------------------------------------------------------------
    // Suggestions
    // -------------------------------------------------------------------------

    pub fn suggestions(&self) -> &SuggestionController {
        &self.suggestions
    }

    pub fn input(&mut self, text: &str) {
        self.suggestions.input(text, &self.corpus);
    }

    pub fn focus(&mut self, text: &str) {
        self.suggestions.focus(text, &self.corpus);
    }

    pub fn blur(&mut self) {
        self.suggestions.close();
    }

    pub fn key_down(&mut self, key: Key) -> KeyOutcome {
        self.suggestions.key(key, &mut self.handoff)
    }

    pub fn click(&mut self, index: usize) -> Option<Commit> {
        self.suggestions.click(index, &mut self.handoff)
    }

    /// Read and clear the id a committed suggestion left behind.
    pub fn take_selection(&mut self) -> Option<i64> {
        self.handoff.take()
    }
}

fn resolve_page<'a>(corpus: &'a [Event], slice: PageSlice<'_, usize>, sort: SortState) -> ResultPage<'a> {
    ResultPage {
        events: slice.items.iter().map(|&pos| &corpus[pos]).collect(),
        start_index: slice.start_index,
        end_index: slice.end_index,
        filler_rows: slice.filler_rows(),
        info: slice.info,
        sort,
    }
}
