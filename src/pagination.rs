// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-size paging over an ordered list.
//!
//! The cursor never looks at what it pages: it only knows how many items
//! there are and how many fit on a page. Whoever owns the list hands it in
//! when a page is needed, and the cursor hands the window to a render callback
//! after every state change.
//!
//! **Invariant**: `1 ≤ current_page ≤ max(1, total_pages)` after every
//! operation. With zero items there are zero pages and the cursor rests on
//! page 1 with an empty window.

use crate::config::DEFAULT_PAGE_SIZE;
use crate::contracts::check_page_in_range;
use serde::Serialize;
use std::ops::Range;

/// Snapshot of the cursor, shaped for the "page X of Y" line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// The visible window of a list: `items = data[start_index..end_index]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSlice<'a, T> {
    pub items: &'a [T],
    pub start_index: usize,
    pub end_index: usize,
    pub info: PageInfo,
}

impl<T> PageSlice<'_, T> {
    /// Empty rows needed to pad this page to a full table.
    pub fn filler_rows(&self) -> usize {
        self.info.page_size.saturating_sub(self.items.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationCursor {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PaginationCursor {
    /// A cursor over nothing, on page 1. A zero page size becomes the default.
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
            total_items: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// `ceil(total_items / page_size)`; zero for an empty list.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    pub fn info(&self) -> PageInfo {
        PageInfo {
            current_page: self.current_page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages(),
        }
    }

    /// Index range of the current page, clipped to the list length.
    pub fn page_range(&self) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(self.total_items);
        let end = (self.current_page * self.page_size).min(self.total_items);
        start..end
    }

    /// The current window of `data`.
    ///
    /// `data` must be the list this cursor was last initialised with; a
    /// shorter slice is clipped rather than indexed out of bounds.
    pub fn current_page_data<'a, T>(&self, data: &'a [T]) -> PageSlice<'a, T> {
        let range = self.page_range();
        let start = range.start.min(data.len());
        let end = range.end.min(data.len());
        PageSlice {
            items: &data[start..end],
            start_index: start,
            end_index: end,
            info: self.info(),
        }
    }

    /// Adopt a new list: count it, return to page 1 and render.
    pub fn init<T>(&mut self, data: &[T], render: impl FnOnce(PageSlice<'_, T>)) {
        self.total_items = data.len();
        self.current_page = 1;
        check_page_in_range(self.current_page, self.total_pages());
        render(self.current_page_data(data));
    }

    /// Move to page `n`, clamped into `[1, max(1, total_pages)]`, and render.
    ///
    /// Returns the page actually selected.
    pub fn set_page<T>(
        &mut self,
        n: usize,
        data: &[T],
        render: impl FnOnce(PageSlice<'_, T>),
    ) -> usize {
        self.current_page = self.clamp(n);
        check_page_in_range(self.current_page, self.total_pages());
        render(self.current_page_data(data));
        self.current_page
    }

    /// Step forward one page (stays put on the last page).
    pub fn next_page<T>(&mut self, data: &[T], render: impl FnOnce(PageSlice<'_, T>)) -> usize {
        self.set_page(self.current_page + 1, data, render)
    }

    /// Step back one page (stays put on page 1).
    pub fn prev_page<T>(&mut self, data: &[T], render: impl FnOnce(PageSlice<'_, T>)) -> usize {
        self.set_page(self.current_page.saturating_sub(1), data, render)
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    fn clamp(&self, n: usize) -> usize {
        n.clamp(1, self.total_pages().max(1))
    }
}
