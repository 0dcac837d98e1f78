//! WebAssembly bindings for the search page.
//!
//! `EventSearch` wraps a [`SearchSession`] for the browser. The page hands in
//! the corpus once, plus a render callback; every search, sort or page change
//! then calls that callback with the new page (see [`ResultPage`] for the
//! shape, serialized with camelCase keys).
//!
//! ```js
//! const search = new EventSearch(events, { pageSize: 10 }, page => paint(page));
//! search.search("open");
//! search.sortBy("start_date");
//! search.nextPage();
//! ```

use crate::config::SearchOptions;
use crate::controller::{Commit, Key, KeyOutcome};
use crate::corpus::assemble;
use crate::listing::{available_countries, available_years};
use crate::session::{Renderer, ResultPage, SearchSession};
use crate::tiers::classify_event;
use crate::types::{Event, EventDetail, EventIdentity};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Forwards pages to a JS function, remembering the first failure.
struct JsRenderer<'f> {
    callback: &'f js_sys::Function,
    error: Option<JsValue>,
}

impl<'f> JsRenderer<'f> {
    fn new(callback: &'f js_sys::Function) -> Self {
        Self {
            callback,
            error: None,
        }
    }

    fn finish(self) -> Result<(), JsValue> {
        self.error.map_or(Ok(()), Err)
    }
}

impl Renderer for JsRenderer<'_> {
    fn render(&mut self, page: &ResultPage<'_>) {
        if self.error.is_some() {
            return;
        }
        let result = to_value(page)
            .map_err(|e| JsValue::from(e.to_string()))
            .and_then(|value| self.callback.call1(&JsValue::NULL, &value));
        if let Err(e) = result {
            self.error = Some(e);
        }
    }
}

/// Key-press result for TypeScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct KeyDownOutput {
    /// Call `preventDefault()` on the keyboard event.
    prevent_default: bool,
    commit: Option<Commit>,
}

/// Year and country dropdown values.
#[derive(Serialize)]
struct FilterOptions<'a> {
    years: Vec<i32>,
    countries: Vec<&'a str>,
}

fn parse_options(options: Option<JsValue>) -> Result<SearchOptions, JsValue> {
    match options {
        Some(value) if !value.is_undefined() && !value.is_null() => {
            let options: SearchOptions = from_value(value).map_err(|e| e.to_string())?;
            Ok(options.normalized())
        }
        _ => Ok(SearchOptions::default()),
    }
}

#[wasm_bindgen]
pub struct EventSearch {
    session: SearchSession,
    render: js_sys::Function,
}

#[wasm_bindgen]
impl EventSearch {
    /// Create a search page over already-assembled events.
    #[wasm_bindgen(constructor)]
    pub fn new(
        events: JsValue,
        options: Option<JsValue>,
        render: js_sys::Function,
    ) -> Result<EventSearch, JsValue> {
        let mut events: Vec<Event> = from_value(events).map_err(|e| e.to_string())?;
        for event in &mut events {
            classify_event(event);
        }
        let options = parse_options(options)?;
        Ok(EventSearch {
            session: SearchSession::with_options(events, options),
            render,
        })
    }

    /// Create a search page from raw identity and detail records.
    #[wasm_bindgen(js_name = fromRecords)]
    pub fn from_records(
        identities: JsValue,
        details: JsValue,
        options: Option<JsValue>,
        render: js_sys::Function,
    ) -> Result<EventSearch, JsValue> {
        let identities: Vec<EventIdentity> = from_value(identities).map_err(|e| e.to_string())?;
        let details: Vec<EventDetail> = from_value(details).map_err(|e| e.to_string())?;
        let options = parse_options(options)?;
        Ok(EventSearch {
            session: SearchSession::with_options(assemble(&identities, details), options),
            render,
        })
    }

    /// Number of events in the corpus.
    #[wasm_bindgen(js_name = eventCount)]
    pub fn event_count(&self) -> usize {
        self.session.corpus().len()
    }

    /// `{years, countries}` for the listing filter dropdowns, years newest
    /// first and countries alphabetical.
    #[wasm_bindgen(js_name = filterOptions)]
    pub fn filter_options(&self) -> Result<JsValue, JsValue> {
        let corpus = self.session.corpus();
        let options = FilterOptions {
            years: available_years(corpus),
            countries: available_countries(corpus),
        };
        to_value(&options).map_err(|e| e.to_string().into())
    }

    /// Run a full search; returns the result count.
    #[wasm_bindgen]
    pub fn search(&mut self, query: &str) -> Result<usize, JsValue> {
        let mut renderer = JsRenderer::new(&self.render);
        let count = self.session.search(query, &mut renderer);
        renderer.finish()?;
        Ok(count)
    }

    /// Header click on `key` ("name", "start_date", "tier", ...).
    #[wasm_bindgen(js_name = sortBy)]
    pub fn sort_by(&mut self, key: &str) -> Result<(), JsValue> {
        let mut renderer = JsRenderer::new(&self.render);
        self.session
            .sort_by_key(key, &mut renderer)
            .map_err(|e| JsValue::from(e.to_string()))?;
        renderer.finish()
    }

    #[wasm_bindgen(js_name = setPage)]
    pub fn set_page(&mut self, page: usize) -> Result<usize, JsValue> {
        let mut renderer = JsRenderer::new(&self.render);
        let page = self.session.set_page(page, &mut renderer);
        renderer.finish()?;
        Ok(page)
    }

    #[wasm_bindgen(js_name = nextPage)]
    pub fn next_page(&mut self) -> Result<usize, JsValue> {
        let mut renderer = JsRenderer::new(&self.render);
        let page = self.session.next_page(&mut renderer);
        renderer.finish()?;
        Ok(page)
    }

    #[wasm_bindgen(js_name = prevPage)]
    pub fn prev_page(&mut self) -> Result<usize, JsValue> {
        let mut renderer = JsRenderer::new(&self.render);
        let page = self.session.prev_page(&mut renderer);
        renderer.finish()?;
        Ok(page)
    }

    /// `{currentPage, pageSize, totalItems, totalPages}`
    #[wasm_bindgen(js_name = pageInfo)]
    pub fn page_info(&self) -> Result<JsValue, JsValue> {
        to_value(&self.session.page_info()).map_err(|e| e.to_string().into())
    }

    /// The search box changed; returns the dropdown rows (empty when closed).
    #[wasm_bindgen]
    pub fn input(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.session.input(text);
        self.rows()
    }

    #[wasm_bindgen]
    pub fn focus(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.session.focus(text);
        self.rows()
    }

    /// `KeyboardEvent.key` on the search box.
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: &str) -> Result<JsValue, JsValue> {
        let key: Key = key.parse().unwrap_or(Key::Other);
        let output = match self.session.key_down(key) {
            KeyOutcome::Ignored => KeyDownOutput {
                prevent_default: false,
                commit: None,
            },
            KeyOutcome::Handled => KeyDownOutput {
                prevent_default: true,
                commit: None,
            },
            KeyOutcome::Committed(commit) => KeyDownOutput {
                prevent_default: true,
                commit: Some(commit),
            },
        };
        to_value(&output).map_err(|e| e.to_string().into())
    }

    /// Click on dropdown row `index`; returns the commit or `null`.
    #[wasm_bindgen]
    pub fn click(&mut self, index: usize) -> Result<JsValue, JsValue> {
        match self.session.click(index) {
            Some(commit) => to_value(&commit).map_err(|e| e.to_string().into()),
            None => Ok(JsValue::NULL),
        }
    }

    /// Click outside the search form, or Escape handled elsewhere.
    #[wasm_bindgen]
    pub fn blur(&mut self) {
        self.session.blur();
    }

    /// Current dropdown rows.
    #[wasm_bindgen]
    pub fn rows(&self) -> Result<JsValue, JsValue> {
        to_value(&self.session.suggestions().rows()).map_err(|e| e.to_string().into())
    }

    /// Event id left by the last committed suggestion, cleared on read.
    #[wasm_bindgen(js_name = takeSelection)]
    pub fn take_selection(&mut self) -> Option<f64> {
        self.session.take_selection().map(|id| id as f64)
    }
}
