// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunables for the search surfaces.
//!
//! Every field has a default, so an empty object (or no config at all) gives
//! the stock behavior: ten rows per page, eight suggestions, suggestions from
//! the second typed character, and a suggestion score floor of 10.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;
pub const DEFAULT_SUGGESTION_THRESHOLD: f64 = 10.0;

/// Search options, deserialized from JSON with camelCase keys.
///
/// ```json
/// { "pageSize": 25, "suggestionLimit": 5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Rows per result page (default: 10). Zero falls back to the default.
    pub page_size: usize,
    /// Maximum live suggestions (default: 8)
    pub suggestion_limit: usize,
    /// Trimmed characters needed before suggesting (default: 2)
    pub min_query_chars: usize,
    /// Suggestions must score strictly above this (default: 10.0)
    pub suggestion_threshold: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            suggestion_threshold: DEFAULT_SUGGESTION_THRESHOLD,
        }
    }
}

impl SearchOptions {
    /// Parse options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: SearchOptions = serde_json::from_str(json)?;
        Ok(options.normalized())
    }

    /// Read options from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let options: SearchOptions = serde_json::from_str(&json).map_err(|source| Error::Json {
            path: Some(path.to_path_buf()),
            source,
        })?;
        log::info!("Loaded search options from {}", path.display());
        Ok(options.normalized())
    }

    /// Replace values that would break paging or ranking with defaults.
    pub fn normalized(mut self) -> Self {
        if self.page_size == 0 {
            log::warn!("pageSize 0 is invalid, using {}", DEFAULT_PAGE_SIZE);
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        if !self.suggestion_threshold.is_finite() {
            self.suggestion_threshold = DEFAULT_SUGGESTION_THRESHOLD;
        }
        self
    }
}
