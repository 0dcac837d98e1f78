// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors that can reach a caller.
//!
//! Scoring, ranking, sorting and pagination are total: empty strings score
//! zero, bad dates sort first, unknown tiers sort last, out-of-range pages are
//! clamped. What can fail is getting data in (files, JSON) and turning a
//! header key into a column.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Crate error type.
#[derive(Debug)]
pub enum Error {
    /// A corpus or config file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// A corpus or config payload is not valid JSON for the expected shape.
    Json {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
    /// A sort key that names no known column.
    UnknownColumn(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            Error::Json {
                path: Some(path),
                source,
            } => write!(f, "invalid JSON in {}: {}", path.display(), source),
            Error::Json { path: None, source } => write!(f, "invalid JSON payload: {}", source),
            Error::UnknownColumn(key) => write!(f, "unknown sort column '{}'", key),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Json { source, .. } => Some(source),
            Error::UnknownColumn(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { path: None, source }
    }
}
