// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fairway command-line interface.
//!
//! Three subcommands: `search` runs the full ranker and prints one page of the
//! result table, `suggest` shows what the dropdown would offer for a partial
//! query, and `list` prints the browse view grouped by tier. Every command
//! reads either an assembled events file or a pair of raw identity/detail
//! files.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fairway",
    about = "Search, suggest and browse disc golf tournament records",
    version
)]
pub struct Cli {
    /// JSON file with search options (pageSize, suggestionLimit, ...)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the corpus comes from.
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// JSON array of assembled events
    #[arg(
        short,
        long,
        required_unless_present_all = ["details", "identities"],
        conflicts_with_all = ["details", "identities"]
    )]
    pub events: Option<PathBuf>,

    /// JSON array of raw detail records (one per edition)
    #[arg(long, requires = "identities")]
    pub details: Option<PathBuf>,

    /// JSON array of identity records, joined to details by pdga_event_id
    #[arg(long, requires = "details")]
    pub identities: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank events for a query and print a page of results
    Search {
        /// Search query
        query: String,

        #[command(flatten)]
        corpus: CorpusArgs,

        /// Page to show (clamped to the last page)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Column to sort by; repeat to toggle direction (name, start_date, tier, ...)
        #[arg(short, long)]
        sort: Vec<String>,

        /// Print the page as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show live suggestions for a partial query
    Suggest {
        /// Partial query as typed
        query: String,

        #[command(flatten)]
        corpus: CorpusArgs,

        /// Maximum suggestions (defaults to the configured suggestionLimit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print every event grouped into Majors, Elite Series and other tiers
    List {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Only events played in this year
        #[arg(short, long)]
        year: Option<i32>,

        /// Only events in this country
        #[arg(short, long)]
        country: Option<String>,
    },
}
