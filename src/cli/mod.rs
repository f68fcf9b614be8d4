// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the typeahead command-line interface.
//!
//! Three subcommands: `search` ranks a corpus once, `inspect` shows the
//! sorted corpus and the group table a query produces, and `interactive`
//! drives a full search controller from stdin, one line per event.

pub mod display;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use typeahead::{ResultLimit, SearchOptions};

#[derive(Parser)]
#[command(
    name = "typeahead",
    about = "Offset-ranked autocomplete over a JSON corpus",
    version
)]
pub struct Cli {
    /// Log at debug level unless TYPEAHEAD_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a corpus against one query and print the results
    Search {
        /// Path to corpus JSON (array of {label, description})
        corpus: String,

        /// Search query
        query: String,

        #[command(flatten)]
        options: OptionArgs,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the sorted corpus and, for a query, its rank group table
    Inspect {
        /// Path to corpus JSON
        corpus: String,

        /// Query whose group table to show
        query: Option<String>,
    },

    /// Drive a search session from stdin
    ///
    /// Plain lines replace the query text. Commands: `:down`, `:up`,
    /// `:hover N`, `:commit`, `:blur`, `:focus`, `:quit`.
    Interactive {
        /// Path to corpus JSON
        corpus: String,

        #[command(flatten)]
        options: OptionArgs,

        /// Debounce window for ranking passes in milliseconds
        #[arg(long)]
        debounce_ms: Option<u64>,
    },
}

/// Ranking options shared by `search` and `interactive`.
#[derive(Args, Debug, Default)]
pub struct OptionArgs {
    /// Maximum number of results to keep (default: unbounded)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Minimum query length that triggers a search (default: 1)
    #[arg(short = 'm', long)]
    pub min_length: Option<usize>,

    /// JSON options file ({debounceWaitMs, resultLimit, minimumTriggerLength})
    #[arg(long)]
    pub config: Option<String>,
}

impl OptionArgs {
    /// Load the config file, if any, then apply flag overrides.
    pub fn resolve(&self, debounce_ms: Option<u64>) -> Result<SearchOptions> {
        let mut options = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("failed to read options file {}", path))?;
                SearchOptions::from_json_str(&json)
                    .with_context(|| format!("failed to parse options file {}", path))?
            }
            None => SearchOptions::default(),
        };

        if let Some(limit) = self.limit {
            options.result_limit = ResultLimit::Limited(limit);
        }
        if let Some(min_length) = self.min_length {
            options.minimum_trigger_length = min_length;
        }
        if let Some(wait_ms) = debounce_ms {
            options.debounce_wait_ms = Some(wait_ms);
        }
        Ok(options)
    }
}

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Query(String),
    Down,
    Up,
    Hover(usize),
    Commit,
    Blur,
    Focus,
    Quit,
}

impl Input {
    /// Parse a line. Anything not starting with `:` is query text, verbatim.
    pub fn parse(line: &str) -> Result<Self, String> {
        let Some(command) = line.strip_prefix(':') else {
            return Ok(Input::Query(line.to_string()));
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("down" | "d"), None) => Ok(Input::Down),
            (Some("up" | "u"), None) => Ok(Input::Up),
            (Some("hover" | "h"), Some(index)) => index
                .parse()
                .map(Input::Hover)
                .map_err(|_| format!("not a row index: {}", index)),
            (Some("commit" | "c"), None) => Ok(Input::Commit),
            (Some("blur"), None) => Ok(Input::Blur),
            (Some("focus"), None) => Ok(Input::Focus),
            (Some("quit" | "q"), None) => Ok(Input::Quit),
            _ => Err(format!("unknown command: :{}", command)),
        }
    }
}
