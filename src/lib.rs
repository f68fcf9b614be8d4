// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Incremental offset-ranked autocomplete.
//!
//! Ranks a fixed corpus of `{label, description}` items against a query that
//! changes one keystroke at a time. An item matches when its description
//! contains the query (case-insensitively); its rank is the character offset
//! of that first occurrence, smaller first. Ties keep corpus order, and the
//! corpus is sorted by description once up front, so ties come out
//! alphabetically without ever running a comparator.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌────────────────┐
//! │   index     │────▶│    scan      │────▶│   session    │────▶│  controller    │
//! │ (GroupRange │     │ (match_offset│     │ (rank, limit,│     │ (debounce,     │
//! │  Table,     │     │  scan)       │     │  loading)    │     │  cursor,       │
//! │  insert)    │     │              │     │              │     │  commit)       │
//! └─────────────┘     └──────────────┘     └──────────────┘     └────────────────┘
//!        │                   │                    │                     │
//!        ▼                   ▼                    ▼                     ▼
//! ┌────────────────────────────────────────────────────────────────────────────┐
//! │                               contracts.rs                                 │
//! │        (range tiling, non-decreasing groups, cursor bounds)                │
//! └────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use typeahead::{Corpus, Item, SearchController, SearchOptions};
//!
//! let corpus = Corpus::new(vec![
//!     Item::new("Dog", "A loyal canine"),
//!     Item::new("Cat", "A feline"),
//!     Item::new("Doe", "A female deer"),
//! ]);
//! let mut controller = SearchController::new(corpus, SearchOptions::default());
//!
//! controller.on_query_changed("A ");
//! let labels: Vec<&str> = controller.results().map(|i| i.label.as_str()).collect();
//! assert_eq!(labels, ["Cat", "Doe", "Dog"]);
//!
//! controller.move_selection_down();
//! assert_eq!(controller.commit_selection().map(|i| i.label.as_str()), Some("Cat"));
//! assert_eq!(controller.query_text(), "Cat");
//! ```

// Module declarations
pub mod contracts;
mod controller;
mod error;
mod index;
mod options;
mod scan;
mod session;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use controller::{
    Debouncer, QueryHandler, SearchController, SearchControllerBuilder, SearchState,
    SelectedHandler, SelectionCursor,
};
pub use error::RankError;
pub use index::{insert, GroupRangeTable, GroupedIndex};
pub use options::{ResultLimit, SearchOptions};
pub use scan::{match_offset, scan};
pub use session::{rank, RankingSession};
pub use types::{Corpus, Highlight, Item};
pub use utils::{char_len, fold_case};
