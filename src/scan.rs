// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One ranking pass over the corpus.
//!
//! Every item is visited once, in corpus order. An item whose description
//! contains the query (case-insensitively) goes into the rank group equal to
//! the character offset of the first occurrence; everything else is dropped.
//! There is no "no match" group.

use crate::contracts::check_ranked_order;
use crate::index::GroupedIndex;
use crate::types::Corpus;
use crate::utils::{char_offset_of, fold_case};

/// Offset of `query` in `description`, compared case-insensitively.
///
/// Returns `None` when the description does not contain the query.
pub fn match_offset(description: &str, query: &str) -> Option<usize> {
    char_offset_of(&fold_case(description), &fold_case(query))
}

/// Rank every item of `corpus` against `query`.
///
/// Returns corpus indices grouped by match offset. Match annotations left by
/// a previous pass are cleared first, so after the call exactly the matched
/// items carry an offset.
///
/// Minimum-length gating is the caller's job; an empty query matches every
/// item at offset 0.
pub fn scan(corpus: &mut Corpus, query: &str) -> GroupedIndex<usize> {
    let folded_query = fold_case(query);
    let mut index = GroupedIndex::new();

    for item in corpus.items_mut() {
        item.clear_match_offset();
    }

    for position in 0..corpus.len() {
        let Some(offset) = char_offset_of(corpus.folded_description(position), &folded_query)
        else {
            continue;
        };
        if let Some(item) = corpus.get_mut(position) {
            item.set_match_offset(offset);
        }
        index.insert(position, offset);
    }

    // INVARIANT: RESULTS_NON_DECREASING
    if cfg!(debug_assertions) {
        let groups: Vec<usize> = index
            .results()
            .iter()
            .filter_map(|&i| corpus.get(i).and_then(|item| item.match_offset()))
            .collect();
        check_ranked_order(&groups);
    }

    index
}
