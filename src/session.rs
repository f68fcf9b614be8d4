// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking passes with a result limit.
//!
//! A pass always ranks every match first and truncates afterwards, so the
//! limit never changes where an item lands, only whether it is kept:
//! ranking with limit `L` yields exactly the first `L` entries of the
//! unbounded ranking.

use crate::options::{ResultLimit, SearchOptions};
use crate::scan::scan;
use crate::types::{Corpus, Item};
use crate::utils::char_len;

/// Rank `corpus` against `query` and keep the best `limit` entries.
///
/// Returns corpus indices, best first. Items cut by the limit lose their
/// match annotation, so only kept items carry an offset afterwards.
pub fn rank(corpus: &mut Corpus, query: &str, limit: ResultLimit) -> Vec<usize> {
    let index = scan(corpus, query);
    let matched = index.len();
    let groups = index.table().group_count();

    let mut results = index.into_results();
    for &dropped in results.iter().skip(limit.get().unwrap_or(usize::MAX)) {
        if let Some(item) = corpus.get_mut(dropped) {
            item.clear_match_offset();
        }
    }
    limit.apply(&mut results);

    tracing::debug!(
        query,
        matched,
        groups,
        kept = results.len(),
        "ranking pass complete"
    );
    results
}

/// Owns the corpus and the most recent ranked result.
#[derive(Debug, Clone)]
pub struct RankingSession {
    corpus: Corpus,
    limit: ResultLimit,
    minimum_trigger_length: usize,
    results: Vec<usize>,
    loading: bool,
    passes: u64,
}

impl RankingSession {
    pub fn new(corpus: Corpus, options: &SearchOptions) -> Self {
        Self {
            corpus,
            limit: options.result_limit,
            minimum_trigger_length: options.minimum_trigger_length,
            results: Vec::new(),
            loading: false,
            passes: 0,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn limit(&self) -> ResultLimit {
        self.limit
    }

    pub fn minimum_trigger_length(&self) -> usize {
        self.minimum_trigger_length
    }

    /// Whether `query` is long enough to start a ranking pass.
    pub fn triggers(&self, query: &str) -> bool {
        char_len(query) >= self.minimum_trigger_length
    }

    /// Flag a pass as in flight before it actually runs (debounced passes).
    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    /// Withdraw the loading flag for a pass that will no longer run.
    pub fn cancel_loading(&mut self) {
        self.loading = false;
    }

    /// Run a ranking pass for `query` and store its results.
    ///
    /// A query below the minimum trigger length clears the results instead.
    pub fn run(&mut self, query: &str) -> &[usize] {
        if !self.triggers(query) {
            self.clear();
            return &self.results;
        }

        self.loading = true;
        self.results = rank(&mut self.corpus, query, self.limit);
        self.passes += 1;
        self.loading = false;
        &self.results
    }

    /// Drop all results and match annotations.
    pub fn clear(&mut self) {
        for &index in &self.results {
            if let Some(item) = self.corpus.get_mut(index) {
                item.clear_match_offset();
            }
        }
        self.results.clear();
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Number of ranking passes executed so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Corpus indices of the current results, best first.
    pub fn results(&self) -> &[usize] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The item at result position `position`.
    pub fn result(&self, position: usize) -> Option<&Item> {
        self.results
            .get(position)
            .and_then(|&index| self.corpus.get(index))
    }

    pub fn result_items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.results
            .iter()
            .filter_map(move |&index| self.corpus.get(index))
    }

    /// Mutable access to the item at result position `position`.
    pub(crate) fn result_mut(&mut self, position: usize) -> Option<&mut Item> {
        let index = *self.results.get(position)?;
        self.corpus.get_mut(index)
    }
}
