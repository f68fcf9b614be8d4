// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: items and the corpus that owns them.
//!
//! The corpus is sorted exactly once, by case-folded description, when it is
//! built. Ranking never reorders it. Because scans walk the corpus front to
//! back, items that land in the same rank group come out in description
//! order without any comparator running.

use crate::error::RankError;
use crate::utils::{fold_case, split_chars};
use serde::{Deserialize, Serialize};

/// A candidate the user can pick.
///
/// `label` is what gets written back into the query field on commit;
/// `description` is what the query is matched against.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Item {
    #[serde(alias = "a")]
    pub label: String,
    #[serde(alias = "d")]
    pub description: String,
    /// Offset of the query in `description`, set only while the item sits in
    /// the current ranked result.
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    match_offset: Option<usize>,
}

/// A description split around the matched query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight<'a> {
    pub before: &'a str,
    pub matched: &'a str,
    pub after: &'a str,
}

impl Item {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
            match_offset: None,
        }
    }

    /// Character offset of the current match, if the item is ranked.
    pub fn match_offset(&self) -> Option<usize> {
        self.match_offset
    }

    /// Split the description around the current match.
    ///
    /// `query_len` is the query length in characters. Returns `None` when the
    /// item carries no match annotation.
    pub fn highlight(&self, query_len: usize) -> Option<Highlight<'_>> {
        let offset = self.match_offset?;
        let (before, matched, after) = split_chars(&self.description, offset, query_len);
        Some(Highlight {
            before,
            matched,
            after,
        })
    }

    pub(crate) fn set_match_offset(&mut self, offset: usize) {
        self.match_offset = Some(offset);
    }

    pub(crate) fn clear_match_offset(&mut self) {
        self.match_offset = None;
    }
}

/// The ordered, immutable-after-construction set of items.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    items: Vec<Item>,
    /// Case-folded descriptions, parallel to `items`.
    folded: Vec<String>,
}

impl Corpus {
    /// Take ownership of `items` and sort them by case-folded description.
    ///
    /// The sort is stable: items with equal folded descriptions keep the
    /// order they were supplied in.
    pub fn new(mut items: Vec<Item>) -> Self {
        items.sort_by_cached_key(|item| fold_case(&item.description));
        let folded = items.iter().map(|item| fold_case(&item.description)).collect();
        Self { items, folded }
    }

    /// Parse a JSON array of `{label, description}` objects.
    ///
    /// The short keys `a` / `d` are accepted as aliases.
    pub fn from_json_str(json: &str) -> Result<Self, RankError> {
        let items: Vec<Item> =
            serde_json::from_str(json).map_err(|e| RankError::invalid("corpus", e.to_string()))?;
        Ok(Self::new(items))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Case-folded description of the item at `index`.
    pub(crate) fn folded_description(&self, index: usize) -> &str {
        &self.folded[index]
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.items.get_mut(index)
    }

    pub(crate) fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }
}

impl From<Vec<Item>> for Corpus {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
