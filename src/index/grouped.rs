// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Counting-sort style insertion into a grouped result array.
//!
//! Rank groups are small non-negative integers (a match offset is bounded by
//! the length of the text it was found in), so instead of comparing a new
//! entry against its neighbours we track where each group's slice of the
//! array begins and ends. Inserting into group `g`:
//!
//! ```text
//! groups:   0      2         5
//! results: [a b c][d e][f g h i]      insert x into group 2
//!           0..3   3..5  5..9
//!
//! results: [a b c][d e x][f g h i]
//!           0..3   3..6    6..10      (group 5 shifted by one)
//! ```
//!
//! 1. every group above `g` shifts right by one,
//! 2. an existing group `g` grows by one at its end,
//! 3. a new group `g` starts where the nearest lower group ends (or at 0),
//! 4. the entry goes in at the last slot of group `g`.
//!
//! The new entry is always the last member of its group, so entries inserted
//! in scan order stay in scan order within a group.
//!
//! **Invariant**: ranges are non-empty, disjoint, ordered by group, and tile
//! `0..results.len()` exactly.
//!
//! **Verified by**:
//! - `prop_insert_keeps_groups_sorted` (tests/property/insertion.rs)
//! - `fuzz_targets/grouped_insertion.rs`

use crate::contracts::check_ranges_consistent;
use crate::error::RankError;
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};
use std::ops::Range;

/// Map from rank group to the half-open slice of the result array it owns.
///
/// Sparse: only populated groups have entries. The `BTreeMap` gives ordered
/// iteration for the shift step and O(log g) lookup of the nearest lower
/// populated group when a new group is opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupRangeTable {
    ranges: BTreeMap<usize, Range<usize>>,
    /// Sum of all range lengths, i.e. the result length this table describes.
    covered: usize,
}

impl GroupRangeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Range owned by `group`, if any entry is in it.
    pub fn get(&self, group: usize) -> Option<Range<usize>> {
        self.ranges.get(&group).cloned()
    }

    /// Populated groups in ascending order with their ranges.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Range<usize>)> + '_ {
        self.ranges.iter().map(|(&group, range)| (group, range.clone()))
    }

    /// Number of populated groups.
    pub fn group_count(&self) -> usize {
        self.ranges.len()
    }

    /// Total number of result slots described by the table.
    pub fn covered(&self) -> usize {
        self.covered
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Group that owns result slot `position`.
    pub fn group_at(&self, position: usize) -> Option<usize> {
        self.ranges
            .iter()
            .find(|(_, range)| range.contains(&position))
            .map(|(&group, _)| group)
    }

    /// Full structural check against a result array of length `len`.
    pub fn is_consistent_with(&self, len: usize) -> bool {
        let mut expected_start = 0;
        for range in self.ranges.values() {
            if range.start != expected_start || range.end <= range.start {
                return false;
            }
            expected_start = range.end;
        }
        expected_start == len && self.covered == len
    }

    /// Open one slot for `group` and return its index in the result array.
    fn reserve(&mut self, group: usize) -> usize {
        // INVARIANT: GROUP_RANGES_TILE
        // Every group above `group` moves right by exactly one slot, so the
        // ranges stay contiguous and keep their relative order.
        for range in self.ranges.range_mut((Excluded(group), Unbounded)).map(|(_, r)| r) {
            range.start += 1;
            range.end += 1;
        }

        let end = match self.ranges.get_mut(&group) {
            Some(range) => {
                range.end += 1;
                range.end
            }
            None => {
                let start = self
                    .ranges
                    .range(..group)
                    .next_back()
                    .map_or(0, |(_, lower)| lower.end);
                self.ranges.insert(group, start..start + 1);
                start + 1
            }
        };

        self.covered += 1;
        end - 1
    }
}

/// Insert `item` into `results` at the last slot of `group`.
///
/// Returns the index the item was written to. Fails with
/// [`RankError::InvalidArgument`] when `table` does not describe `results`
/// (its ranges cover a different number of slots), since inserting into a
/// mismatched pair would silently corrupt both.
pub fn insert<T>(
    results: &mut Vec<T>,
    table: &mut GroupRangeTable,
    item: T,
    group: usize,
) -> Result<usize, RankError> {
    if table.covered() != results.len() {
        return Err(RankError::invalid(
            "range_table",
            format!(
                "table covers {} slots but results has {} entries",
                table.covered(),
                results.len()
            ),
        ));
    }

    let position = table.reserve(group);
    results.insert(position, item);
    check_ranges_consistent(table, results.len());
    Ok(position)
}

/// A result array and its range table, kept consistent by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedIndex<T> {
    results: Vec<T>,
    table: GroupRangeTable,
}

impl<T> Default for GroupedIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GroupedIndex<T> {
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
            table: GroupRangeTable::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            results: Vec::with_capacity(capacity),
            table: GroupRangeTable::new(),
        }
    }

    /// Insert `item` as the last member of `group`; returns its position.
    pub fn insert(&mut self, item: T, group: usize) -> usize {
        let position = self.table.reserve(group);
        self.results.insert(position, item);
        check_ranges_consistent(&self.table, self.results.len());
        position
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn results(&self) -> &[T] {
        &self.results
    }

    pub fn table(&self) -> &GroupRangeTable {
        &self.table
    }

    /// Entries belonging to `group`, in insertion order.
    pub fn group(&self, group: usize) -> &[T] {
        self.table
            .get(group)
            .map_or(&[][..], |range| &self.results[range])
    }

    pub fn into_results(self) -> Vec<T> {
        self.results
    }

    pub fn into_parts(self) -> (Vec<T>, GroupRangeTable) {
        (self.results, self.table)
    }
}
