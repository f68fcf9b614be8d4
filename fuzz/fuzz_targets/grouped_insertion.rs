// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for grouped insertion invariants.
//!
//! Whatever order groups arrive in, the result array must come out sorted by
//! group, stable within a group, and tiled exactly by the range table.

#![no_main]

use libfuzzer_sys::fuzz_target;
use typeahead::GroupedIndex;

fuzz_target!(|groups: Vec<u8>| {
    // Cap input length to avoid timeout
    let groups = &groups[..groups.len().min(512)];

    let mut index = GroupedIndex::with_capacity(groups.len());
    for (arrival, &group) in groups.iter().enumerate() {
        index.insert((group as usize, arrival), group as usize);
    }

    // INVARIANT 1: Same result as a stable sort on group
    let mut expected: Vec<(usize, usize)> = groups
        .iter()
        .enumerate()
        .map(|(arrival, &g)| (g as usize, arrival))
        .collect();
    expected.sort_by_key(|&(g, _)| g);
    assert_eq!(index.results(), expected.as_slice(), "order diverged from stable sort");

    // INVARIANT 2: Ranges tile 0..len in group order, one per distinct group
    let mut cursor = 0;
    let mut last_group = None;
    for (group, range) in index.table().iter() {
        assert_eq!(range.start, cursor, "gap or overlap before group {}", group);
        assert!(range.end > range.start, "empty range for group {}", group);
        assert!(last_group < Some(group), "groups out of order at {}", group);
        for &(member_group, _) in &index.results()[range.clone()] {
            assert_eq!(member_group, group, "foreign member in group {}", group);
        }
        cursor = range.end;
        last_group = Some(group);
    }
    assert_eq!(cursor, index.len(), "table does not cover all results");
    assert_eq!(index.table().covered(), index.len());
});
