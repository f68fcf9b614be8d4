// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the ranking structures.
//!
//! Debug-mode assertions over the properties the rest of the crate relies
//! on. They compile to nothing in release builds and fail loudly during
//! development and testing.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Property                                        |
//! |------------------------------|-------------------------------------------------|
//! | `check_ranges_consistent`    | group ranges tile `0..len` in group order       |
//! | `check_ranked_order`         | result groups are non-decreasing                |
//! | `check_cursor_in_bounds`     | a selection cursor points into the result list  |
//!
//! # Usage
//!
//! ```ignore
//! use typeahead::contracts::*;
//!
//! // In debug builds, this panics if the table drifted from the results
//! check_ranges_consistent(index.table(), index.len());
//! ```

use crate::index::GroupRangeTable;

// ============================================================================
// GROUP RANGE CONTRACTS
// ============================================================================

/// Check that a range table describes a result array of length `len`.
///
/// Ranges must be non-empty, start where the previous group ended (the
/// first at 0), and the last must end at `len`.
///
/// # Panics (debug builds only)
/// Panics on the first gap, overlap, empty range, or length mismatch.
#[inline]
pub fn check_ranges_consistent(table: &GroupRangeTable, len: usize) {
    if cfg!(debug_assertions) {
        let mut expected_start = 0;
        for (group, range) in table.iter() {
            debug_assert!(
                range.start == expected_start,
                "Contract violation: group {} starts at {} but previous group ended at {}",
                group,
                range.start,
                expected_start
            );
            debug_assert!(
                range.end > range.start,
                "Contract violation: group {} has empty range {:?}",
                group,
                range
            );
            expected_start = range.end;
        }
        debug_assert!(
            expected_start == len,
            "Contract violation: ranges cover {} slots but results has {} entries",
            expected_start,
            len
        );
        debug_assert!(
            table.covered() == len,
            "Contract violation: covered count {} != results length {}",
            table.covered(),
            len
        );
    }
}

// ============================================================================
// RANKED RESULT CONTRACTS
// ============================================================================

/// Check that a sequence of rank groups is non-decreasing.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_ranked_order(groups: &[usize]) {
    for i in 1..groups.len() {
        debug_assert!(
            groups[i - 1] <= groups[i],
            "Contract violation: result[{}] group {} > result[{}] group {}",
            i - 1,
            groups[i - 1],
            i,
            groups[i]
        );
    }
}

// ============================================================================
// SELECTION CONTRACTS
// ============================================================================

/// Check that a selection cursor, when set, points into the result list.
///
/// # Panics (debug builds only)
/// Panics if `cursor` is `Some(i)` with `i >= len`.
#[inline]
pub fn check_cursor_in_bounds(cursor: Option<usize>, len: usize) {
    if let Some(index) = cursor {
        debug_assert!(
            index < len,
            "Contract violation: cursor {} outside results of length {}",
            index,
            len
        );
    }
}
