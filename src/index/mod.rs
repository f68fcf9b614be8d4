// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranked result storage.
//!
//! Results are bucketed by an integer rank group and kept sorted by group at
//! all times. New entries are placed by range bookkeeping alone; nothing here
//! ever compares two entries.

mod grouped;

pub use grouped::{insert, GroupRangeTable, GroupedIndex};
