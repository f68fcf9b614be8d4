// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cyclic selection cursor over a result list.

use crate::contracts::check_cursor_in_bounds;

/// Index of the highlighted result, or nothing highlighted.
///
/// Moving down from "nothing" lands on the first result; moving up from
/// "nothing" lands on the last. Both directions wrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionCursor(Option<usize>);

impl SelectionCursor {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn index(self) -> Option<usize> {
        self.0
    }

    pub fn is_none(self) -> bool {
        self.0.is_none()
    }

    pub fn reset(&mut self) {
        self.0 = None;
    }

    /// Step forward through `len` results, wrapping to the first.
    ///
    /// No-op on an empty list.
    pub fn move_down(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return self.0;
        }
        // INVARIANT: CURSOR_IN_BOUNDS
        let next = match self.0 {
            None => 0,
            Some(index) => (index + 1) % len,
        };
        self.0 = Some(next);
        check_cursor_in_bounds(self.0, len);
        self.0
    }

    /// Step backward through `len` results, wrapping to the last.
    ///
    /// No-op on an empty list.
    pub fn move_up(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return self.0;
        }
        let current = self.0.unwrap_or(0) % len;
        self.0 = Some((current + len - 1) % len);
        check_cursor_in_bounds(self.0, len);
        self.0
    }

    /// Point directly at `index`. Ignored (returns false) when out of range.
    pub fn set(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        self.0 = Some(index);
        true
    }
}
