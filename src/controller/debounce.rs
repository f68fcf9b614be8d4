// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Trailing-edge debouncer driven by caller-supplied timestamps.
//!
//! There is no timer thread. The host reports "now" when a trigger arrives
//! and when it polls; a call fires once no new trigger has arrived for the
//! whole wait window. A trigger inside the window pushes the deadline out,
//! so a burst of keystrokes collapses into one call.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// When the pending call becomes due, if one is pending.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Schedule a call `wait` after `now`, replacing any pending one.
    ///
    /// Returns `true` when a pending call was superseded.
    pub fn schedule(&mut self, now: Instant) -> bool {
        self.deadline.replace(now + self.wait).is_some()
    }

    /// Consume the pending call if it is due at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Consume the pending call immediately, due or not.
    pub fn flush(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Drop the pending call. Returns `true` if there was one.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }
}
