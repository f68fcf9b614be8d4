// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for the ranking core.
//!
//! There is exactly one failure mode: a caller handed us something that is
//! not the shape we need. Ranking passes, cursor moves and commits are total
//! over well-formed state, so they never return errors.

use thiserror::Error;

/// Errors raised at construction time or by [`crate::insert`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// An argument is not the container or value shape the operation needs.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

impl RankError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        RankError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
