// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Construction options for a search session.
//!
//! Options can be built in code or read from JSON:
//!
//! ```json
//! { "debounceWaitMs": 150, "resultLimit": 10, "minimumTriggerLength": 2 }
//! ```
//!
//! `resultLimit` takes either a count or the string `"unbounded"`. Every key
//! is optional; anything else in the object is rejected.

use crate::error::RankError;
use serde::Deserialize;
use std::time::Duration;

/// How many ranked results a pass keeps.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(try_from = "ResultLimitValue")]
pub enum ResultLimit {
    #[default]
    Unbounded,
    /// Keep at most this many results (0 keeps none).
    Limited(usize),
}

impl ResultLimit {
    pub fn get(self) -> Option<usize> {
        match self {
            ResultLimit::Unbounded => None,
            ResultLimit::Limited(limit) => Some(limit),
        }
    }

    /// Truncate `results` to the limit, keeping the best-ranked prefix.
    pub fn apply<T>(self, results: &mut Vec<T>) {
        if let ResultLimit::Limited(limit) = self {
            results.truncate(limit);
        }
    }
}

impl From<Option<usize>> for ResultLimit {
    fn from(limit: Option<usize>) -> Self {
        limit.map_or(ResultLimit::Unbounded, ResultLimit::Limited)
    }
}

/// Wire form of `resultLimit` before validation.
#[derive(Deserialize)]
#[serde(untagged)]
enum ResultLimitValue {
    Count(usize),
    Keyword(String),
}

impl TryFrom<ResultLimitValue> for ResultLimit {
    type Error = String;

    fn try_from(value: ResultLimitValue) -> Result<Self, Self::Error> {
        match value {
            ResultLimitValue::Count(limit) => Ok(ResultLimit::Limited(limit)),
            ResultLimitValue::Keyword(word) if word.eq_ignore_ascii_case("unbounded") => {
                Ok(ResultLimit::Unbounded)
            }
            ResultLimitValue::Keyword(word) => Err(format!(
                "expected a non-negative count or \"unbounded\", got \"{}\"",
                word
            )),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct SearchOptions {
    /// Quiescence window for ranking passes; `None` or 0 ranks synchronously.
    pub debounce_wait_ms: Option<u64>,
    pub result_limit: ResultLimit,
    /// Queries shorter than this (in characters) clear the results.
    pub minimum_trigger_length: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            debounce_wait_ms: None,
            result_limit: ResultLimit::Unbounded,
            minimum_trigger_length: 1,
        }
    }
}

impl SearchOptions {
    pub fn from_json_str(json: &str) -> Result<Self, RankError> {
        serde_json::from_str(json).map_err(|e| RankError::invalid("options", e.to_string()))
    }

    pub fn with_debounce_ms(mut self, wait_ms: u64) -> Self {
        self.debounce_wait_ms = Some(wait_ms);
        self
    }

    pub fn with_result_limit(mut self, limit: impl Into<ResultLimit>) -> Self {
        self.result_limit = limit.into();
        self
    }

    pub fn with_minimum_trigger_length(mut self, length: usize) -> Self {
        self.minimum_trigger_length = length;
        self
    }

    /// The debounce window, if debouncing is enabled.
    pub fn debounce_wait(&self) -> Option<Duration> {
        self.debounce_wait_ms
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
    }
}
