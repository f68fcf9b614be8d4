// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Corpus, Item};

/// Create an item from a label and description.
pub fn make_item(label: &str, description: &str) -> Item {
    Item::new(label, description)
}

/// Build a corpus from `(label, description)` pairs.
pub fn make_corpus(pairs: &[(&str, &str)]) -> Corpus {
    Corpus::new(
        pairs
            .iter()
            .map(|(label, description)| make_item(label, description))
            .collect(),
    )
}

/// The three-animal corpus used throughout the docs and tests.
///
/// Sorted order is Cat ("A feline"), Doe ("A female deer"), Dog ("A loyal
/// canine").
pub fn animal_corpus() -> Corpus {
    make_corpus(&[
        ("Dog", "A loyal canine"),
        ("Cat", "A feline"),
        ("Doe", "A female deer"),
    ])
}

/// A corpus of common abbreviations.
pub fn abbreviation_corpus() -> Corpus {
    make_corpus(&[
        ("ASAP", "As soon as possible"),
        ("BRB", "Be right back"),
        ("FYI", "For your information"),
        ("IMO", "In my opinion"),
        ("TBD", "To be determined"),
        ("ETA", "Estimated time of arrival"),
        ("RSVP", "Please respond"),
        ("DIY", "Do it yourself"),
        ("FAQ", "Frequently asked questions"),
        ("AKA", "Also known as"),
    ])
}

/// Labels of a sequence of items, for compact assertions.
pub fn labels_of<'a>(items: impl IntoIterator<Item = &'a Item>) -> Vec<String> {
    items.into_iter().map(|item| item.label.clone()).collect()
}
