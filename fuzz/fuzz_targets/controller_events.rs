// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search controller event sequences.
//!
//! Drives a controller with arbitrary keystrokes, cursor moves, commits and
//! clock ticks. Whatever the sequence, the cursor stays inside the result
//! list, results stay ranked, and only kept results carry a match offset.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::time::{Duration, Instant};
use typeahead::{testing, SearchController, SearchOptions};

#[derive(Arbitrary, Debug)]
enum Event {
    Type(char),
    Backspace,
    Clear,
    Down,
    Up,
    Hover(u8),
    Commit,
    Blur,
    Focus,
    Tick(u8),
    Flush,
}

#[derive(Arbitrary, Debug)]
struct Scenario {
    debounce_ms: Option<u8>,
    limit: Option<u8>,
    min_length: u8,
    events: Vec<Event>,
}

fuzz_target!(|scenario: Scenario| {
    let mut options = SearchOptions::default()
        .with_result_limit(scenario.limit.map(usize::from))
        .with_minimum_trigger_length(usize::from(scenario.min_length % 4));
    options.debounce_wait_ms = scenario.debounce_ms.map(u64::from);
    let mut controller = SearchController::new(testing::abbreviation_corpus(), options);

    let start = Instant::now();
    let mut now = start;
    let mut text = String::new();

    for event in scenario.events.iter().take(256) {
        match *event {
            Event::Type(ch) => {
                text.push(ch);
                controller.on_query_changed_at(text.clone(), now);
            }
            Event::Backspace => {
                text.pop();
                controller.on_query_changed_at(text.clone(), now);
            }
            Event::Clear => {
                text.clear();
                controller.on_query_changed_at(text.clone(), now);
            }
            Event::Down => {
                controller.move_selection_down();
            }
            Event::Up => {
                controller.move_selection_up();
            }
            Event::Hover(row) => {
                controller.set_selection(usize::from(row));
            }
            Event::Commit => {
                if let Some(label) = controller.commit_selection().map(|i| i.label.clone()) {
                    text = label;
                    controller.on_query_changed_at(text.clone(), now);
                }
            }
            Event::Blur => controller.unfocus(),
            Event::Focus => controller.focus(),
            Event::Tick(ms) => {
                now += Duration::from_millis(u64::from(ms));
                controller.poll_at(now);
            }
            Event::Flush => {
                controller.flush();
            }
        }

        // INVARIANT 1: Cursor never points past the result list
        if let Some(index) = controller.selected_index() {
            assert!(index < controller.result_count(), "cursor {} out of bounds", index);
        }

        // INVARIANT 2: Only kept results carry a match offset
        let annotated = controller
            .session()
            .corpus()
            .iter()
            .filter(|item| item.match_offset().is_some())
            .count();
        assert!(annotated <= controller.result_count());
    }

    // INVARIANT 3: After a flush, results are ranked by their offsets.
    // A committed item has had its offset cleared, so it drops out here.
    controller.flush();
    let offsets: Vec<usize> = controller
        .results()
        .filter_map(|item| item.match_offset())
        .collect();
    assert!(offsets.windows(2).all(|w| w[0] <= w[1]), "results not ranked: {:?}", offsets);
});
