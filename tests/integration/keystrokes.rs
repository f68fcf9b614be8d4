//! Keystroke-by-keystroke sessions, with and without debouncing.

use crate::common::{abbreviation_corpus, result_labels};
use std::time::{Duration, Instant};
use typeahead::{SearchController, SearchOptions};

const KEY_GAP: Duration = Duration::from_millis(30);

fn type_out(controller: &mut SearchController, text: &str, start: Instant) -> Instant {
    let mut now = start;
    let mut typed = String::new();
    for c in text.chars() {
        typed.push(c);
        controller.on_query_changed_at(typed.clone(), now);
        controller.poll_at(now);
        now += KEY_GAP;
    }
    now
}

#[test]
fn test_every_keystroke_ranks_without_debounce() {
    let mut controller = SearchController::new(abbreviation_corpus(), SearchOptions::default());
    type_out(&mut controller, "kno", Instant::now());

    assert_eq!(controller.session().passes(), 3);
    assert_eq!(result_labels(&controller), vec!["AKA"]);
}

#[test]
fn test_debounce_runs_one_pass_per_burst() {
    let opts = SearchOptions::default().with_debounce_ms(100);
    let mut controller = SearchController::new(abbreviation_corpus(), opts);

    let end = type_out(&mut controller, "be ", Instant::now());
    assert_eq!(controller.session().passes(), 0);
    assert!(controller.is_loading());

    assert!(controller.poll_at(end + Duration::from_millis(100)));
    assert_eq!(controller.session().passes(), 1);
    // "Be right back" @0, "To be determined" @3
    assert_eq!(result_labels(&controller), vec!["BRB", "TBD"]);
    assert!(!controller.is_loading());
}

#[test]
fn test_debounced_pass_sees_latest_query() {
    let opts = SearchOptions::default().with_debounce_ms(50);
    let mut controller = SearchController::new(abbreviation_corpus(), opts);
    let t0 = Instant::now();

    controller.on_query_changed_at("in", t0);
    assert!(controller.poll_at(t0 + Duration::from_millis(60)));
    // "In my opinion" @0, "For your information" @9, "To be determined" @12
    assert_eq!(result_labels(&controller), vec!["IMO", "FYI", "TBD"]);

    controller.on_query_changed_at("inf", t0 + Duration::from_millis(70));
    controller.on_query_changed_at("info", t0 + Duration::from_millis(80));
    assert_eq!(
        controller.pending_deadline(),
        Some(t0 + Duration::from_millis(130))
    );
    assert!(controller.poll_at(t0 + Duration::from_millis(130)));
    assert_eq!(result_labels(&controller), vec!["FYI"]);
    assert_eq!(controller.session().passes(), 2);
}

#[test]
fn test_select_commit_and_resume_typing() {
    let mut controller = SearchController::new(abbreviation_corpus(), SearchOptions::default());
    controller.on_query_changed("as");
    controller.move_selection_up();
    controller.move_selection_up();
    assert_eq!(controller.selected_item().unwrap().label, "AKA");

    let label = controller
        .commit_selection()
        .map(|item| item.label.clone())
        .unwrap();
    controller.on_query_changed(label);
    assert_eq!(controller.query_text(), "AKA");
    assert!(!controller.is_focused());

    // The next real edit searches again and shows the list.
    controller.on_query_changed("known");
    assert!(controller.is_focused());
    assert_eq!(controller.selected_index(), None);
    assert_eq!(result_labels(&controller), vec!["AKA"]);
}

#[test]
fn test_clearing_the_field_resets_session() {
    let mut controller = SearchController::new(abbreviation_corpus(), SearchOptions::default());
    controller.on_query_changed("o");
    assert!(controller.result_count() > 0);
    controller.move_selection_down();

    controller.on_query_changed("");
    assert_eq!(controller.result_count(), 0);
    assert_eq!(controller.selected_index(), None);
    assert!(controller.is_focused());
}
