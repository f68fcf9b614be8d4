//! Controller behaviour through the public API.

use crate::common::{animal_corpus, result_labels};
use std::cell::Cell;
use std::rc::Rc;
use typeahead::{SearchController, SearchOptions};

fn searched(query: &str) -> SearchController {
    let mut controller = SearchController::new(animal_corpus(), SearchOptions::default());
    controller.on_query_changed(query);
    controller
}

#[test]
fn test_move_down_cycles_with_wraparound() {
    let mut controller = searched("A ");
    let seen: Vec<_> = (0..4).map(|_| controller.move_selection_down()).collect();
    assert_eq!(seen, vec![Some(0), Some(1), Some(2), Some(0)]);
}

#[test]
fn test_move_up_cycles_with_wraparound() {
    let mut controller = searched("A ");
    let seen: Vec<_> = (0..4).map(|_| controller.move_selection_up()).collect();
    assert_eq!(seen, vec![Some(2), Some(1), Some(0), Some(2)]);
}

#[test]
fn test_moves_without_results_are_noops() {
    let mut controller = searched("zebra");
    assert_eq!(controller.move_selection_down(), None);
    assert_eq!(controller.move_selection_up(), None);
    assert!(controller.commit_selection().is_none());
}

#[test]
fn test_commit_suppresses_following_query_change() {
    let commits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&commits);
    let mut controller = SearchController::builder(animal_corpus())
        .on_selected(move |_| counter.set(counter.get() + 1))
        .build();

    controller.on_query_changed("A ");
    controller.move_selection_down();
    controller.move_selection_down();
    let label = controller.commit_selection().map(|item| item.label.clone());
    assert_eq!(label.as_deref(), Some("Doe"));
    assert_eq!(commits.get(), 1);

    let passes = controller.session().passes();
    controller.on_query_changed("Doe");
    assert_eq!(controller.session().passes(), passes);
    assert_eq!(controller.query_text(), "Doe");
    assert!(!controller.is_focused());
    // Results from before the commit are still there.
    assert_eq!(result_labels(&controller), vec!["Cat", "Doe", "Dog"]);
}

#[test]
fn test_commit_without_listener_still_updates_state() {
    let mut controller = searched("deer");
    controller.move_selection_down();
    assert!(controller.commit_selection().is_some());
    assert_eq!(controller.query_text(), "Doe");
    assert!(!controller.is_focused());
}

#[test]
fn test_hover_then_commit() {
    let mut controller = searched("A ");
    assert!(controller.set_selection(2));
    let label = controller.commit_selection().map(|item| item.label.clone());
    assert_eq!(label.as_deref(), Some("Dog"));
}
