//! Cursor behaviour checked against a simple model.

use proptest::prelude::*;
use typeahead::{Corpus, Item, SearchController, SearchOptions};

#[derive(Debug, Clone)]
enum Move {
    Down,
    Up,
    Hover(usize),
}

fn move_strategy() -> impl Strategy<Value = Move> {
    prop_oneof![
        Just(Move::Down),
        Just(Move::Up),
        (0usize..8).prop_map(Move::Hover),
    ]
}

/// Controller whose query matches exactly `n` items.
fn controller_with_results(n: usize) -> SearchController {
    let items = (0..n)
        .map(|i| Item::new(format!("hit{}", i), format!("match {}", i)))
        .chain(std::iter::once(Item::new("miss", "nothing here")))
        .collect();
    let mut controller = SearchController::new(Corpus::new(items), SearchOptions::default());
    controller.on_query_changed("match");
    controller
}

/// Reference model: -1 stands for "nothing selected".
fn model_step(cursor: i64, len: i64, step: &Move) -> i64 {
    if len == 0 {
        return cursor;
    }
    match step {
        Move::Down => (cursor + 1).rem_euclid(len),
        Move::Up => {
            let start = if cursor == -1 { 0 } else { cursor };
            (start + len - 1).rem_euclid(len)
        }
        Move::Hover(index) if (*index as i64) < len => *index as i64,
        Move::Hover(_) => cursor,
    }
}

proptest! {
    /// Property: the controller cursor tracks the wraparound model exactly.
    #[test]
    fn prop_cursor_matches_model(
        n in 0usize..6,
        moves in prop::collection::vec(move_strategy(), 0..24),
    ) {
        let mut controller = controller_with_results(n);
        prop_assert_eq!(controller.result_count(), n);

        let mut model: i64 = -1;
        for step in &moves {
            match step {
                Move::Down => { controller.move_selection_down(); }
                Move::Up => { controller.move_selection_up(); }
                Move::Hover(index) => { controller.set_selection(*index); }
            }
            model = model_step(model, n as i64, step);

            let expected = if model < 0 { None } else { Some(model as usize) };
            prop_assert_eq!(controller.selected_index(), expected);
        }
    }

    /// Property: a commit is always followed by exactly one suppressed change.
    #[test]
    fn prop_commit_suppresses_once(n in 1usize..6, downs in 1usize..10) {
        let mut controller = controller_with_results(n);
        for _ in 0..downs {
            controller.move_selection_down();
        }
        let label = controller.commit_selection().map(|item| item.label.clone());
        prop_assert!(label.is_some());

        let passes = controller.session().passes();
        controller.on_query_changed(label.unwrap());
        prop_assert_eq!(controller.session().passes(), passes);
        controller.on_query_changed("match");
        prop_assert_eq!(controller.session().passes(), passes + 1);
    }
}
