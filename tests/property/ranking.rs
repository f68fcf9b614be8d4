//! Properties of full ranking passes.

use proptest::prelude::*;
use typeahead::{match_offset, rank, Corpus, Item, ResultLimit};

/// Descriptions over a tiny alphabet so queries actually hit.
fn description_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcAB ]{0,10}").unwrap()
}

fn corpus_strategy() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(description_strategy(), 0..16).prop_map(|descriptions| {
        descriptions
            .into_iter()
            .enumerate()
            .map(|(i, d)| Item::new(format!("item{}", i), d))
            .collect()
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abAB ]{1,3}").unwrap()
}

fn ranked_labels(items: &[Item], query: &str, limit: ResultLimit) -> Vec<String> {
    let mut corpus = Corpus::new(items.to_vec());
    rank(&mut corpus, query, limit)
        .into_iter()
        .map(|i| corpus.get(i).unwrap().label.clone())
        .collect()
}

proptest! {
    /// Property: ranking with limit L is the first L of the unbounded ranking.
    #[test]
    fn prop_truncation_is_prefix(
        items in corpus_strategy(),
        query in query_strategy(),
        limit in 0usize..20,
    ) {
        let full = ranked_labels(&items, &query, ResultLimit::Unbounded);
        let limited = ranked_labels(&items, &query, ResultLimit::Limited(limit));

        let expected: Vec<String> = full.iter().take(limit).cloned().collect();
        prop_assert_eq!(limited, expected);
    }

    /// Property: the ranking equals filtering the sorted corpus and stable
    /// sorting by match offset.
    #[test]
    fn prop_rank_matches_oracle(items in corpus_strategy(), query in query_strategy()) {
        let corpus = Corpus::new(items.clone());
        let mut oracle: Vec<(usize, String)> = corpus
            .iter()
            .filter_map(|item| {
                match_offset(&item.description, &query).map(|offset| (offset, item.label.clone()))
            })
            .collect();
        oracle.sort_by_key(|(offset, _)| *offset);
        let oracle: Vec<String> = oracle.into_iter().map(|(_, label)| label).collect();

        prop_assert_eq!(ranked_labels(&items, &query, ResultLimit::Unbounded), oracle);
    }

    /// Property: every result contains the query, every non-result does not.
    #[test]
    fn prop_results_are_exactly_the_matches(items in corpus_strategy(), query in query_strategy()) {
        let mut corpus = Corpus::new(items);
        let results = rank(&mut corpus, &query, ResultLimit::Unbounded);
        let folded_query = query.to_lowercase();

        for (index, item) in corpus.iter().enumerate() {
            let contains = item.description.to_lowercase().contains(&folded_query);
            prop_assert_eq!(results.contains(&index), contains);
            prop_assert_eq!(item.match_offset().is_some(), contains);
        }
    }

    /// Property: ranking the same query twice gives the same order.
    #[test]
    fn prop_rank_deterministic(items in corpus_strategy(), query in query_strategy()) {
        let mut corpus = Corpus::new(items);
        let first = rank(&mut corpus, &query, ResultLimit::Unbounded);
        let second = rank(&mut corpus, &query, ResultLimit::Unbounded);
        prop_assert_eq!(first, second);
    }
}
