//! Ranking passes over small, hand-checked corpora.

use crate::common::{abbreviation_corpus, animal_corpus, labels_of};
use typeahead::{rank, scan, RankingSession, ResultLimit, SearchOptions};

fn ranked(query: &str, limit: ResultLimit) -> Vec<String> {
    let mut corpus = animal_corpus();
    let indices = rank(&mut corpus, query, limit);
    labels_of(indices.iter().map(|&i| corpus.get(i).unwrap()))
}

#[test]
fn test_all_group_zero_in_description_order() {
    assert_eq!(ranked("A ", ResultLimit::Unbounded), vec!["Cat", "Doe", "Dog"]);
}

#[test]
fn test_single_match_offset() {
    let mut corpus = animal_corpus();
    let indices = rank(&mut corpus, "loyal", ResultLimit::Unbounded);
    assert_eq!(indices.len(), 1);
    let dog = corpus.get(indices[0]).unwrap();
    assert_eq!(dog.label, "Dog");
    assert_eq!(dog.match_offset(), Some(2));
}

#[test]
fn test_limit_keeps_prefix() {
    assert_eq!(ranked("A ", ResultLimit::Limited(2)), vec!["Cat", "Doe"]);
}

#[test]
fn test_query_is_case_insensitive() {
    assert_eq!(ranked("LOYAL", ResultLimit::Unbounded), vec!["Dog"]);
    assert_eq!(ranked("a FE", ResultLimit::Unbounded), vec!["Cat", "Doe"]);
}

#[test]
fn test_no_match_yields_empty() {
    assert!(ranked("zebra", ResultLimit::Unbounded).is_empty());
}

#[test]
fn test_earlier_offset_beats_alphabetical_order() {
    let mut corpus = abbreviation_corpus();
    let index = scan(&mut corpus, "as");
    let labels = labels_of(index.results().iter().map(|&i| corpus.get(i).unwrap()));
    // "As soon as possible" @0, "Please respond" @3,
    // "Also known as" @11, "Frequently asked questions" @11
    assert_eq!(labels, vec!["ASAP", "RSVP", "AKA", "FAQ"]);
    let groups: Vec<usize> = index.table().iter().map(|(g, _)| g).collect();
    assert_eq!(groups, vec![0, 3, 11]);
}

#[test]
fn test_session_respects_minimum_length() {
    let opts = SearchOptions::default().with_minimum_trigger_length(2);
    let mut session = RankingSession::new(abbreviation_corpus(), &opts);

    session.run("a");
    assert!(session.is_empty());
    assert_eq!(session.passes(), 0);

    session.run("as");
    assert_eq!(session.len(), 4);
    assert_eq!(session.passes(), 1);
}
