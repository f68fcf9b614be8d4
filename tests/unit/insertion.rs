//! Grouped insertion through the public free-function API.

use crate::common::assert_table_tiles;
use typeahead::{insert, GroupRangeTable, GroupedIndex, RankError};

#[test]
fn test_insert_sequence_matches_worked_example() {
    let mut results = Vec::new();
    let mut table = GroupRangeTable::new();

    // Build [a b c][d e][f g h i] with groups 0, 2, 5 in a scrambled order.
    for (item, group) in [
        ('f', 5),
        ('a', 0),
        ('d', 2),
        ('g', 5),
        ('b', 0),
        ('e', 2),
        ('h', 5),
        ('c', 0),
        ('i', 5),
    ] {
        insert(&mut results, &mut table, item, group).unwrap();
        assert_table_tiles(&table, results.len());
    }

    assert_eq!(results.iter().collect::<String>(), "abcdefghi");
    assert_eq!(table.get(0), Some(0..3));
    assert_eq!(table.get(2), Some(3..5));
    assert_eq!(table.get(5), Some(5..9));

    let pos = insert(&mut results, &mut table, 'x', 2).unwrap();
    assert_eq!(pos, 5);
    assert_eq!(results.iter().collect::<String>(), "abcdexfghi");
    assert_eq!(table.get(5), Some(6..10));
}

#[test]
fn test_insert_returns_position_in_group_tail() {
    let mut results = Vec::new();
    let mut table = GroupRangeTable::new();

    assert_eq!(insert(&mut results, &mut table, "late", 10).unwrap(), 0);
    assert_eq!(insert(&mut results, &mut table, "early", 1).unwrap(), 0);
    assert_eq!(insert(&mut results, &mut table, "early2", 1).unwrap(), 1);
    assert_eq!(insert(&mut results, &mut table, "mid", 4).unwrap(), 2);
    assert_eq!(results, vec!["early", "early2", "mid", "late"]);
}

#[test]
fn test_insert_rejects_table_for_other_results() {
    let mut index = GroupedIndex::new();
    index.insert(1, 0);
    index.insert(2, 3);
    let (_, mut table) = index.into_parts();

    let mut fresh: Vec<i32> = Vec::new();
    let err = insert(&mut fresh, &mut table, 9, 1).unwrap_err();
    assert!(matches!(err, RankError::InvalidArgument { .. }));
    assert!(err.to_string().contains("range_table"));
    assert!(fresh.is_empty());
}

#[test]
fn test_group_slices() {
    let mut index = GroupedIndex::with_capacity(4);
    index.insert("dog", 2);
    index.insert("cat", 0);
    index.insert("doe", 0);

    assert_eq!(index.group(0), &["cat", "doe"]);
    assert_eq!(index.group(2), &["dog"]);
    assert!(index.group(1).is_empty());
    assert_eq!(index.into_results(), vec!["cat", "doe", "dog"]);
}
