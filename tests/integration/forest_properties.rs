//! Generated acyclic forests checked against brute-force definitions.

use proptest::prelude::*;
use std::collections::VecDeque;
use treestore::{Identifier, Record, TreeIndex};

/// `choices[i] >= i` makes record `i + 1` a top-level record; otherwise its
/// parent is record `choices[i] + 1`, which always precedes it.
fn forest(choices: &[usize]) -> Vec<Record> {
    choices
        .iter()
        .enumerate()
        .map(|(i, &choice)| {
            let id = i as i64 + 1;
            if choice >= i {
                Record::new(id, "root")
            } else {
                Record::new(id, choice as i64 + 1).with_kind(Some("node"))
            }
        })
        .collect()
}

fn forest_strategy() -> impl Strategy<Value = Vec<Record>> {
    (1usize..40)
        .prop_flat_map(|n| prop::collection::vec(0usize..n, n))
        .prop_map(|choices| forest(&choices))
}

fn ids(records: &[&Record]) -> Vec<Identifier> {
    records.iter().map(|r| r.id.clone()).collect()
}

proptest! {
    #[test]
    fn get_all_equals_input(records in forest_strategy()) {
        let index = TreeIndex::new(&records);
        prop_assert_eq!(index.get_all(), records.as_slice());
    }

    #[test]
    fn get_item_returns_matching_id(records in forest_strategy()) {
        let index = TreeIndex::new(&records);
        for record in &records {
            prop_assert_eq!(index.get_item(&record.id), Some(record));
        }
    }

    #[test]
    fn get_children_matches_parent_filter(records in forest_strategy()) {
        let index = TreeIndex::new(&records);
        for record in &records {
            let expected: Vec<&Record> =
                records.iter().filter(|r| r.parent == record.id).collect();
            prop_assert_eq!(index.get_children(&record.id).unwrap(), expected);
        }
    }

    #[test]
    fn get_all_children_is_bfs_of_get_children(records in forest_strategy()) {
        let index = TreeIndex::new(&records);
        for record in &records {
            let mut expected = Vec::new();
            let mut queue: VecDeque<&Record> =
                index.get_children(&record.id).unwrap().into_iter().collect();
            while let Some(current) = queue.pop_front() {
                expected.push(current);
                queue.extend(index.get_children(&current.id).unwrap());
            }

            let before = index.memo_stats().all_children_computed;
            let first = index.get_all_children(&record.id).unwrap();
            let second = index.get_all_children(&record.id).unwrap();

            prop_assert_eq!(ids(&first), ids(&expected));
            prop_assert_eq!(first, second);
            prop_assert_eq!(index.memo_stats().all_children_computed, before + 1);
        }
    }

    #[test]
    fn get_all_parents_follows_parent_pointers(records in forest_strategy()) {
        let index = TreeIndex::new(&records);
        for record in &records {
            let parents = index.get_all_parents(&record.id).unwrap();
            let mut child = record;
            for &parent in &parents {
                prop_assert_eq!(&child.parent, &parent.id);
                child = parent;
            }
            // The chain ends at a top-level record
            prop_assert!(index.get_item(&child.parent).is_none());
            prop_assert_eq!(index.get_all_parents(&record.id).unwrap(), parents);
        }
    }
}
