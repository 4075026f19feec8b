//! Quantifier properties of `require_for_all` and `require_there_exists`.

use std::collections::BTreeMap;

use super::common::greater_than_two;
use proptest::prelude::*;
use requisite::collection::{
    require_for_all_keys, require_for_all_values, require_there_exists_value,
};
use requisite::{require_for_all, require_there_exists, Quantifier};

proptest! {
    /// The report lists exactly the failing indices, in order.
    #[test]
    fn prop_for_all_reports_failing_indices(list in prop::collection::vec(-10i32..10, 0..40)) {
        let expected: Vec<usize> = list
            .iter()
            .enumerate()
            .filter(|(_, n)| **n <= 2)
            .map(|(i, _)| i)
            .collect();

        match require_for_all(&list, greater_than_two, "list") {
            Ok(returned) => {
                prop_assert!(expected.is_empty());
                prop_assert_eq!(returned, &list);
            }
            Err(error) => {
                let report = error.aggregate().expect("aggregate failure");
                prop_assert_eq!(report.quantifier, Quantifier::ForAll);
                prop_assert_eq!(report.indices().collect::<Vec<_>>(), expected);
            }
        }
    }

    #[test]
    fn prop_there_exists_iff_some_pass(list in prop::collection::vec(-10i32..10, 0..40)) {
        let any = list.iter().any(|n| *n > 2);
        let result = require_there_exists(&list, greater_than_two, "list");
        prop_assert_eq!(result.is_ok(), any);

        if let Err(error) = result {
            // Nothing passed, so every element is in the report.
            let report = error.aggregate().expect("aggregate failure");
            prop_assert_eq!(report.failures.len(), list.len());
        }
    }

    /// Each element is checked exactly once, in order, for both quantifiers.
    #[test]
    fn prop_check_called_once_per_element(list in prop::collection::vec(any::<i8>(), 0..30)) {
        let mut seen = Vec::new();
        let _ = require_there_exists(&list, |n| { seen.push(*n); greater_than_two(&i32::from(*n)) }, "list");
        prop_assert_eq!(&seen, &list);

        seen.clear();
        let _ = require_for_all(&list, |n| { seen.push(*n); greater_than_two(&i32::from(*n)) }, "list");
        prop_assert_eq!(&seen, &list);
    }

    #[test]
    fn prop_value_quantifiers_match_iterator(
        map in prop::collection::btree_map("[a-z]{1,4}", -5i32..5, 0..20)
    ) {
        let all = map.values().all(|v| *v > 2);
        let any = map.values().any(|v| *v > 2);

        prop_assert_eq!(require_for_all_values(&map, greater_than_two, "map").is_ok(), all);
        prop_assert_eq!(require_there_exists_value(&map, greater_than_two, "map").is_ok(), any);
    }
}

#[test]
fn test_empty_sequences() {
    let empty: Vec<i32> = Vec::new();
    assert!(require_for_all(&empty, |_| Err::<(), _>("unreachable"), "list").is_ok());
    assert!(require_there_exists(&empty, |_| Ok::<(), String>(()), "list").is_err());

    let map: BTreeMap<String, i32> = BTreeMap::new();
    assert!(require_for_all_keys(&map, |_| Err::<(), _>("unreachable"), "map").is_ok());
    assert!(require_there_exists_value(&map, |_| Ok::<(), String>(()), "map").is_err());
}
