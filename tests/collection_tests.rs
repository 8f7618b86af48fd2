//! Tests for emptiness-aware recovery on optional collections.

use optionals::combinator::OptionCollection;
use optionals::functions::{recover_from_empty, recover_from_empty_with};
use rstest::rstest;
use std::cell::Cell;
use std::collections::{BTreeMap, HashSet, VecDeque};

#[rstest]
#[case(None, None)]
#[case(Some(vec![]), Some(vec![-1]))]
#[case(Some(vec![1, 2]), Some(vec![1, 2]))]
fn recover_from_empty_replaces_only_present_empty(
    #[case] input: Option<Vec<i32>>,
    #[case] expected: Option<Vec<i32>>,
) {
    assert_eq!(input.clone().recover_from_empty(|| vec![-1]), expected);
    assert_eq!(recover_from_empty(input, || vec![-1]), expected);
}

#[rstest]
#[case(None)]
#[case(Some(vec![7]))]
fn recover_from_empty_skips_producer(#[case] input: Option<Vec<i32>>) {
    let called = Cell::new(false);
    let _ = input.recover_from_empty(|| {
        called.set(true);
        vec![]
    });
    assert!(!called.get());
}

#[rstest]
#[case(None, "fallback")]
#[case(Some(String::new()), "fallback")]
#[case(Some("value".to_string()), "value")]
fn default_some_unwraps_or_produces(#[case] input: Option<String>, #[case] expected: &str) {
    assert_eq!(input.default_some(|| "fallback".to_string()), expected);
}

#[rstest]
fn default_some_does_not_call_producer_for_elements() {
    let calls = Cell::new(0);
    let result = Some(VecDeque::from([1, 2])).default_some(|| {
        calls.set(calls.get() + 1);
        VecDeque::new()
    });
    assert_eq!(result, VecDeque::from([1, 2]));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn recovery_works_for_maps_and_sets() {
    let empty_map: Option<BTreeMap<&str, i32>> = Some(BTreeMap::new());
    let recovered = empty_map.recover_from_empty(|| BTreeMap::from([("retries", 3)]));
    assert_eq!(recovered.map(|map| map.len()), Some(1));

    let set: Option<HashSet<u8>> = None;
    assert!(set.default_some(HashSet::new).is_empty());
}

#[rstest]
fn recovery_works_for_borrowed_slices() {
    let fallback = [0_u8];
    let bytes: Option<&[u8]> = Some(&[][..]);
    assert_eq!(bytes.recover_from_empty(|| &fallback[..]), Some(&fallback[..]));
}

#[rstest]
fn curried_recovery_is_reusable() {
    let placeholder = recover_from_empty_with(|| vec!["-"]);
    let rows: Vec<Option<Vec<&str>>> = vec![Some(vec![]), None, Some(vec!["a"])];
    let rendered: Vec<_> = rows.into_iter().map(placeholder).collect();
    assert_eq!(rendered, vec![Some(vec!["-"]), None, Some(vec!["a"])]);
}
