//! Tests for filtering, folding and conditional construction.

use optionals::combinator::{Fold, none_when, none_when_with, some_when, some_when_with};
use optionals::functions::filter_with;
use proptest::prelude::*;
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// filter
// =============================================================================

#[rstest]
fn filter_with_is_reusable() {
    let positive = filter_with(|n: &i32| *n > 0);
    assert_eq!(positive(Some(3)), Some(3));
    assert_eq!(positive(Some(-3)), None);
    assert_eq!(positive(None), None);
}

#[rstest]
fn filter_never_calls_predicate_on_absent() {
    let calls = Cell::new(0);
    let counted = |n: &i32| {
        calls.set(calls.get() + 1);
        *n > 0
    };

    assert_eq!(None.filter(counted), None);
    assert_eq!(filter_with(counted)(None), None);
    assert_eq!(calls.get(), 0);

    assert_eq!(Some(1).filter(counted), Some(1));
    assert_eq!(filter_with(counted)(Some(-1)), None);
    assert_eq!(calls.get(), 2);
}

proptest! {
    /// `filter(p)` agrees with chaining into a conditional constructor.
    #[test]
    fn prop_filter_matches_some_when(value in any::<Option<i32>>()) {
        let predicate = |n: &i32| n % 2 == 0;
        prop_assert_eq!(value.filter(predicate), value.and_then(|n| some_when(predicate, n)));
    }

    #[test]
    fn prop_filter_true_is_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(value.filter(|_| true), value);
        prop_assert_eq!(value.filter(|_| false), None);
    }
}

// =============================================================================
// fold
// =============================================================================

#[rstest]
#[case(Some(4), 8)]
#[case(None, -1)]
fn fold_picks_branch(#[case] input: Option<i32>, #[case] expected: i32) {
    assert_eq!(input.fold(-1, |n| n * 2), expected);
}

#[rstest]
fn fold_absent_does_not_call_present_arm() {
    let called = Cell::new(false);
    let result = None::<i32>.fold("absent", |_| {
        called.set(true);
        "present"
    });
    assert_eq!(result, "absent");
    assert!(!called.get());
}

proptest! {
    #[test]
    fn prop_fold_matches_map_or(value in any::<Option<i32>>(), default in any::<i64>()) {
        prop_assert_eq!(
            value.fold(default, |n| i64::from(n) + 1),
            value.map_or(default, |n| i64::from(n) + 1)
        );
    }
}

// =============================================================================
// some_when / none_when
// =============================================================================

#[rstest]
#[case(5, Some(5), None)]
#[case(-5, None, Some(-5))]
fn constructors_are_complementary(
    #[case] value: i32,
    #[case] when_positive: Option<i32>,
    #[case] unless_positive: Option<i32>,
) {
    let positive = |n: &i32| *n > 0;
    assert_eq!(some_when(positive, value), when_positive);
    assert_eq!(none_when(positive, value), unless_positive);
}

#[rstest]
fn curried_constructors_work_with_iterators() {
    let words = ["", "alpha", "", "beta"];
    let non_empty: Vec<&str> = words
        .into_iter()
        .filter_map(none_when_with(|word: &&str| word.is_empty()))
        .collect();
    assert_eq!(non_empty, vec!["alpha", "beta"]);

    let short = some_when_with(|word: &&str| word.len() < 5);
    assert_eq!(short("beta"), Some("beta"));
    assert_eq!(short("alpha"), None);
}

proptest! {
    #[test]
    fn prop_exactly_one_constructor_is_present(value in any::<i32>()) {
        let predicate = |n: &i32| n % 3 == 0;
        prop_assert_ne!(
            some_when(predicate, value).is_some(),
            none_when(predicate, value).is_some()
        );
    }
}
