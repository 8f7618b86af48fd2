//! Tests for application, traversal and coalescing.

use optionals::coalesce;
use optionals::combine::{Apply, Sequence, Traverse, ap, ap_with, sequence, traverse, traverse_with};
use proptest::prelude::*;
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// ap
// =============================================================================

#[rstest]
fn ap_applies_present_function_to_present_value() {
    let function = Some(|n: i32| n.to_string());
    assert_eq!(function.ap(Some(7)), Some("7".to_string()));
}

#[rstest]
#[case(Some(1), false, None)]
#[case(None, true, None)]
#[case(None, false, None)]
#[case(Some(1), true, Some(2))]
fn ap_requires_both(#[case] value: Option<i32>, #[case] has_function: bool, #[case] expected: Option<i32>) {
    let increment = |n: i32| n + 1;
    let function = has_function.then_some(increment);
    assert_eq!(ap(function, value), expected);
}

#[rstest]
fn ap_with_is_reusable() {
    let negate = ap_with(Some(|n: i32| -n));
    assert_eq!(negate(Some(3)), Some(-3));
    assert_eq!(negate(None), None);
}

proptest! {
    /// `Some(f).ap(x)` is `x.map(f)`.
    #[test]
    fn prop_ap_homomorphism(value in any::<Option<i32>>()) {
        let function = |n: i32| n.wrapping_mul(3);
        prop_assert_eq!(Some(function).ap(value), value.map(function));
    }

    #[test]
    fn prop_ap_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(Some(|n: i32| n).ap(value), value);
    }
}

// =============================================================================
// sequence / traverse
// =============================================================================

#[rstest]
fn sequence_collects_all_present() {
    assert_eq!(sequence([Some(1), Some(2), Some(3)]), Some(vec![1, 2, 3]));
    assert_eq!(vec![Some('a'), Some('b')].sequence(), Some(vec!['a', 'b']));
}

#[rstest]
fn sequence_of_empty_is_present_empty() {
    assert_eq!(sequence(Vec::<Option<i32>>::new()), Some(vec![]));
    assert_eq!(traverse(Vec::<i32>::new(), Some), Some(vec![]));
}

#[rstest]
fn sequence_stops_at_first_absent() {
    let pulled = Cell::new(0);
    let options = [Some(1), None, Some(3), Some(4)]
        .into_iter()
        .inspect(|_| pulled.set(pulled.get() + 1));

    assert_eq!(sequence(options), None);
    assert_eq!(pulled.get(), 2);
}

#[rstest]
fn traverse_stops_transforming_after_absent() {
    let transformed = Cell::new(0);
    let result = ["1", "x", "3"].traverse(|text| {
        transformed.set(transformed.get() + 1);
        text.parse::<i32>().ok()
    });
    assert_eq!(result, None);
    assert_eq!(transformed.get(), 2);
}

#[rstest]
fn traverse_with_is_reusable() {
    let parse_all = traverse_with(|text: &str| text.parse::<u8>().ok());
    assert_eq!(parse_all(vec!["1", "2"]), Some(vec![1, 2]));
    assert_eq!(parse_all(vec!["1", "256"]), None);
}

proptest! {
    #[test]
    fn prop_traverse_is_sequence_of_map(values in prop::collection::vec(any::<i16>(), 0..20)) {
        let transform = |n: i16| (n % 5 != 0).then_some(i32::from(n) * 2);
        prop_assert_eq!(
            traverse(values.clone(), transform),
            sequence(values.into_iter().map(transform))
        );
    }

    #[test]
    fn prop_sequence_present_iff_all_present(options in prop::collection::vec(any::<Option<u8>>(), 0..20)) {
        let expected: Option<Vec<u8>> = options.iter().copied().collect();
        prop_assert_eq!(sequence(options), expected);
    }
}

// =============================================================================
// coalesce
// =============================================================================

#[rstest]
fn coalesce_returns_first_present() {
    assert_eq!(optionals::combine::coalesce([None, Some(2), Some(3)]), Some(2));
    assert_eq!(optionals::combine::coalesce([None::<i32>, None]), None);
}

#[rstest]
fn coalesce_stops_pulling_after_first_present() {
    let pulled = Cell::new(0);
    let options = [None, Some("first"), Some("second")]
        .into_iter()
        .inspect(|_| pulled.set(pulled.get() + 1));

    assert_eq!(optionals::combine::coalesce(options), Some("first"));
    assert_eq!(pulled.get(), 2);
}

#[rstest]
fn coalesce_macro_is_lazy() {
    let evaluated = Cell::new(0);
    let lookup = |value: Option<i32>| {
        evaluated.set(evaluated.get() + 1);
        value
    };

    assert_eq!(coalesce!(lookup(None), lookup(Some(2)), lookup(Some(3))), Some(2));
    assert_eq!(evaluated.get(), 2);

    assert_eq!(coalesce!(lookup(None), lookup(None)), None);
    let empty: Option<i32> = coalesce!();
    assert_eq!(empty, None);
}

proptest! {
    #[test]
    fn prop_coalesce_matches_or_chain(a in any::<Option<i32>>(), b in any::<Option<i32>>(), c in any::<Option<i32>>()) {
        let expected = a.or(b).or(c);
        prop_assert_eq!(optionals::combine::coalesce([a, b, c]), expected);
        prop_assert_eq!(coalesce!(a, b, c), expected);
    }
}
