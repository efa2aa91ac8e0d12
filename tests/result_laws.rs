#![cfg(feature = "control")]
//! Property-based tests for the Result combinators.
//!
//! Verifies the functor and monad laws, the error-precedence contract of
//! `apply`, and the accumulation contract of `ap_validated` using
//! proptest.

use kleisli::control::{ResultExt, ap_validated, sequence_vec, traverse_vec};
use kleisli::typeclass::{Applicative, Functor, Monad};
use proptest::prelude::*;

fn arbitrary_result() -> impl Strategy<Value = Result<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Ok),
        "[a-z]{1,8}".prop_map(Err),
    ]
}

proptest! {
    // Functor identity: fmap(id) changes nothing.
    #[test]
    fn prop_functor_identity_law(value in arbitrary_result()) {
        prop_assert_eq!(value.clone().fmap(|x| x), value);
    }

    // Functor composition: fmap(f) then fmap(g) equals fmap(g . f).
    #[test]
    fn prop_functor_composition_law(value in arbitrary_result()) {
        let double = |x: i32| x.wrapping_mul(2);
        let shift = |x: i32| x.wrapping_add(7);

        let sequential = value.clone().fmap(double).fmap(shift);
        let fused = value.fmap(|x| shift(double(x)));
        prop_assert_eq!(sequential, fused);
    }

    // Monad left identity: pure(a).flat_map(f) == f(a).
    #[test]
    fn prop_monad_left_identity_law(seed in any::<i32>()) {
        let f = |x: i32| {
            if x % 2 == 0 {
                Ok(x.wrapping_mul(3))
            } else {
                Err(format!("odd: {x}"))
            }
        };
        let lifted: Result<i32, String> = <Result<(), String>>::pure(seed);
        prop_assert_eq!(lifted.flat_map(f), f(seed));
    }

    // Monad right identity: m.flat_map(pure) == m.
    #[test]
    fn prop_monad_right_identity_law(value in arbitrary_result()) {
        prop_assert_eq!(value.clone().flat_map(<Result<(), String>>::pure), value);
    }

    // Monad associativity.
    #[test]
    fn prop_monad_associativity_law(value in arbitrary_result()) {
        let f = |x: i32| {
            if x >= 0 {
                Ok(x.wrapping_add(1))
            } else {
                Err("negative".to_string())
            }
        };
        let g = |x: i32| {
            if x % 3 != 0 {
                Ok(x.wrapping_mul(2))
            } else {
                Err("multiple of three".to_string())
            }
        };

        let left = value.clone().flat_map(f).flat_map(g);
        let right = value.flat_map(|x| f(x).flat_map(g));
        prop_assert_eq!(left, right);
    }

    // apply on a double failure reports the function side's error.
    #[test]
    fn prop_apply_function_error_precedence(
        function_error in "[a-z]{1,8}",
        value_error in "[A-Z]{1,8}",
    ) {
        let function: Result<fn(i32) -> i32, String> = Err(function_error.clone());
        let value: Result<i32, String> = Err(value_error);
        prop_assert_eq!(function.apply(value), Err(function_error));
    }

    // ap_validated on a double failure combines both errors in order.
    #[test]
    fn prop_ap_validated_accumulates_in_order(
        function_error in "[a-z]{1,8}",
        value_error in "[A-Z]{1,8}",
    ) {
        let function: Result<fn(i32) -> i32, String> = Err(function_error.clone());
        let value: Result<i32, String> = Err(value_error.clone());
        prop_assert_eq!(
            ap_validated(function, value),
            Err(format!("{function_error}{value_error}"))
        );
    }

    // ap_validated agrees with apply whenever at most one side fails.
    #[test]
    fn prop_ap_validated_agrees_with_apply_on_single_failure(
        value in arbitrary_result(),
    ) {
        let make_function = || -> Result<fn(i32) -> i32, String> { Ok(|x| x.wrapping_add(1)) };
        prop_assert_eq!(
            ap_validated(make_function(), value.clone()),
            make_function().apply(value)
        );
    }

    // traverse_vec on all-success inputs preserves order and length.
    #[test]
    fn prop_traverse_vec_preserves_order(items in prop::collection::vec(any::<i32>(), 0..32)) {
        let expected: Vec<i64> = items.iter().map(|n| i64::from(*n) * 2).collect();
        let traversed: Result<Vec<i64>, String> =
            traverse_vec(items, |n| Ok(i64::from(n) * 2));
        prop_assert_eq!(traversed, Ok(expected));
    }

    // traverse_vec returns the error of the first failing element.
    #[test]
    fn prop_traverse_vec_reports_first_failure(
        prefix in prop::collection::vec(any::<i32>(), 0..8),
        suffix in prop::collection::vec(any::<i32>(), 0..8),
    ) {
        let mut items: Vec<Option<i32>> = prefix.iter().copied().map(Some).collect();
        items.push(None);
        items.extend(suffix.iter().copied().map(Some));

        let traversed: Result<Vec<i32>, String> = traverse_vec(items, |item| {
            item.ok_or_else(|| "gap".to_string())
        });
        prop_assert_eq!(traversed, Err("gap".to_string()));
    }

    // sequence_vec is traverse_vec with the identity.
    #[test]
    fn prop_sequence_vec_matches_traverse_identity(
        items in prop::collection::vec(arbitrary_result(), 0..16),
    ) {
        prop_assert_eq!(
            sequence_vec(items.clone()),
            traverse_vec(items, |result| result)
        );
    }

    // filter_or_else keeps values passing the predicate and rejects the rest.
    #[test]
    fn prop_filter_or_else_splits_on_predicate(seed in any::<i32>()) {
        let outcome: Result<i32, String> =
            Ok(seed).filter_or_else(|n| *n % 2 == 0, |n| format!("odd: {n}"));
        if seed % 2 == 0 {
            prop_assert_eq!(outcome, Ok(seed));
        } else {
            prop_assert_eq!(outcome, Err(format!("odd: {seed}")));
        }
    }

    // fold is a total elimination: it always produces the matching branch.
    #[test]
    fn prop_fold_matches_variant(value in arbitrary_result()) {
        let folded = value.clone().fold(|error| format!("E:{error}"), |n| format!("V:{n}"));
        match value {
            Ok(n) => prop_assert_eq!(folded, format!("V:{n}")),
            Err(error) => prop_assert_eq!(folded, format!("E:{error}")),
        }
    }
}
