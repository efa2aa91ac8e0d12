#![cfg(feature = "compose")]
//! Integration tests for the composition and currying macros.
//!
//! The one law that matters here is the round trip:
//! `uncurryN!(curryN!(f))` behaves exactly as `f` for every tested arity.

use kleisli::compose::{constant, flip, identity};
use kleisli::{compose, curry2, curry3, curry4, pipe, uncurry2, uncurry3, uncurry4};
use rstest::rstest;

fn add(first: i32, second: i32) -> i32 {
    first + second
}

fn clamp(low: i32, high: i32, value: i32) -> i32 {
    value.max(low).min(high)
}

fn weighted_sum(a: i32, b: i32, c: i32, d: i32) -> i32 {
    a + 2 * b + 3 * c + 4 * d
}

// =============================================================================
// compose! / pipe!
// =============================================================================

#[rstest]
fn compose_and_pipe_agree_in_opposite_orders() {
    let double = |x: i32| x * 2;
    let increment = |x: i32| x + 1;

    let composed = compose!(increment, double);
    assert_eq!(composed(5), 11);
    assert_eq!(pipe!(5, double, increment), 11);
}

#[rstest]
fn identity_is_a_composition_unit() {
    let double = |x: i32| x * 2;
    let left = compose!(identity, double);
    let right = compose!(double, identity);

    for value in [-3, 0, 8] {
        assert_eq!(left(value), double(value));
        assert_eq!(right(value), double(value));
    }
}

#[rstest]
fn constant_and_flip_combinators() {
    let always = constant("fixed");
    assert_eq!(always(123), "fixed");

    let subtract = |a: i32, b: i32| a - b;
    assert_eq!(flip(subtract)(3, 10), 7);
}

// =============================================================================
// Curry / Uncurry Round Trips
// =============================================================================

#[rstest]
#[case(0, 0)]
#[case(5, 3)]
#[case(-7, 7)]
fn uncurry2_of_curry2_matches_original(#[case] first: i32, #[case] second: i32) {
    let roundtripped = uncurry2!(curry2!(add));
    assert_eq!(roundtripped(first, second), add(first, second));
}

#[rstest]
#[case(0, 100, 42)]
#[case(0, 100, -5)]
#[case(0, 100, 400)]
fn uncurry3_of_curry3_matches_original(#[case] low: i32, #[case] high: i32, #[case] value: i32) {
    let roundtripped = uncurry3!(curry3!(clamp));
    assert_eq!(roundtripped(low, high, value), clamp(low, high, value));
}

#[rstest]
#[case(1, 2, 3, 4)]
#[case(-1, 0, 1, -2)]
fn uncurry4_of_curry4_matches_original(
    #[case] a: i32,
    #[case] b: i32,
    #[case] c: i32,
    #[case] d: i32,
) {
    let roundtripped = uncurry4!(curry4!(weighted_sum));
    assert_eq!(roundtripped(a, b, c, d), weighted_sum(a, b, c, d));
}

#[rstest]
fn curried_partial_applications_are_independent() {
    let curried = curry2!(add);
    let add_one = curried(1);
    let add_ten = curried(10);

    assert_eq!(add_one(5), 6);
    assert_eq!(add_ten(5), 15);
    // earlier partial application is unaffected by later ones
    assert_eq!(add_one(5), 6);
}

#[rstest]
fn curried_functions_compose_with_pipe() {
    let curried_clamp = curry3!(clamp);
    let into_percent = curried_clamp(0)(100);

    assert_eq!(pipe!(150, &into_percent), 100);
    assert_eq!(pipe!(-20, &into_percent), 0);
    assert_eq!(pipe!(55, into_percent), 55);
}
