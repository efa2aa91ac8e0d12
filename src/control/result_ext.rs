//! Result combinators beyond the standard library surface.
//!
//! std's `Result` already carries the monadic core (`map`, `and_then`,
//! `map_err`, `or_else`); this module adds the combinators the standard
//! library stops short of: predicate-based construction and filtering,
//! total elimination (`fold`), error-accumulating application
//! (`ap_validated`), and short-circuiting traversal over collections and
//! tuples.
//!
//! Every combinator that composes two failable computations stops at the
//! first failure; later stages never run. The single deliberate exception
//! is [`ap_validated`], which always evaluates both sides and accumulates
//! the errors through a [`Semigroup`].
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::{ResultExt, from_predicate};
//!
//! let valid_port = from_predicate(8080_u32, |port| *port > 1024, |port| {
//!     format!("port {port} is reserved")
//! });
//! assert_eq!(valid_port, Ok(8080));
//!
//! let described = valid_port.fold(
//!     |problem| format!("rejected: {problem}"),
//!     |port| format!("listening on {port}"),
//! );
//! assert_eq!(described, "listening on 8080");
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use crate::typeclass::Semigroup;

/// Extension combinators for `Result`.
pub trait ResultExt<A, E> {
    /// Keeps a success value only if it satisfies the predicate.
    ///
    /// A success failing the predicate becomes a failure built by
    /// `on_false` from the rejected value. Failures pass through with the
    /// predicate never evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::ResultExt;
    ///
    /// let positive: Result<i32, String> = Ok(5);
    /// assert_eq!(positive.filter_or_else(|n| *n > 0, |n| format!("{n} <= 0")), Ok(5));
    ///
    /// let negative: Result<i32, String> = Ok(-3);
    /// assert_eq!(
    ///     negative.filter_or_else(|n| *n > 0, |n| format!("{n} <= 0")),
    ///     Err("-3 <= 0".to_string())
    /// );
    /// ```
    fn filter_or_else<P, F>(self, predicate: P, on_false: F) -> Result<A, E>
    where
        P: FnOnce(&A) -> bool,
        F: FnOnce(A) -> E;

    /// Maps both channels at once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::ResultExt;
    ///
    /// let failed: Result<i32, i32> = Err(4);
    /// assert_eq!(failed.bi_map(|e| e * 10, |a| a + 1), Err(40));
    /// ```
    fn bi_map<B, E2, FE, FA>(self, on_error: FE, on_success: FA) -> Result<B, E2>
    where
        FE: FnOnce(E) -> E2,
        FA: FnOnce(A) -> B;

    /// Eliminates the `Result` by handling both channels.
    ///
    /// Exactly one of the two functions runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::ResultExt;
    ///
    /// let outcome: Result<i32, String> = Err("bad input".to_string());
    /// let message = outcome.fold(|e| format!("error: {e}"), |v| format!("value: {v}"));
    /// assert_eq!(message, "error: bad input");
    /// ```
    fn fold<B, FE, FA>(self, on_error: FE, on_success: FA) -> B
    where
        FE: FnOnce(E) -> B,
        FA: FnOnce(A) -> B;

    /// Returns the success value, or computes one from the error.
    ///
    /// The FP-conventional name for `unwrap_or_else`.
    fn get_or_else<F>(self, on_error: F) -> A
    where
        F: FnOnce(E) -> A;
}

impl<A, E> ResultExt<A, E> for Result<A, E> {
    #[inline]
    fn filter_or_else<P, F>(self, predicate: P, on_false: F) -> Self
    where
        P: FnOnce(&A) -> bool,
        F: FnOnce(A) -> E,
    {
        match self {
            Ok(value) => {
                if predicate(&value) {
                    Ok(value)
                } else {
                    Err(on_false(value))
                }
            }
            Err(error) => Err(error),
        }
    }

    #[inline]
    fn bi_map<B, E2, FE, FA>(self, on_error: FE, on_success: FA) -> Result<B, E2>
    where
        FE: FnOnce(E) -> E2,
        FA: FnOnce(A) -> B,
    {
        match self {
            Ok(value) => Ok(on_success(value)),
            Err(error) => Err(on_error(error)),
        }
    }

    #[inline]
    fn fold<B, FE, FA>(self, on_error: FE, on_success: FA) -> B
    where
        FE: FnOnce(E) -> B,
        FA: FnOnce(A) -> B,
    {
        match self {
            Ok(value) => on_success(value),
            Err(error) => on_error(error),
        }
    }

    #[inline]
    fn get_or_else<F>(self, on_error: F) -> A
    where
        F: FnOnce(E) -> A,
    {
        self.unwrap_or_else(on_error)
    }
}

// =============================================================================
// Construction
// =============================================================================

/// Builds a `Result` by testing a value against a predicate.
///
/// The value becomes `Ok` if the predicate holds, otherwise `Err` via
/// `on_false`.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::from_predicate;
///
/// let even = from_predicate(4, |n| n % 2 == 0, |n| format!("{n} is odd"));
/// assert_eq!(even, Ok(4));
///
/// let odd = from_predicate(3, |n| n % 2 == 0, |n| format!("{n} is odd"));
/// assert_eq!(odd, Err("3 is odd".to_string()));
/// ```
pub fn from_predicate<A, E, P, F>(value: A, predicate: P, on_false: F) -> Result<A, E>
where
    P: FnOnce(&A) -> bool,
    F: FnOnce(A) -> E,
{
    if predicate(&value) {
        Ok(value)
    } else {
        Err(on_false(value))
    }
}

/// Builds a `Result` from an `Option`, supplying the error for `None`.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::from_option;
///
/// let present = from_option(Some(1), || "missing");
/// assert_eq!(present, Ok(1));
///
/// let absent: Result<i32, &str> = from_option(None, || "missing");
/// assert_eq!(absent, Err("missing"));
/// ```
pub fn from_option<A, E, F>(option: Option<A>, on_none: F) -> Result<A, E>
where
    F: FnOnce() -> E,
{
    option.map_or_else(|| Err(on_none()), Ok)
}

// =============================================================================
// Validation
// =============================================================================

/// Applies a wrapped function to a wrapped value, accumulating errors.
///
/// Unlike [`crate::typeclass::Applicative::apply`], which reports only the
/// function side's error on a double failure, this variant always
/// evaluates both sides and combines the errors through the `Semigroup`
/// instance, function error first.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::ap_validated;
///
/// let function: Result<fn(i32) -> i32, String> = Err("invalid function; ".to_string());
/// let value: Result<i32, String> = Err("invalid value".to_string());
///
/// assert_eq!(
///     ap_validated(function, value),
///     Err("invalid function; invalid value".to_string())
/// );
/// ```
pub fn ap_validated<F, A, Output, E>(
    function_result: Result<F, E>,
    value_result: Result<A, E>,
) -> Result<Output, E>
where
    F: FnOnce(A) -> Output,
    E: Semigroup,
{
    match (function_result, value_result) {
        (Ok(function), Ok(value)) => Ok(function(value)),
        (Err(function_error), Err(value_error)) => Err(function_error.combine(value_error)),
        (Err(function_error), Ok(_)) => Err(function_error),
        (Ok(_), Err(value_error)) => Err(value_error),
    }
}

// =============================================================================
// Traversal
// =============================================================================

/// Applies a failable function to each element, collecting the successes.
///
/// Elements are processed left to right; the first failure is returned and
/// the remaining elements are never touched.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::traverse_vec;
///
/// let parsed = traverse_vec(vec!["1", "2", "3"], |s| s.parse::<i32>());
/// assert_eq!(parsed, Ok(vec![1, 2, 3]));
///
/// let failed = traverse_vec(vec!["1", "x", "3"], |s| {
///     s.parse::<i32>().map_err(|_| format!("bad number: {s}"))
/// });
/// assert_eq!(failed, Err("bad number: x".to_string()));
/// ```
pub fn traverse_vec<A, B, E, F>(items: Vec<A>, mut function: F) -> Result<Vec<B>, E>
where
    F: FnMut(A) -> Result<B, E>,
{
    let mut collected = Vec::with_capacity(items.len());
    for item in items {
        collected.push(function(item)?);
    }
    Ok(collected)
}

/// Collapses a vector of `Result`s into a `Result` of a vector.
///
/// Equivalent to `traverse_vec(results, |r| r)`: left to right, first
/// failure wins.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::sequence_vec;
///
/// let all_ok: Result<Vec<i32>, &str> = sequence_vec(vec![Ok(1), Ok(2)]);
/// assert_eq!(all_ok, Ok(vec![1, 2]));
///
/// let failed: Result<Vec<i32>, &str> = sequence_vec(vec![Ok(1), Err("e"), Ok(3)]);
/// assert_eq!(failed, Err("e"));
/// ```
pub fn sequence_vec<A, E>(results: Vec<Result<A, E>>) -> Result<Vec<A>, E> {
    traverse_vec(results, |result| result)
}

/// Applies a failable function to each map value, collecting the successes.
///
/// Stops at the first failure. When several entries would fail, which error
/// is reported depends on the map's iteration order and is therefore
/// implementation-defined.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use kleisli::control::traverse_hash_map;
///
/// let mut scores = HashMap::new();
/// scores.insert("alice", "10");
/// scores.insert("bob", "12");
///
/// let parsed = traverse_hash_map(scores, |_, raw| raw.parse::<i32>());
/// assert_eq!(parsed.map(|m| m.len()), Ok(2));
/// ```
pub fn traverse_hash_map<K, A, B, E, F>(
    map: HashMap<K, A>,
    mut function: F,
) -> Result<HashMap<K, B>, E>
where
    K: Eq + Hash,
    F: FnMut(&K, A) -> Result<B, E>,
{
    let mut collected = HashMap::with_capacity(map.len());
    for (key, value) in map {
        let transformed = function(&key, value)?;
        collected.insert(key, transformed);
    }
    Ok(collected)
}

// =============================================================================
// Tuple Sequencing
// =============================================================================

/// Combines two independent `Result`s into a tuple.
///
/// Evaluated left to right; the first failure wins.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::sequence_t2;
///
/// let both: Result<(i32, &str), &str> = sequence_t2(Ok(1), Ok("two"));
/// assert_eq!(both, Ok((1, "two")));
///
/// let failed: Result<(i32, i32), &str> = sequence_t2(Err("first"), Ok(2));
/// assert_eq!(failed, Err("first"));
/// ```
pub fn sequence_t2<A, B, E>(first: Result<A, E>, second: Result<B, E>) -> Result<(A, B), E> {
    let a = first?;
    let b = second?;
    Ok((a, b))
}

/// Combines three independent `Result`s into a tuple, first failure wins.
pub fn sequence_t3<A, B, C, E>(
    first: Result<A, E>,
    second: Result<B, E>,
    third: Result<C, E>,
) -> Result<(A, B, C), E> {
    let a = first?;
    let b = second?;
    let c = third?;
    Ok((a, b, c))
}

/// Combines four independent `Result`s into a tuple, first failure wins.
pub fn sequence_t4<A, B, C, D, E>(
    first: Result<A, E>,
    second: Result<B, E>,
    third: Result<C, E>,
    fourth: Result<D, E>,
) -> Result<(A, B, C, D), E> {
    let a = first?;
    let b = second?;
    let c = third?;
    let d = fourth?;
    Ok((a, b, c, d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn filter_or_else_passes_failures_without_evaluating_predicate() {
        let predicate_calls = Cell::new(0_u32);
        let failed: Result<i32, String> = Err("upstream".to_string());

        let outcome = failed.filter_or_else(
            |_| {
                predicate_calls.set(predicate_calls.get() + 1);
                true
            },
            |n| format!("rejected {n}"),
        );

        assert_eq!(outcome, Err("upstream".to_string()));
        assert_eq!(predicate_calls.get(), 0);
    }

    #[rstest]
    fn from_predicate_builds_err_from_rejected_value() {
        let rejected = from_predicate(150_u8, |n| *n < 100, |n| format!("{n} too large"));
        assert_eq!(rejected, Err("150 too large".to_string()));
    }

    #[rstest]
    fn from_option_none_uses_on_none() {
        let absent: Result<i32, &str> = from_option(None, || "nothing there");
        assert_eq!(absent, Err("nothing there"));
    }

    #[rstest]
    fn ap_validated_combines_function_error_first() {
        let function: Result<fn(i32) -> i32, String> = Err("invalid function; ".to_string());
        let value: Result<i32, String> = Err("invalid value".to_string());
        assert_eq!(
            ap_validated(function, value),
            Err("invalid function; invalid value".to_string())
        );
    }

    #[rstest]
    fn ap_validated_single_failure_passes_through() {
        let function: Result<fn(i32) -> i32, String> = Ok(|n| n + 1);
        let value: Result<i32, String> = Err("invalid value".to_string());
        assert_eq!(ap_validated(function, value), Err("invalid value".to_string()));
    }

    #[rstest]
    fn ap_validated_applies_on_double_success() {
        let function: Result<fn(i32) -> i32, String> = Ok(|n| n * 2);
        let value: Result<i32, String> = Ok(21);
        assert_eq!(ap_validated(function, value), Ok(42));
    }

    #[rstest]
    fn traverse_vec_short_circuits_and_stops_invoking_mapper() {
        let invocations = Cell::new(0_u32);
        let items = vec!["ok", "error", "should-not-process"];

        let outcome: Result<Vec<&str>, String> = traverse_vec(items, |item| {
            invocations.set(invocations.get() + 1);
            if item == "error" {
                Err(format!("failed on {item}"))
            } else {
                Ok(item)
            }
        });

        assert_eq!(outcome, Err("failed on error".to_string()));
        assert_eq!(invocations.get(), 2);
    }

    #[rstest]
    fn traverse_vec_preserves_order_on_success() {
        let doubled = traverse_vec(vec![1, 2, 3], |n| Ok::<i32, ()>(n * 2));
        assert_eq!(doubled, Ok(vec![2, 4, 6]));
    }

    #[rstest]
    fn sequence_vec_empty_is_ok_empty() {
        let empty: Result<Vec<i32>, ()> = sequence_vec(vec![]);
        assert_eq!(empty, Ok(vec![]));
    }

    #[rstest]
    fn traverse_hash_map_reports_failure_for_failing_entry() {
        let mut map = HashMap::new();
        map.insert("good", 1);
        map.insert("bad", -1);

        let outcome = traverse_hash_map(map, |key, value| {
            if value < 0 {
                Err(format!("{key} is negative"))
            } else {
                Ok(value)
            }
        });

        assert_eq!(outcome, Err("bad is negative".to_string()));
    }

    #[rstest]
    fn traverse_hash_map_keeps_keys_on_success() {
        let mut map = HashMap::new();
        map.insert("a", 1);
        map.insert("b", 2);

        let doubled = traverse_hash_map(map, |_, value| Ok::<i32, ()>(value * 2));
        let doubled = doubled.expect("all entries succeed");
        assert_eq!(doubled.get("a"), Some(&2));
        assert_eq!(doubled.get("b"), Some(&4));
    }

    #[rstest]
    fn sequence_t2_first_failure_wins_in_either_position() {
        let left_failed: Result<(i32, i32), &str> = sequence_t2(Err("e"), Ok(2));
        assert_eq!(left_failed, Err("e"));

        let right_failed: Result<(i32, i32), &str> = sequence_t2(Ok(1), Err("e"));
        assert_eq!(right_failed, Err("e"));
    }

    #[rstest]
    fn sequence_t3_and_t4_collect_in_order() {
        let three: Result<(i32, i32, i32), ()> = sequence_t3(Ok(1), Ok(2), Ok(3));
        assert_eq!(three, Ok((1, 2, 3)));

        let four: Result<(i32, i32, i32, i32), &str> =
            sequence_t4(Ok(1), Ok(2), Err("third failed"), Ok(4));
        assert_eq!(four, Err("third failed"));
    }

    #[rstest]
    fn fold_and_get_or_else_eliminate() {
        let failed: Result<i32, i32> = Err(4);
        assert_eq!(failed.fold(|e| e * 10, |a| a), 40);
        assert_eq!(failed.get_or_else(|e| e + 1), 5);
    }
}
