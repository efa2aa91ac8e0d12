//! `ReaderResult` - environment reading computation with an error channel.
//!
//! A `ReaderResult<R, A, E>` wraps a pure function `R -> Result<A, E>`:
//! the `Reader` monad composed with `Result`. It is the workhorse for
//! pipelines that both depend on an environment (configuration, injected
//! services) and can fail, without threading either concern by hand.
//!
//! Two invariants hold everywhere in this module:
//!
//! - The environment is read-only. Combinators may run a computation under
//!   a *transformed* environment (`local`, `contramap`, `promap`), but the
//!   caller's value is never mutated.
//! - Failure short-circuits. Once a stage has produced `Err`, no later
//!   stage runs and the error is returned unchanged. The deliberate
//!   exceptions are [`ReaderResult::apply_validated`] and
//!   [`ReaderResult::combine_validated`], which evaluate both sides and
//!   accumulate errors through a [`Semigroup`].
//!
//! Evaluation is strictly sequential and in source order: `apply` runs the
//! function side first, then the value side, so on a double failure the
//! function side's error is the one reported. Nothing here spawns tasks or
//! inspects cancellation; an environment may carry such concerns, but the
//! combinators never look at them.
//!
//! # Laws
//!
//! In addition to the Functor/Monad laws (stated on [`Reader`]):
//!
//! - Ask Retrieval: `ReaderResult::ask().run(r) == Ok(r)`
//! - Profunctor Identity: `rr.promap(|r| r, |a| a)` behaves as `rr`
//! - Or-Else Success: `ok(a).or_else(f)` behaves as `ok(a)`
//!
//! # Examples
//!
//! ```rust
//! use kleisli::effect::ReaderResult;
//!
//! #[derive(Clone)]
//! struct Registry {
//!     lookup: Vec<(u32, String)>,
//! }
//!
//! fn find_name(id: u32) -> ReaderResult<Registry, String, String> {
//!     ReaderResult::asks_result(move |registry: Registry| {
//!         registry
//!             .lookup
//!             .iter()
//!             .find(|(key, _)| *key == id)
//!             .map(|(_, name)| name.clone())
//!             .ok_or_else(|| format!("no entry for {id}"))
//!     })
//! }
//!
//! let registry = Registry { lookup: vec![(1, "alice".to_string())] };
//! assert_eq!(find_name(1).run(registry.clone()), Ok("alice".to_string()));
//! assert_eq!(find_name(9).run(registry), Err("no entry for 9".to_string()));
//! ```

#![forbid(unsafe_code)]

use std::rc::Rc;

use crate::typeclass::Semigroup;

use super::reader::Reader;

/// A monad for computations that read from an environment and can fail.
///
/// `ReaderResult<R, A, E>` represents a computation that, given an
/// environment of type `R`, produces either a success value `A` or an
/// error `E`. The environment is immutable and shared across all composed
/// computations; errors are caller-supplied values the library threads
/// through untouched.
///
/// # Type Parameters
///
/// - `R`: The environment type (read-only context)
/// - `A`: The success type
/// - `E`: The error type
///
/// # Examples
///
/// ```rust
/// use kleisli::effect::ReaderResult;
///
/// let computation: ReaderResult<i32, i32, String> = ReaderResult::ask()
///     .flat_map(|environment| ReaderResult::ok(environment * 2));
///
/// assert_eq!(computation.run(21), Ok(42));
/// ```
pub struct ReaderResult<R, A, E>
where
    R: 'static,
    A: 'static,
    E: 'static,
{
    /// The wrapped function from environment to success-or-error.
    /// Uses Rc so the computation can be cloned for `flat_map`.
    run_function: Rc<dyn Fn(R) -> Result<A, E>>,
}

impl<R, A, E> ReaderResult<R, A, E>
where
    R: 'static,
    A: 'static,
    E: 'static,
{
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a new `ReaderResult` from a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let reader: ReaderResult<i32, i32, String> =
    ///     ReaderResult::new(|environment| Ok(environment * 2));
    /// assert_eq!(reader.run(21), Ok(42));
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> Result<A, E> + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation with the given environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let reader: ReaderResult<i32, i32, String> =
    ///     ReaderResult::new(|environment| Ok(environment + 1));
    /// assert_eq!(reader.run(41), Ok(42));
    /// // A ReaderResult can be run any number of times
    /// assert_eq!(reader.run(0), Ok(1));
    /// ```
    pub fn run(&self, environment: R) -> Result<A, E> {
        (self.run_function)(environment)
    }

    /// Creates an environment-independent success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let reader: ReaderResult<i32, &str, String> = ReaderResult::ok("constant");
    /// assert_eq!(reader.run(0), Ok("constant"));
    /// assert_eq!(reader.run(999), Ok("constant"));
    /// ```
    pub fn ok(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| Ok(value.clone()))
    }

    /// Alias for [`ReaderResult::ok`]; the applicative `pure`.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::ok(value)
    }

    /// Creates an environment-independent failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let reader: ReaderResult<i32, i32, &str> = ReaderResult::err("always fails");
    /// assert_eq!(reader.run(0), Err("always fails"));
    /// ```
    pub fn err(error: E) -> Self
    where
        E: Clone,
    {
        Self::new(move |_| Err(error.clone()))
    }

    /// Lifts a plain `Result` into a `ReaderResult` that ignores its
    /// environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let lifted: ReaderResult<String, i32, String> = ReaderResult::lift(Ok(3));
    /// assert_eq!(lifted.run("ignored".to_string()), Ok(3));
    /// ```
    pub fn lift(result: Result<A, E>) -> Self
    where
        A: Clone,
        E: Clone,
    {
        Self::new(move |_| result.clone())
    }

    /// Lifts an infallible `Reader` into the error-carrying form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::{Reader, ReaderResult};
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// let lifted: ReaderResult<i32, i32, String> = ReaderResult::from_reader(reader);
    /// assert_eq!(lifted.run(21), Ok(42));
    /// ```
    pub fn from_reader(reader: Reader<R, A>) -> Self {
        Self::new(move |environment| Ok(reader.run(environment)))
    }

    /// Creates a computation that projects a value from the environment.
    ///
    /// The projection cannot fail; use [`ReaderResult::asks_result`] for a
    /// fallible one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// #[derive(Clone)]
    /// struct Limits { maximum: u32 }
    ///
    /// let reader: ReaderResult<Limits, u32, String> =
    ///     ReaderResult::asks(|limits: Limits| limits.maximum);
    /// assert_eq!(reader.run(Limits { maximum: 64 }), Ok(64));
    /// ```
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(move |environment| Ok(projection(environment)))
    }

    /// Creates a computation from a fallible environment projection.
    pub fn asks_result<F>(projection: F) -> Self
    where
        F: Fn(R) -> Result<A, E> + 'static,
    {
        Self::new(projection)
    }

    // =========================================================================
    // Functor / Bifunctor
    // =========================================================================

    /// Maps a function over the success value.
    ///
    /// Failures pass through with the function never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let reader: ReaderResult<i32, i32, String> = ReaderResult::ask();
    /// assert_eq!(reader.fmap(|value| value * 2).run(21), Ok(42));
    /// ```
    pub fn fmap<B, F>(self, function: F) -> ReaderResult<R, B, E>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_function;
        ReaderResult::new(move |environment| (original)(environment).map(&function))
    }

    /// Maps a function over the error value.
    ///
    /// Successes pass through with the function never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let reader: ReaderResult<i32, i32, String> = ReaderResult::err("raw".to_string());
    /// let decorated = reader.map_err(|error| format!("stage one: {error}"));
    /// assert_eq!(decorated.run(0), Err("stage one: raw".to_string()));
    /// ```
    pub fn map_err<E2, F>(self, function: F) -> ReaderResult<R, A, E2>
    where
        F: Fn(E) -> E2 + 'static,
        E2: 'static,
    {
        let original = self.run_function;
        ReaderResult::new(move |environment| (original)(environment).map_err(&function))
    }

    /// Maps both channels at once.
    pub fn bimap<B, E2, FA, FE>(self, on_error: FE, on_success: FA) -> ReaderResult<R, B, E2>
    where
        FA: Fn(A) -> B + 'static,
        FE: Fn(E) -> E2 + 'static,
        B: 'static,
        E2: 'static,
    {
        let original = self.run_function;
        ReaderResult::new(move |environment| match (original)(environment) {
            Ok(value) => Ok(on_success(value)),
            Err(error) => Err(on_error(error)),
        })
    }

    // =========================================================================
    // Monad
    // =========================================================================

    /// Chains this computation with a function producing another one.
    ///
    /// On success the continuation runs under the *same* environment; on
    /// failure it is never invoked and the error short-circuits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let reader: ReaderResult<i32, i32, String> = ReaderResult::ask();
    /// let chained = reader.flat_map(|value| {
    ///     ReaderResult::new(move |environment: i32| Ok(value + environment))
    /// });
    /// assert_eq!(chained.run(10), Ok(20)); // 10 + 10
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> ReaderResult<R, B, E>
    where
        F: Fn(A) -> ReaderResult<R, B, E> + 'static,
        B: 'static,
        R: Clone,
    {
        let original = self.run_function;
        ReaderResult::new(move |environment: R| {
            (original)(environment.clone()).and_then(|value| function(value).run(environment))
        })
    }

    /// Alias for `flat_map` matching Rust's naming conventions.
    pub fn and_then<B, F>(self, function: F) -> ReaderResult<R, B, E>
    where
        F: Fn(A) -> ReaderResult<R, B, E> + 'static,
        B: 'static,
        R: Clone,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first success value.
    ///
    /// The first computation's failure still short-circuits.
    #[must_use]
    pub fn then<B>(self, next: ReaderResult<R, B, E>) -> ReaderResult<R, B, E>
    where
        B: 'static,
        R: Clone,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Chains a function returning a plain `Result`.
    ///
    /// Saves wrapping environment-independent failable steps in a full
    /// `ReaderResult`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let reader: ReaderResult<&str, &str, String> = ReaderResult::ask();
    /// let parsed = reader.chain_result(|raw: &str| {
    ///     raw.parse::<i32>().map_err(|_| format!("not a number: {raw}"))
    /// });
    /// assert_eq!(parsed.run("42"), Ok(42));
    /// assert_eq!(parsed.run("x"), Err("not a number: x".to_string()));
    /// ```
    pub fn chain_result<B, F>(self, function: F) -> ReaderResult<R, B, E>
    where
        F: Fn(A) -> Result<B, E> + 'static,
        B: 'static,
    {
        let original = self.run_function;
        ReaderResult::new(move |environment| (original)(environment).and_then(&function))
    }

    /// Chains a function returning an `Option`, supplying the error for
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let reader: ReaderResult<Vec<i32>, Vec<i32>, String> = ReaderResult::ask();
    /// let first = reader.chain_option(
    ///     |items: Vec<i32>| items.first().copied(),
    ///     || "empty input".to_string(),
    /// );
    /// assert_eq!(first.run(vec![7, 8]), Ok(7));
    /// assert_eq!(first.run(vec![]), Err("empty input".to_string()));
    /// ```
    pub fn chain_option<B, F, G>(self, function: F, on_none: G) -> ReaderResult<R, B, E>
    where
        F: Fn(A) -> Option<B> + 'static,
        G: Fn() -> E + 'static,
        B: 'static,
    {
        let original = self.run_function;
        ReaderResult::new(move |environment| {
            (original)(environment)
                .and_then(|value| function(value).map_or_else(|| Err(on_none()), Ok))
        })
    }

    // =========================================================================
    // Applicative
    // =========================================================================

    /// Combines two computations using a binary function.
    ///
    /// Both sides run against the same environment, left side first; the
    /// first failure encountered wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let first: ReaderResult<i32, i32, String> = ReaderResult::ask();
    /// let second: ReaderResult<i32, i32, String> = ReaderResult::asks(|environment: i32| environment * 2);
    /// assert_eq!(first.map2(second, |a, b| a + b).run(10), Ok(30));
    /// ```
    pub fn map2<B, C, F>(self, other: ReaderResult<R, B, E>, function: F) -> ReaderResult<R, C, E>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
        R: Clone,
    {
        let self_function = self.run_function;
        let other_function = other.run_function;
        ReaderResult::new(move |environment: R| {
            let a = (self_function)(environment.clone())?;
            let b = (other_function)(environment)?;
            Ok(function(a, b))
        })
    }

    /// Combines three computations using a ternary function.
    pub fn map3<B, C, D, F>(
        self,
        second: ReaderResult<R, B, E>,
        third: ReaderResult<R, C, E>,
        function: F,
    ) -> ReaderResult<R, D, E>
    where
        F: Fn(A, B, C) -> D + 'static,
        B: 'static,
        C: 'static,
        D: 'static,
        R: Clone,
    {
        let self_function = self.run_function;
        let second_function = second.run_function;
        let third_function = third.run_function;
        ReaderResult::new(move |environment: R| {
            let a = (self_function)(environment.clone())?;
            let b = (second_function)(environment.clone())?;
            let c = (third_function)(environment)?;
            Ok(function(a, b, c))
        })
    }

    /// Combines two computations into a tuple.
    #[must_use]
    pub fn product<B>(self, other: ReaderResult<R, B, E>) -> ReaderResult<R, (A, B), E>
    where
        B: 'static,
        R: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a wrapped function to a wrapped value.
    ///
    /// The function side runs first, then the value side, both against the
    /// same environment. On a double failure the function side's error is
    /// reported; the value side is not evaluated once the function side
    /// has failed. Use [`ReaderResult::apply_validated`] to evaluate both
    /// sides and accumulate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let function: ReaderResult<i32, fn(i32) -> i32, String> = ReaderResult::ok(|x| x + 1);
    /// let value: ReaderResult<i32, i32, String> = ReaderResult::ask();
    /// assert_eq!(function.apply(value).run(41), Ok(42));
    /// ```
    #[must_use]
    pub fn apply<B, Output>(self, other: ReaderResult<R, B, E>) -> ReaderResult<R, Output, E>
    where
        A: Fn(B) -> Output + 'static,
        B: 'static,
        Output: 'static,
        R: Clone,
    {
        self.map2(other, |function, value| function(value))
    }

    /// Applies a wrapped function to a wrapped value, accumulating errors.
    ///
    /// Both sides always run. On a double failure the errors combine
    /// through the `Semigroup` instance, function error first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let function: ReaderResult<(), fn(i32) -> i32, String> =
    ///     ReaderResult::err("invalid function; ".to_string());
    /// let value: ReaderResult<(), i32, String> =
    ///     ReaderResult::err("invalid value".to_string());
    ///
    /// assert_eq!(
    ///     function.apply_validated(value).run(()),
    ///     Err("invalid function; invalid value".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn apply_validated<B, Output>(
        self,
        other: ReaderResult<R, B, E>,
    ) -> ReaderResult<R, Output, E>
    where
        A: Fn(B) -> Output + 'static,
        B: 'static,
        Output: 'static,
        E: Semigroup,
        R: Clone,
    {
        let function_side = self.run_function;
        let value_side = other.run_function;
        ReaderResult::new(move |environment: R| {
            let function = (function_side)(environment.clone());
            let value = (value_side)(environment);
            match (function, value) {
                (Ok(function), Ok(value)) => Ok(function(value)),
                (Err(function_error), Err(value_error)) => {
                    Err(function_error.combine(value_error))
                }
                (Err(function_error), Ok(_)) => Err(function_error),
                (Ok(_), Err(value_error)) => Err(value_error),
            }
        })
    }

    // =========================================================================
    // Environment
    // =========================================================================

    /// Adapts this computation to run under a different environment type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// #[derive(Clone)]
    /// struct Wide { narrow: i32 }
    ///
    /// let narrow: ReaderResult<i32, i32, String> = ReaderResult::ask();
    /// let wide: ReaderResult<Wide, i32, String> = narrow.contramap(|wide: Wide| wide.narrow);
    /// assert_eq!(wide.run(Wide { narrow: 5 }), Ok(5));
    /// ```
    pub fn contramap<R2, F>(self, adapter: F) -> ReaderResult<R2, A, E>
    where
        F: Fn(R2) -> R + 'static,
        R2: 'static,
    {
        let original = self.run_function;
        ReaderResult::new(move |environment| (original)(adapter(environment)))
    }

    /// Runs a computation under a modified environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let reader: ReaderResult<i32, i32, String> =
    ///     ReaderResult::asks(|environment: i32| environment * 2);
    /// let adjusted = ReaderResult::local(|environment| environment + 10, reader);
    /// assert_eq!(adjusted.run(5), Ok(30)); // (5 + 10) * 2
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        let computation_function = computation.run_function;
        Self::new(move |environment| (computation_function)(modifier(environment)))
    }

    /// Transforms the environment contravariantly and the success value
    /// covariantly in one step.
    ///
    /// Profunctor law: `promap(|r| r, |a| a)` behaves as the identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let reader: ReaderResult<i32, i32, String> = ReaderResult::ask();
    /// let adapted: ReaderResult<String, String, String> = reader.promap(
    ///     |text: String| text.len() as i32,
    ///     |doubled| format!("length * 2 = {}", doubled * 2),
    /// );
    /// assert_eq!(adapted.run("four".to_string()), Ok("length * 2 = 8".to_string()));
    /// ```
    pub fn promap<R2, B, F, G>(self, pre: F, post: G) -> ReaderResult<R2, B, E>
    where
        F: Fn(R2) -> R + 'static,
        G: Fn(A) -> B + 'static,
        R2: 'static,
        B: 'static,
    {
        let original = self.run_function;
        ReaderResult::new(move |environment| (original)(pre(environment)).map(&post))
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the error channel, producing a plain `Reader`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let reader: ReaderResult<i32, i32, String> = ReaderResult::err("broken".to_string());
    /// let folded = reader.fold(|error| format!("failed: {error}"), |value| format!("got {value}"));
    /// assert_eq!(folded.run(0), "failed: broken");
    /// ```
    pub fn fold<B, FE, FA>(self, on_error: FE, on_success: FA) -> Reader<R, B>
    where
        FE: Fn(E) -> B + 'static,
        FA: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_function;
        Reader::new(move |environment| match (original)(environment) {
            Ok(value) => on_success(value),
            Err(error) => on_error(error),
        })
    }

    /// Recovers from failure with a value computed from the error,
    /// producing a plain `Reader`.
    pub fn get_or_else<F>(self, on_error: F) -> Reader<R, A>
    where
        F: Fn(E) -> A + 'static,
    {
        let original = self.run_function;
        Reader::new(move |environment| (original)(environment).unwrap_or_else(&on_error))
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// On failure, substitutes an alternative computation built from the
    /// error; successes pass through.
    ///
    /// The alternative runs under the same environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let flaky: ReaderResult<i32, i32, String> = ReaderResult::err("miss".to_string());
    /// let recovered = flaky.or_else(|_| ReaderResult::ask());
    /// assert_eq!(recovered.run(7), Ok(7));
    /// ```
    pub fn or_else<F>(self, on_error: F) -> Self
    where
        F: Fn(E) -> Self + 'static,
        R: Clone,
    {
        let original = self.run_function;
        Self::new(move |environment: R| match (original)(environment.clone()) {
            Ok(value) => Ok(value),
            Err(error) => on_error(error).run(environment),
        })
    }

    /// Tries this computation; on failure evaluates the lazily constructed
    /// fallback against the same environment.
    ///
    /// This is a single fallback attempt, not a retry loop: the fallback's
    /// outcome, success or failure, is final.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let primary: ReaderResult<i32, i32, String> = ReaderResult::err("primary down".to_string());
    /// let with_fallback = primary.alt(|| ReaderResult::ok(0));
    /// assert_eq!(with_fallback.run(1), Ok(0));
    /// ```
    pub fn alt<F>(self, fallback: F) -> Self
    where
        F: Fn() -> Self + 'static,
        R: Clone,
    {
        self.or_else(move |_| fallback())
    }

    /// Keeps a success value only if it satisfies the predicate.
    ///
    /// A success failing the predicate becomes a failure built by
    /// `on_false`; failures pass through with the predicate never
    /// evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let reader: ReaderResult<i32, i32, String> = ReaderResult::ask();
    /// let positive = reader.filter_or_else(|n| *n > 0, |n| format!("{n} is not positive"));
    /// assert_eq!(positive.run(3), Ok(3));
    /// assert_eq!(positive.run(-2), Err("-2 is not positive".to_string()));
    /// ```
    pub fn filter_or_else<P, F>(self, predicate: P, on_false: F) -> Self
    where
        P: Fn(&A) -> bool + 'static,
        F: Fn(A) -> E + 'static,
    {
        let original = self.run_function;
        Self::new(move |environment| match (original)(environment) {
            Ok(value) => {
                if predicate(&value) {
                    Ok(value)
                } else {
                    Err(on_false(value))
                }
            }
            Err(error) => Err(error),
        })
    }

    // =========================================================================
    // Resource Management
    // =========================================================================

    /// Acquires a resource, uses it, and always releases it.
    ///
    /// `release` is invoked exactly once with the resource and the outcome
    /// of `use_function`, whether or not that outcome was a success. The
    /// final result is:
    ///
    /// - `use_function`'s error if it failed (a release failure cannot
    ///   mask it),
    /// - otherwise `release`'s error if releasing failed,
    /// - otherwise `use_function`'s success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let acquire: ReaderResult<(), i32, String> = ReaderResult::ok(7);
    /// let bracketed = ReaderResult::bracket(
    ///     acquire,
    ///     |resource| ReaderResult::ok(resource * 2),
    ///     |_resource, _outcome| ReaderResult::ok(()),
    /// );
    /// assert_eq!(bracketed.run(()), Ok(14));
    /// ```
    pub fn bracket<B, C, UseF, ReleaseF>(
        acquire: Self,
        use_function: UseF,
        release: ReleaseF,
    ) -> ReaderResult<R, B, E>
    where
        A: Clone,
        UseF: Fn(A) -> ReaderResult<R, B, E> + 'static,
        ReleaseF: Fn(A, Result<&B, &E>) -> ReaderResult<R, C, E> + 'static,
        B: 'static,
        C: 'static,
        R: Clone,
    {
        let acquire_function = acquire.run_function;
        ReaderResult::new(move |environment: R| {
            let resource = (acquire_function)(environment.clone())?;
            let used = use_function(resource.clone()).run(environment.clone());
            let released = release(resource, used.as_ref()).run(environment);
            match used {
                Err(use_error) => Err(use_error),
                Ok(value) => match released {
                    Err(release_error) => Err(release_error),
                    Ok(_) => Ok(value),
                },
            }
        })
    }

    // =========================================================================
    // Monoid Builders
    // =========================================================================

    /// First-success-wins combination.
    ///
    /// Runs `first`; on success that value is the result and `second`
    /// never runs. On failure `second` runs against the same environment
    /// and its outcome, success or failure, is final. Associative, with
    /// any always-failing computation as identity on the success channel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let miss: ReaderResult<(), i32, String> = ReaderResult::err("miss".to_string());
    /// let hit: ReaderResult<(), i32, String> = ReaderResult::ok(1);
    /// assert_eq!(ReaderResult::combine_alt(miss, hit).run(()), Ok(1));
    /// ```
    pub fn combine_alt(first: Self, second: Self) -> Self
    where
        R: Clone,
    {
        let first_function = first.run_function;
        let second_function = second.run_function;
        Self::new(move |environment: R| match (first_function)(environment.clone()) {
            Ok(value) => Ok(value),
            Err(_) => (second_function)(environment),
        })
    }

    /// Both-must-succeed combination.
    ///
    /// Runs both computations against the same environment. Two successes
    /// combine their values through `A`'s `Semigroup`; failures accumulate
    /// through `E`'s, first computation's error first. Associative, with
    /// `ok(A::empty())` as identity when `A` is a `Monoid`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let first: ReaderResult<(), String, String> = ReaderResult::ok("ab".to_string());
    /// let second: ReaderResult<(), String, String> = ReaderResult::ok("cd".to_string());
    /// assert_eq!(
    ///     ReaderResult::combine_validated(first, second).run(()),
    ///     Ok("abcd".to_string())
    /// );
    /// ```
    pub fn combine_validated(first: Self, second: Self) -> Self
    where
        A: Semigroup,
        E: Semigroup,
        R: Clone,
    {
        let first_function = first.run_function;
        let second_function = second.run_function;
        Self::new(move |environment: R| {
            let first_outcome = (first_function)(environment.clone());
            let second_outcome = (second_function)(environment);
            match (first_outcome, second_outcome) {
                (Ok(left), Ok(right)) => Ok(left.combine(right)),
                (Err(left), Err(right)) => Err(left.combine(right)),
                (Err(left), Ok(_)) => Err(left),
                (Ok(_), Err(right)) => Err(right),
            }
        })
    }
}

// =============================================================================
// Environment Retrieval
// =============================================================================

impl<Env, E> ReaderResult<Env, Env, E>
where
    Env: Clone + 'static,
    E: 'static,
{
    /// Creates a computation that succeeds with the entire environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    ///
    /// let reader: ReaderResult<i32, i32, String> = ReaderResult::ask();
    /// assert_eq!(reader.run(42), Ok(42));
    /// ```
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| Ok(environment))
    }
}

// =============================================================================
// Environment Nesting
// =============================================================================

impl<R1, R2, A, E> ReaderResult<R1, Reader<R2, A>, E>
where
    R1: 'static,
    R2: Clone + 'static,
    A: 'static,
    E: 'static,
{
    /// Swaps which environment is applied first.
    ///
    /// A computation that needs `R1` to produce a value still waiting on
    /// `R2` becomes a computation that takes `R2` first. Error propagation
    /// from the outer layer is preserved: if the original fails under
    /// `R1`, the swapped form fails under the same `R1` regardless of the
    /// `R2` supplied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::{Reader, ReaderResult};
    ///
    /// let nested: ReaderResult<i32, Reader<String, String>, String> =
    ///     ReaderResult::asks(|outer: i32| {
    ///         Reader::new(move |inner: String| format!("{inner}-{outer}"))
    ///     });
    ///
    /// let swapped = nested.sequence_reader();
    /// let inner_first = swapped.run("tag".to_string());
    /// assert_eq!(inner_first.run(7), Ok("tag-7".to_string()));
    /// ```
    pub fn sequence_reader(self) -> Reader<R2, ReaderResult<R1, A, E>> {
        let original = self.run_function;
        Reader::new(move |inner_environment: R2| {
            let original = Rc::clone(&original);
            ReaderResult::new(move |outer_environment: R1| {
                (original)(outer_environment)
                    .map(|value_reader| value_reader.run(inner_environment.clone()))
            })
        })
    }
}

impl<R, A, E> ReaderResult<R, A, E>
where
    R: 'static,
    A: 'static,
    E: 'static,
{
    /// Maps each success value to an inner `Reader`, then swaps the
    /// environments as in [`ReaderResult::sequence_reader`].
    pub fn traverse_reader<R2, B, F>(self, function: F) -> Reader<R2, ReaderResult<R, B, E>>
    where
        F: Fn(A) -> Reader<R2, B> + 'static,
        R2: Clone + 'static,
        B: 'static,
    {
        self.fmap(function).sequence_reader()
    }
}

// =============================================================================
// Tuple Sequencing
// =============================================================================

/// Combines two independent computations into a tuple.
///
/// Left-to-right evaluation under one shared environment; the first
/// failure wins and later computations never run.
///
/// # Examples
///
/// ```rust
/// use kleisli::effect::{ReaderResult, sequence_t2};
///
/// let first: ReaderResult<i32, i32, String> = ReaderResult::ask();
/// let second: ReaderResult<i32, String, String> =
///     ReaderResult::asks(|environment: i32| environment.to_string());
///
/// assert_eq!(sequence_t2(first, second).run(3), Ok((3, "3".to_string())));
/// ```
pub fn sequence_t2<R, A, B, E>(
    first: ReaderResult<R, A, E>,
    second: ReaderResult<R, B, E>,
) -> ReaderResult<R, (A, B), E>
where
    R: Clone + 'static,
    A: 'static,
    B: 'static,
    E: 'static,
{
    first.product(second)
}

/// Combines three independent computations into a tuple, first failure
/// wins.
pub fn sequence_t3<R, A, B, C, E>(
    first: ReaderResult<R, A, E>,
    second: ReaderResult<R, B, E>,
    third: ReaderResult<R, C, E>,
) -> ReaderResult<R, (A, B, C), E>
where
    R: Clone + 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    E: 'static,
{
    first.map3(second, third, |a, b, c| (a, b, c))
}

/// Combines four independent computations into a tuple, first failure
/// wins.
pub fn sequence_t4<R, A, B, C, D, E>(
    first: ReaderResult<R, A, E>,
    second: ReaderResult<R, B, E>,
    third: ReaderResult<R, C, E>,
    fourth: ReaderResult<R, D, E>,
) -> ReaderResult<R, (A, B, C, D), E>
where
    R: Clone + 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
    E: 'static,
{
    sequence_t3(first, second, third)
        .map2(fourth, |(a, b, c), d| (a, b, c, d))
}

// =============================================================================
// Collection Traversal
// =============================================================================

/// Applies a failable, environment-reading function to each element.
///
/// All steps observe the same environment, left to right; the first
/// failure is returned and the remaining elements are never processed.
///
/// # Examples
///
/// ```rust
/// use kleisli::effect::{ReaderResult, traverse_vec};
///
/// let scaled = traverse_vec(vec![1, 2, 3], |n| {
///     ReaderResult::<i32, i32, String>::asks(move |factor: i32| n * factor)
/// });
/// assert_eq!(scaled.run(10), Ok(vec![10, 20, 30]));
/// ```
pub fn traverse_vec<R, A, B, E, F>(items: Vec<A>, function: F) -> ReaderResult<R, Vec<B>, E>
where
    F: Fn(A) -> ReaderResult<R, B, E> + 'static,
    A: Clone + 'static,
    B: 'static,
    E: 'static,
    R: Clone + 'static,
{
    ReaderResult::new(move |environment: R| {
        let mut collected = Vec::with_capacity(items.len());
        for item in items.clone() {
            collected.push(function(item).run(environment.clone())?);
        }
        Ok(collected)
    })
}

/// Collapses a vector of computations into a computation of a vector.
///
/// Left to right under one shared environment; first failure wins.
pub fn sequence_vec<R, A, E>(computations: Vec<ReaderResult<R, A, E>>) -> ReaderResult<R, Vec<A>, E>
where
    R: Clone + 'static,
    A: 'static,
    E: 'static,
{
    ReaderResult::new(move |environment: R| {
        let mut collected = Vec::with_capacity(computations.len());
        for computation in &computations {
            collected.push(computation.run(environment.clone())?);
        }
        Ok(collected)
    })
}

// =============================================================================
// Kleisli Composition
// =============================================================================

/// Composes two bind-compatible steps into one.
///
/// A "Kleisli arrow" here is any `Fn(A) -> ReaderResult<R, B, E>`; this
/// glues two of them in sequence, short-circuiting on the first failure.
///
/// # Examples
///
/// ```rust
/// use kleisli::effect::{ReaderResult, compose_kleisli};
///
/// let parse = |raw: &str| {
///     ReaderResult::<(), i32, String>::lift(
///         raw.parse::<i32>().map_err(|_| format!("bad number: {raw}")),
///     )
/// };
/// let validate = |n: i32| {
///     ReaderResult::<(), i32, String>::lift(
///         if n > 0 { Ok(n) } else { Err(format!("{n} is not positive")) },
///     )
/// };
///
/// let pipeline = compose_kleisli(parse, validate);
/// assert_eq!(pipeline("42").run(()), Ok(42));
/// assert_eq!(pipeline("-1").run(()), Err("-1 is not positive".to_string()));
/// ```
pub fn compose_kleisli<R, A, B, C, E, F, G>(
    first: F,
    second: G,
) -> impl Fn(A) -> ReaderResult<R, C, E>
where
    F: Fn(A) -> ReaderResult<R, B, E>,
    G: Fn(B) -> ReaderResult<R, C, E> + Clone + 'static,
    R: Clone + 'static,
    B: 'static,
    C: 'static,
    E: 'static,
{
    move |value: A| first(value).flat_map(second.clone())
}

// =============================================================================
// Clone Implementation
// =============================================================================

impl<R, A, E> Clone for ReaderResult<R, A, E>
where
    R: 'static,
    A: 'static,
    E: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<R, A, E> std::fmt::Display for ReaderResult<R, A, E>
where
    R: 'static,
    A: 'static,
    E: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<ReaderResult>")
    }
}
