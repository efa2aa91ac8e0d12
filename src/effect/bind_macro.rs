//! bind! macro for do-notation style syntax.
//!
//! The `bind!` macro chains monadic operations in an imperative-looking
//! style, similar to Haskell's do-notation or Scala's for-comprehension.
//! It works with anything that has a `flat_map` method: `Option` and
//! `Result` through the [`crate::typeclass::Monad`] trait (which must be
//! in scope), [`crate::control::Either`], and the inherent methods on
//! [`super::Reader`] and [`super::ReaderResult`].
//!
//! # Syntax
//!
//! - `pattern <= expression;` - bind: extracts the value from a monad
//! - `let pattern = expression;` - pure let binding
//! - `expression` - final expression (already a monad)
//!
//! # Operator Choice: `<=`
//!
//! `<-` is not a valid token sequence in Rust macro patterns; `<=` is,
//! and reads close enough to the conventional bind arrow.
//!
//! # Examples
//!
//! ## Result
//!
//! ```rust
//! use kleisli::bind;
//! use kleisli::typeclass::Monad;
//!
//! let result: Result<i32, String> = bind! {
//!     x <= Ok(5);
//!     y <= Ok(10);
//!     let z = x + y;
//!     Ok(z * 2)
//! };
//! assert_eq!(result, Ok(30));
//! ```
//!
//! ## Short-circuit
//!
//! Once a stage fails, the rest of the block never runs:
//!
//! ```rust
//! use kleisli::bind;
//! use kleisli::typeclass::Monad;
//!
//! let result: Option<i32> = bind! {
//!     x <= Some(5);
//!     y <= None::<i32>;
//!     Some(x + y)
//! };
//! assert_eq!(result, None);
//! ```
//!
//! ## ReaderResult
//!
//! ```rust
//! use kleisli::bind;
//! use kleisli::effect::ReaderResult;
//!
//! let computation: ReaderResult<i32, i32, String> = bind! {
//!     environment <= ReaderResult::ask();
//!     let doubled = environment * 2;
//!     ReaderResult::ok(doubled + 1)
//! };
//! assert_eq!(computation.run(10), Ok(21));
//! ```

#![forbid(unsafe_code)]

/// A macro for monadic do-notation style syntax.
///
/// Expands `pattern <= expression; rest` into
/// `expression.flat_map(move |pattern| { /* rest */ })`, so the failure
/// behavior is exactly the underlying monad's `flat_map`: the first
/// failing stage short-circuits the whole block.
///
/// # Syntax
///
/// ```text
/// bind! {
///     pattern <= monad_expression;    // bind (flat_map)
///     let pattern = expression;       // pure binding
///     monad_expression                // final expression (a monad)
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use kleisli::bind;
/// use kleisli::typeclass::Monad;
///
/// let result = bind! {
///     x <= Some(5);
///     y <= Some(10);
///     Some(x + y)
/// };
/// assert_eq!(result, Some(15));
/// ```
#[macro_export]
macro_rules! bind {
    // ==========================================================================
    // Terminal case: a single expression returned as-is
    // ==========================================================================

    ($result:expr) => {
        $result
    };

    // ==========================================================================
    // Bind operation: pattern <= monad; rest
    // ==========================================================================

    // Identifier pattern
    ($pattern:ident <= $monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |$pattern| {
            $crate::bind!($($rest)+)
        })
    };

    // Tuple pattern
    (($($pattern:tt)*) <= $monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |($($pattern)*)| {
            $crate::bind!($($rest)+)
        })
    };

    // Wildcard pattern
    (_ <= $monad:expr ; $($rest:tt)+) => {
        $monad.flat_map(move |_| {
            $crate::bind!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:pat = $value:expr ; $($rest:tt)+) => {{
        let $pattern = $value;
        $crate::bind!($($rest)+)
    }};
}
