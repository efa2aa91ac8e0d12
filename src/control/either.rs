//! Either type - a value that can be one of two types.
//!
//! `Either<L, R>` is the tagged union behind "success or failure" in the
//! FP literature: a value is `Left(L)` or `Right(R)`, never both and never
//! neither. By convention `Left` carries the failure and `Right` the
//! success, and all the combinators here are right-biased: they transform
//! the `Right` channel and pass `Left` through untouched.
//!
//! The same invariant is what std's `Result` enforces; `Either` exists as
//! the symmetric, convention-free form of it (nothing about `Left` says
//! "error" at the type level), and the two convert losslessly with
//! [`Either::into_result`] and [`Either::from_result`].
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::Either;
//!
//! let measured: Either<String, u64> = Either::Right(1250);
//!
//! let formatted = measured.fold(
//!     |problem| format!("measurement failed: {problem}"),
//!     |millis| format!("{millis}ms"),
//! );
//! assert_eq!(formatted, "1250ms");
//! ```

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that can be one of two types.
///
/// `Either<L, R>` represents a value that is either `Left(L)` or
/// `Right(R)`. By convention:
/// - `Left` is often used to represent failure or the first alternative
/// - `Right` is often used to represent success or the second alternative
///
/// # Examples
///
/// ```rust
/// use kleisli::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let doubled = success.map_right(|x| x * 2);
/// assert_eq!(doubled, Either::Right(84));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally the failure or first alternative.
    Left(L),
    /// The right variant, conventionally the success or second alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Variant Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(right.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into `Option<L>`, keeping only a `Left` value.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Option<R>`, keeping only a `Right` value.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns the right value, or computes one from the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let missing: Either<String, usize> = Either::Left("missing".to_string());
    /// assert_eq!(missing.right_or_else(|message| message.len()), 7);
    /// ```
    #[inline]
    pub fn right_or_else<F>(self, on_left: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Eliminates the `Either` by handling both variants.
    ///
    /// This is the total pattern match: exactly one of the two functions
    /// runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// let description = value.fold(
    ///     |number| format!("number: {number}"),
    ///     |text| format!("text: {text}"),
    /// );
    /// assert_eq!(description, "text: hello");
    /// ```
    #[inline]
    pub fn fold<T, FL, FR>(self, on_left: FL, on_right: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Swaps the variants: `Left(l)` becomes `Right(l)` and vice versa.
    ///
    /// Swapping twice returns the original value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.swap(), Either::Right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Maps a function over the left value, passing `Right` through.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps a function over the right value, passing `Left` through.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Maps both variants at once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let value: Either<i32, i32> = Either::Left(2);
    /// assert_eq!(value.bimap(|l| l * 10, |r| r + 1), Either::Left(20));
    /// ```
    #[inline]
    pub fn bimap<L2, R2, FL, FR>(self, on_left: FL, on_right: FR) -> Either<L2, R2>
    where
        FL: FnOnce(L) -> L2,
        FR: FnOnce(R) -> R2,
    {
        match self {
            Self::Left(value) => Either::Left(on_left(value)),
            Self::Right(value) => Either::Right(on_right(value)),
        }
    }

    // =========================================================================
    // Result Interop
    // =========================================================================

    /// Converts into a `Result`, mapping `Right` to `Ok` and `Left` to `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let success: Either<String, i32> = Either::Right(1);
    /// assert_eq!(success.into_result(), Ok(1));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(error) => Err(error),
            Self::Right(value) => Ok(value),
        }
    }

    /// Converts from a `Result`, mapping `Ok` to `Right` and `Err` to `Left`.
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        Self::from_result(result)
    }
}

// =============================================================================
// Type Class Instances (right-biased)
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map_right(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Either::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Either::Left(error), _) => Either::Left(error),
            (_, Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Either<L, B>,
        third: Either<L, C>,
        function: F,
    ) -> Either<L, D>
    where
        F: FnOnce(R, B, C) -> D,
    {
        match (self, second, third) {
            (Either::Right(a), Either::Right(b), Either::Right(c)) => {
                Either::Right(function(a, b, c))
            }
            (Either::Left(error), _, _) => Either::Left(error),
            (_, Either::Left(error), _) => Either::Left(error),
            (_, _, Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Either::Right(function), Either::Right(value)) => Either::Right(function(value)),
            (Either::Left(error), _) => Either::Left(error),
            (_, Either::Left(error)) => Either::Left(error),
        }
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => function(value),
        }
    }
}

// A plain-data sum type stays thread-friendly; the closure-backed effect
// types deliberately do not.
static_assertions::assert_impl_all!(Either<String, i32>: Clone, Send, Sync);

// =============================================================================
// Display Implementation
// =============================================================================

impl<L, R> std::fmt::Display for Either<L, R>
where
    L: std::fmt::Display,
    R: std::fmt::Display,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn is_left_and_is_right_report_variant() {
        let left: Either<i32, &str> = Either::Left(1);
        let right: Either<i32, &str> = Either::Right("x");
        assert!(left.is_left() && !left.is_right());
        assert!(right.is_right() && !right.is_left());
    }

    #[rstest]
    fn left_and_right_extract_matching_variant_only() {
        let left: Either<i32, &str> = Either::Left(1);
        assert_eq!(left.left(), Some(1));

        let right: Either<i32, &str> = Either::Right("x");
        assert_eq!(right.left(), None);
        assert_eq!(right.right(), Some("x"));
    }

    #[rstest]
    fn fold_runs_exactly_one_branch() {
        let left_branch = Cell::new(0_u32);
        let right_branch = Cell::new(0_u32);
        let value: Either<i32, i32> = Either::Right(5);

        let folded = value.fold(
            |l| {
                left_branch.set(left_branch.get() + 1);
                l
            },
            |r| {
                right_branch.set(right_branch.get() + 1);
                r * 2
            },
        );

        assert_eq!(folded, 10);
        assert_eq!(left_branch.get(), 0);
        assert_eq!(right_branch.get(), 1);
    }

    #[rstest]
    #[case(Either::Left(1))]
    #[case(Either::Right("x"))]
    fn swap_twice_is_identity(#[case] value: Either<i32, &str>) {
        assert_eq!(value.swap().swap(), value);
    }

    #[rstest]
    fn bimap_touches_only_the_active_variant() {
        let left: Either<i32, i32> = Either::Left(2);
        assert_eq!(left.bimap(|l| l * 10, |r| r + 1), Either::Left(20));

        let right: Either<i32, i32> = Either::Right(2);
        assert_eq!(right.bimap(|l| l * 10, |r| r + 1), Either::Right(3));
    }

    #[rstest]
    fn result_interop_roundtrips() {
        let success: Either<String, i32> = Either::Right(1);
        assert_eq!(Either::from_result(success.clone().into_result()), success);

        let failure: Result<i32, String> = Err("broken".to_string());
        let as_either: Either<String, i32> = failure.clone().into();
        assert_eq!(as_either.into_result(), failure);
    }

    #[rstest]
    fn fmap_transforms_right_channel_only() {
        let right: Either<String, i32> = Either::Right(21);
        assert_eq!(right.fmap(|n| n * 2), Either::Right(42));

        let left: Either<String, i32> = Either::Left("failed".to_string());
        assert_eq!(left.fmap(|n| n * 2), Either::Left("failed".to_string()));
    }

    #[rstest]
    fn flat_map_short_circuits_on_left() {
        let invocations = Cell::new(0_u32);
        let left: Either<&str, i32> = Either::Left("stop");

        let outcome = left.flat_map(|n| {
            invocations.set(invocations.get() + 1);
            Either::<&str, i32>::Right(n + 1)
        });

        assert_eq!(outcome, Either::Left("stop"));
        assert_eq!(invocations.get(), 0);
    }

    #[rstest]
    fn map2_left_error_precedence_on_double_failure() {
        let first: Either<&str, i32> = Either::Left("first");
        let second: Either<&str, i32> = Either::Left("second");
        assert_eq!(first.map2(second, |a, b| a + b), Either::Left("first"));
    }

    #[rstest]
    fn display_shows_variant_and_value() {
        let left: Either<i32, &str> = Either::Left(7);
        assert_eq!(format!("{left}"), "Left(7)");
        let right: Either<i32, &str> = Either::Right("ok");
        assert_eq!(format!("{right}"), "Right(ok)");
    }
}
