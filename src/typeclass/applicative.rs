//! Applicative type class - combining independent computations.
//!
//! An `Applicative` extends `Functor` with the ability to lift plain values
//! into the context (`pure`) and to combine several independent contextual
//! values (`map2`, `map3`, `apply`).
//!
//! For `Result`, the combination rule on a double failure is deliberate:
//! the *function* side's error wins. The error-accumulating alternative
//! lives in [`crate::control::ap_validated`], which needs a `Semigroup` on
//! the error type and is therefore not part of this trait.
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy:
//!
//! - **Identity**: `pure(|x| x).apply(v) == v`
//! - **Homomorphism**: `pure(f).apply(pure(x)) == pure(f(x))`
//! - **Interchange**: `u.apply(pure(y)) == pure(|f| f(y)).apply(u)`
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Applicative;
//!
//! let width: Result<u32, String> = Ok(3);
//! let height: Result<u32, String> = Ok(4);
//! assert_eq!(width.map2(height, |w, h| w * h), Ok(12));
//! ```

use super::functor::Functor;

/// A type class for contexts supporting lifting and independent combination.
///
/// # Laws
///
/// - **Identity**: `pure(|x| x).apply(v) == v`
/// - **Homomorphism**: `pure(f).apply(pure(x)) == pure(f(x))`
/// - **Interchange**: `u.apply(pure(y)) == pure(|f| f(y)).apply(u)`
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either side is a failure (in the sense appropriate to the
    /// context), the combination fails; for `Result` the left (function
    /// side in `apply` terms) failure takes precedence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
    /// assert_eq!(Some(1).map2(None::<i32>, |x, y| x + y), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    ///
    /// let sum = Some(1).map3(Some(2), Some(3), |x, y, z| x + y + z);
    /// assert_eq!(sum, Some(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    ///
    /// Equivalent to `map2(other, |a, b| (a, b))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product(Some("hello")), Some((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates two applicatives and keeps the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product_left(Some(2)), Some(1));
    /// assert_eq!(Some(1).product_left(None::<i32>), None);
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates two applicatives and keeps the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product_right(Some(2)), Some(2));
    /// assert_eq!(None::<i32>.product_right(Some(2)), None);
    /// ```
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// Available when `Self` contains a function. On a double failure the
    /// function side's failure wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// assert_eq!(function.apply(Some(5)), Some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Some(function), Some(value)) => Some(function(value)),
            _ => None,
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) => Err(error),
            (_, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Result<B, E>,
        third: Result<C, E>,
        function: F,
    ) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Ok(a), Ok(b), Ok(c)) => Ok(function(a, b, c)),
            (Err(error), _, _) => Err(error),
            (_, Err(error), _) => Err(error),
            (_, _, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Ok(function), Ok(value)) => Ok(function(value)),
            (Err(error), _) => Err(error),
            (_, Err(error)) => Err(error),
        }
    }
}

// =============================================================================
// Box<T> Implementation
// =============================================================================

impl<T> Applicative for Box<T> {
    #[inline]
    fn pure<B>(value: B) -> Box<B> {
        Box::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Box<B>, function: F) -> Box<C>
    where
        F: FnOnce(T, B) -> C,
    {
        Box::new(function(*self, *other))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Box<B>, third: Box<C>, function: F) -> Box<D>
    where
        F: FnOnce(T, B, C) -> D,
    {
        Box::new(function(*self, *second, *third))
    }

    #[inline]
    fn apply<B, Output>(self, other: Box<B>) -> Box<Output>
    where
        T: FnOnce(B) -> Output,
    {
        Box::new((*self)(*other))
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for super::identity::Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> super::identity::Identity<B> {
        super::identity::Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(
        self,
        other: super::identity::Identity<B>,
        function: F,
    ) -> super::identity::Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        super::identity::Identity(function(self.0, other.0))
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: super::identity::Identity<B>,
        third: super::identity::Identity<C>,
        function: F,
    ) -> super::identity::Identity<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        super::identity::Identity(function(self.0, second.0, third.0))
    }

    #[inline]
    fn apply<B, Output>(self, other: super::identity::Identity<B>) -> super::identity::Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        super::identity::Identity((self.0)(other.0))
    }
}
