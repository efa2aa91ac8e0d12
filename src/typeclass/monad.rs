//! Monad type class - sequencing dependent computations.
//!
//! A `Monad` extends `Applicative` with `flat_map`, which feeds the result
//! of one computation into the next. The defining behavioral guarantee is
//! short-circuiting: once a computation has failed, no later stage runs and
//! the original failure is returned unchanged.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy:
//!
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Monad;
//!
//! fn half(n: i32) -> Result<i32, String> {
//!     if n % 2 == 0 { Ok(n / 2) } else { Err(format!("{n} is odd")) }
//! }
//!
//! assert_eq!(Ok(8).flat_map(half), Ok(4));
//! assert_eq!(Ok(8).flat_map(half).flat_map(half), Ok(2));
//! assert_eq!(Ok(7).flat_map(half), Err("7 is odd".to_string()));
//! ```

use super::applicative::Applicative;

/// A type class for sequencing computations where each step depends on the
/// previous one's result.
///
/// # Laws
///
/// - **Left Identity**: `pure(a).flat_map(f) == f(a)`
/// - **Right Identity**: `m.flat_map(pure) == m`
/// - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub trait Monad: Applicative {
    /// Applies a function returning a monadic value and flattens the result.
    ///
    /// On a failure value the function is never invoked and the failure is
    /// returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Monad;
    ///
    /// let x = Some(5);
    /// assert_eq!(x.flat_map(|n| Some(n * 2)), Some(10));
    ///
    /// let y = Some(15);
    /// assert_eq!(y.flat_map(|n| if n > 10 { None } else { Some(n) }), None);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` matching Rust's naming conventions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Monad;
    ///
    /// let x: Result<i32, ()> = Ok(5);
    /// assert_eq!(x.and_then(|n| Ok(n * 2)), Ok(10));
    /// ```
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic values, discarding the first result.
    ///
    /// The first computation's failure still short-circuits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Monad;
    ///
    /// assert_eq!(Some(1).then(Some("next")), Some("next"));
    /// assert_eq!(None::<i32>.then(Some("next")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.and_then(function)
    }
}

// =============================================================================
// Box<T> Implementation
// =============================================================================

impl<T> Monad for Box<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(T) -> Box<B>,
    {
        function(*self)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for super::identity::Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> super::identity::Identity<B>
    where
        F: FnOnce(A) -> super::identity::Identity<B>,
    {
        function(self.0)
    }
}
