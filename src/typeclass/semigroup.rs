//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup if there is an associative operation
//! `combine: (T, T) -> T`. Semigroups are the building block behind error
//! accumulation (`ap_validated` concatenates errors with `combine`) and
//! behind the monoid-valued folds on traversals.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Semigroup;
//!
//! let greeting = String::from("Hello, ").combine(String::from("World!"));
//! assert_eq!(greeting, "Hello, World!");
//!
//! let merged = vec![1, 2].combine(vec![3, 4]);
//! assert_eq!(merged, vec![1, 2, 3, 4]);
//! ```

use std::ops::{Add, Mul};

use super::Identity;
use super::wrappers::{Max, Min, Product, Sum};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Semigroup;
    ///
    /// let joined = String::from("invalid function; ").combine(String::from("invalid value"));
    /// assert_eq!(joined, "invalid function; invalid value");
    /// ```
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both sides and delegates to
    /// `combine`; types can override it when a cheaper path exists.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines all elements of a non-empty iterator, or returns `None`
    /// for an empty one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Semigroup;
    ///
    /// let words = vec![String::from("a"), String::from("b"), String::from("c")];
    /// assert_eq!(String::reduce_all(words), Some(String::from("abc")));
    ///
    /// let nothing: Vec<String> = vec![];
    /// assert_eq!(String::reduce_all(nothing), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
    {
        iterator.into_iter().reduce(Semigroup::combine)
    }
}

// =============================================================================
// Standard Library Instances
// =============================================================================

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `Option` combines by preferring present values and combining when both
/// sides are present.
impl<T: Semigroup> Semigroup for Option<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(left), None) => Some(left),
            (None, right) => right,
        }
    }
}

impl Semigroup for () {
    #[inline]
    fn combine(self, (): Self) -> Self {}
}

impl<T: Semigroup> Semigroup for Identity<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Identity(self.0.combine(other.0))
    }
}

// =============================================================================
// Numeric Wrapper Instances
// =============================================================================

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Sum(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Product(self.0 * other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Max(self.0.max(other.0))
    }
}

impl<A: Ord> Semigroup for Min<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Min(self.0.min(other.0))
    }
}

// =============================================================================
// Tuple Instances
// =============================================================================

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    #[inline]
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    #[inline]
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_combine_concatenates() {
        assert_eq!(
            String::from("foo").combine(String::from("bar")),
            "foobar"
        );
    }

    #[rstest]
    fn vec_combine_appends() {
        assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
    }

    #[rstest]
    #[case(Some(String::from("a")), Some(String::from("b")), Some(String::from("ab")))]
    #[case(Some(String::from("a")), None, Some(String::from("a")))]
    #[case(None, Some(String::from("b")), Some(String::from("b")))]
    #[case(None, None, None)]
    fn option_combine_prefers_present(
        #[case] left: Option<String>,
        #[case] right: Option<String>,
        #[case] expected: Option<String>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn combine_ref_leaves_operands_usable() {
        let left = String::from("left");
        let right = String::from("right");
        assert_eq!(left.combine_ref(&right), "leftright");
        assert_eq!(left, "left");
        assert_eq!(right, "right");
    }

    #[rstest]
    fn reduce_all_empty_is_none() {
        let empty: Vec<String> = vec![];
        assert_eq!(String::reduce_all(empty), None);
    }

    #[rstest]
    fn sum_and_product_wrappers_combine_numerically() {
        assert_eq!(Sum(2).combine(Sum(3)), Sum(5));
        assert_eq!(Product(2).combine(Product(3)), Product(6));
    }

    #[rstest]
    fn max_and_min_wrappers_pick_extremes() {
        assert_eq!(Max(2).combine(Max(9)), Max(9));
        assert_eq!(Min(2).combine(Min(9)), Min(2));
    }

    // Associativity law on a few sampled triples.
    #[rstest]
    #[case("a", "b", "c")]
    #[case("", "middle", "")]
    fn string_combine_is_associative(#[case] a: &str, #[case] b: &str, #[case] c: &str) {
        let (a, b, c) = (a.to_string(), b.to_string(), c.to_string());
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        assert_eq!(left, right);
    }

    #[rstest]
    fn tuple_combine_is_componentwise() {
        let left = (String::from("x"), vec![1]);
        let right = (String::from("y"), vec![2]);
        assert_eq!(left.combine(right), (String::from("xy"), vec![1, 2]));
    }
}
