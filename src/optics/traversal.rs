//! Traversal optics for focusing on zero or more elements.
//!
//! A Traversal generalizes Lens and Prism to any number of foci: all
//! elements of a `Vec`, the value inside an `Option`, the `Ok` side of a
//! `Result`. Modification applies a function to every focus; folds
//! summarize the foci through a [`Monoid`].
//!
//! # Laws
//!
//! 1. **Identity**: modifying with the identity function changes nothing.
//!    ```text
//!    traversal.modify_all(source, |x| x) == source
//!    ```
//!
//! 2. **Composition**: two modifications fuse.
//!    ```text
//!    traversal.modify_all(traversal.modify_all(source, f), g)
//!        == traversal.modify_all(source, |x| g(f(x)))
//!    ```
//!
//! # Examples
//!
//! ```
//! use kleisli::optics::{Traversal, VecTraversal};
//!
//! let traversal: VecTraversal<i32> = VecTraversal::new();
//! let doubled = traversal.modify_all(vec![1, 2, 3], |n| n * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

use std::marker::PhantomData;

use crate::typeclass::Monoid;

use super::lens::Lens;
use super::prism::Prism;

/// A Traversal focuses on zero or more elements within a structure.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The element type
///
/// # Laws
///
/// 1. **Identity**: `traversal.modify_all(source, |x| x) == source`
/// 2. **Composition**: `traversal.modify_all(traversal.modify_all(source, f), g)
///    == traversal.modify_all(source, |x| g(f(x)))`
pub trait Traversal<S, A> {
    /// Returns all focused elements.
    fn get_all(&self, source: &S) -> Vec<A>;

    /// Modifies every focused element by applying a function.
    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A;

    /// Sets every focused element to the same value.
    ///
    /// # Example
    ///
    /// ```
    /// use kleisli::optics::{Traversal, VecTraversal};
    ///
    /// let traversal: VecTraversal<i32> = VecTraversal::new();
    /// assert_eq!(traversal.set_all(vec![1, 2, 3], 0), vec![0, 0, 0]);
    /// ```
    fn set_all(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.modify_all(source, |_| value.clone())
    }

    /// Folds all focused elements into a monoid value.
    ///
    /// # Example
    ///
    /// ```
    /// use kleisli::optics::{Traversal, VecTraversal};
    /// use kleisli::typeclass::Sum;
    ///
    /// let traversal: VecTraversal<i32> = VecTraversal::new();
    /// let total = traversal.fold_map(&vec![1, 2, 3], |n| Sum(*n));
    /// assert_eq!(total, Sum(6));
    /// ```
    fn fold_map<M, F>(&self, source: &S, function: F) -> M
    where
        M: Monoid,
        F: FnMut(&A) -> M,
    {
        M::combine_all(self.get_all(source).iter().map(function))
    }

    /// Counts the focused elements.
    fn length(&self, source: &S) -> usize {
        self.get_all(source).len()
    }

    /// Returns `true` when there is no focused element.
    fn is_empty(&self, source: &S) -> bool {
        self.get_all(source).is_empty()
    }

    /// Composes this traversal with another, focusing through both
    /// levels.
    fn compose<B, T>(self, other: T) -> ComposedTraversal<Self, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self, other)
    }
}

/// A traversal over every element of a `Vec`.
pub struct VecTraversal<T> {
    _marker: PhantomData<T>,
}

impl<T> VecTraversal<T> {
    /// Creates a new `VecTraversal`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for VecTraversal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for VecTraversal<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T: Clone> Traversal<Vec<T>, T> for VecTraversal<T> {
    fn get_all(&self, source: &Vec<T>) -> Vec<T> {
        source.clone()
    }

    fn modify_all<F>(&self, source: Vec<T>, function: F) -> Vec<T>
    where
        F: FnMut(T) -> T,
    {
        source.into_iter().map(function).collect()
    }
}

/// A traversal over the value inside an `Option` (zero or one focus).
pub struct OptionTraversal<T> {
    _marker: PhantomData<T>,
}

impl<T> OptionTraversal<T> {
    /// Creates a new `OptionTraversal`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for OptionTraversal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for OptionTraversal<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T: Clone> Traversal<Option<T>, T> for OptionTraversal<T> {
    fn get_all(&self, source: &Option<T>) -> Vec<T> {
        source.iter().cloned().collect()
    }

    fn modify_all<F>(&self, source: Option<T>, function: F) -> Option<T>
    where
        F: FnMut(T) -> T,
    {
        source.map(function)
    }
}

/// A traversal over the success value of a `Result` (zero or one focus).
///
/// Failures are passed through untouched, matching the error-channel
/// behavior everywhere else in the crate.
pub struct ResultTraversal<T, E> {
    _marker: PhantomData<(T, E)>,
}

impl<T, E> ResultTraversal<T, E> {
    /// Creates a new `ResultTraversal`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T, E> Default for ResultTraversal<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for ResultTraversal<T, E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T: Clone, E> Traversal<Result<T, E>, T> for ResultTraversal<T, E> {
    fn get_all(&self, source: &Result<T, E>) -> Vec<T> {
        source.iter().cloned().collect()
    }

    fn modify_all<F>(&self, source: Result<T, E>, function: F) -> Result<T, E>
    where
        F: FnMut(T) -> T,
    {
        source.map(function)
    }
}

/// A Lens viewed as a traversal over exactly one element.
///
/// Produced by [`Lens::to_traversal`].
pub struct LensAsTraversal<L, S, A> {
    lens: L,
    _marker: PhantomData<(S, A)>,
}

impl<L, S, A> LensAsTraversal<L, S, A> {
    /// Creates a new `LensAsTraversal` from a lens.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }
}

impl<S, A, L> Traversal<S, A> for LensAsTraversal<L, S, A>
where
    L: Lens<S, A>,
{
    fn get_all(&self, source: &S) -> Vec<A> {
        vec![self.lens.get(source)]
    }

    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        let mut function = function;
        self.lens.modify(source, |value| function(value))
    }
}

impl<L: Clone, S, A> Clone for LensAsTraversal<L, S, A> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            _marker: PhantomData,
        }
    }
}

/// A Prism viewed as a traversal over zero or one element.
///
/// Produced by [`Prism::to_traversal`].
pub struct PrismAsTraversal<P, S, A> {
    prism: P,
    _marker: PhantomData<(S, A)>,
}

impl<P, S, A> PrismAsTraversal<P, S, A> {
    /// Creates a new `PrismAsTraversal` from a prism.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self {
            prism,
            _marker: PhantomData,
        }
    }
}

impl<S, A, P> Traversal<S, A> for PrismAsTraversal<P, S, A>
where
    P: Prism<S, A>,
    S: Clone,
{
    fn get_all(&self, source: &S) -> Vec<A> {
        self.prism.preview(source).into_iter().collect()
    }

    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        let mut function = function;
        self.prism
            .modify_or_identity(source, |value| function(value))
    }
}

impl<P: Clone, S, A> Clone for PrismAsTraversal<P, S, A> {
    fn clone(&self) -> Self {
        Self {
            prism: self.prism.clone(),
            _marker: PhantomData,
        }
    }
}

/// A composed traversal focusing through two levels.
///
/// # Type Parameters
///
/// - `T1`: The outer traversal (S to A)
/// - `T2`: The inner traversal (A to B)
/// - `A`: The intermediate type
pub struct ComposedTraversal<T1, T2, A> {
    first: T1,
    second: T2,
    _marker: PhantomData<A>,
}

impl<T1, T2, A> ComposedTraversal<T1, T2, A> {
    /// Creates a new `ComposedTraversal` from two traversals.
    #[must_use]
    pub const fn new(first: T1, second: T2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, T1, T2> Traversal<S, B> for ComposedTraversal<T1, T2, A>
where
    T1: Traversal<S, A>,
    T2: Traversal<A, B>,
{
    fn get_all(&self, source: &S) -> Vec<B> {
        self.first
            .get_all(source)
            .iter()
            .flat_map(|intermediate| self.second.get_all(intermediate))
            .collect()
    }

    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(B) -> B,
    {
        let mut function = function;
        self.first.modify_all(source, |intermediate| {
            self.second.modify_all(intermediate, &mut function)
        })
    }
}

impl<T1: Clone, T2: Clone, A> Clone for ComposedTraversal<T1, T2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}
