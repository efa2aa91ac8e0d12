//! Optional optics for foci that may be absent.
//!
//! An Optional is the meet of Lens and Prism: like a Prism its focus may
//! be missing (`get_option`), like a Lens it can write without
//! constructing a new variant shape from nothing. The canonical way to
//! obtain one is composing a Lens with a Prism
//! ([`crate::optics::Lens::compose_prism`]).
//!
//! # Laws
//!
//! When the focus is present:
//!
//! 1. **GetOptionSet Law**: Putting back what was got changes nothing.
//!    ```text
//!    optional.set(source.clone(), optional.get_option(&source).unwrap()) == source
//!    ```
//!
//! 2. **SetGetOption Law**: Getting what was put yields the put value.
//!    ```text
//!    optional.get_option(&optional.set(source, value)) == Some(value)
//!    ```
//!
//! # Examples
//!
//! ```
//! use kleisli::{lens, prism};
//! use kleisli::optics::{Lens, Optional};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Payment {
//!     Card(String),
//!     Cash,
//! }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Order { payment: Payment }
//!
//! let card_number = lens!(Order, payment).compose_prism(prism!(Payment, Card));
//!
//! let card_order = Order { payment: Payment::Card("4111".to_string()) };
//! assert_eq!(card_number.get_option(&card_order), Some("4111".to_string()));
//!
//! let cash_order = Order { payment: Payment::Cash };
//! assert_eq!(card_number.get_option(&cash_order), None);
//! ```

use std::marker::PhantomData;

use super::lens::Lens;
use super::prism::Prism;

/// An Optional focuses on a value that may or may not be present.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type (possibly absent)
///
/// # Laws
///
/// When the focus is present:
///
/// 1. **GetOptionSet Law**: `optional.set(source.clone(), optional.get_option(&source).unwrap()) == source`
/// 2. **SetGetOption Law**: `optional.get_option(&optional.set(source, value)) == Some(value)`
pub trait Optional<S, A> {
    /// Attempts to get the focused value.
    fn get_option(&self, source: &S) -> Option<A>;

    /// Sets the focused value, returning a new source.
    ///
    /// Whether a write happens when the focus is absent depends on the
    /// concrete optic: a lens-prism composition always writes (the prism
    /// side constructs its variant), while a composition of two Optionals
    /// leaves the source unchanged when the outer focus is missing.
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focused value if present.
    ///
    /// Returns `None` when the focus is absent (the source is consumed
    /// either way; use [`Optional::modify`] to keep it).
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        let value = self.get_option(&source)?;
        Some(self.set(source, function(value)))
    }

    /// Modifies the focused value if present, otherwise returns the
    /// source unchanged.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.get_option(&source) {
            Some(value) => self.set(source, function(value)),
            None => source,
        }
    }

    /// Composes this Optional with another Optional.
    fn compose<B, O>(self, other: O) -> ComposedOptional<Self, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        ComposedOptional::new(self, other)
    }
}

/// An Optional implemented from getter and setter functions.
///
/// Composition ([`Lens::compose_prism`]) is the usual way to obtain an
/// Optional; this constructor covers foci that are easiest to describe
/// directly, like map entries or checked indexing.
///
/// # Example
///
/// ```
/// use kleisli::optics::{FunctionOptional, Optional};
///
/// let second = FunctionOptional::new(
///     |items: &Vec<i32>| items.get(1).copied(),
///     |mut items: Vec<i32>, value| {
///         if items.len() > 1 {
///             items[1] = value;
///         }
///         items
///     },
/// );
///
/// assert_eq!(second.get_option(&vec![1, 2, 3]), Some(2));
/// assert_eq!(second.set(vec![1, 2, 3], 99), vec![1, 99, 3]);
/// assert_eq!(second.get_option(&vec![1]), None);
/// ```
pub struct FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionOptional` from getter and setter functions.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Optional<S, A> for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    fn get_option(&self, source: &S) -> Option<A> {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A> + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

/// A Lens composed with a Prism: focuses into a field, then into a
/// variant of that field.
///
/// Produced by [`Lens::compose_prism`]. `set` always writes: the prism
/// side reviews the value into its variant, replacing whatever variant
/// the field previously held.
pub struct LensPrismOptional<L, P, A> {
    lens: L,
    prism: P,
    _marker: PhantomData<A>,
}

impl<L, P, A> LensPrismOptional<L, P, A> {
    /// Creates a new `LensPrismOptional`.
    #[must_use]
    pub const fn new(lens: L, prism: P) -> Self {
        Self {
            lens,
            prism,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L, P> Optional<S, B> for LensPrismOptional<L, P, A>
where
    L: Lens<S, A>,
    P: Prism<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        let field = self.lens.get(source);
        self.prism.preview(&field)
    }

    fn set(&self, source: S, value: B) -> S {
        self.lens.set(source, self.prism.review(value))
    }
}

impl<L: Clone, P: Clone, A> Clone for LensPrismOptional<L, P, A> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            prism: self.prism.clone(),
            _marker: PhantomData,
        }
    }
}

/// A composed Optional focusing through two Optionals in sequence.
///
/// `set` is a no-op when the outer focus is absent: there is no
/// intermediate value to write into.
pub struct ComposedOptional<O1, O2, A> {
    first: O1,
    second: O2,
    _marker: PhantomData<A>,
}

impl<O1, O2, A> ComposedOptional<O1, O2, A> {
    /// Creates a new `ComposedOptional` from two Optionals.
    #[must_use]
    pub const fn new(first: O1, second: O2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O1, O2> Optional<S, B> for ComposedOptional<O1, O2, A>
where
    O1: Optional<S, A>,
    O2: Optional<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.first
            .get_option(source)
            .and_then(|intermediate| self.second.get_option(&intermediate))
    }

    fn set(&self, source: S, value: B) -> S {
        match self.first.get_option(&source) {
            Some(intermediate) => {
                let updated = self.second.set(intermediate, value);
                self.first.set(source, updated)
            }
            None => source,
        }
    }
}

impl<O1: Clone, O2: Clone, A> Clone for ComposedOptional<O1, O2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}
