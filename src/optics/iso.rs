//! Iso optics for isomorphic type conversions.
//!
//! An Iso (isomorphism) is an optic representing a bidirectional
//! conversion between two types where no information is lost. It is the
//! strongest optic: every Iso can be used as a Lens or a Prism.
//!
//! The round-trip laws are **not enforced at construction** - nothing
//! checks that the two functions really are mutual inverses. That
//! correctness is the caller's obligation and belongs in property tests.
//!
//! # Laws
//!
//! 1. **`GetReverseGet` Law**: Converting forward then backward yields the
//!    original.
//!    ```text
//!    iso.reverse_get(iso.get(source)) == source
//!    ```
//!
//! 2. **`ReverseGetGet` Law**: Converting backward then forward yields the
//!    original.
//!    ```text
//!    iso.get(iso.reverse_get(value)) == value
//!    ```
//!
//! # Examples
//!
//! ```
//! use kleisli::optics::{Iso, FunctionIso};
//!
//! // metres <-> kilometres
//! let metres_to_kilometres = FunctionIso::new(
//!     |metres: f64| metres / 1000.0,
//!     |kilometres: f64| kilometres * 1000.0,
//! );
//!
//! assert!((metres_to_kilometres.get(100.0) - 0.1).abs() < 1e-12);
//! assert!((metres_to_kilometres.reverse_get(1.2) - 1200.0).abs() < 1e-12);
//! ```

use std::marker::PhantomData;

use super::lens::Lens;
use super::prism::Prism;

/// An Iso represents an isomorphism between two types.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
///
/// # Laws
///
/// 1. **`GetReverseGet` Law**: `iso.reverse_get(iso.get(source)) == source`
/// 2. **`ReverseGetGet` Law**: `iso.get(iso.reverse_get(value)) == value`
pub trait Iso<S, A> {
    /// Converts from the source type to the target type.
    fn get(&self, source: S) -> A;

    /// Converts from the target type back to the source type.
    fn reverse_get(&self, value: A) -> S;

    /// Returns the reversed Iso (swaps the direction).
    ///
    /// Reversing twice yields an Iso that behaves as the original.
    ///
    /// # Example
    ///
    /// ```
    /// use kleisli::optics::{Iso, FunctionIso};
    ///
    /// let celsius_to_offset = FunctionIso::new(
    ///     |celsius: f64| celsius + 273.15,
    ///     |kelvin: f64| kelvin - 273.15,
    /// );
    /// let kelvin_to_celsius = celsius_to_offset.reverse();
    /// assert!((kelvin_to_celsius.get(273.15) - 0.0).abs() < 1e-12);
    /// ```
    fn reverse(self) -> ReversedIso<Self>
    where
        Self: Sized,
    {
        ReversedIso::new(self)
    }

    /// Applies a transformation in the target representation and maps
    /// back.
    ///
    /// Equivalent to `iso.reverse_get(function(iso.get(source)))`.
    ///
    /// # Example
    ///
    /// ```
    /// use kleisli::optics::{Iso, FunctionIso};
    ///
    /// let chars = FunctionIso::new(
    ///     |text: String| text.chars().collect::<Vec<_>>(),
    ///     |chars: Vec<char>| chars.into_iter().collect::<String>(),
    /// );
    ///
    /// let reversed = chars.modify("abc".to_string(), |mut letters| {
    ///     letters.reverse();
    ///     letters
    /// });
    /// assert_eq!(reversed, "cba");
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let converted = self.get(source);
        self.reverse_get(function(converted))
    }

    /// Composes this Iso with another Iso.
    ///
    /// Composition is associative by construction (it is function
    /// composition on both directions), and [`super::iso_identity`] is a
    /// two-sided identity for it.
    ///
    /// # Example
    ///
    /// ```
    /// use kleisli::optics::{Iso, FunctionIso};
    ///
    /// let widen = FunctionIso::new(|x: i32| i64::from(x), |x: i64| x as i32);
    /// let shift = FunctionIso::new(|x: i64| x + 1, |x: i64| x - 1);
    ///
    /// let widened_and_shifted = widen.compose(shift);
    /// assert_eq!(widened_and_shifted.get(41), 42_i64);
    /// assert_eq!(widened_and_shifted.reverse_get(42), 41_i32);
    /// ```
    fn compose<B, I>(self, other: I) -> ComposedIso<Self, I, A>
    where
        Self: Sized,
        I: Iso<A, B>,
    {
        ComposedIso::new(self, other)
    }

    /// Bidirectionally remaps the target type.
    ///
    /// `forward` and `backward` must be mutual inverses; like the Iso laws
    /// themselves this is a caller obligation, unchecked at construction.
    ///
    /// # Example
    ///
    /// ```
    /// use kleisli::optics::{Iso, FunctionIso};
    ///
    /// let seconds = FunctionIso::new(
    ///     |minutes: u64| minutes * 60,
    ///     |seconds: u64| seconds / 60,
    /// );
    /// let labelled = seconds.imap(
    ///     |seconds: u64| format!("{seconds}s"),
    ///     |label: String| label.trim_end_matches('s').parse().unwrap_or(0),
    /// );
    /// assert_eq!(labelled.get(2), "120s");
    /// assert_eq!(labelled.reverse_get("60s".to_string()), 1);
    /// ```
    fn imap<B, F, G>(self, forward: F, backward: G) -> MappedIso<Self, F, G, A>
    where
        Self: Sized,
        F: Fn(A) -> B,
        G: Fn(B) -> A,
    {
        MappedIso::new(self, forward, backward)
    }

    /// Converts this Iso to a Lens.
    ///
    /// Always possible since an Iso is stronger than a Lens - but note the
    /// gotcha: the resulting Lens's `set` rebuilds the **entire** source
    /// from the focused value via `reverse_get`. The partial-update
    /// semantics of a field Lens do not apply; any other information in
    /// the prior source is discarded.
    fn to_lens(self) -> IsoAsLens<Self, S, A>
    where
        Self: Sized,
    {
        IsoAsLens::new(self)
    }

    /// Converts this Iso to a Prism.
    ///
    /// Always possible since an Iso is stronger than a Prism; the
    /// resulting Prism's `preview` always succeeds.
    fn to_prism(self) -> IsoAsPrism<Self, S, A>
    where
        Self: Sized,
    {
        IsoAsPrism::new(self)
    }

    /// Composes this Iso with a Prism, producing a Prism from the Iso's
    /// source.
    ///
    /// The prism laws carry over from the inner prism through the iso's
    /// round-trip guarantees.
    fn compose_prism<B, P>(self, prism: P) -> IsoPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        IsoPrism::new(self, prism)
    }
}

/// An Iso implemented from a pair of conversion functions.
///
/// This is the most common way to create an Iso; the `iso!` macro
/// generates a `FunctionIso` internally.
///
/// # Example
///
/// ```
/// use kleisli::optics::{Iso, FunctionIso};
///
/// let swap = FunctionIso::new(
///     |(a, b): (i32, String)| (b, a),
///     |(b, a): (String, i32)| (a, b),
/// );
///
/// assert_eq!(swap.get((1, "x".to_string())), ("x".to_string(), 1));
/// ```
pub struct FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    get_function: G,
    reverse_get_function: Rg,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, Rg> FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    /// Creates a new `FunctionIso` from conversion functions.
    ///
    /// The two functions must be mutual inverses (unchecked).
    #[must_use]
    pub const fn new(get_function: G, reverse_get_function: Rg) -> Self {
        Self {
            get_function,
            reverse_get_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, Rg> Iso<S, A> for FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    fn get(&self, source: S) -> A {
        (self.get_function)(source)
    }

    fn reverse_get(&self, value: A) -> S {
        (self.reverse_get_function)(value)
    }
}

impl<S, A, G, Rg> Clone for FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A + Clone,
    Rg: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            get_function: self.get_function.clone(),
            reverse_get_function: self.reverse_get_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, Rg> std::fmt::Debug for FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionIso").finish_non_exhaustive()
    }
}

/// A reversed Iso that swaps the direction of conversion.
pub struct ReversedIso<I> {
    inner: I,
}

impl<I> ReversedIso<I> {
    /// Creates a new `ReversedIso` from an Iso.
    #[must_use]
    pub const fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<S, A, I> Iso<A, S> for ReversedIso<I>
where
    I: Iso<S, A>,
{
    fn get(&self, source: A) -> S {
        self.inner.reverse_get(source)
    }

    fn reverse_get(&self, value: S) -> A {
        self.inner.get(value)
    }
}

impl<I: Clone> Clone for ReversedIso<I> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<I: std::fmt::Debug> std::fmt::Debug for ReversedIso<I> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ReversedIso")
            .field("inner", &self.inner)
            .finish()
    }
}

/// A composed Iso that chains two Isos together.
///
/// # Type Parameters
///
/// - `I1`: The first Iso (S to A)
/// - `I2`: The second Iso (A to B)
/// - `A`: The intermediate type
pub struct ComposedIso<I1, I2, A> {
    first: I1,
    second: I2,
    _marker: PhantomData<A>,
}

impl<I1, I2, A> ComposedIso<I1, I2, A> {
    /// Creates a new `ComposedIso` from two Isos.
    #[must_use]
    pub const fn new(first: I1, second: I2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, I1, I2> Iso<S, B> for ComposedIso<I1, I2, A>
where
    I1: Iso<S, A>,
    I2: Iso<A, B>,
{
    fn get(&self, source: S) -> B {
        let intermediate = self.first.get(source);
        self.second.get(intermediate)
    }

    fn reverse_get(&self, value: B) -> S {
        let intermediate = self.second.reverse_get(value);
        self.first.reverse_get(intermediate)
    }
}

impl<I1: Clone, I2: Clone, A> Clone for ComposedIso<I1, I2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

/// An Iso whose target type has been bidirectionally remapped.
///
/// Produced by [`Iso::imap`].
pub struct MappedIso<I, F, G, A> {
    inner: I,
    forward: F,
    backward: G,
    _marker: PhantomData<A>,
}

impl<I, F, G, A> MappedIso<I, F, G, A> {
    /// Creates a new `MappedIso`.
    #[must_use]
    pub const fn new(inner: I, forward: F, backward: G) -> Self {
        Self {
            inner,
            forward,
            backward,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, I, F, G> Iso<S, B> for MappedIso<I, F, G, A>
where
    I: Iso<S, A>,
    F: Fn(A) -> B,
    G: Fn(B) -> A,
{
    fn get(&self, source: S) -> B {
        (self.forward)(self.inner.get(source))
    }

    fn reverse_get(&self, value: B) -> S {
        self.inner.reverse_get((self.backward)(value))
    }
}

impl<I: Clone, F: Clone, G: Clone, A> Clone for MappedIso<I, F, G, A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            forward: self.forward.clone(),
            backward: self.backward.clone(),
            _marker: PhantomData,
        }
    }
}

/// An Iso used as a Lens.
///
/// `set` rebuilds the entire source from the focused value via
/// `reverse_get`; the prior source is discarded. This is correct for a
/// lawful Iso (the focus determines the whole source) but surprises
/// callers expecting a field Lens's partial update.
pub struct IsoAsLens<I, S, A> {
    iso: I,
    _marker: PhantomData<(S, A)>,
}

impl<I, S, A> IsoAsLens<I, S, A> {
    /// Creates a new `IsoAsLens` from an Iso.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self {
            iso,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A> Lens<S, A> for IsoAsLens<I, S, A>
where
    I: Iso<S, A>,
    S: Clone,
{
    fn get(&self, source: &S) -> A {
        self.iso.get(source.clone())
    }

    fn set(&self, _source: S, value: A) -> S {
        self.iso.reverse_get(value)
    }
}

impl<I: Clone, S, A> Clone for IsoAsLens<I, S, A> {
    fn clone(&self) -> Self {
        Self {
            iso: self.iso.clone(),
            _marker: PhantomData,
        }
    }
}

/// An Iso used as a Prism.
///
/// `preview` always succeeds since an Iso is a total conversion.
pub struct IsoAsPrism<I, S, A> {
    iso: I,
    _marker: PhantomData<(S, A)>,
}

impl<I, S, A> IsoAsPrism<I, S, A> {
    /// Creates a new `IsoAsPrism` from an Iso.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self {
            iso,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A> Prism<S, A> for IsoAsPrism<I, S, A>
where
    I: Iso<S, A>,
    S: Clone,
{
    fn preview(&self, source: &S) -> Option<A> {
        Some(self.iso.get(source.clone()))
    }

    fn review(&self, value: A) -> S {
        self.iso.reverse_get(value)
    }

    fn preview_owned(&self, source: S) -> Option<A> {
        Some(self.iso.get(source))
    }
}

impl<I: Clone, S, A> Clone for IsoAsPrism<I, S, A> {
    fn clone(&self) -> Self {
        Self {
            iso: self.iso.clone(),
            _marker: PhantomData,
        }
    }
}

/// An Iso composed in front of a Prism, producing a Prism from the Iso's
/// source type.
///
/// Produced by [`Iso::compose_prism`]. The prism laws hold because the
/// iso's round-trip is lossless: previewing after reviewing passes back
/// through `reverse_get` then `get`, which is the identity.
pub struct IsoPrism<I, P, A> {
    iso: I,
    prism: P,
    _marker: PhantomData<A>,
}

impl<I, P, A> IsoPrism<I, P, A> {
    /// Creates a new `IsoPrism`.
    #[must_use]
    pub const fn new(iso: I, prism: P) -> Self {
        Self {
            iso,
            prism,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, I, P> Prism<S, B> for IsoPrism<I, P, A>
where
    I: Iso<S, A>,
    P: Prism<A, B>,
    S: Clone,
{
    fn preview(&self, source: &S) -> Option<B> {
        let intermediate = self.iso.get(source.clone());
        self.prism.preview(&intermediate)
    }

    fn review(&self, value: B) -> S {
        self.iso.reverse_get(self.prism.review(value))
    }

    fn preview_owned(&self, source: S) -> Option<B> {
        self.prism.preview_owned(self.iso.get(source))
    }
}

impl<I: Clone, P: Clone, A> Clone for IsoPrism<I, P, A> {
    fn clone(&self) -> Self {
        Self {
            iso: self.iso.clone(),
            prism: self.prism.clone(),
            _marker: PhantomData,
        }
    }
}

/// Creates an Iso from get and `reverse_get` functions.
///
/// # Example
///
/// ```
/// use kleisli::iso;
/// use kleisli::optics::Iso;
///
/// let metres_to_kilometres = iso!(|m: f64| m / 1000.0, |km: f64| km * 1000.0);
/// assert!((metres_to_kilometres.get(100.0) - 0.1).abs() < 1e-12);
/// ```
#[macro_export]
macro_rules! iso {
    ($get:expr, $reverse_get:expr $(,)?) => {
        $crate::optics::FunctionIso::new($get, $reverse_get)
    };
}
