//! Prism optics for focusing on enum variants.
//!
//! A Prism provides preview/review access to one variant of a sum type.
//! Unlike a Lens, which always focuses, a Prism may fail: `preview`
//! returns `None` when the source is a different variant. `review` goes
//! the other way and always succeeds, constructing the source from a
//! focus value.
//!
//! # Laws
//!
//! Every Prism must satisfy two laws:
//!
//! 1. **PreviewReview Law**: Previewing a reviewed value yields it back.
//!    ```text
//!    prism.preview(&prism.review(value)) == Some(value)
//!    ```
//!
//! 2. **ReviewPreview Law**: If preview succeeds, reviewing the result
//!    rebuilds the source.
//!    ```text
//!    if prism.preview(&source) == Some(value) then
//!        prism.review(value) == source
//!    ```
//!
//! # Examples
//!
//! ```
//! use kleisli::prism;
//! use kleisli::optics::Prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! let circle_prism = prism!(Shape, Circle);
//!
//! assert_eq!(circle_prism.preview(&Shape::Circle(5.0)), Some(5.0));
//! assert_eq!(circle_prism.preview(&Shape::Rectangle(3.0, 4.0)), None);
//!
//! let constructed = circle_prism.review(10.0);
//! assert_eq!(constructed, Shape::Circle(10.0));
//! ```

use std::marker::PhantomData;

use super::iso::Iso;
use super::traversal::PrismAsTraversal;

/// A Prism focuses on a single variant of a sum type.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole enum)
/// - `A`: The target type (the value inside the variant)
///
/// # Laws
///
/// 1. **PreviewReview Law**: `prism.preview(&prism.review(value)) == Some(value)`
/// 2. **ReviewPreview Law**: if `prism.preview(&source) == Some(value)`
///    then `prism.review(value) == source`
pub trait Prism<S, A> {
    /// Attempts to extract the focus from the source.
    ///
    /// Returns `Some` if the source is the expected variant, `None`
    /// otherwise.
    fn preview(&self, source: &S) -> Option<A>;

    /// Constructs the source from a focus value; always succeeds.
    fn review(&self, value: A) -> S;

    /// Attempts to extract the focus, taking ownership of the source.
    fn preview_owned(&self, source: S) -> Option<A>;

    /// Modifies the focus if the source is the expected variant.
    ///
    /// Returns `None` when the variant does not match (the source is
    /// consumed either way; use [`Prism::modify_or_identity`] to keep it).
    ///
    /// # Example
    ///
    /// ```
    /// use kleisli::prism;
    /// use kleisli::optics::Prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape { Circle(f64), Square(f64) }
    ///
    /// let circle_prism = prism!(Shape, Circle);
    /// let grown = circle_prism.modify_option(Shape::Circle(5.0), |r| r * 2.0);
    /// assert_eq!(grown, Some(Shape::Circle(10.0)));
    ///
    /// let not_circle = circle_prism.modify_option(Shape::Square(1.0), |r| r * 2.0);
    /// assert_eq!(not_circle, None);
    /// ```
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        self.preview_owned(source)
            .map(|value| self.review(function(value)))
    }

    /// Modifies the focus if the variant matches, otherwise returns the
    /// source unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use kleisli::prism;
    /// use kleisli::optics::Prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape { Circle(f64), Square(f64) }
    ///
    /// let circle_prism = prism!(Shape, Circle);
    /// let square = Shape::Square(3.0);
    /// assert_eq!(circle_prism.modify_or_identity(square.clone(), |r| r * 2.0), square);
    /// ```
    fn modify_or_identity<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        S: Clone,
    {
        self.modify_option(source.clone(), function)
            .unwrap_or(source)
    }

    /// Composes this prism with another prism, focusing on a nested
    /// variant.
    fn compose<B, P>(self, other: P) -> ComposedPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, other)
    }

    /// Composes this prism with an Iso, re-mapping the focus type.
    ///
    /// The prism laws are preserved: the iso's round-trip guarantees mean
    /// previewing after reviewing still passes the value through
    /// unchanged.
    fn compose_iso<B, I>(self, iso: I) -> PrismIso<Self, I, A>
    where
        Self: Sized,
        I: Iso<A, B>,
    {
        PrismIso::new(self, iso)
    }

    /// Views this prism as a traversal over zero or one element.
    fn to_traversal(self) -> PrismAsTraversal<Self, S, A>
    where
        Self: Sized,
    {
        PrismAsTraversal::new(self)
    }
}

/// A prism implemented from preview and review functions.
///
/// This is the most common way to create a prism; the `prism!` macro
/// generates a `FunctionPrism` internally.
pub struct FunctionPrism<S, A, Pv, Rv, Po>
where
    Pv: Fn(&S) -> Option<A>,
    Rv: Fn(A) -> S,
    Po: Fn(S) -> Option<A>,
{
    preview_function: Pv,
    review_function: Rv,
    preview_owned_function: Po,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, Pv, Rv, Po> FunctionPrism<S, A, Pv, Rv, Po>
where
    Pv: Fn(&S) -> Option<A>,
    Rv: Fn(A) -> S,
    Po: Fn(S) -> Option<A>,
{
    /// Creates a new `FunctionPrism` from preview, review, and owning
    /// preview functions.
    #[must_use]
    pub const fn new(
        preview_function: Pv,
        review_function: Rv,
        preview_owned_function: Po,
    ) -> Self {
        Self {
            preview_function,
            review_function,
            preview_owned_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, Pv, Rv, Po> Prism<S, A> for FunctionPrism<S, A, Pv, Rv, Po>
where
    Pv: Fn(&S) -> Option<A>,
    Rv: Fn(A) -> S,
    Po: Fn(S) -> Option<A>,
{
    fn preview(&self, source: &S) -> Option<A> {
        (self.preview_function)(source)
    }

    fn review(&self, value: A) -> S {
        (self.review_function)(value)
    }

    fn preview_owned(&self, source: S) -> Option<A> {
        (self.preview_owned_function)(source)
    }
}

impl<S, A, Pv, Rv, Po> Clone for FunctionPrism<S, A, Pv, Rv, Po>
where
    Pv: Fn(&S) -> Option<A> + Clone,
    Rv: Fn(A) -> S + Clone,
    Po: Fn(S) -> Option<A> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            preview_function: self.preview_function.clone(),
            review_function: self.review_function.clone(),
            preview_owned_function: self.preview_owned_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, Pv, Rv, Po> std::fmt::Debug for FunctionPrism<S, A, Pv, Rv, Po>
where
    Pv: Fn(&S) -> Option<A>,
    Rv: Fn(A) -> S,
    Po: Fn(S) -> Option<A>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionPrism").finish_non_exhaustive()
    }
}

/// A composed prism focusing through two prisms in sequence.
///
/// The composition previews successfully only when both levels match.
pub struct ComposedPrism<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<A>,
}

impl<P1, P2, A> ComposedPrism<P1, P2, A> {
    /// Creates a new `ComposedPrism` from two prisms.
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> Prism<S, B> for ComposedPrism<P1, P2, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
{
    fn preview(&self, source: &S) -> Option<B> {
        self.first
            .preview(source)
            .and_then(|intermediate| self.second.preview(&intermediate))
    }

    fn review(&self, value: B) -> S {
        self.first.review(self.second.review(value))
    }

    fn preview_owned(&self, source: S) -> Option<B> {
        self.first
            .preview_owned(source)
            .and_then(|intermediate| self.second.preview_owned(intermediate))
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedPrism<P1, P2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

/// A prism whose focus type is re-mapped through an Iso.
///
/// Produced by [`Prism::compose_iso`].
pub struct PrismIso<P, I, A> {
    prism: P,
    iso: I,
    _marker: PhantomData<A>,
}

impl<P, I, A> PrismIso<P, I, A> {
    /// Creates a new `PrismIso`.
    #[must_use]
    pub const fn new(prism: P, iso: I) -> Self {
        Self {
            prism,
            iso,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P, I> Prism<S, B> for PrismIso<P, I, A>
where
    P: Prism<S, A>,
    I: Iso<A, B>,
{
    fn preview(&self, source: &S) -> Option<B> {
        self.prism
            .preview(source)
            .map(|intermediate| self.iso.get(intermediate))
    }

    fn review(&self, value: B) -> S {
        self.prism.review(self.iso.reverse_get(value))
    }

    fn preview_owned(&self, source: S) -> Option<B> {
        self.prism
            .preview_owned(source)
            .map(|intermediate| self.iso.get(intermediate))
    }
}

impl<P: Clone, I: Clone, A> Clone for PrismIso<P, I, A> {
    fn clone(&self) -> Self {
        Self {
            prism: self.prism.clone(),
            iso: self.iso.clone(),
            _marker: PhantomData,
        }
    }
}

/// Creates a prism for a single-payload enum variant.
///
/// The payload type must implement `Clone` (the borrowing preview clones
/// the value out).
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, Variant)
/// prism!(EnumType<Generics>, Variant)
/// ```
///
/// # Example
///
/// ```
/// use kleisli::prism;
/// use kleisli::optics::Prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Event {
///     Click(u32),
///     KeyPress(char),
/// }
///
/// let click_prism = prism!(Event, Click);
/// assert_eq!(click_prism.preview(&Event::Click(3)), Some(3));
/// assert_eq!(click_prism.preview(&Event::KeyPress('a')), None);
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match source {
                $enum_type::$variant(value) => Some(value.clone()),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
            |source: $enum_type| match source {
                $enum_type::$variant(value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => Some(value.clone()),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
            |source: $enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::FunctionIso;

    #[derive(Clone, PartialEq, Debug)]
    enum Shape {
        Circle(f64),
        Rectangle(f64, f64),
    }

    fn circle_prism() -> impl Prism<Shape, f64> + Clone {
        FunctionPrism::new(
            |source: &Shape| match source {
                Shape::Circle(radius) => Some(*radius),
                Shape::Rectangle(..) => None,
            },
            Shape::Circle,
            |source: Shape| match source {
                Shape::Circle(radius) => Some(radius),
                Shape::Rectangle(..) => None,
            },
        )
    }

    #[test]
    fn preview_matches_expected_variant_only() {
        let prism = circle_prism();
        assert_eq!(prism.preview(&Shape::Circle(5.0)), Some(5.0));
        assert_eq!(prism.preview(&Shape::Rectangle(3.0, 4.0)), None);
    }

    #[test]
    fn review_constructs_the_variant() {
        assert_eq!(circle_prism().review(2.0), Shape::Circle(2.0));
    }

    #[test]
    fn modify_option_fails_on_other_variants() {
        let prism = circle_prism();
        assert_eq!(
            prism.modify_option(Shape::Circle(5.0), |r| r * 2.0),
            Some(Shape::Circle(10.0))
        );
        assert_eq!(
            prism.modify_option(Shape::Rectangle(1.0, 2.0), |r| r * 2.0),
            None
        );
    }

    #[test]
    fn modify_or_identity_keeps_unmatched_source() {
        let prism = circle_prism();
        let rectangle = Shape::Rectangle(1.0, 2.0);
        assert_eq!(
            prism.modify_or_identity(rectangle.clone(), |r| r * 2.0),
            rectangle
        );
    }

    // PreviewReview: previewing a reviewed value yields it back.
    #[test]
    fn prism_preview_review_law() {
        let prism = circle_prism();
        assert_eq!(prism.preview(&prism.review(4.5)), Some(4.5));
    }

    // ReviewPreview: if preview succeeds, reviewing rebuilds the source.
    #[test]
    fn prism_review_preview_law() {
        let prism = circle_prism();
        let source = Shape::Circle(7.0);
        let previewed = prism.preview(&source).expect("circle previews");
        assert_eq!(prism.review(previewed), source);
    }

    #[test]
    fn composed_prism_requires_both_levels_to_match() {
        #[derive(Clone, PartialEq, Debug)]
        enum Outer {
            Inner(Shape),
            Empty,
        }

        let outer_prism = prism!(Outer, Inner);
        let nested = outer_prism.compose(circle_prism());

        assert_eq!(nested.preview(&Outer::Inner(Shape::Circle(1.5))), Some(1.5));
        assert_eq!(
            nested.preview(&Outer::Inner(Shape::Rectangle(1.0, 2.0))),
            None
        );
        assert_eq!(nested.preview(&Outer::Empty), None);
        assert_eq!(nested.review(2.0), Outer::Inner(Shape::Circle(2.0)));
    }

    #[test]
    fn prism_iso_remaps_the_focus_type() {
        let radius_to_diameter = FunctionIso::new(
            |radius: f64| radius * 2.0,
            |diameter: f64| diameter / 2.0,
        );
        let diameter_prism = circle_prism().compose_iso(radius_to_diameter);

        assert_eq!(diameter_prism.preview(&Shape::Circle(5.0)), Some(10.0));
        assert_eq!(diameter_prism.review(10.0), Shape::Circle(5.0));
    }

    // The prism laws survive composition with an iso.
    #[test]
    fn prism_iso_preserves_preview_review_law() {
        let radius_to_diameter = FunctionIso::new(
            |radius: f64| radius * 2.0,
            |diameter: f64| diameter / 2.0,
        );
        let diameter_prism = circle_prism().compose_iso(radius_to_diameter);
        assert_eq!(diameter_prism.preview(&diameter_prism.review(8.0)), Some(8.0));
    }

    #[test]
    fn prism_macro_handles_multi_variant_enums() {
        #[derive(Clone, PartialEq, Debug)]
        enum Event {
            Click(u32),
            KeyPress(char),
        }

        let key_prism = prism!(Event, KeyPress);
        assert_eq!(key_prism.preview(&Event::KeyPress('x')), Some('x'));
        assert_eq!(key_prism.preview(&Event::Click(1)), None);
        assert_eq!(key_prism.preview_owned(Event::KeyPress('y')), Some('y'));
    }

    #[test]
    fn prism_macro_handles_generic_enums() {
        #[derive(Clone, PartialEq, Debug)]
        enum MyOption<T> {
            Present(T),
            Absent,
        }

        let present_prism = prism!(MyOption<i32>, Present);
        assert_eq!(present_prism.preview(&MyOption::Present(1)), Some(1));
        assert_eq!(present_prism.preview(&MyOption::Absent), None);
    }
}
