//! Lens optics for focusing on struct fields.
//!
//! A Lens provides get/set access to one field within a larger structure.
//! Lenses compose, so deeply nested fields are reached by chaining the
//! lenses for each level.
//!
//! `get` clones the focused value out of the source rather than borrowing
//! it; every optic in this crate hands back owned values, which keeps
//! composition (including iso- and prism-derived optics, whose foci are
//! computed rather than stored) uniform.
//!
//! # Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **GetPut Law**: Putting back what was got changes nothing.
//!    ```text
//!    lens.set(source.clone(), lens.get(&source)) == source
//!    ```
//!
//! 2. **PutGet Law**: Getting what was put yields the put value.
//!    ```text
//!    lens.get(&lens.set(source, value)) == value
//!    ```
//!
//! 3. **PutPut Law**: The second put wins.
//!    ```text
//!    lens.set(lens.set(source, v1), v2) == lens.set(source, v2)
//!    ```
//!
//! # Examples
//!
//! ```
//! use kleisli::lens;
//! use kleisli::optics::Lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.get(&point), 10);
//!
//! let updated = x_lens.set(point, 100);
//! assert_eq!(updated, Point { x: 100, y: 20 });
//! ```

use std::marker::PhantomData;

use super::optional::LensPrismOptional;
use super::prism::Prism;
use super::traversal::LensAsTraversal;

/// A Lens focuses on a single field within a larger structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused field)
///
/// # Laws
///
/// 1. **GetPut Law**: `lens.set(source.clone(), lens.get(&source)) == source`
/// 2. **PutGet Law**: `lens.get(&lens.set(source, value)) == value`
/// 3. **PutPut Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
pub trait Lens<S, A> {
    /// Gets the focused field out of the source.
    fn get(&self, source: &S) -> A;

    /// Sets the focused field to a new value, returning a new source.
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focused field by applying a function.
    ///
    /// # Example
    ///
    /// ```
    /// use kleisli::lens;
    /// use kleisli::optics::Lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let doubled = x_lens.modify(Point { x: 10, y: 20 }, |x| x * 2);
    /// assert_eq!(doubled.x, 20);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let current = self.get(&source);
        self.set(source, function(current))
    }

    /// Composes this lens with another lens, focusing on a nested field.
    ///
    /// # Example
    ///
    /// ```
    /// use kleisli::lens;
    /// use kleisli::optics::Lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { street: String, city: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, address: Address }
    ///
    /// let person_street = lens!(Person, address).compose(lens!(Address, street));
    ///
    /// let person = Person {
    ///     name: "Alice".to_string(),
    ///     address: Address {
    ///         street: "Main St".to_string(),
    ///         city: "Tokyo".to_string(),
    ///     },
    /// };
    ///
    /// assert_eq!(person_street.get(&person), "Main St");
    /// let moved = person_street.set(person, "Oak Ave".to_string());
    /// assert_eq!(moved.address.street, "Oak Ave");
    /// assert_eq!(moved.address.city, "Tokyo"); // other fields untouched
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }

    /// Composes this lens with a prism, producing an Optional.
    ///
    /// The combination may fail to focus (the prism side), so the result
    /// is the weaker [`super::Optional`] optic.
    fn compose_prism<B, P>(self, prism: P) -> LensPrismOptional<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        LensPrismOptional::new(self, prism)
    }

    /// Views this lens as a traversal over exactly one element.
    fn to_traversal(self) -> LensAsTraversal<Self, S, A>
    where
        Self: Sized,
    {
        LensAsTraversal::new(self)
    }
}

/// A lens implemented from getter and setter functions.
///
/// This is the most common way to create a lens; the `lens!` macro
/// generates a `FunctionLens` internally.
///
/// # Example
///
/// ```
/// use kleisli::optics::{Lens, FunctionLens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
///
/// assert_eq!(x_lens.get(&Point { x: 10, y: 20 }), 10);
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from getter and setter functions.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A + Clone,
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

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionLens").finish_non_exhaustive()
    }
}

/// A composed lens that focuses through two lenses in sequence.
///
/// # Type Parameters
///
/// - `L1`: The outer lens (S to A)
/// - `L2`: The inner lens (A to B)
/// - `A`: The intermediate type
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new `ComposedLens` from two lenses.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    fn get(&self, source: &S) -> B {
        let intermediate = self.first.get(source);
        self.second.get(&intermediate)
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.first.get(&source);
        let updated = self.second.set(intermediate, value);
        self.first.set(source, updated)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

/// Creates a lens for a struct field.
///
/// The field type must implement `Clone` (the getter clones the field
/// out).
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field)
/// lens!(StructType<Generics>, field)
/// ```
///
/// # Example
///
/// ```
/// use kleisli::lens;
/// use kleisli::optics::Lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Person { name: String, age: u32 }
///
/// let age_lens = lens!(Person, age);
/// let person = Person { name: "alice".to_string(), age: 30 };
/// assert_eq!(age_lens.get(&person), 30);
/// assert_eq!(age_lens.set(person, 31).age, 31);
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| source.$field.clone(),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| source.$field.clone(),
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Clone, PartialEq, Debug)]
    struct Segment {
        start: Point,
        end: Point,
    }

    #[test]
    fn function_lens_get_and_set() {
        let x_lens = lens!(Point, x);
        let point = Point { x: 10, y: 20 };

        assert_eq!(x_lens.get(&point), 10);
        assert_eq!(x_lens.set(point, 99), Point { x: 99, y: 20 });
    }

    #[test]
    fn lens_modify_applies_function_to_focus() {
        let y_lens = lens!(Point, y);
        let moved = y_lens.modify(Point { x: 1, y: 2 }, |y| y + 10);
        assert_eq!(moved, Point { x: 1, y: 12 });
    }

    #[test]
    fn composed_lens_reaches_nested_field() {
        let start_x = lens!(Segment, start).compose(lens!(Point, x));
        let segment = Segment {
            start: Point { x: 1, y: 2 },
            end: Point { x: 3, y: 4 },
        };

        assert_eq!(start_x.get(&segment), 1);

        let shifted = start_x.set(segment, 100);
        assert_eq!(shifted.start, Point { x: 100, y: 2 });
        assert_eq!(shifted.end, Point { x: 3, y: 4 });
    }

    // GetPut: putting back what was got changes nothing.
    #[test]
    fn lens_get_put_law() {
        let x_lens = lens!(Point, x);
        let point = Point { x: 5, y: 6 };
        let focus = x_lens.get(&point);
        assert_eq!(x_lens.set(point.clone(), focus), point);
    }

    // PutGet: getting what was put yields the put value.
    #[test]
    fn lens_put_get_law() {
        let x_lens = lens!(Point, x);
        let updated = x_lens.set(Point { x: 5, y: 6 }, 42);
        assert_eq!(x_lens.get(&updated), 42);
    }

    // PutPut: the second put wins.
    #[test]
    fn lens_put_put_law() {
        let x_lens = lens!(Point, x);
        let twice = x_lens.set(x_lens.set(Point { x: 0, y: 0 }, 1), 2);
        let once = x_lens.set(Point { x: 0, y: 0 }, 2);
        assert_eq!(twice, once);
    }

    #[test]
    fn lens_macro_supports_generic_structs() {
        #[derive(Clone, PartialEq, Debug)]
        struct Wrapper<T> {
            inner: T,
        }

        let inner_lens = lens!(Wrapper<i32>, inner);
        let wrapper = Wrapper { inner: 1 };
        assert_eq!(inner_lens.get(&wrapper), 1);
        assert_eq!(inner_lens.set(wrapper, 2), Wrapper { inner: 2 });
    }
}
