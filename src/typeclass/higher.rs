//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over type constructors directly: there is no way to
//! write a trait over `Option<_>` or `Result<_, E>` as a "shape with a hole".
//! This module fills that gap with a Generic Associated Type, which is the
//! foundation the Functor/Applicative/Monad traits build on.
//!
//! # Example
//!
//! ```rust
//! use kleisli::typeclass::TypeConstructor;
//!
//! fn rewrap<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let absent: Option<String> = rewrap(Some(7));
//! assert_eq!(absent, None);
//! ```

/// A trait representing a type constructor.
///
/// Implementors are a type constructor applied to some type `A` (for
/// example `Option<A>` or `Result<A, E>`); the associated types recover the
/// constructor so it can be re-applied to a different type.
///
/// # Associated Types
///
/// - `Inner`: the type the constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B` instead.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is the
///    same type as `F`.
///
/// # Example
///
/// ```rust
/// use kleisli::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<Result<i32, String>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Result<i32, E>` this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Result<i32, E>`, `WithType<String>` is `Result<String, E>`.
    /// The `TypeConstructor<Inner = B>` constraint keeps the result usable
    /// for further transformations.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Box<T> {
    type Inner = T;
    type WithType<B> = Box<B>;
}
