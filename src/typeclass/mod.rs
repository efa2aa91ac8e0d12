//! Type class traits for functional programming abstractions.
//!
//! This module provides the fundamental type classes (traits) the rest of
//! the crate is built on:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Combining independent contextual values
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] emulates
//! them with a Generic Associated Type, which lets Functor and Monad be
//! expressed as ordinary traits with default-method combinators instead of
//! passing `map`/`chain` dictionaries around by hand.
//!
//! ## Foundation Types
//!
//! - [`Identity`]: Identity wrapper type (identity functor)
//! - [`Sum`], [`Product`]: Numeric wrappers for different monoid operations
//! - [`Max`], [`Min`]: Extremum wrappers; [`Bounded`] supplies their
//!   identity elements
//!
//! # Examples
//!
//! ## Using Semigroup
//!
//! ```rust
//! use kleisli::typeclass::Semigroup;
//!
//! let combined = String::from("Hello, ").combine(String::from("World!"));
//! assert_eq!(combined, "Hello, World!");
//! ```
//!
//! ## Using Monad
//!
//! ```rust
//! use kleisli::typeclass::Monad;
//!
//! let result = Some(5).flat_map(|x| Some(x * 2));
//! assert_eq!(result, Some(10));
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Bounded, Max, Min, Product, Sum};
