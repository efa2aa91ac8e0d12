//! # kleisli
//!
//! Composable Reader/Result combinators, do-notation, and optics for Rust.
//!
//! ## Overview
//!
//! This library provides the plumbing for building programs out of small,
//! referentially transparent functions:
//!
//! - **Type Classes**: Functor, Applicative, Monad, Semigroup, Monoid
//! - **Control**: the `Either` data type and `Result` combinators
//!   (validation, traversal, predicates)
//! - **Effects**: the `Reader` and `ReaderResult` environment monads and
//!   the `bind!` do-notation macro
//! - **Function Composition**: compose!, pipe!, curry!/uncurry! macros
//! - **Optics**: Lens, Prism, Iso, Optional, Traversal for immutable data
//!   manipulation
//!
//! Everything here is synchronous, single-threaded function application:
//! no shared mutable state, no background execution, no logging. Errors are
//! caller-supplied values threaded through the `E` type parameter; the
//! library never constructs its own error values and never panics.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `compose`: Function composition utilities
//! - `control`: `Either` and `Result` combinators
//! - `optics`: Optics (Lens, Prism, etc.)
//! - `effect`: Reader, ReaderResult, do-notation
//! - `serde`: Serialize/Deserialize for `Either`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use kleisli::effect::ReaderResult;
//!
//! #[derive(Clone)]
//! struct Config {
//!     base_url: String,
//! }
//!
//! let endpoint: ReaderResult<Config, String, String> =
//!     ReaderResult::asks(|config: Config| config.base_url)
//!         .fmap(|base| format!("{base}/health"));
//!
//! let config = Config { base_url: "https://api.example.test".to_string() };
//! assert_eq!(endpoint.run(config), Ok("https://api.example.test/health".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kleisli::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    // The control and effect layers both provide sequence/traverse helpers
    // under the same names; the prelude re-exports their types and leaves
    // the free functions to module-qualified paths.
    #[cfg(feature = "control")]
    pub use crate::control::{Either, ResultExt};

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::{Reader, ReaderResult};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "effect")]
pub mod effect;
