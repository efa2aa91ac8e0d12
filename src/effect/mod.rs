//! Environment-reading effects: Reader, ReaderResult, and do-notation.
//!
//! This module provides the two environment monads and the sugar for
//! composing them:
//!
//! - [`Reader`]: computations that read from an environment and cannot
//!   fail
//! - [`ReaderResult`]: computations that read from an environment and
//!   carry a typed error channel
//! - [`bind!`](crate::bind): do-notation over anything with `flat_map`
//! - Lens-focused record building (`bind_field`/`let_field`/`ap_field`,
//!   available with the `optics` feature)
//!
//! Everything is synchronous function application. The environment is
//! never mutated; errors are caller-supplied values; failure
//! short-circuits except in the explicitly validating combinators.
//!
//! # Do-Notation with the bind! Macro
//!
//! ```rust
//! use kleisli::bind;
//! use kleisli::effect::ReaderResult;
//!
//! #[derive(Clone)]
//! struct Config { factor: i32 }
//!
//! let scaled: ReaderResult<Config, i32, String> = bind! {
//!     config <= ReaderResult::<Config, Config, String>::ask();
//!     let scaled = config.factor * 10;
//!     ReaderResult::ok(scaled)
//! };
//!
//! assert_eq!(scaled.run(Config { factor: 4 }), Ok(40));
//! ```

mod bind_macro;
mod reader;
mod reader_result;

#[cfg(feature = "optics")]
mod binding;

pub use reader::Reader;

pub use reader_result::ReaderResult;
pub use reader_result::compose_kleisli;
pub use reader_result::sequence_t2;
pub use reader_result::sequence_t3;
pub use reader_result::sequence_t4;
pub use reader_result::sequence_vec;
pub use reader_result::traverse_vec;

#[cfg(feature = "optics")]
pub use binding::{ap_field, bind_field, let_field};
