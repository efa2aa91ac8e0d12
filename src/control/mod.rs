//! Control structures: the `Either` data type and `Result` combinators.
//!
//! This module holds the success-or-failure core the rest of the crate
//! composes over:
//!
//! - [`Either`]: a symmetric two-variant sum type with right-biased
//!   type class instances
//! - [`ResultExt`] and the free functions ([`from_predicate`],
//!   [`from_option`], [`ap_validated`], [`traverse_vec`], ...): the
//!   combinators std's `Result` stops short of
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::{Either, traverse_vec};
//!
//! let tagged: Either<&str, i32> = Either::Right(10);
//! assert_eq!(tagged.map_right(|n| n + 1), Either::Right(11));
//!
//! let parsed = traverse_vec(vec!["4", "5"], |raw| raw.parse::<u8>());
//! assert_eq!(parsed, Ok(vec![4, 5]));
//! ```

mod either;
mod result_ext;

pub use either::Either;

pub use result_ext::ResultExt;
pub use result_ext::ap_validated;
pub use result_ext::from_option;
pub use result_ext::from_predicate;
pub use result_ext::sequence_t2;
pub use result_ext::sequence_t3;
pub use result_ext::sequence_t4;
pub use result_ext::sequence_vec;
pub use result_ext::traverse_hash_map;
pub use result_ext::traverse_vec;
