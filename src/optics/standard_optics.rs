//! Standard optics that are commonly used.
//!
//! Pre-defined isos and prisms for conversions that come up constantly:
//! identity, pair and `Either` swaps, vector reversal, UTF-8 text,
//! millisecond timestamps, and numeric shifts.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::control::Either;

use super::iso::{FunctionIso, Iso};
use super::prism::{FunctionPrism, Prism};

/// Creates an identity Iso that does not transform the value.
///
/// This is the two-sided identity for Iso composition:
/// `iso_identity().compose(other)` behaves as `other`, and so does
/// `other.compose(iso_identity())`.
///
/// # Example
///
/// ```
/// use kleisli::optics::{Iso, iso_identity};
///
/// let identity_iso = iso_identity::<i32>();
/// assert_eq!(identity_iso.get(42), 42);
/// assert_eq!(identity_iso.reverse_get(42), 42);
/// ```
#[must_use]
pub fn iso_identity<T>() -> impl Iso<T, T> + Clone {
    FunctionIso::new(|value: T| value, |value: T| value)
}

/// Creates an Iso that swaps the elements of a pair.
///
/// Self-inverse: swapping twice returns the original pair.
///
/// # Example
///
/// ```
/// use kleisli::optics::{Iso, iso_swap};
///
/// let swap_iso = iso_swap::<i32, String>();
///
/// let swapped = swap_iso.get((42, "hello".to_string()));
/// assert_eq!(swapped, ("hello".to_string(), 42));
///
/// let back = swap_iso.reverse_get(swapped);
/// assert_eq!(back, (42, "hello".to_string()));
/// ```
#[must_use]
pub fn iso_swap<A, B>() -> impl Iso<(A, B), (B, A)> + Clone {
    FunctionIso::new(|(a, b): (A, B)| (b, a), |(b, a): (B, A)| (a, b))
}

/// Creates an Iso that swaps the variants of an `Either`.
///
/// Self-inverse: both directions are `Either::swap`.
///
/// # Example
///
/// ```
/// use kleisli::control::Either;
/// use kleisli::optics::{Iso, iso_swap_either};
///
/// let swap_iso = iso_swap_either::<i32, String>();
///
/// let swapped = swap_iso.get(Either::Left(7));
/// assert_eq!(swapped, Either::Right(7));
/// ```
#[must_use]
pub fn iso_swap_either<L, R>() -> impl Iso<Either<L, R>, Either<R, L>> + Clone {
    FunctionIso::new(
        |either: Either<L, R>| either.swap(),
        |either: Either<R, L>| either.swap(),
    )
}

/// Creates an Iso that reverses a vector.
///
/// Self-inverse: the forward and backward conversions are the same
/// function.
///
/// # Example
///
/// ```
/// use kleisli::optics::{Iso, iso_reverse_vec};
///
/// let reverse_iso = iso_reverse_vec::<i32>();
/// assert_eq!(reverse_iso.get(vec![1, 2, 3]), vec![3, 2, 1]);
/// assert_eq!(reverse_iso.reverse_get(vec![3, 2, 1]), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn iso_reverse_vec<T>() -> impl Iso<Vec<T>, Vec<T>> + Clone {
    fn reversed<T>(mut items: Vec<T>) -> Vec<T> {
        items.reverse();
        items
    }
    FunctionIso::new(reversed::<T>, reversed::<T>)
}

/// Creates an Iso between `String` and its UTF-8 bytes.
///
/// `get` is total and lossless. `reverse_get` on bytes that are not valid
/// UTF-8 substitutes the replacement character; round-tripping is only
/// guaranteed for byte vectors produced by `get`. Feeding arbitrary bytes
/// through `reverse_get` is the caller's obligation, like the iso laws
/// themselves.
///
/// # Example
///
/// ```
/// use kleisli::optics::{Iso, iso_utf8};
///
/// let utf8 = iso_utf8();
/// let bytes = utf8.get("hi".to_string());
/// assert_eq!(bytes, vec![104, 105]);
/// assert_eq!(utf8.reverse_get(bytes), "hi");
/// ```
#[must_use]
pub fn iso_utf8() -> impl Iso<String, Vec<u8>> + Clone {
    FunctionIso::new(
        |text: String| text.into_bytes(),
        |bytes: Vec<u8>| String::from_utf8_lossy(&bytes).into_owned(),
    )
}

/// Creates an Iso between millisecond timestamps and `SystemTime`.
///
/// Negative milliseconds map to instants before the Unix epoch. The
/// backward direction saturates at `i64::MAX`/`i64::MIN` for instants
/// outside the representable range.
///
/// # Example
///
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use kleisli::optics::{Iso, iso_millis};
///
/// let millis = iso_millis();
/// assert_eq!(millis.get(1_500), UNIX_EPOCH + Duration::from_millis(1_500));
/// assert_eq!(millis.reverse_get(UNIX_EPOCH + Duration::from_millis(1_500)), 1_500);
/// ```
#[must_use]
pub fn iso_millis() -> impl Iso<i64, SystemTime> + Clone {
    FunctionIso::new(
        |milliseconds: i64| {
            let magnitude = Duration::from_millis(milliseconds.unsigned_abs());
            if milliseconds >= 0 {
                UNIX_EPOCH + magnitude
            } else {
                UNIX_EPOCH - magnitude
            }
        },
        |time: SystemTime| match time.duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX),
            Err(before_epoch) => i64::try_from(before_epoch.duration().as_millis())
                .map_or(i64::MIN, |magnitude| -magnitude),
        },
    )
}

/// Creates an Iso that shifts a number by a constant.
///
/// Uses wrapping arithmetic so both directions stay total and mutually
/// inverse across the whole `i64` range.
///
/// # Example
///
/// ```
/// use kleisli::optics::{Iso, iso_add};
///
/// let shifted = iso_add(10);
/// assert_eq!(shifted.get(32), 42);
/// assert_eq!(shifted.reverse_get(42), 32);
/// ```
#[must_use]
pub fn iso_add(amount: i64) -> impl Iso<i64, i64> + Clone {
    FunctionIso::new(
        move |value: i64| value.wrapping_add(amount),
        move |value: i64| value.wrapping_sub(amount),
    )
}

/// Creates an Iso that shifts a number down by a constant.
///
/// `iso_sub(n)` behaves as `iso_add(-n)`.
///
/// # Example
///
/// ```
/// use kleisli::optics::{Iso, iso_sub};
///
/// let shifted = iso_sub(10);
/// assert_eq!(shifted.get(42), 32);
/// assert_eq!(shifted.reverse_get(32), 42);
/// ```
#[must_use]
pub fn iso_sub(amount: i64) -> impl Iso<i64, i64> + Clone {
    iso_add(amount.wrapping_neg())
}

/// Creates a Prism between one-element vectors and their element.
///
/// `preview` succeeds only for vectors of length exactly one, and
/// `review` builds a singleton, so the prism laws hold. A first-element
/// accessor over longer vectors would not be lawful (rebuilding from the
/// head discards the tail), which is why this optic is a Prism restricted
/// to singletons rather than an Iso.
///
/// # Example
///
/// ```
/// use kleisli::optics::{Prism, prism_single};
///
/// let single = prism_single::<i32>();
/// assert_eq!(single.preview(&vec![7]), Some(7));
/// assert_eq!(single.preview(&vec![1, 2]), None);
/// assert_eq!(single.review(7), vec![7]);
/// ```
#[must_use]
pub fn prism_single<T: Clone>() -> impl Prism<Vec<T>, T> + Clone {
    FunctionPrism::new(
        |items: &Vec<T>| match items.as_slice() {
            [only] => Some(only.clone()),
            _ => None,
        },
        |value: T| vec![value],
        |mut items: Vec<T>| {
            if items.len() == 1 {
                items.pop()
            } else {
                None
            }
        },
    )
}
