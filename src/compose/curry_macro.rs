//! The curry/uncurry macro family - signature-shape adapters.
//!
//! Currying transforms a function of several arguments into a chain of
//! single-argument functions; uncurrying is its inverse. These are pure
//! shape adapters with one law between them: for any function `f` of
//! arity N, `uncurryN!(curryN!(f))` behaves exactly as `f`.
//!
//! # Design Decisions
//!
//! The curry macros use `std::rc::Rc` internally to share the function and
//! already-applied arguments across closure invocations. This allows:
//!
//! - The curried function to be called multiple times
//! - Partial applications to be reused
//! - Arguments that don't implement `Copy` to work correctly
//!
//! The returned closures implement `Fn`, so they compose with `compose!`,
//! `pipe!`, and the rest of the crate.

/// Converts a 2-argument function into curried form.
///
/// Given `f(a, b) -> c`, returns a closure taking `a` that returns a
/// closure taking `b`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Argument types must implement [`Clone`] (for reusable partial
///   applications)
///
/// # Examples
///
/// ```
/// use kleisli::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried_add = curry2!(add);
/// assert_eq!(curried_add(5)(3), 8);
///
/// // Partial applications are reusable
/// let add_ten = curried_add(10);
/// assert_eq!(add_ten(1), 11);
/// assert_eq!(add_ten(2), 12);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                    arg2,
                )
            }
        }
    }};
}

/// Converts a 3-argument function into curried form.
///
/// # Examples
///
/// ```
/// use kleisli::curry3;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 { value.max(low).min(high) }
///
/// let curried = curry3!(clamp);
/// let percentage = curried(0)(100);
/// assert_eq!(percentage(150), 100);
/// assert_eq!(percentage(-3), 0);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    function(
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                        arg3,
                    )
                }
            }
        }
    }};
}

/// Converts a 4-argument function into curried form.
///
/// # Examples
///
/// ```
/// use kleisli::curry4;
///
/// fn join4(a: String, b: String, c: String, d: String) -> String {
///     format!("{a}{b}{c}{d}")
/// }
///
/// let curried = curry4!(join4);
/// let joined = curried("a".into())("b".into())("c".into())("d".into());
/// assert_eq!(joined, "abcd");
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    let function = ::std::rc::Rc::clone(&function);
                    let arg1 = ::std::rc::Rc::clone(&arg1);
                    let arg2 = ::std::rc::Rc::clone(&arg2);
                    let arg3 = ::std::rc::Rc::new(arg3);
                    move |arg4| {
                        function(
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg3)),
                            arg4,
                        )
                    }
                }
            }
        }
    }};
}

/// Converts a curried 2-stage function back into a 2-argument function.
///
/// Inverse of [`curry2!`]: `uncurry2!(curry2!(f))` behaves as `f`.
///
/// # Examples
///
/// ```
/// use kleisli::{curry2, uncurry2};
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let roundtripped = uncurry2!(curry2!(add));
/// assert_eq!(roundtripped(5, 3), add(5, 3));
/// ```
#[macro_export]
macro_rules! uncurry2 {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |arg1, arg2| function(arg1)(arg2)
    }};
}

/// Converts a curried 3-stage function back into a 3-argument function.
///
/// Inverse of [`curry3!`].
///
/// # Examples
///
/// ```
/// use kleisli::{curry3, uncurry3};
///
/// let volume = |w: i32, h: i32, d: i32| w * h * d;
/// let roundtripped = uncurry3!(curry3!(volume));
/// assert_eq!(roundtripped(2, 3, 4), 24);
/// ```
#[macro_export]
macro_rules! uncurry3 {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |arg1, arg2, arg3| function(arg1)(arg2)(arg3)
    }};
}

/// Converts a curried 4-stage function back into a 4-argument function.
///
/// Inverse of [`curry4!`].
///
/// # Examples
///
/// ```
/// use kleisli::{curry4, uncurry4};
///
/// let sum4 = |a: i32, b: i32, c: i32, d: i32| a + b + c + d;
/// let roundtripped = uncurry4!(curry4!(sum4));
/// assert_eq!(roundtripped(1, 2, 3, 4), 10);
/// ```
#[macro_export]
macro_rules! uncurry4 {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |arg1, arg2, arg3, arg4| function(arg1)(arg2)(arg3)(arg4)
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn curry2_partial_application_is_reusable() {
        let multiply = |first: i32, second: i32| first * second;
        let curried = curry2!(multiply);
        let double = curried(2);
        let triple = curried(3);

        assert_eq!(double(5), 10);
        assert_eq!(triple(5), 15);
    }

    #[test]
    fn curry2_works_with_non_copy_arguments() {
        let concat = |first: String, second: String| format!("{first}{second}");
        let curried = curry2!(concat);
        let prefixed = curried("pre-".to_string());

        assert_eq!(prefixed("a".to_string()), "pre-a");
        assert_eq!(prefixed("b".to_string()), "pre-b");
    }

    #[test]
    fn curry3_stages_apply_in_order() {
        let describe = |a: i32, b: i32, c: i32| format!("{a}-{b}-{c}");
        assert_eq!(curry3!(describe)(1)(2)(3), "1-2-3");
    }

    #[test]
    fn uncurry2_roundtrip_matches_original() {
        let subtract = |first: i32, second: i32| first - second;
        let roundtripped = uncurry2!(curry2!(subtract));
        assert_eq!(roundtripped(10, 4), subtract(10, 4));
    }

    #[test]
    fn uncurry3_roundtrip_matches_original() {
        let middle = |a: i32, b: i32, c: i32| b - a - c;
        let roundtripped = uncurry3!(curry3!(middle));
        assert_eq!(roundtripped(1, 10, 2), middle(1, 10, 2));
    }

    #[test]
    fn uncurry4_roundtrip_matches_original() {
        let weave = |a: String, b: String, c: String, d: String| format!("{a}{c}{b}{d}");
        let roundtripped = uncurry4!(curry4!(weave));
        assert_eq!(
            roundtripped("1".into(), "2".into(), "3".into(), "4".into()),
            "1324"
        );
    }

    #[test]
    fn uncurry_accepts_hand_written_curried_closures() {
        let curried = |a: i32| move |b: i32| a + b;
        let flat = uncurry2!(curried);
        assert_eq!(flat(2, 3), 5);
    }
}
