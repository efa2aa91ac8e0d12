//! Reader Monad - environment reading computation.
//!
//! A `Reader<R, A>` wraps a pure function `R -> A`: a computation that
//! needs read-only access to an environment of type `R` before it can
//! produce its `A`. Composing Readers threads one environment through the
//! whole pipeline implicitly, which is the functional rendition of
//! dependency injection.
//!
//! The environment is never mutated by any combinator; `local` runs a
//! computation under a *transformed* environment, but the caller's value
//! is untouched.
//!
//! # Note on Type Classes
//!
//! Reader provides its own `fmap`, `flat_map`, `map2`, etc. methods
//! directly on the type rather than implementing the Functor/Monad traits.
//! The `Rc<dyn Fn>` representation forces `'static` bounds the shared
//! traits do not carry; the methods work identically to their type class
//! counterparts and satisfy the same laws.
//!
//! # Laws
//!
//! ## Functor Laws
//!
//! - Identity: `reader.fmap(|x| x) == reader`
//! - Composition: `reader.fmap(f).fmap(g) == reader.fmap(|x| g(f(x)))`
//!
//! ## Monad Laws
//!
//! - Left Identity: `Reader::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(Reader::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! ## Environment Laws
//!
//! - Ask Retrieval: `Reader::ask().run(r) == r`
//! - Local Identity: `Reader::local(|r| r, m) == m`
//! - Local Composition: `Reader::local(f, Reader::local(g, m)) == Reader::local(|r| g(f(r)), m)`
//!
//! # Examples
//!
//! Dependency injection pattern:
//!
//! ```rust
//! use kleisli::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Settings {
//!     greeting: String,
//!     name: String,
//! }
//!
//! fn greeting() -> Reader<Settings, String> {
//!     Reader::asks(|settings: Settings| settings.greeting)
//! }
//!
//! fn name() -> Reader<Settings, String> {
//!     Reader::asks(|settings: Settings| settings.name)
//! }
//!
//! let sentence = greeting().map2(name(), |greeting, name| format!("{greeting}, {name}"));
//!
//! let settings = Settings {
//!     greeting: "Hello".to_string(),
//!     name: "World".to_string(),
//! };
//! assert_eq!(sentence.run(settings), "Hello, World");
//! ```

#![forbid(unsafe_code)]

use std::rc::Rc;

/// A monad for computations that read from an environment.
///
/// `Reader<R, A>` represents a computation that, given an environment of
/// type `R`, produces a value of type `A`. The environment is immutable
/// and shared across all composed computations.
///
/// # Type Parameters
///
/// - `R`: The environment type (read-only context)
/// - `A`: The result type
///
/// # Examples
///
/// ```rust
/// use kleisli::effect::Reader;
///
/// let computation: Reader<i32, i32> = Reader::ask()
///     .flat_map(|environment| Reader::pure(environment * 2));
///
/// assert_eq!(computation.run(21), 42);
/// ```
pub struct Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// The wrapped function from environment to result.
    /// Uses Rc so the Reader can be cloned for `flat_map`.
    run_function: Rc<dyn Fn(R) -> A>,
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Creates a new Reader from a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// assert_eq!(reader.run(21), 42);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the Reader computation with the given environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment + 1);
    /// assert_eq!(reader.run(41), 42);
    /// // A Reader can be run any number of times
    /// assert_eq!(reader.run(0), 1);
    /// ```
    pub fn run(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// Creates a Reader that returns a constant value, ignoring the
    /// environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Reader;
    ///
    /// let reader: Reader<i32, &str> = Reader::pure("constant");
    /// assert_eq!(reader.run(0), "constant");
    /// assert_eq!(reader.run(100), "constant");
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Maps a function over the result of this Reader.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment);
    /// assert_eq!(reader.fmap(|value| value * 2).run(21), 42);
    /// ```
    pub fn fmap<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        Reader::new(move |environment| function((original_function)(environment)))
    }

    /// Chains this Reader with a function producing another Reader.
    ///
    /// Both computations observe the same environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment);
    /// let chained = reader.flat_map(|value| Reader::new(move |environment| value + environment));
    /// assert_eq!(chained.run(10), 20); // 10 + 10
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        let original_function = self.run_function;
        Reader::new(move |environment: R| {
            let value = (original_function)(environment.clone());
            function(value).run(environment)
        })
    }

    /// Alias for `flat_map` matching Rust's naming conventions.
    pub fn and_then<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        self.flat_map(function)
    }

    /// Sequences two Readers, discarding the first result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Reader;
    ///
    /// let first: Reader<i32, i32> = Reader::new(|environment| environment);
    /// let second: Reader<i32, &str> = Reader::pure("result");
    /// assert_eq!(first.then(second).run(42), "result");
    /// ```
    #[must_use]
    pub fn then<B>(self, next: Reader<R, B>) -> Reader<R, B>
    where
        B: 'static,
        R: Clone,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Combines two Readers using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Reader;
    ///
    /// let first: Reader<i32, i32> = Reader::new(|environment| environment);
    /// let second: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// assert_eq!(first.map2(second, |a, b| a + b).run(10), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
        R: Clone,
    {
        let self_function = self.run_function;
        let other_function = other.run_function;
        Reader::new(move |environment: R| {
            let a = (self_function)(environment.clone());
            let b = (other_function)(environment);
            function(a, b)
        })
    }

    /// Combines three Readers using a ternary function.
    pub fn map3<B, C, D, F>(
        self,
        second: Reader<R, B>,
        third: Reader<R, C>,
        function: F,
    ) -> Reader<R, D>
    where
        F: Fn(A, B, C) -> D + 'static,
        B: 'static,
        C: 'static,
        D: 'static,
        R: Clone,
    {
        let self_function = self.run_function;
        let second_function = second.run_function;
        let third_function = third.run_function;
        Reader::new(move |environment: R| {
            let a = (self_function)(environment.clone());
            let b = (second_function)(environment.clone());
            let c = (third_function)(environment);
            function(a, b, c)
        })
    }

    /// Combines two Readers into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Reader;
    ///
    /// let first: Reader<i32, i32> = Reader::new(|environment| environment);
    /// let second: Reader<i32, &str> = Reader::pure("hello");
    /// assert_eq!(first.product(second).run(42), (42, "hello"));
    /// ```
    #[must_use]
    pub fn product<B>(self, other: Reader<R, B>) -> Reader<R, (A, B)>
    where
        B: 'static,
        R: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function inside a Reader to a value inside another Reader.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Reader;
    ///
    /// let function_reader: Reader<i32, fn(i32) -> i32> = Reader::pure(|x| x + 1);
    /// let value_reader: Reader<i32, i32> = Reader::new(|environment| environment);
    /// assert_eq!(function_reader.apply(value_reader).run(41), 42);
    /// ```
    #[must_use]
    pub fn apply<B, Output>(self, other: Reader<R, B>) -> Reader<R, Output>
    where
        A: Fn(B) -> Output + 'static,
        B: 'static,
        Output: 'static,
        R: Clone,
    {
        self.map2(other, |function, value| function(value))
    }

    /// Adapts this Reader to run under a different environment type.
    ///
    /// The adapter function turns the new environment into the one this
    /// Reader expects; the result type is untouched. This is the
    /// contravariant counterpart of `fmap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Reader;
    ///
    /// #[derive(Clone)]
    /// struct Wide { narrow: i32 }
    ///
    /// let narrow_reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// let wide_reader: Reader<Wide, i32> = narrow_reader.contramap(|wide: Wide| wide.narrow);
    /// assert_eq!(wide_reader.run(Wide { narrow: 21 }), 42);
    /// ```
    pub fn contramap<R2, F>(self, adapter: F) -> Reader<R2, A>
    where
        F: Fn(R2) -> R + 'static,
        R2: 'static,
    {
        let original_function = self.run_function;
        Reader::new(move |environment| (original_function)(adapter(environment)))
    }
}

// =============================================================================
// Environment Operations
// =============================================================================

impl<Env> Reader<Env, Env>
where
    Env: Clone + 'static,
{
    /// Creates a Reader that returns the entire environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::ask();
    /// assert_eq!(reader.run(42), 42);
    /// ```
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Creates a Reader that projects a value from the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Reader;
    ///
    /// #[derive(Clone)]
    /// struct Limits { maximum: u32 }
    ///
    /// let reader: Reader<Limits, u32> = Reader::asks(|limits: Limits| limits.maximum);
    /// assert_eq!(reader.run(Limits { maximum: 64 }), 64);
    /// ```
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Runs a computation under a modified environment.
    ///
    /// The modifier transforms the outer environment into the environment
    /// the inner computation sees.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// let adjusted = Reader::local(|environment| environment + 10, reader);
    /// assert_eq!(adjusted.run(5), 30); // (5 + 10) * 2
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        let computation_function = computation.run_function;
        Self::new(move |environment| (computation_function)(modifier(environment)))
    }
}

// =============================================================================
// Clone Implementation
// =============================================================================

impl<R, A> Clone for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<R, A> std::fmt::Display for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Reader>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn reader_new_and_run() {
        let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
        assert_eq!(reader.run(21), 42);
    }

    #[rstest]
    fn reader_pure_ignores_environment() {
        let reader: Reader<i32, &str> = Reader::pure("constant");
        assert_eq!(reader.run(0), "constant");
        assert_eq!(reader.run(999), "constant");
    }

    #[rstest]
    fn reader_ask_returns_environment() {
        let reader: Reader<i32, i32> = Reader::ask();
        assert_eq!(reader.run(42), 42);
    }

    #[rstest]
    fn reader_asks_projects_environment() {
        let reader: Reader<i32, String> = Reader::asks(|environment: i32| environment.to_string());
        assert_eq!(reader.run(42), "42");
    }

    #[rstest]
    fn reader_fmap_transforms_result() {
        let reader: Reader<i32, i32> = Reader::new(|environment| environment);
        assert_eq!(reader.fmap(|value| value * 2).run(21), 42);
    }

    #[rstest]
    fn reader_flat_map_threads_same_environment() {
        let reader: Reader<i32, i32> = Reader::new(|environment| environment);
        let chained = reader.flat_map(|value| Reader::new(move |environment| value + environment));
        assert_eq!(chained.run(10), 20);
    }

    #[rstest]
    fn reader_then_discards_first_value() {
        let first: Reader<i32, i32> = Reader::new(|environment| environment);
        let second: Reader<i32, &str> = Reader::pure("kept");
        assert_eq!(first.then(second).run(7), "kept");
    }

    #[rstest]
    fn reader_local_modifies_environment() {
        let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
        let adjusted = Reader::local(|environment| environment + 10, reader);
        assert_eq!(adjusted.run(5), 30);
    }

    #[rstest]
    fn reader_contramap_adapts_environment_type() {
        let reader: Reader<usize, usize> = Reader::new(|environment| environment + 1);
        let adapted: Reader<String, usize> = reader.contramap(|text: String| text.len());
        assert_eq!(adapted.run("four".to_string()), 5);
    }

    #[rstest]
    fn reader_map2_and_product_combine() {
        let first: Reader<i32, i32> = Reader::new(|environment| environment);
        let second: Reader<i32, i32> = Reader::new(|environment| environment * 2);
        assert_eq!(first.clone().map2(second.clone(), |a, b| a + b).run(10), 30);
        assert_eq!(first.product(second).run(10), (10, 20));
    }

    #[rstest]
    fn reader_apply_feeds_value_to_function() {
        let function_reader: Reader<i32, fn(i32) -> i32> = Reader::pure(|x| x + 1);
        let value_reader: Reader<i32, i32> = Reader::ask();
        assert_eq!(function_reader.apply(value_reader).run(41), 42);
    }

    #[rstest]
    fn reader_clone_shares_behavior() {
        let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
        let cloned = reader.clone();
        assert_eq!(reader.run(21), 42);
        assert_eq!(cloned.run(21), 42);
    }

    // Local identity: local(|r| r, m) behaves as m.
    #[rstest]
    #[case(0)]
    #[case(17)]
    fn reader_local_identity_law(#[case] environment: i32) {
        let reader: Reader<i32, i32> = Reader::new(|environment| environment * 3);
        let through_local = Reader::local(|environment| environment, reader.clone());
        assert_eq!(through_local.run(environment), reader.run(environment));
    }

    // Local composition: local(f, local(g, m)) == local(|r| g(f(r)), m).
    #[rstest]
    fn reader_local_composition_law() {
        let reader: Reader<i32, i32> = Reader::ask();
        let f = |environment: i32| environment + 1;
        let g = |environment: i32| environment * 2;

        let nested = Reader::local(f, Reader::local(g, reader.clone()));
        let fused = Reader::local(move |environment| g(f(environment)), reader);

        assert_eq!(nested.run(10), fused.run(10));
    }

    #[rstest]
    fn reader_display_is_opaque() {
        let reader: Reader<i32, i32> = Reader::ask();
        assert_eq!(format!("{reader}"), "<Reader>");
    }
}
