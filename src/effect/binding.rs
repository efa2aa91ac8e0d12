//! Lens-focused do-notation: building up a record one field at a time.
//!
//! A common pipeline shape starts from an initial record and fills in one
//! field per step, where each step may read the environment and may fail.
//! These combinators express that directly: a [`Lens`] names the field,
//! and the step's success value is written back through the lens into a
//! new record. The record itself is never mutated; every step produces an
//! updated copy.
//!
//! Three flavors mirror the monadic/applicative split:
//!
//! - `bind_field`: the step sees the record built so far (monadic)
//! - `let_field`: the step is a pure computation over the record
//! - `ap_field`: the step is independent of the record (applicative);
//!   it is still evaluated sequentially, after the record
//!
//! Free-function counterparts for plain `Result` pipelines live in this
//! module too, following the same naming.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::effect::ReaderResult;
//! use kleisli::lens;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct FullName {
//!     given: String,
//!     family: String,
//! }
//!
//! let assembled: ReaderResult<(), FullName, String> =
//!     ReaderResult::ok(FullName::default())
//!         .bind_field(lens!(FullName, family), |_| ReaderResult::ok("Doe".to_string()))
//!         .bind_field(lens!(FullName, given), |_| ReaderResult::ok("John".to_string()));
//!
//! let full_name = assembled
//!     .fmap(|name| format!("{} {}", name.given, name.family));
//! assert_eq!(full_name.run(()), Ok("John Doe".to_string()));
//! ```

use crate::optics::Lens;

use super::reader_result::ReaderResult;

impl<R, S, E> ReaderResult<R, S, E>
where
    R: 'static,
    S: 'static,
    E: 'static,
{
    /// Runs a dependent step and writes its success value into the field.
    ///
    /// `step` sees the record built so far; on success the produced value
    /// is set through the lens, yielding the next record. A failing step
    /// short-circuits the pipeline, matching `flat_map`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    /// use kleisli::lens;
    ///
    /// #[derive(Clone, Debug, Default, PartialEq)]
    /// struct Plan { workers: u32, queue_depth: u32 }
    ///
    /// let planned: ReaderResult<u32, Plan, String> = ReaderResult::ok(Plan::default())
    ///     .bind_field(lens!(Plan, workers), |_| ReaderResult::ask())
    ///     .bind_field(lens!(Plan, queue_depth), |plan| {
    ///         ReaderResult::ok(plan.workers * 4)
    ///     });
    ///
    /// assert_eq!(planned.run(3), Ok(Plan { workers: 3, queue_depth: 12 }));
    /// ```
    pub fn bind_field<A, L, F>(self, lens: L, step: F) -> Self
    where
        S: Clone,
        A: 'static,
        L: Lens<S, A> + Clone + 'static,
        F: Fn(&S) -> ReaderResult<R, A, E> + 'static,
        R: Clone,
    {
        self.flat_map(move |state: S| {
            let lens = lens.clone();
            step(&state).fmap(move |value| lens.set(state.clone(), value))
        })
    }

    /// Computes the field purely from the record built so far.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    /// use kleisli::lens;
    ///
    /// #[derive(Clone, Debug, Default, PartialEq)]
    /// struct Summary { count: usize, label: String }
    ///
    /// let summarized: ReaderResult<(), Summary, String> =
    ///     ReaderResult::ok(Summary { count: 3, label: String::new() })
    ///         .let_field(lens!(Summary, label), |summary| format!("{} items", summary.count));
    ///
    /// assert_eq!(
    ///     summarized.run(()),
    ///     Ok(Summary { count: 3, label: "3 items".to_string() })
    /// );
    /// ```
    pub fn let_field<A, L, F>(self, lens: L, compute: F) -> Self
    where
        A: 'static,
        L: Lens<S, A> + 'static,
        F: Fn(&S) -> A + 'static,
    {
        self.fmap(move |state: S| {
            let value = compute(&state);
            lens.set(state, value)
        })
    }

    /// Runs an independent step and writes its success value into the
    /// field.
    ///
    /// The step never sees the record; it is the applicative counterpart
    /// of `bind_field`. Evaluation is still sequential (record first, then
    /// step) and the first failure wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderResult;
    /// use kleisli::lens;
    ///
    /// #[derive(Clone, Debug, Default, PartialEq)]
    /// struct Endpoints { health: String }
    ///
    /// let configured: ReaderResult<String, Endpoints, String> =
    ///     ReaderResult::ok(Endpoints::default()).ap_field(
    ///         lens!(Endpoints, health),
    ///         ReaderResult::asks(|base: String| format!("{base}/health")),
    ///     );
    ///
    /// assert_eq!(
    ///     configured.run("https://api.example.test".to_string()),
    ///     Ok(Endpoints { health: "https://api.example.test/health".to_string() })
    /// );
    /// ```
    pub fn ap_field<A, L>(self, lens: L, step: ReaderResult<R, A, E>) -> Self
    where
        A: 'static,
        L: Lens<S, A> + 'static,
        R: Clone,
    {
        self.map2(step, move |state, value| lens.set(state, value))
    }
}

// =============================================================================
// Result Counterparts
// =============================================================================

/// Runs a dependent failable step and writes its value into the field.
///
/// The `Result` counterpart of [`ReaderResult::bind_field`]: a failing
/// state or a failing step short-circuits.
///
/// # Examples
///
/// ```rust
/// use kleisli::effect::bind_field;
/// use kleisli::lens;
///
/// #[derive(Clone, Debug, Default, PartialEq)]
/// struct Parsed { port: u16 }
///
/// let parsed: Result<Parsed, String> = bind_field(
///     Ok(Parsed::default()),
///     lens!(Parsed, port),
///     |_| "8080".parse::<u16>().map_err(|e| e.to_string()),
/// );
/// assert_eq!(parsed, Ok(Parsed { port: 8080 }));
/// ```
pub fn bind_field<S, A, E, L, F>(state: Result<S, E>, lens: L, step: F) -> Result<S, E>
where
    L: Lens<S, A>,
    F: FnOnce(&S) -> Result<A, E>,
{
    state.and_then(|record| step(&record).map(|value| lens.set(record, value)))
}

/// Computes the field purely from the record built so far.
///
/// The `Result` counterpart of [`ReaderResult::let_field`].
pub fn let_field<S, A, E, L, F>(state: Result<S, E>, lens: L, compute: F) -> Result<S, E>
where
    L: Lens<S, A>,
    F: FnOnce(&S) -> A,
{
    state.map(|record| {
        let value = compute(&record);
        lens.set(record, value)
    })
}

/// Writes an independent step's value into the field.
///
/// The `Result` counterpart of [`ReaderResult::ap_field`]; the state's
/// failure wins over the step's on a double failure.
pub fn ap_field<S, A, E, L>(state: Result<S, E>, lens: L, step: Result<A, E>) -> Result<S, E>
where
    L: Lens<S, A>,
{
    state.and_then(|record| step.map(|value| lens.set(record, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lens;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Person {
        given_name: String,
        last_name: String,
    }

    #[rstest]
    fn reader_result_bind_field_assembles_record_in_order() {
        let assembled: ReaderResult<(), Person, String> = ReaderResult::ok(Person::default())
            .bind_field(lens!(Person, last_name), |_| {
                ReaderResult::ok("Doe".to_string())
            })
            .bind_field(lens!(Person, given_name), |_| {
                ReaderResult::ok("John".to_string())
            });

        let full_name =
            assembled.fmap(|person| format!("{} {}", person.given_name, person.last_name));
        assert_eq!(full_name.run(()), Ok("John Doe".to_string()));
    }

    #[rstest]
    fn reader_result_bind_field_sees_previous_fields() {
        let assembled: ReaderResult<(), Person, String> = ReaderResult::ok(Person::default())
            .bind_field(lens!(Person, last_name), |_| {
                ReaderResult::ok("Doe".to_string())
            })
            .bind_field(lens!(Person, given_name), |person| {
                ReaderResult::ok(format!("J. {}", person.last_name))
            });

        assert_eq!(
            assembled.run(()),
            Ok(Person {
                given_name: "J. Doe".to_string(),
                last_name: "Doe".to_string(),
            })
        );
    }

    #[rstest]
    fn reader_result_bind_field_short_circuits_later_steps() {
        let later_steps = Rc::new(Cell::new(0_u32));
        let observed = Rc::clone(&later_steps);

        let assembled: ReaderResult<(), Person, String> = ReaderResult::ok(Person::default())
            .bind_field(lens!(Person, last_name), |_| {
                ReaderResult::err("registry unavailable".to_string())
            })
            .bind_field(lens!(Person, given_name), move |_| {
                observed.set(observed.get() + 1);
                ReaderResult::ok("John".to_string())
            });

        assert_eq!(assembled.run(()), Err("registry unavailable".to_string()));
        assert_eq!(later_steps.get(), 0);
    }

    #[rstest]
    fn reader_result_let_field_is_pure() {
        let labelled: ReaderResult<(), Person, String> = ReaderResult::ok(Person {
            given_name: "john".to_string(),
            last_name: String::new(),
        })
        .let_field(lens!(Person, given_name), |person| {
            person.given_name.to_uppercase()
        });

        assert_eq!(
            labelled.run(()).map(|person| person.given_name),
            Ok("JOHN".to_string())
        );
    }

    #[rstest]
    fn reader_result_ap_field_reads_environment_not_state() {
        let configured: ReaderResult<String, Person, String> =
            ReaderResult::ok(Person::default()).ap_field(
                lens!(Person, last_name),
                ReaderResult::asks(|environment: String| environment),
            );

        assert_eq!(
            configured.run("Smith".to_string()).map(|p| p.last_name),
            Ok("Smith".to_string())
        );
    }

    #[rstest]
    fn result_bind_field_short_circuits_on_failed_state() {
        let step_calls = Cell::new(0_u32);
        let failed: Result<Person, String> = Err("earlier failure".to_string());

        let outcome = bind_field(failed, lens!(Person, last_name), |_| {
            step_calls.set(step_calls.get() + 1);
            Ok("Doe".to_string())
        });

        assert_eq!(outcome, Err("earlier failure".to_string()));
        assert_eq!(step_calls.get(), 0);
    }

    #[rstest]
    fn result_let_and_ap_field_write_through_lens() {
        let base: Result<Person, String> = Ok(Person::default());
        let named = let_field(base, lens!(Person, given_name), |_| "Ada".to_string());
        let completed = ap_field(named, lens!(Person, last_name), Ok("Lovelace".to_string()));

        assert_eq!(
            completed,
            Ok(Person {
                given_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            })
        );
    }
}
