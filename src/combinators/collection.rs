//! Combinators over ordered sequences of actions.
//!
//! Each one is a strict left-to-right fold with the state as accumulator:
//! the state produced by action `i` is the input of action `i + 1`. An
//! empty sequence returns the input state untouched.
//!
//! `each` and `try_each` never build a result collection, which makes
//! them the cheaper choice when individual results are not needed.

use crate::core::Action;

/// Runs every action and collects the results. See [`all`].
#[derive(Clone)]
#[must_use = "actions do nothing unless run"]
pub struct All<A> {
    actions: Vec<A>,
}

impl<S, A> Action<S> for All<A>
where
    A: Action<S>,
{
    type Output = Vec<A::Output>;

    fn run(&self, state: S) -> (S, Vec<A::Output>) {
        let mut results = Vec::with_capacity(self.actions.len());
        let state = self.actions.iter().fold(state, |state, action| {
            let (state, value) = action.run(state);
            results.push(value);
            state
        });
        (state, results)
    }
}

/// Runs every action, discarding results. See [`each`].
#[derive(Clone)]
#[must_use = "actions do nothing unless run"]
pub struct Each<A> {
    actions: Vec<A>,
}

impl<S, A> Action<S> for Each<A>
where
    A: Action<S>,
{
    type Output = ();

    fn run(&self, state: S) -> (S, ()) {
        let state = self
            .actions
            .iter()
            .fold(state, |state, action| action.run(state).0);
        (state, ())
    }
}

/// Runs actions until the first failure, collecting successes. See
/// [`try_all`].
#[derive(Clone)]
#[must_use = "actions do nothing unless run"]
pub struct TryAll<A> {
    actions: Vec<A>,
}

impl<S, A, T, E> Action<S> for TryAll<A>
where
    A: Action<S, Output = Result<T, E>>,
{
    type Output = Result<Vec<T>, E>;

    fn run(&self, mut state: S) -> (S, Result<Vec<T>, E>) {
        let mut results = Vec::with_capacity(self.actions.len());
        for (index, action) in self.actions.iter().enumerate() {
            let (next, outcome) = action.run(state);
            state = next;
            match outcome {
                Ok(value) => results.push(value),
                Err(error) => {
                    tracing::trace!(step = index, "try_all short-circuited on failure");
                    return (state, Err(error));
                }
            }
        }
        (state, Ok(results))
    }
}

/// Runs actions until the first failure, discarding successes. See
/// [`try_each`].
#[derive(Clone)]
#[must_use = "actions do nothing unless run"]
pub struct TryEach<A> {
    actions: Vec<A>,
}

impl<S, A, T, E> Action<S> for TryEach<A>
where
    A: Action<S, Output = Result<T, E>>,
{
    type Output = Result<(), E>;

    fn run(&self, mut state: S) -> (S, Result<(), E>) {
        for (index, action) in self.actions.iter().enumerate() {
            let (next, outcome) = action.run(state);
            state = next;
            if let Err(error) = outcome {
                tracing::trace!(step = index, "try_each short-circuited on failure");
                return (state, Err(error));
            }
        }
        (state, Ok(()))
    }
}

/// Run `actions` in order and collect their results in the same order.
///
/// # Example
///
/// ```rust
/// use act::{all, get_state, update_state, Action};
///
/// let step = |n: i32| update_state(move |s: i32| s + n).and_then(|()| get_state::<i32>());
///
/// assert_eq!(all([step(2), step(3)]).run(4), (9, vec![6, 9]));
/// ```
pub fn all<S, I>(actions: I) -> All<I::Item>
where
    I: IntoIterator,
    I::Item: Action<S>,
{
    All {
        actions: actions.into_iter().collect(),
    }
}

/// Run `actions` in order, keeping only the final state.
pub fn each<S, I>(actions: I) -> Each<I::Item>
where
    I: IntoIterator,
    I::Item: Action<S>,
{
    Each {
        actions: actions.into_iter().collect(),
    }
}

/// Run `Result`-producing `actions` in order, stopping at the first failure.
///
/// On success yields every payload in input order. On failure yields that
/// failure together with the state the failing action produced; later
/// actions are not run and earlier state changes are kept.
///
/// # Example
///
/// ```rust
/// use act::{from_fn, try_all, Action};
///
/// let tick = |outcome: Result<i32, &'static str>| from_fn(move |n: u32| (n + 1, outcome));
///
/// let actions = try_all([tick(Ok(1)), tick(Err("boom")), tick(Ok(2))]);
/// assert_eq!(actions.run(0), (2, Err("boom")));
///
/// let actions = try_all([tick(Ok(1)), tick(Ok(2))]);
/// assert_eq!(actions.run(0), (2, Ok(vec![1, 2])));
/// ```
pub fn try_all<S, I, T, E>(actions: I) -> TryAll<I::Item>
where
    I: IntoIterator,
    I::Item: Action<S, Output = Result<T, E>>,
{
    TryAll {
        actions: actions.into_iter().collect(),
    }
}

/// Like [`try_all`] but discards success payloads.
pub fn try_each<S, I, T, E>(actions: I) -> TryEach<I::Item>
where
    I: IntoIterator,
    I::Item: Action<S, Output = Result<T, E>>,
{
    TryEach {
        actions: actions.into_iter().collect(),
    }
}
