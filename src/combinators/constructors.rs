//! Leaf actions: constants, outcomes and state access.
//!
//! Following the zero-cost convention, every constructor returns
//! `impl Action` built on [`from_fn`].

use crate::core::{from_fn, Action};

/// Action that leaves the state alone and yields `value`.
///
/// Identity element for [`bind`](crate::bind).
pub fn pure<S, A>(value: A) -> impl Action<S, Output = A>
where
    A: Clone,
{
    from_fn(move |state: S| (state, value.clone()))
}

/// `Result`-producing action that succeeds with `value`.
pub fn ok<S, T, E>(value: T) -> impl Action<S, Output = Result<T, E>>
where
    T: Clone,
{
    from_fn(move |state: S| (state, Ok(value.clone())))
}

/// `Result`-producing action that fails with `value`.
pub fn error<S, T, E>(value: E) -> impl Action<S, Output = Result<T, E>>
where
    E: Clone,
{
    from_fn(move |state: S| (state, Err(value.clone())))
}

/// Action that exposes the current state as its result.
///
/// # Example
///
/// ```rust
/// use act::{get_state, Action};
///
/// assert_eq!(get_state::<&str>().run("idle"), ("idle", "idle"));
/// ```
pub fn get_state<S>() -> impl Action<S, Output = S>
where
    S: Clone,
{
    from_fn(|state: S| (state.clone(), state))
}

/// Action that replaces whatever state it receives with `value`.
pub fn set_state<S>(value: S) -> impl Action<S, Output = ()>
where
    S: Clone,
{
    from_fn(move |_: S| (value.clone(), ()))
}

/// Action that applies `updater` to the current state.
///
/// # Example
///
/// ```rust
/// use act::{update_state, Action};
///
/// let double = update_state(|n: i32| n * 2);
/// assert_eq!(double.run(21), (42, ()));
/// ```
pub fn update_state<S, F>(updater: F) -> impl Action<S, Output = ()>
where
    F: Fn(S) -> S,
{
    from_fn(move |state: S| (updater(state), ()))
}

/// Action that yields a projection of the current state.
///
/// Unlike [`get_state`] it only borrows the state, so `S` need not be
/// `Clone`.
pub fn inspect<S, A, F>(f: F) -> impl Action<S, Output = A>
where
    F: Fn(&S) -> A,
{
    from_fn(move |state: S| {
        let value = f(&state);
        (state, value)
    })
}

/// `Result`-producing check: `Ok(())` when `predicate` holds on the current
/// state, `Err(error)` otherwise.
///
/// Unlike [`Guard`](crate::Guard) the predicate may borrow local data.
///
/// # Example
///
/// ```rust
/// use act::{ensure, update_state, Action};
///
/// let withdraw = ensure(|balance: &u32| *balance >= 30, "insufficient funds")
///     .try_and_then(|()| update_state(|balance: u32| balance - 30).map(Ok));
///
/// assert_eq!(withdraw.run(100), (70, Ok(())));
/// assert_eq!(withdraw.run(10), (10, Err("insufficient funds")));
/// ```
pub fn ensure<S, E, P>(predicate: P, error: E) -> Ensure<P, E>
where
    P: Fn(&S) -> bool,
    E: Clone,
{
    Ensure { predicate, error }
}

/// State check built with [`ensure`].
///
/// Cloneable whenever the predicate and error payload are.
#[derive(Clone, Copy)]
#[must_use = "actions do nothing unless run"]
pub struct Ensure<P, E> {
    predicate: P,
    error: E,
}

impl<S, P, E> Action<S> for Ensure<P, E>
where
    P: Fn(&S) -> bool,
    E: Clone,
{
    type Output = Result<(), E>;

    fn run(&self, state: S) -> (S, Result<(), E>) {
        let outcome = if (self.predicate)(&state) {
            Ok(())
        } else {
            Err(self.error.clone())
        };
        (state, outcome)
    }
}
