//! Sequencing combinators: `bind` and its short-circuiting form `try_bind`.
//!
//! State always flows strictly left to right. The continuation is called
//! only after the first action has finished and its state has been handed
//! over.

use crate::core::Action;

/// Monadic bind. See [`Action::and_then`].
#[derive(Clone, Copy)]
#[must_use = "actions do nothing unless run"]
pub struct AndThen<A, F> {
    first: A,
    f: F,
}

impl<A, F> AndThen<A, F> {
    pub(crate) fn new(first: A, f: F) -> Self {
        Self { first, f }
    }
}

impl<S, A, F, B> Action<S> for AndThen<A, F>
where
    A: Action<S>,
    F: Fn(A::Output) -> B,
    B: Action<S>,
{
    type Output = B::Output;

    fn run(&self, state: S) -> (S, B::Output) {
        let (state, value) = self.first.run(state);
        (self.f)(value).run(state)
    }
}

/// Bind over `Result`-producing actions. See [`Action::try_and_then`].
#[derive(Clone, Copy)]
#[must_use = "actions do nothing unless run"]
pub struct TryAndThen<A, F> {
    first: A,
    f: F,
}

impl<A, F> TryAndThen<A, F> {
    pub(crate) fn new(first: A, f: F) -> Self {
        Self { first, f }
    }
}

impl<S, A, F, B, T, E, U> Action<S> for TryAndThen<A, F>
where
    A: Action<S, Output = Result<T, E>>,
    F: Fn(T) -> B,
    B: Action<S, Output = Result<U, E>>,
{
    type Output = Result<U, E>;

    fn run(&self, state: S) -> (S, Result<U, E>) {
        match self.first.run(state) {
            (state, Ok(value)) => (self.f)(value).run(state),
            (state, Err(error)) => {
                tracing::trace!("try_bind short-circuited on failure");
                (state, Err(error))
            }
        }
    }
}

/// Run `first`, build the next action from its result, and run that with
/// the updated state.
///
/// # Example
///
/// ```rust
/// use act::{bind, get_state, set_state, Action};
///
/// // Swap in a new state and return the old one.
/// let replace = bind(get_state::<String>(), |old| {
///     set_state("new".to_string()).map(move |()| old.clone())
/// });
///
/// assert_eq!(
///     replace.run("old".to_string()),
///     ("new".to_string(), "old".to_string())
/// );
/// ```
pub fn bind<S, A, F, B>(first: A, f: F) -> AndThen<A, F>
where
    A: Action<S>,
    F: Fn(A::Output) -> B,
    B: Action<S>,
{
    AndThen::new(first, f)
}

/// Run `first`; on `Ok(value)` continue with `f(value)`, on `Err` stop and
/// return the failure with the state `first` produced.
pub fn try_bind<S, A, F, B, T, E, U>(first: A, f: F) -> TryAndThen<A, F>
where
    A: Action<S, Output = Result<T, E>>,
    F: Fn(T) -> B,
    B: Action<S, Output = Result<U, E>>,
{
    TryAndThen::new(first, f)
}
