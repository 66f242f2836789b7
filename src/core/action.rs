//! The `Action` trait and its invocation primitives.
//!
//! An action is a pure function from a state value to a pair of the
//! updated state and a result. Actions are re-runnable: `run` borrows the
//! action and takes the state by value, so no prior state can be aliased
//! by a later step.

use crate::combinators::{AndThen, Map, MapError, MapOk, Traced, TryAndThen};
use std::rc::Rc;
use std::sync::Arc;

/// A state-threading computation.
///
/// Running an action with a state `s` produces `(s', result)`. Running the
/// same action twice with equal input states yields equal outputs as long
/// as the closures it captures are side-effect free. That is a caller
/// obligation; the library cannot enforce it.
///
/// # Example
///
/// ```rust
/// use act::prelude::*;
///
/// let counter = update_state(|n: u32| n + 1).and_then(|()| get_state::<u32>());
///
/// assert_eq!(counter.run(41), (42, 42));
/// assert_eq!(counter.eval(0), 1);
/// assert_eq!(counter.exec(9), 10);
/// ```
pub trait Action<S> {
    /// The result produced alongside the new state.
    type Output;

    /// Run the action, returning the new state and the result.
    fn run(&self, state: S) -> (S, Self::Output);

    /// Run the action and keep only the result.
    fn eval(&self, state: S) -> Self::Output {
        self.run(state).1
    }

    /// Run the action and keep only the new state.
    fn exec(&self, state: S) -> S {
        self.run(state).0
    }

    /// Transform the result, keeping the new state.
    fn map<F, B>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> B,
    {
        Map::new(self, f)
    }

    /// Transform the success payload of a `Result`-producing action.
    ///
    /// Failures pass through untouched together with their state.
    fn map_ok<F, T, E, U>(self, f: F) -> MapOk<Self, F>
    where
        Self: Sized + Action<S, Output = Result<T, E>>,
        F: Fn(T) -> U,
    {
        MapOk::new(self, f)
    }

    /// Transform the failure payload of a `Result`-producing action.
    fn map_error<F, T, E, E2>(self, f: F) -> MapError<Self, F>
    where
        Self: Sized + Action<S, Output = Result<T, E>>,
        F: Fn(E) -> E2,
    {
        MapError::new(self, f)
    }

    /// Sequence this action with one built from its result (monadic bind).
    ///
    /// The state produced by `self` is the input state of the next action.
    fn and_then<F, B>(self, f: F) -> AndThen<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> B,
        B: Action<S>,
    {
        AndThen::new(self, f)
    }

    /// Bind on success, short-circuit on failure.
    ///
    /// When `self` fails, `f` is never called and the failure is returned
    /// with the state `self` produced.
    fn try_and_then<F, T, E, B, U>(self, f: F) -> TryAndThen<Self, F>
    where
        Self: Sized + Action<S, Output = Result<T, E>>,
        F: Fn(T) -> B,
        B: Action<S, Output = Result<U, E>>,
    {
        TryAndThen::new(self, f)
    }

    /// Wrap the action in a `tracing` span named `name`.
    fn traced(self, name: &'static str) -> Traced<Self>
    where
        Self: Sized,
    {
        Traced::new(self, name)
    }

    /// Erase the concrete type so differently-built actions can share a
    /// collection.
    fn boxed<'a>(self) -> BoxedAction<'a, S, Self::Output>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

/// A type-erased action.
pub type BoxedAction<'a, S, A> = Box<dyn Action<S, Output = A> + 'a>;

impl<S, T> Action<S> for &T
where
    T: Action<S> + ?Sized,
{
    type Output = T::Output;

    fn run(&self, state: S) -> (S, Self::Output) {
        (**self).run(state)
    }
}

impl<S, T> Action<S> for Box<T>
where
    T: Action<S> + ?Sized,
{
    type Output = T::Output;

    fn run(&self, state: S) -> (S, Self::Output) {
        (**self).run(state)
    }
}

impl<S, T> Action<S> for Rc<T>
where
    T: Action<S> + ?Sized,
{
    type Output = T::Output;

    fn run(&self, state: S) -> (S, Self::Output) {
        (**self).run(state)
    }
}

impl<S, T> Action<S> for Arc<T>
where
    T: Action<S> + ?Sized,
{
    type Output = T::Output;

    fn run(&self, state: S) -> (S, Self::Output) {
        (**self).run(state)
    }
}

/// Action backed by a plain state transition function.
///
/// Built with [`from_fn`].
#[derive(Clone, Copy)]
#[must_use = "actions do nothing unless run"]
pub struct FromFn<F> {
    f: F,
}

impl<S, A, F> Action<S> for FromFn<F>
where
    F: Fn(S) -> (S, A),
{
    type Output = A;

    fn run(&self, state: S) -> (S, A) {
        (self.f)(state)
    }
}

/// Lift a transition function `S -> (S, A)` into an action.
///
/// # Example
///
/// ```rust
/// use act::{from_fn, Action};
///
/// let pop = from_fn(|mut stack: Vec<i32>| {
///     let top = stack.pop();
///     (stack, top)
/// });
///
/// assert_eq!(pop.run(vec![1, 2]), (vec![1], Some(2)));
/// assert_eq!(pop.run(vec![]), (vec![], None));
/// ```
pub fn from_fn<S, A, F>(f: F) -> FromFn<F>
where
    F: Fn(S) -> (S, A),
{
    FromFn { f }
}

/// Run `action` with `state`, returning `(new_state, result)`.
pub fn run<S, A>(action: &A, state: S) -> (S, A::Output)
where
    A: Action<S> + ?Sized,
{
    action.run(state)
}

/// Run `action` with `state`, discarding the new state.
pub fn eval<S, A>(action: &A, state: S) -> A::Output
where
    A: Action<S> + ?Sized,
{
    action.run(state).1
}

/// Run `action` with `state`, discarding the result.
pub fn exec<S, A>(action: &A, state: S) -> S
where
    A: Action<S> + ?Sized,
{
    action.run(state).0
}
