//! Result transformers: `map`, `map_ok`, `map_error`.

use crate::core::Action;

/// Action whose result is passed through a function. See [`Action::map`].
#[derive(Clone, Copy)]
#[must_use = "actions do nothing unless run"]
pub struct Map<A, F> {
    action: A,
    f: F,
}

impl<A, F> Map<A, F> {
    pub(crate) fn new(action: A, f: F) -> Self {
        Self { action, f }
    }
}

impl<S, A, F, B> Action<S> for Map<A, F>
where
    A: Action<S>,
    F: Fn(A::Output) -> B,
{
    type Output = B;

    fn run(&self, state: S) -> (S, B) {
        let (state, value) = self.action.run(state);
        (state, (self.f)(value))
    }
}

/// Action whose success payload is passed through a function. See
/// [`Action::map_ok`].
#[derive(Clone, Copy)]
#[must_use = "actions do nothing unless run"]
pub struct MapOk<A, F> {
    action: A,
    f: F,
}

impl<A, F> MapOk<A, F> {
    pub(crate) fn new(action: A, f: F) -> Self {
        Self { action, f }
    }
}

impl<S, A, F, T, E, U> Action<S> for MapOk<A, F>
where
    A: Action<S, Output = Result<T, E>>,
    F: Fn(T) -> U,
{
    type Output = Result<U, E>;

    fn run(&self, state: S) -> (S, Result<U, E>) {
        let (state, outcome) = self.action.run(state);
        (state, outcome.map(&self.f))
    }
}

/// Action whose failure payload is passed through a function. See
/// [`Action::map_error`].
#[derive(Clone, Copy)]
#[must_use = "actions do nothing unless run"]
pub struct MapError<A, F> {
    action: A,
    f: F,
}

impl<A, F> MapError<A, F> {
    pub(crate) fn new(action: A, f: F) -> Self {
        Self { action, f }
    }
}

impl<S, A, F, T, E, E2> Action<S> for MapError<A, F>
where
    A: Action<S, Output = Result<T, E>>,
    F: Fn(E) -> E2,
{
    type Output = Result<T, E2>;

    fn run(&self, state: S) -> (S, Result<T, E2>) {
        let (state, outcome) = self.action.run(state);
        (state, outcome.map_err(&self.f))
    }
}

/// Free-function form of [`Action::map`].
pub fn map<S, A, F, B>(action: A, f: F) -> Map<A, F>
where
    A: Action<S>,
    F: Fn(A::Output) -> B,
{
    Map::new(action, f)
}

/// Free-function form of [`Action::map_ok`].
pub fn map_ok<S, A, F, T, E, U>(action: A, f: F) -> MapOk<A, F>
where
    A: Action<S, Output = Result<T, E>>,
    F: Fn(T) -> U,
{
    MapOk::new(action, f)
}

/// Free-function form of [`Action::map_error`].
pub fn map_error<S, A, F, T, E, E2>(action: A, f: F) -> MapError<A, F>
where
    A: Action<S, Output = Result<T, E>>,
    F: Fn(E) -> E2,
{
    MapError::new(action, f)
}
