//! Continuation-last state access.
//!
//! The same primitives as [`get_state`], [`set_state`] and
//! [`update_state`], each already bound to the rest of the computation.
//! Useful when writing nested chains by hand:
//!
//! ```rust
//! use act::{state, pure, Action};
//!
//! let next_id = state::get(|id: u64| state::set(id + 1, move || pure(id)));
//!
//! assert_eq!(next_id.run(7), (8, 7));
//! ```

use crate::combinators::{get_state, set_state, update_state};
use crate::core::Action;

/// Read the current state and continue with `then(state)`.
pub fn get<S, F, B>(then: F) -> impl Action<S, Output = B::Output>
where
    S: Clone,
    F: Fn(S) -> B,
    B: Action<S>,
{
    get_state().and_then(then)
}

/// Replace the state with `value` and continue with `then()`.
pub fn set<S, F, B>(value: S, then: F) -> impl Action<S, Output = B::Output>
where
    S: Clone,
    F: Fn() -> B,
    B: Action<S>,
{
    set_state(value).and_then(move |()| then())
}

/// Apply `updater` to the state and continue with `then()`.
pub fn update<S, U, F, B>(updater: U, then: F) -> impl Action<S, Output = B::Output>
where
    U: Fn(S) -> S,
    F: Fn() -> B,
    B: Action<S>,
{
    update_state(updater).and_then(move |()| then())
}
