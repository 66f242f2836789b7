//! Core action types.
//!
//! This module contains the foundation every combinator builds on:
//! - The `Action` trait and its invocation primitives (`run`, `eval`, `exec`)
//! - `from_fn` for lifting plain transition functions
//! - `Guard` predicates over state
//!
//! Everything here is pure: state goes in by value and comes back out,
//! nothing is shared between runs.

mod action;
mod guard;

pub use action::{eval, exec, from_fn, run, Action, BoxedAction, FromFn};
pub use guard::Guard;
