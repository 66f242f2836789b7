//! Act: explicit state threading for pure code
//!
//! An [`Action`] is a pure function from a state value to a pair of the
//! updated state and a result. Actions are composed with combinators
//! instead of passing state around by hand: read, replace or update the
//! state, map over results, sequence steps, and short-circuit on failure.
//!
//! # Core Concepts
//!
//! - **Action**: `S -> (S, A)` as a re-runnable value, see [`from_fn`]
//! - **Result actions**: actions whose result is a `Result<T, E>`; the
//!   `try_*` combinators stop at the first `Err`
//! - **State threading**: state always flows left to right, one step at a time
//!
//! # Example
//!
//! ```rust
//! use act::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Account {
//!     balance: u64,
//! }
//!
//! fn withdraw(amount: u64) -> impl Action<Account, Output = Result<u64, String>> {
//!     ensure(move |a: &Account| a.balance >= amount, format!("cannot withdraw {amount}"))
//!         .try_and_then(move |()| {
//!             update_state(move |a: Account| Account { balance: a.balance - amount })
//!                 .and_then(|()| inspect(|a: &Account| Ok(a.balance)))
//!         })
//! }
//!
//! let (account, outcome) = try_all([withdraw(30), withdraw(50), withdraw(40)])
//!     .run(Account { balance: 100 });
//!
//! assert_eq!(account, Account { balance: 20 });
//! assert_eq!(outcome, Err("cannot withdraw 40".to_string()));
//! ```
//!
//! # Concurrency
//!
//! Actions are `Send` and `Sync` whenever the data they capture is. Running
//! one action from several threads is safe as long as its closures are free
//! of side effects; the library assumes this but cannot check it.

pub mod combinators;
pub mod core;
mod macros;
pub mod state;

// Re-export commonly used types
pub use crate::combinators::{
    all, bind, each, ensure, error, get_state, inspect, map, map_error, map_ok, ok, pure,
    set_state, try_all, try_bind, try_each, update_state,
};
pub use crate::core::{eval, exec, from_fn, run, Action, BoxedAction, Guard};

/// Everything needed to build and run actions.
pub mod prelude {
    pub use crate::combinators::{
        all, bind, each, ensure, error, get_state, inspect, map, map_error, map_ok, ok, pure,
        set_state, try_all, try_bind, try_each, update_state,
    };
    pub use crate::core::{eval, exec, from_fn, run, Action, BoxedAction, Guard};
}
