//! Constructors and combinators for building actions.
//!
//! # Zero-Cost Composition
//!
//! - Constructors return `impl Action`: `pure()`, `ok()`, `error()`, `get_state()`
//! - Combinators return named adapter structs, like iterator adapters
//! - Use `.boxed()` only when differently-typed actions must share a collection

mod collection;
mod constructors;
mod sequence;
mod trace;
mod transform;

pub use collection::{all, each, try_all, try_each, All, Each, TryAll, TryEach};
pub use constructors::{
    ensure, error, get_state, inspect, ok, pure, set_state, update_state, Ensure,
};
pub use sequence::{bind, try_bind, AndThen, TryAndThen};
pub use trace::Traced;
pub use transform::{map, map_error, map_ok, Map, MapError, MapOk};
