//! Do-notation for chaining actions.

/// Chain actions without nesting `and_then` calls by hand.
///
/// Each line is one of:
/// - `name <- action;` binds the action's result to `name`
/// - `let pattern = expr;` binds a plain value
/// - `action;` runs an action and discards its result
///
/// The final line is the action whose result the whole chain yields.
/// Every continuation is a `move` closure that may run many times, so
/// captured values must be `Copy` or cloned before use.
///
/// # Example
///
/// ```
/// use act::{act, get_state, pure, set_state, Action};
///
/// let swap_and_sum = act! {
///     old <- get_state::<i32>();
///     let next = old * 2;
///     set_state(next);
///     pure(old + next)
/// };
///
/// assert_eq!(swap_and_sum.run(5), (10, 15));
/// ```
///
/// A chain cannot end in a binding, since nothing would use the name:
///
/// ```compile_fail
/// use act::{act, get_state, update_state, Action};
///
/// let dangling = act! {
///     update_state(|n: i32| n + 1);
///     last <- get_state::<i32>();
/// };
/// ```
#[macro_export]
macro_rules! act {
    (let $pat:pat = $value:expr; $($rest:tt)+) => {{
        let $pat = $value;
        $crate::act!($($rest)+)
    }};

    ($name:ident <- $action:expr; $($rest:tt)+) => {
        $crate::Action::and_then($action, move |$name| $crate::act!($($rest)+))
    };

    ($name:ident <- $action:expr $(;)?) => {
        compile_error!(concat!(
            "act! chain ends with `",
            stringify!($name),
            " <- ...`; the last line must be an action, not a binding"
        ))
    };

    ($action:expr; $($rest:tt)+) => {
        $crate::Action::and_then($action, move |_| $crate::act!($($rest)+))
    };

    ($action:expr $(;)?) => {
        $action
    };
}
