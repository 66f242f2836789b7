//! Guard predicates over state.
//!
//! Guards are pure boolean functions of the current state. Run as an
//! action, a guard inspects the state without changing it; combined with an
//! error payload it becomes a checkpoint that stops a `try_*` chain.

use super::action::{from_fn, Action};
use std::sync::Arc;

/// Pure predicate over a state value.
///
/// # Example
///
/// ```rust
/// use act::{Action, Guard};
///
/// let non_empty = Guard::new(|queue: &Vec<u8>| !queue.is_empty());
///
/// assert!(non_empty.check(&vec![1]));
/// assert_eq!(non_empty.run(vec![]), (vec![], false));
/// ```
pub struct Guard<S> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<S> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard accepts this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }

    /// Turn the guard into a `Result`-producing action.
    ///
    /// Yields `Ok(())` when the predicate holds and `Err(error)` otherwise.
    /// The state is never changed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use act::{Action, Guard};
    ///
    /// let solvent = Guard::new(|balance: &i64| *balance >= 0).or_error("overdrawn");
    ///
    /// assert_eq!(solvent.run(10), (10, Ok(())));
    /// assert_eq!(solvent.run(-1), (-1, Err("overdrawn")));
    /// ```
    pub fn or_error<E>(self, error: E) -> impl Action<S, Output = Result<(), E>> + Clone
    where
        E: Clone,
    {
        from_fn(move |state: S| {
            let outcome = if self.check(&state) {
                Ok(())
            } else {
                Err(error.clone())
            };
            (state, outcome)
        })
    }
}

impl<S> Action<S> for Guard<S> {
    type Output = bool;

    fn run(&self, state: S) -> (S, bool) {
        let passed = self.check(&state);
        (state, passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum Phase {
        Initial,
        Processing,
        Complete,
    }

    #[test]
    fn guard_allows_matching_states() {
        let guard = Guard::new(|s: &Phase| matches!(s, Phase::Initial));

        assert!(guard.check(&Phase::Initial));
        assert!(!guard.check(&Phase::Processing));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|s: &Phase| !matches!(s, Phase::Complete));

        assert_eq!(
            guard.check(&Phase::Processing),
            guard.check(&Phase::Processing)
        );
    }

    #[test]
    fn guard_as_action_leaves_state_alone() {
        let guard = Guard::new(|s: &Phase| matches!(s, Phase::Complete));

        assert_eq!(guard.run(Phase::Complete), (Phase::Complete, true));
        assert_eq!(guard.run(Phase::Initial), (Phase::Initial, false));
    }

    #[test]
    fn or_error_reports_failure_payload() {
        let ready = Guard::new(|s: &Phase| matches!(s, Phase::Processing)).or_error("not ready");

        assert_eq!(ready.run(Phase::Processing), (Phase::Processing, Ok(())));
        assert_eq!(ready.run(Phase::Initial), (Phase::Initial, Err("not ready")));
    }

    #[test]
    fn cloned_guards_share_the_predicate() {
        let guard = Guard::new(|s: &Phase| matches!(s, Phase::Complete));
        let copy = guard.clone();

        assert_eq!(guard.check(&Phase::Complete), copy.check(&Phase::Complete));
        assert!(!copy.check(&Phase::Initial));
    }

    #[test]
    fn or_error_actions_are_cloneable() {
        let done = Guard::new(|s: &Phase| matches!(s, Phase::Complete)).or_error("unfinished");
        let copy = done.clone();

        assert_eq!(copy.run(Phase::Complete), done.run(Phase::Complete));
        assert_eq!(copy.run(Phase::Initial), (Phase::Initial, Err("unfinished")));
    }
}
