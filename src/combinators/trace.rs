//! Tracing instrumentation for individual steps.

use crate::core::Action;
use tracing::trace;

/// Action wrapped in a `tracing` span. See [`Action::traced`].
///
/// The span and its events are emitted at `TRACE` level, so they cost
/// nothing unless a subscriber enables them. Results and state are passed
/// through unchanged.
#[derive(Clone, Copy)]
#[must_use = "actions do nothing unless run"]
pub struct Traced<A> {
    action: A,
    name: &'static str,
}

impl<A> Traced<A> {
    pub(crate) fn new(action: A, name: &'static str) -> Self {
        Self { action, name }
    }

    /// Name of the span this action runs in.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<S, A> Action<S> for Traced<A>
where
    A: Action<S>,
{
    type Output = A::Output;

    fn run(&self, state: S) -> (S, A::Output) {
        let span = tracing::trace_span!("action", name = self.name);
        let _guard = span.enter();
        trace!("running step");
        let output = self.action.run(state);
        trace!("step finished");
        output
    }
}
