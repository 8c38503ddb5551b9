//! Loading-flag bookkeeping for an outstanding request

use tokio::sync::watch;

/// Marks a request as in flight on a controller's state.
///
/// [`finish`](InFlight::finish) reconciles the outcome and clears loading in
/// one published step. If the request future is dropped before that, the
/// guard still clears loading so the controller can be triggered again.
pub(crate) struct InFlight<'a, T> {
    state: &'a watch::Sender<T>,
    settle: fn(&mut T),
    armed: bool,
}

impl<'a, T> InFlight<'a, T> {
    /// `settle` must clear the loading flag; it runs on every exit path.
    pub(crate) fn new(state: &'a watch::Sender<T>, settle: fn(&mut T)) -> Self {
        Self {
            state,
            settle,
            armed: true,
        }
    }

    /// Apply the outcome of the request, then settle.
    pub(crate) fn finish(mut self, reconcile: impl FnOnce(&mut T)) {
        self.armed = false;
        let settle = self.settle;
        self.state.send_modify(|state| {
            reconcile(state);
            settle(state);
        });
    }
}

impl<T> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        if self.armed {
            self.state.send_modify(self.settle);
        }
    }
}
