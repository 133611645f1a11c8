use tokio::sync::watch;

use super::ViewState;
use crate::error::FetchError;

/// Holds one screen's [`ViewState`] and publishes every transition.
///
/// Only the owning controller mutates it. Renderers either read
/// [`current`](Self::current) or hold a receiver from
/// [`subscribe`](Self::subscribe).
#[derive(Debug)]
pub struct ViewStateStore<T> {
    tx: watch::Sender<ViewState<T>>,
}

impl<T: Clone> ViewStateStore<T> {
    /// A store starts out `Loading`: it is created when its screen activates,
    /// which is also when its first cycle begins.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ViewState::Loading);
        Self { tx }
    }

    /// Start a new cycle, discarding any previous payload or error.
    pub fn begin(&self) {
        self.tx.send_replace(ViewState::Loading);
    }

    /// Complete the current cycle with a payload.
    ///
    /// Ignored (returns `false`) unless the store is `Loading`.
    pub fn resolve(&self, value: T) -> bool {
        self.complete(ViewState::Ready(value))
    }

    /// Complete the current cycle with an error.
    ///
    /// Ignored (returns `false`) unless the store is `Loading`.
    pub fn fail(&self, reason: FetchError) -> bool {
        self.complete(ViewState::Error(reason))
    }

    pub fn current(&self) -> ViewState<T> {
        self.tx.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.tx.borrow().is_loading()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<T>> {
        self.tx.subscribe()
    }

    fn complete(&self, next: ViewState<T>) -> bool {
        if !self.is_loading() {
            tracing::warn!(
                current = self.tx.borrow().tag(),
                attempted = next.tag(),
                "ignoring completion outside of a fetch cycle"
            );
            return false;
        }
        self.tx.send_replace(next);
        true
    }
}

impl<T: Clone> Default for ViewStateStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
