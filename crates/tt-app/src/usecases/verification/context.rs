use std::sync::Arc;

use tokio::sync::Mutex;
use tt_core::verification::WizardState;

/// Wizard session context containing state and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: held for one transition (state update and event emit),
///   never across the submission network call.
/// - `state`: used for both reading (`get_state`) and writing (during `dispatch`).
#[derive(Clone)]
pub(crate) struct WizardContext {
    state: Arc<Mutex<WizardState>>,
    dispatch_lock: Arc<Mutex<()>>,
}

impl WizardContext {
    pub(crate) fn new(initial_state: WizardState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    pub(crate) fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Clone of the current state. Does NOT acquire `dispatch_lock`.
    pub(crate) async fn get_state(&self) -> WizardState {
        self.state.lock().await.clone()
    }

    pub(crate) async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Move the state out, transform it, and store the result.
    ///
    /// This should only be called after acquiring `dispatch_lock`.
    pub(crate) async fn replace_with<R>(
        &self,
        f: impl FnOnce(WizardState) -> (WizardState, R),
    ) -> R {
        let mut guard = self.state.lock().await;
        let current = std::mem::replace(&mut *guard, WizardState::Cancelled);
        let (next, out) = f(current);
        *guard = next;
        out
    }
}
