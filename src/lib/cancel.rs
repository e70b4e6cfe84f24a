//! Page-scoped cancellation for in-flight requests. A page creates one scope,
//! hands clones to its requests and cancels it on unmount. Each request
//! registers an abort hook for as long as it is in flight, so cancelling the
//! scope aborts pending fetches instead of letting them resolve into a form
//! that no longer exists.

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

type AbortHook = Box<dyn FnOnce() + Send>;

#[derive(Default)]
struct ScopeState {
    cancelled: bool,
    next_id: u64,
    hooks: Vec<(u64, AbortHook)>,
}

#[derive(Clone, Default)]
pub struct RequestScope {
    state: Arc<Mutex<ScopeState>>,
}

impl fmt::Debug for RequestScope {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        formatter
            .debug_struct("RequestScope")
            .field("cancelled", &state.cancelled)
            .field("in_flight", &state.hooks.len())
            .finish()
    }
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ScopeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Marks the scope cancelled and runs every registered hook once. Idempotent.
    pub fn cancel(&self) {
        let hooks = {
            let mut state = self.lock();
            state.cancelled = true;
            std::mem::take(&mut state.hooks)
        };
        for (_, hook) in hooks {
            hook();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.lock().cancelled
    }

    /// Registers `hook` to run when the scope is cancelled. The hook is removed
    /// when the returned guard drops. On an already-cancelled scope it runs
    /// immediately.
    pub fn on_cancel(&self, hook: impl FnOnce() + Send + 'static) -> AbortRegistration {
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;

        if state.cancelled {
            drop(state);
            hook();
        } else {
            state.hooks.push((id, Box::new(hook)));
        }

        AbortRegistration {
            scope: self.clone(),
            id,
        }
    }
}

/// Keeps an abort hook registered while a request is in flight.
#[must_use = "the hook is removed as soon as the registration drops"]
pub struct AbortRegistration {
    scope: RequestScope,
    id: u64,
}

impl Drop for AbortRegistration {
    fn drop(&mut self) {
        let removed = {
            let mut state = self.scope.lock();
            state
                .hooks
                .iter()
                .position(|(id, _)| *id == self.id)
                .map(|index| state.hooks.swap_remove(index))
        };
        drop(removed);
    }
}
