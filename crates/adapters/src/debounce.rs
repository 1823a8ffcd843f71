//! Trailing-edge debouncing on the tokio runtime.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

type Callback<A> = Arc<dyn Fn(A) + Send + Sync>;

/// Delays a callback until `wait` has passed without another call.
///
/// Each [`call`](Debouncer::call) cancels the pending invocation and
/// schedules a new one with the latest arguments, so a burst of calls
/// produces exactly one invocation. Dropping the debouncer does not cancel an
/// invocation that is already scheduled; use [`cancel`](Debouncer::cancel).
pub struct Debouncer<A: Send + 'static> {
    wait: Duration,
    callback: Callback<A>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<A: Send + 'static> Debouncer<A> {
    pub fn new<F>(wait: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            wait,
            callback: Arc::new(callback),
            pending: Mutex::new(None),
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Schedule the callback with `args`, replacing any pending invocation.
    ///
    /// Outside a tokio runtime the call is dropped with a warning.
    pub fn call(&self, args: A) {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                tracing::warn!(error = %e, "Debounced call dropped: no tokio runtime");
                return;
            }
        };

        let callback = Arc::clone(&self.callback);
        let wait = self.wait;
        let task = handle.spawn(async move {
            tokio::time::sleep(wait).await;
            callback(args);
        });

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.replace(task) {
            previous.abort();
        }
    }

    /// Cancel the pending invocation, if any.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }

    /// True while an invocation is scheduled but has not run yet.
    pub fn is_pending(&self) -> bool {
        let pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl<A: Send + 'static> std::fmt::Debug for Debouncer<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("wait", &self.wait)
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}
