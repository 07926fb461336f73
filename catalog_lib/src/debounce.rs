//! Trailing-edge debounce on the tokio timer.
//!
//! Each [`Debouncer::trigger`] aborts the pending call, if any, and schedules
//! a new one `delay` in the future. Only the last value inside a window
//! reaches the action. There is no maximum wait: a steady stream of triggers
//! spaced closer than `delay` never fires.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

type Action<T> = Arc<dyn Fn(T) + Send + Sync>;

pub struct Debouncer<T> {
    delay: Duration,
    action: Action<T>,
    /// At most one scheduled call, with a flag that drops once the action has run.
    pending: Option<(JoinHandle<()>, Arc<AtomicBool>)>,
}

impl<T> Debouncer<T>
where
    T: Send + 'static,
{
    pub fn new<F>(delay: Duration, action: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            delay,
            action: Arc::new(action),
            pending: None,
        }
    }

    /// Schedules `value` for delivery, superseding any pending call.
    ///
    /// Must be called from within a tokio runtime.
    pub fn trigger(&mut self, value: T) {
        self.cancel();
        let action = Arc::clone(&self.action);
        let delay = self.delay;
        let armed = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&armed);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action(value);
            flag.store(false, Ordering::SeqCst);
        });
        self.pending = Some((handle, armed));
    }

    /// True while a trailing call is scheduled or still running. Once this
    /// reads false, everything the action did is visible.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|(_, armed)| armed.load(Ordering::SeqCst))
    }

    fn cancel(&mut self) {
        if let Some((handle, _)) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some((handle, _)) = self.pending.take() {
            handle.abort();
        }
    }
}
