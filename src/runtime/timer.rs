//! Single-slot timers
//!
//! At most one timer per slot is armed. Arming aborts the previous one, so a
//! superseded debounce or dismissal never fires.

use tokio::task::AbortHandle;

#[derive(Debug, Default)]
pub struct TimerSlot {
    handle: Option<AbortHandle>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm with a freshly spawned timer task, aborting the previous one
    pub fn replace(&mut self, handle: AbortHandle) {
        if let Some(previous) = self.handle.replace(handle) {
            previous.abort();
        }
    }

    pub fn cancel(&mut self) {
        if let Some(previous) = self.handle.take() {
            previous.abort();
        }
    }

    /// Whether a timer is pending (armed and not yet fired)
    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for TimerSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}
