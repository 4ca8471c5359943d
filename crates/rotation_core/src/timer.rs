//! Single-slot autoplay trigger with generation tagging.
//!
//! Every `arm` aborts the previous task and bumps the generation, and a
//! firing callback receives the generation it was armed with. Callers check
//! [`TimerManager::fired`] before acting, so a callback that already woke up
//! when it was replaced or cancelled is a no-op.

use std::time::Duration;

use tokio::{runtime::Handle, task::JoinHandle, time::Instant};
use tracing::trace;

pub struct TimerManager {
    runtime: Handle,
    interval: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
    deadline: Option<Instant>,
}

impl TimerManager {
    pub fn new(runtime: Handle, interval: Duration) -> Self {
        Self {
            runtime,
            interval,
            generation: 0,
            pending: None,
            deadline: None,
        }
    }

    pub fn arm<F>(&mut self, on_fire: F)
    where
        F: FnOnce(u64) + Send + 'static,
    {
        self.abort_pending();
        self.generation += 1;
        let generation = self.generation;
        let deadline = Instant::now() + self.interval;
        self.deadline = Some(deadline);
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            on_fire(generation);
        }));
        trace!(generation, "autoplay timer armed");
    }

    /// Restarts the countdown at a full interval.
    pub fn rearm<F>(&mut self, on_fire: F)
    where
        F: FnOnce(u64) + Send + 'static,
    {
        self.arm(on_fire);
    }

    pub fn cancel(&mut self) {
        self.abort_pending();
        self.generation += 1;
        self.deadline = None;
        trace!(generation = self.generation, "autoplay timer cancelled");
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.deadline.is_some() && generation == self.generation
    }

    /// Consumes a fire for `generation`. Returns false for stale fires.
    pub fn fired(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        // The firing task is finishing on its own; do not abort it.
        self.pending = None;
        self.deadline = None;
        true
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn abort_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Drop for TimerManager {
    fn drop(&mut self) {
        self.abort_pending();
    }
}

#[cfg(test)]
#[path = "tests/timer_tests.rs"]
mod tests;
