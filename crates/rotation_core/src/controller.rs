//! Navigation controller: guards, transition windows and autoplay rearm.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
    time::Duration,
};

use shared::{
    domain::{Direction, NavigationOrigin},
    protocol::{RotationEvent, RotationSnapshot},
};
use tokio::{runtime::Handle, sync::broadcast, task::JoinHandle, time::Instant};
use tracing::{debug, info, trace};

use crate::{
    error::CarouselError, settings::CarouselSettings, state::RotationState, timer::TimerManager,
};

#[derive(Debug, Clone, Copy)]
enum Navigation {
    Step(Direction),
    Jump(usize),
}

struct Inner {
    state: RotationState,
    autoplay: TimerManager,
    settle_task: Option<JoinHandle<()>>,
    runtime: Handle,
    transition_window: Duration,
    events: broadcast::Sender<RotationEvent>,
    stopped: bool,
    this: Weak<Mutex<Inner>>,
}

impl Inner {
    fn navigate(&mut self, request: Navigation, origin: NavigationOrigin) -> bool {
        if self.stopped {
            debug!(?request, ?origin, "navigation after stop ignored");
            return false;
        }

        let moved = match request {
            Navigation::Step(direction) => self.state.advance(direction),
            Navigation::Jump(index) => self.state.jump_to(index),
        };
        let Some((from, to)) = moved else {
            debug!(
                ?request,
                ?origin,
                transitioning = self.state.is_transitioning(),
                "navigation ignored"
            );
            return false;
        };

        self.open_transition_window();
        self.arm_autoplay();
        debug!(from, to, ?origin, "carousel moved");
        let _ = self.events.send(RotationEvent::Moved { from, to, origin });
        true
    }

    fn arm_autoplay(&mut self) {
        let this = self.this.clone();
        self.autoplay.rearm(move |generation| {
            if let Some(inner) = this.upgrade() {
                lock(&inner).on_autoplay_fire(generation);
            }
        });
    }

    fn on_autoplay_fire(&mut self, generation: u64) {
        if self.stopped || !self.autoplay.fired(generation) {
            trace!(generation, "stale autoplay fire ignored");
            return;
        }
        if !self.navigate(
            Navigation::Step(Direction::Forward),
            NavigationOrigin::Autoplay,
        ) {
            self.arm_autoplay();
        }
    }

    fn open_transition_window(&mut self) {
        // The guard only accepts from idle, so any previous window task has
        // already finished.
        self.settle_task.take();
        let this = self.this.clone();
        let window = self.transition_window;
        self.settle_task = Some(self.runtime.spawn(async move {
            tokio::time::sleep(window).await;
            if let Some(inner) = this.upgrade() {
                lock(&inner).close_transition_window();
            }
        }));
    }

    fn close_transition_window(&mut self) {
        if self.stopped {
            return;
        }
        self.settle_task = None;
        self.state.settle();
        if let Some(index) = self.state.current_index() {
            let _ = self.events.send(RotationEvent::Settled { index });
        }
    }

    fn stop(&mut self) -> bool {
        if self.stopped {
            return false;
        }
        self.stopped = true;
        self.autoplay.cancel();
        if let Some(task) = self.settle_task.take() {
            task.abort();
        }
        self.state.settle();
        let _ = self.events.send(RotationEvent::Stopped);
        true
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(task) = self.settle_task.take() {
            task.abort();
        }
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    // Every critical section leaves the state valid, so a poisoned lock is
    // still usable.
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle to one carousel rotation. Clones drive the same instance; the
/// rotation stops when [`CarouselController::stop`] is called or the last
/// handle is dropped.
#[derive(Clone)]
pub struct CarouselController {
    inner: Arc<Mutex<Inner>>,
}

impl CarouselController {
    /// Builds a controller over `item_count` positions and arms autoplay.
    ///
    /// Zero items is valid: the controller stays inactive and never arms a
    /// timer. Must be called from within a tokio runtime.
    pub fn start(item_count: usize, settings: CarouselSettings) -> Result<Self, CarouselError> {
        settings.validate()?;
        let runtime = Handle::try_current().map_err(|_| CarouselError::NoRuntime)?;
        let (events, _) = broadcast::channel(settings.event_buffer);

        let inner = Arc::new_cyclic(|this| {
            Mutex::new(Inner {
                state: RotationState::new(item_count),
                autoplay: TimerManager::new(runtime.clone(), settings.rotation_interval()),
                settle_task: None,
                runtime,
                transition_window: settings.transition_window(),
                events,
                stopped: false,
                this: this.clone(),
            })
        });

        {
            let mut guard = lock(&inner);
            if guard.state.is_active() {
                guard.arm_autoplay();
            }
        }

        info!(
            item_count,
            rotation_interval_ms = settings.rotation_interval_ms,
            transition_window_ms = settings.transition_window_ms,
            "carousel controller started"
        );
        Ok(Self { inner })
    }

    pub fn next(&self) -> bool {
        lock(&self.inner).navigate(
            Navigation::Step(Direction::Forward),
            NavigationOrigin::User,
        )
    }

    pub fn previous(&self) -> bool {
        lock(&self.inner).navigate(
            Navigation::Step(Direction::Backward),
            NavigationOrigin::User,
        )
    }

    pub fn go_to(&self, index: usize) -> bool {
        lock(&self.inner).navigate(Navigation::Jump(index), NavigationOrigin::User)
    }

    pub fn observe(&self) -> RotationSnapshot {
        lock(&self.inner).state.snapshot()
    }

    /// When the autoplay trigger is next due, if one is pending.
    pub fn next_autoplay_at(&self) -> Option<Instant> {
        lock(&self.inner).autoplay.deadline()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RotationEvent> {
        lock(&self.inner).events.subscribe()
    }

    /// Disposal hook. Cancels both timers; later calls are no-ops.
    pub fn stop(&self) {
        if lock(&self.inner).stop() {
            info!("carousel controller stopped");
        }
    }

    pub fn is_stopped(&self) -> bool {
        lock(&self.inner).stopped
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
