//! Debounce scheduler
//!
//! Two independent slots on one owned object: the action that will run, and
//! the timer that decides when. Rebinding never touches the timer, and
//! re-arming the timer never freezes an old action.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Default quiet period
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Zero-argument action run when the quiet period elapses
pub type Action = Arc<dyn Fn() + Send + Sync + 'static>;

/// Observable scheduler state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// No timer armed
    Idle,
    /// Timer armed, action not yet invoked
    Pending,
}

/// State shared between the scheduler and its timer task
#[derive(Default)]
struct Slot {
    /// Latest bound action
    action: Option<Action>,
    /// Generation of the armed timer; `None` when idle
    armed: Option<u64>,
    /// Incremented on every arm
    generation: u64,
}

/// Coalesces bursts of [`notify`](Self::notify) calls into one delayed
/// invocation of the most recently [`bind`](Self::bind)-ed action.
///
/// The scheduler owns its timer. Dropping it cancels a pending invocation.
pub struct DebounceScheduler {
    delay: Duration,
    slot: Arc<Mutex<Slot>>,
    timer: Option<JoinHandle<()>>,
    handle: Handle,
}

impl DebounceScheduler {
    /// Create a scheduler on the current Tokio runtime
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime. Use
    /// [`with_handle`](Self::with_handle) in that case.
    pub fn new(delay: Duration) -> Self {
        Self::with_handle(delay, Handle::current())
    }

    /// Create a scheduler whose timers run on the given runtime
    pub fn with_handle(delay: Duration, handle: Handle) -> Self {
        Self {
            delay,
            slot: Arc::new(Mutex::new(Slot::default())),
            timer: None,
            handle,
        }
    }

    /// Current quiet period
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn state(&self) -> SchedulerState {
        if self.slot.lock().armed.is_some() {
            SchedulerState::Pending
        } else {
            SchedulerState::Idle
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state() == SchedulerState::Pending
    }

    /// Change the quiet period
    ///
    /// When the delay differs, any armed timer is cancelled without running
    /// and the next [`notify`](Self::notify) starts fresh with the new delay.
    /// Passing the current delay leaves an armed timer alone. The bound
    /// action is kept either way.
    pub fn configure(&mut self, delay: Duration) {
        if delay == self.delay {
            return;
        }
        self.cancel();
        self.delay = delay;
        debug!("Debounce delay set to {:?}", delay);
    }

    /// Record `action` as the one to run when the timer fires
    ///
    /// Does not arm or cancel anything.
    pub fn bind<F>(&mut self, action: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.bind_action(Arc::new(action));
    }

    /// Same as [`bind`](Self::bind) for an already shared action
    pub fn bind_action(&mut self, action: Action) {
        self.slot.lock().action = Some(action);
    }

    /// Restart the quiet period
    ///
    /// Cancels the armed timer, if any, and arms a new one for the current
    /// delay. When it elapses, the action bound at that moment runs once.
    pub fn notify(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }

        let generation = {
            let mut slot = self.slot.lock();
            slot.generation += 1;
            slot.armed = Some(slot.generation);
            slot.generation
        };

        let slot = Arc::clone(&self.slot);
        let delay = self.delay;
        trace!("Arming debounce timer #{} for {:?}", generation, delay);

        self.timer = Some(self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            fire(&slot, generation);
        }));
    }

    /// Disarm without running the action
    fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.slot.lock().armed = None;
    }
}

/// Timer expiry: run the bound action if this timer is still the armed one
///
/// The scheduler reads as pending until the action has returned.
fn fire(slot: &Mutex<Slot>, generation: u64) {
    let action = {
        let slot = slot.lock();
        if slot.armed != Some(generation) {
            // Superseded after the sleep completed
            return;
        }
        slot.action.clone()
    };

    // Disarms even if the action panics
    let _disarm = Disarm { slot, generation };

    match action {
        Some(action) => {
            debug!("Debounce timer #{} fired", generation);
            action();
        }
        None => debug!("Debounce timer #{} fired with no action bound", generation),
    }
}

struct Disarm<'a> {
    slot: &'a Mutex<Slot>,
    generation: u64,
}

impl Drop for Disarm<'_> {
    fn drop(&mut self) {
        let mut slot = self.slot.lock();
        // A notify during the action re-armed under a newer generation
        if slot.armed == Some(self.generation) {
            slot.armed = None;
        }
    }
}

impl Drop for DebounceScheduler {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl fmt::Debug for DebounceScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot.lock();
        f.debug_struct("DebounceScheduler")
            .field("delay", &self.delay)
            .field("bound", &slot.action.is_some())
            .field("armed", &slot.armed)
            .finish()
    }
}
