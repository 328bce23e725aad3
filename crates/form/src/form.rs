//! Form state and the bound save action

use autosave_core::{DebounceConfig, EditableRecord, Field, ProjectId, ProjectStore};
use debounce::DebounceScheduler;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

const EVENT_CAPACITY: usize = 64;

/// Outcome of a save, emitted by the bound save action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveEvent {
    /// The store accepted this record
    Saved(EditableRecord),
    /// The store rejected the save
    Failed { id: ProjectId, error: String },
}

/// Editable project form with debounced persistence
pub struct AutoSaveForm {
    /// Displayed state
    record: EditableRecord,
    store: Arc<dyn ProjectStore>,
    scheduler: DebounceScheduler,
    events: broadcast::Sender<SaveEvent>,
    /// Saves started but not yet answered by the store
    in_flight: Arc<watch::Sender<usize>>,
    handle: Handle,
}

impl AutoSaveForm {
    /// Create a form on the current Tokio runtime
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn new(record: EditableRecord, store: Arc<dyn ProjectStore>, delay: Duration) -> Self {
        let handle = Handle::current();
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            record,
            store,
            scheduler: DebounceScheduler::with_handle(delay, handle.clone()),
            events,
            in_flight: Arc::new(watch::Sender::new(0)),
            handle,
        }
    }

    /// Create a form using the configured quiet period
    pub fn from_config(
        record: EditableRecord,
        store: Arc<dyn ProjectStore>,
        config: &DebounceConfig,
    ) -> Self {
        Self::new(record, store, config.delay())
    }

    /// Current displayed state
    pub fn record(&self) -> &EditableRecord {
        &self.record
    }

    pub fn id(&self) -> ProjectId {
        self.record.id()
    }

    pub fn delay(&self) -> Duration {
        self.scheduler.delay()
    }

    /// Change the quiet period, dropping any save scheduled under the old one
    pub fn set_delay(&mut self, delay: Duration) {
        self.scheduler.configure(delay);
    }

    /// Whether a save is scheduled but has not fired yet
    pub fn is_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Number of saves waiting on the store
    pub fn in_flight(&self) -> usize {
        *self.in_flight.borrow()
    }

    /// Wait until no save is scheduled or running
    ///
    /// Does not shorten the quiet period: a pending save still fires on its
    /// own schedule.
    pub async fn settle(&self) {
        let mut in_flight = self.in_flight.subscribe();
        loop {
            // Pending first: a firing timer counts its save before disarming
            let pending = self.is_pending();
            let busy = *in_flight.borrow_and_update() > 0;
            if !pending && !busy {
                return;
            }
            if in_flight.changed().await.is_err() {
                return;
            }
        }
    }

    /// Receive save outcomes from now on
    pub fn subscribe(&self) -> broadcast::Receiver<SaveEvent> {
        self.events.subscribe()
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.edit(Field::Title, value);
    }

    pub fn set_subhead(&mut self, value: impl Into<String>) {
        self.edit(Field::Subhead, value);
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.edit(Field::Description, value);
    }

    /// Apply an edit and schedule a save of the whole record
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.record.set(field, value);
        debug!("Edited {} of project {}", field, self.record.id());

        self.scheduler.bind(save_action(
            self.record.clone(),
            Arc::clone(&self.store),
            self.events.clone(),
            Arc::clone(&self.in_flight),
            self.handle.clone(),
        ));
        self.scheduler.notify();
    }
}

/// Build the action that persists `record` when the quiet period elapses
///
/// The action only starts the save; the scheduler never waits for it.
fn save_action(
    record: EditableRecord,
    store: Arc<dyn ProjectStore>,
    events: broadcast::Sender<SaveEvent>,
    in_flight: Arc<watch::Sender<usize>>,
    handle: Handle,
) -> impl Fn() + Send + Sync + 'static {
    move || {
        let record = record.clone();
        let store = Arc::clone(&store);
        let events = events.clone();
        // Counted before the scheduler reports idle
        let in_flight = InFlight::start(Arc::clone(&in_flight));

        handle.spawn(async move {
            let id = record.id();
            let event = match store.update_project(&record).await {
                Ok(()) => {
                    info!("Saved project {}", id);
                    SaveEvent::Saved(record)
                }
                Err(e) => {
                    warn!("Failed to save project {}: {}", id, e);
                    SaveEvent::Failed {
                        id,
                        error: e.to_string(),
                    }
                }
            };
            // No subscribers is fine
            let _ = events.send(event);
            drop(in_flight);
        });
    }
}

/// One save awaiting the store; uncounted on drop, including when the
/// store panics and the task unwinds
struct InFlight(Arc<watch::Sender<usize>>);

impl InFlight {
    fn start(counter: Arc<watch::Sender<usize>>) -> Self {
        counter.send_modify(|n| *n += 1);
        Self(counter)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.send_modify(|n| *n -= 1);
    }
}

impl std::fmt::Debug for AutoSaveForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoSaveForm")
            .field("record", &self.record)
            .field("scheduler", &self.scheduler)
            .finish()
    }
}
