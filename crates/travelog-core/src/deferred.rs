//! Delete-with-undo: a cancellable, time-delayed call to `EntryStore::delete`.
//!
//! At most one deletion is pending at a time. Scheduling another id cancels
//! the previous one, just as undoing it would.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use crate::error::TravelogError;
use crate::storage::{EntryId, TravelEntry};
use crate::store::EntryStore;

/// Store handle shared between the UI loop and deferred tasks.
pub type SharedStore = Arc<Mutex<EntryStore>>;

/// How a scheduled deletion ended.
#[derive(Debug)]
pub enum DeleteOutcome {
    Deleted(TravelEntry),
    Cancelled,
    Failed(TravelogError),
}

struct Pending {
    id: EntryId,
    /// Set by whichever side settles the deletion first: the task or `undo`.
    claimed: Arc<AtomicBool>,
    cancel: oneshot::Sender<()>,
    handle: JoinHandle<DeleteOutcome>,
}

pub struct DeferredDelete {
    store: SharedStore,
    window: Duration,
    pending: Option<Pending>,
}

impl DeferredDelete {
    pub const DEFAULT_WINDOW: Duration = Duration::from_secs(4);

    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            window: Self::DEFAULT_WINDOW,
            pending: None,
        }
    }

    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Id bound to the pending deletion, if any.
    pub fn pending(&self) -> Option<&EntryId> {
        self.pending.as_ref().map(|p| &p.id)
    }

    /// Delete `id` once the window elapses unless undone first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, id: EntryId) {
        self.undo();

        let (cancel, cancelled) = oneshot::channel::<()>();
        let claimed = Arc::new(AtomicBool::new(false));
        let deadline = Instant::now() + self.window;
        let store = Arc::clone(&self.store);
        let task_claim = Arc::clone(&claimed);
        let target = id.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep_until(deadline) => {}
                _ = cancelled => return DeleteOutcome::Cancelled,
            }
            let mut guard = store.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            if task_claim.swap(true, Ordering::AcqRel) {
                return DeleteOutcome::Cancelled;
            }
            match guard.delete(&target) {
                Ok(entry) => DeleteOutcome::Deleted(entry),
                Err(err) => DeleteOutcome::Failed(err),
            }
        });

        debug!(id = %id, window_ms = self.window.as_millis() as u64, "Scheduled deletion");
        self.pending = Some(Pending {
            id,
            claimed,
            cancel,
            handle,
        });
    }

    /// Cancel the pending deletion.
    ///
    /// Returns `true` if the deletion was cancelled, in which case the store
    /// is never touched. Returns `false` if nothing was pending or the task
    /// had already committed to deleting; the deletion then stays pending
    /// and `wait` reports how it ended.
    pub fn undo(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        if pending.claimed.swap(true, Ordering::AcqRel) {
            self.pending = Some(pending);
            return false;
        }
        let _ = pending.cancel.send(());
        debug!(id = %pending.id, "Undid scheduled deletion");
        true
    }

    /// Wait for the pending deletion to resolve.
    ///
    /// Returns `None` when nothing is pending.
    pub async fn wait(&mut self) -> Option<DeleteOutcome> {
        let Pending { cancel, handle, .. } = self.pending.take()?;
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(err) => DeleteOutcome::Failed(TravelogError::Other(format!(
                "Deletion task failed: {}",
                err
            ))),
        };
        drop(cancel);
        Some(outcome)
    }
}

impl Drop for DeferredDelete {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.claimed.store(true, Ordering::Release);
            let _ = pending.cancel.send(());
        }
    }
}
