//! Store events and the toast notifications rendered from them.
//!
//! The store publishes a `StoreEvent` after every successful mutation.
//! Sinks are not on the critical path: a sink error is logged by the store
//! and never undoes the mutation.
//!
//! A toast moves `Pending -> Visible -> Dismissed`. Visible toasts carry a
//! deadline; they leave the active set when the deadline passes or the
//! user dismisses them. Dismissed toasts are dropped and cannot be observed.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};

use crate::error::Result;
use crate::storage::EntryId;

/// Semantic change reported by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Created { id: EntryId, destination: String },
    Updated { id: EntryId, destination: String },
    Deleted { id: EntryId, destination: String },
}

impl StoreEvent {
    pub fn id(&self) -> &EntryId {
        match self {
            Self::Created { id, .. } | Self::Updated { id, .. } | Self::Deleted { id, .. } => id,
        }
    }

    pub fn destination(&self) -> &str {
        match self {
            Self::Created { destination, .. }
            | Self::Updated { destination, .. }
            | Self::Deleted { destination, .. } => destination,
        }
    }

    /// Short machine name: `created`, `updated` or `deleted`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::Updated { .. } => "updated",
            Self::Deleted { .. } => "deleted",
        }
    }

    /// User-facing message for this event.
    pub fn toast(&self) -> ToastMessage {
        let destination = if self.destination().is_empty() {
            "the destination"
        } else {
            self.destination()
        };
        match self {
            Self::Created { .. } => ToastMessage::new(
                "Trip added",
                format!("Your trip to {} has been added.", destination),
            ),
            Self::Updated { .. } => ToastMessage::new(
                "Trip updated",
                format!("Your trip to {} has been updated.", destination),
            ),
            Self::Deleted { .. } => ToastMessage::new(
                "Trip deleted",
                format!("Your trip to {} has been deleted.", destination),
            )
            .destructive(),
        }
    }
}

/// Receiver of store events.
pub trait EventSink: Send + Sync {
    /// Handle one event.
    ///
    /// # Errors
    ///
    /// Any error is logged by the publisher and otherwise ignored.
    fn publish(&self, event: &StoreEvent) -> Result<()>;
}

impl<T: EventSink + ?Sized> EventSink for Arc<T> {
    fn publish(&self, event: &StoreEvent) -> Result<()> {
        (**self).publish(event)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl ToastMessage {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(mut self) -> Self {
        self.variant = ToastVariant::Destructive;
        self
    }
}

/// Observable toast states. `Dismissed` is terminal and never observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastState {
    Pending,
    Visible,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: ToastMessage,
    pub state: ToastState,
    /// Set when the toast becomes visible
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

/// Active toast set fed by store events.
#[derive(Debug)]
pub struct ToastCenter {
    ttl: Duration,
    max_visible: usize,
    queue: Mutex<ToastQueue>,
}

impl Default for ToastCenter {
    fn default() -> Self {
        Self::new(Duration::seconds(Self::DEFAULT_TTL_SECS))
    }
}

impl ToastCenter {
    pub const DEFAULT_TTL_SECS: i64 = 5;
    pub const DEFAULT_MAX_VISIBLE: usize = 3;

    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            max_visible: Self::DEFAULT_MAX_VISIBLE,
            queue: Mutex::new(ToastQueue::default()),
        }
    }

    /// Cap the number of simultaneously visible toasts (minimum 1).
    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible.max(1);
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, ToastQueue> {
        self.queue.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Queue a toast in the pending state and return its id.
    pub fn push(&self, message: ToastMessage) -> u64 {
        let mut queue = self.lock();
        queue.next_id += 1;
        let id = queue.next_id;
        queue.toasts.push(Toast {
            id,
            message,
            state: ToastState::Pending,
            expires_at: None,
        });
        id
    }

    /// Make every pending toast visible, returning the newly shown ones.
    ///
    /// When more than `max_visible` toasts would be visible, the oldest
    /// visible toasts are dismissed first.
    pub fn present(&self, now: DateTime<Utc>) -> Vec<Toast> {
        let mut queue = self.lock();
        let deadline = now + self.ttl;
        let mut shown = Vec::new();
        for toast in queue
            .toasts
            .iter_mut()
            .filter(|t| t.state == ToastState::Pending)
        {
            toast.state = ToastState::Visible;
            toast.expires_at = Some(deadline);
            shown.push(toast.clone());
        }

        let visible = queue
            .toasts
            .iter()
            .filter(|t| t.state == ToastState::Visible)
            .count();
        let mut overflow = visible.saturating_sub(self.max_visible);
        queue.toasts.retain(|t| {
            if overflow > 0 && t.state == ToastState::Visible {
                overflow -= 1;
                false
            } else {
                true
            }
        });
        let remaining: Vec<u64> = queue.toasts.iter().map(|t| t.id).collect();
        shown.retain(|t| remaining.contains(&t.id));
        shown
    }

    /// Dismiss a toast by id. Returns `false` if it was not active.
    pub fn dismiss(&self, id: u64) -> bool {
        let mut queue = self.lock();
        let before = queue.toasts.len();
        queue.toasts.retain(|t| t.id != id);
        queue.toasts.len() != before
    }

    /// Remove visible toasts whose deadline has passed.
    pub fn expire(&self, now: DateTime<Utc>) -> Vec<Toast> {
        let mut queue = self.lock();
        let (expired, kept): (Vec<Toast>, Vec<Toast>) =
            queue.toasts.drain(..).partition(|t| {
                t.state == ToastState::Visible && t.expires_at.is_some_and(|at| at <= now)
            });
        queue.toasts = kept;
        expired
    }

    /// Snapshot of the active set, oldest first.
    pub fn active(&self) -> Vec<Toast> {
        self.lock().toasts.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().toasts.is_empty()
    }
}

impl EventSink for ToastCenter {
    fn publish(&self, event: &StoreEvent) -> Result<()> {
        self.push(event.toast());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn created(destination: &str) -> StoreEvent {
        StoreEvent::Created {
            id: EntryId::from("1"),
            destination: destination.to_string(),
        }
    }

    #[test]
    fn test_event_messages() {
        let added = created("Paris").toast();
        assert_eq!(added.title, "Trip added");
        assert_eq!(added.description, "Your trip to Paris has been added.");
        assert_eq!(added.variant, ToastVariant::Default);

        let deleted = StoreEvent::Deleted {
            id: EntryId::from("1"),
            destination: String::new(),
        }
        .toast();
        assert_eq!(deleted.description, "Your trip to the destination has been deleted.");
        assert_eq!(deleted.variant, ToastVariant::Destructive);
    }

    #[test]
    fn test_pending_visible_expired() {
        let center = ToastCenter::new(Duration::seconds(5));
        let now = Utc::now();
        center.publish(&created("Rome")).unwrap();

        assert_eq!(center.active()[0].state, ToastState::Pending);

        let shown = center.present(now);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].state, ToastState::Visible);
        assert_eq!(shown[0].expires_at, Some(now + Duration::seconds(5)));

        assert!(center.expire(now + Duration::seconds(4)).is_empty());
        assert_eq!(center.expire(now + Duration::seconds(5)).len(), 1);
        assert!(center.is_empty());
    }

    #[test]
    fn test_pending_toasts_do_not_expire() {
        let center = ToastCenter::default();
        center.push(ToastMessage::new("t", "d"));
        assert!(center.expire(Utc::now() + Duration::days(1)).is_empty());
        assert_eq!(center.active().len(), 1);
    }

    #[test]
    fn test_explicit_dismiss() {
        let center = ToastCenter::default();
        let id = center.push(ToastMessage::new("t", "d"));
        center.present(Utc::now());

        assert!(center.dismiss(id));
        assert!(!center.dismiss(id));
        assert!(center.is_empty());
    }

    #[test]
    fn test_visible_limit_drops_oldest() {
        let center = ToastCenter::default().with_max_visible(1);
        let first = center.push(ToastMessage::new("first", ""));
        let second = center.push(ToastMessage::new("second", ""));

        let shown = center.present(Utc::now());

        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, second);
        assert!(!center.active().iter().any(|t| t.id == first));
    }
}
