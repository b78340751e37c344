//! The entry store: authoritative collection of trips with CRUD.
//!
//! Every mutation builds a new collection, swaps it in, rewrites the whole
//! mirror and then publishes a `StoreEvent`. Observers may compare
//! `snapshot()` values with `Arc::ptr_eq` or watch `revision()` to detect
//! changes.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::error::{Result, TravelogError};
use crate::notify::{EventSink, StoreEvent};
use crate::storage::{decode_entries, encode_entries, EntryDraft, EntryId, MirrorStore, TravelEntry};

pub struct EntryStore {
    entries: Arc<Vec<TravelEntry>>,
    revision: u64,
    mirror: Box<dyn MirrorStore>,
    sinks: Vec<Box<dyn EventSink>>,
    last_persist_error: Option<String>,
}

impl std::fmt::Debug for EntryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryStore")
            .field("entries", &self.entries.len())
            .field("revision", &self.revision)
            .field("mirror", &self.mirror.describe())
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl EntryStore {
    /// Build a store from whatever the mirror holds.
    ///
    /// Never fails: an absent, unreadable or malformed mirror yields an
    /// empty collection and a logged warning.
    pub fn load(mirror: impl MirrorStore + 'static) -> Self {
        let entries = Self::read_mirror(&mirror);
        debug!(count = entries.len(), mirror = %mirror.describe(), "Loaded travel entries");
        Self {
            entries: Arc::new(entries),
            revision: 0,
            mirror: Box::new(mirror),
            sinks: Vec::new(),
            last_persist_error: None,
        }
    }

    fn read_mirror(mirror: &dyn MirrorStore) -> Vec<TravelEntry> {
        let blob = match mirror.read() {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(error = %err, "Failed to read travel log mirror; starting empty");
                return Vec::new();
            }
        };

        let entries = match decode_entries(&blob) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(error = %err, "Failed to parse saved entries; starting empty");
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        entries
            .into_iter()
            .filter(|entry| {
                let fresh = seen.insert(entry.id.clone());
                if !fresh {
                    warn!(id = %entry.id, "Dropping entry with duplicate id from mirror");
                }
                fresh
            })
            .collect()
    }

    /// Register a receiver for store events.
    pub fn subscribe(&mut self, sink: impl EventSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Create a new entry from a draft.
    ///
    /// # Errors
    ///
    /// Returns `TravelogError::Validation` if the draft is incomplete or
    /// inconsistent; the collection is left unchanged.
    pub fn add(&mut self, draft: EntryDraft) -> Result<TravelEntry> {
        let draft = validate_draft(draft)?;

        let mut id = EntryId::generate();
        while self.get(&id).is_some() {
            id = EntryId::generate();
        }
        let entry = TravelEntry::from_draft(id, draft, Utc::now());

        let mut next = Vec::with_capacity(self.entries.len() + 1);
        next.extend(self.entries.iter().cloned());
        next.push(entry.clone());

        debug!(id = %entry.id, destination = %entry.destination, "Added entry");
        self.commit(
            next,
            StoreEvent::Created {
                id: entry.id.clone(),
                destination: entry.destination.clone(),
            },
        );
        Ok(entry)
    }

    /// Replace an existing entry's editable fields.
    ///
    /// `id` and `created_at` are taken from the stored entry regardless of
    /// what the argument carries; `updated_at` is stamped.
    ///
    /// # Errors
    ///
    /// Returns `TravelogError::NotFound` if no entry has `entry.id`, or
    /// `TravelogError::Validation` if the new values are invalid. Either way
    /// the collection is unchanged.
    pub fn update(&mut self, entry: TravelEntry) -> Result<TravelEntry> {
        let index = self.position(&entry.id)?;
        let draft = validate_draft(entry.to_draft())?;

        let mut updated = self.entries[index].clone();
        updated.apply_draft(draft);
        updated.updated_at = Some(Utc::now());

        let mut next = (*self.entries).clone();
        next[index] = updated.clone();

        debug!(id = %updated.id, "Updated entry");
        self.commit(
            next,
            StoreEvent::Updated {
                id: updated.id.clone(),
                destination: updated.destination.clone(),
            },
        );
        Ok(updated)
    }

    /// Remove an entry, returning it.
    ///
    /// # Errors
    ///
    /// Returns `TravelogError::NotFound` if no entry has `id`; the
    /// collection is unchanged, so repeating a delete has no further effect.
    pub fn delete(&mut self, id: &EntryId) -> Result<TravelEntry> {
        let index = self.position(id)?;
        let removed = self.entries[index].clone();

        let next: Vec<TravelEntry> = self
            .entries
            .iter()
            .filter(|entry| &entry.id != id)
            .cloned()
            .collect();

        debug!(id = %removed.id, "Deleted entry");
        self.commit(
            next,
            StoreEvent::Deleted {
                id: removed.id.clone(),
                destination: removed.destination.clone(),
            },
        );
        Ok(removed)
    }

    /// Entries ordered by start date, most recent first.
    ///
    /// The sort is stable, so trips starting on the same day keep their
    /// insertion order. Stored order is not affected.
    pub fn list(&self) -> Vec<TravelEntry> {
        let mut entries = self.entries.to_vec();
        entries.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        entries
    }

    pub fn get(&self, id: &EntryId) -> Option<&TravelEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// Resolve a full id or a unique id prefix.
    ///
    /// # Errors
    ///
    /// Returns `TravelogError::NotFound` when nothing matches and
    /// `TravelogError::InvalidInput` when a prefix is ambiguous.
    pub fn resolve_id(&self, value: &str) -> Result<EntryId> {
        let value = value.trim();
        if value.is_empty() {
            return Err(TravelogError::InvalidInput("Entry ID is empty".to_string()));
        }
        if let Some(entry) = self.entries.iter().find(|e| e.id.as_str() == value) {
            return Ok(entry.id.clone());
        }

        let mut matches = self
            .entries
            .iter()
            .filter(|entry| entry.id.as_str().starts_with(value));
        match (matches.next(), matches.next()) {
            (Some(entry), None) => Ok(entry.id.clone()),
            (Some(_), Some(_)) => Err(TravelogError::InvalidInput(format!(
                "Entry ID prefix \"{}\" is ambiguous",
                value
            ))),
            (None, _) => Err(TravelogError::NotFound(format!("entry {}", value))),
        }
    }

    /// The current collection in stored (insertion) order.
    pub fn snapshot(&self) -> Arc<Vec<TravelEntry>> {
        Arc::clone(&self.entries)
    }

    /// Number of mutations applied since load.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dashboard headline for the current collection.
    pub fn summary(&self) -> String {
        match self.entries.len() {
            0 => "Start by adding your first travel destination!".to_string(),
            1 => "You have 1 travel entry.".to_string(),
            n => format!("You have {} travel entries.", n),
        }
    }

    /// Error from the most recent mirror write, if it failed.
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    fn position(&self, id: &EntryId) -> Result<usize> {
        self.entries
            .iter()
            .position(|entry| &entry.id == id)
            .ok_or_else(|| TravelogError::NotFound(format!("entry {}", id)))
    }

    fn commit(&mut self, next: Vec<TravelEntry>, event: StoreEvent) {
        self.entries = Arc::new(next);
        self.revision += 1;
        self.persist();
        self.emit(&event);
    }

    /// Rewrite the mirror with the whole collection.
    ///
    /// Failures are logged and remembered; the in-memory collection stays
    /// authoritative.
    fn persist(&mut self) {
        let result = encode_entries(&self.entries).and_then(|blob| self.mirror.write(&blob));
        match result {
            Ok(()) => self.last_persist_error = None,
            Err(err) => {
                warn!(error = %err, mirror = %self.mirror.describe(), "Failed to write travel log mirror");
                self.last_persist_error = Some(err.to_string());
            }
        }
    }

    fn emit(&self, event: &StoreEvent) {
        for sink in &self.sinks {
            if let Err(err) = sink.publish(event) {
                warn!(error = %err, event = event.kind(), "Event sink failed");
            }
        }
    }
}

/// Check a draft and normalize it for storage.
fn validate_draft(mut draft: EntryDraft) -> Result<EntryDraft> {
    let destination = draft.destination.trim();
    if destination.is_empty() {
        return Err(TravelogError::Validation(
            "Destination is required".to_string(),
        ));
    }
    draft.destination = destination.to_string();

    if draft.end_date < draft.start_date {
        return Err(TravelogError::Validation(format!(
            "End date {} is before start date {}",
            draft.end_date, draft.start_date
        )));
    }

    draft.coordinates = match draft.coordinates {
        Some(coords) if coords.is_unset() => None,
        Some(coords) => {
            coords.validate()?;
            Some(coords)
        }
        None => None,
    };

    draft.notes = draft.notes.filter(|notes| !notes.trim().is_empty());

    if let Some(position) = draft.images.iter().position(|img| !img.starts_with("data:")) {
        return Err(TravelogError::Validation(format!(
            "Image {} is not a data URI",
            position + 1
        )));
    }

    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ToastCenter;
    use crate::storage::{Coordinates, MemoryMirror};
    use chrono::NaiveDate;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn draft(destination: &str, start: &str) -> EntryDraft {
        EntryDraft::new(destination, date(start), date(start))
    }

    struct FailingSink;

    impl EventSink for FailingSink {
        fn publish(&self, _event: &StoreEvent) -> Result<()> {
            Err(TravelogError::Other("sink offline".to_string()))
        }
    }

    #[test]
    fn test_add_rejects_blank_destination() {
        let mut store = EntryStore::load(MemoryMirror::new());
        let err = store.add(draft("   ", "2024-01-01")).unwrap_err();

        assert!(err.is_validation());
        assert!(store.is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_add_rejects_inverted_range() {
        let mut store = EntryStore::load(MemoryMirror::new());
        let inverted = EntryDraft::new("Kyoto", date("2024-04-10"), date("2024-04-01"));
        assert!(store.add(inverted).unwrap_err().is_validation());
    }

    #[test]
    fn test_add_rejects_non_data_uri_image() {
        let mut store = EntryStore::load(MemoryMirror::new());
        let bad = draft("Kyoto", "2024-04-01").with_image("/tmp/photo.jpg");
        assert!(store.add(bad).unwrap_err().is_validation());
    }

    #[test]
    fn test_add_normalizes_fields() {
        let mut store = EntryStore::load(MemoryMirror::new());
        let entry = store
            .add(
                draft("  Nairobi ", "2024-01-01")
                    .with_notes("   ")
                    .with_coordinates(Coordinates::UNSET),
            )
            .unwrap();

        assert_eq!(entry.destination, "Nairobi");
        assert_eq!(entry.notes, None);
        assert_eq!(entry.coordinates, None);
        assert_eq!(entry.updated_at, None);
    }

    #[test]
    fn test_mutation_replaces_snapshot() {
        let mut store = EntryStore::load(MemoryMirror::new());
        let before = store.snapshot();
        store.add(draft("Cairo", "2024-01-01")).unwrap();
        let after = store.snapshot();

        assert!(!Arc::ptr_eq(&before, &after));
        assert!(before.is_empty());
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_update_preserves_identity_fields() {
        let mut store = EntryStore::load(MemoryMirror::new());
        let entry = store.add(draft("Lima", "2024-01-01")).unwrap();

        let mut edited = entry.clone();
        edited.created_at = Utc::now() + chrono::Duration::days(3);
        edited.destination = "Cusco".to_string();
        let updated = store.update(edited).unwrap();

        assert_eq!(updated.id, entry.id);
        assert_eq!(updated.created_at, entry.created_at);
        assert_eq!(updated.destination, "Cusco");
        assert!(updated.updated_at.is_some());
    }

    #[test]
    fn test_failed_validation_on_update_leaves_collection() {
        let mut store = EntryStore::load(MemoryMirror::new());
        let entry = store.add(draft("Lima", "2024-01-01")).unwrap();

        let mut edited = entry.clone();
        edited.destination.clear();
        assert!(store.update(edited).unwrap_err().is_validation());
        assert_eq!(store.get(&entry.id).unwrap().destination, "Lima");
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_persist_failure_keeps_memory_authoritative() {
        let mirror = Arc::new(MemoryMirror::new());
        let mut store = EntryStore::load(Arc::clone(&mirror));
        mirror.set_fail_writes(true);

        let entry = store.add(draft("Hanoi", "2024-01-01")).unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.get(&entry.id).is_some());
        assert!(store.last_persist_error().is_some());
        assert_eq!(mirror.blob(), None);

        mirror.set_fail_writes(false);
        store.delete(&entry.id).unwrap();
        assert!(store.last_persist_error().is_none());
        assert_eq!(mirror.blob().as_deref(), Some("[]"));
    }

    #[test]
    fn test_every_mutation_rewrites_mirror() {
        let mirror = Arc::new(MemoryMirror::new());
        let mut store = EntryStore::load(Arc::clone(&mirror));

        let entry = store.add(draft("Seoul", "2024-01-01")).unwrap();
        store.update(entry.clone()).unwrap();
        store.delete(&entry.id).unwrap();
        let _ = store.delete(&entry.id);

        assert_eq!(mirror.write_count(), 3);
    }

    #[test]
    fn test_sink_failure_does_not_block_mutation() {
        let mut store = EntryStore::load(MemoryMirror::new());
        store.subscribe(FailingSink);
        let toasts = Arc::new(ToastCenter::default());
        store.subscribe(Arc::clone(&toasts));

        store.add(draft("Accra", "2024-01-01")).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(toasts.active().len(), 1);
    }

    #[test]
    fn test_delete_event_carries_destination() {
        let mut store = EntryStore::load(MemoryMirror::new());
        let toasts = Arc::new(ToastCenter::default());
        store.subscribe(Arc::clone(&toasts));

        let entry = store.add(draft("Bogota", "2024-01-01")).unwrap();
        store.delete(&entry.id).unwrap();

        let active = toasts.active();
        assert_eq!(active.len(), 2);
        assert_eq!(active[1].message.title, "Trip deleted");
        assert!(active[1].message.description.contains("Bogota"));
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let blob = r#"[
            {"id":"1","destination":"A","startDate":"2024-01-01","endDate":"2024-01-01","createdAt":"2024-01-01T00:00:00Z"},
            {"id":"1","destination":"B","startDate":"2024-01-01","endDate":"2024-01-01","createdAt":"2024-01-01T00:00:00Z"}
        ]"#;
        let store = EntryStore::load(MemoryMirror::with_blob(blob));

        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].destination, "A");
    }

    #[test]
    fn test_load_corrupt_mirror_is_empty() {
        let store = EntryStore::load(MemoryMirror::with_blob("{not json"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_resolve_id_prefix() {
        let blob = r#"[
            {"id":"abc123","destination":"A","startDate":"2024-01-01","endDate":"2024-01-01","createdAt":"2024-01-01T00:00:00Z"},
            {"id":"abd456","destination":"B","startDate":"2024-01-01","endDate":"2024-01-01","createdAt":"2024-01-01T00:00:00Z"}
        ]"#;
        let store = EntryStore::load(MemoryMirror::with_blob(blob));

        assert_eq!(store.resolve_id("abc").unwrap().as_str(), "abc123");
        assert!(matches!(
            store.resolve_id("ab"),
            Err(TravelogError::InvalidInput(_))
        ));
        assert!(store.resolve_id("zzz").unwrap_err().is_not_found());
    }

    #[test]
    fn test_summary() {
        let mut store = EntryStore::load(MemoryMirror::new());
        assert_eq!(store.summary(), "Start by adding your first travel destination!");
        store.add(draft("Doha", "2024-01-01")).unwrap();
        assert_eq!(store.summary(), "You have 1 travel entry.");
        store.add(draft("Muscat", "2024-01-02")).unwrap();
        assert_eq!(store.summary(), "You have 2 travel entries.");
    }
}
