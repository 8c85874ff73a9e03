//! Observable note collection backed by a `tokio::sync::watch` channel.
//!
//! # Responsibility
//! - Provide snapshot reads, change subscriptions and atomic writes over one
//!   ordered `Vec<Note>`.
//!
//! # Invariants
//! - Note ids are unique within the collection.
//! - Every published collection is sorted by `updated_at DESC, id ASC`.
//! - A removal of an absent id publishes nothing.

use crate::model::note::{Note, NoteId};
use log::debug;
use std::cmp::Ordering;
use std::sync::Arc;
use tokio::sync::watch;

/// Immutable view of the collection at one point in time.
pub type NoteSnapshot = Arc<Vec<Note>>;

/// Shared handle to the note collection.
///
/// Clones share the same collection.
#[derive(Debug, Clone)]
pub struct NoteStore {
    sender: Arc<watch::Sender<NoteSnapshot>>,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::with_notes(Vec::new())
    }

    /// Creates a store seeded with `notes`.
    ///
    /// Later entries win when ids repeat.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        let mut unique: Vec<Note> = Vec::with_capacity(notes.len());
        for note in notes {
            unique.retain(|existing| existing.id != note.id);
            unique.push(note);
        }
        sort_notes(&mut unique);
        let (sender, _) = watch::channel(Arc::new(unique));
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Returns the current collection.
    pub fn snapshot(&self) -> NoteSnapshot {
        Arc::clone(&self.sender.borrow())
    }

    /// Subscribes to collection changes.
    ///
    /// The receiver starts out holding the current collection.
    pub fn subscribe(&self) -> watch::Receiver<NoteSnapshot> {
        self.sender.subscribe()
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Atomically replaces the note with `id`, or inserts one if absent.
    ///
    /// `build` receives the current note for `id` and returns its
    /// replacement. It runs under the write, so derived fields such as
    /// timestamps cannot race with another writer. Returns the id written.
    pub fn upsert_with<F>(&self, id: NoteId, build: F) -> NoteId
    where
        F: FnOnce(Option<&Note>) -> Note,
    {
        let mut written = id;
        self.sender.send_modify(|current| {
            let note = build(current.iter().find(|existing| existing.id == id));
            written = note.id;
            let mut next: Vec<Note> = current
                .iter()
                .filter(|existing| existing.id != id && existing.id != note.id)
                .cloned()
                .collect();
            next.push(note);
            sort_notes(&mut next);
            *current = Arc::new(next);
        });

        debug!(
            "event=store_upsert module=store status=ok note_id={} size={}",
            written,
            self.sender.borrow().len()
        );
        written
    }

    /// Atomically removes the note with `id`.
    ///
    /// Returns `false` and publishes nothing when the id is absent.
    pub fn remove(&self, id: NoteId) -> bool {
        let removed = self.sender.send_if_modified(|current| {
            if !current.iter().any(|note| note.id == id) {
                return false;
            }
            let next: Vec<Note> = current.iter().filter(|note| note.id != id).cloned().collect();
            *current = Arc::new(next);
            true
        });
        debug!(
            "event=store_remove module=store status=ok note_id={} removed={}",
            id, removed
        );
        removed
    }

    /// Notifies subscribers with the unchanged collection.
    pub fn republish(&self) {
        self.sender.send_modify(|_| {});
        debug!("event=store_republish module=store status=ok");
    }
}

fn sort_notes(notes: &mut [Note]) {
    notes.sort_by(compare_notes);
}

/// Collection order: most recently updated first, ties by id.
pub fn compare_notes(a: &Note, b: &Note) -> Ordering {
    b.updated_at
        .cmp(&a.updated_at)
        .then_with(|| a.id.cmp(&b.id))
}
