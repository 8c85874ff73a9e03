//! Note repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide typed get/upsert/delete/list-stream APIs over the note store.
//! - Own timestamp assignment for writes.
//!
//! # Invariants
//! - `created_at` is set once, on the first write of an id.
//! - `updated_at` is refreshed on every write and never moves backwards.
//! - Deleting an absent id changes nothing.

use crate::clock::{Clock, SystemClock};
use crate::model::note::{Note, NoteDraft, NoteId};
use crate::store::note_store::{NoteSnapshot, NoteStore};
use log::info;
use std::sync::Arc;
use tokio::sync::watch;
use uuid::Uuid;

/// Repository interface for note CRUD operations.
pub trait NoteRepository: Send + Sync {
    /// Gets one note by id. Misses return `None`.
    fn get(&self, id: NoteId) -> Option<Note>;
    /// Inserts or replaces a note and returns the id written.
    ///
    /// A draft without a usable id is stored under a freshly generated one.
    fn upsert(&self, draft: &NoteDraft) -> NoteId;
    /// Removes a note. Returns whether anything was removed.
    fn delete(&self, id: NoteId) -> bool;
    /// Subscribes to the ordered note collection.
    ///
    /// The receiver holds the current collection from the start.
    fn notes(&self) -> watch::Receiver<NoteSnapshot>;
    /// Re-publishes the current collection to subscribers.
    fn refresh(&self);

    /// Returns the current ordered collection.
    fn list(&self) -> NoteSnapshot {
        let notes = self.notes();
        let snapshot = Arc::clone(&notes.borrow());
        snapshot
    }
}

/// Store-backed repository living for the process lifetime.
#[derive(Clone)]
pub struct InMemoryNoteRepository {
    store: NoteStore,
    clock: Arc<dyn Clock>,
}

impl InMemoryNoteRepository {
    /// Creates a repository over `store` using wall-clock time.
    pub fn new(store: NoteStore) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Creates a repository with a caller-provided time source.
    pub fn with_clock(store: NoteStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Returns the underlying store handle.
    pub fn store(&self) -> &NoteStore {
        &self.store
    }
}

impl NoteRepository for InMemoryNoteRepository {
    fn get(&self, id: NoteId) -> Option<Note> {
        self.store
            .snapshot()
            .iter()
            .find(|note| note.id == id)
            .cloned()
    }

    fn upsert(&self, draft: &NoteDraft) -> NoteId {
        let id = draft.existing_id().unwrap_or_else(Uuid::new_v4);
        let now = self.clock.now_ms();
        let mut created = false;
        let mut updated_at = now;

        let written = self.store.upsert_with(id, |existing| {
            let created_at = match existing {
                Some(previous) => {
                    updated_at = now.max(previous.updated_at);
                    previous.created_at
                }
                None => {
                    created = true;
                    now
                }
            };
            Note {
                id,
                title: draft.title.clone(),
                content: draft.content.clone(),
                created_at,
                updated_at,
            }
        });

        info!(
            "event=note_upsert module=repo status=ok note_id={} created={} updated_at={}",
            written, created, updated_at
        );
        written
    }

    fn delete(&self, id: NoteId) -> bool {
        let removed = self.store.remove(id);
        info!(
            "event=note_delete module=repo status=ok note_id={} removed={}",
            id, removed
        );
        removed
    }

    fn notes(&self) -> watch::Receiver<NoteSnapshot> {
        self.store.subscribe()
    }

    fn refresh(&self) {
        self.store.republish();
        info!("event=notes_refresh module=repo status=ok");
    }

    fn list(&self) -> NoteSnapshot {
        self.store.snapshot()
    }
}
