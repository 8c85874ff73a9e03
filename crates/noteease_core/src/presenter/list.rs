//! Note list presenter.
//!
//! # Responsibility
//! - Keep the free-text query and the filtered note list in sync with the store.
//!
//! # Invariants
//! - `state().notes` is always a subset of the latest seen collection, in
//!   collection order.
//! - A blank query yields the full collection.
//! - Filtering is recomputed synchronously on every emission and query change.

use crate::model::note::Note;
use crate::presenter::card::NoteCard;
use crate::repo::note_repo::NoteRepository;
use crate::store::note_store::NoteSnapshot;
use log::debug;
use std::sync::Arc;
use tokio::sync::watch;

/// Hint shown when the store holds no notes at all.
pub const EMPTY_LIST_MESSAGE: &str = "No notes yet.\nTap + to create your first note.";

/// Display state of the list screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub query: String,
    /// Notes matching `query`, most recently updated first.
    pub notes: Vec<Note>,
    pub is_refreshing: bool,
}

impl ListState {
    pub fn cards(&self) -> Vec<NoteCard> {
        self.notes.iter().map(NoteCard::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Presenter for the note list screen.
pub struct ListPresenter {
    repo: Arc<dyn NoteRepository>,
    notes: watch::Receiver<NoteSnapshot>,
    latest: NoteSnapshot,
    state: ListState,
}

impl ListPresenter {
    /// Subscribes to `repo` and derives the initial state with an empty query.
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        let mut notes = repo.notes();
        let latest = Arc::clone(&notes.borrow_and_update());
        let mut presenter = Self {
            repo,
            notes,
            latest,
            state: ListState::default(),
        };
        presenter.recompute();
        presenter
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Full collection as last seen from the store, unfiltered.
    pub fn all_notes(&self) -> &[Note] {
        &self.latest
    }

    pub fn on_query_change(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
        self.recompute();
    }

    /// Asks the repository to re-publish and applies the result.
    pub fn refresh(&mut self) {
        self.state.is_refreshing = true;
        self.repo.refresh();
        self.state.is_refreshing = false;
        self.poll();
    }

    /// Applies a pending store emission, if any.
    ///
    /// Returns whether the state was recomputed.
    pub fn poll(&mut self) -> bool {
        match self.notes.has_changed() {
            Ok(true) => {
                self.latest = Arc::clone(&self.notes.borrow_and_update());
                self.recompute();
                true
            }
            _ => false,
        }
    }

    /// Waits for the next store emission and applies it.
    ///
    /// Returns `false` once the store can no longer publish.
    pub async fn changed(&mut self) -> bool {
        if self.notes.changed().await.is_err() {
            return false;
        }
        self.latest = Arc::clone(&self.notes.borrow_and_update());
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        self.state.notes = filter_notes(&self.latest, &self.state.query);
        debug!(
            "event=list_recompute module=presenter status=ok total={} visible={}",
            self.latest.len(),
            self.state.notes.len()
        );
    }
}

/// Returns the notes whose title or content contains `query`, ignoring case.
pub fn filter_notes(notes: &[Note], query: &str) -> Vec<Note> {
    if query.trim().is_empty() {
        return notes.to_vec();
    }
    notes
        .iter()
        .filter(|note| note.matches(query))
        .cloned()
        .collect()
}
