//! Note detail presenter.
//!
//! # Responsibility
//! - Show one note as it was when the screen opened.
//! - Forward delete and share actions.
//!
//! # Invariants
//! - The displayed note is captured once at construction and never refreshed.

use crate::model::note::{Note, NoteId};
use crate::presenter::card::format_timestamp;
use crate::repo::note_repo::NoteRepository;
use log::debug;
use std::sync::Arc;

/// Message shown when the requested note does not exist.
pub const NOT_FOUND_MESSAGE: &str = "Note not found";

/// Display state of the detail screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailState {
    /// `None` renders the not-found state.
    pub note: Option<Note>,
}

impl DetailState {
    /// Label such as `Updated Mar 4, 2024 9:05 PM`.
    pub fn updated_label(&self) -> Option<String> {
        self.note
            .as_ref()
            .map(|note| format!("Updated {}", format_timestamp(note.updated_at)))
    }
}

/// Presenter for the read-only note screen.
pub struct DetailPresenter {
    repo: Arc<dyn NoteRepository>,
    id: NoteId,
    state: DetailState,
}

impl DetailPresenter {
    pub fn new(repo: Arc<dyn NoteRepository>, id: NoteId) -> Self {
        let state = DetailState { note: repo.get(id) };
        Self { repo, id, state }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn delete(&mut self) -> bool {
        self.repo.delete(self.id)
    }

    /// Placeholder for handing the note to the platform share sheet.
    pub fn share(&self) {
        debug!(
            "event=note_share module=presenter status=noop note_id={}",
            self.id
        );
    }
}
