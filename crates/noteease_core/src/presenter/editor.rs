//! Note editor presenter.
//!
//! # Responsibility
//! - Hold the local draft for creating or editing one note.
//! - Validate and persist the draft on save.
//!
//! # Invariants
//! - A save with a blank title writes nothing.
//! - Persisted title and content are trimmed.
//! - Delete is only available for a draft bound to an existing note.

use crate::model::note::{NoteDraft, NoteId};
use crate::repo::note_repo::NoteRepository;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use uuid::Uuid;

/// Field message shown under the title input after a refused save.
pub const TITLE_REQUIRED_MESSAGE: &str = "Title is required";

/// Save refusal reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorError {
    /// Title is empty or whitespace-only.
    BlankTitle,
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "{TITLE_REQUIRED_MESSAGE}"),
        }
    }
}

impl Error for EditorError {}

/// Display state of the editor screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    /// Bound note, `None` while creating.
    pub id: Option<NoteId>,
    pub title: String,
    pub content: String,
    /// Field-level validation message for the title input.
    pub title_error: Option<String>,
}

/// Presenter for the create/edit screen.
pub struct EditorPresenter {
    repo: Arc<dyn NoteRepository>,
    state: EditorState,
}

impl EditorPresenter {
    /// Creates an editor, hydrated from `note_id` when it names a stored note.
    ///
    /// An unknown id yields a blank draft, same as creating.
    pub fn new(repo: Arc<dyn NoteRepository>, note_id: Option<NoteId>) -> Self {
        let state = note_id
            .and_then(|id| repo.get(id))
            .map(|note| EditorState {
                id: Some(note.id),
                title: note.title,
                content: note.content,
                title_error: None,
            })
            .unwrap_or_default();
        Self { repo, state }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn screen_title(&self) -> &'static str {
        if self.state.id.is_some() {
            "Edit Note"
        } else {
            "New Note"
        }
    }

    pub fn can_delete(&self) -> bool {
        self.state.id.is_some()
    }

    pub fn on_title_change(&mut self, title: impl Into<String>) {
        self.state.title = title.into();
        self.state.title_error = None;
    }

    pub fn on_content_change(&mut self, content: impl Into<String>) {
        self.state.content = content.into();
    }

    /// Validates and persists the draft, returning the saved note id.
    ///
    /// # Errors
    /// - `EditorError::BlankTitle` when the title is blank; the store is untouched
    ///   and `title_error` is set.
    pub fn save(&mut self) -> Result<NoteId, EditorError> {
        let title = self.state.title.trim();
        if title.is_empty() {
            self.state.title_error = Some(TITLE_REQUIRED_MESSAGE.to_string());
            warn!("event=note_save module=presenter status=error reason=blank_title");
            return Err(EditorError::BlankTitle);
        }

        let id = self.state.id.unwrap_or_else(Uuid::new_v4);
        let draft = NoteDraft::with_id(id, title, self.state.content.trim());
        let saved = self.repo.upsert(&draft);
        self.state.id = Some(saved);
        self.state.title_error = None;
        info!(
            "event=note_save module=presenter status=ok note_id={}",
            saved
        );
        Ok(saved)
    }

    /// Deletes the bound note.
    ///
    /// Returns `false` without touching the repository while creating.
    pub fn delete(&mut self) -> bool {
        match self.state.id {
            Some(id) => self.repo.delete(id),
            None => false,
        }
    }
}
